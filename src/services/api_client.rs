// ============================================================================
// API CLIENT - the only HTTP layer (stateless)
// ============================================================================
// No business logic here: build the request, attach the bearer token,
// map the response into the error taxonomy. State changes happen in the
// viewmodels.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use thiserror::Error;

use crate::models::{
    DailySalesResponse, ErrorDetail, LocationPerformanceResponse, MessageResponse, Overview,
    RepPerformanceResponse, SaleRecord, SalesPayload, TokenResponse, User, UserPayload,
};
use crate::utils::constants::API_URL;
use crate::utils::storage;

/// Everything a backend call can fail with. `Unauthorized` is the one
/// variant that makes the session invalid; `Forbidden` means the backend
/// rejected a privileged action and must NOT clear the session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected response: {0}")]
    Parse(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{detail}")]
    Backend { status: u16, detail: String },
}

impl ApiError {
    /// The message shown to the user, verbatim from the backend when
    /// one was provided.
    pub fn detail(&self) -> String {
        self.to_string()
    }

    /// True for the 401 class that invalidates the stored token
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}

/// Stateless API client. The token is read from storage per request so a
/// login/logout in another tab is picked up immediately.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: API_URL.to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach `Authorization: Bearer <token>` when a token is stored
    fn authorize(builder: RequestBuilder) -> RequestBuilder {
        match storage::load_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Map a non-2xx response into the taxonomy, preferring the
    /// backend's `{"detail": ...}` payload over the status line.
    async fn error_for(response: Response) -> ApiError {
        let status = response.status();
        let detail = match response.json::<ErrorDetail>().await {
            Ok(body) => body.detail,
            Err(_) => format!("HTTP {} {}", status, response.status_text()),
        };
        match status {
            401 => ApiError::Unauthorized(detail),
            403 => ApiError::Forbidden(detail),
            _ => ApiError::Backend { status, detail },
        }
    }

    async fn parse<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.ok() {
            return Err(Self::error_for(response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Self::authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::parse(response).await
    }

    async fn send_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = Self::authorize(builder)
            .json(body)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::parse(response).await
    }

    // ---- auth -------------------------------------------------------------

    /// Exchange credentials for a bearer token. OAuth2 password flow:
    /// the body is form-encoded, not JSON.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let body = format!(
            "username={}&password={}",
            form_encode(username),
            form_encode(password)
        );
        let response = Request::post(&self.url("/login"))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::parse(response).await
    }

    pub async fn signup(&self, payload: &UserPayload) -> Result<User, ApiError> {
        self.send_json(Request::post(&self.url("/signup")), payload)
            .await
    }

    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get_json("/users/me").await
    }

    // ---- users (privileged) ----------------------------------------------

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("/users/").await
    }

    pub async fn create_user(&self, payload: &UserPayload) -> Result<User, ApiError> {
        self.send_json(Request::post(&self.url("/users/create")), payload)
            .await
    }

    pub async fn grant_superadmin(&self, user_id: i64) -> Result<MessageResponse, ApiError> {
        let path = format!("/grant-superadmin/{}", user_id);
        let response = Self::authorize(Request::post(&self.url(&path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::parse(response).await
    }

    // ---- sales records ----------------------------------------------------

    pub async fn list_sales(&self) -> Result<Vec<SaleRecord>, ApiError> {
        self.get_json("/sales/").await
    }

    pub async fn create_sale(&self, payload: &SalesPayload) -> Result<SaleRecord, ApiError> {
        self.send_json(Request::post(&self.url("/sales/")), payload)
            .await
    }

    pub async fn update_sale(
        &self,
        entry_id: i64,
        payload: &SalesPayload,
    ) -> Result<SaleRecord, ApiError> {
        let path = format!("/sales/{}", entry_id);
        self.send_json(Request::put(&self.url(&path)), payload).await
    }

    /// DELETE answers 204 with no body
    pub async fn delete_sale(&self, entry_id: i64) -> Result<(), ApiError> {
        let path = format!("/sales/{}", entry_id);
        let response = Self::authorize(Request::delete(&self.url(&path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if response.ok() {
            Ok(())
        } else {
            Err(Self::error_for(response).await)
        }
    }

    // ---- analytics ---------------------------------------------------------

    pub async fn sales_overview(&self) -> Result<Overview, ApiError> {
        self.get_json("/sales/overview").await
    }

    pub async fn daily_sales(&self) -> Result<DailySalesResponse, ApiError> {
        self.get_json("/sales/daily").await
    }

    pub async fn rep_performance(&self) -> Result<RepPerformanceResponse, ApiError> {
        self.get_json("/sales/performances").await
    }

    pub async fn location_performance(&self) -> Result<LocationPerformanceResponse, ApiError> {
        self.get_json("/sales/locations").await
    }

    /// Spreadsheet bulk ingestion. Multipart body; the browser sets the
    /// boundary header itself, so no Content-Type here.
    pub async fn upload_sales(&self, file: &web_sys::File) -> Result<MessageResponse, ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Network("could not build multipart form".to_string()))?;
        form.append_with_blob("file", file)
            .map_err(|_| ApiError::Network("could not attach file".to_string()))?;
        let response = Self::authorize(Request::post(&self.url("/sales/upload")))
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::parse(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Percent-encode one form field value (application/x-www-form-urlencoded)
fn form_encode(value: &str) -> String {
    String::from(js_sys::encode_uri_component(value))
}
