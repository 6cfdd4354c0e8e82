// ============================================================================
// SESSION VIEWMODEL - login / logout / identity resolution
// ============================================================================
// Orchestrates the API client, token storage and SessionState. Pure
// state mutation: navigation after login/logout is the caller's job, so
// the lifecycle stays testable without a navigation stack.
// ============================================================================

use crate::models::User;
use crate::services::{ApiClient, ApiError};
use crate::state::SessionState;
use crate::utils::storage;

pub struct SessionViewModel {
    api: ApiClient,
    session: SessionState,
}

impl SessionViewModel {
    pub fn new(session: SessionState) -> Self {
        Self {
            api: ApiClient::new(),
            session,
        }
    }

    /// Runs once per page load. Without a token the session resolves to
    /// anonymous immediately; with one, the backend decides.
    pub async fn bootstrap(&self) {
        match storage::load_token() {
            None => {
                log::info!("🔓 [SESSION] No stored token, starting anonymous");
                self.session.set_loading(false);
            }
            Some(_) => {
                log::info!("🔑 [SESSION] Stored token found, verifying");
                self.fetch_current_user().await;
            }
        }
    }

    /// Resolve the stored token to an identity. Any failure, including
    /// an expired token, drops token and identity together so the UI
    /// can never look authenticated without a backing credential.
    pub async fn fetch_current_user(&self) {
        if !self.session.try_begin_fetch() {
            log::debug!("[SESSION] Identity fetch already in flight, skipping");
            return;
        }
        match self.api.current_user().await {
            // A logout can land while the request is in flight; without
            // a token the identity must stay absent.
            Ok(user) if storage::load_token().is_some() => {
                log::info!("✅ [SESSION] Authenticated as user #{}", user.id);
                self.session.set_user(Some(user));
                self.session.set_loading(false);
            }
            Ok(_) => {
                log::debug!("[SESSION] Identity arrived after logout, dropped");
                self.session.clear();
            }
            Err(e) => {
                log::warn!("⚠️ [SESSION] Identity fetch failed: {}", e);
                self.drop_session();
            }
        }
        self.session.finish_fetch();
    }

    /// Exchange credentials for a token, then resolve the identity. On
    /// failure the state is untouched (still anonymous) and the
    /// backend's message is returned for the form to display.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let token = self.api.login(email, password).await?;
        storage::save_token(&token.access_token).map_err(ApiError::Network)?;
        self.fetch_current_user().await;
        self.session
            .get_user()
            .ok_or_else(|| ApiError::Unauthorized("Session could not be established".to_string()))
    }

    /// Clears the token and the identity. Never fails, safe to repeat.
    pub fn logout(&self) {
        log::info!("👋 [SESSION] Logged out");
        self.drop_session();
    }

    /// A 401 from any endpoint lands here: same cleanup as logout, the
    /// caller then redirects to the login screen.
    pub fn expire(&self) {
        log::warn!("⚠️ [SESSION] Token rejected by the backend, clearing session");
        self.drop_session();
    }

    // Token and identity always move together
    fn drop_session(&self) {
        storage::clear_token();
        self.session.clear();
    }
}
