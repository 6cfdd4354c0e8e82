use serde::{Deserialize, Serialize};

/// POST /login answer
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub access_token: String,
    pub token_type: String,
}

/// Error body the backend attaches to non-2xx answers
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ErrorDetail {
    pub detail: String,
}

/// POST /sales/upload and POST /grant-superadmin/{id} both answer with a
/// single human-readable message.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_login_answer() {
        let json = r#"{"message": "Login Successful", "access_token": "abc.def.ghi", "token_type": "bearer"}"#;
        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "abc.def.ghi");
        assert_eq!(token.token_type, "bearer");
    }
}
