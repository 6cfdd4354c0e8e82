use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Identity returned by GET /users/me and the rows of GET /users/
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub is_superadmin: bool,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub role: String,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub last_login: Option<NaiveDateTime>,
}

fn default_active() -> bool {
    true
}

/// Payload for POST /signup and POST /users/create
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_users_me_response() {
        let json = r#"{
            "id": 1,
            "name": "Ana",
            "email": "ana@example.com",
            "is_superadmin": false,
            "is_active": true,
            "role": "admin",
            "created_at": "2025-03-14T09:26:53.589793",
            "last_login": null
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Ana");
        assert!(!user.is_superadmin);
        assert!(user.last_login.is_none());
    }

    #[test]
    fn parses_last_login_when_present() {
        let json = r#"{
            "id": 2,
            "name": "Root",
            "email": "root@example.com",
            "is_superadmin": true,
            "is_active": true,
            "role": "admin",
            "created_at": "2025-01-01T00:00:00",
            "last_login": "2025-08-01T18:04:00"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.is_superadmin);
        assert!(user.last_login.is_some());
    }
}
