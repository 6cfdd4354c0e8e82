use web_sys::{window, Storage};

use crate::utils::constants::TOKEN_STORAGE_KEY;

pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Persist the bearer token. The token is the only value this app stores.
pub fn save_token(token: &str) -> Result<(), String> {
    let storage = local_storage().ok_or("localStorage is not available")?;
    storage
        .set_item(TOKEN_STORAGE_KEY, token)
        .map_err(|_| "failed to write token to localStorage".to_string())
}

pub fn load_token() -> Option<String> {
    let storage = local_storage()?;
    storage.get_item(TOKEN_STORAGE_KEY).ok()?
}

/// Remove the token. Missing storage or a missing key are both fine.
pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_STORAGE_KEY);
    }
}
