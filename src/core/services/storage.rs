use web_sys::Storage;

/// localStorage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

// Read the raw stored token, valid or not
pub fn read_token() -> Option<String> {
    local_storage()?
        .get_item(TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|t| !t.is_empty())
}

// Persist the token after a successful login
pub fn write_token(token: &str) {
    match local_storage() {
        Some(storage) => {
            if storage.set_item(TOKEN_KEY, token).is_err() {
                log::error!("Failed to persist session token");
            }
        }
        None => log::error!("localStorage is not available; session will not survive a reload"),
    }
}

// Forget the token (logout, expiry, or a rejected token)
pub fn remove_token() {
    if let Some(storage) = local_storage() {
        if storage.remove_item(TOKEN_KEY).is_err() {
            log::error!("Failed to remove session token");
        }
    }
}
