//! Session-scoped browser storage.
//!
//! The sign-on portal puts the bearer token and the operator's display
//! name into `sessionStorage` before handing off to the console; this
//! module only reads and clears them.

const TOKEN_KEY: &str = "lgu.console.token";
const USER_KEY: &str = "lgu.console.user";

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

pub fn access_token() -> Option<String> {
    session_storage()?.get_item(TOKEN_KEY).ok().flatten()
}

pub fn user_display_name() -> Option<String> {
    session_storage()?.get_item(USER_KEY).ok().flatten()
}

pub fn clear() {
    if let Some(storage) = session_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}
