//! Bearer token persistence.
//!
//! In the browser the token survives page loads in `localStorage` under the
//! `token` key; a freshly constructed transport picks it up again. On native
//! targets there is no document to reload, so the token lives only on the
//! transport itself and these helpers are no-ops.

#[cfg(target_arch = "wasm32")]
const TOKEN_KEY: &str = "token";

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn load_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok()?
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn save_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn load_token() -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn save_token(_token: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn clear_token() {}
