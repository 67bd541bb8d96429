//! `localStorage` persistence for the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session survives reloads through two keys: `authToken` (the raw
//! bearer string) and `user` (the JSON-serialized identity). Reads and
//! writes are best-effort browser-only behavior; SSR paths safely no-op.
//! A corrupt or half-present entry restores to an anonymous session and
//! is never surfaced to the user.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::net::types::User;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "authToken";
#[cfg(feature = "hydrate")]
const USER_KEY: &str = "user";

#[cfg(any(test, feature = "hydrate"))]
fn decode_user(raw: &str) -> Option<User> {
    serde_json::from_str(raw).ok()
}

#[cfg(any(test, feature = "hydrate"))]
fn encode_user(user: &User) -> Option<String> {
    serde_json::to_string(user).ok()
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Persist the session pair. Both keys are written together so a later
/// restore never sees a token without an identity.
pub fn save_session(token: &str, user: &User) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let Some(raw) = encode_user(user) else {
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, token);
        let _ = storage.set_item(USER_KEY, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user);
    }
}

/// Load the persisted session pair, if a complete and readable one exists.
pub fn load_session() -> Option<(String, User)> {
    #[cfg(feature = "hydrate")]
    {
        let storage = local_storage()?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
        let raw = storage.get_item(USER_KEY).ok().flatten()?;
        match decode_user(&raw) {
            Some(user) => Some((token, user)),
            None => {
                log::warn!("persisted user record unreadable, restoring as anonymous");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Remove both keys. Safe to call on an already-empty storage.
pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}
