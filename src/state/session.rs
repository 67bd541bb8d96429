//! Session state machine and store for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and user-aware components read this to coordinate login
//! redirects and identity-dependent rendering. The store is provided once
//! at application bootstrap and is the only writer of session state;
//! everything else reads through it.
//!
//! DESIGN
//! ======
//! State transitions are plain methods on `SessionState` so they stay
//! unit-testable without a browser; the async store operations glue them
//! to the REST client and `localStorage`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::AuthError;
use crate::net::types::{RegisterRequest, Role, User};
use crate::util::storage;

/// The client's record of the current authenticated identity.
///
/// Invariant: `token` is `Some` iff `user` is `Some`. All mutation paths
/// go through the transition methods below, which set or clear the pair
/// atomically.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    /// The authenticated identity, if any.
    pub user: Option<User>,
    /// Opaque bearer token for the identity.
    pub token: Option<String>,
    /// True while restoring a persisted session or while an auth call is
    /// in flight. Guards show a spinner instead of deciding anything.
    pub loading: bool,
    /// Last auth failure, for inline display on forms.
    pub error: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        // Starts loading: guarded routes must not redirect before the
        // persisted session has been restored.
        Self {
            user: None,
            token: None,
            loading: true,
            error: None,
        }
    }
}

impl SessionState {
    /// Whether an identity is present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Install an identity/token pair and resolve to ready.
    pub fn apply_session(&mut self, user: User, token: String) {
        self.user = Some(user);
        self.token = Some(token);
        self.loading = false;
        self.error = None;
    }

    /// Record a failure and resolve to ready. The current identity, if
    /// any, is left untouched.
    pub fn apply_failure(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }

    /// Resolve the startup restoration: seed the persisted pair when one
    /// exists, otherwise settle as anonymous.
    pub fn apply_restored(&mut self, restored: Option<(String, User)>) {
        if let Some((token, user)) = restored {
            self.user = Some(user);
            self.token = Some(token);
        }
        self.loading = false;
    }

    /// Drop the identity and settle as anonymous. Idempotent.
    pub fn clear(&mut self) {
        self.user = None;
        self.token = None;
        self.loading = false;
        self.error = None;
    }
}

/// Where to send a user right after a successful login/registration.
///
/// Accounts that still owe onboarding land on the completion step; the
/// route guards would bounce them there anyway, this just skips the hop.
pub fn post_auth_target(state: &SessionState) -> Option<&'static str> {
    let user = state.user.as_ref()?;
    Some(if user.profile_completed { "/" } else { "/complete-profile" })
}

/// Handle to the single shared session, provided via context at bootstrap.
///
/// Reads are reactive; writes only happen through the operations here.
/// A `login`/`register` call while another auth call is in flight is
/// ignored rather than racing the earlier one.
#[derive(Clone, Copy)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
        }
    }

    /// Current session (reactive read).
    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    /// Current session without subscribing, for use inside async tasks.
    pub fn state_untracked(&self) -> SessionState {
        self.state.get_untracked()
    }

    /// Restore a persisted session from `localStorage`, then resolve
    /// `loading`. Called synchronously at bootstrap so guarded routes
    /// never see a half-initialized session.
    pub fn restore(&self) {
        let restored = storage::load_session();
        self.state.update(|s| s.apply_restored(restored));
    }

    /// Exchange credentials for a session. On success the pair is
    /// installed and persisted; on failure only `error` changes.
    pub async fn login(&self, email: &str, password: &str, role: Role) {
        if self.begin_auth_call() {
            return;
        }
        match api::login(email, password, role).await {
            Ok(resp) => self.set_session(resp.user, resp.access_token),
            Err(err) => self.report(&err),
        }
    }

    /// Create an account and log straight into it. Same contract as
    /// [`SessionStore::login`].
    pub async fn register(&self, request: RegisterRequest) {
        if self.begin_auth_call() {
            return;
        }
        match api::register(&request).await {
            Ok(resp) => self.set_session(resp.user, resp.access_token),
            Err(err) => self.report(&err),
        }
    }

    /// Exchange a Google credential for a session. Same contract as
    /// [`SessionStore::login`].
    pub async fn login_with_google(&self, credential: &str, role: Role) {
        if self.begin_auth_call() {
            return;
        }
        match api::login_google(credential, role).await {
            Ok(resp) => self.set_session(resp.user, resp.access_token),
            Err(err) => self.report(&err),
        }
    }

    /// Drop the session and its persisted copy. Never fails; idempotent.
    pub fn logout(&self) {
        storage::clear_session();
        self.state.update(SessionState::clear);
    }

    /// Install a session obtained out-of-band (OAuth callback, partner
    /// onboarding). The pair is set atomically and persisted.
    pub fn set_session(&self, user: User, token: String) {
        storage::save_session(&token, &user);
        self.state.update(|s| s.apply_session(user, token));
    }

    /// Surface a failure on whatever form is listening.
    pub fn report(&self, error: &AuthError) {
        let message = error.to_string();
        self.state.update(|s| s.apply_failure(message));
    }

    /// Clear a previously surfaced failure, e.g. when a form resubmits.
    pub fn clear_error(&self) {
        self.state.update(|s| s.error = None);
    }

    /// Mark an auth call as started. Returns `true` when another call is
    /// already in flight, in which case the caller must back off.
    fn begin_auth_call(&self) -> bool {
        if self.state.get_untracked().loading {
            return true;
        }
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });
        false
    }
}
