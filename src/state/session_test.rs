use super::*;

fn rider(profile_completed: bool) -> User {
    User {
        id: "u_7".to_owned(),
        name: "Jo Rider".to_owned(),
        email: "jo@example.com".to_owned(),
        role: Role::User,
        profile_completed,
    }
}

// =============================================================
// SessionState lifecycle
// =============================================================

#[test]
fn session_starts_anonymous_and_loading() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn apply_session_installs_the_pair_and_resolves() {
    let mut state = SessionState::default();
    state.apply_session(rider(true), "tok-1".to_owned());
    assert!(state.is_authenticated());
    assert_eq!(state.token.as_deref(), Some("tok-1"));
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn apply_session_clears_a_stale_error() {
    let mut state = SessionState::default();
    state.apply_failure("Invalid email or password".to_owned());
    state.apply_session(rider(true), "tok-2".to_owned());
    assert!(state.error.is_none());
}

#[test]
fn apply_failure_leaves_the_session_unchanged() {
    let mut state = SessionState::default();
    state.apply_session(rider(true), "tok-3".to_owned());
    state.apply_failure("request failed: 500".to_owned());
    assert_eq!(state.token.as_deref(), Some("tok-3"));
    assert!(state.user.is_some());
    assert_eq!(state.error.as_deref(), Some("request failed: 500"));
    assert!(!state.loading);
}

#[test]
fn failed_login_on_anonymous_session_keeps_it_anonymous() {
    let mut state = SessionState::default();
    state.apply_failure("Invalid email or password".to_owned());
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert_eq!(state.error.as_deref(), Some("Invalid email or password"));
}

// =============================================================
// Restoration
// =============================================================

#[test]
fn restoring_a_persisted_pair_yields_exactly_that_session() {
    let mut state = SessionState::default();
    state.apply_restored(Some(("tok-9".to_owned(), rider(true))));
    assert_eq!(state.token.as_deref(), Some("tok-9"));
    assert_eq!(state.user, Some(rider(true)));
    assert!(!state.loading);
}

#[test]
fn restoring_nothing_settles_as_anonymous() {
    let mut state = SessionState::default();
    state.apply_restored(None);
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert!(!state.loading);
}

// =============================================================
// Logout idempotence
// =============================================================

#[test]
fn clear_is_idempotent() {
    let mut state = SessionState::default();
    state.apply_session(rider(true), "tok-4".to_owned());
    state.clear();
    let after_first = state.clone();
    state.clear();
    assert_eq!(state, after_first);
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

// =============================================================
// Post-auth navigation target
// =============================================================

#[test]
fn post_auth_target_requires_a_user() {
    assert_eq!(post_auth_target(&SessionState::default()), None);
}

#[test]
fn post_auth_target_sends_incomplete_profiles_to_onboarding() {
    let mut state = SessionState::default();
    state.apply_session(rider(false), "tok-5".to_owned());
    assert_eq!(post_auth_target(&state), Some("/complete-profile"));
}

#[test]
fn post_auth_target_sends_completed_profiles_home() {
    let mut state = SessionState::default();
    state.apply_session(rider(true), "tok-6".to_owned());
    assert_eq!(post_auth_target(&state), Some("/"));
}
