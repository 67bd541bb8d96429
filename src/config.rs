//! Build-time environment configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The frontend is compiled per environment; endpoints and third-party
//! integration keys are baked in at build time and read-only at runtime.
//! An unset value falls back to a same-origin/disabled default so local
//! builds work without any configuration.

/// Base URL of the booking backend. Empty means same-origin requests.
pub fn api_base() -> &'static str {
    option_env!("PRIVYDE_API_URL").unwrap_or("")
}

/// Google OAuth client id. Empty disables the "continue with Google" entry.
pub fn google_client_id() -> &'static str {
    option_env!("PRIVYDE_GOOGLE_CLIENT_ID").unwrap_or("")
}

/// Stripe publishable key used by the booking checkout flow.
pub fn stripe_publishable_key() -> &'static str {
    option_env!("PRIVYDE_STRIPE_PUBLISHABLE_KEY").unwrap_or("")
}
