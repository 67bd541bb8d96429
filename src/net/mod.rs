//! Networking modules for the booking backend's REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the HTTP calls, `error` defines the failure taxonomy, and
//! `types` defines the JSON schema shared with the backend.

pub mod api;
pub mod error;
pub mod types;
