//! Browser glue and shared form helpers.

pub mod storage;
pub mod validate;
