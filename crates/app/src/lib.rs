//! Shared application domain for the sandbox API: in-memory stores and the mock token service.

pub mod auth;
pub mod context;
pub mod domain;
