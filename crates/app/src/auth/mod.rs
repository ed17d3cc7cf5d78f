//! Mock claim-set tokens
//!
//! Tokens look like JWTs but carry no key material: every segment is plain
//! base64 and validation only inspects structure and claim names.

mod errors;
mod models;
mod service;
mod token;

pub use errors::*;
pub use models::*;
pub use service::*;
pub use token::*;
