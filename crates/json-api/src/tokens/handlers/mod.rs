//! Token Handlers

pub(crate) mod generate;
pub(crate) mod validate;
pub(crate) mod validate_auth_header;
