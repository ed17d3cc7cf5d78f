//! Users service errors.

use thiserror::Error;

use crate::domain::users::models::UserId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsersServiceError {
    #[error("user {0} not found")]
    NotFound(UserId),
}
