//! Products service errors.

use thiserror::Error;

use crate::domain::products::models::ProductId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductsServiceError {
    #[error("product {0} not found")]
    NotFound(ProductId),
}
