//! Product Errors

use salvo::http::StatusError;
use tracing::debug;

use sandbox_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::NotFound(product) => {
            debug!(product_id = product, "product not found");

            StatusError::not_found().brief("Product not found")
        }
    }
}
