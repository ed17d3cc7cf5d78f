//! Patch Product Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use sandbox_app::domain::products::models::ProductId;

use crate::{
    extensions::*,
    products::{
        errors::into_status_error,
        models::{PatchProductRequest, ProductResponse},
    },
    state::State,
};

/// Patch Product Handler
///
/// Updates name, description, price and category when present.
#[endpoint(
    tags("products"),
    summary = "Patch Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<ProductId>,
    json: JsonBody<PatchProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .patch_product(id.into_inner(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
