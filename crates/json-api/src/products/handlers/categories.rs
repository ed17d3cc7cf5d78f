//! Product Categories Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{extensions::*, state::State};

/// Product Categories Handler
///
/// Returns each distinct category once, in order of first appearance.
#[endpoint(tags("products"), summary = "List Product Categories")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<String>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    Ok(Json(state.app.products.list_categories().await))
}
