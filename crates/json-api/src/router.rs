//! App Router

use salvo::Router;

use crate::{health, products, tokens, users};

/// Every API route, mounted under `/api`.
///
/// Literal segments are pushed before `{id}` so they win the match.
pub(crate) fn app_router() -> Router {
    Router::with_path("api")
        .push(Router::with_path("health").get(health::health))
        .push(Router::with_path("info").get(health::info))
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(Router::with_path("categories").get(products::categories::handler))
                .push(
                    Router::with_path("{id}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .patch(products::patch::handler)
                        .delete(products::delete::handler),
                ),
        )
        .push(
            Router::with_path("users")
                .get(users::index::handler)
                .post(users::create::handler)
                .push(Router::with_path("search").get(users::search::handler))
                .push(
                    Router::with_path("{id}")
                        .get(users::get::handler)
                        .put(users::update::handler)
                        .patch(users::patch::handler)
                        .delete(users::delete::handler),
                ),
        )
        .push(
            Router::with_path("token")
                .push(Router::with_path("generate").post(tokens::generate::handler))
                .push(Router::with_path("validate").get(tokens::validate::handler))
                .push(
                    Router::with_path("validate-auth-header")
                        .post(tokens::validate_auth_header::handler),
                ),
        )
}
