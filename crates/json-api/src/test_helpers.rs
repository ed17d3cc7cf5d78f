//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use sandbox_app::{
    auth::MockTokenService,
    context::AppContext,
    domain::{products::MockProductsService, users::MockUsersService},
};

use crate::{errors, state::State};

pub(crate) fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_replace_product().never();
    products.expect_patch_product().never();
    products.expect_delete_product().never();
    products.expect_list_categories().never();

    products
}

pub(crate) fn strict_users_mock() -> MockUsersService {
    let mut users = MockUsersService::new();

    users.expect_list_users().never();
    users.expect_search_users().never();
    users.expect_get_user().never();
    users.expect_create_user().never();
    users.expect_replace_user().never();
    users.expect_patch_user().never();
    users.expect_delete_user().never();

    users
}

pub(crate) fn strict_tokens_mock() -> MockTokenService {
    let mut tokens = MockTokenService::new();

    tokens.expect_generate_token().never();
    tokens.expect_validate_bearer().never();
    tokens.expect_validate_claims().never();

    tokens
}

fn state(
    products: MockProductsService,
    users: MockUsersService,
    tokens: MockTokenService,
) -> Arc<State> {
    State::from_app_context(AppContext {
        products: Arc::new(products),
        users: Arc::new(users),
        tokens: Arc::new(tokens),
    })
}

fn service(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route)).catcher(errors::catcher())
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    service(
        state(products, strict_users_mock(), strict_tokens_mock()),
        route,
    )
}

pub(crate) fn users_service(users: MockUsersService, route: Router) -> Service {
    service(
        state(strict_products_mock(), users, strict_tokens_mock()),
        route,
    )
}

pub(crate) fn tokens_service(tokens: MockTokenService, route: Router) -> Service {
    service(
        state(strict_products_mock(), strict_users_mock(), tokens),
        route,
    )
}
