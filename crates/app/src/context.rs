//! App Context

use std::sync::Arc;

use crate::{
    auth::{ClaimSetTokenService, TokenService},
    domain::{
        products::{InMemoryProductsService, ProductsService},
        users::{InMemoryUsersService, UsersService},
    },
};

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub users: Arc<dyn UsersService>,
    pub tokens: Arc<dyn TokenService>,
}

impl AppContext {
    /// Build application context with freshly seeded in-memory stores.
    ///
    /// Every call yields independent stores; data lives as long as the context.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            products: Arc::new(InMemoryProductsService::seeded()),
            users: Arc::new(InMemoryUsersService::seeded()),
            tokens: Arc::new(ClaimSetTokenService::new()),
        }
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
