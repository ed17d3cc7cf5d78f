//! Products service.

use async_trait::async_trait;
use mockall::automock;
use tokio::sync::RwLock;
use tracing::info;

use crate::domain::{
    pagination::Page,
    products::{
        data::{NewProduct, ProductFilter, ProductPatch},
        errors::ProductsServiceError,
        models::{Product, ProductId},
        repository::InMemoryProductsRepository,
    },
};

/// Products service backed by a lock-guarded in-memory repository.
#[derive(Debug)]
pub struct InMemoryProductsService {
    repository: RwLock<InMemoryProductsRepository>,
}

impl InMemoryProductsService {
    /// An empty store whose first product gets id 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            repository: RwLock::new(InMemoryProductsRepository::new()),
        }
    }

    /// A store holding the three demo products; the next id is 4.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            repository: RwLock::new(InMemoryProductsRepository::with_seed_data()),
        }
    }
}

impl Default for InMemoryProductsService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductsService for InMemoryProductsService {
    async fn list_products(&self, filter: ProductFilter, page: Page) -> Vec<Product> {
        self.repository.read().await.list_products(&filter, page)
    }

    async fn get_product(&self, product: ProductId) -> Result<Product, ProductsServiceError> {
        self.repository
            .read()
            .await
            .get_product(product)
            .ok_or(ProductsServiceError::NotFound(product))
    }

    #[tracing::instrument(name = "products.service.create_product", skip(self, product))]
    async fn create_product(&self, product: NewProduct) -> Product {
        let created = self.repository.write().await.create_product(product);

        info!(product_id = created.id, "created product");

        created
    }

    #[tracing::instrument(name = "products.service.replace_product", skip(self, data), err)]
    async fn replace_product(
        &self,
        product: ProductId,
        data: NewProduct,
    ) -> Result<Product, ProductsServiceError> {
        self.repository
            .write()
            .await
            .replace_product(product, data)
            .ok_or(ProductsServiceError::NotFound(product))
    }

    #[tracing::instrument(name = "products.service.patch_product", skip(self, patch), err)]
    async fn patch_product(
        &self,
        product: ProductId,
        patch: ProductPatch,
    ) -> Result<Product, ProductsServiceError> {
        self.repository
            .write()
            .await
            .patch_product(product, patch)
            .ok_or(ProductsServiceError::NotFound(product))
    }

    #[tracing::instrument(name = "products.service.delete_product", skip(self), err)]
    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError> {
        if !self.repository.write().await.delete_product(product) {
            return Err(ProductsServiceError::NotFound(product));
        }

        info!(product_id = product, "deleted product");

        Ok(())
    }

    async fn list_categories(&self) -> Vec<String> {
        self.repository.read().await.list_categories()
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves one page of products matching the filter, in insertion order.
    async fn list_products(&self, filter: ProductFilter, page: Page) -> Vec<Product>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<Product, ProductsServiceError>;

    /// Stores a new product under the next free id.
    async fn create_product(&self, product: NewProduct) -> Product;

    /// Overwrites every mutable field of a product.
    async fn replace_product(
        &self,
        product: ProductId,
        data: NewProduct,
    ) -> Result<Product, ProductsServiceError>;

    /// Overwrites only the fields present on the patch.
    async fn patch_product(
        &self,
        product: ProductId,
        patch: ProductPatch,
    ) -> Result<Product, ProductsServiceError>;

    /// Deletes a product with the given id.
    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError>;

    /// Distinct product categories in first-seen order.
    async fn list_categories(&self) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    fn new_product(name: &str, quantity: u32) -> NewProduct {
        NewProduct {
            name: Some(name.to_string()),
            description: Some("A thing".to_string()),
            price: Some(Decimal::new(2_500, 2)),
            category: Some("Garden".to_string()),
            quantity,
        }
    }

    #[tokio::test]
    async fn create_product_then_get_returns_equal_fields() -> TestResult {
        let products = InMemoryProductsService::seeded();

        let created = products.create_product(new_product("Rake", 3)).await;
        let fetched = products.get_product(created.id).await?;

        assert_eq!(created.id, 4);
        assert_eq!(fetched, created);

        Ok(())
    }

    #[tokio::test]
    async fn created_ids_strictly_increase_after_deletions() -> TestResult {
        let products = InMemoryProductsService::seeded();

        products.delete_product(3).await?;

        let first = products.create_product(new_product("Hoe", 1)).await;

        products.delete_product(first.id).await?;

        let second = products.create_product(new_product("Spade", 1)).await;

        assert_eq!(first.id, 4);
        assert!(second.id > first.id, "ids must never be reused");

        Ok(())
    }

    #[tokio::test]
    async fn get_product_unknown_id_returns_not_found() {
        let products = InMemoryProductsService::seeded();

        let result = products.get_product(99).await;

        assert_eq!(result, Err(ProductsServiceError::NotFound(99)));
    }

    #[tokio::test]
    async fn delete_product_makes_it_not_found() -> TestResult {
        let products = InMemoryProductsService::seeded();

        products.delete_product(2).await?;

        let result = products.get_product(2).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound(2))),
            "expected NotFound after deletion, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_product_unknown_id_returns_not_found() {
        let products = InMemoryProductsService::new();

        let result = products.delete_product(1).await;

        assert_eq!(result, Err(ProductsServiceError::NotFound(1)));
    }

    #[tokio::test]
    async fn replace_product_overwrites_every_field() -> TestResult {
        let products = InMemoryProductsService::seeded();

        let replaced = products
            .replace_product(1, new_product("Desktop", 7))
            .await?;

        assert_eq!(replaced.id, 1);
        assert_eq!(replaced.name.as_deref(), Some("Desktop"));
        assert_eq!(replaced.category.as_deref(), Some("Garden"));
        assert_eq!(replaced.quantity, 7);
        assert_eq!(products.get_product(1).await?, replaced);

        Ok(())
    }

    #[tokio::test]
    async fn replace_product_unknown_id_returns_not_found() {
        let products = InMemoryProductsService::seeded();

        let result = products.replace_product(10, new_product("x", 1)).await;

        assert_eq!(result, Err(ProductsServiceError::NotFound(10)));
    }

    #[tokio::test]
    async fn patch_product_with_name_only_leaves_other_fields() -> TestResult {
        let products = InMemoryProductsService::seeded();
        let before = products.get_product(1).await?;

        let patched = products
            .patch_product(
                1,
                ProductPatch {
                    name: Some("Gaming Laptop".to_string()),
                    ..ProductPatch::default()
                },
            )
            .await?;

        assert_eq!(
            patched,
            Product {
                name: Some("Gaming Laptop".to_string()),
                ..before
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn patch_product_never_changes_quantity() -> TestResult {
        let products = InMemoryProductsService::seeded();

        let patched = products
            .patch_product(
                3,
                ProductPatch {
                    price: Some(Decimal::new(1_499, 2)),
                    ..ProductPatch::default()
                },
            )
            .await?;

        assert_eq!(patched.price, Some(Decimal::new(1_499, 2)));
        assert_eq!(patched.quantity, 100);

        Ok(())
    }

    #[tokio::test]
    async fn list_products_paginates_filtered_set() {
        let products = InMemoryProductsService::seeded();

        let first = products
            .list_products(ProductFilter::default(), Page::new(0, 2))
            .await;
        let second = products
            .list_products(ProductFilter::default(), Page::new(1, 2))
            .await;

        let ids: Vec<ProductId> = first.iter().chain(second.iter()).map(|p| p.id).collect();

        assert_eq!(first.len(), 2, "first page should be full");
        assert_eq!(second.len(), 1, "second page should hold the remainder");
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn list_products_applies_filters_before_pagination() {
        let products = InMemoryProductsService::seeded();

        let filter = ProductFilter {
            category: Some("Electronics".to_string()),
            max_price: Some(Decimal::new(70_000, 2)),
            ..ProductFilter::default()
        };

        let listed = products.list_products(filter, Page::default()).await;

        let ids: Vec<ProductId> = listed.iter().map(|p| p.id).collect();

        assert_eq!(ids, vec![2]);
    }

    #[tokio::test]
    async fn list_categories_returns_seed_categories() {
        let products = InMemoryProductsService::seeded();

        assert_eq!(
            products.list_categories().await,
            vec!["Electronics".to_string(), "Home".to_string()]
        );
    }
}
