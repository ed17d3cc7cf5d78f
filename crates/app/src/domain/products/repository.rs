//! Products Repository

use rust_decimal::Decimal;

use crate::domain::{
    pagination::Page,
    products::{
        data::{NewProduct, ProductFilter, ProductPatch},
        models::{Product, ProductId},
    },
};

/// Insertion-ordered product collection with a never-reused id counter.
#[derive(Debug, Clone)]
pub(crate) struct InMemoryProductsRepository {
    products: Vec<Product>,
    next_id: ProductId,
}

impl InMemoryProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            products: Vec::new(),
            next_id: 1,
        }
    }

    /// Repository holding the three demo products.
    #[must_use]
    pub(crate) fn with_seed_data() -> Self {
        let mut repository = Self::new();

        for product in seed_products() {
            repository.create_product(product);
        }

        repository
    }

    pub(crate) fn list_products(&self, filter: &ProductFilter, page: Page) -> Vec<Product> {
        page.apply(
            self.products
                .iter()
                .filter(|product| filter.matches(product)),
        )
        .cloned()
        .collect()
    }

    pub(crate) fn get_product(&self, product: ProductId) -> Option<Product> {
        self.products.iter().find(|p| p.id == product).cloned()
    }

    pub(crate) fn create_product(&mut self, product: NewProduct) -> Product {
        let id = self.next_id;

        self.next_id += 1;

        let created = Product {
            id,
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category,
            quantity: product.quantity,
        };

        self.products.push(created.clone());

        created
    }

    pub(crate) fn replace_product(
        &mut self,
        product: ProductId,
        data: NewProduct,
    ) -> Option<Product> {
        let existing = self.find_mut(product)?;

        existing.name = data.name;
        existing.description = data.description;
        existing.price = data.price;
        existing.category = data.category;
        existing.quantity = data.quantity;

        Some(existing.clone())
    }

    pub(crate) fn patch_product(
        &mut self,
        product: ProductId,
        patch: ProductPatch,
    ) -> Option<Product> {
        let existing = self.find_mut(product)?;

        if let Some(name) = patch.name {
            existing.name = Some(name);
        }

        if let Some(description) = patch.description {
            existing.description = Some(description);
        }

        if let Some(price) = patch.price {
            existing.price = Some(price);
        }

        if let Some(category) = patch.category {
            existing.category = Some(category);
        }

        Some(existing.clone())
    }

    /// Returns whether a product was removed.
    pub(crate) fn delete_product(&mut self, product: ProductId) -> bool {
        let before = self.products.len();

        self.products.retain(|p| p.id != product);

        self.products.len() != before
    }

    /// Distinct categories in first-seen order.
    pub(crate) fn list_categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();

        for category in self.products.iter().filter_map(|p| p.category.as_ref()) {
            if !categories.contains(category) {
                categories.push(category.clone());
            }
        }

        categories
    }

    fn find_mut(&mut self, product: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == product)
    }
}

fn seed_products() -> [NewProduct; 3] {
    [
        NewProduct {
            name: Some("Laptop".to_string()),
            description: Some("High-performance laptop".to_string()),
            price: Some(Decimal::new(99_999, 2)),
            category: Some("Electronics".to_string()),
            quantity: 10,
        },
        NewProduct {
            name: Some("Smartphone".to_string()),
            description: Some("Latest smartphone model".to_string()),
            price: Some(Decimal::new(69_999, 2)),
            category: Some("Electronics".to_string()),
            quantity: 25,
        },
        NewProduct {
            name: Some("Coffee Mug".to_string()),
            description: Some("Ceramic coffee mug".to_string()),
            price: Some(Decimal::new(1_299, 2)),
            category: Some("Home".to_string()),
            quantity: 100,
        },
    ]
}
