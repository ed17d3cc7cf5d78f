//! Products Data

use rust_decimal::Decimal;

use crate::domain::products::models::Product;

/// New Product Data
///
/// Also used as the body of a full replace, where every field is overwritten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub quantity: u32,
}

/// Product Patch Data
///
/// Quantity is not patchable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
}

/// Product listing filter. Absent fields do not constrain the listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

impl ProductFilter {
    /// Whether `product` satisfies every bound present on this filter.
    ///
    /// Price bounds are inclusive. A product without a category or price never
    /// satisfies a filter on that field.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let category = self
            .category
            .as_ref()
            .is_none_or(|category| product.category.as_ref() == Some(category));

        let min_price = self
            .min_price
            .is_none_or(|min| product.price.is_some_and(|price| price >= min));

        let max_price = self
            .max_price
            .is_none_or(|max| product.price.is_some_and(|price| price <= max));

        category && min_price && max_price
    }
}
