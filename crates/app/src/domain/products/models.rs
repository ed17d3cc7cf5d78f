//! Product Models

use rust_decimal::Decimal;

/// Product identifier, assigned by the store.
pub type ProductId = u64;

/// Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub quantity: u32,
}
