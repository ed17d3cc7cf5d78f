//! Product Models

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use sandbox_app::domain::products::{
    data::{NewProduct, ProductPatch},
    models::Product,
};

/// Product body for create and full replace
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,

    #[salvo(schema(value_type = Option<f64>))]
    pub price: Option<Decimal>,

    pub category: Option<String>,

    /// Units in stock, zero when omitted
    #[serde(default)]
    pub quantity: u32,
}

impl From<ProductRequest> for NewProduct {
    fn from(request: ProductRequest) -> Self {
        NewProduct {
            name: request.name,
            description: request.description,
            price: request.price,
            category: request.category,
            quantity: request.quantity,
        }
    }
}

/// Partial product update. Quantity is ignored if sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct PatchProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,

    #[salvo(schema(value_type = Option<f64>))]
    pub price: Option<Decimal>,

    pub category: Option<String>,
}

impl From<PatchProductRequest> for ProductPatch {
    fn from(request: PatchProductRequest) -> Self {
        ProductPatch {
            name: request.name,
            description: request.description,
            price: request.price,
            category: request.category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: u64,

    pub name: Option<String>,

    pub description: Option<String>,

    /// Price, serialized as an exact JSON number
    #[salvo(schema(value_type = Option<f64>))]
    pub price: Option<Decimal>,

    pub category: Option<String>,

    pub quantity: u32,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category,
            quantity: product.quantity,
        }
    }
}
