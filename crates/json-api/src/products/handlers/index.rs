//! Product Index Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::prelude::*;

use sandbox_app::domain::products::data::ProductFilter;

use crate::{extensions::*, products::models::ProductResponse, state::State};

/// Product Index Handler
///
/// Returns one page of products matching the optional `category`,
/// `minPrice` and `maxPrice` query parameters. Price bounds are inclusive.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "Matching products"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed query parameter"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filter = ProductFilter {
        category: req.query::<String>("category"),
        min_price: req.parse_query::<Decimal>("minPrice")?,
        max_price: req.parse_query::<Decimal>("maxPrice")?,
    };

    let page = req.parse_page()?;

    let products = state.app.products.list_products(filter, page).await;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use sandbox_app::domain::{pagination::Page, products::MockProductsService};

    use crate::test_helpers::products_service;

    use super::{super::tests::make_product, *};

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_200_with_default_page() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .withf(|filter, page| *filter == ProductFilter::default() && *page == Page::new(0, 10))
            .return_once(|_, _| vec![make_product(1), make_product(2)]);

        let mut res = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await;

        let body: Vec<ProductResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body.iter().map(|product| product.id).collect::<Vec<_>>(),
            vec![1, 2]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_index_forwards_filter_and_page() -> TestResult {
        let mut products = MockProductsService::new();

        let expected = ProductFilter {
            category: Some("Electronics".to_string()),
            min_price: Some(Decimal::new(500, 0)),
            max_price: Some(Decimal::new(99_999, 2)),
        };

        products
            .expect_list_products()
            .once()
            .withf(move |filter, page| *filter == expected && *page == Page::new(1, 2))
            .return_once(|_, _| Vec::new());

        let res = TestClient::get(
            "http://example.com/products?category=Electronics&minPrice=500&maxPrice=999.99&page=1&size=2",
        )
        .send(&make_service(products))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_invalid_min_price_returns_400() {
        let mut products = MockProductsService::new();

        products.expect_list_products().never();

        let res = TestClient::get("http://example.com/products?minPrice=cheap")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_index_negative_page_returns_400() {
        let mut products = MockProductsService::new();

        products.expect_list_products().never();

        let res = TestClient::get("http://example.com/products?page=-1")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
