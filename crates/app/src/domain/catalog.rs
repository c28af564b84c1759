//! Catalog service.

use std::sync::Arc;

use rusty_money::iso::Currency;
use surgihub::{
    prices::PriceError,
    products::{Product, ProductId},
};
use thiserror::Error;

use crate::api::{
    ApiError, CategoryId, CategoryRecord, ProductQuery, ProductRecord, ReviewRecord, StorefrontApi,
};

/// Number of products shown on the home page.
pub const FEATURED_LIMIT: u32 = 8;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("backend error")]
    Api(#[from] ApiError),

    #[error("product {0} has an invalid price")]
    Price(ProductId, #[source] PriceError),
}

/// Everything the product page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    pub product: Product,
    pub description: Option<String>,
    pub stock: Option<i64>,
    pub reviews: Vec<ReviewRecord>,
}

impl ProductDetail {
    /// Mean rating, if the product has any reviews.
    pub fn average_rating(&self) -> Option<f64> {
        if self.reviews.is_empty() {
            return None;
        }

        let sum: u32 = self
            .reviews
            .iter()
            .map(|review| u32::from(review.rating))
            .sum();
        let count = u32::try_from(self.reviews.len()).ok()?;

        Some(f64::from(sum) / f64::from(count))
    }
}

#[derive(Clone)]
pub struct CatalogService {
    api: Arc<dyn StorefrontApi>,
    currency: &'static Currency,
}

impl CatalogService {
    #[must_use]
    pub fn new(api: Arc<dyn StorefrontApi>, currency: &'static Currency) -> Self {
        Self { api, currency }
    }

    /// List products, optionally restricted to one category.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend call fails or a product price is
    /// invalid.
    pub async fn products(
        &self,
        category: Option<CategoryId>,
    ) -> Result<Vec<Product>, CatalogError> {
        self.query(&ProductQuery {
            category,
            limit: None,
        })
        .await
    }

    /// The handful of products shown on the home page.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend call fails or a product price is
    /// invalid.
    pub async fn featured(&self) -> Result<Vec<Product>, CatalogError> {
        self.query(&ProductQuery {
            category: None,
            limit: Some(FEATURED_LIMIT),
        })
        .await
    }

    /// Fetch a single product ready to go into the cart or wishlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend call fails or the price is invalid.
    pub async fn product(&self, id: &ProductId) -> Result<Product, CatalogError> {
        let record = self.api.get_product(id).await?;

        self.convert(&record)
    }

    /// Fetch a product together with its reviews.
    ///
    /// # Errors
    ///
    /// Returns an error if either backend call fails or the price is invalid.
    pub async fn product_detail(&self, id: &ProductId) -> Result<ProductDetail, CatalogError> {
        let (record, reviews) =
            tokio::try_join!(self.api.get_product(id), self.api.list_reviews(id))?;

        Ok(ProductDetail {
            product: self.convert(&record)?,
            description: record.description,
            stock: record.stock,
            reviews,
        })
    }

    /// List product categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend call fails.
    pub async fn categories(&self) -> Result<Vec<CategoryRecord>, CatalogError> {
        Ok(self.api.list_categories().await?)
    }

    async fn query(&self, query: &ProductQuery) -> Result<Vec<Product>, CatalogError> {
        self.api
            .list_products(query)
            .await?
            .iter()
            .map(|record| self.convert(record))
            .collect()
    }

    fn convert(&self, record: &ProductRecord) -> Result<Product, CatalogError> {
        record
            .to_product(self.currency)
            .map_err(|error| CatalogError::Price(record.id.clone(), error))
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use rust_decimal::Decimal;
    use rusty_money::{Money, iso};
    use testresult::TestResult;

    use crate::api::{MockStorefrontApi, ReviewId};

    use super::*;

    fn record(id: &str, price: Decimal) -> ProductRecord {
        ProductRecord {
            id: ProductId::from(id),
            name: format!("Instrument {id}"),
            description: Some("Stainless steel".to_string()),
            price,
            stock: Some(3),
            category_id: Some(CategoryId::from("1")),
            category_name: Some("Surgical Equipment".to_string()),
            image_url: None,
        }
    }

    fn review(id: &str, rating: u8) -> ReviewRecord {
        ReviewRecord {
            id: ReviewId::from(id),
            rating,
            comment: "Sharp".to_string(),
            full_name: None,
            created_at: None,
        }
    }

    #[tokio::test]
    async fn products_converts_prices() -> TestResult {
        let mut api = MockStorefrontApi::new();

        api.expect_list_products()
            .with(eq(ProductQuery {
                category: Some(CategoryId::from("2")),
                limit: None,
            }))
            .times(1)
            .returning(|_| Ok(vec![record("p1", Decimal::new(89_50, 2))]));

        let catalog = CatalogService::new(Arc::new(api), iso::USD);
        let products = catalog.products(Some(CategoryId::from("2"))).await?;

        assert_eq!(products.len(), 1);
        assert_eq!(
            products.first().map(|product| product.price),
            Some(Money::from_minor(89_50, iso::USD))
        );

        Ok(())
    }

    #[tokio::test]
    async fn featured_caps_listing() -> TestResult {
        let mut api = MockStorefrontApi::new();

        api.expect_list_products()
            .withf(|query| query.limit == Some(FEATURED_LIMIT) && query.category.is_none())
            .returning(|_| Ok(Vec::new()));

        let catalog = CatalogService::new(Arc::new(api), iso::USD);

        assert!(catalog.featured().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn invalid_price_names_the_product() {
        let mut api = MockStorefrontApi::new();

        api.expect_get_product()
            .returning(|_| Ok(record("bad", Decimal::new(-1, 0))));

        let catalog = CatalogService::new(Arc::new(api), iso::USD);
        let result = catalog.product(&ProductId::from("bad")).await;

        let is_bad_price = matches!(
            &result,
            Err(CatalogError::Price(id, PriceError::Negative(_))) if id.as_str() == "bad"
        );

        assert!(is_bad_price, "expected Price error, got {result:?}");
    }

    #[tokio::test]
    async fn product_detail_joins_reviews() -> TestResult {
        let mut api = MockStorefrontApi::new();

        api.expect_get_product()
            .with(eq(ProductId::from("p1")))
            .returning(|_| Ok(record("p1", Decimal::new(10_00, 2))));
        api.expect_list_reviews()
            .with(eq(ProductId::from("p1")))
            .returning(|_| Ok(vec![review("r1", 5), review("r2", 4)]));

        let catalog = CatalogService::new(Arc::new(api), iso::USD);
        let detail = catalog.product_detail(&ProductId::from("p1")).await?;

        assert_eq!(detail.stock, Some(3));
        assert_eq!(detail.reviews.len(), 2);
        assert_eq!(detail.average_rating(), Some(4.5));

        Ok(())
    }

    #[tokio::test]
    async fn product_detail_fails_when_reviews_fail() {
        let mut api = MockStorefrontApi::new();

        api.expect_get_product()
            .returning(|_| Ok(record("p1", Decimal::new(10_00, 2))));
        api.expect_list_reviews().returning(|_| {
            Err(ApiError::Status {
                status: 500,
                body: String::new(),
            })
        });

        let catalog = CatalogService::new(Arc::new(api), iso::USD);
        let result = catalog.product_detail(&ProductId::from("p1")).await;

        assert!(matches!(result, Err(CatalogError::Api(ApiError::Status { status: 500, .. }))));
    }
}
