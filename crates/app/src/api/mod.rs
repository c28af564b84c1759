//! Storefront backend API.

use async_trait::async_trait;
use mockall::automock;
use surgihub::products::ProductId;
use thiserror::Error;

mod client;
pub mod models;

pub use client::HttpApiClient;
pub use models::*;

/// Errors returned by backend calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}: {body}")]
    Status { status: u16, body: String },
}

impl ApiError {
    /// Check if the backend rejected the caller's credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }
}

/// Public storefront endpoints.
#[automock]
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// Exchange credentials for a bearer token.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    /// Create a customer account.
    async fn register(&self, registration: &Registration) -> Result<serde_json::Value, ApiError>;

    /// List products, optionally filtered by category or capped in length.
    async fn list_products(&self, query: &ProductQuery) -> Result<Vec<ProductRecord>, ApiError>;

    /// Fetch a single product.
    async fn get_product(&self, id: &ProductId) -> Result<ProductRecord, ApiError>;

    /// List product categories.
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, ApiError>;

    /// List the reviews of a product.
    async fn list_reviews(&self, product: &ProductId) -> Result<Vec<ReviewRecord>, ApiError>;

    /// Publish a review.
    async fn submit_review(&self, review: &NewReview) -> Result<(), ApiError>;

    /// Submit an order.
    async fn place_order(&self, order: &NewOrder) -> Result<(), ApiError>;

    /// Submit a bulk quote request.
    async fn request_quote(&self, quote: &QuoteRequest) -> Result<(), ApiError>;
}

/// Admin console endpoints. Every call needs an admin bearer token.
#[automock]
#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn stats(&self) -> Result<StatsRecord, ApiError>;

    async fn products(&self) -> Result<Vec<ProductRecord>, ApiError>;

    async fn create_product(&self, draft: &ProductDraft) -> Result<(), ApiError>;

    async fn update_product(&self, id: &ProductId, draft: &ProductDraft) -> Result<(), ApiError>;

    async fn delete_product(&self, id: &ProductId) -> Result<(), ApiError>;

    async fn categories(&self) -> Result<Vec<CategoryRecord>, ApiError>;

    async fn create_category(&self, draft: &CategoryDraft) -> Result<(), ApiError>;

    async fn update_category(&self, id: &CategoryId, draft: &CategoryDraft)
    -> Result<(), ApiError>;

    async fn delete_category(&self, id: &CategoryId) -> Result<(), ApiError>;

    async fn orders(&self) -> Result<Vec<OrderRecord>, ApiError>;

    async fn update_order_status(&self, id: &OrderId, status: OrderStatus)
    -> Result<(), ApiError>;

    async fn users(&self) -> Result<Vec<UserRecord>, ApiError>;
}
