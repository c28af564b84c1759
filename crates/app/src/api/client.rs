//! HTTP client for the storefront backend.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use surgihub::products::ProductId;
use tracing::debug;

use crate::api::{
    AdminApi, ApiError, CategoryDraft, CategoryId, CategoryRecord, Credentials, LoginResponse,
    NewOrder, NewReview, OrderId, OrderRecord, OrderStatus, ProductDraft, ProductQuery,
    ProductRecord, QuoteRequest, Registration, ReviewRecord, StatsRecord, StorefrontApi, UserRecord,
    models::{ProductUpdate, StatusUpdate},
};

/// reqwest-backed implementation of [`StorefrontApi`] and [`AdminApi`].
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    base_url: String,
    token: Option<String>,
    http: Client,
}

impl HttpApiClient {
    /// Create a client for the API rooted at `base_url`, e.g.
    /// `"http://localhost:5000/api"`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            http: Client::new(),
        }
    }

    /// Attach (or drop) the bearer token sent with every request.
    #[must_use]
    pub fn with_bearer_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// API root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);

        debug!(
            method = method.as_str(),
            url = url.as_str(),
            authenticated = self.token.is_some(),
            "backend request"
        );

        let builder = self.http.request(method, url);

        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn products_request(&self, query: &ProductQuery) -> RequestBuilder {
        self.request(Method::GET, "products").query(query)
    }

    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();

        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn fetch<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
        let response = Self::check(request.send().await?).await?;

        Ok(response.json().await?)
    }

    async fn execute(request: RequestBuilder) -> Result<(), ApiError> {
        Self::check(request.send().await?).await?;

        Ok(())
    }
}

#[async_trait]
impl StorefrontApi for HttpApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        Self::fetch(self.request(Method::POST, "users/login").json(credentials)).await
    }

    async fn register(&self, registration: &Registration) -> Result<serde_json::Value, ApiError> {
        Self::fetch(self.request(Method::POST, "users/register").json(registration)).await
    }

    async fn list_products(&self, query: &ProductQuery) -> Result<Vec<ProductRecord>, ApiError> {
        Self::fetch(self.products_request(query)).await
    }

    async fn get_product(&self, id: &ProductId) -> Result<ProductRecord, ApiError> {
        Self::fetch(self.request(Method::GET, &format!("products/{id}"))).await
    }

    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, ApiError> {
        Self::fetch(self.request(Method::GET, "categories")).await
    }

    async fn list_reviews(&self, product: &ProductId) -> Result<Vec<ReviewRecord>, ApiError> {
        Self::fetch(self.request(Method::GET, &format!("reviews/{product}"))).await
    }

    async fn submit_review(&self, review: &NewReview) -> Result<(), ApiError> {
        Self::execute(self.request(Method::POST, "reviews").json(review)).await
    }

    async fn place_order(&self, order: &NewOrder) -> Result<(), ApiError> {
        Self::execute(self.request(Method::POST, "orders").json(order)).await
    }

    async fn request_quote(&self, quote: &QuoteRequest) -> Result<(), ApiError> {
        Self::execute(self.request(Method::POST, "quotes").json(quote)).await
    }
}

#[async_trait]
impl AdminApi for HttpApiClient {
    async fn stats(&self) -> Result<StatsRecord, ApiError> {
        Self::fetch(self.request(Method::GET, "admin/stats")).await
    }

    async fn products(&self) -> Result<Vec<ProductRecord>, ApiError> {
        Self::fetch(self.request(Method::GET, "admin/products")).await
    }

    async fn create_product(&self, draft: &ProductDraft) -> Result<(), ApiError> {
        Self::execute(self.request(Method::POST, "admin/products").json(draft)).await
    }

    async fn update_product(&self, id: &ProductId, draft: &ProductDraft) -> Result<(), ApiError> {
        let body = ProductUpdate {
            draft,
            is_active: 1,
        };

        let path = format!("admin/products/{id}");

        Self::execute(self.request(Method::PUT, &path).json(&body)).await
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), ApiError> {
        Self::execute(self.request(Method::DELETE, &format!("admin/products/{id}"))).await
    }

    async fn categories(&self) -> Result<Vec<CategoryRecord>, ApiError> {
        Self::fetch(self.request(Method::GET, "admin/categories")).await
    }

    async fn create_category(&self, draft: &CategoryDraft) -> Result<(), ApiError> {
        Self::execute(self.request(Method::POST, "admin/categories").json(draft)).await
    }

    async fn update_category(
        &self,
        id: &CategoryId,
        draft: &CategoryDraft,
    ) -> Result<(), ApiError> {
        let path = format!("admin/categories/{id}");

        Self::execute(self.request(Method::PUT, &path).json(draft)).await
    }

    async fn delete_category(&self, id: &CategoryId) -> Result<(), ApiError> {
        Self::execute(self.request(Method::DELETE, &format!("admin/categories/{id}"))).await
    }

    async fn orders(&self) -> Result<Vec<OrderRecord>, ApiError> {
        Self::fetch(self.request(Method::GET, "admin/orders")).await
    }

    async fn update_order_status(&self, id: &OrderId, status: OrderStatus) -> Result<(), ApiError> {
        let path = format!("admin/orders/{id}/status");

        Self::execute(self.request(Method::PUT, &path).json(&StatusUpdate { status })).await
    }

    async fn users(&self) -> Result<Vec<UserRecord>, ApiError> {
        Self::fetch(self.request(Method::GET, "admin/users")).await
    }
}

#[cfg(test)]
mod tests {
    use reqwest::header::AUTHORIZATION;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let client = HttpApiClient::new("http://localhost:5000/api/");

        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert_eq!(client.url("/products"), "http://localhost:5000/api/products");
    }

    #[test]
    fn product_query_builds_category_filter() -> TestResult {
        let client = HttpApiClient::new("http://localhost:5000/api");
        let query = ProductQuery {
            category: Some(CategoryId::from("4")),
            limit: None,
        };

        let request = client.products_request(&query).build()?;

        assert_eq!(
            request.url().as_str(),
            "http://localhost:5000/api/products?category=4"
        );

        Ok(())
    }

    #[test]
    fn empty_product_query_has_no_query_string() -> TestResult {
        let client = HttpApiClient::new("http://localhost:5000/api");

        let request = client.products_request(&ProductQuery::default()).build()?;

        assert_eq!(request.url().query(), None);

        Ok(())
    }

    #[test]
    fn bearer_token_is_attached_when_present() -> TestResult {
        let anonymous = HttpApiClient::new("http://localhost:5000/api");
        let signed_in = anonymous
            .clone()
            .with_bearer_token(Some("abc.def.ghi".to_string()));

        let without = anonymous.request(Method::GET, "admin/stats").build()?;
        let with = signed_in.request(Method::GET, "admin/stats").build()?;

        assert!(without.headers().get(AUTHORIZATION).is_none());
        assert_eq!(
            with.headers()
                .get(AUTHORIZATION)
                .map(|value| value.to_str())
                .transpose()?,
            Some("Bearer abc.def.ghi")
        );

        Ok(())
    }
}
