//! Wire records exchanged with the storefront backend.

use clap::ValueEnum;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::iso::Currency;
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use surgihub::{
    ids::TypedId,
    prices::{PriceError, price_from_decimal},
    products::{Product, ProductId},
};

use crate::session::{Role, SessionUser};

/// Category Id
pub type CategoryId = TypedId<CategoryRecord>;

/// Order Id
pub type OrderId = TypedId<OrderRecord>;

/// Review Id
pub type ReviewId = TypedId<ReviewRecord>;

/// User Id
pub type UserId = TypedId<UserRecord>;

/// Product as served by `/products` and `/admin/products`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub stock: Option<i64>,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl ProductRecord {
    /// Convert into a store product priced in `currency`.
    ///
    /// # Errors
    ///
    /// Returns a [`PriceError`] if the backend price is negative or out of
    /// range.
    pub fn to_product(&self, currency: &'static Currency) -> Result<Product, PriceError> {
        let price = price_from_decimal(self.price, currency)?;

        Ok(Product {
            id: self.id.clone(),
            name: self.name.clone(),
            price,
            image_url: self.image_url.clone(),
            category_name: self.category_name.clone(),
        })
    }
}

/// Product category.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Published product review.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReviewRecord {
    pub id: ReviewId,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Review submission payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewReview {
    pub product_id: ProductId,
    pub user_id: UserId,
    pub rating: u8,
    pub comment: String,
}

/// How the customer intends to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    BankTransfer,
}

/// Order submission payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOrder {
    pub user_id: UserId,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub total_amount: Decimal,
    pub shipping_address: String,
    pub payment_method: PaymentMethod,
    pub items: Vec<NewOrderItem>,
}

/// One line of an order submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOrderItem {
    pub product_id: ProductId,
    pub quantity: u32,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
}

/// Order fulfilment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

/// Order as listed in the admin console.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderRecord {
    pub id: OrderId,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Registered user as listed in the admin console.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    #[serde(default)]
    pub full_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Admin dashboard counters. Missing or `null` counters read as zero, and
/// counters may arrive as numbers or decimal strings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatsRecord {
    #[serde(deserialize_with = "count_or_zero")]
    pub products: u64,
    #[serde(deserialize_with = "count_or_zero")]
    pub users: u64,
    #[serde(deserialize_with = "count_or_zero")]
    pub orders: u64,
    #[serde(deserialize_with = "amount_or_zero")]
    pub revenue: Decimal,
}

fn amount_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
    Ok(Option::<Decimal>::deserialize(deserializer)?.unwrap_or_default())
}

fn count_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let amount = amount_or_zero(deserializer)?;

    amount
        .fract()
        .is_zero()
        .then(|| amount.to_u64())
        .flatten()
        .ok_or_else(|| D::Error::custom(format!("invalid count: {amount}")))
}

/// Quote request payload. `user_id` is sent as `null` for guests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteRequest {
    pub message: String,
    pub user_id: Option<UserId>,
}

/// Login payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionUser,
}

/// Account registration payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: String,
}

/// Query string for product listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Admin product create/update payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
    pub stock: u32,
    pub category_id: Option<CategoryId>,
    pub image_url: Option<String>,
}

/// Admin product update payload; updates always re-activate the product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ProductUpdate<'a> {
    #[serde(flatten)]
    pub draft: &'a ProductDraft,
    pub is_active: u8,
}

/// Admin category create/update payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct StatusUpdate {
    pub status: OrderStatus,
}
