//! SurgiHub prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartLine},
    ids::TypedId,
    prices::{PriceError, currency_from_code, parse_price, price_from_decimal, price_to_decimal},
    products::{Product, ProductId},
    storefront::Storefront,
    wishlist::Wishlist,
};
