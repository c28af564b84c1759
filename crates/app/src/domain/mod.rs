//! Storefront and admin use cases built on the backend API.

pub mod accounts;
pub mod admin;
pub mod catalog;
pub mod checkout;
pub mod quotes;
pub mod reviews;
