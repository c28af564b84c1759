//! SurgiHub
//!
//! In-memory storefront state for the SurgiHub surgical-instrument shop: the
//! product model, price handling, and the cart and wishlist stores that
//! presentation code reads from and mutates.

pub mod cart;
pub mod ids;
pub mod prelude;
pub mod prices;
pub mod products;
pub mod storefront;
pub mod wishlist;
