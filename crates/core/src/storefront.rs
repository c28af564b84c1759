//! Storefront
//!
//! Session-scoped shopping state. One [`Storefront`] is created when the
//! application starts and handed by reference to whatever needs to read or
//! change the cart and the wishlist.

use rusty_money::{Money, iso::Currency};

use crate::{
    cart::Cart,
    products::{Product, ProductId},
    wishlist::Wishlist,
};

/// Cart and wishlist for the current session.
#[derive(Debug, Clone, PartialEq)]
pub struct Storefront {
    cart: Cart,
    wishlist: Wishlist,
}

impl Storefront {
    /// Create an empty storefront priced in the given currency.
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            cart: Cart::new(currency),
            wishlist: Wishlist::new(),
        }
    }

    /// Add one unit of a product to the cart.
    pub fn add_to_cart(&mut self, product: Product) {
        self.cart.add(product);
    }

    /// Drop a product's line from the cart, if present.
    pub fn remove_from_cart(&mut self, id: &ProductId) {
        self.cart.remove(id);
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Current cart total.
    pub fn cart_total(&self) -> Money<'static, Currency> {
        self.cart.total()
    }

    /// Current number of units in the cart.
    pub fn cart_count(&self) -> u64 {
        self.cart.count()
    }

    /// Toggle a product in the wishlist; returns whether it is now saved.
    pub fn toggle_wishlist(&mut self, product: Product) -> bool {
        self.wishlist.toggle(product)
    }

    /// Check if a product is in the wishlist.
    pub fn is_in_wishlist(&self, id: &ProductId) -> bool {
        self.wishlist.contains(id)
    }

    /// Read access to the cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Read access to the wishlist.
    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    /// Store currency.
    pub fn currency(&self) -> &'static Currency {
        self.cart.currency()
    }
}
