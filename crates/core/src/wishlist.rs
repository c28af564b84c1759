//! Wishlist

use crate::products::{Product, ProductId};

/// Products saved for later, in the order they were saved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wishlist {
    products: Vec<Product>,
}

impl Wishlist {
    /// Create an empty wishlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Save the product if it is not saved yet, otherwise drop it.
    ///
    /// Returns `true` when the product is saved after the call.
    pub fn toggle(&mut self, product: Product) -> bool {
        match self.products.iter().position(|saved| saved.id == product.id) {
            Some(index) => {
                self.products.remove(index);
                false
            }
            None => {
                self.products.push(product);
                true
            }
        }
    }

    /// Check if a product is saved.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.products.iter().any(|saved| &saved.id == id)
    }

    /// Saved products, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of saved products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if nothing is saved.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso};

    use super::*;

    fn product(id: &str) -> Product {
        Product::new(id, id, Money::from_minor(10_00, iso::USD))
    }

    #[test]
    fn first_toggle_saves() {
        let mut wishlist = Wishlist::new();

        assert!(wishlist.toggle(product("p1")));
        assert!(wishlist.contains(&ProductId::from("p1")));
        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn second_toggle_unsaves() {
        let mut wishlist = Wishlist::new();

        wishlist.toggle(product("p1"));

        assert!(!wishlist.toggle(product("p1")));
        assert!(!wishlist.contains(&ProductId::from("p1")));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn unsaving_keeps_order_of_the_rest() {
        let mut wishlist = Wishlist::new();

        wishlist.toggle(product("p1"));
        wishlist.toggle(product("p2"));
        wishlist.toggle(product("p3"));
        wishlist.toggle(product("p2"));

        let ids: Vec<&str> = wishlist
            .products()
            .iter()
            .map(|saved| saved.id.as_str())
            .collect();

        assert_eq!(ids, ["p1", "p3"]);
    }

    #[test]
    fn unknown_id_is_not_saved() {
        let wishlist = Wishlist::new();

        assert!(!wishlist.contains(&ProductId::from("unknown-id")));
    }
}
