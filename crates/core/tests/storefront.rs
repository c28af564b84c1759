//! Cart and wishlist behaviour seen through the storefront, covering the
//! aggregate properties the presentation layer relies on.

use std::collections::{HashMap, HashSet};

use rusty_money::{Money, iso};

use surgihub::prelude::*;

fn product(id: &str, price_minor: i64) -> Product {
    Product::new(id, format!("Instrument {id}"), Money::from_minor(price_minor, iso::USD))
}

fn catalogue() -> Vec<Product> {
    vec![
        product("p1", 10_00),
        product("p2", 5_00),
        product("p3", 299_99),
        product("p4", 89_50),
    ]
}

/// Deterministic sequence of catalogue indexes with repeats.
fn add_sequence(len: usize, seed: usize) -> Vec<usize> {
    (0..len).map(|step| (step * 7 + seed * 3 + step / 2) % 4).collect()
}

#[test]
fn scenario_two_products_three_units() {
    let mut store = Storefront::new(iso::USD);

    store.add_to_cart(product("p1", 10_00));
    store.add_to_cart(product("p1", 10_00));
    store.add_to_cart(product("p2", 5_00));

    assert_eq!(store.cart_count(), 3);
    assert_eq!(store.cart().len(), 2);
    assert_eq!(store.cart_total(), Money::from_minor(25_00, iso::USD));
    assert_eq!(price_to_decimal(&store.cart_total()).to_string(), "25.00");
}

#[test]
fn scenario_wishlist_toggle_on_and_off() {
    let mut store = Storefront::new(iso::USD);
    let id = ProductId::from("p1");

    store.toggle_wishlist(product("p1", 10_00));

    assert!(store.is_in_wishlist(&id));
    assert_eq!(store.wishlist().len(), 1);

    store.toggle_wishlist(product("p1", 10_00));

    assert!(!store.is_in_wishlist(&id));
    assert_eq!(store.wishlist().len(), 0);
}

#[test]
fn count_and_lines_track_add_sequences() {
    let catalogue = catalogue();

    for seed in 0..16 {
        let mut store = Storefront::new(iso::USD);
        let mut adds: HashMap<&str, u64> = HashMap::new();

        for index in add_sequence(seed + 1, seed) {
            let Some(product) = catalogue.get(index) else {
                continue;
            };

            *adds.entry(product.id.as_str()).or_default() += 1;
            store.add_to_cart(product.clone());
        }

        let distinct: HashSet<&str> = adds.keys().copied().collect();

        assert_eq!(store.cart_count(), adds.values().sum::<u64>());
        assert_eq!(store.cart().len(), distinct.len());

        for line in store.cart().lines() {
            assert_eq!(
                Some(&u64::from(line.quantity())),
                adds.get(line.product().id.as_str()),
                "quantity for {} should match its add count",
                line.product().id
            );
        }
    }
}

#[test]
fn same_product_twice_doubles_total() {
    let mut store = Storefront::new(iso::USD);

    store.add_to_cart(product("p3", 299_99));
    store.add_to_cart(product("p3", 299_99));

    let line = store.cart().line(&ProductId::from("p3"));

    assert_eq!(line.map(CartLine::quantity), Some(2));
    assert_eq!(store.cart_total(), Money::from_minor(2 * 299_99, iso::USD));
}

#[test]
fn removing_absent_product_is_a_no_op() {
    let mut store = Storefront::new(iso::USD);

    store.add_to_cart(product("p1", 10_00));
    store.add_to_cart(product("p2", 5_00));

    let before = store.clone();

    store.remove_from_cart(&ProductId::from("missing"));

    assert_eq!(store, before);
}

#[test]
fn clear_always_zeroes_aggregates() {
    let catalogue = catalogue();

    for seed in 0..8 {
        let mut store = Storefront::new(iso::USD);

        for index in add_sequence(seed * 2, seed) {
            if let Some(product) = catalogue.get(index) {
                store.add_to_cart(product.clone());
            }
        }

        store.clear_cart();

        assert_eq!(store.cart_count(), 0);
        assert_eq!(store.cart_total(), Money::from_minor(0, iso::USD));
        assert!(store.cart().is_empty());
    }
}

#[test]
fn wishlist_toggle_is_an_involution() {
    let catalogue = catalogue();

    for saved in 0..=catalogue.len() {
        let mut store = Storefront::new(iso::USD);

        for product in catalogue.iter().take(saved) {
            store.toggle_wishlist(product.clone());
        }

        for product in &catalogue {
            let before = store.wishlist().clone();

            store.toggle_wishlist(product.clone());
            store.toggle_wishlist(product.clone());

            let after_ids: Vec<&str> = store
                .wishlist()
                .products()
                .iter()
                .map(|entry| entry.id.as_str())
                .collect();
            let before_ids: Vec<&str> = before
                .products()
                .iter()
                .map(|entry| entry.id.as_str())
                .collect();

            let mut after_sorted = after_ids.clone();
            let mut before_sorted = before_ids.clone();
            after_sorted.sort_unstable();
            before_sorted.sort_unstable();

            assert_eq!(
                after_sorted, before_sorted,
                "toggling {} twice should restore the saved set",
                product.id
            );
            assert_eq!(store.wishlist().len(), before.len());
        }
    }
}

#[test]
fn never_toggled_ids_are_not_saved() {
    let mut store = Storefront::new(iso::USD);

    store.toggle_wishlist(product("p1", 10_00));

    assert!(!store.is_in_wishlist(&ProductId::from("p2")));
    assert!(!store.is_in_wishlist(&ProductId::from("unknown-id")));
}
