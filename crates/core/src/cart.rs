//! Cart

use rusty_money::{Money, iso::Currency};

use crate::products::{Product, ProductId};

/// One distinct product in the cart and how many units of it were added.
///
/// The product, including its price, is captured when the line is first
/// created. Later additions of the same id only bump the quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    product: Product,
    quantity: u32,
}

impl CartLine {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// The product this line holds.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Units of the product in the cart. Always at least 1.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price multiplied by quantity.
    pub fn subtotal(&self) -> Money<'static, Currency> {
        let minor_units = self
            .product
            .price
            .to_minor_units()
            .saturating_mul(i64::from(self.quantity));

        Money::from_minor(minor_units, self.product.price.currency())
    }
}

/// Cart
///
/// Lines are kept in the order their products were first added.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
    currency: &'static Currency,
}

impl Cart {
    /// Create an empty cart priced in the given currency.
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            lines: Vec::new(),
            currency,
        }
    }

    /// Add one unit of a product.
    ///
    /// The product must be priced in the cart's currency.
    pub fn add(&mut self, product: Product) {
        debug_assert_eq!(
            product.price.currency(),
            self.currency,
            "product {} is priced in another currency than the cart",
            product.id
        );

        match self.line_mut(&product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine::new(product)),
        }
    }

    /// Remove the line for a product. Does nothing if the product is not in
    /// the cart.
    pub fn remove(&mut self, id: &ProductId) {
        self.lines.retain(|line| &line.product.id != id);
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of every line's subtotal, computed on each call.
    pub fn total(&self) -> Money<'static, Currency> {
        let minor_units = self
            .lines
            .iter()
            .map(|line| line.subtotal().to_minor_units())
            .fold(0_i64, i64::saturating_add);

        Money::from_minor(minor_units, self.currency)
    }

    /// Total number of units across all lines.
    pub fn count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Look up the line for a product.
    pub fn line(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.product.id == id)
    }

    /// All lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the currency of the cart.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    fn line_mut(&mut self, id: &ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| &line.product.id == id)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;

    use super::*;

    fn scalpel() -> Product {
        Product::new("prod-002", "Surgical Scalpel", Money::from_minor(89_50, iso::USD))
    }

    fn stethoscope() -> Product {
        Product::new(
            "prod-001",
            "Digital Stethoscope",
            Money::from_minor(299_99, iso::USD),
        )
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "priced in another currency")]
    fn foreign_currency_product_is_refused() {
        let mut cart = Cart::new(iso::GBP);

        cart.add(stethoscope());
    }

    #[test]
    fn new_cart_is_empty() {
        let cart = Cart::new(iso::USD);

        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
        assert_eq!(cart.total(), Money::from_minor(0, iso::USD));
    }

    #[test]
    fn adding_same_product_bumps_quantity() {
        let mut cart = Cart::new(iso::USD);

        cart.add(stethoscope());
        cart.add(stethoscope());

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.count(), 2);
        assert_eq!(cart.total(), Money::from_minor(599_98, iso::USD));
    }

    #[test]
    fn total_spans_lines() {
        let mut cart = Cart::new(iso::USD);

        cart.add(stethoscope());
        cart.add(scalpel());

        assert_eq!(cart.total(), Money::from_minor(389_49, iso::USD));
    }

    #[test]
    fn lines_keep_insertion_order() {
        let mut cart = Cart::new(iso::USD);

        cart.add(scalpel());
        cart.add(stethoscope());
        cart.add(scalpel());

        let ids: Vec<&str> = cart
            .lines()
            .iter()
            .map(|line| line.product().id.as_str())
            .collect();

        assert_eq!(ids, ["prod-002", "prod-001"]);
    }

    #[test]
    fn line_price_is_captured_on_first_add() {
        let mut cart = Cart::new(iso::USD);
        let mut repriced = stethoscope();
        repriced.price = Money::from_minor(1_00, iso::USD);

        cart.add(stethoscope());
        cart.add(repriced);

        let line = cart.line(&ProductId::from("prod-001"));

        assert_eq!(
            line.map(CartLine::subtotal),
            Some(Money::from_minor(599_98, iso::USD))
        );
    }

    #[test]
    fn remove_deletes_whole_line() {
        let mut cart = Cart::new(iso::USD);

        cart.add(stethoscope());
        cart.add(stethoscope());
        cart.add(scalpel());
        cart.remove(&ProductId::from("prod-001"));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.count(), 1);
        assert!(cart.line(&ProductId::from("prod-001")).is_none());
    }

    #[test]
    fn clear_empties_cart() {
        let mut cart = Cart::new(iso::USD);

        cart.add(stethoscope());
        cart.add(scalpel());
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::from_minor(0, iso::USD));
    }
}
