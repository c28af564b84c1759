use std::str::FromStr;

use clap::Args;
use surgihub::{products::ProductId, storefront::Storefront};
use surgihub_app::{api::PaymentMethod, context::AppContext, domain::checkout::OrderDetails};
use thiserror::Error;

use crate::cli::failure;

/// Largest quantity a single order argument may ask for.
const MAX_QUANTITY: u32 = 999;

#[derive(Debug, Args)]
pub(crate) struct QuoteArgs {
    /// What you need and in what quantity
    message: String,
}

#[derive(Debug, Args)]
pub(crate) struct OrderArgs {
    /// Items to order as `id` or `id:quantity`
    #[arg(required = true)]
    items: Vec<OrderItem>,

    /// Shipping address
    #[arg(long)]
    address: String,

    /// Payment method
    #[arg(long, value_enum, default_value_t = PaymentMethod::default())]
    payment: PaymentMethod,

    /// Print the cart without placing the order
    #[arg(long)]
    dry_run: bool,
}

/// One `id[:quantity]` order argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OrderItem {
    id: ProductId,
    quantity: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum OrderItemError {
    #[error("product id is empty")]
    MissingId,

    #[error(
        "invalid quantity {0:?}, expected a whole number from 1 to {max}",
        max = MAX_QUANTITY
    )]
    InvalidQuantity(String),
}

impl FromStr for OrderItem {
    type Err = OrderItemError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (id, quantity) = match value.split_once(':') {
            Some((id, quantity)) => {
                let quantity = quantity
                    .trim()
                    .parse::<u32>()
                    .ok()
                    .filter(|quantity| (1..=MAX_QUANTITY).contains(quantity))
                    .ok_or_else(|| OrderItemError::InvalidQuantity(quantity.to_string()))?;

                (id, quantity)
            }
            None => (value, 1),
        };

        let id = id.trim();

        if id.is_empty() {
            return Err(OrderItemError::MissingId);
        }

        Ok(Self {
            id: ProductId::from(id),
            quantity,
        })
    }
}

pub(crate) async fn quote(context: &AppContext, args: QuoteArgs) -> Result<(), String> {
    context
        .quotes()
        .request(&context.session, &args.message)
        .await
        .map_err(|error| failure("failed to request quote", &error))?;

    println!("quote request sent, we will be in touch");

    Ok(())
}

pub(crate) async fn order(context: &AppContext, args: OrderArgs) -> Result<(), String> {
    let catalog = context.catalog();
    let mut store = context.storefront();

    for item in &args.items {
        let product = catalog
            .product(&item.id)
            .await
            .map_err(|error| failure("failed to load product", &error))?;

        for _ in 0..item.quantity {
            store.add_to_cart(product.clone());
        }
    }

    print_cart(&store);

    if args.dry_run {
        return Ok(());
    }

    let details = OrderDetails {
        shipping_address: args.address,
        payment_method: args.payment,
    };

    let total = store.cart_total();
    let order = context
        .checkout()
        .place_order(&mut store, &context.session, &details)
        .await
        .map_err(|error| failure("checkout failed", &error))?;

    println!("order placed: {} lines, total {total}", order.items.len());

    Ok(())
}

fn print_cart(store: &Storefront) {
    for line in store.cart().lines() {
        println!(
            "{}\t{} x {}\t{}",
            line.product().name,
            line.quantity(),
            line.product().price,
            line.subtotal()
        );
    }

    println!("items: {}", store.cart_count());
    println!("total: {}", store.cart_total());
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn bare_id_orders_one() -> TestResult {
        let item: OrderItem = "42".parse()?;

        assert_eq!(item.id, ProductId::from("42"));
        assert_eq!(item.quantity, 1);

        Ok(())
    }

    #[test]
    fn quantity_follows_colon() -> TestResult {
        let item: OrderItem = "scalpel-10:3".parse()?;

        assert_eq!(item.id, ProductId::from("scalpel-10"));
        assert_eq!(item.quantity, 3);

        Ok(())
    }

    #[test]
    fn zero_and_garbage_quantities_are_rejected() {
        assert_eq!(
            "42:0".parse::<OrderItem>(),
            Err(OrderItemError::InvalidQuantity("0".to_string()))
        );
        assert!(matches!(
            "42:two".parse::<OrderItem>(),
            Err(OrderItemError::InvalidQuantity(_))
        ));
        assert_eq!(":2".parse::<OrderItem>(), Err(OrderItemError::MissingId));
    }

    #[test]
    fn quantity_is_capped() -> TestResult {
        let item: OrderItem = format!("p1:{MAX_QUANTITY}").parse()?;

        assert_eq!(item.quantity, MAX_QUANTITY);
        assert_eq!(
            "p1:1000".parse::<OrderItem>(),
            Err(OrderItemError::InvalidQuantity("1000".to_string()))
        );
        assert_eq!(
            "p1:4000000000".parse::<OrderItem>(),
            Err(OrderItemError::InvalidQuantity("4000000000".to_string()))
        );

        Ok(())
    }
}
