//! Checkout service.

use std::sync::Arc;

use surgihub::{prices::price_to_decimal, storefront::Storefront};
use tracing::info;

use crate::{
    api::{NewOrder, NewOrderItem, PaymentMethod, StorefrontApi},
    domain::checkout::errors::CheckoutError,
    session::{Session, SessionUser},
};

/// What the customer fills in on the checkout page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDetails {
    pub shipping_address: String,
    pub payment_method: PaymentMethod,
}

/// Turn the current cart into an order submission.
///
/// # Errors
///
/// Returns an error if the cart is empty or the shipping address is blank.
pub fn build_order(
    store: &Storefront,
    user: &SessionUser,
    details: &OrderDetails,
) -> Result<NewOrder, CheckoutError> {
    if store.cart().is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let shipping_address = details.shipping_address.trim();

    if shipping_address.is_empty() {
        return Err(CheckoutError::MissingShippingAddress);
    }

    let items = store
        .cart()
        .lines()
        .iter()
        .map(|line| NewOrderItem {
            product_id: line.product().id.clone(),
            quantity: line.quantity(),
            price: price_to_decimal(&line.product().price),
        })
        .collect();

    Ok(NewOrder {
        user_id: user.id.clone(),
        total_amount: price_to_decimal(&store.cart_total()),
        shipping_address: shipping_address.to_string(),
        payment_method: details.payment_method,
        items,
    })
}

#[derive(Clone)]
pub struct CheckoutService {
    api: Arc<dyn StorefrontApi>,
}

impl CheckoutService {
    #[must_use]
    pub fn new(api: Arc<dyn StorefrontApi>) -> Self {
        Self { api }
    }

    /// Submit the cart as an order for the signed-in user. The cart is
    /// cleared only once the backend has accepted the order.
    ///
    /// # Errors
    ///
    /// Returns an error if nobody is signed in, the order is incomplete, or
    /// the backend rejects it. The cart is left untouched in every case.
    pub async fn place_order(
        &self,
        store: &mut Storefront,
        session: &Session,
        details: &OrderDetails,
    ) -> Result<NewOrder, CheckoutError> {
        let user = session.require_user()?;
        let order = build_order(store, user, details)?;

        self.api.place_order(&order).await?;

        info!(
            user_id = %order.user_id,
            total = %order.total_amount,
            lines = order.items.len(),
            "order placed"
        );

        store.clear_cart();

        Ok(order)
    }
}
