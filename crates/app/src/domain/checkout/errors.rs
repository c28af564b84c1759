//! Checkout errors.

use thiserror::Error;

use crate::{api::ApiError, session::SessionError};

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("please login to complete your order")]
    Session(#[from] SessionError),

    #[error("cart is empty")]
    EmptyCart,

    #[error("shipping address is required")]
    MissingShippingAddress,

    #[error("failed to place order")]
    Api(#[from] ApiError),
}
