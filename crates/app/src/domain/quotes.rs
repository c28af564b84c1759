//! Quote requests.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::{
    api::{ApiError, QuoteRequest, StorefrontApi},
    session::Session,
};

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("quote message is required")]
    EmptyMessage,

    #[error("failed to send quote request")]
    Api(#[from] ApiError),
}

#[derive(Clone)]
pub struct QuotesService {
    api: Arc<dyn StorefrontApi>,
}

impl QuotesService {
    #[must_use]
    pub fn new(api: Arc<dyn StorefrontApi>) -> Self {
        Self { api }
    }

    /// Send a bulk quote request. Guests may ask too; signed-in users have
    /// their id attached.
    ///
    /// # Errors
    ///
    /// Returns an error if the message is blank or the backend rejects it.
    pub async fn request(&self, session: &Session, message: &str) -> Result<(), QuoteError> {
        let message = message.trim();

        if message.is_empty() {
            return Err(QuoteError::EmptyMessage);
        }

        let quote = QuoteRequest {
            message: message.to_string(),
            user_id: session.user().map(|user| user.id.clone()),
        };

        self.api.request_quote(&quote).await?;

        info!(guest = quote.user_id.is_none(), "quote requested");

        Ok(())
    }
}
