//! Reviews service.

use std::{ops::RangeInclusive, sync::Arc};

use surgihub::products::ProductId;
use thiserror::Error;
use tracing::info;

use crate::{
    api::{ApiError, NewReview, StorefrontApi},
    session::{Session, SessionError},
};

/// Star ratings a review may carry.
pub const RATING_RANGE: RangeInclusive<u8> = 1..=5;

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("please login to leave a review")]
    Session(#[from] SessionError),

    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    #[error("review comment is required")]
    EmptyComment,

    #[error("failed to submit review")]
    Api(#[from] ApiError),
}

/// A review being written. New drafts start at five stars.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDraft {
    pub rating: u8,
    pub comment: String,
}

impl Default for ReviewDraft {
    fn default() -> Self {
        Self {
            rating: *RATING_RANGE.end(),
            comment: String::new(),
        }
    }
}

#[derive(Clone)]
pub struct ReviewsService {
    api: Arc<dyn StorefrontApi>,
}

impl ReviewsService {
    #[must_use]
    pub fn new(api: Arc<dyn StorefrontApi>) -> Self {
        Self { api }
    }

    /// Publish a review of a product as the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns an error if nobody is signed in, the draft is invalid, or the
    /// backend rejects the review.
    pub async fn submit(
        &self,
        session: &Session,
        product: &ProductId,
        draft: &ReviewDraft,
    ) -> Result<(), ReviewError> {
        let user = session.require_user()?;

        if !RATING_RANGE.contains(&draft.rating) {
            return Err(ReviewError::InvalidRating(draft.rating));
        }

        let comment = draft.comment.trim();

        if comment.is_empty() {
            return Err(ReviewError::EmptyComment);
        }

        self.api
            .submit_review(&NewReview {
                product_id: product.clone(),
                user_id: user.id.clone(),
                rating: draft.rating,
                comment: comment.to_string(),
            })
            .await?;

        info!(product_id = %product, rating = draft.rating, "review submitted");

        Ok(())
    }
}
