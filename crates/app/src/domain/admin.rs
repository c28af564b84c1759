//! Admin console service.
//!
//! An [`AdminService`] can only be obtained for an admin session, so holding
//! one is proof the caller passed the role check.

use std::sync::Arc;

use surgihub::products::ProductId;
use thiserror::Error;
use tracing::info;

use crate::{
    api::{
        AdminApi, ApiError, CategoryDraft, CategoryId, CategoryRecord, OrderId, OrderRecord,
        OrderStatus, ProductDraft, ProductRecord, StatsRecord, UserRecord,
    },
    session::{Session, SessionError},
};

/// Orders shown on the dashboard.
pub const RECENT_ORDERS: usize = 5;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("admin access denied")]
    Session(#[from] SessionError),

    #[error("admin request failed")]
    Api(#[from] ApiError),
}

/// Dashboard counters plus the most recent orders.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub stats: StatsRecord,
    pub recent_orders: Vec<OrderRecord>,
}

#[derive(Clone)]
pub struct AdminService {
    api: Arc<dyn AdminApi>,
}

impl AdminService {
    /// Open the admin console for the given session.
    ///
    /// # Errors
    ///
    /// Returns an error unless an admin is signed in.
    pub fn authorize(api: Arc<dyn AdminApi>, session: &Session) -> Result<Self, AdminError> {
        session.require_admin()?;

        Ok(Self { api })
    }

    /// Load the dashboard.
    ///
    /// # Errors
    ///
    /// Returns an error if either backend call fails.
    pub async fn dashboard(&self) -> Result<Dashboard, AdminError> {
        let (stats, mut recent_orders) = tokio::try_join!(self.api.stats(), self.api.orders())?;

        recent_orders.truncate(RECENT_ORDERS);

        Ok(Dashboard {
            stats,
            recent_orders,
        })
    }

    /// # Errors
    ///
    /// Returns an error if the backend call fails.
    pub async fn products(&self) -> Result<Vec<ProductRecord>, AdminError> {
        Ok(self.api.products().await?)
    }

    /// Create a product, or update it when `id` is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend call fails.
    pub async fn save_product(
        &self,
        id: Option<&ProductId>,
        draft: &ProductDraft,
    ) -> Result<(), AdminError> {
        match id {
            Some(id) => self.api.update_product(id, draft).await?,
            None => self.api.create_product(draft).await?,
        }

        info!(product_id = ?id.map(ProductId::as_str), name = %draft.name, "product saved");

        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the backend call fails.
    pub async fn delete_product(&self, id: &ProductId) -> Result<(), AdminError> {
        self.api.delete_product(id).await?;

        info!(product_id = %id, "product deleted");

        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the backend call fails.
    pub async fn categories(&self) -> Result<Vec<CategoryRecord>, AdminError> {
        Ok(self.api.categories().await?)
    }

    /// Create a category, or update it when `id` is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend call fails.
    pub async fn save_category(
        &self,
        id: Option<&CategoryId>,
        draft: &CategoryDraft,
    ) -> Result<(), AdminError> {
        match id {
            Some(id) => self.api.update_category(id, draft).await?,
            None => self.api.create_category(draft).await?,
        }

        info!(category_id = ?id.map(CategoryId::as_str), name = %draft.name, "category saved");

        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the backend call fails.
    pub async fn delete_category(&self, id: &CategoryId) -> Result<(), AdminError> {
        self.api.delete_category(id).await?;

        info!(category_id = %id, "category deleted");

        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the backend call fails.
    pub async fn orders(&self) -> Result<Vec<OrderRecord>, AdminError> {
        Ok(self.api.orders().await?)
    }

    /// # Errors
    ///
    /// Returns an error if the backend call fails.
    pub async fn set_order_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<(), AdminError> {
        self.api.update_order_status(id, status).await?;

        info!(order_id = %id, ?status, "order status updated");

        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the backend call fails.
    pub async fn users(&self) -> Result<Vec<UserRecord>, AdminError> {
        Ok(self.api.users().await?)
    }
}
