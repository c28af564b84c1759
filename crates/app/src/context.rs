//! App Context

use std::sync::Arc;

use rusty_money::iso::Currency;
use surgihub::storefront::Storefront;
use tracing::debug;

use crate::{
    api::{AdminApi, HttpApiClient, StorefrontApi},
    config::ClientConfig,
    domain::{
        accounts::AccountsService,
        admin::{AdminError, AdminService},
        catalog::CatalogService,
        checkout::CheckoutService,
        quotes::QuotesService,
        reviews::ReviewsService,
    },
    session::Session,
};

#[derive(Clone)]
pub struct AppContext {
    pub storefront_api: Arc<dyn StorefrontApi>,
    pub admin_api: Arc<dyn AdminApi>,
    pub currency: &'static Currency,
    pub session: Session,
}

impl AppContext {
    #[must_use]
    pub fn new(
        storefront_api: Arc<dyn StorefrontApi>,
        admin_api: Arc<dyn AdminApi>,
        currency: &'static Currency,
        session: Session,
    ) -> Self {
        Self {
            storefront_api,
            admin_api,
            currency,
            session,
        }
    }

    /// Build application context backed by the HTTP client.
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        let session = config
            .token
            .as_deref()
            .map_or_else(Session::anonymous, Session::from_token);

        let client = Arc::new(
            HttpApiClient::new(config.api_url.as_str())
                .with_bearer_token(session.token().map(str::to_string)),
        );

        debug!(
            api_url = client.base_url(),
            currency = config.currency.iso_alpha_code,
            signed_in = session.user().is_some(),
            "app context ready"
        );

        Self::new(client.clone(), client, config.currency, session)
    }

    /// Fresh, empty cart and wishlist in the store currency.
    #[must_use]
    pub fn storefront(&self) -> Storefront {
        Storefront::new(self.currency)
    }

    #[must_use]
    pub fn catalog(&self) -> CatalogService {
        CatalogService::new(Arc::clone(&self.storefront_api), self.currency)
    }

    #[must_use]
    pub fn checkout(&self) -> CheckoutService {
        CheckoutService::new(Arc::clone(&self.storefront_api))
    }

    #[must_use]
    pub fn reviews(&self) -> ReviewsService {
        ReviewsService::new(Arc::clone(&self.storefront_api))
    }

    #[must_use]
    pub fn quotes(&self) -> QuotesService {
        QuotesService::new(Arc::clone(&self.storefront_api))
    }

    #[must_use]
    pub fn accounts(&self) -> AccountsService {
        AccountsService::new(Arc::clone(&self.storefront_api))
    }

    /// Admin console for the current session.
    ///
    /// # Errors
    ///
    /// Returns an error unless an admin is signed in.
    pub fn admin(&self) -> Result<AdminService, AdminError> {
        AdminService::authorize(Arc::clone(&self.admin_api), &self.session)
    }
}
