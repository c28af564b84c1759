//! Accounts service.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::{
    api::{ApiError, Credentials, Registration, StorefrontApi},
    session::Session,
};

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("authentication failed, please check your credentials")]
    InvalidCredentials(#[source] ApiError),

    #[error("account request failed")]
    Api(#[from] ApiError),
}

#[derive(Clone)]
pub struct AccountsService {
    api: Arc<dyn StorefrontApi>,
}

impl AccountsService {
    #[must_use]
    pub fn new(api: Arc<dyn StorefrontApi>) -> Self {
        Self { api }
    }

    /// Log in and replace the session with the backend's token and user.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::InvalidCredentials`] when the backend refuses
    /// the credentials, [`AccountError::Api`] for any other failure. The
    /// session is unchanged on error.
    pub async fn login(
        &self,
        session: &mut Session,
        credentials: &Credentials,
    ) -> Result<(), AccountError> {
        let response = self.api.login(credentials).await.map_err(|error| {
            if error.is_unauthorized() {
                AccountError::InvalidCredentials(error)
            } else {
                AccountError::Api(error)
            }
        })?;

        info!(user_id = %response.user.id, role = ?response.user.role, "logged in");

        session.sign_in(response);

        Ok(())
    }

    /// Create a customer account. Registration does not sign the user in.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the registration.
    pub async fn register(&self, registration: &Registration) -> Result<(), AccountError> {
        self.api.register(registration).await?;

        info!(email = %registration.email, "account registered");

        Ok(())
    }

    pub fn logout(&self, session: &mut Session) {
        session.sign_out();
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        api::{LoginResponse, MockStorefrontApi, UserId},
        session::{Role, SessionUser},
    };

    use super::*;

    fn credentials() -> Credentials {
        Credentials {
            email: "surgeon@example.com".to_string(),
            password: "hunter2".to_string(),
        }
    }

    #[tokio::test]
    async fn login_signs_session_in() -> TestResult {
        let mut api = MockStorefrontApi::new();

        api.expect_login()
            .withf(|credentials| credentials.email == "surgeon@example.com")
            .returning(|_| {
                Ok(LoginResponse {
                    token: "header.payload.sig".to_string(),
                    user: SessionUser {
                        id: UserId::from("12"),
                        role: Role::Admin,
                    },
                })
            });

        let accounts = AccountsService::new(Arc::new(api));
        let mut session = Session::anonymous();

        accounts.login(&mut session, &credentials()).await?;

        assert_eq!(session.token(), Some("header.payload.sig"));
        assert!(session.require_admin().is_ok());

        accounts.logout(&mut session);

        assert!(session.user().is_none());

        Ok(())
    }

    #[tokio::test]
    async fn rejected_login_leaves_session_alone() {
        let mut api = MockStorefrontApi::new();

        api.expect_login().returning(|_| {
            Err(ApiError::Status {
                status: 401,
                body: "invalid credentials".to_string(),
            })
        });

        let accounts = AccountsService::new(Arc::new(api));
        let mut session = Session::anonymous();

        let result = accounts.login(&mut session, &credentials()).await;

        assert!(matches!(result, Err(AccountError::InvalidCredentials(_))));
        assert_eq!(session, Session::anonymous());
    }

    #[tokio::test]
    async fn register_does_not_sign_in() -> TestResult {
        let mut api = MockStorefrontApi::new();

        api.expect_register()
            .withf(|registration| registration.full_name == "Dr Ayesha Raza")
            .times(1)
            .returning(|_| Ok(serde_json::json!({ "message": "registered" })));

        AccountsService::new(Arc::new(api))
            .register(&Registration {
                email: "ayesha@example.com".to_string(),
                password: "scrub-in".to_string(),
                full_name: "Dr Ayesha Raza".to_string(),
                phone: "+92 300 0000000".to_string(),
            })
            .await?;

        Ok(())
    }
}
