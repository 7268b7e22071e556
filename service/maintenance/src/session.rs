use std::sync::Arc;

use async_trait::async_trait;
use domain_maintenance::{
    exception::{MaintenanceException, MaintenanceResult},
    model::{
        entity::{AuthToken, User},
        vo::{LoginForm, RegisterForm, Session},
    },
    repository::AuthRepo,
    service::SessionService,
};
use tracing::{info, warn};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct SessionServiceImpl {
    auth_repo: Arc<dyn AuthRepo>,
    session: Arc<Session>,
}

impl SessionServiceImpl {
    async fn establish(&self, token: AuthToken) -> User {
        info!("Signed in as {}.", token.user.email);
        self.session.establish(token.access_token, token.user.clone()).await;
        token.user
    }
}

#[async_trait]
impl SessionService for SessionServiceImpl {
    async fn login(&self, email: String, password: String) -> MaintenanceResult<User> {
        let token = self.auth_repo.login(LoginForm { email, password }).await?;
        Ok(self.establish(token).await)
    }

    async fn register(
        &self,
        name: String,
        email: String,
        password: String,
    ) -> MaintenanceResult<User> {
        let token = self
            .auth_repo
            .register(RegisterForm {
                name,
                email,
                password,
            })
            .await?;
        Ok(self.establish(token).await)
    }

    async fn restore(&self) -> MaintenanceResult<Option<User>> {
        if self.session.token().await.is_none() {
            return Ok(None);
        }
        match self.auth_repo.current_user().await {
            Ok(user) => {
                self.session.confirm(user.clone()).await;
                Ok(Some(user))
            }
            Err(e) => {
                warn!("Stored token was rejected: {e}");
                self.session.clear().await;
                Err(MaintenanceException::Unauthenticated)
            }
        }
    }

    async fn logout(&self) {
        self.session.clear().await;
        info!("Signed out.");
    }

    async fn current_user(&self) -> MaintenanceResult<User> {
        self.session.user().await.ok_or(MaintenanceException::Unauthenticated)
    }
}
