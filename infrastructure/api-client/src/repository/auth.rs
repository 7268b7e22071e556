use async_trait::async_trait;
use domain_maintenance::{
    model::{
        entity::{AuthToken, User},
        vo::{LoginForm, RegisterForm},
    },
    repository::AuthRepo,
};

use crate::ApiClient;

#[async_trait]
impl AuthRepo for ApiClient {
    async fn login(&self, form: LoginForm) -> anyhow::Result<AuthToken> {
        self.post("api/auth/login", &form).await
    }

    async fn register(&self, form: RegisterForm) -> anyhow::Result<AuthToken> {
        self.post("api/auth/register", &form).await
    }

    async fn current_user(&self) -> anyhow::Result<User> {
        self.get("api/auth/me").await
    }
}
