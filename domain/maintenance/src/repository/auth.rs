use async_trait::async_trait;

use crate::model::{
    entity::{AuthToken, User},
    vo::{LoginForm, RegisterForm},
};

#[async_trait]
pub trait AuthRepo: Send + Sync {
    async fn login(&self, form: LoginForm) -> anyhow::Result<AuthToken>;
    async fn register(&self, form: RegisterForm) -> anyhow::Result<AuthToken>;
    /// User owning the token of the current session.
    async fn current_user(&self) -> anyhow::Result<User>;
}
