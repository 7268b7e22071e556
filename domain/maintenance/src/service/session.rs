use async_trait::async_trait;

use crate::{exception::MaintenanceResult, model::entity::User};

#[async_trait]
pub trait SessionService: Send + Sync {
    async fn login(&self, email: String, password: String) -> MaintenanceResult<User>;

    async fn register(
        &self,
        name: String,
        email: String,
        password: String,
    ) -> MaintenanceResult<User>;

    /// Verifies a stored token. `None` when there is no token, the session is
    /// cleared when the backend rejects it.
    async fn restore(&self) -> MaintenanceResult<Option<User>>;

    async fn logout(&self);

    async fn current_user(&self) -> MaintenanceResult<User>;
}
