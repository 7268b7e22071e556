use async_trait::async_trait;

use crate::model::entity::Stage;

#[async_trait]
pub trait StageRepo: Send + Sync {
    /// All stages in the order the backend returns them.
    async fn list_stages(&self) -> anyhow::Result<Vec<Stage>>;
}
