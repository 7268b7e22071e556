use async_trait::async_trait;

use crate::model::entity::Team;

#[async_trait]
pub trait TeamRepo: Send + Sync {
    async fn list_teams(&self) -> anyhow::Result<Vec<Team>>;
}
