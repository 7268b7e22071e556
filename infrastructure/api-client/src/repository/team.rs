use async_trait::async_trait;
use domain_maintenance::{model::entity::Team, repository::TeamRepo};

use crate::ApiClient;

#[async_trait]
impl TeamRepo for ApiClient {
    async fn list_teams(&self) -> anyhow::Result<Vec<Team>> {
        self.get("api/teams").await
    }
}
