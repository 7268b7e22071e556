use async_trait::async_trait;
use domain_maintenance::{model::entity::Stage, repository::StageRepo};

use crate::ApiClient;

#[async_trait]
impl StageRepo for ApiClient {
    async fn list_stages(&self) -> anyhow::Result<Vec<Stage>> {
        self.get("api/stages").await
    }
}
