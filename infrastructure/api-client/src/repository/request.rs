use async_trait::async_trait;
use domain_maintenance::{
    model::{
        entity::{MaintenanceRequest, RequestId},
        vo::{RequestDraft, RequestFilter, RequestUpdate},
    },
    repository::RequestRepo,
};
use tracing::debug;

use crate::ApiClient;

#[async_trait]
impl RequestRepo for ApiClient {
    async fn list_requests(&self, filter: RequestFilter) -> anyhow::Result<Vec<MaintenanceRequest>> {
        let requests: Vec<MaintenanceRequest> = self.get_with("api/requests", &filter).await?;
        debug!("Fetched {} requests with {filter:?}.", requests.len());
        Ok(requests)
    }

    async fn get_request(&self, id: RequestId) -> anyhow::Result<MaintenanceRequest> {
        self.get(&format!("api/requests/{id}")).await
    }

    async fn create_request(&self, draft: RequestDraft) -> anyhow::Result<MaintenanceRequest> {
        self.post("api/requests", &draft).await
    }

    async fn update_request(
        &self,
        id: RequestId,
        update: RequestUpdate,
    ) -> anyhow::Result<MaintenanceRequest> {
        self.put(&format!("api/requests/{id}"), &update).await
    }

    async fn assign_to_me(&self, id: RequestId) -> anyhow::Result<MaintenanceRequest> {
        self.post_action(&format!("api/requests/{id}/assign-to-me")).await
    }
}
