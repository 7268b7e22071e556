use async_trait::async_trait;

use crate::model::{
    entity::{MaintenanceRequest, RequestId},
    vo::{RequestDraft, RequestFilter, RequestUpdate},
};

#[async_trait]
pub trait RequestRepo: Send + Sync {
    async fn list_requests(&self, filter: RequestFilter) -> anyhow::Result<Vec<MaintenanceRequest>>;
    async fn get_request(&self, id: RequestId) -> anyhow::Result<MaintenanceRequest>;
    async fn create_request(&self, draft: RequestDraft) -> anyhow::Result<MaintenanceRequest>;
    /// Applies a partial update and returns the request as stored by the backend.
    async fn update_request(
        &self,
        id: RequestId,
        update: RequestUpdate,
    ) -> anyhow::Result<MaintenanceRequest>;
    /// Makes the signed-in user the technician of the request.
    async fn assign_to_me(&self, id: RequestId) -> anyhow::Result<MaintenanceRequest>;
}
