use async_trait::async_trait;

use crate::{
    exception::MaintenanceResult,
    model::{
        entity::{MaintenanceRequest, RequestId, Stage, StageId},
        vo::RequestDraft,
    },
};

#[async_trait]
pub trait WorkflowService: Send + Sync {
    /// Moves a request to `target`. Any stage is reachable from any stage.
    /// Returns the request unchanged, without calling the backend, when it
    /// already sits in `target`.
    async fn transition(
        &self,
        request: &MaintenanceRequest,
        target: StageId,
        stages: &[Stage],
    ) -> MaintenanceResult<MaintenanceRequest>;

    /// Creates a request, landing in the default stage when none was picked.
    async fn create_request(&self, draft: RequestDraft) -> MaintenanceResult<MaintenanceRequest>;

    async fn start(
        &self,
        request: &MaintenanceRequest,
        stages: &[Stage],
    ) -> MaintenanceResult<MaintenanceRequest>;

    async fn complete(
        &self,
        request: &MaintenanceRequest,
        stages: &[Stage],
    ) -> MaintenanceResult<MaintenanceRequest>;

    async fn scrap(
        &self,
        request: &MaintenanceRequest,
        stages: &[Stage],
    ) -> MaintenanceResult<MaintenanceRequest>;

    async fn assign_to_me(&self, id: RequestId) -> MaintenanceResult<MaintenanceRequest>;
}
