use std::sync::Arc;

use async_trait::async_trait;
use domain_maintenance::{
    exception::{MaintenanceException, MaintenanceResult},
    model::{
        entity::{MaintenanceRequest, RequestId, Stage, StageId, StageKind},
        vo::{RequestDraft, RequestUpdate},
    },
    repository::{RequestRepo, StageRepo},
    service::WorkflowService,
    workflow::{self, StageIndex},
};
use tracing::{info, warn};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct WorkflowServiceImpl {
    request_repo: Arc<dyn RequestRepo>,
    stage_repo: Arc<dyn StageRepo>,
}

#[async_trait]
impl WorkflowService for WorkflowServiceImpl {
    async fn transition(
        &self,
        request: &MaintenanceRequest,
        target: StageId,
        stages: &[Stage],
    ) -> MaintenanceResult<MaintenanceRequest> {
        if request.stage_id == Some(target) {
            return Ok(request.clone());
        }
        let index = StageIndex::new(stages);
        if !index.contains(target) {
            warn!("Stage {target} is not loaded, submitting move of request {} anyway.", request.id);
        }
        let updated = self
            .request_repo
            .update_request(request.id, RequestUpdate::stage(target))
            .await?;
        info!(
            "Request {} moved from {} to {}.",
            request.id,
            index.name_of(request.stage_id),
            index.name_of(updated.stage_id)
        );
        Ok(updated)
    }

    async fn create_request(&self, mut draft: RequestDraft) -> MaintenanceResult<MaintenanceRequest> {
        if draft.stage_id.is_none() {
            let stages = self.stage_repo.list_stages().await?;
            draft.stage_id = workflow::default_stage_for(None, &stages);
            if draft.stage_id.is_none() {
                warn!("No stages configured, creating request without a stage.");
            }
        }
        let created = self.request_repo.create_request(draft).await?;
        info!("Request {} created in stage {:?}.", created.id, created.stage_id);
        Ok(created)
    }

    async fn start(
        &self,
        request: &MaintenanceRequest,
        stages: &[Stage],
    ) -> MaintenanceResult<MaintenanceRequest> {
        let target =
            workflow::progress_stage(stages).ok_or(MaintenanceException::NoProgressStage)?;
        self.transition(request, target.id, stages).await
    }

    async fn complete(
        &self,
        request: &MaintenanceRequest,
        stages: &[Stage],
    ) -> MaintenanceResult<MaintenanceRequest> {
        let target = workflow::done_stage(stages)
            .ok_or(MaintenanceException::NoStageOfKind { kind: StageKind::Done })?;
        self.transition(request, target.id, stages).await
    }

    async fn scrap(
        &self,
        request: &MaintenanceRequest,
        stages: &[Stage],
    ) -> MaintenanceResult<MaintenanceRequest> {
        let target = workflow::scrap_stage(stages)
            .ok_or(MaintenanceException::NoStageOfKind { kind: StageKind::Scrap })?;
        self.transition(request, target.id, stages).await
    }

    async fn assign_to_me(&self, id: RequestId) -> MaintenanceResult<MaintenanceRequest> {
        let assigned = self.request_repo.assign_to_me(id).await?;
        info!("Request {id} assigned to technician {:?}.", assigned.technician_id);
        Ok(assigned)
    }
}
