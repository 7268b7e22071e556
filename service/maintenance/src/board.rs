use std::sync::Arc;

use async_trait::async_trait;
use domain_maintenance::{
    exception::{MaintenanceException, MaintenanceResult},
    model::{
        entity::{RequestId, StageId},
        vo::{Board, RequestFilter},
    },
    repository::{RequestRepo, StageRepo},
    service::{BoardService, WorkflowService},
};
use tokio::sync::RwLock;
use tracing::{debug, warn};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct BoardServiceImpl {
    request_repo: Arc<dyn RequestRepo>,
    stage_repo: Arc<dyn StageRepo>,
    workflow_service: Arc<dyn WorkflowService>,
    #[builder(default = RequestFilter::active())]
    filter: RequestFilter,
    #[builder(default, setter(skip))]
    cache: RwLock<Option<Board>>,
}

impl BoardServiceImpl {
    async fn cached_or_refresh(&self) -> MaintenanceResult<Board> {
        match self.snapshot().await {
            Some(board) => Ok(board),
            None => self.refresh().await,
        }
    }
}

#[async_trait]
impl BoardService for BoardServiceImpl {
    async fn refresh(&self) -> MaintenanceResult<Board> {
        let (stages, requests) = futures::try_join!(
            self.stage_repo.list_stages(),
            self.request_repo.list_requests(self.filter.clone()),
        )?;
        let board = Board::build(&stages, &requests);
        debug!(
            "Board loaded with {} columns and {} requests.",
            board.columns.len(),
            board.request_count()
        );
        if board.orphaned > 0 {
            warn!("{} requests reference stages that are not loaded.", board.orphaned);
        }
        *self.cache.write().await = Some(board.clone());
        Ok(board)
    }

    async fn snapshot(&self) -> Option<Board> {
        self.cache.read().await.clone()
    }

    async fn move_request(
        &self,
        request_id: RequestId,
        target: StageId,
    ) -> MaintenanceResult<Board> {
        let board = self.cached_or_refresh().await?;
        let request = board
            .find_request(request_id)
            .cloned()
            .ok_or(MaintenanceException::NoSuchRequest { id: request_id })?;
        if request.stage_id == Some(target) {
            return Ok(board);
        }
        let stages = board.stages();
        if let Err(e) = self.workflow_service.transition(&request, target, &stages).await {
            warn!("Moving request {request_id} to stage {target} failed: {e}");
            return Err(e);
        }
        self.refresh().await
    }
}
