use async_trait::async_trait;

use crate::{
    exception::MaintenanceResult,
    model::{
        entity::{RequestId, StageId},
        vo::Board,
    },
};

/// Cached kanban board backed by the api.
#[async_trait]
pub trait BoardService: Send + Sync {
    /// Refetches stages and requests and replaces the cached board.
    async fn refresh(&self) -> MaintenanceResult<Board>;

    /// The cached board, if it was loaded.
    async fn snapshot(&self) -> Option<Board>;

    /// Drops a request onto a stage column. The cached board only changes
    /// after a successful transition, by refetching it completely.
    async fn move_request(&self, request_id: RequestId, target: StageId)
        -> MaintenanceResult<Board>;
}
