use async_trait::async_trait;

use crate::{analytics::Analytics, exception::MaintenanceResult, model::vo::DashboardStats};

#[async_trait]
pub trait AnalyticsService: Send + Sync {
    /// Client-side statistics over a fresh snapshot of requests, stages and teams.
    async fn analytics(&self) -> MaintenanceResult<Analytics>;

    /// Counters computed by the backend.
    async fn dashboard_stats(&self) -> MaintenanceResult<DashboardStats>;
}
