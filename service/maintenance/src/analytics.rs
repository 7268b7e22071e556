use std::sync::Arc;

use async_trait::async_trait;
use chrono::Local;
use domain_maintenance::{
    analytics::Analytics,
    exception::MaintenanceResult,
    model::vo::{DashboardStats, RequestFilter},
    repository::{DashboardRepo, RequestRepo, StageRepo, TeamRepo},
    service::AnalyticsService,
};
use tracing::debug;
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct AnalyticsServiceImpl {
    request_repo: Arc<dyn RequestRepo>,
    stage_repo: Arc<dyn StageRepo>,
    team_repo: Arc<dyn TeamRepo>,
    dashboard_repo: Arc<dyn DashboardRepo>,
}

#[async_trait]
impl AnalyticsService for AnalyticsServiceImpl {
    async fn analytics(&self) -> MaintenanceResult<Analytics> {
        let (requests, stages, teams) = futures::try_join!(
            self.request_repo.list_requests(RequestFilter::default()),
            self.stage_repo.list_stages(),
            self.team_repo.list_teams(),
        )?;
        debug!(
            "Aggregating {} requests over {} stages and {} teams.",
            requests.len(),
            stages.len(),
            teams.len()
        );
        Ok(Analytics::compute(&requests, &stages, &teams, Local::now().naive_local()))
    }

    async fn dashboard_stats(&self) -> MaintenanceResult<DashboardStats> {
        Ok(self.dashboard_repo.dashboard_stats().await?)
    }
}
