use async_trait::async_trait;
use domain_maintenance::{model::vo::DashboardStats, repository::DashboardRepo};

use crate::ApiClient;

#[async_trait]
impl DashboardRepo for ApiClient {
    async fn dashboard_stats(&self) -> anyhow::Result<DashboardStats> {
        self.get("api/dashboard/stats").await
    }
}
