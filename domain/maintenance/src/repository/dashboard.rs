use async_trait::async_trait;

use crate::model::vo::DashboardStats;

#[async_trait]
pub trait DashboardRepo: Send + Sync {
    async fn dashboard_stats(&self) -> anyhow::Result<DashboardStats>;
}
