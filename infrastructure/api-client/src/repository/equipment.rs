use async_trait::async_trait;
use domain_maintenance::{
    model::entity::{Equipment, EquipmentId},
    repository::EquipmentRepo,
};

use crate::ApiClient;

#[async_trait]
impl EquipmentRepo for ApiClient {
    async fn list_equipment(&self, active_only: bool) -> anyhow::Result<Vec<Equipment>> {
        self.get_with("api/equipment", &[("active_only", active_only)]).await
    }

    async fn get_equipment(&self, id: EquipmentId) -> anyhow::Result<Equipment> {
        self.get(&format!("api/equipment/{id}")).await
    }

    async fn scrap_equipment(&self, id: EquipmentId) -> anyhow::Result<Equipment> {
        self.post_action(&format!("api/equipment/{id}/scrap")).await
    }
}
