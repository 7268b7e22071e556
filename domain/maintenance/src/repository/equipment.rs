use async_trait::async_trait;

use crate::model::entity::{Equipment, EquipmentId};

#[async_trait]
pub trait EquipmentRepo: Send + Sync {
    async fn list_equipment(&self, active_only: bool) -> anyhow::Result<Vec<Equipment>>;
    async fn get_equipment(&self, id: EquipmentId) -> anyhow::Result<Equipment>;
    async fn scrap_equipment(&self, id: EquipmentId) -> anyhow::Result<Equipment>;
}
