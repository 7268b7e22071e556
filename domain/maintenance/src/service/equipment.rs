use async_trait::async_trait;

use crate::{
    exception::MaintenanceResult,
    model::{
        entity::{Equipment, EquipmentId},
        vo::EquipmentOverview,
    },
};

#[async_trait]
pub trait EquipmentService: Send + Sync {
    /// Equipment with its open request counts, scrapped machines only when
    /// `active_only` is off.
    async fn overview(&self, active_only: bool) -> MaintenanceResult<Vec<EquipmentOverview>>;

    /// Retires a machine. Already scrapped equipment is returned unchanged.
    async fn scrap(&self, id: EquipmentId) -> MaintenanceResult<Equipment>;
}
