use std::sync::Arc;

use async_trait::async_trait;
use domain_maintenance::{
    exception::MaintenanceResult,
    model::{
        entity::{Equipment, EquipmentId},
        vo::{equipment_overview, EquipmentOverview, RequestFilter},
    },
    repository::{EquipmentRepo, RequestRepo, StageRepo},
    service::EquipmentService,
};
use tracing::info;
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct EquipmentServiceImpl {
    equipment_repo: Arc<dyn EquipmentRepo>,
    request_repo: Arc<dyn RequestRepo>,
    stage_repo: Arc<dyn StageRepo>,
}

#[async_trait]
impl EquipmentService for EquipmentServiceImpl {
    async fn overview(&self, active_only: bool) -> MaintenanceResult<Vec<EquipmentOverview>> {
        let (equipment, requests, stages) = futures::try_join!(
            self.equipment_repo.list_equipment(active_only),
            self.request_repo.list_requests(RequestFilter::active()),
            self.stage_repo.list_stages(),
        )?;
        Ok(equipment_overview(&equipment, &requests, &stages))
    }

    async fn scrap(&self, id: EquipmentId) -> MaintenanceResult<Equipment> {
        let equipment = self.equipment_repo.get_equipment(id).await?;
        if equipment.is_scrap {
            info!("Equipment {id} is already scrapped.");
            return Ok(equipment);
        }
        let scrapped = self.equipment_repo.scrap_equipment(id).await?;
        info!("Equipment {id} ({}) scrapped.", scrapped.name);
        Ok(scrapped)
    }
}
