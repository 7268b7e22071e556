use std::collections::HashMap;

use serde::Serialize;

use crate::{
    model::entity::{Equipment, EquipmentId, MaintenanceRequest, Stage},
    workflow::{classify_status, RequestStatus, StageIndex},
};

/// An equipment row with the number of open requests against it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentOverview {
    pub equipment: Equipment,
    pub open_requests: usize,
}

/// Open means active and sitting in a loaded stage that is not done.
pub fn equipment_overview(
    equipment: &[Equipment],
    requests: &[MaintenanceRequest],
    stages: &[Stage],
) -> Vec<EquipmentOverview> {
    let index = StageIndex::new(stages);
    let mut open: HashMap<EquipmentId, usize> = HashMap::new();
    for request in requests.iter().filter(|r| r.active) {
        if classify_status(request, &index) == RequestStatus::Open {
            *open.entry(request.equipment_id).or_default() += 1;
        }
    }
    equipment
        .iter()
        .map(|e| EquipmentOverview {
            equipment: e.clone(),
            open_requests: open.get(&e.id).copied().unwrap_or_default(),
        })
        .collect()
}
