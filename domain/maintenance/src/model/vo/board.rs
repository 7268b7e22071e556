use serde::Serialize;

use crate::{
    model::entity::{MaintenanceRequest, RequestId, Stage, StageId, StageKind},
    workflow::{self, StageIndex},
};

/// Visual class of a kanban column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnTone {
    /// Lowest-sequence open stage, where new requests land.
    Intake,
    Active,
    Done,
    Scrap,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BoardColumn {
    pub stage: Stage,
    pub tone: ColumnTone,
    pub requests: Vec<MaintenanceRequest>,
}

/// Requests grouped by stage, one column per stage.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Board {
    pub columns: Vec<BoardColumn>,
    /// Requests whose stage is not loaded.
    pub orphaned: usize,
}

impl Board {
    pub fn build(stages: &[Stage], requests: &[MaintenanceRequest]) -> Self {
        let index = StageIndex::new(stages);
        let mut intake_seen = false;
        let columns = workflow::ordered(stages)
            .into_iter()
            .filter(|stage| index.is_first(stage))
            .map(|stage| {
                let tone = match stage.kind() {
                    StageKind::Scrap => ColumnTone::Scrap,
                    StageKind::Done => ColumnTone::Done,
                    StageKind::Open if !intake_seen => {
                        intake_seen = true;
                        ColumnTone::Intake
                    }
                    StageKind::Open => ColumnTone::Active,
                };
                BoardColumn {
                    stage: stage.clone(),
                    tone,
                    requests: requests
                        .iter()
                        .filter(|r| r.stage_id == Some(stage.id))
                        .cloned()
                        .collect(),
                }
            })
            .collect();
        let orphaned = requests.iter().filter(|r| index.get(r.stage_id).is_none()).count();
        Self { columns, orphaned }
    }

    /// Stages in column order.
    pub fn stages(&self) -> Vec<Stage> {
        self.columns.iter().map(|c| c.stage.clone()).collect()
    }

    pub fn find_request(&self, id: RequestId) -> Option<&MaintenanceRequest> {
        self.columns.iter().flat_map(|c| c.requests.iter()).find(|r| r.id == id)
    }

    pub fn column(&self, stage_id: StageId) -> Option<&BoardColumn> {
        self.columns.iter().find(|c| c.stage.id == stage_id)
    }

    pub fn request_count(&self) -> usize {
        self.columns.iter().map(|c| c.requests.len()).sum()
    }
}
