//! Stage pipeline rules.
//!
//! The pipeline is a label set: any stage can follow any stage and terminal
//! flags only classify. Everything here is a total function over data that
//! was already fetched.

use std::collections::HashMap;

use serde::Serialize;

use crate::model::entity::{MaintenanceRequest, Stage, StageId, StageKind};

/// Label used wherever a referenced stage is not loaded.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Status of a request derived from its stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Open,
    Completed,
    /// The stage id did not resolve.
    Unknown,
}

/// Lookup of stages by id. The first stage with a given id wins.
#[derive(Debug, Default)]
pub struct StageIndex<'a> {
    by_id: HashMap<StageId, &'a Stage>,
}

impl<'a> StageIndex<'a> {
    pub fn new(stages: &'a [Stage]) -> Self {
        let mut by_id = HashMap::with_capacity(stages.len());
        for stage in stages {
            by_id.entry(stage.id).or_insert(stage);
        }
        Self { by_id }
    }

    pub fn get(&self, id: Option<StageId>) -> Option<&'a Stage> {
        id.and_then(|id| self.by_id.get(&id).copied())
    }

    /// Whether `stage` is the one kept for its id, the first listed wins.
    pub fn is_first(&self, stage: &Stage) -> bool {
        self.by_id.get(&stage.id).is_some_and(|s| std::ptr::eq(*s, stage))
    }

    pub fn contains(&self, id: StageId) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn name_of(&self, id: Option<StageId>) -> &'a str {
        self.get(id).map_or(UNKNOWN_LABEL, |s| s.name.as_str())
    }
}

pub fn classify_status(request: &MaintenanceRequest, stages: &StageIndex<'_>) -> RequestStatus {
    match stages.get(request.stage_id) {
        Some(stage) if stage.done => RequestStatus::Completed,
        Some(_) => RequestStatus::Open,
        None => RequestStatus::Unknown,
    }
}

/// Stage of a new request: the submitter's choice, else the first stage in
/// the order the backend returned them.
pub fn default_stage_for(chosen: Option<StageId>, stages: &[Stage]) -> Option<StageId> {
    chosen.or_else(|| stages.first().map(|s| s.id))
}

/// Stages in display order, `(sequence, id)`.
pub fn ordered(stages: &[Stage]) -> Vec<&Stage> {
    let mut ordered: Vec<&Stage> = stages.iter().collect();
    ordered.sort_by_key(|s| s.display_key());
    ordered
}

/// Stage a request moves to when work starts: the first open stage after
/// the intake stage.
pub fn progress_stage(stages: &[Stage]) -> Option<&Stage> {
    ordered(stages).into_iter().filter(|s| s.kind() == StageKind::Open).nth(1)
}

pub fn done_stage(stages: &[Stage]) -> Option<&Stage> {
    ordered(stages).into_iter().find(|s| s.kind() == StageKind::Done)
}

pub fn scrap_stage(stages: &[Stage]) -> Option<&Stage> {
    ordered(stages).into_iter().find(|s| s.kind() == StageKind::Scrap)
}
