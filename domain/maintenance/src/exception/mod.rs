use thiserror::Error;

use crate::model::entity::{RequestId, StageKind};

pub type MaintenanceResult<T> = Result<T, MaintenanceException>;

#[derive(Error, Debug)]
pub enum MaintenanceException {
    #[error("There is no maintenance request with id: {id}.")]
    NoSuchRequest { id: RequestId },

    #[error("There is no {kind} stage configured.")]
    NoStageOfKind { kind: StageKind },

    #[error("There is no open stage after the intake stage to start work in.")]
    NoProgressStage,

    #[error("Not signed in.")]
    Unauthenticated,

    #[error("Maintenance api call failed: {source}")]
    Transport {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for MaintenanceException {
    fn from(e: anyhow::Error) -> Self {
        MaintenanceException::Transport { source: e }
    }
}
