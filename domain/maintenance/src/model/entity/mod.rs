pub mod equipment;
pub mod maintenance_request;
pub mod stage;
pub mod team;
pub mod user;

pub type StageId = i64;
pub type RequestId = i64;
pub type EquipmentId = i64;
pub type TeamId = i64;
pub type UserId = i64;
pub type CategoryId = i64;

#[rustfmt::skip]
pub use {
    equipment::Equipment,
    maintenance_request::MaintenanceRequest,
    stage::{Stage, StageKind},
    team::Team,
    user::{AuthToken, User, UserBasic},
};
