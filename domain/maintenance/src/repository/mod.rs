mod auth;
mod dashboard;
mod equipment;
mod request;
mod stage;
mod team;

#[rustfmt::skip]
pub use {
    auth::AuthRepo,
    dashboard::DashboardRepo,
    equipment::EquipmentRepo,
    request::RequestRepo,
    stage::StageRepo,
    team::TeamRepo,
};
