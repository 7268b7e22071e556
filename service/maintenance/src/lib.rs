mod analytics;
mod board;
mod calendar;
mod equipment;
mod session;
mod workflow;

#[rustfmt::skip]
pub use {
    analytics::AnalyticsServiceImpl,
    board::BoardServiceImpl,
    calendar::CalendarServiceImpl,
    equipment::EquipmentServiceImpl,
    session::SessionServiceImpl,
    workflow::WorkflowServiceImpl,
};
