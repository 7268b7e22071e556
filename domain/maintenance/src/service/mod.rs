mod analytics;
mod board;
mod calendar;
mod equipment;
mod session;
mod workflow;

#[rustfmt::skip]
pub use {
    analytics::AnalyticsService,
    board::BoardService,
    calendar::CalendarService,
    equipment::EquipmentService,
    session::SessionService,
    workflow::WorkflowService,
};
