pub mod board;
pub mod calendar;
pub mod datetime;
pub mod equipment_overview;
pub(crate) mod lenient;
pub mod priority;
pub mod request_form;
pub mod request_type;
pub mod session;
pub mod stats;

#[rustfmt::skip]
pub use {
    board::{Board, BoardColumn, ColumnTone},
    calendar::{calendar_events, CalendarEvent},
    datetime::LooseDateTime,
    equipment_overview::{equipment_overview, EquipmentOverview},
    priority::Priority,
    request_form::{LoginForm, RegisterForm, RequestDraft, RequestFilter, RequestUpdate},
    request_type::RequestType,
    session::Session,
    stats::DashboardStats,
};
