use async_trait::async_trait;

use crate::{exception::MaintenanceResult, model::vo::CalendarEvent};

#[async_trait]
pub trait CalendarService: Send + Sync {
    async fn events(&self) -> MaintenanceResult<Vec<CalendarEvent>>;
}
