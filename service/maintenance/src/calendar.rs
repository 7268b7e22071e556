use std::sync::Arc;

use async_trait::async_trait;
use domain_maintenance::{
    exception::MaintenanceResult,
    model::vo::{calendar_events, CalendarEvent, RequestFilter},
    repository::{RequestRepo, TeamRepo},
    service::CalendarService,
};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct CalendarServiceImpl {
    request_repo: Arc<dyn RequestRepo>,
    team_repo: Arc<dyn TeamRepo>,
}

#[async_trait]
impl CalendarService for CalendarServiceImpl {
    async fn events(&self) -> MaintenanceResult<Vec<CalendarEvent>> {
        let (requests, teams) = futures::try_join!(
            self.request_repo.list_requests(RequestFilter::preventive()),
            self.team_repo.list_teams(),
        )?;
        Ok(calendar_events(&requests, &teams))
    }
}
