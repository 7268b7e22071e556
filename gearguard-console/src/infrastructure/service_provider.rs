use std::sync::Arc;

use domain_maintenance::{model::vo::Session, service::*};
use getset::Getters;
use infrastructure_api_client::ApiClient;
use service_maintenance::*;

use super::config::ConsoleConfig;

/// Services of one console run, all sharing one session and one client.
#[derive(Getters)]
#[getset(get = "pub")]
pub struct ServiceProvider {
    config: ConsoleConfig,
    client: Arc<ApiClient>,
    workflow_service: Arc<dyn WorkflowService>,
    board_service: Arc<dyn BoardService>,
    analytics_service: Arc<dyn AnalyticsService>,
    calendar_service: Arc<dyn CalendarService>,
    equipment_service: Arc<dyn EquipmentService>,
    session_service: Arc<dyn SessionService>,
}

impl ServiceProvider {
    pub fn build(config: ConsoleConfig) -> anyhow::Result<Self> {
        let session = Arc::new(match config.auth().token() {
            Some(token) => Session::with_token(token.as_str()),
            None => Session::new(),
        });
        let client = Arc::new(ApiClient::from_config(config.api(), session.clone())?);

        let workflow_service: Arc<dyn WorkflowService> = Arc::new(
            WorkflowServiceImpl::builder()
                .request_repo(client.clone())
                .stage_repo(client.clone())
                .build(),
        );
        let board_service = Arc::new(
            BoardServiceImpl::builder()
                .request_repo(client.clone())
                .stage_repo(client.clone())
                .workflow_service(workflow_service.clone())
                .build(),
        );
        let analytics_service = Arc::new(
            AnalyticsServiceImpl::builder()
                .request_repo(client.clone())
                .stage_repo(client.clone())
                .team_repo(client.clone())
                .dashboard_repo(client.clone())
                .build(),
        );
        let calendar_service = Arc::new(
            CalendarServiceImpl::builder()
                .request_repo(client.clone())
                .team_repo(client.clone())
                .build(),
        );
        let equipment_service = Arc::new(
            EquipmentServiceImpl::builder()
                .equipment_repo(client.clone())
                .request_repo(client.clone())
                .stage_repo(client.clone())
                .build(),
        );
        let session_service = Arc::new(
            SessionServiceImpl::builder()
                .auth_repo(client.clone())
                .session(session)
                .build(),
        );

        Ok(Self {
            config,
            client,
            workflow_service,
            board_service,
            analytics_service,
            calendar_service,
            equipment_service,
            session_service,
        })
    }
}
