use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use domain_maintenance::{
    exception::MaintenanceException,
    mock::{
        MockAuthRepo, MockDashboardRepo, MockEquipmentRepo, MockRequestRepo, MockStageRepo,
        MockTeamRepo,
    },
    model::{
        entity::{AuthToken, Equipment, MaintenanceRequest, Stage, StageKind, Team, User},
        vo::{DashboardStats, RequestDraft, RequestFilter, RequestUpdate, Session},
    },
    service::{
        AnalyticsService, BoardService, CalendarService, EquipmentService, SessionService,
        WorkflowService,
    },
};
use serde_json::json;
use service_maintenance::{
    AnalyticsServiceImpl, BoardServiceImpl, CalendarServiceImpl, EquipmentServiceImpl,
    SessionServiceImpl, WorkflowServiceImpl,
};

fn stages() -> Vec<Stage> {
    serde_json::from_value(json!([
        { "id": 1, "name": "New", "sequence": 1 },
        { "id": 2, "name": "In Progress", "sequence": 2 },
        { "id": 3, "name": "Repaired", "sequence": 3, "done": true },
        { "id": 4, "name": "Scrap", "sequence": 4, "done": true, "is_scrap": true }
    ]))
    .unwrap()
}

fn request(id: i64, stage_id: i64) -> MaintenanceRequest {
    serde_json::from_value(json!({
        "id": id,
        "name": format!("request {id}"),
        "equipment_id": 1,
        "stage_id": stage_id,
        "created_at": "2026-01-05T10:00:00"
    }))
    .unwrap()
}

fn user() -> User {
    serde_json::from_value(json!({ "id": 5, "name": "Ana", "email": "ana@example.com" })).unwrap()
}

fn workflow(request_repo: MockRequestRepo, stage_repo: MockStageRepo) -> WorkflowServiceImpl {
    WorkflowServiceImpl::builder()
        .request_repo(Arc::new(request_repo))
        .stage_repo(Arc::new(stage_repo))
        .build()
}

#[tokio::test]
async fn transition_to_current_stage_is_a_noop() {
    let mut request_repo = MockRequestRepo::new();
    request_repo.expect_update_request().never();
    let service = workflow(request_repo, MockStageRepo::new());

    let current = request(1, 2);
    let result = service.transition(&current, 2, &stages()).await.unwrap();
    assert_eq!(result, current);
}

#[tokio::test]
async fn transition_submits_only_the_stage() {
    let mut request_repo = MockRequestRepo::new();
    request_repo
        .expect_update_request()
        .withf(|id, update| *id == 1 && *update == RequestUpdate::stage(3))
        .times(1)
        .returning(|id, update| Ok(request(id, update.stage_id.unwrap_or_default())));
    let service = workflow(request_repo, MockStageRepo::new());

    let moved = service.transition(&request(1, 1), 3, &stages()).await.unwrap();
    assert_eq!(moved.stage_id, Some(3));
}

#[tokio::test]
async fn transition_out_of_terminal_stage_is_allowed() {
    let mut request_repo = MockRequestRepo::new();
    request_repo
        .expect_update_request()
        .times(1)
        .returning(|id, update| Ok(request(id, update.stage_id.unwrap_or_default())));
    let service = workflow(request_repo, MockStageRepo::new());

    let reopened = service.transition(&request(1, 4), 1, &stages()).await.unwrap();
    assert_eq!(reopened.stage_id, Some(1));
}

#[tokio::test]
async fn transition_failure_is_a_transport_error() {
    let mut request_repo = MockRequestRepo::new();
    request_repo
        .expect_update_request()
        .returning(|_, _| Err(anyhow::anyhow!("connection refused")));
    let service = workflow(request_repo, MockStageRepo::new());

    let err = service.transition(&request(1, 1), 2, &stages()).await.unwrap_err();
    assert!(matches!(err, MaintenanceException::Transport { .. }));
}

#[tokio::test]
async fn new_request_lands_in_first_fetched_stage() {
    let mut stage_repo = MockStageRepo::new();
    stage_repo.expect_list_stages().returning(|| {
        let mut stages = stages();
        stages.reverse();
        Ok(stages)
    });
    let mut request_repo = MockRequestRepo::new();
    request_repo
        .expect_create_request()
        .withf(|draft| draft.stage_id == Some(4))
        .times(1)
        .returning(|draft| Ok(request(10, draft.stage_id.unwrap_or_default())));
    let service = workflow(request_repo, stage_repo);

    let draft = RequestDraft::builder().name("Noisy fan").equipment_id(1).build();
    assert_eq!(service.create_request(draft).await.unwrap().stage_id, Some(4));
}

#[tokio::test]
async fn new_request_with_chosen_stage_skips_stage_fetch() {
    let mut stage_repo = MockStageRepo::new();
    stage_repo.expect_list_stages().never();
    let mut request_repo = MockRequestRepo::new();
    request_repo
        .expect_create_request()
        .withf(|draft| draft.stage_id == Some(2))
        .returning(|draft| Ok(request(10, draft.stage_id.unwrap_or_default())));
    let service = workflow(request_repo, stage_repo);

    let draft = RequestDraft::builder().name("Noisy fan").equipment_id(1).stage_id(2).build();
    assert_eq!(service.create_request(draft).await.unwrap().stage_id, Some(2));
}

#[tokio::test]
async fn shortcut_actions_pick_stages_by_flags() {
    let mut request_repo = MockRequestRepo::new();
    request_repo
        .expect_update_request()
        .times(3)
        .returning(|id, update| Ok(request(id, update.stage_id.unwrap_or_default())));
    let service = workflow(request_repo, MockStageRepo::new());
    let stages = stages();

    assert_eq!(service.start(&request(1, 1), &stages).await.unwrap().stage_id, Some(2));
    assert_eq!(service.complete(&request(1, 2), &stages).await.unwrap().stage_id, Some(3));
    assert_eq!(service.scrap(&request(1, 2), &stages).await.unwrap().stage_id, Some(4));
}

#[tokio::test]
async fn shortcut_without_target_stage_fails_without_calling_api() {
    let mut request_repo = MockRequestRepo::new();
    request_repo.expect_update_request().never();
    let service = workflow(request_repo, MockStageRepo::new());
    let only_open: Vec<Stage> = stages().into_iter().filter(|s| !s.is_terminal()).collect();

    let err = service.scrap(&request(1, 1), &only_open).await.unwrap_err();
    assert!(matches!(err, MaintenanceException::NoStageOfKind { kind: StageKind::Scrap }));
}

#[tokio::test]
async fn start_with_only_intake_stage_names_the_missing_stage() {
    let mut request_repo = MockRequestRepo::new();
    request_repo.expect_update_request().never();
    let service = workflow(request_repo, MockStageRepo::new());
    let intake_only: Vec<Stage> = stages().into_iter().filter(|s| s.id != 2).collect();

    let err = service.start(&request(1, 1), &intake_only).await.unwrap_err();
    assert!(matches!(err, MaintenanceException::NoProgressStage));
    assert!(err.to_string().contains("after the intake stage"));
}

fn board_service(request_repo: MockRequestRepo, stage_repo: MockStageRepo) -> BoardServiceImpl {
    let request_repo = Arc::new(request_repo);
    let stage_repo = Arc::new(stage_repo);
    let workflow_service = Arc::new(
        WorkflowServiceImpl::builder()
            .request_repo(request_repo.clone())
            .stage_repo(stage_repo.clone())
            .build(),
    );
    BoardServiceImpl::builder()
        .request_repo(request_repo)
        .stage_repo(stage_repo)
        .workflow_service(workflow_service)
        .build()
}

#[tokio::test]
async fn failed_move_leaves_board_untouched() {
    let mut stage_repo = MockStageRepo::new();
    stage_repo.expect_list_stages().times(1).returning(|| Ok(stages()));
    let mut request_repo = MockRequestRepo::new();
    request_repo
        .expect_list_requests()
        .withf(|filter| *filter == RequestFilter::active())
        .times(1)
        .returning(|_| Ok(vec![request(1, 1), request(2, 2)]));
    request_repo
        .expect_update_request()
        .times(1)
        .returning(|_, _| Err(anyhow::anyhow!("500 Internal Server Error")));
    let service = board_service(request_repo, stage_repo);

    let before = service.refresh().await.unwrap();
    let err = service.move_request(1, 3).await.unwrap_err();
    assert!(matches!(err, MaintenanceException::Transport { .. }));
    assert_eq!(service.snapshot().await, Some(before));
}

#[tokio::test]
async fn successful_move_resynchronizes_board() {
    let mut stage_repo = MockStageRepo::new();
    stage_repo.expect_list_stages().times(2).returning(|| Ok(stages()));
    let fetches = Arc::new(AtomicUsize::new(0));
    let counter = fetches.clone();
    let mut request_repo = MockRequestRepo::new();
    request_repo.expect_list_requests().times(2).returning(move |_| {
        if counter.fetch_add(1, Ordering::SeqCst) == 0 {
            Ok(vec![request(1, 1), request(2, 2)])
        } else {
            Ok(vec![request(1, 3), request(2, 2)])
        }
    });
    request_repo
        .expect_update_request()
        .withf(|id, update| *id == 1 && update.stage_id == Some(3))
        .times(1)
        .returning(|id, _| Ok(request(id, 3)));
    let service = board_service(request_repo, stage_repo);

    let board = service.move_request(1, 3).await.unwrap();
    assert_eq!(fetches.load(Ordering::SeqCst), 2);
    assert_eq!(board.column(3).unwrap().requests.len(), 1);
    assert!(board.column(1).unwrap().requests.is_empty());
    assert_eq!(service.snapshot().await, Some(board));
}

#[tokio::test]
async fn move_to_same_column_makes_no_calls() {
    let mut stage_repo = MockStageRepo::new();
    stage_repo.expect_list_stages().times(1).returning(|| Ok(stages()));
    let mut request_repo = MockRequestRepo::new();
    request_repo.expect_list_requests().times(1).returning(|_| Ok(vec![request(1, 2)]));
    request_repo.expect_update_request().never();
    let service = board_service(request_repo, stage_repo);

    let board = service.move_request(1, 2).await.unwrap();
    assert_eq!(board.column(2).unwrap().requests.len(), 1);
}

#[tokio::test]
async fn moving_unknown_request_fails() {
    let mut stage_repo = MockStageRepo::new();
    stage_repo.expect_list_stages().returning(|| Ok(stages()));
    let mut request_repo = MockRequestRepo::new();
    request_repo.expect_list_requests().returning(|_| Ok(vec![request(1, 2)]));
    let service = board_service(request_repo, stage_repo);

    let err = service.move_request(9, 2).await.unwrap_err();
    assert!(matches!(err, MaintenanceException::NoSuchRequest { id: 9 }));
}

#[tokio::test]
async fn analytics_over_fetched_snapshot() {
    let mut request_repo = MockRequestRepo::new();
    request_repo
        .expect_list_requests()
        .returning(|_| Ok(vec![request(1, 1), request(2, 3), request(3, 42)]));
    let mut stage_repo = MockStageRepo::new();
    stage_repo.expect_list_stages().returning(|| Ok(stages()));
    let mut team_repo = MockTeamRepo::new();
    team_repo.expect_list_teams().returning(|| Ok(Vec::<Team>::new()));
    let mut dashboard_repo = MockDashboardRepo::new();
    dashboard_repo.expect_dashboard_stats().returning(|| {
        Ok(DashboardStats {
            total_requests: 3,
            ..Default::default()
        })
    });
    let service = AnalyticsServiceImpl::builder()
        .request_repo(Arc::new(request_repo))
        .stage_repo(Arc::new(stage_repo))
        .team_repo(Arc::new(team_repo))
        .dashboard_repo(Arc::new(dashboard_repo))
        .build();

    let analytics = service.analytics().await.unwrap();
    assert_eq!(analytics.kpis.total_requests, 3);
    assert_eq!(analytics.kpis.open_requests, 1);
    assert_eq!(analytics.kpis.completed_requests, 1);
    assert_eq!(analytics.by_stage.iter().map(|c| c.count).sum::<usize>(), 2);
    assert_eq!(analytics.monthly_trend.len(), 6);
    assert!(analytics.by_team.is_empty());
    assert_eq!(service.dashboard_stats().await.unwrap().total_requests, 3);
}

#[tokio::test]
async fn analytics_surfaces_fetch_failures() {
    let mut request_repo = MockRequestRepo::new();
    request_repo.expect_list_requests().returning(|_| Err(anyhow::anyhow!("timeout")));
    let mut stage_repo = MockStageRepo::new();
    stage_repo.expect_list_stages().returning(|| Ok(stages()));
    let mut team_repo = MockTeamRepo::new();
    team_repo.expect_list_teams().returning(|| Ok(vec![]));
    let service = AnalyticsServiceImpl::builder()
        .request_repo(Arc::new(request_repo))
        .stage_repo(Arc::new(stage_repo))
        .team_repo(Arc::new(team_repo))
        .dashboard_repo(Arc::new(MockDashboardRepo::new()))
        .build();

    assert!(matches!(
        service.analytics().await.unwrap_err(),
        MaintenanceException::Transport { .. }
    ));
}

#[tokio::test]
async fn calendar_asks_for_preventive_requests() {
    let mut request_repo = MockRequestRepo::new();
    request_repo
        .expect_list_requests()
        .withf(|filter| *filter == RequestFilter::preventive())
        .returning(|_| {
            Ok(vec![serde_json::from_value(json!({
                "id": 3,
                "name": "Quarterly lubrication",
                "equipment_id": 1,
                "request_type": "preventive",
                "schedule_date": "2026-11-03T08:00:00",
                "maintenance_team_id": 2
            }))
            .unwrap()])
        });
    let mut team_repo = MockTeamRepo::new();
    team_repo.expect_list_teams().returning(|| {
        Ok(vec![serde_json::from_value(json!({ "id": 2, "name": "Mechanics", "color": 4 })).unwrap()])
    });
    let service = CalendarServiceImpl::builder()
        .request_repo(Arc::new(request_repo))
        .team_repo(Arc::new(team_repo))
        .build();

    let events = service.events().await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].team_name.as_deref(), Some("Mechanics"));
    assert_eq!(events[0].team_color, 4);
}

fn equipment(id: i64, is_scrap: bool) -> Equipment {
    serde_json::from_value(json!({
        "id": id,
        "name": format!("machine {id}"),
        "is_scrap": is_scrap,
        "active": !is_scrap
    }))
    .unwrap()
}

fn equipment_service(
    equipment_repo: MockEquipmentRepo,
    request_repo: MockRequestRepo,
    stage_repo: MockStageRepo,
) -> EquipmentServiceImpl {
    EquipmentServiceImpl::builder()
        .equipment_repo(Arc::new(equipment_repo))
        .request_repo(Arc::new(request_repo))
        .stage_repo(Arc::new(stage_repo))
        .build()
}

#[tokio::test]
async fn equipment_overview_counts_open_requests() {
    let mut equipment_repo = MockEquipmentRepo::new();
    equipment_repo
        .expect_list_equipment()
        .withf(|active_only| *active_only)
        .times(1)
        .returning(|_| Ok(vec![equipment(1, false), equipment(2, false)]));
    let mut request_repo = MockRequestRepo::new();
    request_repo
        .expect_list_requests()
        .withf(|filter| *filter == RequestFilter::active())
        .returning(|_| Ok(vec![request(1, 1), request(2, 2), request(3, 3)]));
    let mut stage_repo = MockStageRepo::new();
    stage_repo.expect_list_stages().returning(|| Ok(stages()));
    let service = equipment_service(equipment_repo, request_repo, stage_repo);

    let overview = service.overview(true).await.unwrap();
    assert_eq!(overview.len(), 2);
    assert_eq!(overview[0].open_requests, 2);
    assert_eq!(overview[1].open_requests, 0);
}

#[tokio::test]
async fn scrapping_equipment_twice_calls_api_once() {
    let scrapped = Arc::new(AtomicUsize::new(0));
    let calls = scrapped.clone();
    let mut equipment_repo = MockEquipmentRepo::new();
    equipment_repo
        .expect_get_equipment()
        .returning(move |id| Ok(equipment(id, calls.load(Ordering::SeqCst) > 0)));
    let calls = scrapped.clone();
    equipment_repo.expect_scrap_equipment().times(1).returning(move |id| {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok(equipment(id, true))
    });
    let service = equipment_service(equipment_repo, MockRequestRepo::new(), MockStageRepo::new());

    let first = service.scrap(6).await.unwrap();
    assert!(first.is_scrap);
    assert!(!first.active);
    let second = service.scrap(6).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(scrapped.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn missing_equipment_is_a_transport_error() {
    let mut equipment_repo = MockEquipmentRepo::new();
    equipment_repo
        .expect_get_equipment()
        .returning(|_| Err(anyhow::anyhow!("Equipment not found")));
    equipment_repo.expect_scrap_equipment().never();
    let service = equipment_service(equipment_repo, MockRequestRepo::new(), MockStageRepo::new());

    let err = service.scrap(99).await.unwrap_err();
    assert!(matches!(err, MaintenanceException::Transport { .. }));
}

fn session_service(auth_repo: MockAuthRepo, session: Arc<Session>) -> SessionServiceImpl {
    SessionServiceImpl::builder()
        .auth_repo(Arc::new(auth_repo))
        .session(session)
        .build()
}

#[tokio::test]
async fn login_establishes_session_and_logout_clears_it() {
    let mut auth_repo = MockAuthRepo::new();
    auth_repo
        .expect_login()
        .withf(|form| form.email == "ana@example.com" && form.password == "secret")
        .returning(|_| {
            Ok(AuthToken {
                access_token: "jwt".into(),
                token_type: "bearer".into(),
                user: user(),
            })
        });
    let session = Arc::new(Session::new());
    let service = session_service(auth_repo, session.clone());

    let signed_in = service.login("ana@example.com".into(), "secret".into()).await.unwrap();
    assert_eq!(signed_in.id, 5);
    assert_eq!(session.token().await.as_deref(), Some("jwt"));
    assert_eq!(service.current_user().await.unwrap().email, "ana@example.com");

    service.logout().await;
    assert!(!session.is_authenticated().await);
    assert!(matches!(
        service.current_user().await.unwrap_err(),
        MaintenanceException::Unauthenticated
    ));
}

#[tokio::test]
async fn restore_without_token_does_not_call_api() {
    let mut auth_repo = MockAuthRepo::new();
    auth_repo.expect_current_user().never();
    let service = session_service(auth_repo, Arc::new(Session::new()));

    assert!(service.restore().await.unwrap().is_none());
}

#[tokio::test]
async fn restore_verifies_stored_token() {
    let mut auth_repo = MockAuthRepo::new();
    auth_repo.expect_current_user().times(1).returning(|| Ok(user()));
    let session = Arc::new(Session::with_token("stored"));
    let service = session_service(auth_repo, session.clone());

    assert_eq!(service.restore().await.unwrap().map(|u| u.id), Some(5));
    assert_eq!(session.user().await.map(|u| u.id), Some(5));
}

#[tokio::test]
async fn rejected_token_clears_session() {
    let mut auth_repo = MockAuthRepo::new();
    auth_repo
        .expect_current_user()
        .returning(|| Err(anyhow::anyhow!("401 Unauthorized")));
    let session = Arc::new(Session::with_token("expired"));
    let service = session_service(auth_repo, session.clone());

    assert!(matches!(
        service.restore().await.unwrap_err(),
        MaintenanceException::Unauthenticated
    ));
    assert!(session.token().await.is_none());
}

#[tokio::test]
async fn assign_to_me_forwards_to_backend() {
    let mut request_repo = MockRequestRepo::new();
    request_repo.expect_assign_to_me().withf(|id| *id == 7).times(1).returning(|id| {
        let mut assigned = request(id, 2);
        assigned.technician_id = Some(5);
        Ok(assigned)
    });
    let service = workflow(request_repo, MockStageRepo::new());

    assert_eq!(service.assign_to_me(7).await.unwrap().technician_id, Some(5));
}

#[tokio::test]
async fn register_signs_in_new_account() {
    let mut auth_repo = MockAuthRepo::new();
    auth_repo
        .expect_register()
        .withf(|form| form.name == "Ana" && form.email == "ana@example.com")
        .returning(|_| {
            Ok(AuthToken {
                access_token: "fresh".into(),
                token_type: "bearer".into(),
                user: user(),
            })
        });
    let session = Arc::new(Session::new());
    let service = session_service(auth_repo, session.clone());

    service
        .register("Ana".into(), "ana@example.com".into(), "secret".into())
        .await
        .unwrap();
    assert_eq!(session.token().await.as_deref(), Some("fresh"));
    assert!(session.is_authenticated().await);
}
