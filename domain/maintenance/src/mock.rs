use async_trait::async_trait;
use mockall::mock;

use crate::{
    model::{
        entity::{AuthToken, Equipment, EquipmentId, MaintenanceRequest, RequestId, Stage, Team, User},
        vo::{DashboardStats, LoginForm, RegisterForm, RequestDraft, RequestFilter, RequestUpdate},
    },
    repository::{AuthRepo, DashboardRepo, EquipmentRepo, RequestRepo, StageRepo, TeamRepo},
};

mock! {
    pub StageRepo {}
    #[async_trait]
    impl StageRepo for StageRepo {
        async fn list_stages(&self) -> anyhow::Result<Vec<Stage>>;
    }
}

mock! {
    pub RequestRepo {}
    #[async_trait]
    impl RequestRepo for RequestRepo {
        async fn list_requests(&self, filter: RequestFilter) -> anyhow::Result<Vec<MaintenanceRequest>>;
        async fn get_request(&self, id: RequestId) -> anyhow::Result<MaintenanceRequest>;
        async fn create_request(&self, draft: RequestDraft) -> anyhow::Result<MaintenanceRequest>;
        async fn update_request(
            &self,
            id: RequestId,
            update: RequestUpdate,
        ) -> anyhow::Result<MaintenanceRequest>;
        async fn assign_to_me(&self, id: RequestId) -> anyhow::Result<MaintenanceRequest>;
    }
}

mock! {
    pub TeamRepo {}
    #[async_trait]
    impl TeamRepo for TeamRepo {
        async fn list_teams(&self) -> anyhow::Result<Vec<Team>>;
    }
}

mock! {
    pub EquipmentRepo {}
    #[async_trait]
    impl EquipmentRepo for EquipmentRepo {
        async fn list_equipment(&self, active_only: bool) -> anyhow::Result<Vec<Equipment>>;
        async fn get_equipment(&self, id: EquipmentId) -> anyhow::Result<Equipment>;
        async fn scrap_equipment(&self, id: EquipmentId) -> anyhow::Result<Equipment>;
    }
}

mock! {
    pub DashboardRepo {}
    #[async_trait]
    impl DashboardRepo for DashboardRepo {
        async fn dashboard_stats(&self) -> anyhow::Result<DashboardStats>;
    }
}

mock! {
    pub AuthRepo {}
    #[async_trait]
    impl AuthRepo for AuthRepo {
        async fn login(&self, form: LoginForm) -> anyhow::Result<AuthToken>;
        async fn register(&self, form: RegisterForm) -> anyhow::Result<AuthToken>;
        async fn current_user(&self) -> anyhow::Result<User>;
    }
}
