use serde::{Deserialize, Serialize};

/// Server-side counters of the home dashboard.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_equipment: usize,
    pub active_equipment: usize,
    pub scrapped_equipment: usize,
    pub total_requests: usize,
    pub open_requests: usize,
    pub completed_requests: usize,
    pub urgent_requests: usize,
}
