use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{EquipmentId, RequestId, StageId, TeamId, UserId};
use crate::model::vo::{
    datetime::{filled, LooseDateTime},
    lenient, Priority, RequestType,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRequest {
    pub id: RequestId,
    /// Subject.
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "lenient::default_true", deserialize_with = "lenient::or_true")]
    pub active: bool,
    pub equipment_id: EquipmentId,
    #[serde(default)]
    pub stage_id: Option<StageId>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub request_type: RequestType,
    /// `null` and unknown codes read as the backend default.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub priority: Priority,
    #[serde(default)]
    pub schedule_date: Option<LooseDateTime>,
    #[serde(default)]
    pub close_date: Option<LooseDateTime>,
    /// Hours spent.
    #[serde(default, deserialize_with = "lenient::or_none")]
    pub duration: Option<f64>,
    #[serde(default)]
    pub technician_id: Option<UserId>,
    #[serde(default)]
    pub maintenance_team_id: Option<TeamId>,
    #[serde(default)]
    pub created_at: Option<LooseDateTime>,
    #[serde(default)]
    pub updated_at: Option<LooseDateTime>,
}

impl MaintenanceRequest {
    pub fn is_closed(&self) -> bool {
        filled(&self.close_date).is_some()
    }

    pub fn scheduled_at(&self) -> Option<NaiveDateTime> {
        filled(&self.schedule_date).and_then(LooseDateTime::value)
    }

    pub fn created(&self) -> Option<NaiveDateTime> {
        filled(&self.created_at).and_then(LooseDateTime::value)
    }

    /// Scheduled strictly before the current local time and not closed yet.
    pub fn is_overdue(&self) -> bool {
        self.is_overdue_at(Local::now().naive_local())
    }

    pub fn is_overdue_at(&self, now: NaiveDateTime) -> bool {
        if self.is_closed() {
            return false;
        }
        self.scheduled_at().is_some_and(|at| at < now)
    }

    /// Positive hours recorded on the request.
    pub fn recorded_duration(&self) -> Option<f64> {
        self.duration.filter(|d| *d > 0.0)
    }
}
