use serde::{Deserialize, Serialize};

use super::{CategoryId, EquipmentId, TeamId, UserId};
use crate::model::vo::{lenient, LooseDateTime};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: EquipmentId,
    pub name: String,
    #[serde(default = "lenient::default_true", deserialize_with = "lenient::or_true")]
    pub active: bool,
    #[serde(default)]
    pub serial_no: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub owner_id: Option<UserId>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub purchase_date: Option<LooseDateTime>,
    #[serde(default, deserialize_with = "lenient::or_none")]
    pub purchase_value: Option<f64>,
    #[serde(default)]
    pub warranty_date: Option<LooseDateTime>,
    #[serde(default)]
    pub maintenance_team_id: Option<TeamId>,
    #[serde(default)]
    pub technician_id: Option<UserId>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub is_scrap: bool,
    #[serde(default)]
    pub scrap_date: Option<LooseDateTime>,
}
