use serde::Serialize;
use typed_builder::TypedBuilder;

use super::{Priority, RequestType};
use crate::model::entity::{EquipmentId, StageId, TeamId, UserId};

/// Query of the request listing, unset fields are not sent.
#[derive(TypedBuilder, Clone, Debug, Default, PartialEq, Serialize)]
pub struct RequestFilter {
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_only: Option<bool>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_id: Option<EquipmentId>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<TeamId>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage_id: Option<StageId>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_type: Option<RequestType>,
}

impl RequestFilter {
    pub fn active() -> Self {
        Self::builder().active_only(true).build()
    }

    pub fn preventive() -> Self {
        Self::builder().request_type(RequestType::Preventive).build()
    }
}

/// Partial update of a request, only set fields are serialized.
#[derive(TypedBuilder, Clone, Debug, Default, PartialEq, Serialize)]
pub struct RequestUpdate {
    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_type: Option<RequestType>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_team_id: Option<TeamId>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technician_id: Option<UserId>,
    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_date: Option<String>,
    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_date: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage_id: Option<StageId>,
    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RequestUpdate {
    /// Body of a stage transition.
    pub fn stage(stage_id: StageId) -> Self {
        Self::builder().stage_id(stage_id).build()
    }
}

/// Body of a request creation.
#[derive(TypedBuilder, Clone, Debug, PartialEq, Serialize)]
pub struct RequestDraft {
    #[builder(setter(into))]
    pub name: String,
    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub equipment_id: EquipmentId,
    #[builder(default)]
    pub request_type: RequestType,
    #[builder(default)]
    pub priority: Priority,
    /// Stage picked by the submitter.
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage_id: Option<StageId>,
    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_date: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_team_id: Option<TeamId>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technician_id: Option<UserId>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}
