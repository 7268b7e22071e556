use serde::{Deserialize, Serialize};

use super::{TeamId, UserBasic, UserId};
use crate::model::vo::lenient;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default = "lenient::default_true", deserialize_with = "lenient::or_true")]
    pub active: bool,
    /// Palette index used by the calendar.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub color: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "team_leader_id")]
    pub leader_id: Option<UserId>,
    #[serde(default)]
    pub leader: Option<UserBasic>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub members: Vec<UserBasic>,
}

impl Team {
    pub fn has_member(&self, user_id: UserId) -> bool {
        self.leader_id == Some(user_id) || self.members.iter().any(|m| m.id == user_id)
    }
}
