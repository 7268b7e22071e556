use serde::{Deserialize, Serialize};

use super::UserId;
use crate::model::vo::{lenient, LooseDateTime};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "lenient::default_true", deserialize_with = "lenient::or_true")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub is_admin: bool,
    #[serde(default)]
    pub created_at: Option<LooseDateTime>,
}

/// User as nested in teams.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserBasic {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default = "default_role")]
    pub role: String,
}

/// Response of login and registration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthToken {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: User,
}

fn default_role() -> String {
    "Standard User".to_string()
}

fn default_token_type() -> String {
    "bearer".to_string()
}
