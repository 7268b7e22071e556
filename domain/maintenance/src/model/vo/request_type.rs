use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    /// Planned maintenance, shown on the calendar.
    Preventive,
    /// Repair after a breakdown.
    #[default]
    Corrective,
}

impl RequestType {
    pub const ALL: [RequestType; 2] = [Self::Preventive, Self::Corrective];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Preventive => "Preventive",
            Self::Corrective => "Corrective",
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
