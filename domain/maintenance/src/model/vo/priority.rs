use std::{fmt, str::FromStr};

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

/// Urgency of a maintenance request, sent over the wire as `"0"`..`"3"`.
#[derive(
    FromPrimitive,
    ToPrimitive,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum Priority {
    Low = 0,
    #[default]
    Medium = 1,
    High = 2,
    Urgent = 3,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Self::Low, Self::Medium, Self::High, Self::Urgent];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }

    pub fn code(&self) -> String {
        self.to_u8().unwrap_or_default().to_string()
    }

    /// Calendar color of events with this priority.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Urgent => "#dc2626",
            Self::High => "#ea580c",
            Self::Medium => "#2563eb",
            Self::Low => "#6b7280",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug)]
#[error("Unknown priority code: {0}.")]
pub struct UnknownPriority(String);

impl FromStr for Priority {
    type Err = UnknownPriority;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Priority::from_u8)
            .ok_or_else(|| UnknownPriority(s.to_owned()))
    }
}

impl TryFrom<String> for Priority {
    type Error = UnknownPriority;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Priority> for String {
    fn from(value: Priority) -> Self {
        value.code()
    }
}
