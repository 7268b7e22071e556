use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::StageId;
use crate::model::vo::lenient;

/// A column of the maintenance pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub id: StageId,
    pub name: String,
    /// Global display order.
    #[serde(default = "Stage::default_sequence", deserialize_with = "sequence_or_default")]
    pub sequence: i32,
    /// Folded in the kanban view.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub fold: bool,
    /// Terminal success stage.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub done: bool,
    /// Terminal failure stage, the equipment gets disposed.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub is_scrap: bool,
    #[serde(default)]
    pub description: Option<String>,
}

/// Classification of a stage derived from its flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StageKind {
    Open,
    Done,
    Scrap,
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Open => "open",
            Self::Done => "done",
            Self::Scrap => "scrap",
        })
    }
}

impl Stage {
    fn default_sequence() -> i32 {
        10
    }

    pub fn kind(&self) -> StageKind {
        if self.is_scrap {
            StageKind::Scrap
        } else if self.done {
            StageKind::Done
        } else {
            StageKind::Open
        }
    }

    /// Advisory only, nothing stops a request from leaving a terminal stage.
    pub fn is_terminal(&self) -> bool {
        self.done || self.is_scrap
    }

    pub(crate) fn display_key(&self) -> (i32, StageId) {
        (self.sequence, self.id)
    }
}

fn sequence_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    lenient::or_none(deserializer).map(|sequence| sequence.unwrap_or_else(Stage::default_sequence))
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn nullable_flags_read_as_unset() {
        let stages: Vec<Stage> = serde_json::from_str(indoc! {r#"
            [
                {"id": 1, "name": "New", "sequence": null, "fold": null, "done": null, "is_scrap": null},
                {"id": 2, "name": "Repaired", "sequence": 3, "done": true, "is_scrap": null},
                {"id": 3, "name": "Scrap", "done": false, "is_scrap": true}
            ]
        "#})
        .unwrap();
        assert_eq!(stages.len(), 3);
        assert_eq!(stages[0].sequence, 10);
        assert!(!stages[0].fold);
        assert_eq!(stages[0].kind(), StageKind::Open);
        assert_eq!(stages[1].sequence, 3);
        assert_eq!(stages[1].kind(), StageKind::Done);
        assert_eq!(stages[2].sequence, 10);
        assert_eq!(stages[2].kind(), StageKind::Scrap);
        assert!(stages[2].is_terminal());
    }
}
