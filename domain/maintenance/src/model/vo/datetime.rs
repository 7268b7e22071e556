use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// A date-time as the backend sends it.
///
/// The raw text is always kept. A value that cannot be parsed is treated as
/// absent by every computation instead of failing the whole payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LooseDateTime {
    raw: String,
    parsed: Option<NaiveDateTime>,
}

impl LooseDateTime {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let parsed = parse_naive(&raw);
        Self { raw, parsed }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Parsed value in local time, `None` when the text is blank or malformed.
    pub fn value(&self) -> Option<NaiveDateTime> {
        self.parsed
    }

    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }
}

impl From<NaiveDateTime> for LooseDateTime {
    fn from(value: NaiveDateTime) -> Self {
        Self {
            raw: value.format("%Y-%m-%dT%H:%M:%S").to_string(),
            parsed: Some(value),
        }
    }
}

fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

impl Serialize for LooseDateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for LooseDateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(raw))
    }
}

/// `Some` only for a value that was actually filled in.
pub(crate) fn filled(value: &Option<LooseDateTime>) -> Option<&LooseDateTime> {
    value.as_ref().filter(|v| !v.is_blank())
}
