//! Field deserializers for backend columns that are nullable on the wire.
//!
//! A `null` or a value of the wrong shape reads as a fallback so that one bad
//! record never fails a whole listing.

use serde::{de::IgnoredAny, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose<T> {
    Valid(T),
    Invalid(IgnoredAny),
}

pub(crate) fn or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Loose::<T>::deserialize(deserializer)? {
        Loose::Valid(value) => Some(value),
        Loose::Invalid(_) => None,
    })
}

pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    or_none(deserializer).map(Option::unwrap_or_default)
}

/// For `active`-style flags the backend defaults to `true`.
pub(crate) fn or_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    or_none(deserializer).map(|value| value.unwrap_or(true))
}

pub(crate) fn default_true() -> bool {
    true
}
