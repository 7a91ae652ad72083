//! Wire format for datetime columns.
//!
//! Every datetime crosses the API as `YYYY-MM-DDTHH:MM:SS`, exactly. Inputs
//! in any other shape (including fractional seconds or a timezone suffix)
//! are rejected rather than guessed at.

use chrono::NaiveDateTime;
use serde::{de, Deserialize, Deserializer, Serializer};

pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.format(FORMAT).to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(|err| {
        de::Error::custom(format!("invalid datetime `{raw}`, expected {FORMAT}: {err}"))
    })
}

/// Same format for nullable datetime columns.
pub mod option {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => super::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => {
                let parsed = NaiveDateTime::parse_from_str(&raw, super::FORMAT).map_err(|err| {
                    serde::de::Error::custom(format!(
                        "invalid datetime `{raw}`, expected {}: {err}",
                        super::FORMAT
                    ))
                })?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }
}

/// For PUT bodies on nullable datetime columns: an absent key deserializes
/// to `None` (leave unchanged, via `#[serde(default)]`), an explicit `null`
/// to `Some(None)` (clear the column).
pub mod double_option {
    use chrono::NaiveDateTime;
    use serde::Deserializer;

    pub fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<Option<Option<NaiveDateTime>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        super::option::deserialize(deserializer).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::FORMAT;
    use chrono::NaiveDateTime;

    #[test]
    fn accepts_exact_format_only() {
        assert!(NaiveDateTime::parse_from_str("2024-07-11T12:00:00", FORMAT).is_ok());
        assert!(NaiveDateTime::parse_from_str("2024-07-11 12:00:00", FORMAT).is_err());
        assert!(NaiveDateTime::parse_from_str("2024-07-11T12:00:00.500", FORMAT).is_err());
        assert!(NaiveDateTime::parse_from_str("2024-07-11T12:00:00Z", FORMAT).is_err());
    }
}
