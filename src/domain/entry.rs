//! Journal entry model

use chrono::{DateTime, NaiveDate, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Unique entry identifier, derived from the creation instant
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        EntryId(id.into())
    }

    /// Milliseconds since the Unix epoch, as a decimal string
    pub fn from_timestamp(timestamp: DateTime<Utc>) -> Self {
        EntryId(timestamp.timestamp_millis().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display form: `JE-` plus the last six characters of the id
    pub fn short(&self) -> String {
        let start = self
            .0
            .char_indices()
            .rev()
            .nth(5)
            .map(|(idx, _)| idx)
            .unwrap_or(0);
        format!("JE-{}", &self.0[start..])
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One journal record.
///
/// Field names on disk are camelCase (`createdAt`, `updatedAt`) and the
/// optional fields are omitted when unset. Fields this crate does not know
/// are kept in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: EntryId,
    /// Journal day the entry is filed under
    pub date: NaiveDate,
    pub text: String,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "iso_millis::option"
    )]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memorable: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JournalEntry {
    pub fn new(id: EntryId, date: NaiveDate, text: String, created_at: DateTime<Utc>) -> Self {
        JournalEntry {
            id,
            date,
            text,
            created_at,
            updated_at: None,
            memorable: None,
            extra: Map::new(),
        }
    }

    pub fn is_memorable(&self) -> bool {
        self.memorable.unwrap_or(false)
    }

    /// `updated_at` if the entry was ever edited, otherwise `created_at`
    pub fn last_modified(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }

    /// `created_at` exactly as it is persisted
    pub fn created_at_iso(&self) -> String {
        iso_millis::format(&self.created_at)
    }
}

/// Current UTC instant at the precision the store persists
pub fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// ISO-8601 with a `Z` suffix and at least millisecond precision
/// (`2024-03-01T09:30:00.000Z`). Sub-millisecond digits are written only when
/// present.
pub(crate) mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn format(value: &DateTime<Utc>) -> String {
        let precision = if value.timestamp_subsec_nanos() % 1_000_000 == 0 {
            SecondsFormat::Millis
        } else {
            SecondsFormat::AutoSi
        };
        value.to_rfc3339_opts(precision, true)
    }

    fn parse<E: serde::de::Error>(raw: &str) -> Result<DateTime<Utc>, E> {
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| E::custom(format!("invalid timestamp '{}': {}", raw, e)))
    }

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw)
    }

    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            value: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(dt) => serializer.serialize_some(&super::format(dt)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            let raw: Option<String> = Option::deserialize(deserializer)?;
            raw.map(|s| super::parse(&s)).transpose()
        }
    }
}
