//! Response types returned to API clients.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Kind of catalog entry, derived from the stored `isEvent` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EntryType {
    /// `isEvent == true`.
    Event,
    /// `isEvent == false`.
    News,
    /// `isEvent` absent. Serialized as `null`.
    #[default]
    Unknown,
}

impl EntryType {
    /// Derive the entry type from the tri-state event flag.
    pub fn from_flag(is_event: Option<bool>) -> Self {
        match is_event {
            Some(true) => EntryType::Event,
            Some(false) => EntryType::News,
            None => EntryType::Unknown,
        }
    }

    /// Wire form, `None` for [`EntryType::Unknown`].
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            EntryType::Event => Some("event"),
            EntryType::News => Some("news"),
            EntryType::Unknown => None,
        }
    }
}

impl Serialize for EntryType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_str() {
            Some(s) => serializer.serialize_str(s),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for EntryType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)?.as_deref() {
            Some("event") => Ok(EntryType::Event),
            Some("news") => Ok(EntryType::News),
            None => Ok(EntryType::Unknown),
            Some(other) => Err(serde::de::Error::unknown_variant(other, &["event", "news"])),
        }
    }
}

/// A news or event entry as exposed by the API.
///
/// Every key is always present in JSON; absent values serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    pub id: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "type", default)]
    pub entry_type: EntryType,
    pub catch_line: Option<String>,
    pub language: Option<String>,
    pub status: Option<String>,
}

/// One page of results plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    /// Items on this page.
    pub data: Vec<T>,
    /// Requested page number (0-indexed).
    pub page: i64,
    /// Requested page size.
    pub size: i64,
    /// Total number of items across all pages.
    pub total: u64,
}

impl<T> PagedResponse<T> {
    /// Create a new page.
    pub fn new(data: Vec<T>, page: i64, size: i64, total: u64) -> Self {
        Self {
            data,
            page,
            size,
            total,
        }
    }
}
