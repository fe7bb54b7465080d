//! Stored document model and identifiers.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// Size of a document identifier in bytes.
pub const ID_SIZE: usize = 12;

/// Length of the hexadecimal text form of an identifier.
pub const ID_HEX_LEN: usize = ID_SIZE * 2;

/// Counter values wrap at 24 bits.
const COUNTER_MASK: u32 = 0x00ff_ffff;

/// A document identifier.
///
/// Layout: `[unix seconds (4 bytes, big-endian)][process unique (5 bytes)][counter (3 bytes, big-endian)]`
///
/// Big-endian timestamp and counter make byte order follow creation order
/// within a process, so key scans return documents oldest first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId([u8; ID_SIZE]);

impl DocumentId {
    /// Wrap raw identifier bytes.
    pub fn from_bytes(bytes: [u8; ID_SIZE]) -> Self {
        Self(bytes)
    }

    /// Decode an identifier from a key slice.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let bytes: [u8; ID_SIZE] = bytes.try_into().ok()?;
        Some(Self(bytes))
    }

    /// Raw identifier bytes.
    pub fn as_bytes(&self) -> &[u8; ID_SIZE] {
        &self.0
    }

    /// Generate a new identifier for the current second.
    pub fn generate() -> Self {
        Self::generate_at(Utc::now().timestamp() as u32)
    }

    /// Generate a new identifier carrying the given timestamp.
    pub fn generate_at(unix_seconds: u32) -> Self {
        static PROCESS_UNIQUE: OnceLock<[u8; 5]> = OnceLock::new();
        static COUNTER: AtomicU32 = AtomicU32::new(0);

        let unique = PROCESS_UNIQUE.get_or_init(rand::random::<[u8; 5]>);
        let counter = COUNTER.fetch_add(1, Ordering::SeqCst) & COUNTER_MASK;

        let mut id = [0u8; ID_SIZE];
        id[..4].copy_from_slice(&unix_seconds.to_be_bytes());
        id[4..9].copy_from_slice(unique);
        id[9..].copy_from_slice(&counter.to_be_bytes()[1..]);
        Self(id)
    }

    /// Check whether `s` is a syntactically valid identifier.
    ///
    /// Pure predicate: 24 hexadecimal characters, either case.
    pub fn is_valid(s: &str) -> bool {
        s.len() == ID_HEX_LEN && s.bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// Parse the hexadecimal text form, returning `None` if it is malformed.
    pub fn parse(s: &str) -> Option<Self> {
        if !Self::is_valid(s) {
            return None;
        }
        let mut bytes = [0u8; ID_SIZE];
        hex::decode_to_slice(s, &mut bytes).ok()?;
        Some(Self(bytes))
    }

    /// Creation time encoded in the identifier.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        let mut secs = [0u8; 4];
        secs.copy_from_slice(&self.0[..4]);
        DateTime::from_timestamp(i64::from(u32::from_be_bytes(secs)), 0)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DocumentId").field(&self.to_string()).finish()
    }
}

impl FromStr for DocumentId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(Error::InvalidKey)
    }
}

impl Serialize for DocumentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid document id: {s:?}"))
        })
    }
}

/// A persisted news or event document.
///
/// Audit fields are kept in storage but never surfaced in responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewsDocument {
    /// Store-assigned identifier. `None` until inserted.
    pub id: Option<DocumentId>,
    pub title: Option<String>,
    pub catch_line: Option<String>,
    /// `true` for events, `false` for news, `None` when unclassified.
    pub is_event: Option<bool>,
    /// Short language code, e.g. `fr` or `en`.
    pub language: Option<String>,
    /// Publication status, e.g. `usable`, `deleted`, `draft`.
    pub status: Option<String>,
    pub user_created: Option<String>,
    pub user_last_modified: Option<String>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_last_modified: Option<DateTime<Utc>>,
}

impl NewsDocument {
    /// Create a document with a title and nothing else set.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Set the catch line.
    pub fn with_catch_line(mut self, catch_line: impl Into<String>) -> Self {
        self.catch_line = Some(catch_line.into());
        self
    }

    /// Set the event flag.
    pub fn with_event(mut self, is_event: bool) -> Self {
        self.is_event = Some(is_event);
        self
    }

    /// Set the language code.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the status.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Stamp creation and modification audit fields.
    pub fn created_by(mut self, user: impl Into<String>, at: DateTime<Utc>) -> Self {
        let user = user.into();
        self.user_created = Some(user.clone());
        self.user_last_modified = Some(user);
        self.date_created = Some(at);
        self.date_last_modified = Some(at);
        self
    }
}
