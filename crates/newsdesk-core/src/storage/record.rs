//! On-disk encoding of news documents.

use chrono::{DateTime, Utc};
use rkyv::{Archive, Deserialize, Serialize};

use crate::document::{DocumentId, NewsDocument};
use crate::error::Error;

/// A stored document body. The id is the tree key and is not repeated here.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct Record {
    pub title: Option<String>,
    pub catch_line: Option<String>,
    pub is_event: Option<bool>,
    pub language: Option<String>,
    pub status: Option<String>,
    pub user_created: Option<String>,
    pub user_last_modified: Option<String>,

    /// Creation time in microseconds since Unix epoch.
    pub date_created: Option<i64>,

    /// Last modification time in microseconds since Unix epoch.
    pub date_last_modified: Option<i64>,
}

impl Record {
    /// Build a record from a document, dropping its id.
    pub fn from_document(document: &NewsDocument) -> Self {
        Self {
            title: document.title.clone(),
            catch_line: document.catch_line.clone(),
            is_event: document.is_event,
            language: document.language.clone(),
            status: document.status.clone(),
            user_created: document.user_created.clone(),
            user_last_modified: document.user_last_modified.clone(),
            date_created: document.date_created.map(|d| d.timestamp_micros()),
            date_last_modified: document.date_last_modified.map(|d| d.timestamp_micros()),
        }
    }

    /// Rebuild the document stored under `id`.
    pub fn into_document(self, id: DocumentId) -> NewsDocument {
        NewsDocument {
            id: Some(id),
            title: self.title,
            catch_line: self.catch_line,
            is_event: self.is_event,
            language: self.language,
            status: self.status,
            user_created: self.user_created,
            user_last_modified: self.user_last_modified,
            date_created: self.date_created.and_then(from_micros),
            date_last_modified: self.date_last_modified.and_then(from_micros),
        }
    }

    /// Serialize the record to bytes using rkyv.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        rkyv::to_bytes::<rkyv::rancor::Error>(self)
            .map(|v| v.to_vec())
            .map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Deserialize a record from bytes using rkyv.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        rkyv::from_bytes::<Self, rkyv::rancor::Error>(bytes)
            .map_err(|e| Error::Deserialization(e.to_string()))
    }
}

fn from_micros(micros: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_micros(micros)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_preserves_document() {
        let at = DateTime::from_timestamp_micros(1_700_000_000_123_456).unwrap();
        let doc = NewsDocument::new("Market day")
            .with_catch_line("Stalls open at nine")
            .with_event(true)
            .with_language("en")
            .with_status("usable")
            .created_by("admin", at);
        let id = DocumentId::generate();

        let bytes = Record::from_document(&doc).to_bytes().unwrap();
        let restored = Record::from_bytes(&bytes).unwrap().into_document(id);

        assert_eq!(restored.id, Some(id));
        assert_eq!(restored.date_created, Some(at));
        assert_eq!(NewsDocument { id: None, ..restored }, doc);
    }

    #[test]
    fn test_record_keeps_absent_fields_absent() {
        let id = DocumentId::generate();
        let bytes = Record::from_document(&NewsDocument::default()).to_bytes().unwrap();
        let restored = Record::from_bytes(&bytes).unwrap().into_document(id);

        assert!(restored.is_event.is_none());
        assert!(restored.title.is_none());
        assert!(restored.date_last_modified.is_none());
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(matches!(
            Record::from_bytes(&[0xff, 0x01]),
            Err(Error::Deserialization(_))
        ));
    }
}
