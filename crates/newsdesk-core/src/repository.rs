//! Read access to stored news documents.

use std::fmt;

use crate::document::{DocumentId, NewsDocument};
use crate::error::Error;
use crate::STATUS_USABLE;

/// Document fields that support equality lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexedField {
    Language,
    Status,
}

impl IndexedField {
    /// All indexed fields.
    pub const ALL: [IndexedField; 2] = [IndexedField::Language, IndexedField::Status];

    /// Field name as stored.
    pub fn name(&self) -> &'static str {
        match self {
            IndexedField::Language => "language",
            IndexedField::Status => "status",
        }
    }

    /// Value of this field on a document.
    pub fn value_of<'a>(&self, document: &'a NewsDocument) -> Option<&'a str> {
        match self {
            IndexedField::Language => document.language.as_deref(),
            IndexedField::Status => document.status.as_deref(),
        }
    }
}

impl fmt::Display for IndexedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read-only access to the news collection.
///
/// Ordering is store-defined but stable across calls while the store is
/// unchanged.
pub trait NewsRepository: Send + Sync {
    /// Documents starting at `offset`, at most `limit` of them.
    fn find_all_paged(&self, offset: u64, limit: u64) -> Result<Vec<NewsDocument>, Error>;

    /// Documents whose `field` equals `value`.
    fn find_by_field(&self, field: IndexedField, value: &str) -> Result<Vec<NewsDocument>, Error>;

    /// Document with the given id.
    fn find_by_id(&self, id: &DocumentId) -> Result<Option<NewsDocument>, Error>;

    /// Number of documents, unfiltered.
    fn count(&self) -> Result<u64, Error>;

    /// Look up by the text form of an id. Malformed ids yield `None`.
    fn find_by_raw_id(&self, id: &str) -> Result<Option<NewsDocument>, Error> {
        match DocumentId::parse(id) {
            Some(id) => self.find_by_id(&id),
            None => Ok(None),
        }
    }

    /// Documents in the given language.
    fn find_by_language(&self, language: &str) -> Result<Vec<NewsDocument>, Error> {
        self.find_by_field(IndexedField::Language, language)
    }

    /// Documents with the given status.
    fn find_by_status(&self, status: &str) -> Result<Vec<NewsDocument>, Error> {
        self.find_by_field(IndexedField::Status, status)
    }

    /// Documents that are publishable.
    fn find_usable_news(&self) -> Result<Vec<NewsDocument>, Error> {
        self.find_by_status(STATUS_USABLE)
    }
}
