//! sled-backed document store.

use sled::{Db, Tree};
use tracing::{debug, info};

use super::{index, Record, StorageConfig};
use crate::document::{DocumentId, NewsDocument};
use crate::error::Error;
use crate::repository::{IndexedField, NewsRepository};

/// Tree name for news documents.
const NEWS_TREE: &str = "news";

/// Tree name for the field index.
const FIELD_INDEX_TREE: &str = "index:field";

/// The news document store.
pub struct DocumentStore {
    /// The underlying sled database.
    db: Db,

    /// Documents keyed by id.
    news_tree: Tree,

    /// Field index (field + value + id -> empty).
    index_tree: Tree,
}

impl DocumentStore {
    /// Open or create a store with the given configuration.
    pub fn open(config: StorageConfig) -> Result<Self, Error> {
        let db = config.to_sled_config().open()?;
        let news_tree = db.open_tree(NEWS_TREE)?;
        let index_tree = db.open_tree(FIELD_INDEX_TREE)?;

        info!(
            path = %config.path.display(),
            temporary = config.temporary,
            documents = news_tree.len(),
            "Opened document store"
        );

        Ok(Self {
            db,
            news_tree,
            index_tree,
        })
    }

    /// Open a temporary store that is removed on drop.
    pub fn temporary() -> Result<Self, Error> {
        Self::open(StorageConfig::temporary())
    }

    /// Check if the database was recovered from a previous crash.
    pub fn was_recovered(&self) -> bool {
        self.db.was_recovered()
    }

    /// Insert a document, assigning an id if it has none.
    ///
    /// A document carrying an existing id replaces the stored one.
    pub fn insert(&self, document: NewsDocument) -> Result<DocumentId, Error> {
        let id = document.id.unwrap_or_else(DocumentId::generate);

        if let Some(previous) = self.find_by_id(&id)? {
            self.unindex(&previous, &id)?;
        }

        let record = Record::from_document(&document);
        self.news_tree.insert(id.as_bytes(), record.to_bytes()?)?;

        for field in IndexedField::ALL {
            if let Some(value) = field.value_of(&document) {
                self.index_tree.insert(index::key(field, value, &id), &[])?;
            }
        }

        debug!(%id, "Inserted document");
        Ok(id)
    }

    /// Insert several documents, returning their ids in order.
    pub fn insert_many(
        &self,
        documents: impl IntoIterator<Item = NewsDocument>,
    ) -> Result<Vec<DocumentId>, Error> {
        documents.into_iter().map(|doc| self.insert(doc)).collect()
    }

    /// Remove every document.
    pub fn delete_all(&self) -> Result<(), Error> {
        self.news_tree.clear()?;
        self.index_tree.clear()?;
        debug!("Cleared document store");
        Ok(())
    }

    /// Flush all pending writes to disk.
    pub fn flush(&self) -> Result<(), Error> {
        self.db.flush()?;
        Ok(())
    }

    /// Get database size in bytes.
    pub fn size_on_disk(&self) -> Result<u64, Error> {
        Ok(self.db.size_on_disk()?)
    }

    fn unindex(&self, document: &NewsDocument, id: &DocumentId) -> Result<(), Error> {
        for field in IndexedField::ALL {
            if let Some(value) = field.value_of(document) {
                self.index_tree.remove(index::key(field, value, id))?;
            }
        }
        Ok(())
    }

    fn decode(key: &[u8], value: &[u8]) -> Result<NewsDocument, Error> {
        let id = DocumentId::from_slice(key).ok_or(Error::InvalidKey)?;
        Ok(Record::from_bytes(value)?.into_document(id))
    }
}

impl NewsRepository for DocumentStore {
    fn find_all_paged(&self, offset: u64, limit: u64) -> Result<Vec<NewsDocument>, Error> {
        debug!(offset, limit, "Scanning news page");

        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(usize::MAX);

        self.news_tree
            .iter()
            .skip(skip)
            .take(take)
            .map(|result| {
                let (key, value) = result?;
                Self::decode(&key, &value)
            })
            .collect()
    }

    fn find_by_field(&self, field: IndexedField, value: &str) -> Result<Vec<NewsDocument>, Error> {
        debug!(%field, value, "Scanning field index");

        let prefix = index::prefix(field, value);
        let prefix_len = prefix.len();
        let mut documents = Vec::new();

        for result in self.index_tree.scan_prefix(&prefix) {
            let (key, _) = result?;
            let Some(id) = index::decode_id(&key, prefix_len) else {
                continue;
            };

            // Index entries can outlive a replaced document's old value.
            match self.find_by_id(&id)? {
                Some(doc) if field.value_of(&doc) == Some(value) => documents.push(doc),
                _ => {}
            }
        }

        Ok(documents)
    }

    fn find_by_id(&self, id: &DocumentId) -> Result<Option<NewsDocument>, Error> {
        match self.news_tree.get(id.as_bytes())? {
            Some(bytes) => Ok(Some(Record::from_bytes(&bytes)?.into_document(*id))),
            None => Ok(None),
        }
    }

    fn count(&self) -> Result<u64, Error> {
        Ok(self.news_tree.len() as u64)
    }
}
