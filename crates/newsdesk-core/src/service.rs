//! News catalog service.
//!
//! Validates pagination and lookup input, reads through a [`NewsRepository`],
//! and maps stored documents to [`NewsResponse`]s. Invalid input is rejected
//! before the repository is touched.

use std::sync::Arc;

use tracing::debug;

use crate::document::DocumentId;
use crate::dto::{NewsResponse, PagedResponse};
use crate::error::Error;
use crate::mapper;
use crate::repository::NewsRepository;

/// Catalog operations over a news repository.
#[derive(Clone)]
pub struct NewsService {
    repository: Arc<dyn NewsRepository>,
}

impl NewsService {
    /// Create a service reading from `repository`.
    pub fn new(repository: Arc<dyn NewsRepository>) -> Self {
        Self { repository }
    }

    /// One page of entries in store order.
    ///
    /// Fails with [`Error::InvalidArgument`] if `page < 0` (checked first) or
    /// `size <= 0`. A page past the end is empty, not an error.
    pub fn list_page(&self, page: i64, size: i64) -> Result<Vec<NewsResponse>, Error> {
        if page < 0 {
            return Err(Error::InvalidArgument("page must be >= 0".to_string()));
        }
        if size <= 0 {
            return Err(Error::InvalidArgument("size must be > 0".to_string()));
        }

        // Both are positive here; saturation only sends overflowing offsets past the end.
        let offset = (page as u64).saturating_mul(size as u64);
        let documents = self.repository.find_all_paged(offset, size as u64)?;

        Ok(mapper::to_response_list(Some(documents.as_slice())).unwrap_or_default())
    }

    /// A page of entries together with the unfiltered total.
    pub fn page(&self, page: i64, size: i64) -> Result<PagedResponse<NewsResponse>, Error> {
        let data = self.list_page(page, size)?;
        let total = self.count()?;
        Ok(PagedResponse::new(data, page, size, total))
    }

    /// Look up a single entry.
    ///
    /// Missing, blank, and malformed ids all yield `Ok(None)` without a store
    /// read. Store failures are returned as errors.
    pub fn get_by_id(&self, id: Option<&str>) -> Result<Option<NewsResponse>, Error> {
        let Some(id) = id.filter(|id| !id.trim().is_empty()) else {
            return Ok(None);
        };

        // Surrounding whitespace is malformed; it only counts toward blankness.
        let Some(id) = DocumentId::parse(id) else {
            debug!(id, "Ignoring malformed document id");
            return Ok(None);
        };

        let document = self.repository.find_by_id(&id)?;
        Ok(mapper::to_response(document.as_ref()))
    }

    /// Total number of stored documents.
    pub fn count(&self) -> Result<u64, Error> {
        self.repository.count()
    }

    /// Entries in the given language.
    pub fn list_by_language(&self, language: &str) -> Result<Vec<NewsResponse>, Error> {
        let documents = self.repository.find_by_language(language)?;
        Ok(mapper::to_response_list(Some(documents.as_slice())).unwrap_or_default())
    }

    /// Entries with the given status.
    pub fn list_by_status(&self, status: &str) -> Result<Vec<NewsResponse>, Error> {
        let documents = self.repository.find_by_status(status)?;
        Ok(mapper::to_response_list(Some(documents.as_slice())).unwrap_or_default())
    }

    /// Publishable entries.
    pub fn list_usable(&self) -> Result<Vec<NewsResponse>, Error> {
        let documents = self.repository.find_usable_news()?;
        Ok(mapper::to_response_list(Some(documents.as_slice())).unwrap_or_default())
    }
}
