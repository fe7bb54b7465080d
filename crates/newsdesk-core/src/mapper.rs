//! Stored document to response translation.

use crate::document::NewsDocument;
use crate::dto::{EntryType, NewsResponse};

/// Map a stored document to its API response.
///
/// `None` maps to `None`. The id is rendered as text, the entry type is
/// derived from `is_event`, and every other field is copied as-is.
pub fn to_response(document: Option<&NewsDocument>) -> Option<NewsResponse> {
    let document = document?;

    Some(NewsResponse {
        id: document.id.map(|id| id.to_string()),
        title: document.title.clone(),
        entry_type: EntryType::from_flag(document.is_event),
        catch_line: document.catch_line.clone(),
        language: document.language.clone(),
        status: document.status.clone(),
    })
}

/// Map a list of stored documents, preserving order.
pub fn to_response_list(documents: Option<&[NewsDocument]>) -> Option<Vec<NewsResponse>> {
    let documents = documents?;

    Some(
        documents
            .iter()
            .filter_map(|doc| to_response(Some(doc)))
            .collect(),
    )
}
