//! Key encoding for the field index.
//!
//! Key format: `[field name][0x00][field value][0x00][document id (12 bytes)]`
//!
//! All ids sharing a field value are contiguous, and within a value they sort
//! in id order, so a prefix scan yields matches in the same order as the
//! primary tree.

use crate::document::{DocumentId, ID_SIZE};
use crate::repository::IndexedField;

/// Separator between key segments.
const SEPARATOR: u8 = 0;

/// Prefix shared by every entry for `field == value`.
pub fn prefix(field: IndexedField, value: &str) -> Vec<u8> {
    let name = field.name().as_bytes();
    let mut key = Vec::with_capacity(name.len() + value.len() + 2 + ID_SIZE);
    key.extend_from_slice(name);
    key.push(SEPARATOR);
    key.extend_from_slice(value.as_bytes());
    key.push(SEPARATOR);
    key
}

/// Full index key for one document.
pub fn key(field: IndexedField, value: &str, id: &DocumentId) -> Vec<u8> {
    let mut key = prefix(field, value);
    key.extend_from_slice(id.as_bytes());
    key
}

/// Extract the document id from a key found under a prefix of `prefix_len` bytes.
///
/// Returns `None` when the remainder is not exactly one id, which happens when
/// a longer value shares the scanned prefix.
pub fn decode_id(key: &[u8], prefix_len: usize) -> Option<DocumentId> {
    if key.len() != prefix_len + ID_SIZE {
        return None;
    }
    DocumentId::from_slice(&key[prefix_len..])
}
