//! Embedded document storage.
//!
//! News documents live in a sled tree keyed by their 12-byte id, with a
//! secondary tree indexing the fields that support equality lookups.

mod config;
mod record;
mod store;

pub mod index;

pub use config::StorageConfig;
pub use record::Record;
pub use store::DocumentStore;
