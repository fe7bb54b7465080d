//! newsdesk core - document store, response mapping, and the news catalog service.
//!
//! This crate holds everything below the HTTP layer: the stored document model,
//! an embedded sled-backed document store, the repository contract the service
//! reads through, and the mapping from stored documents to API responses.

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod document;
pub mod dto;
pub mod error;
pub mod greeting;
pub mod mapper;
pub mod repository;
pub mod service;
pub mod storage;

pub use document::{DocumentId, NewsDocument};
pub use dto::{EntryType, NewsResponse, PagedResponse};
pub use error::Error;
pub use greeting::greeting;
pub use repository::{IndexedField, NewsRepository};
pub use service::NewsService;
pub use storage::{DocumentStore, StorageConfig};

/// Status value marking a document as publishable.
pub const STATUS_USABLE: &str = "usable";
