//! Integration tests for the catalog service over the sled document store.

use std::sync::Arc;

use chrono::{Duration, Utc};
use newsdesk_core::{
    DocumentId, DocumentStore, EntryType, NewsDocument, NewsRepository, NewsService,
    StorageConfig,
};

struct TestContext {
    store: Arc<DocumentStore>,
    service: NewsService,
    _dir: tempfile::TempDir,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(DocumentStore::open(StorageConfig::new(dir.path())).unwrap());
        let service = NewsService::new(store.clone());

        Self {
            store,
            service,
            _dir: dir,
        }
    }

    /// Fifteen usable items; every third is an event.
    fn with_fifteen_items() -> Self {
        let ctx = Self::new();
        for i in 1..=15 {
            ctx.store
                .insert(
                    NewsDocument::new(format!("News {i}"))
                        .with_catch_line(format!("Description {i}"))
                        .with_event(i % 3 == 0)
                        .with_language(if i % 2 == 0 { "fr" } else { "en" })
                        .with_status("usable")
                        .created_by("testuser", Utc::now()),
                )
                .unwrap();
        }
        ctx
    }

    /// Ten news items and eight events with mixed status and language.
    fn with_mixed_catalog() -> Self {
        let ctx = Self::new();
        let now = Utc::now();

        for i in 1..=10 {
            ctx.store
                .insert(
                    NewsDocument::new(format!("Breaking News {i}"))
                        .with_catch_line(format!("Important update about topic {i}"))
                        .with_event(false)
                        .with_language(if i % 2 == 0 { "fr" } else { "en" })
                        .with_status(if i % 4 == 0 { "deleted" } else { "usable" })
                        .created_by("admin", now - Duration::days(i)),
                )
                .unwrap();
        }
        for i in 1..=8 {
            ctx.store
                .insert(
                    NewsDocument::new(format!("Event {i}"))
                        .with_catch_line(format!("Join us for event {i}"))
                        .with_event(true)
                        .with_language(if i % 3 == 0 { "en" } else { "fr" })
                        .with_status(if i % 5 == 0 { "deleted" } else { "usable" })
                        .created_by("eventmanager", now - Duration::hours(12 * i)),
                )
                .unwrap();
        }
        ctx
    }
}

#[test]
fn test_fifteen_items_split_into_pages() {
    let ctx = TestContext::with_fifteen_items();

    assert_eq!(ctx.service.list_page(0, 10).unwrap().len(), 10);
    assert_eq!(ctx.service.list_page(1, 10).unwrap().len(), 5);
    assert_eq!(ctx.service.list_page(2, 10).unwrap().len(), 0);
    assert_eq!(ctx.service.count().unwrap(), 15);
}

#[test]
fn test_pages_partition_the_catalog() {
    let ctx = TestContext::with_mixed_catalog();
    let total = ctx.service.count().unwrap();
    let everything = ctx.service.list_page(0, total as i64).unwrap();

    for size in [1, 4, 5, 7, 18, 25] {
        let mut collected = Vec::new();
        let mut page = 0;
        loop {
            let entries = ctx.service.list_page(page, size).unwrap();
            assert!(entries.len() <= size as usize);
            if entries.is_empty() {
                break;
            }
            collected.extend(entries);
            page += 1;
        }
        assert_eq!(collected, everything, "page size {size}");
    }
}

#[test]
fn test_pages_past_the_end_are_empty() {
    let ctx = TestContext::with_fifteen_items();

    assert!(ctx.service.list_page(10, 10).unwrap().is_empty());
    assert!(ctx.service.list_page(3, 5).unwrap().is_empty());
    assert_eq!(ctx.service.list_page(2, 5).unwrap().len(), 5);
}

#[test]
fn test_invalid_pagination() {
    let ctx = TestContext::with_fifteen_items();

    for (page, size) in [(-1, 10), (0, -1), (0, 0)] {
        let err = ctx.service.list_page(page, size).unwrap_err();
        assert!(err.is_invalid_argument(), "({page}, {size})");
    }
}

#[test]
fn test_page_metadata() {
    let ctx = TestContext::with_mixed_catalog();
    let page = ctx.service.page(1, 5).unwrap();

    assert_eq!(page.page, 1);
    assert_eq!(page.size, 5);
    assert_eq!(page.total, 18);
    assert_eq!(page.data.len(), 5);
}

#[test]
fn test_get_existing_entry() {
    let ctx = TestContext::with_fifteen_items();
    let stored = ctx.store.find_all_paged(0, 1).unwrap().remove(0);
    let id = stored.id.unwrap().to_string();

    let entry = ctx.service.get_by_id(Some(&id)).unwrap().unwrap();

    assert_eq!(entry.id.as_deref(), Some(id.as_str()));
    assert_eq!(entry.title, stored.title);
    assert_eq!(entry.catch_line, stored.catch_line);
    assert_eq!(entry.language, stored.language);
    assert_eq!(entry.status, stored.status);
}

#[test]
fn test_get_accepts_uppercase_id() {
    let ctx = TestContext::with_fifteen_items();
    let stored = ctx.store.find_all_paged(4, 1).unwrap().remove(0);
    let id = stored.id.unwrap().to_string();

    let entry = ctx.service.get_by_id(Some(&id.to_uppercase())).unwrap().unwrap();
    assert_eq!(entry.id.as_deref(), Some(id.as_str()));
}

#[test]
fn test_get_absent_entries() {
    let ctx = TestContext::with_fifteen_items();

    assert!(ctx.service.get_by_id(None).unwrap().is_none());
    assert!(ctx.service.get_by_id(Some("")).unwrap().is_none());
    assert!(ctx.service.get_by_id(Some("   ")).unwrap().is_none());
    assert!(ctx.service.get_by_id(Some("not-a-valid-id")).unwrap().is_none());
    assert!(ctx
        .service
        .get_by_id(Some("000000000000000000000000"))
        .unwrap()
        .is_none());
    assert!(ctx
        .service
        .get_by_id(Some(&DocumentId::generate().to_string()))
        .unwrap()
        .is_none());
}

#[test]
fn test_entry_types() {
    let ctx = TestContext::new();
    let event = ctx.store.insert(NewsDocument::new("E").with_event(true)).unwrap();
    let news = ctx.store.insert(NewsDocument::new("N").with_event(false)).unwrap();
    let unknown = ctx.store.insert(NewsDocument::new("U")).unwrap();

    let kind = |id: DocumentId| {
        ctx.service
            .get_by_id(Some(&id.to_string()))
            .unwrap()
            .unwrap()
            .entry_type
    };

    assert_eq!(kind(event), EntryType::Event);
    assert_eq!(kind(news), EntryType::News);
    assert_eq!(kind(unknown), EntryType::Unknown);
}

#[test]
fn test_predicate_queries() {
    let ctx = TestContext::with_mixed_catalog();

    // news: 4, 8 deleted; events: 5 deleted
    assert_eq!(ctx.service.list_usable().unwrap().len(), 15);
    assert_eq!(ctx.service.list_by_status("deleted").unwrap().len(), 3);

    // news: 5 fr; events: 3, 6 are en
    let french = ctx.service.list_by_language("fr").unwrap();
    assert_eq!(french.len(), 11);
    assert!(french.iter().all(|e| e.language.as_deref() == Some("fr")));

    assert!(ctx.service.list_by_status("archived").unwrap().is_empty());
}
