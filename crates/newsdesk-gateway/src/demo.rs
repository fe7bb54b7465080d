//! Startup data: a built-in demo catalog and JSON seed files.

use std::path::Path;

use chrono::{Duration, Utc};
use newsdesk_core::{DocumentStore, Error, NewsDocument};

/// Insert the demo catalog: ten news items and eight events with a mix of
/// languages and statuses.
pub fn insert_demo_data(store: &DocumentStore) -> Result<usize, Error> {
    let now = Utc::now();

    let headlines = [
        ("Council approves new cycle lanes", "Works start in the spring"),
        ("Library extends opening hours", "Open until ten on weekdays"),
        ("Harbour dredging completed", "Larger ferries can now dock"),
        ("New bakery on Market Street", "Sourdough from a century-old starter"),
        ("Water main repairs on Elm Road", "Expect delays until Friday"),
        ("School choir wins regional prize", "Twenty voices, one trophy"),
        ("Tram timetable changes", "Earlier first departures from Monday"),
        ("Park benches restored", "Volunteers refinished forty benches"),
        ("Recycling centre moves", "The new site is next to the depot"),
        ("Local museum reopens", "Two new galleries after renovation"),
    ];

    let events = [
        ("Summer night market", "Food stalls and live music by the river"),
        ("Open-air cinema", "Classics on the square every Thursday"),
        ("Harbour festival", "Three days of boats, music, and fireworks"),
        ("Chess in the park", "Bring a board or borrow one"),
        ("Spring fun run", "Five kilometres along the seafront"),
        ("Makers fair", "Local crafts and workshops"),
        ("Jazz on the pier", "Sunset sessions all August"),
        ("Lantern parade", "Starts at the town hall at dusk"),
    ];

    let mut documents = Vec::with_capacity(headlines.len() + events.len());

    for (i, (title, catch_line)) in headlines.iter().enumerate() {
        let n = i as i64 + 1;
        documents.push(
            NewsDocument::new(*title)
                .with_catch_line(*catch_line)
                .with_event(false)
                .with_language(if n % 2 == 0 { "fr" } else { "en" })
                .with_status(if n % 4 == 0 { "deleted" } else { "usable" })
                .created_by("admin", now - Duration::days(n)),
        );
    }

    for (i, (title, catch_line)) in events.iter().enumerate() {
        let n = i as i64 + 1;
        documents.push(
            NewsDocument::new(*title)
                .with_catch_line(*catch_line)
                .with_event(true)
                .with_language(if n % 3 == 0 { "en" } else { "fr" })
                .with_status(if n % 5 == 0 { "deleted" } else { "usable" })
                .created_by("eventmanager", now - Duration::hours(12 * n)),
        );
    }

    Ok(store.insert_many(documents)?.len())
}

/// Insert every document from a JSON array file.
///
/// Documents are written in file order. Entries carrying an `id` keep it.
pub fn load_seed_file(store: &DocumentStore, path: &Path) -> Result<usize, Error> {
    let contents = std::fs::read_to_string(path)?;
    let documents: Vec<NewsDocument> = serde_json::from_str(&contents)?;
    Ok(store.insert_many(documents)?.len())
}
