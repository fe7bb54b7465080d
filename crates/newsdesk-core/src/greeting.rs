//! Greeting text for the `/hello` endpoint.

/// Build the greeting for an optional caller name.
///
/// A missing or blank name yields the anonymous greeting.
pub fn greeting(name: Option<&str>) -> String {
    match name.filter(|n| !n.trim().is_empty()) {
        Some(name) => format!("Hello {name} from Quarkus REST"),
        None => "Hello from Quarkus REST".to_string(),
    }
}
