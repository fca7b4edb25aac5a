//! Request paths
//!
//! Activity names and emails travel in the path and query string, so both
//! are percent-encoded before being placed in a URL.

use urlencoding::encode;

/// Catalog listing path
pub const ACTIVITIES_PATH: &str = "/activities";

/// `POST` target for registering `email` in `activity`
pub fn signup_path(activity: &str, email: &str) -> String {
    format!(
        "{}/{}/signup?email={}",
        ACTIVITIES_PATH,
        encode(activity),
        encode(email)
    )
}

/// `DELETE` target for removing `email` from `activity`
pub fn unregister_path(activity: &str, email: &str) -> String {
    format!(
        "{}/{}/participants?email={}",
        ACTIVITIES_PATH,
        encode(activity),
        encode(email)
    )
}

/// Join a base URL and a path. An empty base yields a same-origin relative URL.
pub fn join(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
