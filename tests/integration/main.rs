//! Integration tests against a live PostgreSQL database and a running server.
//!
//! Run with: cargo test --test integration -- --ignored

mod repository_tests;

use std::time::{SystemTime, UNIX_EPOCH};

/// Title that will not collide with rows left by earlier runs
pub fn unique_title(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("{} {}", prefix, nanos)
}
