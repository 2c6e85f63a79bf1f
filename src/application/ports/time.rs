// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of the creation timestamps stores put on saved articles.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
