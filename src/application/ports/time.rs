// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for `created_at`/`updated_at` stamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
