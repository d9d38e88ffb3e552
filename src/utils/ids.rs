//! ID- och tidsstämpelgenerering för lagrade poster

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

/// Nytt unikt post-id (UUID v4)
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Aktuell tidpunkt som ISO-8601/RFC 3339 i UTC
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
