//! CTFtime event calendar models.
//!
//! Mirrors the subset of the `/api/v1/events/` response the `upcoming` command
//! renders.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A CTF listed on CTFtime.
#[derive(Debug, Clone, Deserialize)]
pub struct CtftimeEvent {
    pub title: String,
    /// Official website of the event.
    pub url: String,
    /// Event page on CTFtime.
    pub ctftime_url: String,
    pub start: DateTime<Utc>,
    pub finish: DateTime<Utc>,
    #[serde(default)]
    pub organizers: Vec<CtftimeOrganizer>,
}

/// A team organizing a CTFtime event.
#[derive(Debug, Clone, Deserialize)]
pub struct CtftimeOrganizer {
    pub name: String,
}

impl CtftimeEvent {
    /// Renders the event as one markdown line with Discord timestamps.
    pub fn to_line(&self) -> String {
        let organizer = self
            .organizers
            .first()
            .map(|organizer| organizer.name.as_str())
            .unwrap_or("unknown");

        format!(
            "[{}]({}) ([ctftime]({})) from <t:{}:F> to <t:{}:F> by {}",
            self.title,
            self.url,
            self.ctftime_url,
            self.start.timestamp(),
            self.finish.timestamp(),
            organizer
        )
    }
}
