use chrono::{DateTime, Duration, Utc};

use crate::{error::AppError, model::ctftime::CtftimeEvent};

/// Maximum number of events requested from CTFtime.
pub const EVENT_LIMIT: u32 = 100;

/// Maximum length of a Discord message, in characters.
pub const MESSAGE_LIMIT: usize = 2000;

const HEADER: &str = "Upcoming CTFs:";

/// Client for the CTFtime events API.
#[derive(Clone)]
pub struct CtftimeClient {
    http_client: reqwest::Client,
    url: String,
}

impl CtftimeClient {
    pub fn new(http_client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http_client,
            url: url.into(),
        }
    }

    /// Fetches the events starting between `now` and `days` days later.
    ///
    /// # Arguments
    /// - `now` - Start of the window
    /// - `days` - Length of the window in days
    ///
    /// # Returns
    /// - `Ok(Vec<CtftimeEvent>)` - Events ordered as returned by CTFtime
    /// - `Err(AppError::ReqwestErr)` - Request failed, non-success status, or
    ///   malformed body
    pub async fn upcoming(
        &self,
        now: DateTime<Utc>,
        days: u32,
    ) -> Result<Vec<CtftimeEvent>, AppError> {
        let start = now.timestamp();
        let finish = (now + Duration::days(i64::from(days))).timestamp();

        tracing::debug!("Fetching CTFtime events from {} to {}", start, finish);

        let events = self
            .http_client
            .get(&self.url)
            .query(&[
                ("limit", i64::from(EVENT_LIMIT)),
                ("start", start),
                ("finish", finish),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<CtftimeEvent>>()
            .await?;

        Ok(events)
    }
}

/// Renders events as chat messages of at most `MESSAGE_LIMIT` characters each.
///
/// The first message starts with a header line; events are never split across
/// messages unless a single line exceeds the limit on its own.
pub fn format_events(events: &[CtftimeEvent]) -> Vec<String> {
    if events.is_empty() {
        return vec!["No upcoming CTFs.".to_string()];
    }

    let mut messages = Vec::new();
    let mut current = HEADER.to_string();
    let mut current_len = HEADER.chars().count();

    for line in events.iter().map(CtftimeEvent::to_line) {
        for piece in split_long_line(&line) {
            let piece_len = piece.chars().count();
            if current_len > 0 && current_len + 1 + piece_len > MESSAGE_LIMIT {
                messages.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push('\n');
                current_len += 1;
            }
            current.push_str(&piece);
            current_len += piece_len;
        }
    }

    if !current.is_empty() {
        messages.push(current);
    }

    messages
}

fn split_long_line(line: &str) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    chars
        .chunks(MESSAGE_LIMIT)
        .map(|chunk| chunk.iter().collect())
        .collect()
}
