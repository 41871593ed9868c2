//! End-to-end run: retrieve, parse, filter, classify.

use crate::error::{ActivityError, Result};
use crate::events::{classify, Activity, RawEvent};
use crate::fetch::EventFetcher;
use log::debug;

/// Keeps only events whose type equals `event_type` verbatim. Order and
/// content of the survivors are untouched.
pub fn filter_events(events: Vec<RawEvent>, event_type: &str) -> Vec<RawEvent> {
    events
        .into_iter()
        .filter(|e| e.event_type == event_type)
        .collect()
}

/// Runs the pipeline for one username and returns the ordered activity list.
/// Fail-fast: any retrieval or parse error aborts with no partial results.
pub async fn run(
    fetcher: &EventFetcher,
    username: &str,
    event_type: Option<&str>,
) -> Result<Vec<Activity>> {
    let data = fetcher.fetch_raw(username).await?;

    let mut events: Vec<RawEvent> = serde_json::from_slice(&data)
        .map_err(|e| ActivityError::ParseError(format!("failed to parse event feed: {}", e)))?;
    debug!("Parsed {} events for {}", events.len(), username);

    if let Some(event_type) = event_type {
        events = filter_events(events, event_type);
        debug!("{} events left after filtering on {}", events.len(), event_type);
    }

    Ok(events.iter().map(classify).collect())
}
