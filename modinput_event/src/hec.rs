//! # The HEC wire format
//!
//! Events are emitted as newline-delimited JSON objects, one per event:
//!
//! ```json
//! {"time":1372274622.493,"index":"main","host":"localhost","event":"raw payload text"}
//! ```
//!
//! `time` and `event` are always present; `index`, `host`, `source` and
//! `sourcetype` appear only when set and non-empty. The `event` key holds the
//! raw data text with standard JSON string escaping and nothing else.
//!
//! Unlike the XML path, this format cannot express continuation semantics:
//! there are no keys for the `unbroken`/`done` fragment flags or the stanza,
//! and they are dropped on formatting. A batch containing flagged events
//! reports the drop through a `debug!` log line, so fragmented input feeding
//! the wrong wire format is observable. Records that must be reassembled
//! downstream can only travel the XML path.

use crate::batch::BatchLimits;
use crate::event::Event;
use log::debug;
use serde::Serialize;

/// The JSON object for a single event, borrowing from the [`Event`].
#[derive(Serialize)]
struct HecEntry<'a> {
    time: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    index: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    host: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sourcetype: Option<&'a str>,
    event: &'a str,
}

impl<'a> From<&'a Event> for HecEntry<'a> {
    fn from(event: &'a Event) -> Self {
        Self {
            time: event.time(),
            index: event.index(),
            host: event.host(),
            source: event.source(),
            sourcetype: event.sourcetype(),
            event: event.data(),
        }
    }
}

/// Format `events` into one or more newline-delimited JSON batches.
///
/// Each event becomes one JSON object on its own line, in input order. With
/// default [`BatchLimits`] all events land in a single batch string; limits
/// cut additional batches without reordering.
pub fn format_events(events: &[Event], limits: &BatchLimits) -> serde_json::Result<Vec<String>> {
    let flagged = events
        .iter()
        .filter(|e| e.unbroken() || e.done())
        .count();
    if flagged > 0 {
        debug!(
            "dropping fragment flags from {flagged} of {} events: not representable in HEC output",
            events.len()
        );
    }

    let mut batches = Vec::new();
    let mut batch = String::new();
    let mut count = 0;
    for event in events {
        let line = serde_json::to_string(&HecEntry::from(event))?;
        if limits.splits_before(count, batch.len(), line.len()) {
            batches.push(std::mem::take(&mut batch));
            count = 0;
        }
        if count > 0 {
            batch.push('\n');
        }
        batch.push_str(&line);
        count += 1;
    }
    if count > 0 {
        batches.push(batch);
    }
    Ok(batches)
}
