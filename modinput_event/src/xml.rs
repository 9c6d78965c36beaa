//! # The streaming XML wire format
//!
//! Events are emitted as `<event>` elements wrapped in `<stream>` documents:
//!
//! ```text
//! <stream>
//!   <event stanza="scheme://input" unbroken="1">
//!     <time>1372274622.493</time>
//!     <index>main</index>
//!     <host>localhost</host>
//!     <source>collector</source>
//!     <sourcetype>misc</sourcetype>
//!     <data>raw payload text</data>
//!     <done />
//!   </event>
//! </stream>
//! ```
//!
//! The receiving parser is exact about element and attribute naming and
//! ordering, so the documents are written by hand rather than through an XML
//! library. Child elements always appear in the order `time`, `index`,
//! `host`, `source`, `sourcetype`, `data`, with absent metadata omitted
//! entirely; `unbroken="1"` appears only on fragment events and `<done />`
//! only on terminal fragments. Event order is preserved end to end, which is
//! what allows broken records to be reassembled downstream.

use crate::batch::BatchLimits;
use crate::event::Event;
use log::debug;

/// Format `events` into one or more `<stream>` documents.
///
/// The input is partitioned into contiguous runs sharing the same stanza;
/// each run becomes one document (more if `limits` forces a cut). Events for
/// different stanzas are never merged into the same run, and input order is
/// preserved within and across documents.
pub fn format_events(events: &[Event], limits: &BatchLimits) -> Vec<String> {
    let mut streams = Vec::new();
    for run in events.chunk_by(|a, b| a.stanza() == b.stanza()) {
        let mut body = String::new();
        let mut count = 0;
        for event in run {
            let fragment = event_element(event);
            if limits.splits_before(count, body.len(), fragment.len()) {
                streams.push(wrap_stream(&body));
                body.clear();
                count = 0;
            }
            body.push_str(&fragment);
            count += 1;
        }
        if count > 0 {
            streams.push(wrap_stream(&body));
        }
    }
    debug!(
        "formatted {} events into {} stream documents",
        events.len(),
        streams.len()
    );
    streams
}

fn wrap_stream(body: &str) -> String {
    format!("<stream>{body}</stream>")
}

fn event_element(event: &Event) -> String {
    let mut out = String::new();
    out.push_str("<event");
    if let Some(stanza) = event.stanza() {
        out.push_str(" stanza=\"");
        push_escaped_attr(&mut out, stanza);
        out.push('"');
    }
    if event.unbroken() {
        out.push_str(" unbroken=\"1\"");
    }
    out.push('>');

    // Full fractional precision, exactly as the event carries it.
    out.push_str("<time>");
    out.push_str(&event.time().to_string());
    out.push_str("</time>");

    let children = [
        ("index", event.index()),
        ("host", event.host()),
        ("source", event.source()),
        ("sourcetype", event.sourcetype()),
    ];
    for (name, value) in children {
        if let Some(value) = value {
            out.push('<');
            out.push_str(name);
            out.push('>');
            push_escaped_text(&mut out, value);
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
    }

    out.push_str("<data>");
    push_escaped_text(&mut out, event.data());
    out.push_str("</data>");

    if event.done() {
        out.push_str("<done />");
    }
    out.push_str("</event>");
    out
}

// Newlines (and all other control or non-ASCII characters) are valid inside
// element text and stay literal.
fn push_escaped_text(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

// Attribute values are double-quoted, so the quote needs escaping too.
fn push_escaped_attr(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
