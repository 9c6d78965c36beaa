//! # Wire formats for modular input events
//!
//! This crate turns collected records into the exact wire syntax expected by
//! an event-ingestion endpoint. An [`Event`] is an immutable value: the data
//! payload, a fractional-seconds timestamp, optional routing metadata
//! (`index`, `host`, `source`, `sourcetype`, `stanza`) and two fragment flags
//! (`unbroken`, `done`) marking pieces of a record that was broken up during
//! collection.
//!
//! Two independent formatters consume events; they share nothing but the
//! [`Event`] type, and the caller always knows statically which one it wants:
//!
//! * [`xml::format_events`] emits `<stream>` documents for the streaming XML
//!   protocol. Fragment flags are preserved (`unbroken="1"` attributes and
//!   `<done />` markers), so broken records can be reassembled downstream.
//!
//! * [`hec::format_events`] emits newline-delimited JSON objects for the HEC
//!   protocol. This format has no continuation semantics; fragment flags are
//!   dropped (see the module docs).
//!
//! ```
//! use modinput_event::{BatchLimits, Event};
//!
//! let event = Event::builder()
//!     .data("session opened")
//!     .time(1372274622.493)
//!     .stanza("scheme://input")
//!     .build()?;
//!
//! let streams = modinput_event::xml::format_events(&[event], &BatchLimits::default());
//! assert_eq!(streams.len(), 1);
//! # Ok::<(), modinput_event::EventBuildError>(())
//! ```
//!
//! Everything here is a pure, synchronous transform over borrowed events:
//! no I/O, no shared state, safe to call concurrently over independent
//! inputs.
#![warn(missing_docs)]

pub use batch::BatchLimits;
pub use escape::escape_json_control_chars;
pub use event::Event;
pub use event::EventBuildError;
pub use event::EventBuilder;

mod batch;
mod escape;
mod event;
pub mod hec;
pub mod xml;
