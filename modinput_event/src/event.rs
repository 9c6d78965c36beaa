use serde::Serialize;
use std::fmt::{Debug, Display, Formatter};
use thiserror::Error;

/// Error type for building an [`Event`]
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum EventBuildError {
    /// No data payload was supplied
    #[error("event has no data payload")]
    MissingData,

    /// No timestamp was supplied
    #[error("event has no timestamp")]
    MissingTime,

    /// The timestamp is NaN or infinite
    #[error("event timestamp {0} is not finite")]
    InvalidTime(f64),
}

/// One unit of collected data plus routing metadata and fragment flags.
///
/// Events are immutable once built: construct one with [`Event::builder`],
/// hand it to a formatter, discard it. Formatters only read the fields.
/// There is no identity beyond value equality.
///
/// The fragment flags are independent, not mutually exclusive: a collector
/// that breaks a large record into pieces marks every piece `unbroken` and
/// additionally marks the last piece `done`. A single complete event has
/// both flags false.
#[derive(Clone, PartialEq, Serialize)]
pub struct Event {
    data: String,
    time: f64,
    index: Option<String>,
    host: Option<String>,
    source: Option<String>,
    sourcetype: Option<String>,
    stanza: Option<String>,
    unbroken: bool,
    done: bool,
}

impl Event {
    /// Start building an event
    pub fn builder() -> EventBuilder {
        EventBuilder::default()
    }

    /// The raw data payload
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Timestamp as fractional seconds since the epoch
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Destination index, if one was set and non-empty
    pub fn index(&self) -> Option<&str> {
        nonempty(&self.index)
    }

    /// Originating host, if one was set and non-empty
    pub fn host(&self) -> Option<&str> {
        nonempty(&self.host)
    }

    /// Data source, if one was set and non-empty
    pub fn source(&self) -> Option<&str> {
        nonempty(&self.source)
    }

    /// Source type, if one was set and non-empty
    pub fn sourcetype(&self) -> Option<&str> {
        nonempty(&self.sourcetype)
    }

    /// Name of the input configuration that produced this event,
    /// if one was set and non-empty
    pub fn stanza(&self) -> Option<&str> {
        nonempty(&self.stanza)
    }

    /// True if this event is a non-terminal fragment of a larger record
    pub fn unbroken(&self) -> bool {
        self.unbroken
    }

    /// True if this event is the terminal fragment of a broken record
    pub fn done(&self) -> bool {
        self.done
    }
}

// Metadata set to an empty string carries no routing information; both wire
// formats treat it the same as absent.
fn nonempty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

impl Display for Event {
    /// The full record as a single JSON object, every field included
    /// (absent metadata as `null`). This is a diagnostic representation,
    /// not either wire format.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&json)
    }
}

impl Debug for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

/// Builder for [`Event`]
///
/// `data` and `time` are required; everything else defaults to absent/false.
#[derive(Debug, Clone, Default)]
pub struct EventBuilder {
    data: Option<String>,
    time: Option<f64>,
    index: Option<String>,
    host: Option<String>,
    source: Option<String>,
    sourcetype: Option<String>,
    stanza: Option<String>,
    unbroken: bool,
    done: bool,
}

impl EventBuilder {
    /// Set the data payload
    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Set the timestamp (fractional seconds since the epoch)
    pub fn time(mut self, time: f64) -> Self {
        self.time = Some(time);
        self
    }

    /// Set the destination index
    pub fn index(mut self, index: impl Into<String>) -> Self {
        self.index = Some(index.into());
        self
    }

    /// Set the originating host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the data source
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set the source type
    pub fn sourcetype(mut self, sourcetype: impl Into<String>) -> Self {
        self.sourcetype = Some(sourcetype.into());
        self
    }

    /// Set the originating input configuration name
    pub fn stanza(mut self, stanza: impl Into<String>) -> Self {
        self.stanza = Some(stanza.into());
        self
    }

    /// Mark the event as a non-terminal fragment of a larger record
    pub fn unbroken(mut self, unbroken: bool) -> Self {
        self.unbroken = unbroken;
        self
    }

    /// Mark the event as the terminal fragment of a broken record
    pub fn done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    /// Build the event, validating the required fields
    pub fn build(self) -> Result<Event, EventBuildError> {
        let data = self.data.ok_or(EventBuildError::MissingData)?;
        let time = self.time.ok_or(EventBuildError::MissingTime)?;
        if !time.is_finite() {
            return Err(EventBuildError::InvalidTime(time));
        }

        Ok(Event {
            data,
            time,
            index: self.index,
            host: self.host,
            source: self.source,
            sourcetype: self.sourcetype,
            stanza: self.stanza,
            unbroken: self.unbroken,
            done: self.done,
        })
    }
}
