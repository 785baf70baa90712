//! Trace plumbing for the copy-control demos: the marker vocabulary, the
//! sink seam, and the shared handle values record through.

use std::borrow::Cow;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use colored::Colorize;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Marker vocabulary
// ============================================================================

/// One observable event. `Display` yields the exact line written for it:
/// `default constructor`, `copy constructor`, `operator=` for the three
/// copy-control operations, and `func`, `r_func`, `p_func` for the bodies of
/// the three parameter-passing calls. `Note` carries free-form banner text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceEvent {
    DefaultConstructed,
    CopyConstructed,
    CopyAssigned,
    CalledByValue,
    CalledByRef,
    CalledByPtr,
    Note(Cow<'static, str>),
}

impl TraceEvent {
    /// The fixed marker text, or the note's own text.
    pub fn label(&self) -> &str {
        match self {
            TraceEvent::DefaultConstructed => "default constructor",
            TraceEvent::CopyConstructed => "copy constructor",
            TraceEvent::CopyAssigned => "operator=",
            TraceEvent::CalledByValue => "func",
            TraceEvent::CalledByRef => "r_func",
            TraceEvent::CalledByPtr => "p_func",
            TraceEvent::Note(text) => text,
        }
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Text that is none of the six fixed markers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown trace marker: {0:?}")]
pub struct UnknownMarker(pub String);

impl FromStr for TraceEvent {
    type Err = UnknownMarker;

    // Strict: notes are constructed, never parsed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default constructor" => Ok(TraceEvent::DefaultConstructed),
            "copy constructor" => Ok(TraceEvent::CopyConstructed),
            "operator=" => Ok(TraceEvent::CopyAssigned),
            "func" => Ok(TraceEvent::CalledByValue),
            "r_func" => Ok(TraceEvent::CalledByRef),
            "p_func" => Ok(TraceEvent::CalledByPtr),
            other => Err(UnknownMarker(other.to_string())),
        }
    }
}

// ============================================================================
// Sinks
// ============================================================================

/// Where recorded events go: print, store, or drop them.
pub trait TraceSink {
    fn record(&self, event: TraceEvent);
}

/// Writes one line per event to standard output, in invocation order.
/// Styling is suppressed by `colored` when stdout is not a terminal, so
/// captured output is the plain marker text.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl TraceSink for StdoutSink {
    fn record(&self, event: TraceEvent) {
        let line = match &event {
            TraceEvent::DefaultConstructed
            | TraceEvent::CopyConstructed
            | TraceEvent::CopyAssigned => event.label().green(),
            TraceEvent::CalledByValue | TraceEvent::CalledByRef | TraceEvent::CalledByPtr => {
                event.label().blue()
            }
            TraceEvent::Note(_) => event.label().bold(),
        };
        println!("{}", line);
    }
}

/// Stores events in order; the in-memory double for tests and replay.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: RefCell<Vec<TraceEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<TraceEvent> {
        self.events.borrow().clone()
    }

    /// Marker text of everything recorded so far.
    pub fn labels(&self) -> Vec<String> {
        self.events.borrow().iter().map(|e| e.to_string()).collect()
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&self) -> Vec<TraceEvent> {
        self.events.borrow_mut().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// The recorded sequence as JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&*self.events.borrow())
    }

    /// A sink pre-loaded from a JSON transcript.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let events: Vec<TraceEvent> = serde_json::from_str(json)?;
        Ok(MemorySink {
            events: RefCell::new(events),
        })
    }
}

impl TraceSink for MemorySink {
    fn record(&self, event: TraceEvent) {
        self.events.borrow_mut().push(event);
    }
}

/// Discards everything, so benches measure copy mechanics rather than I/O.
#[derive(Debug, Default)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn record(&self, _event: TraceEvent) {}
}

// ============================================================================
// Shared handle
// ============================================================================

/// Cheap-to-clone handle to a sink. Every value holds one; copies of a value
/// share it, which is how all their events land in a single transcript.
#[derive(Clone)]
pub struct Trace {
    sink: Rc<dyn TraceSink>,
}

impl Trace {
    pub fn new(sink: impl TraceSink + 'static) -> Self {
        let sink: Rc<dyn TraceSink> = Rc::new(sink);
        Trace { sink }
    }

    /// Console-backed trace for demo binaries.
    pub fn stdout() -> Self {
        Trace::new(StdoutSink)
    }

    /// Recording trace plus a handle for reading back what was recorded.
    pub fn in_memory() -> (Self, Rc<MemorySink>) {
        let sink = Rc::new(MemorySink::new());
        let shared: Rc<dyn TraceSink> = sink.clone();
        (Trace { sink: shared }, sink)
    }

    pub fn record(&self, event: TraceEvent) {
        self.sink.record(event);
    }

    /// Free-form banner line, e.g. a driver's section header.
    pub fn note(&self, text: &'static str) {
        self.record(TraceEvent::Note(Cow::Borrowed(text)));
    }
}
