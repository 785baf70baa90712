//! A string-valued type whose copy control is observable: every default
//! construction, copy construction, and copy assignment records a marker
//! through the value's trace.

use std::fmt;
use std::rc::Rc;

use crate::trace::{Trace, TraceEvent};

/// A single text payload held through a shared-ownership reference.
///
/// Copy control always duplicates: a copy-constructed or copy-assigned
/// instance gets a fresh `Rc` around an independently allocated duplicate of
/// the source's current content, never the source's own allocation. The
/// trace handle, by contrast, is shared by all copies, so one transcript
/// collects everything.
pub struct TracedValue {
    payload: Rc<String>,
    trace: Trace,
}

impl TracedValue {
    /// Default construction: a freshly allocated empty payload, uniquely
    /// owned. Records `default constructor`.
    pub fn new(trace: &Trace) -> Self {
        let value = TracedValue {
            payload: Rc::new(String::new()),
            trace: trace.clone(),
        };
        value.trace.record(TraceEvent::DefaultConstructed);
        value
    }

    /// Seeds a payload without recording anything, so tests and benches can
    /// start from non-empty content.
    pub fn with_payload(trace: &Trace, text: impl Into<String>) -> Self {
        TracedValue {
            payload: Rc::new(text.into()),
            trace: trace.clone(),
        }
    }

    pub fn payload(&self) -> &str {
        self.payload.as_str()
    }

    /// Strong count of the payload's shared-ownership reference. Freshly
    /// constructed and freshly copied values report 1.
    pub fn payload_owners(&self) -> usize {
        Rc::strong_count(&self.payload)
    }

    /// Whether two values share one payload allocation. Copy control always
    /// duplicates, so this is false for any two live instances.
    pub fn shares_payload_with(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.payload, &other.payload)
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Copy assignment: replaces the payload with a fresh duplicate of
    /// `other`'s current content, releasing the prior reference, and records
    /// `operator=` through the receiver's trace. Returns the receiver so
    /// assignments chain: `c.assign(b.assign(&a))` records twice.
    ///
    /// There is no are-they-already-equal guard; assigning equal content
    /// still duplicates and still records.
    pub fn assign(&mut self, other: &Self) -> &mut Self {
        self.clone_from(other);
        self
    }
}

impl Clone for TracedValue {
    /// Copy construction: duplicates the source's current payload content
    /// into an independent allocation. Records `copy constructor`.
    fn clone(&self) -> Self {
        let copy = TracedValue {
            payload: Rc::new(String::clone(&self.payload)),
            trace: self.trace.clone(),
        };
        copy.trace.record(TraceEvent::CopyConstructed);
        copy
    }

    // Copy assignment reuses this hook so `value.clone_from(&other)` and
    // `value.assign(&other)` behave identically.
    fn clone_from(&mut self, source: &Self) {
        self.payload = Rc::new(String::clone(&source.payload));
        self.trace.record(TraceEvent::CopyAssigned);
    }
}

impl fmt::Debug for TracedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TracedValue")
            .field("payload", &self.payload)
            .field("payload_owners", &self.payload_owners())
            .finish()
    }
}
