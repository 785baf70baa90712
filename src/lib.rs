//! Observable copy-control mechanics.
//!
//! A [`TracedValue`] wraps a single text payload behind a shared-ownership
//! reference and records a marker for every default construction, copy
//! construction, and copy assignment. The [`passing`] functions show what
//! each parameter-passing convention copies (or doesn't), and [`demo`]
//! replays the whole story in a fixed order.
//!
//! ```
//! use copy_semantics::{Trace, TracedValue};
//!
//! let (trace, sink) = Trace::in_memory();
//! let first = TracedValue::new(&trace);
//! let second = first.clone();
//!
//! assert_eq!(sink.labels(), ["default constructor", "copy constructor"]);
//! assert_eq!(second.payload(), first.payload());
//! assert!(!second.shares_payload_with(&first));
//! ```

pub mod demo;
pub mod passing;
pub mod trace;
pub mod value;

pub use trace::{MemorySink, NullSink, StdoutSink, Trace, TraceEvent, TraceSink, UnknownMarker};
pub use value::TracedValue;
