//! Three ways to hand a [`TracedValue`] to a function. Which markers appear,
//! and which copies happen, depends entirely on how the argument travels.

use crate::trace::TraceEvent;
use crate::value::TracedValue;

/// Receives the value itself and records `func`. Rust moves arguments rather
/// than copying them, so a caller that wants to keep using its value clones
/// at the call site; that clone is the one copy construction a by-value call
/// costs.
pub fn by_value(value: TracedValue) {
    value.trace().record(TraceEvent::CalledByValue);
}

/// Receives a shared borrow and records `r_func`. No copy, no mutation; any
/// number of calls with the same value leaves it untouched.
pub fn by_reference(value: &TracedValue) {
    value.trace().record(TraceEvent::CalledByRef);
}

/// Receives a raw pointer and records `p_func`. No copy and no ownership
/// interaction; the pointee is read only to reach its trace.
///
/// # Safety
///
/// `value` must point to a live `TracedValue` for the duration of the call.
pub unsafe fn by_pointer(value: *const TracedValue) {
    let value = &*value;
    value.trace().record(TraceEvent::CalledByPtr);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::Trace;

    #[test]
    fn by_value_with_call_site_clone_copies_once() {
        let (trace, sink) = Trace::in_memory();
        let value = TracedValue::with_payload(&trace, "handed over");

        by_value(value.clone());

        assert_eq!(sink.labels(), ["copy constructor", "func"]);
        // Only the clone was consumed; the original is still usable.
        assert_eq!(value.payload(), "handed over");
        assert_eq!(value.payload_owners(), 1);
    }

    #[test]
    fn by_value_move_does_not_copy() {
        let (trace, sink) = Trace::in_memory();
        let value = TracedValue::with_payload(&trace, "moved");

        by_value(value);

        assert_eq!(sink.labels(), ["func"]);
    }

    #[test]
    fn by_reference_never_copies() {
        let (trace, sink) = Trace::in_memory();
        let value = TracedValue::with_payload(&trace, "borrowed");

        by_reference(&value);
        by_reference(&value);
        by_reference(&value);

        assert_eq!(sink.labels(), ["r_func", "r_func", "r_func"]);
        assert_eq!(value.payload(), "borrowed");
        assert_eq!(value.payload_owners(), 1);
    }

    #[test]
    fn by_pointer_never_copies() {
        let (trace, sink) = Trace::in_memory();
        let value = TracedValue::with_payload(&trace, "pointed at");
        let ptr: *const TracedValue = &value;

        unsafe {
            by_pointer(ptr);
            by_pointer(ptr);
        }

        assert_eq!(sink.labels(), ["p_func", "p_func"]);
        assert_eq!(value.payload(), "pointed at");
        assert_eq!(value.payload_owners(), 1);
    }
}
