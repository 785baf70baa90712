//! The copy-control walkthrough: which operations fire when a value is
//! created, copied, assigned, and handed to functions three different ways.

use crate::passing;
use crate::trace::Trace;
use crate::value::TracedValue;

/// Every line the walkthrough writes, in order.
pub const TRANSCRIPT: [&str; 9] = [
    "default constructor",
    "copy constructor",
    "copy constructor",
    "operator=",
    "test func parameter",
    "copy constructor",
    "func",
    "r_func",
    "p_func",
];

/// Runs the walkthrough, recording through `trace`. The binary points this
/// at stdout; tests point it at a memory sink and compare against
/// [`TRANSCRIPT`].
pub fn run(trace: &Trace) {
    let first = TracedValue::new(trace);
    let second = first.clone();
    // A fresh binding initialized from a clone is copy construction, not
    // assignment; only the re-assignment below records `operator=`.
    let mut third = second.clone();
    third.assign(&second);

    trace.note("test func parameter");

    // By value: the call-site clone is the one copy this call costs.
    passing::by_value(first.clone());
    passing::by_reference(&first);
    let first_ptr: *const TracedValue = &first;
    // The pointer targets a live local, valid for the call.
    unsafe { passing::by_pointer(first_ptr) };
}
