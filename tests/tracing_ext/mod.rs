//! Smoke tests for the tracing integration.

use outcome_rail::tracing_ext::{MaybeTraceExt, OutcomeTraceExt};
use outcome_rail::{Absent, Failure, Maybe, Outcome, Present, Success};

#[test]
fn trace_failure_is_a_pass_through() {
    let o: Outcome<i32, &str> = Failure("boom");
    assert_eq!(o.trace_failure("loading config"), Failure("boom"));

    let o: Outcome<i32, &str> = Success(1);
    assert_eq!(o.trace_failure("loading config"), Success(1));
}

#[test]
fn trace_absent_is_a_pass_through() {
    assert_eq!(Maybe::<i32>::Absent.trace_absent("lookup"), Absent);
    assert_eq!(Present(2).trace_absent("lookup"), Present(2));
}
