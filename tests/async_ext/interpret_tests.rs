//! Tests for the asynchronous interpreter.

use std::cell::Cell;
use std::rc::Rc;

use outcome_rail::async_ext::{
    async_outcome_fn, async_sequence_fn, run_async, AsyncYielded, BoxOutcomeFuture, OutcomeFuture,
};
use outcome_rail::{from_fn, Failure, Outcome, Step, StepSequence, Success};

fn divide(a: i32, b: i32) -> BoxOutcomeFuture<'static, i32, String> {
    OutcomeFuture::new(async move {
        tokio::task::yield_now().await;
        if b == 0 {
            Failure("division by zero".to_string())
        } else {
            Success(a / b)
        }
    })
    .boxed()
}

#[tokio::test]
async fn feeds_each_resolved_payload_into_the_next_step() {
    let mut stage = 0;
    let sequence = from_fn(move |input: Option<i32>| {
        stage += 1;
        match (stage, input) {
            (1, None) => Step::Yield(AsyncYielded::Deferred(divide(100, 2))),
            (2, Some(v)) => Step::Yield(AsyncYielded::Deferred(divide(v, 5))),
            (_, input) => Step::Done(input.unwrap_or(0) + 1),
        }
    });

    assert_eq!(run_async(sequence).await, Success(11));
}

#[tokio::test]
async fn a_failed_step_short_circuits_and_later_steps_never_run() {
    let third_reached = Rc::new(Cell::new(false));
    let probe = Rc::clone(&third_reached);

    let mut stage = 0;
    let sequence = from_fn(move |input: Option<i32>| {
        stage += 1;
        match (stage, input) {
            (1, _) => Step::Yield(AsyncYielded::Deferred(divide(10, 2))),
            (2, Some(v)) => Step::Yield(AsyncYielded::Deferred(divide(v, 0))),
            (_, input) => {
                probe.set(true);
                Step::Done(input.unwrap_or(0))
            }
        }
    });

    let outcome = run_async(sequence).await;
    assert_eq!(outcome, Failure("division by zero".to_string()));
    assert!(!third_reached.get());
}

#[tokio::test]
async fn ready_and_deferred_yields_can_mix() {
    let mut stage = 0;
    let sequence = from_fn(move |input: Option<i32>| {
        stage += 1;
        match (stage, input) {
            (1, _) => Step::Yield(AsyncYielded::Ready(Success(6))),
            (2, Some(v)) => Step::Yield(AsyncYielded::Deferred(divide(v * 7, 2))),
            (_, input) => Step::Done(input.unwrap_or(0)),
        }
    });

    assert_eq!(run_async(sequence).await, Success(21));
}

#[tokio::test]
async fn a_yielded_plain_value_ends_the_sequence_as_success() {
    let mut stage = 0;
    let sequence = from_fn(move |input: Option<i32>| {
        stage += 1;
        match (stage, input) {
            (1, _) => Step::Yield(AsyncYielded::Ready(Success(1))),
            (2, _) => Step::Yield(AsyncYielded::Value(99)),
            (_, input) => Step::Done(input.unwrap_or(0)),
        }
    });

    assert_eq!(run_async(sequence).await, Success::<_, String>(99));
}

#[tokio::test]
async fn terminate_is_signalled_on_early_exit() {
    struct Failing {
        terminated: Rc<Cell<bool>>,
    }

    impl StepSequence<i32> for Failing {
        type Yield = AsyncYielded<'static, i32, String, i32>;
        type Output = i32;

        fn start(&mut self) -> Step<Self::Yield, i32> {
            Step::Yield(AsyncYielded::Deferred(divide(1, 0)))
        }

        fn resume(&mut self, input: i32) -> Step<Self::Yield, i32> {
            Step::Done(input)
        }

        fn terminate(&mut self) {
            self.terminated.set(true);
        }
    }

    let terminated = Rc::new(Cell::new(false));
    let sequence = Failing { terminated: Rc::clone(&terminated) };

    let outcome = run_async(sequence).await;
    assert_eq!(outcome, Failure("division by zero".to_string()));
    assert!(terminated.get());
}

#[tokio::test]
async fn steps_run_strictly_one_at_a_time() {
    let log = Rc::new(std::cell::RefCell::new(Vec::new()));

    let step = |label: &'static str, log: Rc<std::cell::RefCell<Vec<&'static str>>>| {
        OutcomeFuture::new(async move {
            log.borrow_mut().push(label);
            tokio::task::yield_now().await;
            log.borrow_mut().push(label);
            Success::<i32, String>(0)
        })
        .boxed()
    };

    let yields = Rc::clone(&log);
    let mut stage = 0;
    let sequence = from_fn(move |input: Option<i32>| {
        stage += 1;
        match (stage, input) {
            (1, _) => Step::Yield(AsyncYielded::Deferred(step("first", Rc::clone(&yields)))),
            (2, _) => Step::Yield(AsyncYielded::Deferred(step("second", Rc::clone(&yields)))),
            (_, input) => Step::Done(input.unwrap_or(0)),
        }
    });

    let _ = run_async(sequence).await;

    // Each step starts and finishes before the next one begins.
    assert_eq!(*log.borrow(), ["first", "first", "second", "second"]);
}

#[tokio::test]
async fn the_result_composes_as_a_deferred_wrapper() {
    let sequence = from_fn(|input: Option<i32>| match input {
        None => Step::Yield(AsyncYielded::Deferred(divide(84, 2))),
        Some(v) => Step::Done(v),
    });

    let outcome = run_async(sequence).map(|v| v + 1).await;
    assert_eq!(outcome, Success(43));
}

#[tokio::test]
async fn async_outcome_fn_always_returns_a_deferred_wrapper() {
    async fn fetch(id: u64) -> Outcome<u64, String> {
        tokio::task::yield_now().await;
        Success(id + 1)
    }

    let mut wrapped = async_outcome_fn(fetch);
    let outcome = wrapped(41).map(|v| v * 2).await;
    assert_eq!(outcome, Success(84));
}

#[tokio::test]
async fn async_sequence_fn_turns_a_producer_into_a_plain_function() {
    let mut pipeline = async_sequence_fn(|base: i32| {
        let mut stage = 0;
        from_fn(move |input: Option<i32>| {
            stage += 1;
            match (stage, input) {
                (1, _) => Step::Yield(AsyncYielded::Deferred(divide(base, 2))),
                (2, Some(v)) => Step::Yield(AsyncYielded::Deferred(divide(v, 0))),
                (_, input) => Step::Done(input.unwrap_or(0)),
            }
        })
    });

    let outcome = pipeline(10).await;
    assert_eq!(outcome, Failure("division by zero".to_string()));

    let outcome = pipeline(8).await;
    assert_eq!(outcome, Failure("division by zero".to_string()));
}
