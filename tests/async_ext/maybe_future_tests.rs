//! Tests for the deferred Present/Absent container.

use outcome_rail::async_ext::MaybeFuture;
use outcome_rail::{Absent, Failure, Maybe, Present, Success};

fn deferred(maybe: Maybe<i32>) -> MaybeFuture<impl std::future::Future<Output = Maybe<i32>>> {
    MaybeFuture::new(async move {
        tokio::task::yield_now().await;
        maybe
    })
}

#[tokio::test]
async fn resolves_to_the_inner_container() {
    assert_eq!(deferred(Present(5)).await, Present(5));
    assert_eq!(deferred(Absent).await, Absent);
}

#[tokio::test]
async fn lazy_composition_matches_eager_composition() {
    assert_eq!(deferred(Present(5)).filter(|v| *v > 10).await, Absent);
    assert_eq!(deferred(Present(15)).filter(|v| *v > 10).await, Present(15));
    assert_eq!(deferred(Present(3)).map(|v| v * 2).await, Present(6));
    assert_eq!(
        deferred(Absent).and_then(|v| Present(v + 1)).await,
        Absent
    );
    assert_eq!(deferred(Absent).or_else(|| Present(9)).await, Present(9));
}

#[tokio::test]
async fn xor_resolves_both_sides_sequentially() {
    assert_eq!(deferred(Present(1)).xor(deferred(Absent)).await, Present(1));
    assert_eq!(deferred(Present(1)).xor(deferred(Present(2))).await, Absent);
    assert_eq!(deferred(Absent).xor(deferred(Present(2))).await, Present(2));
}

#[tokio::test]
async fn flatten_collapses_one_level() {
    let nested = MaybeFuture::new(async { Present(Present(3)) });
    assert_eq!(nested.flatten().await, Present(3));

    let nested = MaybeFuture::new(async { Present(Maybe::<i32>::Absent) });
    assert_eq!(nested.flatten().await, Absent);
}

#[tokio::test]
async fn ok_or_produces_a_deferred_outcome() {
    assert_eq!(deferred(Absent).ok_or("missing").await, Failure("missing"));
    assert_eq!(deferred(Present(3)).ok_or("missing").await, Success(3));
    assert_eq!(
        deferred(Absent).ok_or_else(|| "computed").await,
        Failure("computed")
    );

    // The coercion result keeps composing as a deferred outcome.
    let outcome = deferred(Present(10)).ok_or("missing").map(|v| v * 2).await;
    assert_eq!(outcome, Success(20));
}

#[tokio::test]
async fn resolving_operations_return_plain_values() {
    assert_eq!(deferred(Present(5)).unwrap().await, 5);
    assert_eq!(deferred(Present(5)).expect("must be here").await, 5);
    assert_eq!(deferred(Absent).unwrap_or(7).await, 7);
    assert_eq!(deferred(Absent).unwrap_or_else(|| 8).await, 8);
    assert_eq!(deferred(Present(2)).map_or(0, |v| v * 10).await, 20);
    assert_eq!(deferred(Absent).map_or_else(|| -1, |v| v).await, -1);
    assert_eq!(deferred(Present(2)).fold(|v| v * 10, || 0).await, 20);
}

#[tokio::test]
async fn ready_constructors_resolve_immediately() {
    assert_eq!(MaybeFuture::present(4).await, Present(4));
    assert_eq!(MaybeFuture::<core::future::Ready<Maybe<i32>>>::absent().await, Absent);
}

#[tokio::test]
async fn boxed_erases_the_inner_future_type() {
    let futures = vec![deferred(Present(1)).boxed(), MaybeFuture::ready(Absent).boxed()];

    let mut resolved = Vec::new();
    for future in futures {
        resolved.push(future.await);
    }
    assert_eq!(resolved, [Present(1), Absent]);
}

#[tokio::test]
#[should_panic]
async fn unwrap_on_a_deferred_absent_panics() {
    let _ = deferred(Absent).unwrap().await;
}
