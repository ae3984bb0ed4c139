use outcome_rail::{Absent, Failure, Maybe, Present, Success};

#[test]
fn filter_rejects_through_the_predicate() {
    assert_eq!(Present(5).filter(|v| *v > 10), Absent);
    assert_eq!(Present(15).filter(|v| *v > 10), Present(15));
    assert_eq!(Maybe::<i32>::Absent.filter(|v| *v > 10), Absent);
}

#[test]
fn ok_or_coerces_into_an_outcome() {
    assert_eq!(Maybe::<i32>::Absent.ok_or("missing"), Failure("missing"));
    assert_eq!(Present(3).ok_or("missing"), Success(3));
    assert_eq!(Maybe::<i32>::Absent.ok_or_else(|| "computed"), Failure("computed"));
}

#[test]
fn flatten_collapses_one_level() {
    assert_eq!(Present(Present(3)).flatten(), Present(3));
    assert_eq!(Present(Maybe::<i32>::Absent).flatten(), Absent);
    assert_eq!(Maybe::<Maybe<i32>>::Absent.flatten(), Absent);
}

#[test]
fn xor_is_present_iff_exactly_one_side_is() {
    assert_eq!(Present(1).xor(Absent), Present(1));
    assert_eq!(Maybe::<i32>::Absent.xor(Present(2)), Present(2));
    assert_eq!(Present(1).xor(Present(2)), Absent);
    assert_eq!(Maybe::<i32>::Absent.xor(Absent), Absent);
}

#[test]
fn and_then_short_circuits_on_absent() {
    let mut invoked = false;
    let m = Maybe::<i32>::Absent.and_then(|v| {
        invoked = true;
        Present(v + 1)
    });
    assert_eq!(m, Absent);
    assert!(!invoked);

    assert_eq!(Present(1).and_then(|v| Present(v + 1)), Present(2));
}

#[test]
fn or_family_substitutes_on_absent() {
    assert_eq!(Maybe::<i32>::Absent.or(Present(2)), Present(2));
    assert_eq!(Present(1).or(Present(2)), Present(1));
    assert_eq!(Maybe::<i32>::Absent.or_else(|| Present(3)), Present(3));
}

#[test]
fn map_identity_is_observationally_equal() {
    assert_eq!(Present(3).map(|v| v), Present(3));
    assert_eq!(Maybe::<i32>::Absent.map(|v| v), Absent);
}

#[test]
fn folds_reach_a_common_type() {
    assert_eq!(Present("ab").map_or(0, |s| s.len()), 2);
    assert_eq!(Maybe::<&str>::Absent.map_or(7, |s| s.len()), 7);
    assert_eq!(Present(2).fold(|v| v * 10, || 0), 20);
    assert_eq!(Maybe::<i32>::Absent.map_or_else(|| -1, |v| v), -1);
}

#[test]
fn unwrap_or_family_never_panics() {
    assert_eq!(Maybe::<i32>::Absent.unwrap_or(7), 7);
    assert_eq!(Maybe::<i32>::Absent.unwrap_or_else(|| 8), 8);
    assert_eq!(Maybe::<i32>::Absent.unwrap_or_default(), 0);
    assert_eq!(Present(1).unwrap_or(7), 1);
}

#[test]
fn default_is_absent() {
    assert_eq!(Maybe::<i32>::default(), Absent);
}

#[test]
fn inspect_peeks_only_on_present() {
    let mut seen = None;
    assert_eq!(Present(4).inspect(|v| seen = Some(*v)), Present(4));
    assert_eq!(seen, Some(4));

    let mut touched = false;
    let _ = Maybe::<i32>::Absent.inspect(|_| touched = true);
    assert!(!touched);
}

#[test]
fn converts_to_and_from_option() {
    assert_eq!(Present(1).into_option(), Some(1));
    assert_eq!(Maybe::from_option(None::<i32>), Absent);

    let m: Maybe<i32> = Some(2).into();
    assert_eq!(m, Present(2));
    let o: Option<i32> = Present(3).into();
    assert_eq!(o, Some(3));
}

#[test]
fn unwrap_round_trips_the_payload() {
    assert_eq!(Present(9).unwrap(), 9);
    assert_eq!(Present(9).expect("should be present"), 9);
}

#[test]
#[should_panic]
fn unwrap_on_absent_panics() {
    let _ = Maybe::<i32>::Absent.unwrap();
}

#[test]
#[should_panic]
fn expect_on_absent_panics() {
    let _ = Maybe::<i32>::Absent.expect("value was required here");
}
