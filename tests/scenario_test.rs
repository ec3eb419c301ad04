//! End-to-end scenarios through the facade crate.
//!
//! These tests verify that:
//! - A map/and_then pipeline keeps or short-circuits the happy path
//! - Optional values collapse to results and back
//! - A mutable result can be reassigned without losing its type
//! - `propagate!` returns early into std and railway results alike

#![allow(clippy::arithmetic_side_effects)]

use railway::prelude::*;

fn at_least_six(x: i32) -> Result<i32, &'static str> {
    if x > 5 {
        success(x).into()
    } else {
        failure("too small").into()
    }
}

fn pipeline(start: i32) -> Result<i32, &'static str> {
    Result::success(start).map(|x| x * 2).and_then(at_least_six)
}

/// Test that a large enough input survives the whole pipeline.
///
/// # GIVEN
/// A success holding 5
///
/// # WHEN
/// It is doubled and then checked against a lower bound of six
///
/// # THEN
/// The result is a success holding 10
#[test]
fn test_pipeline_keeps_large_values() {
    // GIVEN / WHEN
    let result = pipeline(5);

    // THEN
    assert_eq!(result, success(10));
    assert_eq!(result.unwrap_or(0), 10);
}

/// Test that a small input is diverted onto the failure track.
///
/// # GIVEN
/// A success holding 2
///
/// # WHEN
/// It is doubled and then checked against a lower bound of six
///
/// # THEN
/// The result is a failure carrying "too small"
#[test]
fn test_pipeline_rejects_small_values() {
    let result = pipeline(2);

    assert_eq!(result, failure("too small"));
    assert!(!bool::from(&result));
    assert_eq!(result.to_string(), "failure(\"too small\")");
}

/// Test that a lookup miss becomes a descriptive failure and recovers.
///
/// # GIVEN
/// A list of ports and a lookup that may find nothing
///
/// # WHEN
/// The lookup is collapsed into a result and then back into a maybe
///
/// # THEN
/// Presence is preserved in both directions and the error is the supplied one
#[test]
fn test_maybe_and_result_round_trip() {
    let ports = [8080_u16, 8443];
    let find = |wanted: u16| Maybe::from_first(ports.iter().copied().filter(move |p| *p == wanted));

    let hit = find(8443).ok_or("no such port");
    let miss = find(22).ok_or("no such port");

    assert_eq!(hit, success(8443));
    assert_eq!(miss, failure("no such port"));
    assert_eq!(hit.ok(), just(8443));
    assert_eq!(miss.ok(), NOTHING);
    assert_eq!(miss.err(), just("no such port"));
}

/// Test that a mutable result can move between tracks in place.
///
/// # GIVEN
/// A mutable result that starts as a failure
///
/// # WHEN
/// A retry succeeds and the success is assigned into it
///
/// # THEN
/// The same binding now holds the success and can be frozen
#[test]
fn test_mutable_result_reassignment() {
    let mut attempt: MutResult<u32, &str> = failure("timeout").into();
    assert!(attempt.is_err());

    attempt.assign(success(3_u32));
    *attempt.unwrap_mut() += 1;

    let frozen: Result<u32, &str> = attempt.into_immutable();
    assert_eq!(frozen, success(4_u32));
}

/// Test that early return works into both result families.
///
/// # GIVEN
/// Two parsers, one returning a railway result and one a std result
///
/// # WHEN
/// A bad input is fed through `propagate!`
///
/// # THEN
/// Both return the failure without running the rest of the function
#[test]
fn test_propagate_into_either_family() {
    fn parse(input: &str) -> Result<i32, String> {
        input.parse::<i32>().map_err(|e| e.to_string()).into_railway()
    }

    fn railway_sum(a: &str, b: &str) -> Result<i32, String> {
        let a = propagate!(parse(a));
        let b = propagate!(parse(b));
        Result::success(a + b)
    }

    fn std_sum(a: &str, b: &str) -> std::result::Result<i32, String> {
        let a = propagate!(parse(a));
        let b = parse(b).into_std()?;
        Ok(a + b)
    }

    assert_eq!(railway_sum("2", "3"), success(5));
    assert!(railway_sum("2", "three").is_err());
    assert_eq!(std_sum("4", "5"), Ok(9));
    assert!(std_sum("four", "5").is_err());
}

/// Test that nested optional results swap nesting without changing state.
///
/// # GIVEN
/// A success wrapping nothing, and a failure
///
/// # WHEN
/// Each is transposed
///
/// # THEN
/// The active side is kept: nothing stays nothing, failure stays failure
#[test]
fn test_transpose_preserves_active_side() {
    let empty: Result<Maybe<i32>, &str> = success(Maybe::NOTHING).into();
    let failed: Result<Maybe<i32>, &str> = failure("io").into();

    assert_eq!(empty.transpose(), NOTHING);
    assert_eq!(failed.transpose(), just(failure("io")));
}
