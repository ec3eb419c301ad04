//! Extraction on the wrong arm: every panic goes through `panic::raise` and
//! carries a rendered message plus the caller's location.

#![allow(clippy::unwrap_used)]
#![allow(clippy::arithmetic_side_effects)]

use std::error::Error;
use std::fmt;
use std::num::ParseIntError;
use std::panic::{catch_unwind, AssertUnwindSafe};

use railway_core::display::{Opaque, Shown};
use railway_core::panic::payload_message;
use railway_core::{opaque_renderable, Maybe, MutResult, Result};

struct Token;
opaque_renderable!(Token);

fn panic_text<F: FnOnce()>(f: F) -> String {
    let payload = catch_unwind(AssertUnwindSafe(f)).unwrap_err();
    payload_message(payload.as_ref()).unwrap().to_owned()
}

#[test]
fn test_unwrap_on_failure_renders_payload() {
    let text = panic_text(|| {
        let _ = Result::<i32, &str>::failure("boom").unwrap();
    });
    assert!(text.starts_with(
        "runtime panicked at 'called `BasicResult::unwrap()` on a value: `failure(\"boom\")`', "
    ));
}

#[test]
fn test_unwrap_on_opaque_failure_hides_payload() {
    let text = panic_text(|| {
        let _ = Result::<i32, Token>::failure(Token).unwrap();
    });
    assert!(text.contains("called `BasicResult::unwrap()` on a value `failure(?)`"));
}

#[test]
fn test_unwrap_err_on_success_renders_payload() {
    let text = panic_text(|| {
        let _ = Result::<i32, &str>::success(1).unwrap_err();
    });
    assert!(text.contains("called `BasicResult::unwrap_err()` on a value: `success(1)`"));
}

#[test]
fn test_unwrap_err_on_opaque_success() {
    let text = panic_text(|| {
        let _ = Result::<Token, i32>::success(Token).unwrap_err();
    });
    assert!(text.contains("on a value `success(?)`"));
}

#[test]
fn test_expect_prefixes_message() {
    let text = panic_text(|| {
        let _ = Result::<i32, &str>::failure("disk full").expect("saving state");
    });
    assert!(text.starts_with("runtime panicked at 'saving state: \"disk full\"', "));

    let text = panic_text(|| {
        let _ = Result::<i32, &str>::success(3).expect_err("should have failed");
    });
    assert!(text.starts_with("runtime panicked at 'should have failed: 3', "));
}

#[test]
fn test_maybe_extraction_messages() {
    let text = panic_text(|| {
        let _ = Maybe::<i32>::NOTHING.unwrap();
    });
    assert!(text.contains("called `Maybe::unwrap()` on a `nothing` value"));

    let text = panic_text(|| {
        let _ = Maybe::<i32>::nothing().expect("config loaded");
    });
    assert!(text.starts_with("runtime panicked at 'config loaded', "));
}

#[test]
fn test_mutable_access_on_wrong_arm() {
    let text = panic_text(|| {
        let mut r = MutResult::<i32, i32>::failure(4);
        *r.unwrap_mut() += 1;
    });
    assert!(text.contains("called `BasicResult::unwrap_mut()` on a value: `failure(4)`"));

    let text = panic_text(|| {
        let mut r = MutResult::<i32, i32>::success(4);
        *r.unwrap_err_mut() += 1;
    });
    assert!(text.contains("called `BasicResult::unwrap_err_mut()` on a value: `success(4)`"));
}

#[test]
fn test_location_is_the_caller() {
    let line = line!() + 2;
    let text = panic_text(|| {
        let _ = Result::<i32, i32>::failure(0).unwrap();
    });
    assert!(text.ends_with(&format!("panics.rs:{line}")), "{text}");
}

#[test]
fn test_unwrap_on_std_error_renders_its_message() {
    let text = panic_text(|| {
        let parsed: Result<i32, ParseIntError> = "five".parse::<i32>().into();
        let _ = parsed.unwrap();
    });
    assert!(
        text.contains(
            "called `BasicResult::unwrap()` on a value: `failure(invalid digit found in string)`"
        ),
        "{text}"
    );

    let text = panic_text(|| {
        let boxed: Box<dyn Error + Send + Sync> = "disk on fire".into();
        let _ = Result::<(), Box<dyn Error + Send + Sync>>::failure(boxed).expect("flush");
    });
    assert!(text.starts_with("runtime panicked at 'flush: disk on fire', "), "{text}");
}

#[test]
fn test_adapters_for_external_payloads() {
    struct Remote(u16);

    impl fmt::Display for Remote {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "remote status {}", self.0)
        }
    }

    let text = panic_text(|| {
        let _ = Result::<i32, Remote>::failure(Remote(503)).map_err(Shown).unwrap();
    });
    assert!(text.contains("on a value: `failure(remote status 503)`"), "{text}");

    let text = panic_text(|| {
        let _ = Result::<i32, Remote>::failure(Remote(503)).map_err(Opaque).unwrap();
    });
    assert!(text.contains("on a value `failure(?)`"), "{text}");
}

#[test]
fn test_right_arm_never_panics() {
    assert_eq!(Result::<i32, &str>::success(5).unwrap(), 5);
    assert_eq!(Result::<i32, &str>::failure("e").unwrap_err(), "e");
    assert_eq!(Maybe::just(2).expect("present"), 2);
}
