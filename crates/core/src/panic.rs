//! The single escalation point for programmer errors.
//!
//! Extraction on the wrong arm (`unwrap` on a failure, `unwrap_err` on a
//! success, `unwrap` on nothing) ends up in [`raise`], which decorates the
//! message with the caller's location, optionally a backtrace, emits a
//! `tracing` event and unwinds. Recoverable failures never come through here;
//! they travel in the failure arm of a result.
//!
//! How the unwind is caught, if at all, is up to the embedding program.
#![allow(clippy::panic)]

use std::any::Any;
use std::backtrace::Backtrace;
use std::panic::Location;

use thiserror::Error;

use crate::config::PanicConfig;

/// Everything known about a raised panic. Its `Display` form is the panic
/// message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("runtime panicked at '{message}', {file}:{line}{}", trace_suffix(.stacktrace))]
pub struct RuntimePanic {
    message: String,
    file: &'static str,
    line: u32,
    stacktrace: Option<String>,
}

impl RuntimePanic {
    /// Describe a panic raised at `location`.
    pub fn new(message: impl Into<String>, location: &Location<'static>) -> Self {
        Self {
            message: message.into(),
            file: location.file(),
            line: location.line(),
            stacktrace: None,
        }
    }

    /// Attach a rendered stack trace.
    #[must_use]
    pub fn with_stacktrace(mut self, stacktrace: impl Into<String>) -> Self {
        self.stacktrace = Some(stacktrace.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn file(&self) -> &'static str {
        self.file
    }

    pub const fn line(&self) -> u32 {
        self.line
    }

    pub fn stacktrace(&self) -> Option<&str> {
        self.stacktrace.as_deref()
    }
}

fn trace_suffix(stacktrace: &Option<String>) -> String {
    stacktrace
        .as_ref()
        .map_or_else(String::new, |trace| format!("\n\nstacktrace:\n{trace}"))
}

/// Raise a runtime panic at the caller's location.
///
/// Reads the installed [`PanicConfig`] to decide whether to capture a
/// backtrace and whether to log the event before unwinding. The unwind
/// payload is the rendered [`RuntimePanic`] as a `String`.
///
/// # Panics
///
/// Always.
#[track_caller]
#[cold]
pub fn raise(message: impl Into<String>) -> ! {
    let config = PanicConfig::current();
    let panic = RuntimePanic::new(message, Location::caller());
    let panic = if config.capture_backtrace() {
        panic.with_stacktrace(Backtrace::force_capture().to_string())
    } else {
        panic
    };

    if config.log_events() {
        tracing::error!(
            target: "railway::panic",
            file = panic.file(),
            line = panic.line(),
            "{}",
            panic.message()
        );
    }

    panic!("{panic}")
}

/// Format a message and [`raise`] it.
///
/// Arguments are rendered through [`Renderable`](crate::display::Renderable).
/// Opaque values, and values that do not implement it at all, appear as `()`.
/// Placeholders must be positional (`{}`).
///
/// ```should_panic
/// use railway_core::runtime_panic;
///
/// runtime_panic!("bad state {} after {}", "x", 3);
/// ```
#[macro_export]
macro_rules! runtime_panic {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::display::{RenderArgument as _, RenderPlaceholder as _};
        $crate::panic::raise(::std::format!(
            $fmt $(, (&&$crate::display::Argument(&$arg)).render_argument())*
        ))
    }};
}

/// The text of a panic payload, when it carries one.
///
/// Useful with [`std::panic::catch_unwind`], whose error is the payload.
pub fn payload_message(payload: &(dyn Any + Send)) -> Option<&str> {
    payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&'static str>().copied())
}
