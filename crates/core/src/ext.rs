//! Extension traits bridging std types into railway, and logging adapters
//! for the places where a failure is deliberately discarded.

use crate::display::{as_display, Renderable};
use crate::maybe::Maybe;
use crate::mutability::{Immutable, Mutability, Mutable};
use crate::result::BasicResult;

/// Lift a `std::result::Result` into a [`BasicResult`].
pub trait ResultExt<T, E> {
    /// As an immutable result.
    fn into_railway(self) -> BasicResult<T, E, Immutable>;

    /// As a mutable result.
    fn into_railway_mut(self) -> BasicResult<T, E, Mutable>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E> {
    fn into_railway(self) -> BasicResult<T, E, Immutable> {
        BasicResult::from_std(self)
    }

    fn into_railway_mut(self) -> BasicResult<T, E, Mutable> {
        BasicResult::from_std(self)
    }
}

/// Lift an `Option` into a [`Maybe`].
pub trait OptionExt<T> {
    fn into_maybe(self) -> Maybe<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn into_maybe(self) -> Maybe<T> {
        Maybe::from_std(self)
    }
}

/// Adapters that drop a failure on purpose, leaving a `tracing` warning behind.
pub trait LoggedExt<T> {
    /// Convert to a [`Maybe`], logging the failure if present.
    fn into_maybe_logged(self) -> Maybe<T>;

    /// Get the value or `default`, logging the failure if present.
    fn or_default_logged(self, default: T) -> T;
}

impl<T, E: Renderable, M: Mutability> LoggedExt<T> for BasicResult<T, E, M> {
    fn into_maybe_logged(self) -> Maybe<T> {
        match self.into_std() {
            Ok(value) => Maybe::just(value),
            Err(error) => {
                tracing::warn!(error = %as_display(&error), "discarding failure");
                Maybe::NOTHING
            }
        }
    }

    fn or_default_logged(self, default: T) -> T {
        match self.into_std() {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(error = %as_display(&error), "failure replaced by default");
                default
            }
        }
    }
}
