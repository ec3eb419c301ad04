//! Operations that exist only on `BasicResult<_, _, Mutable>`.
//!
//! None of these are reachable from an immutable result:
//!
//! ```compile_fail
//! use railway_core::{Result, success};
//!
//! let mut r = Result::<i32, ()>::success(1);
//! r.assign(success(2));
//! ```
//!
//! ```compile_fail
//! use railway_core::Result;
//!
//! let mut r = Result::<i32, ()>::success(1);
//! let _ = r.as_mut();
//! ```
//!
//! A `let mut` binding of an immutable result can still be rebound with `=`;
//! the marker only governs what the value itself offers.

use super::{unwrap_err_failed, unwrap_failed, BasicResult};
use crate::display::Renderable;
use crate::mutability::{Immutable, Mutability, Mutable};

impl<T, E> BasicResult<T, E, Mutable> {
    /// Replace the whole state with anything convertible into this result.
    ///
    /// ```
    /// use railway_core::{MutResult, failure, success};
    ///
    /// let mut r = MutResult::<i32, &str>::success(1);
    /// r.assign(failure("gone"));
    /// assert_eq!(r, failure("gone"));
    /// r.assign(success(3));
    /// assert_eq!(r, success(3));
    /// ```
    pub fn assign<R: Into<Self>>(&mut self, value: R) {
        *self = value.into();
    }

    /// Replace the whole state from a result with convertible payloads.
    pub fn assign_from<U, F, N>(&mut self, other: BasicResult<U, F, N>)
    where
        T: From<U>,
        E: From<F>,
        N: Mutability,
    {
        *self = other.convert();
    }

    /// Mutable borrows of both payloads.
    pub fn as_mut(&mut self) -> BasicResult<&mut T, &mut E, Immutable> {
        BasicResult::from_std(self.inner.as_mut())
    }

    /// Mutable access to the success payload.
    ///
    /// # Panics
    ///
    /// Panics with the rendered failure when `self` is Err.
    #[track_caller]
    pub fn unwrap_mut(&mut self) -> &mut T
    where
        E: Renderable,
    {
        match &mut self.inner {
            Ok(value) => value,
            Err(error) => unwrap_failed("unwrap_mut", &*error),
        }
    }

    /// Mutable access to the failure payload.
    ///
    /// # Panics
    ///
    /// Panics with the rendered success when `self` is Ok.
    #[track_caller]
    pub fn unwrap_err_mut(&mut self) -> &mut E
    where
        T: Renderable,
    {
        match &mut self.inner {
            Ok(value) => unwrap_err_failed("unwrap_err_mut", &*value),
            Err(error) => error,
        }
    }

    /// Freeze the result.
    pub fn into_immutable(self) -> BasicResult<T, E, Immutable> {
        BasicResult::from_std(self.inner)
    }
}

impl<T, E> BasicResult<T, E, Immutable> {
    /// Thaw the result so it can be reassigned.
    pub fn into_mutable(self) -> BasicResult<T, E, Mutable> {
        BasicResult::from_std(self.inner)
    }
}
