//! Conversions into and out of `BasicResult`, and the `propagate!` shorthand.

use super::BasicResult;
use crate::failure::Failure;
use crate::mutability::{Immutable, Mutability, Mutable};
use crate::success::Success;

impl<T, E, M: Mutability> From<Success<T>> for BasicResult<T, E, M> {
    fn from(value: Success<T>) -> Self {
        Self::success(value.into_inner())
    }
}

impl<T, E, M: Mutability> From<Failure<E>> for BasicResult<T, E, M> {
    fn from(error: Failure<E>) -> Self {
        Self::failure(error.into_inner())
    }
}

impl<T, E, M: Mutability> From<std::result::Result<T, E>> for BasicResult<T, E, M> {
    fn from(inner: std::result::Result<T, E>) -> Self {
        Self::from_std(inner)
    }
}

impl<T, E, M: Mutability> From<BasicResult<T, E, M>> for std::result::Result<T, E> {
    fn from(result: BasicResult<T, E, M>) -> Self {
        result.inner
    }
}

impl<T, E> From<Success<T>> for std::result::Result<T, E> {
    fn from(value: Success<T>) -> Self {
        Ok(value.into_inner())
    }
}

impl<T, E> From<Failure<E>> for std::result::Result<T, E> {
    fn from(error: Failure<E>) -> Self {
        Err(error.into_inner())
    }
}

impl<T, E> From<BasicResult<T, E, Immutable>> for BasicResult<T, E, Mutable> {
    fn from(result: BasicResult<T, E, Immutable>) -> Self {
        result.into_mutable()
    }
}

impl<T, E> From<BasicResult<T, E, Mutable>> for BasicResult<T, E, Immutable> {
    fn from(result: BasicResult<T, E, Mutable>) -> Self {
        result.into_immutable()
    }
}

impl<T, E, M: Mutability> BasicResult<T, E, M> {
    /// Convert both payloads element-wise, into any mutability.
    ///
    /// ```
    /// use railway_core::{MutResult, Result};
    ///
    /// let narrow = Result::<i32, &str>::failure("e");
    /// let wide: MutResult<i64, String> = narrow.convert();
    /// assert!(wide.is_err());
    /// ```
    pub fn convert<U, F, N>(self) -> BasicResult<U, F, N>
    where
        U: From<T>,
        F: From<E>,
        N: Mutability,
    {
        BasicResult::from_std(self.inner.map(U::from).map_err(F::from))
    }
}

/// Evaluate to the Ok payload of a result, or return its failure early.
///
/// The failure is converted with `From` and then wrapped into whatever the
/// enclosing function returns, which may be a `BasicResult` of any
/// mutability or a `std::result::Result`.
///
/// ```
/// use railway_core::{propagate, Result};
///
/// fn parse(input: &str) -> Result<i32, String> {
///     input.parse::<i32>().map_err(|e| e.to_string()).into()
/// }
///
/// fn sum(a: &str, b: &str) -> Result<i32, String> {
///     let a = propagate!(parse(a));
///     let b = propagate!(parse(b));
///     Result::success(a + b)
/// }
///
/// assert!(sum("1", "2").is_ok_and(|n| *n == 3));
/// assert!(sum("1", "x").is_err());
/// ```
#[macro_export]
macro_rules! propagate {
    ($result:expr $(,)?) => {
        match $crate::BasicResult::into_std($result) {
            ::core::result::Result::Ok(value) => value,
            ::core::result::Result::Err(error) => {
                return ::core::convert::From::from($crate::Failure::new(
                    ::core::convert::From::from(error),
                ));
            }
        }
    };
}
