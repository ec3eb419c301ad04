//! `BasicResult`: the fallible-outcome sum type and its combinator algebra.
//!
//! A `BasicResult<T, E, M>` is always exactly one of Ok(`T`) or Err(`E`).
//! `M` is a [`Mutability`] marker: the immutable form (the default, aliased
//! as [`Result`](crate::Result)) can only be rebuilt. The mutable form
//! ([`MutResult`](crate::MutResult)) may also be reassigned in place and
//! mutably borrowed.
//!
//! Combinators never panic. Only the extraction family (`unwrap`,
//! `unwrap_err`, `expect`, `expect_err` and their `_mut` forms) escalates
//! through [`crate::panic`], and only when called on the wrong arm.

mod convert;
mod mutable;
mod ord;

use std::fmt;
use std::marker::PhantomData;
use std::ops::{BitAnd, BitOr, Deref, Not};

use crate::display::{as_display, Renderable};
use crate::failure::Failure;
use crate::maybe::Maybe;
use crate::mutability::{Immutable, Meet, Mutability};
use crate::panic;
use crate::success::Success;

/// Holds exactly one of a success payload `T` or a failure payload `E`.
///
/// There is no `Default`: every result is born in one of its two states.
///
/// ```compile_fail
/// use railway_core::Result;
///
/// let r: Result<i32, String> = Result::default();
/// ```
///
/// Projections borrow from their source and cannot outlive it.
///
/// ```compile_fail
/// use railway_core::Result;
///
/// let projected;
/// {
///     let owner = Result::<String, ()>::success(String::from("x"));
///     projected = owner.as_ref();
/// }
/// assert!(projected.is_ok());
/// ```
///
/// # Examples
///
/// ```
/// use railway_core::{Result, success};
///
/// let parsed: Result<i32, String> = success(5).into();
/// let doubled = parsed.map(|x| x * 2);
/// assert_eq!(doubled, success(10));
/// ```
#[must_use]
#[derive(Clone, Copy)]
pub struct BasicResult<T, E, M: Mutability = Immutable> {
    inner: std::result::Result<T, E>,
    mutability: PhantomData<M>,
}

// =============================================================================
// Construction and queries
// =============================================================================

impl<T, E, M: Mutability> BasicResult<T, E, M> {
    /// A result in the Ok state.
    pub const fn success(value: T) -> Self {
        Self::from_std(Ok(value))
    }

    /// A result in the Err state.
    pub const fn failure(error: E) -> Self {
        Self::from_std(Err(error))
    }

    pub(crate) const fn from_std(inner: std::result::Result<T, E>) -> Self {
        Self {
            inner,
            mutability: PhantomData,
        }
    }

    pub const fn is_ok(&self) -> bool {
        self.inner.is_ok()
    }

    pub const fn is_err(&self) -> bool {
        self.inner.is_err()
    }

    /// `true` when Ok and the payload satisfies `pred`.
    pub fn is_ok_and<P: FnOnce(&T) -> bool>(&self, pred: P) -> bool {
        self.inner.as_ref().is_ok_and(pred)
    }

    /// `true` when Err and the payload satisfies `pred`.
    pub fn is_err_and<P: FnOnce(&E) -> bool>(&self, pred: P) -> bool {
        self.inner.as_ref().is_err_and(pred)
    }

    /// Borrow the active arm as a std result.
    pub const fn as_std(&self) -> std::result::Result<&T, &E> {
        self.inner.as_ref()
    }

    /// Give up the wrapper, enabling the `?` operator.
    ///
    /// ```
    /// use railway_core::{Result, failure};
    ///
    /// fn first(r: Result<i32, String>) -> std::result::Result<i32, String> {
    ///     let value = r.into_std()?;
    ///     Ok(value + 1)
    /// }
    ///
    /// assert_eq!(first(failure(String::from("no")).into()), Err(String::from("no")));
    /// ```
    pub fn into_std(self) -> std::result::Result<T, E> {
        self.inner
    }
}

// =============================================================================
// Projections
// =============================================================================

impl<T, E, M: Mutability> BasicResult<T, E, M> {
    /// The success payload, if any.
    pub fn ok(self) -> Maybe<T> {
        Maybe::from_std(self.inner.ok())
    }

    /// The failure payload, if any.
    pub fn err(self) -> Maybe<E> {
        Maybe::from_std(self.inner.err())
    }

    /// Borrow both payloads, keeping `self` intact.
    pub const fn as_ref(&self) -> BasicResult<&T, &E, M> {
        BasicResult::from_std(self.inner.as_ref())
    }

    /// Dereference the success payload one level.
    ///
    /// ```
    /// use railway_core::Result;
    ///
    /// let r = Result::<Box<str>, ()>::success("boxed".into());
    /// assert_eq!(r.indirect_ok().unwrap(), "boxed");
    /// ```
    pub fn indirect_ok(&self) -> BasicResult<&T::Target, &E, M>
    where
        T: Deref,
    {
        BasicResult::from_std(self.inner.as_ref().map(|value| &**value))
    }

    /// Dereference the failure payload one level.
    pub fn indirect_err(&self) -> BasicResult<&T, &E::Target, M>
    where
        E: Deref,
    {
        BasicResult::from_std(self.inner.as_ref().map_err(|error| &**error))
    }

    /// Dereference whichever payload is active.
    pub fn indirect(&self) -> BasicResult<&T::Target, &E::Target, M>
    where
        T: Deref,
        E: Deref,
    {
        BasicResult::from_std(
            self.inner
                .as_ref()
                .map(|value| &**value)
                .map_err(|error| &**error),
        )
    }
}

// =============================================================================
// Transforms
// =============================================================================

impl<T, E, M: Mutability> BasicResult<T, E, M> {
    pub fn map<U, F: FnOnce(T) -> U>(self, op: F) -> BasicResult<U, E, M> {
        BasicResult::from_std(self.inner.map(op))
    }

    pub fn map_err<G, F: FnOnce(E) -> G>(self, op: F) -> BasicResult<T, G, M> {
        BasicResult::from_std(self.inner.map_err(op))
    }

    /// Collapse to `U`: `op` on Ok, `fallback` on Err.
    pub fn map_or_else<U, D, F>(self, fallback: D, op: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        self.inner.map_or_else(fallback, op)
    }

    /// Collapse to `U` through a single operation accepting either payload.
    ///
    /// Both payloads are first converted into the common type `C`.
    ///
    /// ```
    /// use railway_core::Result;
    ///
    /// let r = Result::<u8, u16>::failure(300);
    /// let width = r.map_anything_else(|n: u32| n * 2);
    /// assert_eq!(width, 600);
    /// ```
    pub fn map_anything_else<C, U, F>(self, op: F) -> U
    where
        T: Into<C>,
        E: Into<C>,
        F: FnOnce(C) -> U,
    {
        match self.inner {
            Ok(value) => op(value.into()),
            Err(error) => op(error.into()),
        }
    }

    /// Chain a fallible step. Err short-circuits without calling `op`.
    ///
    /// The produced result carries the mutability `op` returns.
    pub fn and_then<U, N, F>(self, op: F) -> BasicResult<U, E, N>
    where
        N: Mutability,
        F: FnOnce(T) -> BasicResult<U, E, N>,
    {
        match self.inner {
            Ok(value) => op(value),
            Err(error) => BasicResult::failure(error),
        }
    }

    /// Recover from a failure. Ok passes through without calling `op`.
    pub fn or_else<G, N, F>(self, op: F) -> BasicResult<T, G, N>
    where
        N: Mutability,
        F: FnOnce(E) -> BasicResult<T, G, N>,
    {
        match self.inner {
            Ok(value) => BasicResult::success(value),
            Err(error) => op(error),
        }
    }

    /// `rhs` if `self` is Ok, otherwise `self`'s failure.
    ///
    /// Mutable only when both operands are.
    pub fn conj<U, N>(
        self,
        rhs: BasicResult<U, E, N>,
    ) -> BasicResult<U, E, <M as Meet<N>>::Output>
    where
        N: Mutability,
        M: Meet<N>,
    {
        match self.inner {
            Ok(_) => BasicResult::from_std(rhs.inner),
            Err(error) => BasicResult::failure(error),
        }
    }

    /// `self` if Ok, otherwise whatever state `rhs` is in.
    pub fn disj<F, N: Mutability>(self, rhs: BasicResult<T, F, N>) -> BasicResult<T, F, M> {
        match self.inner {
            Ok(value) => BasicResult::success(value),
            Err(_) => BasicResult::from_std(rhs.inner),
        }
    }

    /// Run `f` on the success payload, if any.
    pub fn and_finally<F: FnOnce(&T)>(&self, f: F) {
        if let Ok(value) = &self.inner {
            f(value);
        }
    }

    /// Run `f` on the failure payload, if any.
    pub fn or_finally<F: FnOnce(&E)>(&self, f: F) {
        if let Err(error) = &self.inner {
            f(error);
        }
    }

    /// [`and_finally`](Self::and_finally), then hand `self` back for chaining.
    pub fn and_peek<F: FnOnce(&T)>(self, f: F) -> Self {
        self.and_finally(f);
        self
    }

    /// [`or_finally`](Self::or_finally), then hand `self` back for chaining.
    pub fn or_peek<F: FnOnce(&E)>(self, f: F) -> Self {
        self.or_finally(f);
        self
    }
}

impl<T, E, M: Mutability> BasicResult<Maybe<T>, E, M> {
    /// Swap nesting: Ok(just x) → just(Ok x), Ok(nothing) → nothing,
    /// Err e → just(Err e).
    pub fn transpose(self) -> Maybe<BasicResult<T, E, M>> {
        match self.inner {
            Ok(slot) => slot.map(BasicResult::success),
            Err(error) => Maybe::just(BasicResult::failure(error)),
        }
    }
}

// =============================================================================
// Extraction
// =============================================================================

impl<T, E, M: Mutability> BasicResult<T, E, M> {
    /// The success payload.
    ///
    /// # Panics
    ///
    /// Panics with the rendered failure when `self` is Err.
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: Renderable,
    {
        match self.inner {
            Ok(value) => value,
            Err(error) => unwrap_failed("unwrap", &error),
        }
    }

    /// The failure payload.
    ///
    /// # Panics
    ///
    /// Panics with the rendered success when `self` is Ok.
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: Renderable,
    {
        match self.inner {
            Ok(value) => unwrap_err_failed("unwrap_err", &value),
            Err(error) => error,
        }
    }

    /// The success payload.
    ///
    /// # Panics
    ///
    /// Panics with `msg` followed by the rendered failure when `self` is Err.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T
    where
        E: Renderable,
    {
        match self.inner {
            Ok(value) => value,
            Err(error) => expect_failed(msg, &error),
        }
    }

    /// The failure payload.
    ///
    /// # Panics
    ///
    /// Panics with `msg` followed by the rendered success when `self` is Ok.
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E
    where
        T: Renderable,
    {
        match self.inner {
            Ok(value) => expect_failed(msg, &value),
            Err(error) => error,
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        self.inner.unwrap_or(default)
    }

    /// The success payload, or `op` applied to the failure.
    pub fn unwrap_or_else<F: FnOnce(E) -> T>(self, op: F) -> T {
        self.inner.unwrap_or_else(op)
    }

    /// The success payload, or a fallback that ignores the failure.
    pub fn unwrap_or_else_lazy<F: FnOnce() -> T>(self, op: F) -> T {
        self.inner.unwrap_or_else(|_| op())
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.inner.unwrap_or_default()
    }
}

#[track_caller]
#[cold]
pub(super) fn unwrap_failed<E: Renderable>(op: &str, error: &E) -> ! {
    if E::OPAQUE {
        panic::raise(format!(
            "called `BasicResult::{op}()` on a value `failure(?)`"
        ))
    }
    panic::raise(format!(
        "called `BasicResult::{op}()` on a value: `{}`",
        as_display(&Failure::new(error))
    ))
}

#[track_caller]
#[cold]
pub(super) fn unwrap_err_failed<T: Renderable>(op: &str, value: &T) -> ! {
    if T::OPAQUE {
        panic::raise(format!(
            "called `BasicResult::{op}()` on a value `success(?)`"
        ))
    }
    panic::raise(format!(
        "called `BasicResult::{op}()` on a value: `{}`",
        as_display(&Success::new(value))
    ))
}

#[track_caller]
#[cold]
fn expect_failed<P: Renderable>(msg: &str, payload: &P) -> ! {
    panic::raise(format!("{msg}: {}", as_display(payload)))
}

// =============================================================================
// Operators
// =============================================================================

impl<T, E, U, M, N> BitAnd<BasicResult<U, E, N>> for BasicResult<T, E, M>
where
    M: Meet<N>,
    N: Mutability,
{
    type Output = BasicResult<U, E, <M as Meet<N>>::Output>;

    fn bitand(self, rhs: BasicResult<U, E, N>) -> Self::Output {
        self.conj(rhs)
    }
}

impl<T, E, F, M: Mutability, N: Mutability> BitOr<BasicResult<T, F, N>> for BasicResult<T, E, M> {
    type Output = BasicResult<T, F, M>;

    fn bitor(self, rhs: BasicResult<T, F, N>) -> Self::Output {
        self.disj(rhs)
    }
}

/// `!r` is `r.is_err()`.
impl<T, E, M: Mutability> Not for BasicResult<T, E, M> {
    type Output = bool;

    fn not(self) -> bool {
        self.is_err()
    }
}

impl<T, E, M: Mutability> Not for &BasicResult<T, E, M> {
    type Output = bool;

    fn not(self) -> bool {
        self.is_err()
    }
}

/// Truthiness of a result is `is_ok()`.
impl<T, E, M: Mutability> From<&BasicResult<T, E, M>> for bool {
    fn from(result: &BasicResult<T, E, M>) -> Self {
        result.is_ok()
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug, M: Mutability> fmt::Debug for BasicResult<T, E, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Ok(value) => f.debug_tuple("Success").field(value).finish(),
            Err(error) => f.debug_tuple("Failure").field(error).finish(),
        }
    }
}

impl<T: Renderable, E: Renderable, M: Mutability> Renderable for BasicResult<T, E, M> {
    const OPAQUE: bool = T::OPAQUE || E::OPAQUE;

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Ok(value) => Success::new(value).render(f),
            Err(error) => Failure::new(error).render(f),
        }
    }
}

impl<T: Renderable, E: Renderable, M: Mutability> fmt::Display for BasicResult<T, E, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}
