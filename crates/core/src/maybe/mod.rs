//! `Maybe`: the optional-value sum type.
//!
//! A `Maybe<T>` is always exactly one of just(`T`) or nothing, and defaults
//! to nothing. Unlike [`BasicResult`], it supports in-place mutation through
//! [`replace`](Maybe::replace), [`get_or_emplace`](Maybe::get_or_emplace) and
//! [`take`](Maybe::take).

mod convert;
mod ord;

pub use convert::PointerLike;

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor};

use crate::display::Renderable;
use crate::just::{Just, Nothing};
use crate::mutability::Mutability;
use crate::panic;
use crate::result::BasicResult;

/// Holds either a value or nothing.
///
/// # Examples
///
/// ```
/// use railway_core::{Maybe, just, NOTHING};
///
/// let even = |n: i32| Maybe::just(n).filter(|n| n % 2 == 0);
/// assert_eq!(even(4), just(4));
/// assert_eq!(even(3), NOTHING);
/// ```
#[must_use]
#[derive(Clone, Copy)]
pub struct Maybe<T> {
    inner: Option<T>,
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::NOTHING
    }
}

// =============================================================================
// Construction and queries
// =============================================================================

impl<T> Maybe<T> {
    /// The empty value.
    pub const NOTHING: Self = Self { inner: None };

    pub const fn just(value: T) -> Self {
        Self::from_std(Some(value))
    }

    pub const fn nothing() -> Self {
        Self::NOTHING
    }

    pub(crate) const fn from_std(inner: Option<T>) -> Self {
        Self { inner }
    }

    /// `Just` of the first item `items` yields, `Nothing` when it is empty.
    pub fn from_first<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self::from_std(items.into_iter().next())
    }

    /// `Just` of the pointee when `pointer` points at something.
    ///
    /// ```
    /// use std::rc::Rc;
    ///
    /// use railway_core::{Maybe, just, NOTHING};
    ///
    /// let shared = Rc::new(5);
    /// assert_eq!(Maybe::from_pointer(Some(Rc::clone(&shared))), just(5));
    /// assert_eq!(Maybe::from_pointer(Rc::downgrade(&shared)), just(5));
    /// assert_eq!(Maybe::from_pointer(None::<Box<i32>>), NOTHING);
    /// ```
    pub fn from_pointer<P: PointerLike<Target = T>>(pointer: P) -> Self {
        Self::from_std(pointer.into_target())
    }

    pub const fn is_just(&self) -> bool {
        self.inner.is_some()
    }

    pub const fn is_nothing(&self) -> bool {
        self.inner.is_none()
    }

    /// `true` when just and the payload satisfies `pred`.
    pub fn is_just_and<P: FnOnce(&T) -> bool>(&self, pred: P) -> bool {
        self.inner.as_ref().is_some_and(pred)
    }

    pub const fn as_ref(&self) -> Maybe<&T> {
        Maybe::from_std(self.inner.as_ref())
    }

    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        Maybe::from_std(self.inner.as_mut())
    }

    pub const fn as_std(&self) -> Option<&T> {
        self.inner.as_ref()
    }

    pub fn into_std(self) -> Option<T> {
        self.inner
    }
}

// =============================================================================
// Extraction
// =============================================================================

impl<T> Maybe<T> {
    /// The payload.
    ///
    /// # Panics
    ///
    /// Panics when `self` is nothing.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.inner {
            Some(value) => value,
            None => panic::raise("called `Maybe::unwrap()` on a `nothing` value"),
        }
    }

    /// The payload.
    ///
    /// # Panics
    ///
    /// Panics with `msg` when `self` is nothing.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self.inner {
            Some(value) => value,
            None => panic::raise(msg),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        self.inner.unwrap_or(default)
    }

    pub fn unwrap_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        self.inner.unwrap_or_else(f)
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.inner.unwrap_or_default()
    }
}

// =============================================================================
// Transforms
// =============================================================================

impl<T> Maybe<T> {
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Maybe<U> {
        Maybe::from_std(self.inner.map(f))
    }

    pub fn map_or<U, F: FnOnce(T) -> U>(self, default: U, f: F) -> U {
        self.inner.map_or(default, f)
    }

    pub fn map_or_else<U, D, F>(self, fallback: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        self.inner.map_or_else(fallback, f)
    }

    /// Chain an optional step. Nothing short-circuits without calling `f`.
    pub fn and_then<U, F: FnOnce(T) -> Maybe<U>>(self, f: F) -> Maybe<U> {
        match self.inner {
            Some(value) => f(value),
            None => Maybe::NOTHING,
        }
    }

    /// `self` if just, otherwise whatever `f` supplies.
    pub fn or_else<F: FnOnce() -> Self>(self, f: F) -> Self {
        match self.inner {
            Some(_) => self,
            None => f(),
        }
    }

    /// Keep the payload only when `pred` accepts it.
    pub fn filter<P: FnOnce(&T) -> bool>(self, pred: P) -> Self {
        Self::from_std(self.inner.filter(pred))
    }

    pub fn and_finally<F: FnOnce(&T)>(&self, f: F) {
        if let Some(value) = &self.inner {
            f(value);
        }
    }

    pub fn or_finally<F: FnOnce()>(&self, f: F) {
        if self.inner.is_none() {
            f();
        }
    }

    pub fn and_peek<F: FnOnce(&T)>(self, f: F) -> Self {
        self.and_finally(f);
        self
    }

    pub fn or_peek<F: FnOnce()>(self, f: F) -> Self {
        self.or_finally(f);
        self
    }

    /// `rhs` if `self` is just, otherwise nothing.
    pub fn conj<U>(self, rhs: Maybe<U>) -> Maybe<U> {
        match self.inner {
            Some(_) => rhs,
            None => Maybe::NOTHING,
        }
    }

    /// `self` if just, otherwise `rhs`.
    pub fn disj(self, rhs: Self) -> Self {
        match self.inner {
            Some(_) => self,
            None => rhs,
        }
    }

    /// The one operand that is just when exactly one is, otherwise nothing.
    pub fn xdisj(self, rhs: Self) -> Self {
        Self::from_std(self.inner.xor(rhs.inner))
    }
}

// =============================================================================
// Mutation
// =============================================================================

impl<T> Maybe<T> {
    /// Store `value`, handing back the previous state.
    pub fn replace(&mut self, value: T) -> Self {
        Self::from_std(self.inner.replace(value))
    }

    /// Store the value `f` builds, handing back the previous state.
    pub fn replace_with<F: FnOnce() -> T>(&mut self, f: F) -> Self {
        self.replace(f())
    }

    /// The stored payload, storing `value` first when there is none.
    pub fn get_or_emplace(&mut self, value: T) -> &mut T {
        self.inner.get_or_insert(value)
    }

    /// The stored payload, storing what `f` builds first when there is none.
    ///
    /// `f` runs only when `self` is nothing.
    pub fn get_or_emplace_with<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
        self.inner.get_or_insert_with(f)
    }

    /// Move the payload out, leaving nothing behind.
    pub fn take(&mut self) -> Self {
        Self::from_std(self.inner.take())
    }
}

// =============================================================================
// Cross-family
// =============================================================================

impl<T> Maybe<T> {
    /// Ok with the payload, or Err with `error`.
    pub fn ok_or<E>(self, error: E) -> BasicResult<T, E> {
        BasicResult::from_std(self.inner.ok_or(error))
    }

    /// Ok with the payload, or Err with what `f` builds.
    pub fn ok_or_else<E, F: FnOnce() -> E>(self, f: F) -> BasicResult<T, E> {
        BasicResult::from_std(self.inner.ok_or_else(f))
    }

    /// Ok with the payload, or a unit failure.
    pub fn ok_or_unit(self) -> BasicResult<T, ()> {
        self.ok_or(())
    }
}

impl<T, E, M: Mutability> Maybe<BasicResult<T, E, M>> {
    /// Swap nesting: nothing → Ok(nothing), just(Ok x) → Ok(just x),
    /// just(Err e) → Err e.
    pub fn transpose(self) -> BasicResult<Maybe<T>, E, M> {
        match self.inner {
            None => BasicResult::success(Maybe::NOTHING),
            Some(result) => result.map(Maybe::just),
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    pub fn flatten(self) -> Maybe<T> {
        self.inner.unwrap_or_default()
    }
}

impl<T: Clone> Maybe<&T> {
    /// An owning copy of the borrowed payload.
    pub fn cloned(self) -> Maybe<T> {
        Maybe::from_std(self.inner.cloned())
    }
}

impl<T: Copy> Maybe<&T> {
    pub fn copied(self) -> Maybe<T> {
        Maybe::from_std(self.inner.copied())
    }
}

// =============================================================================
// Operators
// =============================================================================

impl<T, U> BitAnd<Maybe<U>> for Maybe<T> {
    type Output = Maybe<U>;

    fn bitand(self, rhs: Maybe<U>) -> Maybe<U> {
        self.conj(rhs)
    }
}

impl<T> BitOr for Maybe<T> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.disj(rhs)
    }
}

impl<T> BitXor for Maybe<T> {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        self.xdisj(rhs)
    }
}

/// Truthiness of a maybe is `is_just()`.
impl<T> From<&Maybe<T>> for bool {
    fn from(maybe: &Maybe<T>) -> Self {
        maybe.is_just()
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(value) => f.debug_tuple("Just").field(value).finish(),
            None => f.write_str("Nothing"),
        }
    }
}

impl<T: Renderable> Renderable for Maybe<T> {
    const OPAQUE: bool = T::OPAQUE;

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(value) => Just::new(value).render(f),
            None => Nothing.render(f),
        }
    }
}

impl<T: Renderable> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}
