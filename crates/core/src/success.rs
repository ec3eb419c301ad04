//! `Success` and its factory.
//!
//! A `Success` tags a value as the good outcome of a computation. On its own
//! it only supports construction, retrieval and comparison; it becomes useful
//! once converted into a [`BasicResult`](crate::BasicResult).

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::display::Renderable;
use crate::failure::Failure;

/// The good outcome of a computation.
///
/// `Success<()>` (the default parameter) is the unit form.
///
/// # Examples
///
/// ```
/// use railway_core::{success, Result};
///
/// let r: Result<i32, String> = success(3).into();
/// assert!(r.is_ok());
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, Default)]
pub struct Success<T = ()>(T);

impl<T> Success<T> {
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    pub const fn get(&self) -> &T {
        &self.0
    }

    pub const fn get_mut(&mut self) -> &mut T {
        &mut self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }

    /// Borrow the payload without giving up the wrapper.
    pub const fn as_ref(&self) -> Success<&T> {
        Success(&self.0)
    }
}

/// Wrap `value` as a [`Success`].
pub const fn success<T>(value: T) -> Success<T> {
    Success(value)
}

impl<T> From<T> for Success<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T: Hash> Hash for Success<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T: PartialEq<U>, U> PartialEq<Success<U>> for Success<T> {
    fn eq(&self, other: &Success<U>) -> bool {
        self.0 == other.0
    }
}

impl<T, F> PartialEq<Failure<F>> for Success<T> {
    fn eq(&self, _other: &Failure<F>) -> bool {
        false
    }
}

impl<T: Eq> Eq for Success<T> {}

impl<T: PartialOrd<U>, U> PartialOrd<Success<U>> for Success<T> {
    fn partial_cmp(&self, other: &Success<U>) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<T, F> PartialOrd<Failure<F>> for Success<T> {
    fn partial_cmp(&self, _other: &Failure<F>) -> Option<Ordering> {
        Some(Ordering::Greater)
    }
}

impl<T: Ord> Ord for Success<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T: Renderable> Renderable for Success<T> {
    const OPAQUE: bool = T::OPAQUE;

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("success(")?;
        self.0.render(f)?;
        f.write_str(")")
    }
}

impl<T: Renderable> fmt::Display for Success<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::failure;

    #[test]
    fn test_accessors() {
        let mut s = success(String::from("ok"));
        assert_eq!(s.get(), "ok");
        s.get_mut().push('!');
        assert_eq!(s.into_inner(), "ok!");
    }

    #[test]
    fn test_compares_element_wise() {
        assert_eq!(success(1), success(1));
        assert!(success(1) < success(2));
        assert_eq!(success("a"), success(String::from("a")));
    }

    #[test]
    fn test_never_equals_failure() {
        assert_ne!(success(1), failure(1));
        assert!(success(i32::MIN) > failure(i32::MAX));
    }

    #[test]
    fn test_unit_form_defaults() {
        let unit: Success = Success::default();
        assert_eq!(unit, success(()));
    }

    #[test]
    fn test_renders_with_tag() {
        assert_eq!(success(42).to_string(), "success(42)");
        assert_eq!(success("x").to_string(), "success(\"x\")");
    }
}
