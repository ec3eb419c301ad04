//! `Failure` and its factory.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::display::Renderable;
use crate::success::Success;

/// The bad outcome of a computation.
///
/// `Failure<()>` (the default parameter) is the unit form. A failure orders
/// below every [`Success`], whatever the payloads.
///
/// # Examples
///
/// ```
/// use railway_core::{failure, success};
///
/// assert!(failure(100) < success(-5));
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, Default)]
pub struct Failure<E = ()>(E);

impl<E> Failure<E> {
    pub const fn new(error: E) -> Self {
        Self(error)
    }

    pub const fn get(&self) -> &E {
        &self.0
    }

    pub const fn get_mut(&mut self) -> &mut E {
        &mut self.0
    }

    pub fn into_inner(self) -> E {
        self.0
    }

    pub const fn as_ref(&self) -> Failure<&E> {
        Failure(&self.0)
    }
}

/// Wrap `error` as a [`Failure`].
pub const fn failure<E>(error: E) -> Failure<E> {
    Failure(error)
}

impl<E> From<E> for Failure<E> {
    fn from(error: E) -> Self {
        Self(error)
    }
}

impl<E: Hash> Hash for Failure<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<E: PartialEq<F>, F> PartialEq<Failure<F>> for Failure<E> {
    fn eq(&self, other: &Failure<F>) -> bool {
        self.0 == other.0
    }
}

impl<E, T> PartialEq<Success<T>> for Failure<E> {
    fn eq(&self, _other: &Success<T>) -> bool {
        false
    }
}

impl<E: Eq> Eq for Failure<E> {}

impl<E: PartialOrd<F>, F> PartialOrd<Failure<F>> for Failure<E> {
    fn partial_cmp(&self, other: &Failure<F>) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<E, T> PartialOrd<Success<T>> for Failure<E> {
    fn partial_cmp(&self, _other: &Success<T>) -> Option<Ordering> {
        Some(Ordering::Less)
    }
}

impl<E: Ord> Ord for Failure<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<E: Renderable> Renderable for Failure<E> {
    const OPAQUE: bool = E::OPAQUE;

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("failure(")?;
        self.0.render(f)?;
        f.write_str(")")
    }
}

impl<E: Renderable> fmt::Display for Failure<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::success::success;

    #[test]
    fn test_compares_element_wise() {
        assert_eq!(failure("boom"), failure("boom"));
        assert!(failure(1) < failure(2));
        assert!(failure(f64::NAN).partial_cmp(&failure(0.0)).is_none());
    }

    #[test]
    fn test_orders_below_success() {
        assert!(failure(100) < success(-5));
        assert_ne!(failure(()), success(()));
    }

    #[test]
    fn test_renders_with_tag() {
        assert_eq!(failure("boom").to_string(), "failure(\"boom\")");
        assert_eq!(Failure::<()>::default().to_string(), "failure(())");
    }
}
