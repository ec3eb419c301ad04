//! Presence and absence tags: `Just` and `Nothing`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::display::Renderable;

/// A present value.
///
/// `Just<&T>` is a plain borrow; it never outlives the value it points at.
#[must_use]
#[derive(Debug, Clone, Copy, Default)]
pub struct Just<T>(T);

impl<T> Just<T> {
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

    pub const fn as_ref(&self) -> Just<&T> {
        Just(&self.0)
    }
}

/// Wrap `value` as a [`Just`].
pub const fn just<T>(value: T) -> Just<T> {
    Just(value)
}

impl<T> From<T> for Just<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

/// Absence. Stateless; every `Nothing` is equal to every other.
#[must_use]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nothing;

/// The `Nothing` value.
pub const NOTHING: Nothing = Nothing;

impl<T: Hash> Hash for Just<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T: PartialEq<U>, U> PartialEq<Just<U>> for Just<T> {
    fn eq(&self, other: &Just<U>) -> bool {
        self.0 == other.0
    }
}

impl<T> PartialEq<Nothing> for Just<T> {
    fn eq(&self, _other: &Nothing) -> bool {
        false
    }
}

impl<T> PartialEq<Just<T>> for Nothing {
    fn eq(&self, _other: &Just<T>) -> bool {
        false
    }
}

impl<T: Eq> Eq for Just<T> {}

impl<T: PartialOrd<U>, U> PartialOrd<Just<U>> for Just<T> {
    fn partial_cmp(&self, other: &Just<U>) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<T> PartialOrd<Nothing> for Just<T> {
    fn partial_cmp(&self, _other: &Nothing) -> Option<Ordering> {
        Some(Ordering::Greater)
    }
}

impl<T> PartialOrd<Just<T>> for Nothing {
    fn partial_cmp(&self, _other: &Just<T>) -> Option<Ordering> {
        Some(Ordering::Less)
    }
}

impl<T: Ord> Ord for Just<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T: Renderable> Renderable for Just<T> {
    const OPAQUE: bool = T::OPAQUE;

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("just(")?;
        self.0.render(f)?;
        f.write_str(")")
    }
}

impl<T: Renderable> fmt::Display for Just<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

impl Renderable for Nothing {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("nothing")
    }
}

impl fmt::Display for Nothing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_just_compares_element_wise() {
        assert_eq!(just(3), just(3));
        assert!(just(3) > just(2));
    }

    #[test]
    fn test_nothing_ranks_below_any_just() {
        assert!(NOTHING < just(i64::MIN));
        assert!(just(()) > NOTHING);
        assert_ne!(just(0), NOTHING);
        assert_eq!(NOTHING, Nothing);
    }

    #[test]
    fn test_just_may_borrow() {
        let owner = String::from("held");
        let borrowed = just(owner.as_str());
        assert_eq!(*borrowed.get(), "held");
        assert_eq!(borrowed, just("held"));
    }

    #[test]
    fn test_rendering() {
        assert_eq!(just(vec![1, 2]).to_string(), "just([1,2])");
        assert_eq!(NOTHING.to_string(), "nothing");
    }
}
