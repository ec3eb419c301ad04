//! Type-level mutability markers for [`BasicResult`](crate::BasicResult).
//!
//! The marker decides which methods exist, never a runtime branch:
//! only `BasicResult<_, _, Mutable>` has `assign`, `as_mut` and the
//! `unwrap_*_mut` accessors.

use std::fmt::Debug;
use std::hash::Hash;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Immutable {}
    impl Sealed for super::Mutable {}
}

/// Implemented by [`Immutable`] and [`Mutable`] only.
pub trait Mutability:
    sealed::Sealed + Copy + Debug + Default + Eq + Ord + Hash + Send + Sync + 'static
{
    /// Whether results carrying this marker may be reassigned in place.
    const IS_MUTABLE: bool;
}

/// Results that can never be reassigned after construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Immutable;

/// Results that permit whole-value reassignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mutable;

impl Mutability for Immutable {
    const IS_MUTABLE: bool = false;
}

impl Mutability for Mutable {
    const IS_MUTABLE: bool = true;
}

/// The weaker of two mutabilities: mutable only when both sides are.
pub trait Meet<Rhs: Mutability>: Mutability {
    type Output: Mutability;
}

impl Meet<Mutable> for Mutable {
    type Output = Mutable;
}

impl Meet<Immutable> for Mutable {
    type Output = Immutable;
}

impl Meet<Mutable> for Immutable {
    type Output = Immutable;
}

impl Meet<Immutable> for Immutable {
    type Output = Immutable;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meet_is_mutable<L: Meet<R>, R: Mutability>() -> bool {
        <L::Output as Mutability>::IS_MUTABLE
    }

    #[test]
    fn test_markers_report_mutability() {
        assert!(Mutable::IS_MUTABLE);
        assert!(!Immutable::IS_MUTABLE);
    }

    #[test]
    fn test_meet_is_mutable_only_when_both_are() {
        assert!(meet_is_mutable::<Mutable, Mutable>());
        assert!(!meet_is_mutable::<Mutable, Immutable>());
        assert!(!meet_is_mutable::<Immutable, Mutable>());
        assert!(!meet_is_mutable::<Immutable, Immutable>());
    }
}
