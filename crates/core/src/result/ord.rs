//! Equality, ordering and hashing for `BasicResult`, including against the
//! bare `Success` and `Failure` wrappers.
//!
//! Mutability never takes part in a comparison.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use super::BasicResult;
use crate::cmp;
use crate::failure::Failure;
use crate::mutability::Mutability;
use crate::success::Success;

impl<T, E, U, F, M, N> PartialEq<BasicResult<U, F, N>> for BasicResult<T, E, M>
where
    T: PartialEq<U>,
    E: PartialEq<F>,
    M: Mutability,
    N: Mutability,
{
    fn eq(&self, other: &BasicResult<U, F, N>) -> bool {
        cmp::arms_eq(self.as_std(), other.as_std())
    }
}

impl<T, E, U, M: Mutability> PartialEq<Success<U>> for BasicResult<T, E, M>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Success<U>) -> bool {
        self.as_std().is_ok_and(|value| value == other.get())
    }
}

impl<T, E, F, M: Mutability> PartialEq<Failure<F>> for BasicResult<T, E, M>
where
    E: PartialEq<F>,
{
    fn eq(&self, other: &Failure<F>) -> bool {
        self.as_std().is_err_and(|error| error == other.get())
    }
}

impl<T, U, F, N: Mutability> PartialEq<BasicResult<U, F, N>> for Success<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &BasicResult<U, F, N>) -> bool {
        other.as_std().is_ok_and(|value| self.get() == value)
    }
}

impl<E, U, F, N: Mutability> PartialEq<BasicResult<U, F, N>> for Failure<E>
where
    E: PartialEq<F>,
{
    fn eq(&self, other: &BasicResult<U, F, N>) -> bool {
        other.as_std().is_err_and(|error| self.get() == error)
    }
}

impl<T: Eq, E: Eq, M: Mutability> Eq for BasicResult<T, E, M> {}

impl<T, E, U, F, M, N> PartialOrd<BasicResult<U, F, N>> for BasicResult<T, E, M>
where
    T: PartialOrd<U>,
    E: PartialOrd<F>,
    M: Mutability,
    N: Mutability,
{
    fn partial_cmp(&self, other: &BasicResult<U, F, N>) -> Option<Ordering> {
        cmp::arms(self.as_std(), other.as_std())
    }
}

impl<T, E, U, M: Mutability> PartialOrd<Success<U>> for BasicResult<T, E, M>
where
    T: PartialOrd<U>,
{
    fn partial_cmp(&self, other: &Success<U>) -> Option<Ordering> {
        cmp::arm_vs_good(self.as_std(), other.get())
    }
}

impl<T, E, F, M: Mutability> PartialOrd<Failure<F>> for BasicResult<T, E, M>
where
    E: PartialOrd<F>,
{
    fn partial_cmp(&self, other: &Failure<F>) -> Option<Ordering> {
        cmp::arm_vs_bad(self.as_std(), other.get())
    }
}

impl<T, U, F, N: Mutability> PartialOrd<BasicResult<U, F, N>> for Success<T>
where
    T: PartialOrd<U>,
{
    fn partial_cmp(&self, other: &BasicResult<U, F, N>) -> Option<Ordering> {
        cmp::good_vs_arm(self.get(), other.as_std())
    }
}

impl<E, U, F, N: Mutability> PartialOrd<BasicResult<U, F, N>> for Failure<E>
where
    E: PartialOrd<F>,
{
    fn partial_cmp(&self, other: &BasicResult<U, F, N>) -> Option<Ordering> {
        cmp::bad_vs_arm(self.get(), other.as_std())
    }
}

impl<T: Ord, E: Ord, M: Mutability> Ord for BasicResult<T, E, M> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp::arms_total(self.as_std(), other.as_std())
    }
}

impl<T: Hash, E: Hash, M: Mutability> Hash for BasicResult<T, E, M> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}
