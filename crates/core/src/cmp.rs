//! Three-way comparison shared by every railway type.
//!
//! Each pair of comparable kinds has exactly one function here; the
//! `PartialEq`/`PartialOrd`/`Ord` impls are thin calls into them, so the
//! relational operators fall out of `partial_cmp` without per-pair bodies.
//!
//! Ordering rule: the good arm (success, just) ranks above the bad arm
//! (failure, nothing). Within an arm the payloads decide.

use std::cmp::Ordering;

type Arm<'a, T, E> = std::result::Result<&'a T, &'a E>;

/// Arm against arm.
pub(crate) fn arms<T, E, U, F>(lhs: Arm<'_, T, E>, rhs: Arm<'_, U, F>) -> Option<Ordering>
where
    T: PartialOrd<U>,
    E: PartialOrd<F>,
{
    match (lhs, rhs) {
        (Ok(l), Ok(r)) => l.partial_cmp(r),
        (Err(l), Err(r)) => l.partial_cmp(r),
        (Ok(_), Err(_)) => Some(Ordering::Greater),
        (Err(_), Ok(_)) => Some(Ordering::Less),
    }
}

pub(crate) fn arms_eq<T, E, U, F>(lhs: Arm<'_, T, E>, rhs: Arm<'_, U, F>) -> bool
where
    T: PartialEq<U>,
    E: PartialEq<F>,
{
    match (lhs, rhs) {
        (Ok(l), Ok(r)) => l == r,
        (Err(l), Err(r)) => l == r,
        _ => false,
    }
}

pub(crate) fn arms_total<T: Ord, E: Ord>(lhs: Arm<'_, T, E>, rhs: Arm<'_, T, E>) -> Ordering {
    match (lhs, rhs) {
        (Ok(l), Ok(r)) => l.cmp(r),
        (Err(l), Err(r)) => l.cmp(r),
        (Ok(_), Err(_)) => Ordering::Greater,
        (Err(_), Ok(_)) => Ordering::Less,
    }
}

/// Bare good value against an arm.
pub(crate) fn good_vs_arm<T, U, F>(lhs: &T, rhs: Arm<'_, U, F>) -> Option<Ordering>
where
    T: PartialOrd<U>,
{
    match rhs {
        Ok(r) => lhs.partial_cmp(r),
        Err(_) => Some(Ordering::Greater),
    }
}

/// Arm against a bare good value.
pub(crate) fn arm_vs_good<T, E, U>(lhs: Arm<'_, T, E>, rhs: &U) -> Option<Ordering>
where
    T: PartialOrd<U>,
{
    match lhs {
        Ok(l) => l.partial_cmp(rhs),
        Err(_) => Some(Ordering::Less),
    }
}

/// Bare bad value against an arm.
pub(crate) fn bad_vs_arm<E, U, F>(lhs: &E, rhs: Arm<'_, U, F>) -> Option<Ordering>
where
    E: PartialOrd<F>,
{
    match rhs {
        Ok(_) => Some(Ordering::Less),
        Err(r) => lhs.partial_cmp(r),
    }
}

/// Arm against a bare bad value.
pub(crate) fn arm_vs_bad<T, E, F>(lhs: Arm<'_, T, E>, rhs: &F) -> Option<Ordering>
where
    E: PartialOrd<F>,
{
    match lhs {
        Ok(_) => Some(Ordering::Greater),
        Err(l) => l.partial_cmp(rhs),
    }
}

/// View a presence slot as an arm whose bad side carries nothing.
pub(crate) fn present<T>(slot: Option<&T>) -> Arm<'_, T, ()> {
    slot.ok_or(&())
}

/// Presence against presence: absent ranks below present.
pub(crate) fn presence<T, U>(lhs: Option<&T>, rhs: Option<&U>) -> Option<Ordering>
where
    T: PartialOrd<U>,
{
    arms(present(lhs), present(rhs))
}

pub(crate) fn presence_eq<T, U>(lhs: Option<&T>, rhs: Option<&U>) -> bool
where
    T: PartialEq<U>,
{
    arms_eq(present(lhs), present(rhs))
}

pub(crate) fn presence_total<T: Ord>(lhs: Option<&T>, rhs: Option<&T>) -> Ordering {
    arms_total(present(lhs), present(rhs))
}
