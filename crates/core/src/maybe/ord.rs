//! Equality, ordering and hashing for `Maybe`, including against the bare
//! `Just` and `Nothing` tags.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use super::Maybe;
use crate::cmp;
use crate::just::{Just, Nothing};

impl<T: PartialEq<U>, U> PartialEq<Maybe<U>> for Maybe<T> {
    fn eq(&self, other: &Maybe<U>) -> bool {
        cmp::presence_eq(self.as_std(), other.as_std())
    }
}

impl<T: PartialEq<U>, U> PartialEq<Just<U>> for Maybe<T> {
    fn eq(&self, other: &Just<U>) -> bool {
        self.as_std().is_some_and(|value| value == other.get())
    }
}

impl<T> PartialEq<Nothing> for Maybe<T> {
    fn eq(&self, _other: &Nothing) -> bool {
        self.is_nothing()
    }
}

impl<T: PartialEq<U>, U> PartialEq<Maybe<U>> for Just<T> {
    fn eq(&self, other: &Maybe<U>) -> bool {
        other.as_std().is_some_and(|value| self.get() == value)
    }
}

impl<U> PartialEq<Maybe<U>> for Nothing {
    fn eq(&self, other: &Maybe<U>) -> bool {
        other.is_nothing()
    }
}

impl<T: Eq> Eq for Maybe<T> {}

impl<T: PartialOrd<U>, U> PartialOrd<Maybe<U>> for Maybe<T> {
    fn partial_cmp(&self, other: &Maybe<U>) -> Option<Ordering> {
        cmp::presence(self.as_std(), other.as_std())
    }
}

impl<T: PartialOrd<U>, U> PartialOrd<Just<U>> for Maybe<T> {
    fn partial_cmp(&self, other: &Just<U>) -> Option<Ordering> {
        cmp::arm_vs_good(cmp::present(self.as_std()), other.get())
    }
}

impl<T> PartialOrd<Nothing> for Maybe<T> {
    fn partial_cmp(&self, _other: &Nothing) -> Option<Ordering> {
        Some(if self.is_just() {
            Ordering::Greater
        } else {
            Ordering::Equal
        })
    }
}

impl<T: PartialOrd<U>, U> PartialOrd<Maybe<U>> for Just<T> {
    fn partial_cmp(&self, other: &Maybe<U>) -> Option<Ordering> {
        cmp::good_vs_arm(self.get(), cmp::present(other.as_std()))
    }
}

impl<U> PartialOrd<Maybe<U>> for Nothing {
    fn partial_cmp(&self, other: &Maybe<U>) -> Option<Ordering> {
        Some(if other.is_just() {
            Ordering::Less
        } else {
            Ordering::Equal
        })
    }
}

impl<T: Ord> Ord for Maybe<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp::presence_total(self.as_std(), other.as_std())
    }
}

impl<T: Hash> Hash for Maybe<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use crate::{just, Maybe, NOTHING};

    #[test]
    fn test_nothing_orders_below_any_just() {
        let none = Maybe::<i32>::NOTHING;
        let low = Maybe::just(i32::MIN);
        assert!(none < low);
        assert!(low > none);
        assert_ne!(none, low);
        assert_eq!(none, Maybe::<i32>::nothing());
    }

    #[test]
    fn test_payloads_decide_between_justs() {
        assert!(Maybe::just(1) < Maybe::just(2));
        assert_eq!(Maybe::just("x"), Maybe::just(String::from("x")));
    }

    #[test]
    fn test_agrees_with_bare_tags() {
        let three = Maybe::just(3);
        assert_eq!(three, just(3));
        assert_eq!(just(3), three);
        assert_ne!(three, NOTHING);
        assert_ne!(NOTHING, three);
        assert!(three > NOTHING);
        assert!(NOTHING < three);
        assert!(three < just(4));
        assert!(just(2) < three);

        let none = Maybe::<i32>::NOTHING;
        assert_eq!(none, NOTHING);
        assert_eq!(NOTHING, none);
        assert!(none < just(i32::MIN));
        assert!(just(i32::MIN) > none);
        assert!(none <= NOTHING);
    }

    #[test]
    fn test_sorts_nothing_first() {
        let mut items = vec![Maybe::just(5), Maybe::NOTHING, Maybe::just(-3)];
        items.sort();
        let expected: Vec<Maybe<i32>> = vec![Maybe::NOTHING, Maybe::just(-3), Maybe::just(5)];
        assert_eq!(items, expected);
    }
}
