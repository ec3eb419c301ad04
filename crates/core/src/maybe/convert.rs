//! Conversions into and out of `Maybe`.

use std::rc::{self, Rc};
use std::sync::{self, Arc};

use super::Maybe;
use crate::just::{Just, Nothing};

impl<T> From<Just<T>> for Maybe<T> {
    fn from(value: Just<T>) -> Self {
        Self::just(value.into_inner())
    }
}

impl<T> From<Nothing> for Maybe<T> {
    fn from(_: Nothing) -> Self {
        Self::NOTHING
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(inner: Option<T>) -> Self {
        Self::from_std(inner)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.inner
    }
}

/// Something that may point at a `Target`, checked at runtime.
///
/// Used by [`Maybe::from_pointer`]: a pointer that points nowhere becomes
/// nothing, any other is dereferenced into an owned payload.
pub trait PointerLike {
    type Target;

    fn into_target(self) -> Option<Self::Target>;
}

impl<T> PointerLike for Option<Box<T>> {
    type Target = T;

    fn into_target(self) -> Option<T> {
        self.map(|boxed| *boxed)
    }
}

impl<T: Clone> PointerLike for Option<Rc<T>> {
    type Target = T;

    fn into_target(self) -> Option<T> {
        self.map(Rc::unwrap_or_clone)
    }
}

impl<T: Clone> PointerLike for Option<Arc<T>> {
    type Target = T;

    fn into_target(self) -> Option<T> {
        self.map(Arc::unwrap_or_clone)
    }
}

impl<T: Clone> PointerLike for Option<&T> {
    type Target = T;

    fn into_target(self) -> Option<T> {
        self.cloned()
    }
}

/// Nothing once every strong owner is gone.
impl<T: Clone> PointerLike for rc::Weak<T> {
    type Target = T;

    fn into_target(self) -> Option<T> {
        self.upgrade().map(Rc::unwrap_or_clone)
    }
}

impl<T: Clone> PointerLike for sync::Weak<T> {
    type Target = T;

    fn into_target(self) -> Option<T> {
        self.upgrade().map(Arc::unwrap_or_clone)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use std::sync::Arc;

    use crate::{just, Maybe, NOTHING};

    #[test]
    fn test_wrappers_and_options_convert() {
        assert_eq!(Maybe::from(just(1)), just(1));
        assert_eq!(Maybe::<i32>::from(NOTHING), NOTHING);
        assert_eq!(Maybe::from(Some('c')), just('c'));
        assert_eq!(Maybe::<char>::from(None), NOTHING);
        assert_eq!(Option::<i32>::from(Maybe::just(2)), Some(2));
    }

    #[test]
    fn test_owned_pointers() {
        assert_eq!(Maybe::from_pointer(Some(Box::new(3))), just(3));
        assert_eq!(
            Maybe::from_pointer(Some(Arc::new(String::from("a")))),
            just(String::from("a"))
        );
        assert_eq!(Maybe::from_pointer(None::<Rc<i32>>), NOTHING);
    }

    #[test]
    fn test_borrowed_pointer_is_copied_out() {
        let value = 10;
        let found = [1, 10, 100].iter().find(|n| **n == value);
        assert_eq!(Maybe::from_pointer(found), just(10));
    }

    #[test]
    fn test_dead_weak_pointer_is_nothing() {
        let weak = {
            let owner = Arc::new(4);
            Arc::downgrade(&owner)
        };
        assert_eq!(Maybe::from_pointer(weak), NOTHING);
    }
}
