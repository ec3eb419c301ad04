//! The `Renderable` capability: an explicit, opt-in way for a value to appear
//! in panic messages and in the `Display` output of railway types.
//!
//! Implementations are provided for primitives, strings, sequences, maps,
//! small tuples, smart pointers and every railway type. Domain types opt in
//! with [`renderable_via_display!`](crate::renderable_via_display) when they
//! already implement [`fmt::Display`], or with
//! [`opaque_renderable!`](crate::opaque_renderable) when they should only
//! ever show up as a placeholder. The standard library's error types render
//! through their `Display` form, and [`Shown`] / [`Opaque`] adapt types from
//! other crates, which cannot implement the trait themselves.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::error::Error;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// What an opaque value renders as.
pub const PLACEHOLDER: &str = "()";

/// A value that can be rendered to human-readable text.
pub trait Renderable {
    /// `true` when `render` carries no information about the value.
    ///
    /// Extraction panics use this to fall back to a generic message.
    const OPAQUE: bool = false;

    /// Write the rendering of `self` into `f`.
    ///
    /// # Errors
    ///
    /// Propagates any error from the underlying formatter.
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Adapter turning a [`Renderable`] into a [`fmt::Display`].
#[derive(Debug)]
pub struct Rendered<'a, T: ?Sized>(&'a T);

impl<T: Renderable + ?Sized> fmt::Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f)
    }
}

/// Borrow `value` as something `format!` can print.
#[must_use]
pub const fn as_display<T: Renderable + ?Sized>(value: &T) -> Rendered<'_, T> {
    Rendered(value)
}

/// Render `value` into an owned string.
#[must_use]
pub fn render_to_string<T: Renderable + ?Sized>(value: &T) -> String {
    as_display(value).to_string()
}

/// Implement [`Renderable`] for types that already implement [`fmt::Display`].
#[macro_export]
macro_rules! renderable_via_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::display::Renderable for $ty {
                fn render(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    ::core::fmt::Display::fmt(self, f)
                }
            }
        )+
    };
}

/// Implement [`Renderable`] as an opaque placeholder.
#[macro_export]
macro_rules! opaque_renderable {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::display::Renderable for $ty {
                const OPAQUE: bool = true;

                fn render(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    f.write_str($crate::display::PLACEHOLDER)
                }
            }
        )+
    };
}

renderable_via_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

impl Renderable for () {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(PLACEHOLDER)
    }
}

impl Renderable for str {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Renderable for String {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().render(f)
    }
}

macro_rules! forward_renderable {
    ($($wrapper:ident),+) => {
        $(
            impl<T: Renderable + ?Sized> Renderable for $wrapper<T> {
                const OPAQUE: bool = T::OPAQUE;

                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    (**self).render(f)
                }
            }
        )+
    };
}

forward_renderable!(Box, Rc, Arc);

impl<T: Renderable + ?Sized> Renderable for &T {
    const OPAQUE: bool = T::OPAQUE;

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

impl<T: Renderable + ?Sized> Renderable for &mut T {
    const OPAQUE: bool = T::OPAQUE;

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

fn render_seq<'a, T, I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    T: Renderable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    f.write_str("[")?;
    items.into_iter().enumerate().try_for_each(|(index, item)| {
        if index > 0 {
            f.write_str(",")?;
        }
        item.render(f)
    })?;
    f.write_str("]")
}

fn render_map<'a, K, V, I>(f: &mut fmt::Formatter<'_>, entries: I) -> fmt::Result
where
    K: Renderable + 'a,
    V: Renderable + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    f.write_str("{")?;
    entries
        .into_iter()
        .enumerate()
        .try_for_each(|(index, (key, value))| {
            if index > 0 {
                f.write_str(",")?;
            }
            key.render(f)?;
            f.write_str(": ")?;
            value.render(f)
        })?;
    f.write_str("}")
}

impl<T: Renderable> Renderable for [T] {
    const OPAQUE: bool = T::OPAQUE;

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_seq(f, self)
    }
}

impl<T: Renderable, const N: usize> Renderable for [T; N] {
    const OPAQUE: bool = T::OPAQUE;

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_seq(f, self)
    }
}

impl<T: Renderable> Renderable for Vec<T> {
    const OPAQUE: bool = T::OPAQUE;

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_seq(f, self)
    }
}

impl<T: Renderable> Renderable for VecDeque<T> {
    const OPAQUE: bool = T::OPAQUE;

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_seq(f, self)
    }
}

impl<T: Renderable> Renderable for BTreeSet<T> {
    const OPAQUE: bool = T::OPAQUE;

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_seq(f, self)
    }
}

impl<T: Renderable, S> Renderable for HashSet<T, S> {
    const OPAQUE: bool = T::OPAQUE;

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_seq(f, self)
    }
}

impl<K: Renderable, V: Renderable> Renderable for BTreeMap<K, V> {
    const OPAQUE: bool = K::OPAQUE || V::OPAQUE;

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_map(f, self)
    }
}

impl<K: Renderable, V: Renderable, S> Renderable for HashMap<K, V, S> {
    const OPAQUE: bool = K::OPAQUE || V::OPAQUE;

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_map(f, self)
    }
}

macro_rules! tuple_renderable {
    ($(($first:ident . $first_index:tt $(, $name:ident . $index:tt)*))+) => {
        $(
            impl<$first: Renderable $(, $name: Renderable)*> Renderable for ($first, $($name,)*) {
                const OPAQUE: bool = $first::OPAQUE $(|| $name::OPAQUE)*;

                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str("(")?;
                    self.$first_index.render(f)?;
                    $(
                        f.write_str(",")?;
                        self.$index.render(f)?;
                    )*
                    f.write_str(")")
                }
            }
        )+
    };
}

tuple_renderable! {
    (A.0)
    (A.0, B.1)
    (A.0, B.1, C.2)
    (A.0, B.1, C.2, D.3)
}

// =============================================================================
// Standard error types
// =============================================================================

renderable_via_display!(
    std::io::Error,
    fmt::Error,
    std::num::ParseIntError,
    std::num::ParseFloatError,
    std::num::TryFromIntError,
    std::str::ParseBoolError,
    std::char::ParseCharError,
    std::str::Utf8Error,
    std::string::FromUtf8Error,
    std::net::AddrParseError,
    dyn Error,
    dyn Error + Send,
    dyn Error + Send + Sync,
);

// =============================================================================
// Adapters for types defined in other crates
// =============================================================================

/// Renders its payload through [`fmt::Display`].
///
/// Types from other crates cannot implement [`Renderable`] directly, but can
/// be wrapped on the way into a result:
///
/// ```
/// use railway_core::display::Shown;
/// use railway_core::Result;
///
/// let parsed: Result<u8, std::num::ParseIntError> = "x".parse::<u8>().into();
/// let shown = parsed.map_err(Shown);
/// assert!(shown.to_string().starts_with("failure(invalid digit"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Shown<T>(pub T);

impl<T: fmt::Display> Renderable for Shown<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Renders as [`PLACEHOLDER`] whatever it wraps, so extraction panics fall
/// back to the generic message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Opaque<T>(pub T);

impl<T> Renderable for Opaque<T> {
    const OPAQUE: bool = true;

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(PLACEHOLDER)
    }
}

// =============================================================================
// Macro support
// =============================================================================

/// An argument of [`runtime_panic!`](crate::runtime_panic).
///
/// Method resolution on `&&Argument` picks [`RenderArgument`] when the value
/// is [`Renderable`] and falls through to [`RenderPlaceholder`] otherwise.
#[doc(hidden)]
pub struct Argument<'a, T: ?Sized>(pub &'a T);

#[doc(hidden)]
pub trait RenderArgument {
    fn render_argument(&self) -> String;
}

impl<T: Renderable + ?Sized> RenderArgument for &Argument<'_, T> {
    fn render_argument(&self) -> String {
        render_to_string(self.0)
    }
}

#[doc(hidden)]
pub trait RenderPlaceholder {
    fn render_argument(&self) -> String;
}

impl<T: ?Sized> RenderPlaceholder for Argument<'_, T> {
    fn render_argument(&self) -> String {
        PLACEHOLDER.to_owned()
    }
}
