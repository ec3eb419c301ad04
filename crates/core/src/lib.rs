//! # Railway Core
//!
//! Two closed sum types and the combinator algebra around them:
//!
//! - [`BasicResult`]: exactly one of a success or a failure, tagged with a
//!   type-level [`Mutability`](mutability::Mutability). [`Result`] is the
//!   immutable form, [`MutResult`] the reassignable one.
//! - [`Maybe`]: exactly one of a value or nothing.
//!
//! Values usually start life as one of the leaf wrappers ([`success`],
//! [`failure`], [`just`], [`NOTHING`]) and convert into the composites.
//!
//! ## Laws
//!
//! - Combinators never panic. Only extraction on the wrong arm does, and it
//!   always goes through [`panic::raise`].
//! - A success orders above any failure, a just above nothing.
//! - Results cannot be default-constructed; immutable results cannot be
//!   reassigned or mutably borrowed. Both are compile errors.
//!
//! ## Error Handling
//!
//! The failure arm is the recoverable channel. Use:
//! - [`propagate!`] or `into_std()?` for early return
//! - `map`, `and_then`, `or_else` for transformation
//! - `unwrap_or`, `unwrap_or_else`, `unwrap_or_default` for defaults
//!
//! [`Error`] only covers loading a [`PanicConfig`](config::PanicConfig).

mod cmp;
pub mod config;
pub mod display;
mod error;
pub mod ext;
mod failure;
mod just;
mod maybe;
pub mod mutability;
pub mod panic;
mod result;
mod success;

pub use error::{ConfigResult, Error};
pub use failure::{failure, Failure};
pub use just::{just, Just, Nothing, NOTHING};
pub use maybe::{Maybe, PointerLike};
pub use mutability::{Immutable, Mutable};
pub use panic::RuntimePanic;
pub use result::BasicResult;
pub use success::{success, Success};

/// An immutable result.
pub type Result<T = (), E = ()> = BasicResult<T, E, Immutable>;

/// A result that can be reassigned in place.
pub type MutResult<T = (), E = ()> = BasicResult<T, E, Mutable>;
