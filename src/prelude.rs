//! Prelude module - common imports for railway
//!
//! Import this module to get all common types and traits:
//! ```rust
//! use railway::prelude::*;
//! ```
//!
//! Note that this shadows `std`'s `Result` with the immutable railway result.

// Sum types and their aliases
pub use railway_core::{BasicResult, Maybe, MutResult, Result};

// Leaf wrappers and factories
pub use railway_core::{failure, just, success, Failure, Just, Nothing, Success, NOTHING};

// Mutability markers
pub use railway_core::mutability::{Immutable, Mutability, Mutable};

// Rendering
pub use railway_core::display::{Opaque, Renderable, Shown};

// Conversions from std
pub use railway_core::ext::{LoggedExt, OptionExt, ResultExt};

// Macros
pub use railway_core::{opaque_renderable, propagate, renderable_via_display, runtime_panic};
