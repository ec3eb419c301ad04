#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # Railway
//!
//! Success/failure and just/nothing sum types with a complete combinator
//! algebra.
//!
//! This library re-exports the railway workspace crates for convenience.
//! Most code only needs the prelude:
//!
//! ```
//! use railway::prelude::*;
//!
//! let doubled: Result<i32, &str> = success(5).into();
//! assert_eq!(doubled.map(|x| x * 2), success(10));
//! ```

// Re-export all crates
pub use railway_core::*;

pub mod prelude;
