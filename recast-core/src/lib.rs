//! Lazy, fallible element-by-element casting over ordinary iterators.
//!
//! `recast-core` provides the [`Caster`] seam (build one output value from
//! one raw element) and two iterator adapters that drive a caster over an
//! input sequence:
//!
//! - [`Caster::cast_iter`] yields a `Result` per element and terminates the
//!   pass at the first failure.
//! - [`Caster::cast_iter_with`] reports each failure to a handler and skips
//!   the failed element.
//!
//! The crate is generic over the raw element type. See the `recast-value`
//! crate for a ready-made dynamic-value front end with one-argument,
//! positional, and keyword calling conventions.

mod caster;
mod error;
mod iter;

pub use caster::{Caster, cast_fn};
pub use error::{CastError, CastFailure, Convention};
pub use iter::{CastIter, CastIterWith};
