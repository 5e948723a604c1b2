//! Dynamic-value casting: a [`serde_json::Value`] front end for the lazy
//! casting machinery in `recast-core`.
//!
//! [`Construct`] is the constructor surface a target type exposes, with one
//! method per calling convention, and [`ValueCaster`] is the strategy that
//! applies the convention selected by an [`ArgumentMode`] to every element of
//! a pass. [`CastFactory`] binds target types to a configured mode,
//! [`SerdeCaster`] bridges targets that already derive
//! [`serde::Deserialize`], and [`impl_construct!`] writes the `Construct`
//! boilerplate for named-field structs.
//!
//! # Examples
//!
//! ```
//! use recast_value::{Caster, ValueCaster};
//! use serde_json::json;
//!
//! let to_int = ValueCaster::<i64>::one_argument();
//! let values = vec![json!("122"), json!("231"), json!("0"), json!("2"), json!(2.3)];
//!
//! let cast: Vec<i64> = to_int.cast_iter(values).collect::<Result<_, _>>().unwrap();
//! assert_eq!(cast, [122, 231, 0, 2, 2]);
//! ```

mod bridge;
mod construct;
mod factory;
mod macros;
mod primitives;
mod strategy;

pub use bridge::SerdeCaster;
pub use construct::Construct;
pub use factory::{ArgumentMode, CastFactory};
pub use strategy::ValueCaster;

pub use recast_core::{CastError, CastFailure, CastIter, CastIterWith, Caster, Convention, cast_fn};
pub use serde_json::{Map, Value};
