use std::{fmt, marker::PhantomData};

use recast_core::{CastError, Caster};
use serde_json::Value;

use crate::{
    construct::{Construct, value_kind},
    factory::ArgumentMode,
};

/// A casting strategy bound to a target type and an argument-passing mode.
///
/// The mode is fixed at construction and applied to every element of a pass:
///
/// - [`one_argument`](ValueCaster::one_argument): each element is the sole
///   constructor argument.
/// - [`positional`](ValueCaster::positional): each element must be an array,
///   unpacked into ordered positional arguments.
/// - [`keyword`](ValueCaster::keyword): each element must be an object,
///   unpacked into named arguments.
/// - [`auto`](ValueCaster::auto): reserved for signature-based selection;
///   behaves exactly like `one_argument`.
///
/// A `ValueCaster` is `Copy`, holds no per-pass state, and may be reused for
/// any number of passes.
///
/// # Examples
///
/// ```
/// use recast_value::{Caster, ValueCaster};
/// use serde_json::json;
///
/// let to_int = ValueCaster::<i64>::one_argument();
/// assert_eq!(to_int.cast(&json!("42")).unwrap(), 42);
///
/// let ints: Vec<i64> = to_int
///     .cast_iter_with(vec![json!(1), json!("oops"), json!(3)], |element, index, _| {
///         eprintln!("skipping {element} at index {index}");
///     })
///     .collect();
/// assert_eq!(ints, [1, 3]);
/// ```
pub struct ValueCaster<T> {
    mode: ArgumentMode,
    _target: PhantomData<T>,
}

impl<T> ValueCaster<T> {
    /// Creates a caster using the given argument-passing mode.
    pub const fn with_mode(mode: ArgumentMode) -> Self {
        Self {
            mode,
            _target: PhantomData,
        }
    }

    /// Each element is passed as the sole constructor argument.
    pub const fn one_argument() -> Self {
        Self::with_mode(ArgumentMode::OneArgument)
    }

    /// Each element must be an array, unpacked into positional arguments.
    pub const fn positional() -> Self {
        Self::with_mode(ArgumentMode::Positional)
    }

    /// Each element must be an object, unpacked into named arguments.
    pub const fn keyword() -> Self {
        Self::with_mode(ArgumentMode::Keyword)
    }

    /// Reserved for signature-based mode selection; currently identical to
    /// [`ValueCaster::one_argument`].
    pub const fn auto() -> Self {
        Self::with_mode(ArgumentMode::Auto)
    }

    /// The argument-passing mode this caster applies.
    pub const fn mode(&self) -> ArgumentMode {
        self.mode
    }
}

impl<T: Construct> Caster<Value> for ValueCaster<T> {
    type Output = T;

    fn cast(&self, element: &Value) -> Result<T, CastError> {
        match self.mode {
            // Auto performs no signature inspection and falls back to
            // one-argument construction.
            ArgumentMode::OneArgument | ArgumentMode::Auto => T::from_value(element),
            ArgumentMode::Positional => match element {
                Value::Array(args) => T::from_args(args),
                other => Err(CastError::Mismatch {
                    expected: "an array of constructor arguments",
                    found: value_kind(other),
                }),
            },
            ArgumentMode::Keyword => match element {
                Value::Object(fields) => T::from_kwargs(fields),
                other => Err(CastError::Mismatch {
                    expected: "an object of named arguments",
                    found: value_kind(other),
                }),
            },
        }
    }
}

impl<T> Default for ValueCaster<T> {
    /// Defaults to one-argument construction.
    fn default() -> Self {
        Self::one_argument()
    }
}

impl<T> Clone for ValueCaster<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ValueCaster<T> {}

impl<T> fmt::Debug for ValueCaster<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueCaster").field("mode", &self.mode).finish()
    }
}

#[cfg(test)]
mod tests {
    use recast_core::Convention;
    use serde_json::{Map, json};

    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    struct Pair {
        left: i64,
        right: i64,
    }

    impl Construct for Pair {
        fn from_args(args: &[Value]) -> Result<Self, CastError> {
            match args {
                [left, right] => Ok(Self {
                    left: i64::from_value(left)?,
                    right: i64::from_value(right)?,
                }),
                _ => Err(CastError::Arity {
                    expected: 2,
                    found: args.len(),
                }),
            }
        }

        fn from_kwargs(fields: &Map<String, Value>) -> Result<Self, CastError> {
            for name in fields.keys() {
                if name != "left" && name != "right" {
                    return Err(CastError::UnexpectedArgument(name.clone()));
                }
            }
            let field = |name: &str| {
                fields
                    .get(name)
                    .ok_or_else(|| CastError::MissingArgument(name.to_string()))
            };
            Ok(Self {
                left: i64::from_value(field("left")?)?,
                right: i64::from_value(field("right")?)?,
            })
        }
    }

    #[test]
    fn one_argument_mode_passes_the_whole_element() {
        let to_int = ValueCaster::<i64>::one_argument();
        assert_eq!(to_int.cast(&json!("7")).unwrap(), 7);
    }

    #[test]
    fn positional_mode_unpacks_arrays() {
        let to_pair = ValueCaster::<Pair>::positional();

        assert_eq!(
            to_pair.cast(&json!([10, 12])).unwrap(),
            Pair { left: 10, right: 12 }
        );
        assert!(matches!(
            to_pair.cast(&json!([10])),
            Err(CastError::Arity { expected: 2, found: 1 })
        ));
        assert!(matches!(
            to_pair.cast(&json!(10)),
            Err(CastError::Mismatch { .. })
        ));
    }

    #[test]
    fn keyword_mode_unpacks_objects() {
        let to_pair = ValueCaster::<Pair>::keyword();

        assert_eq!(
            to_pair.cast(&json!({"right": 3, "left": -1})).unwrap(),
            Pair { left: -1, right: 3 }
        );
        assert!(matches!(
            to_pair.cast(&json!({"left": 1})),
            Err(CastError::MissingArgument(_))
        ));
        assert!(matches!(
            to_pair.cast(&json!({"left": 1, "right": 2, "up": 3})),
            Err(CastError::UnexpectedArgument(_))
        ));
        assert!(matches!(
            to_pair.cast(&json!([1, 2])),
            Err(CastError::Mismatch { .. })
        ));
    }

    #[test]
    fn unsupported_conventions_fail_at_cast_time() {
        let to_int = ValueCaster::<i64>::keyword();

        assert!(matches!(
            to_int.cast(&json!({})),
            Err(CastError::Unsupported(Convention::Keyword))
        ));
    }

    #[test]
    fn auto_behaves_like_one_argument() {
        let auto = ValueCaster::<i64>::auto();
        let one = ValueCaster::<i64>::one_argument();

        for value in [json!(7), json!("7"), json!(7.9), json!(true)] {
            assert_eq!(auto.cast(&value).unwrap(), one.cast(&value).unwrap());
        }
        assert!(auto.cast(&json!([7])).is_err());
    }

    #[test]
    fn default_mode_is_one_argument() {
        assert_eq!(ValueCaster::<i64>::default().mode(), ArgumentMode::OneArgument);
    }
}
