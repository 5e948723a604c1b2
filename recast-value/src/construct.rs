use recast_core::{CastError, Convention};
use serde_json::{Map, Value};

/// Describes what a value is, for error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// The constructor surface of a castable target type.
///
/// One method per calling convention. Each defaults to rejecting the
/// convention with [`CastError::Unsupported`], so a target implements only
/// the conventions it supports; attempting an unsupported one is an ordinary
/// casting failure at cast time, not a compile-time obligation.
///
/// Implementations ship for the common scalars (`i64`, `u64`, `f64`, `bool`,
/// `String`) plus `Option<T>` and `Vec<T>`, all supporting one-argument
/// construction with lenient coercions. Named-field structs can use
/// [`impl_construct!`](crate::impl_construct), and types that already derive
/// [`serde::Deserialize`] can skip `Construct` entirely via
/// [`SerdeCaster`](crate::SerdeCaster).
///
/// # Examples
///
/// ```
/// use recast_value::{CastError, Construct, Value};
///
/// struct Celsius(f64);
///
/// impl Construct for Celsius {
///     fn from_value(value: &Value) -> Result<Self, CastError> {
///         f64::from_value(value).map(Celsius)
///     }
/// }
///
/// let degrees = Celsius::from_value(&Value::from(21.5)).unwrap();
/// assert_eq!(degrees.0, 21.5);
/// ```
pub trait Construct: Sized {
    /// Builds the target from a whole value (one-argument construction).
    ///
    /// # Errors
    ///
    /// Rejects the one-argument convention unless overridden.
    fn from_value(value: &Value) -> Result<Self, CastError> {
        let _ = value;
        Err(CastError::Unsupported(Convention::OneArgument))
    }

    /// Builds the target from ordered positional arguments.
    ///
    /// # Errors
    ///
    /// Rejects the positional convention unless overridden. Implementations
    /// report the wrong number of arguments as [`CastError::Arity`].
    fn from_args(args: &[Value]) -> Result<Self, CastError> {
        let _ = args;
        Err(CastError::Unsupported(Convention::Positional))
    }

    /// Builds the target from named arguments.
    ///
    /// The result must not depend on the order of names in `fields`.
    ///
    /// # Errors
    ///
    /// Rejects the keyword convention unless overridden. Implementations
    /// report absent names as [`CastError::MissingArgument`] and names the
    /// target does not accept as [`CastError::UnexpectedArgument`].
    fn from_kwargs(fields: &Map<String, Value>) -> Result<Self, CastError> {
        let _ = fields;
        Err(CastError::Unsupported(Convention::Keyword))
    }
}
