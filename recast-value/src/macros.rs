/// Implements [`Construct`](crate::Construct) for a named-field struct.
///
/// Positional construction consumes arguments in field declaration order
/// with an exact arity check; keyword construction matches arguments by
/// field name, rejecting names the struct does not have and reporting
/// absent ones. Every field is required: an absent name is a
/// [`MissingArgument`](crate::CastError::MissingArgument) even for `Option`
/// fields, which map `null` to `None` instead. Field values are built with
/// the field type's own [`Construct::from_value`](crate::Construct::from_value).
///
/// # Examples
///
/// ```
/// use recast_value::{Construct, impl_construct};
/// use serde_json::json;
///
/// #[derive(Debug, PartialEq)]
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// impl_construct!(Point { x: i64, y: i64 });
///
/// let by_position = Point::from_args(&[json!(10), json!(12)]).unwrap();
/// let by_name = Point::from_kwargs(json!({"y": 12, "x": 10}).as_object().unwrap()).unwrap();
/// assert_eq!(by_position, Point { x: 10, y: 12 });
/// assert_eq!(by_name, by_position);
/// ```
#[macro_export]
macro_rules! impl_construct {
    ($target:ty { $($field:ident: $field_ty:ty),+ $(,)? }) => {
        impl $crate::Construct for $target {
            fn from_args(
                args: &[$crate::Value],
            ) -> ::core::result::Result<Self, $crate::CastError> {
                let expected = [$(stringify!($field)),+].len();
                if args.len() != expected {
                    return Err($crate::CastError::Arity {
                        expected,
                        found: args.len(),
                    });
                }
                let mut args = args.iter();
                Ok(Self {
                    $($field: match args.next() {
                        Some(value) => <$field_ty as $crate::Construct>::from_value(value)?,
                        // The arity check above guarantees one argument per field.
                        None => unreachable!(),
                    },)+
                })
            }

            fn from_kwargs(
                fields: &$crate::Map<::std::string::String, $crate::Value>,
            ) -> ::core::result::Result<Self, $crate::CastError> {
                for name in fields.keys() {
                    if ![$(stringify!($field)),+].contains(&name.as_str()) {
                        return Err($crate::CastError::UnexpectedArgument(name.clone()));
                    }
                }
                Ok(Self {
                    $($field: match fields.get(stringify!($field)) {
                        Some(value) => <$field_ty as $crate::Construct>::from_value(value)?,
                        None => {
                            return Err($crate::CastError::MissingArgument(
                                stringify!($field).to_string(),
                            ));
                        }
                    },)+
                })
            }
        }
    };
}
