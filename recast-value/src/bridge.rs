use std::{fmt, marker::PhantomData};

use recast_core::{CastError, Caster};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Casts values into any [`DeserializeOwned`] target.
///
/// The borrowed element drives the target's `Deserialize` impl directly:
/// objects feed struct fields by name, arrays feed them in declaration
/// order, and scalars feed newtypes and primitives. What is accepted is
/// exactly what the target's `Deserialize` impl accepts, so field defaults,
/// renames, and `deny_unknown_fields` all apply. Deserialization failures
/// surface as [`CastError::Constructor`].
///
/// # Examples
///
/// ```
/// use recast_value::{Caster, SerdeCaster};
/// use serde::Deserialize;
/// use serde_json::json;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct Reading {
///     sensor: String,
///     value: f64,
/// }
///
/// let caster = SerdeCaster::<Reading>::new();
///
/// let by_name = caster.cast(&json!({"sensor": "t0", "value": 1.5})).unwrap();
/// let by_position = caster.cast(&json!(["t0", 1.5])).unwrap();
/// assert_eq!(by_name, by_position);
/// ```
pub struct SerdeCaster<T> {
    _target: PhantomData<T>,
}

impl<T> SerdeCaster<T> {
    /// Creates the bridge caster.
    pub const fn new() -> Self {
        Self {
            _target: PhantomData,
        }
    }
}

impl<T: DeserializeOwned> Caster<Value> for SerdeCaster<T> {
    type Output = T;

    fn cast(&self, element: &Value) -> Result<T, CastError> {
        T::deserialize(element).map_err(CastError::constructor)
    }
}

impl<T> Default for SerdeCaster<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SerdeCaster<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SerdeCaster<T> {}

impl<T> fmt::Debug for SerdeCaster<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerdeCaster").finish()
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Reading {
        sensor: String,
        value: f64,
    }

    #[test]
    fn objects_feed_fields_by_name() {
        let caster = SerdeCaster::<Reading>::new();

        let reading = caster.cast(&json!({"value": 1.5, "sensor": "t0"})).unwrap();
        assert_eq!(
            reading,
            Reading {
                sensor: "t0".into(),
                value: 1.5
            }
        );
    }

    #[test]
    fn arrays_feed_fields_in_order() {
        let caster = SerdeCaster::<Reading>::new();

        let reading = caster.cast(&json!(["t0", 1.5])).unwrap();
        assert_eq!(
            reading,
            Reading {
                sensor: "t0".into(),
                value: 1.5
            }
        );
    }

    #[test]
    fn deserialization_failures_become_constructor_errors() {
        let caster = SerdeCaster::<Reading>::new();

        assert!(matches!(
            caster.cast(&json!(42)),
            Err(CastError::Constructor(_))
        ));
        assert!(matches!(
            caster.cast(&json!({"sensor": "t0"})),
            Err(CastError::Constructor(_))
        ));
    }

    #[test]
    fn scalars_feed_primitives() {
        let caster = SerdeCaster::<i64>::new();
        assert_eq!(caster.cast(&json!(42)).unwrap(), 42);
    }
}
