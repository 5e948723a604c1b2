use std::marker::PhantomData;

use super::Caster;
use crate::error::CastError;

/// A caster backed by a plain function.
///
/// Created by [`cast_fn`].
pub(crate) struct FnCaster<F, V, T> {
    function: F,
    _marker: PhantomData<fn(&V) -> T>,
}

/// Builds a caster from a "construct one output from one element" function.
///
/// # Examples
///
/// ```
/// use recast_core::{CastError, Caster, cast_fn};
///
/// let parse = cast_fn(|s: &String| {
///     s.parse::<i64>()
///         .map_err(|_| CastError::InvalidInput(format!("cannot parse `{s}` as an integer")))
/// });
///
/// assert_eq!(parse.cast(&"42".to_string()).unwrap(), 42);
/// assert!(parse.cast(&"forty-two".to_string()).is_err());
/// ```
pub fn cast_fn<F, V, T>(function: F) -> impl Caster<V, Output = T>
where
    F: Fn(&V) -> Result<T, CastError>,
{
    FnCaster {
        function,
        _marker: PhantomData,
    }
}

impl<F, V, T> Caster<V> for FnCaster<F, V, T>
where
    F: Fn(&V) -> Result<T, CastError>,
{
    type Output = T;

    fn cast(&self, element: &V) -> Result<T, CastError> {
        (self.function)(element)
    }
}
