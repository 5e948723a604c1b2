use super::Caster;
use crate::error::CastError;

/// A wrapper that transforms each constructed output.
///
/// This struct is used internally by `.map()`.
pub(crate) struct Map<C, F> {
    pub(crate) caster: C,
    pub(crate) map: F,
}

impl<V, C, F, U> Caster<V> for Map<C, F>
where
    C: Caster<V>,
    F: Fn(C::Output) -> U,
{
    type Output = U;

    fn cast(&self, element: &V) -> Result<U, CastError> {
        self.caster.cast(element).map(&self.map)
    }
}
