mod closure;
mod map;

pub use closure::cast_fn;

use crate::{
    error::CastError,
    iter::{CastIter, CastIterWith},
};

/// The casting strategy: builds one output value from one raw element.
///
/// A `Caster` holds whatever the conversion needs (typically just the target
/// type binding) and owns no iteration state, so one caster can drive any
/// number of passes. References to casters are casters themselves, which
/// makes reuse explicit at the call site.
///
/// ## Implementing `Caster`
///
/// Implement [`cast()`](Caster::cast), which borrows one raw element and
/// either constructs an output or explains the rejection with a
/// [`CastError`]. For one-off strategies, [`cast_fn`] wraps a plain function.
///
/// ## Driving a caster over a sequence
///
/// - [`Caster::cast_iter`] produces a `Result` per element and terminates the
///   pass at the first failure.
/// - [`Caster::cast_iter_with`] reports failures to a handler and skips the
///   failed elements.
///
/// # Examples
///
/// ```
/// use recast_core::{CastError, Caster};
///
/// struct NonEmpty;
///
/// impl Caster<String> for NonEmpty {
///     type Output = String;
///
///     fn cast(&self, element: &String) -> Result<String, CastError> {
///         if element.is_empty() {
///             Err(CastError::InvalidInput("empty element".into()))
///         } else {
///             Ok(element.clone())
///         }
///     }
/// }
///
/// let input = vec![String::from("a"), String::new(), String::from("b")];
/// let kept: Vec<String> = NonEmpty.cast_iter_with(input, |_, _, _| {}).collect();
/// assert_eq!(kept, ["a", "b"]);
/// ```
pub trait Caster<V> {
    /// The type produced for each successfully cast element.
    type Output;

    /// Attempts to build one output value from one raw element.
    ///
    /// # Errors
    ///
    /// Returns a [`CastError`] describing why the element was rejected:
    /// wrong shape, argument mismatches, or a failure raised by the target
    /// constructor itself.
    fn cast(&self, element: &V) -> Result<Self::Output, CastError>;

    /// Transforms every constructed output with `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// use recast_core::{CastError, Caster, cast_fn};
    ///
    /// let parse = cast_fn(|s: &String| {
    ///     s.parse::<i64>()
    ///         .map_err(|_| CastError::InvalidInput(format!("cannot parse `{s}`")))
    /// });
    ///
    /// let doubled = parse.map(|n| n * 2);
    /// assert_eq!(doubled.cast(&"21".to_string()).unwrap(), 42);
    /// ```
    fn map<F, U>(self, f: F) -> impl Caster<V, Output = U>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U,
    {
        map::Map { caster: self, map: f }
    }

    /// Lazily casts every element of `elements`, terminating at the first
    /// failure.
    ///
    /// The returned iterator yields one `Ok` per successfully cast element,
    /// in input order. The first failure is yielded as an `Err` carrying the
    /// raw element, its zero-based index, and the reason; no further elements
    /// are produced after it.
    fn cast_iter<I>(self, elements: I) -> CastIter<I::IntoIter, Self>
    where
        Self: Sized,
        I: IntoIterator<Item = V>,
    {
        CastIter::new(elements.into_iter(), self)
    }

    /// Lazily casts every element of `elements`, reporting failures to
    /// `on_error` and skipping the failed elements.
    ///
    /// The handler is invoked synchronously with the raw element (by value),
    /// its zero-based index in the input, and the reason; iteration then
    /// resumes with the next element. A panic inside the handler unwinds to
    /// the consumer and is not suppressed.
    fn cast_iter_with<I, F>(self, elements: I, on_error: F) -> CastIterWith<I::IntoIter, Self, F>
    where
        Self: Sized,
        I: IntoIterator<Item = V>,
        F: FnMut(V, usize, CastError),
    {
        CastIterWith::new(elements.into_iter(), self, on_error)
    }
}

impl<V, C> Caster<V> for &C
where
    C: Caster<V> + ?Sized,
{
    type Output = C::Output;

    fn cast(&self, element: &V) -> Result<Self::Output, CastError> {
        (**self).cast(element)
    }
}
