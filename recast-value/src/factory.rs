use crate::strategy::ValueCaster;

/// How each raw element's data is mapped onto the target's constructor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ArgumentMode {
    /// Reserved for constructor-signature inspection; behaves exactly like
    /// [`ArgumentMode::OneArgument`].
    Auto,
    /// Pass each element as the sole constructor argument.
    #[default]
    OneArgument,
    /// Unpack each element (an array) into positional constructor arguments.
    Positional,
    /// Unpack each element (an object) into named constructor arguments.
    Keyword,
}

/// Produces [`ValueCaster`]s bound to a configured argument-passing mode.
///
/// A factory is the indirection for code that decides the mode in one place
/// and binds target types in another; callers that fix the mode at the use
/// site can construct a [`ValueCaster`] directly instead.
///
/// # Examples
///
/// ```
/// use recast_value::{ArgumentMode, CastFactory, Caster, impl_construct};
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
/// let keyword = CastFactory::new(ArgumentMode::Keyword);
/// let to_point = keyword.of::<Point>();
///
/// let point = to_point.cast(&json!({"y": 12, "x": 10})).unwrap();
/// assert_eq!(point, Point { x: 10, y: 12 });
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CastFactory {
    mode: ArgumentMode,
}

impl CastFactory {
    /// Creates a factory that binds target types using `mode`.
    pub const fn new(mode: ArgumentMode) -> Self {
        Self { mode }
    }

    /// The mode this factory configures casters with.
    pub const fn mode(&self) -> ArgumentMode {
        self.mode
    }

    /// Binds a target type, producing a ready-to-call caster.
    pub const fn of<T>(&self) -> ValueCaster<T> {
        ValueCaster::with_mode(self.mode)
    }
}
