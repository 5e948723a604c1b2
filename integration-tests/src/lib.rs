//! Shared fixture types for the integration tests.

use recast_value::impl_construct;

/// A two-field value type constructible by position or by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl_construct!(Point { x: i64, y: i64 });

/// A labeled point, exercising string fields alongside numeric ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledPoint {
    pub x: i64,
    pub y: i64,
    pub label: String,
}

impl LabeledPoint {
    pub fn new(x: i64, y: i64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: label.into(),
        }
    }
}

impl_construct!(LabeledPoint {
    x: i64,
    y: i64,
    label: String,
});
