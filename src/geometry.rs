//! Fundamental geometric types for frame modelling.

use nalgebra::Vector2;
use serde::Serialize;

/// Position in the frame plane.
///
/// `x` is the horizontal offset from the nominal centerline and `y` the elevation
/// above the ground reference. Units follow whatever the supplied
/// [`FrameParameters`](crate::FrameParameters) use.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    /// Horizontal offset from the centerline.
    pub x: f64,
    /// Elevation above the ground reference.
    pub y: f64,
}

impl Point {
    /// Create a [`Point`] with explicit coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert the point into an algebraic vector.
    #[must_use]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Mirror the point about the vertical centerline.
    #[must_use]
    pub fn mirrored(self) -> Self {
        Self::new(-self.x, self.y)
    }

    /// Distance to another point.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (other.to_vector() - self.to_vector()).norm()
    }

    /// Whether both coordinates agree with `other` within `tolerance`.
    #[must_use]
    pub fn approx_eq(self, other: Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }
}

impl From<Vector2<f64>> for Point {
    fn from(value: Vector2<f64>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<Point> for Vector2<f64> {
    fn from(value: Point) -> Self {
        value.to_vector()
    }
}

/// Convenience helper for creating [`Point`] instances.
///
/// # Examples
/// ```
/// use gantryx::point;
///
/// let base = point(-3.0, -0.5);
/// assert_eq!(base.y, -0.5);
/// ```
#[must_use]
pub const fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}
