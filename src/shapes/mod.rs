//! Shape geometry and the mass properties it implies.
//!
//! Shapes never take part in contact resolution directly; they only produce
//! the [`MassData`] that seeds a body's inverse mass and inverse inertia.

pub mod circle;
pub mod polygon;
pub mod segment;

pub use circle::Circle;
pub use polygon::Polygon;
pub use segment::Segment;

use crate::math::vec2::Vec2;

/// Enum representing the geometric shape of a rigid body.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Segment(Segment),
    Polygon(Polygon),
}

/// Mass properties derived from a shape at a given density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassData {
    pub area: f64,
    pub mass: f64,
    /// Moment of inertia about `centroid`.
    pub inertia: f64,
    /// Center of mass in the shape's local coordinates.
    pub centroid: Vec2,
}

impl Shape {
    pub fn mass_data(&self, density: f64) -> MassData {
        match self {
            Shape::Circle(circle) => circle.mass_data(density),
            Shape::Segment(segment) => segment.mass_data(),
            Shape::Polygon(polygon) => polygon.mass_data(density),
        }
    }
}
