use super::MassData;
use crate::math::vec2::Vec2;

/// A two-point edge, typically used for static walls and floors.
///
/// Segments have no area and therefore no mass. An explicit inertia can be
/// supplied for segments that should still resist rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
    pub inertia: Option<f64>,
}

impl Segment {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b, inertia: None }
    }

    pub fn with_inertia(mut self, inertia: f64) -> Self {
        self.inertia = Some(inertia);
        self
    }

    pub fn length(&self) -> f64 {
        (self.b - self.a).magnitude()
    }

    pub fn midpoint(&self) -> Vec2 {
        (self.a + self.b) / 2.0
    }

    pub fn mass_data(&self) -> MassData {
        MassData {
            area: 0.0,
            mass: 0.0,
            inertia: self.inertia.unwrap_or(0.0),
            centroid: self.midpoint(),
        }
    }
}
