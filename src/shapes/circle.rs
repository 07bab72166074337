use std::f64::consts::PI;

use super::MassData;
use crate::math::vec2::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        assert!(radius >= 0.0, "Circle radius cannot be negative");
        Self { radius }
    }

    pub fn mass_data(&self, density: f64) -> MassData {
        let area = PI * self.radius * self.radius;
        let mass = area * density.max(0.0);
        MassData {
            area,
            mass,
            inertia: 0.5 * mass * self.radius * self.radius,
            centroid: Vec2::ZERO,
        }
    }
}
