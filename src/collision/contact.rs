use crate::math::vec2::Vec2;

/// Solver state for one point of contact between the two bodies of an arbiter.
///
/// Impulses are scalar magnitudes along the arbiter's normal and tangent.
/// `normal_impulse` accumulates towards negative values only: with the normal
/// pointing from A to B, a negative impulse pushes A back and B forward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub contact_on_a: Vec2,
    pub contact_on_b: Vec2,
    /// From A's center of mass to `contact_on_a`.
    pub arm_a: Vec2,
    /// From B's center of mass to `contact_on_b`.
    pub arm_b: Vec2,
    /// Positive when the bodies overlap.
    pub depth: f64,
    pub normal_mass: f64,
    pub tangent_mass: f64,
    pub normal_impulse: f64,
    pub tangent_impulse: f64,
    /// Restitution target, unresolved until the first solve pass of the frame.
    pub velocity_bias: Option<f64>,
}

impl Contact {
    /// World-space impulse for the given normal/tangent magnitudes.
    pub fn world_impulse(normal: Vec2, tangent: Vec2, normal_part: f64, tangent_part: f64) -> Vec2 {
        normal * normal_part + tangent * tangent_part
    }

    /// The accumulated impulse of this contact in world axes.
    pub fn accumulated_impulse(&self, normal: Vec2, tangent: Vec2) -> Vec2 {
        Self::world_impulse(normal, tangent, self.normal_impulse, self.tangent_impulse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_impulse_matches_component_form() {
        let normal = Vec2::new(0.6, 0.8);
        let tangent = normal.perpendicular();
        let (jn, jt) = (-2.0, 0.5);
        let j = Contact::world_impulse(normal, tangent, jn, jt);
        // x = nx*jn - ny*jt, y = nx*jt + ny*jn
        assert!((j.x - (0.6 * jn - 0.8 * jt)).abs() < 1e-12);
        assert!((j.y - (0.6 * jt + 0.8 * jn)).abs() < 1e-12);
    }
}
