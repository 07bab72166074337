//! Surface properties of a body and how two of them combine at a contact.

/// Represents the physical properties of a rigid body affecting collisions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Coefficient of restitution (bounciness). Range [0, 1].
    /// 0 = perfectly inelastic (no bounce), 1 = perfectly elastic.
    pub restitution: f64,
    /// Friction coefficient. Range [0, infinity).
    pub friction: f64,
    /// Sensors report overlap but take no part in impulse resolution.
    pub sensor: bool,
}

impl Material {
    /// Creates a new non-sensor material with the given restitution and friction.
    pub fn new(restitution: f64, friction: f64) -> Self {
        Material {
            restitution: restitution.clamp(0.0, 1.0),
            friction: friction.max(0.0),
            sensor: false,
        }
    }

    pub fn sensor() -> Self {
        Material {
            sensor: true,
            ..Material::default()
        }
    }

    /// Combines the materials of a touching pair.
    ///
    /// The bouncier surface wins, friction is the geometric mean, and the
    /// pair is a sensor if either side is.
    pub fn combine(a: &Material, b: &Material) -> CombinedMaterial {
        CombinedMaterial {
            restitution: a.restitution.max(b.restitution),
            friction: (a.friction * b.friction).sqrt(),
            sensor: a.sensor || b.sensor,
        }
    }
}

impl Default for Material {
    /// Default material properties (moderate restitution, moderate friction).
    fn default() -> Self {
        Material {
            restitution: 0.2,
            friction: 0.5,
            sensor: false,
        }
    }
}

/// Material coefficients of a body pair, fixed when the pair's arbiter is created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombinedMaterial {
    pub restitution: f64,
    pub friction: f64,
    pub sensor: bool,
}
