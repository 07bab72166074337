use crate::common::Material;
use crate::math::vec2::Vec2;
use crate::shapes::Shape;

/// How a body takes part in the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyType {
    /// Never moves; infinite mass and inertia.
    Static,
    /// Fully simulated.
    #[default]
    Dynamic,
    /// Moved by the application through its velocity; infinite mass to contacts.
    Kinematic,
}

/// Reciprocal that maps zero (and NaN) to zero instead of infinity.
pub(crate) fn inverse_or_zero(value: f64) -> f64 {
    if value == 0.0 || value.is_nan() {
        0.0
    } else {
        1.0 / value
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    pub body_type: BodyType,
    pub material: Material,

    /// World position of the center of mass.
    pub position: Vec2,
    pub rotation: f64,
    pub linear_velocity: Vec2,
    /// Radians per second, counter-clockwise positive.
    pub angular_velocity: f64,

    pub mass: f64,
    /// 1.0 / mass (0.0 for static and kinematic bodies).
    pub inv_mass: f64,
    pub inertia: f64,
    /// 1.0 / inertia (0.0 for static and kinematic bodies, or when rotation is locked).
    pub inv_inertia: f64,
}

impl RigidBody {
    /// Creates a dynamic body with explicit mass and moment of inertia.
    ///
    /// A non-positive mass or inertia gives a zero inverse, so the body
    /// behaves as infinitely heavy along that degree of freedom.
    pub fn new_dynamic(mass: f64, inertia: f64) -> Self {
        let mass = mass.max(0.0);
        let inertia = inertia.max(0.0);
        Self {
            body_type: BodyType::Dynamic,
            material: Material::default(),
            position: Vec2::ZERO,
            rotation: 0.0,
            linear_velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            mass,
            inv_mass: inverse_or_zero(mass),
            inertia,
            inv_inertia: inverse_or_zero(inertia),
        }
    }

    /// Creates a static body at `position`.
    pub fn new_static(position: Vec2) -> Self {
        Self {
            body_type: BodyType::Static,
            position,
            ..Self::immovable()
        }
    }

    /// Creates a kinematic body at `position` moving with `velocity`.
    pub fn new_kinematic(position: Vec2, velocity: Vec2) -> Self {
        Self {
            body_type: BodyType::Kinematic,
            position,
            linear_velocity: velocity,
            ..Self::immovable()
        }
    }

    fn immovable() -> Self {
        Self {
            body_type: BodyType::Static,
            material: Material::default(),
            position: Vec2::ZERO,
            rotation: 0.0,
            linear_velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            mass: 0.0,
            inv_mass: 0.0,
            inertia: 0.0,
            inv_inertia: 0.0,
        }
    }

    /// Creates a body whose mass properties come from `shape` at `density`.
    ///
    /// `origin` is the world location of the shape's local origin; the body's
    /// `position` is placed on the shape's centroid. Static and kinematic
    /// bodies keep zero inverse mass regardless of the shape.
    pub fn from_shape(shape: &Shape, density: f64, body_type: BodyType, origin: Vec2) -> Self {
        let data = shape.mass_data(density);
        let position = origin + data.centroid;
        match body_type {
            BodyType::Dynamic => Self {
                position,
                ..Self::new_dynamic(data.mass, data.inertia)
            },
            BodyType::Static => Self::new_static(position),
            BodyType::Kinematic => Self::new_kinematic(position, Vec2::ZERO),
        }
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_velocity(mut self, linear: Vec2, angular: f64) -> Self {
        self.linear_velocity = linear;
        self.angular_velocity = angular;
        self
    }

    pub fn is_dynamic(&self) -> bool {
        self.body_type == BodyType::Dynamic
    }

    /// Velocity of the material point at `arm` from the center of mass.
    pub fn velocity_at(&self, arm: Vec2) -> Vec2 {
        self.linear_velocity + Vec2::scalar_cross(self.angular_velocity, arm)
    }

    /// Applies an impulse at `arm` from the center of mass, changing velocity only.
    pub fn apply_impulse(&mut self, impulse: Vec2, arm: Vec2) {
        self.linear_velocity += impulse * self.inv_mass;
        self.angular_velocity += arm.cross(impulse) * self.inv_inertia;
    }

    /// Linear momentum, used to check conservation.
    pub fn momentum(&self) -> Vec2 {
        self.linear_velocity * self.mass
    }
}
