use crate::math::vec2::Vec2;

/// One point of a narrow-phase manifold.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContactPoint {
    /// Contact point on body A in world coordinates.
    pub point_a: Vec2,
    /// Contact point on body B in world coordinates.
    pub point_b: Vec2,
    /// Penetration along the normal, if the detector already knows it.
    pub depth: Option<f64>,
}

impl ContactPoint {
    pub fn new(point_a: Vec2, point_b: Vec2) -> Self {
        Self {
            point_a,
            point_b,
            depth: None,
        }
    }

    pub fn with_depth(mut self, depth: f64) -> Self {
        self.depth = Some(depth);
        self
    }

    /// The same point seen from the other body.
    pub fn swapped(self) -> Self {
        Self {
            point_a: self.point_b,
            point_b: self.point_a,
            depth: self.depth,
        }
    }
}

/// Everything the narrow phase reports for one touching pair in one step.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactManifold {
    /// Index of the first body involved in the collision.
    pub body_a: usize,
    /// Index of the second body involved in the collision.
    pub body_b: usize,
    /// Unit normal pointing from body A towards body B.
    pub normal: Vec2,
    /// One or two points in 2D.
    pub points: Vec<ContactPoint>,
}

impl ContactManifold {
    pub fn new(body_a: usize, body_b: usize, normal: Vec2) -> Self {
        Self {
            body_a,
            body_b,
            normal,
            points: Vec::with_capacity(2),
        }
    }

    pub fn with_point(mut self, point: ContactPoint) -> Self {
        self.points.push(point);
        self
    }

    /// The same manifold with A and B exchanged and the normal reversed.
    pub fn reversed(&self) -> Self {
        Self {
            body_a: self.body_b,
            body_b: self.body_a,
            normal: -self.normal,
            points: self.points.iter().map(|p| p.swapped()).collect(),
        }
    }
}
