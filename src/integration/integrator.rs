//! Semi-implicit Euler, split so contacts can be solved between the two halves.

use crate::math::vec2::Vec2;
use crate::objects::rigid_body::{BodyType, RigidBody};

/// Applies gravity to a dynamic body's velocity (v = v + g*dt).
///
/// Static, kinematic and massless bodies keep their velocity.
pub fn integrate_velocity(body: &mut RigidBody, gravity: Vec2, dt: f64) {
    if !body.is_dynamic() || body.inv_mass == 0.0 {
        return;
    }
    body.linear_velocity += gravity * dt;
}

/// Advances position and rotation from the current (solved) velocity.
pub fn integrate_position(body: &mut RigidBody, dt: f64) {
    if body.body_type == BodyType::Static {
        return;
    }
    body.position += body.linear_velocity * dt;
    body.rotation = wrap_angle(body.rotation + body.angular_velocity * dt);
}

/// Wraps an angle in radians to the range [-PI, PI].
fn wrap_angle(angle: f64) -> f64 {
    angle.sin().atan2(angle.cos())
}
