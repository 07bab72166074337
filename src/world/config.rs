use crate::error::PhysicsError;
use crate::math::vec2::Vec2;

/// Configuration for stepping a [`PhysicsWorld`](super::PhysicsWorld).
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Number of `solve` passes per arbiter per step. Default: 8.
    pub velocity_iterations: usize,
    /// Gravity applied to dynamic bodies. Default: (0, -9.81).
    pub gravity: Vec2,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            velocity_iterations: 8,
            gravity: Vec2::new(0.0, -9.81),
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if self.velocity_iterations == 0 {
            return Err(PhysicsError::InvalidConfig(
                "velocity_iterations must be at least 1".to_string(),
            ));
        }
        if !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidConfig(format!(
                "gravity must be finite, got {:?}",
                self.gravity
            )));
        }
        Ok(())
    }
}
