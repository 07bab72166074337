//! Error type shared by the arbiter and the driver.

use thiserror::Error;

use crate::collision::PairKey;

/// Errors raised at the boundary between the solver and the body registry.
///
/// The numerical core never fails: degenerate masses resolve to no-op
/// constraints instead. These variants cover lookups and driver input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    #[error("body index {index} out of bounds for {len} bodies")]
    BodyOutOfBounds { index: usize, len: usize },

    #[error("body {0} cannot be paired with itself")]
    SelfContact(usize),

    #[error("manifold for pair {manifold} loaded into arbiter {arbiter}")]
    PairMismatch { arbiter: PairKey, manifold: PairKey },

    #[error("invalid solver config: {0}")]
    InvalidConfig(String),

    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),
}
