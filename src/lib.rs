//! Contact resolution for 2D rigid bodies.
//!
//! The core is the [`Arbiter`]: a per-pair context that turns narrow-phase
//! contact points into effective masses, warm starts from the previous step's
//! impulses, and applies clamped sequential impulses for non-penetration and
//! box-model friction. [`PhysicsWorld`] is a small driver that runs the
//! arbiter protocol over a body registry.

pub mod collision;
pub mod common;
pub mod error;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{Arbiter, Contact, ContactManifold, ContactPoint, PairKey};
pub use common::{CombinedMaterial, Material};
pub use error::PhysicsError;
pub use math::vec2::Vec2;
pub use objects::{BodyType, RigidBody};
pub use shapes::{Circle, MassData, Polygon, Segment, Shape};
pub use world::{PhysicsWorld, SolverConfig};
