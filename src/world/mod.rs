pub mod config;
pub mod physics_world;

pub use config::SolverConfig;
pub use physics_world::PhysicsWorld;
