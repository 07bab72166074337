pub mod arbiter;
pub mod contact;
pub mod manifold;

// Re-export key types
pub use arbiter::{Arbiter, PairKey};
pub use contact::Contact;
pub use manifold::{ContactManifold, ContactPoint};
