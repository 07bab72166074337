pub mod material;

pub use material::{CombinedMaterial, Material};
