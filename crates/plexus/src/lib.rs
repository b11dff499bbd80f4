pub mod api;
pub mod core;
pub mod systems;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use api::config::FieldConfig;
pub use api::session::{Session, SessionState};
pub use api::types::{FrameHandle, FrameStats};
pub use core::field::{population_for, ParticleField};
pub use core::particle::Particle;
pub use core::rng::Rng;
pub use renderer::color::Color;
pub use renderer::frame::FieldRenderer;
pub use renderer::traits::{FrameScheduler, Surface};
pub use systems::links::{for_each_link, link_opacity, Link};

#[cfg(feature = "vectors")]
pub use systems::vector::{VectorSurface, VectorVertex};
