pub mod color;
pub mod frame;
pub mod traits;

// Re-export key types for convenient access
pub use color::Color;
pub use frame::FieldRenderer;
pub use traits::{FrameScheduler, Surface};
