//! Host primitives the session draws and schedules through.
//!
//! The core never talks to a browser or a GPU directly. A host hands the
//! session one `Surface` and one `FrameScheduler`; the web bridge implements
//! them over Canvas2D and `requestAnimationFrame`, the `vectors` feature
//! provides a tessellating surface for GPU backends.

use glam::Vec2;

use super::color::Color;
use crate::api::types::FrameHandle;

/// A 2D raster target sized to the viewport.
pub trait Surface {
    /// Backend identifier (e.g., "canvas2d", "lyon").
    fn backend(&self) -> &'static str;

    /// Current size in pixels.
    fn size(&self) -> (f32, f32);

    /// Match the viewport. Called at session start and on every resize.
    fn resize(&mut self, width: f32, height: f32);

    /// Erase the whole surface.
    fn clear(&mut self);

    /// Fill a disc.
    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Color);

    /// Stroke a straight segment.
    fn stroke_segment(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);
}

/// Recurring animation-frame primitive.
///
/// Each call arranges exactly one future tick. A session that wants to keep
/// animating calls `request_frame` again from inside that tick.
pub trait FrameScheduler {
    /// Arrange the next tick. `None` means the host refused, and the loop ends.
    fn request_frame(&mut self) -> Option<FrameHandle>;

    /// Cancel a pending tick. Unknown or already-fired handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}
