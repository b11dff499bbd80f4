/// Handle of one scheduled animation frame (the id returned by the host).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// What a single `draw_frame` call put on the surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Particles drawn as discs.
    pub discs: usize,
    /// Connections stroked.
    pub links: usize,
    /// Unordered pairs examined by the proximity pass.
    pub pairs_checked: usize,
}
