use crate::api::config::FieldConfig;
use crate::api::types::{FrameHandle, FrameStats};
use crate::core::field::ParticleField;
use crate::renderer::frame::FieldRenderer;
use crate::renderer::traits::{FrameScheduler, Surface};

/// Lifecycle of one animated background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Constructed, nothing drawn or scheduled yet.
    Uninitialized,
    /// Ticking once per host frame.
    Running,
    /// Rebuilding the population for a new viewport. Only observable from
    /// inside `on_resize`.
    Resizing,
    /// Torn down. Terminal.
    Stopped,
}

/// One particle background bound to one surface.
///
/// Owns the field, the renderer, the surface and the scheduler, so several
/// backgrounds on the same page never share state. The host drives it:
/// `start` once, `on_resize` on viewport changes, `tick` from every scheduled
/// frame, `stop` on teardown.
pub struct Session<S: Surface, F: FrameScheduler> {
    field: ParticleField,
    renderer: FieldRenderer,
    surface: S,
    scheduler: F,
    state: SessionState,
    pending: Option<FrameHandle>,
    frames: u64,
    last_stats: FrameStats,
}

impl<S: Surface, F: FrameScheduler> Session<S, F> {
    pub fn new(config: FieldConfig, seed: u64, surface: S, scheduler: F) -> Self {
        let renderer = FieldRenderer::new(&config);
        Self {
            field: ParticleField::new(config, seed),
            renderer,
            surface,
            scheduler,
            state: SessionState::Uninitialized,
            pending: None,
            frames: 0,
            last_stats: FrameStats::default(),
        }
    }

    /// Populate the field, draw the first frame and schedule the next tick.
    pub fn start(&mut self, width: f32, height: f32) {
        if self.state != SessionState::Uninitialized {
            log::warn!("particle session: start ignored in state {:?}", self.state);
            return;
        }

        self.surface.resize(width, height);
        self.field.initialize(width, height);
        self.state = SessionState::Running;
        log::info!(
            "particle session: started {}x{} with {} particles on {}",
            width,
            height,
            self.field.len(),
            self.surface.backend()
        );

        self.draw();
        self.schedule();
    }

    /// Rebuild the population for a new viewport. The pending tick is kept.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        if self.state != SessionState::Running {
            log::debug!("particle session: resize ignored in state {:?}", self.state);
            return;
        }

        self.state = SessionState::Resizing;
        self.surface.resize(width, height);
        self.field.initialize(width, height);
        self.state = SessionState::Running;
        log::info!(
            "particle session: resized to {}x{}, {} particles",
            width,
            height,
            self.field.len()
        );
    }

    /// One frame: advance, draw, reschedule. Does nothing unless running.
    pub fn tick(&mut self) {
        // The handle that fired is no longer pending.
        self.pending = None;
        if self.state != SessionState::Running {
            return;
        }

        self.field.advance();
        self.draw();
        self.schedule();
    }

    /// Cancel the pending tick and stop for good.
    pub fn stop(&mut self) {
        if self.state == SessionState::Stopped {
            return;
        }
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        self.state = SessionState::Stopped;
        log::info!("particle session: stopped after {} frames", self.frames);
    }

    fn draw(&mut self) {
        self.last_stats = self.renderer.draw_frame(&self.field, &mut self.surface);
        self.frames += 1;
    }

    fn schedule(&mut self) {
        self.pending = self.scheduler.request_frame();
        if self.pending.is_none() {
            log::warn!("particle session: host refused to schedule a frame, animation halted");
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    /// Handle of the tick currently waiting to fire, if any.
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Frames drawn so far, including the one drawn by `start`.
    pub fn frames_drawn(&self) -> u64 {
        self.frames
    }

    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }
}

impl<S: Surface, F: FrameScheduler> Drop for Session<S, F> {
    fn drop(&mut self) {
        self.stop();
    }
}
