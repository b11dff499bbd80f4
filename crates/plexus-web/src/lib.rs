//! Browser entry points for the particle background.
//!
//! ```js
//! import init, { attach } from "./pkg/plexus_web.js";
//! await init();
//! const bg = attach("particles-bg", JSON.stringify({ max_particles: 60 }));
//! // later, when the hero section is unmounted:
//! bg?.stop();
//! ```

pub mod canvas;
pub mod runner;
pub mod scheduler;

pub use canvas::CanvasSurface;
pub use runner::BackgroundRunner;
pub use scheduler::AnimationFrameScheduler;

use plexus::FieldConfig;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

/// Handle to one running background. Freeing it from JS stops the animation.
#[wasm_bindgen]
pub struct ParticleBackground {
    runner: BackgroundRunner,
}

#[wasm_bindgen]
impl ParticleBackground {
    /// Re-read the canvas parent's size and rebuild the particles.
    pub fn resize(&self) {
        self.runner.resize();
    }

    /// Stop animating. The handle stays valid but inert.
    pub fn stop(&mut self) {
        self.runner.stop();
    }

    pub fn is_running(&self) -> bool {
        self.runner.is_running()
    }

    pub fn particle_count(&self) -> u32 {
        self.runner.particle_count() as u32
    }

    pub fn frames_drawn(&self) -> f64 {
        self.runner.frames_drawn() as f64
    }
}

/// Start a background on the canvas with id `canvas_id`.
///
/// Returns `undefined` when the page has no such canvas or no 2D context;
/// a page without the hero canvas simply gets no animation.
#[wasm_bindgen]
pub fn attach(canvas_id: &str, config_json: Option<String>) -> Option<ParticleBackground> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let window = web_sys::window()?;
    let canvas = match window
        .document()
        .and_then(|doc| doc.get_element_by_id(canvas_id))
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
    {
        Some(canvas) => canvas,
        None => {
            log::warn!("particle background: no <canvas id=\"{}\"> on this page", canvas_id);
            return None;
        }
    };

    let config = config_json
        .as_deref()
        .map(parse_config)
        .unwrap_or_default();

    let runner = match BackgroundRunner::attach(window, canvas, config, session_seed()) {
        Some(runner) => runner,
        None => {
            log::warn!("particle background: canvas \"{}\" has no 2D context", canvas_id);
            return None;
        }
    };
    log::info!("particle background: attached to #{}", canvas_id);
    Some(ParticleBackground { runner })
}

fn parse_config(json: &str) -> FieldConfig {
    FieldConfig::from_json(json).unwrap_or_else(|err| {
        log::warn!("particle background: bad config ({}), using defaults", err);
        FieldConfig::default()
    })
}

/// Per-session seed so two backgrounds on one page do not move in lockstep.
fn session_seed() -> u64 {
    let now = js_sys::Date::now() as u64;
    let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
    now ^ (noise << 32)
}
