use std::cell::RefCell;
use std::rc::{Rc, Weak};

use plexus::{FieldConfig, Session};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};

use crate::canvas::{viewport_size, CanvasSurface};
use crate::scheduler::AnimationFrameScheduler;

type CanvasSession = Session<CanvasSurface, AnimationFrameScheduler>;

/// Wires one `Session` to the browser: frame callback, resize listener,
/// teardown.
///
/// wasm-bindgen cannot export generic structs, so the exported handle wraps
/// this concrete runner. The frame callback and the resize listener only hold
/// `Weak` references; dropping the runner drops the session.
pub struct BackgroundRunner {
    session: Rc<RefCell<CanvasSession>>,
    canvas: HtmlCanvasElement,
    window: Window,
    resize_listener: Option<Closure<dyn FnMut()>>,
}

impl BackgroundRunner {
    /// Start a background on `canvas`. `None` if there is no 2D context.
    pub fn attach(window: Window, canvas: HtmlCanvasElement, config: FieldConfig, seed: u64) -> Option<Self> {
        let surface = CanvasSurface::from_canvas(canvas.clone())?;
        let scheduler = AnimationFrameScheduler::new(window.clone());
        let slot = scheduler.callback_slot();

        let session = Rc::new(RefCell::new(Session::new(config, seed, surface, scheduler)));

        let weak = Rc::downgrade(&session);
        *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |_timestamp: f64| {
            if let Some(session) = weak.upgrade() {
                session.borrow_mut().tick();
            }
        }) as Box<dyn FnMut(f64)>));

        let mut runner = Self {
            session,
            canvas,
            window,
            resize_listener: None,
        };
        runner.listen_for_resize();

        let (w, h) = viewport_size(&runner.canvas);
        runner.session.borrow_mut().start(w, h);
        Some(runner)
    }

    fn listen_for_resize(&mut self) {
        let weak: Weak<RefCell<CanvasSession>> = Rc::downgrade(&self.session);
        let canvas = self.canvas.clone();
        let listener = Closure::wrap(Box::new(move || {
            if let Some(session) = weak.upgrade() {
                let (w, h) = viewport_size(&canvas);
                session.borrow_mut().on_resize(w, h);
            }
        }) as Box<dyn FnMut()>);

        match self
            .window
            .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
        {
            Ok(()) => self.resize_listener = Some(listener),
            Err(err) => log::warn!("particle background: resize listener not attached: {:?}", err),
        }
    }

    /// Re-read the viewport and rebuild the population.
    pub fn resize(&self) {
        let (w, h) = viewport_size(&self.canvas);
        self.session.borrow_mut().on_resize(w, h);
    }

    /// Cancel the pending frame and detach from the window.
    pub fn stop(&mut self) {
        self.session.borrow_mut().stop();
        if let Some(listener) = self.resize_listener.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
        }
    }

    pub fn is_running(&self) -> bool {
        self.session.borrow().is_running()
    }

    pub fn particle_count(&self) -> usize {
        self.session.borrow().field().len()
    }

    pub fn frames_drawn(&self) -> u64 {
        self.session.borrow().frames_drawn()
    }
}

impl Drop for BackgroundRunner {
    fn drop(&mut self) {
        self.stop();
    }
}
