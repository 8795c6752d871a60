use crate::overlay::Overlay;
use crate::render::GpuState;
use heart_core::HeartScene;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<HeartScene>>,
    pub overlay: Rc<RefCell<Overlay>>,
    /// Filled in once WebGPU initialization resolves.
    pub gpu: Rc<RefCell<Option<GpuState>>>,
    pub canvas: web::HtmlCanvasElement,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let (out, selected, hover, xray) = {
            let mut scene = self.scene.borrow_mut();
            let out = scene.tick(dt);
            (out, scene.selected(), scene.hover(), scene.xray())
        };
        self.overlay
            .borrow_mut()
            .update(&out, selected, hover, xray);

        let mut gpu = self.gpu.borrow_mut();
        if let Some(g) = gpu.as_mut() {
            if !g.has_mesh() {
                if let Some(mesh) = self.scene.borrow().model().mesh() {
                    g.upload_mesh(mesh);
                }
            }
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&out) {
                log::error!("[gpu] render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<GpuState> {
    match GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running requestAnimationFrame loop.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: TickClosure,
}

impl FrameLoop {
    /// Cancels the pending frame and refuses to reschedule.
    pub fn stop(&self) {
        self.running.set(false);
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // breaks the closure's reference to itself
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &TickClosure, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => pending.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let running = Rc::new(Cell::new(true));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: TickClosure = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let running_tick = running.clone();
    let pending_tick = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        if !running_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if running_tick.get() {
            request_frame(&tick_clone, &pending_tick);
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &pending);

    FrameLoop {
        running,
        pending,
        tick,
    }
}
