#![cfg(target_arch = "wasm32")]
use heart_core::{
    load_glb, AssetError, HeartScene, LoadSignal, LoadingProgress, ModelMesh, RegionId, Viewport,
    LOADING_TICK_MS, MODEL_ASSET_PATH,
};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod ui;

use dom::{Interval, Listener};
use frame::{FrameContext, FrameLoop};
use overlay::Overlay;
use render::GpuState;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("heart-web starting");
    Ok(())
}

/// A running viewer. Dropping it tears everything down.
struct Viewer {
    scene: Rc<RefCell<HeartScene>>,
    overlay: Rc<RefCell<Overlay>>,
    gpu: Rc<RefCell<Option<GpuState>>>,
    frame_loop: FrameLoop,
    listeners: Vec<Listener>,
    loading_ticker: Rc<RefCell<Option<Interval>>>,
    alive: Rc<Cell<bool>>,
}

impl Drop for Viewer {
    fn drop(&mut self) {
        self.alive.set(false);
        self.frame_loop.stop();
        self.listeners.clear();
        self.loading_ticker.borrow_mut().take();
        self.gpu.borrow_mut().take();
        self.overlay.borrow().remove();
        log::info!("[scene] destroyed");
    }
}

/// Handle returned to JavaScript by [`start_viewer`].
#[wasm_bindgen]
pub struct ViewerHandle {
    viewer: Option<Viewer>,
}

#[wasm_bindgen]
impl ViewerHandle {
    /// Stops the frame loop, removes every listener and overlay element and
    /// releases the GPU surface. Safe to call more than once.
    pub fn destroy(&mut self) {
        self.viewer.take();
    }

    pub fn set_xray(&self, on: bool) {
        if let Some(v) = &self.viewer {
            v.scene.borrow_mut().set_xray(on);
        }
    }

    /// Selects a region by key (e.g. `"aorta"`), or clears the selection.
    pub fn select_region(&self, key: Option<String>) {
        if let Some(v) = &self.viewer {
            let id = key.as_deref().and_then(RegionId::from_key);
            if key.is_some() && id.is_none() {
                log::warn!("[scene] unknown region {:?}", key);
            }
            v.scene.borrow_mut().select(id);
        }
    }

    pub fn selected_region(&self) -> Option<String> {
        let v = self.viewer.as_ref()?;
        let selected = v.scene.borrow().selected();
        selected.map(|id| id.as_str().to_string())
    }
}

#[wasm_bindgen]
pub fn start_viewer(canvas_id: &str) -> Result<ViewerHandle, JsValue> {
    match init(canvas_id) {
        Ok(viewer) => Ok(ViewerHandle {
            viewer: Some(viewer),
        }),
        Err(e) => {
            log::error!("init error: {:?}", e);
            Err(JsValue::from_str(&format!("{:#}", e)))
        }
    }
}

fn init(canvas_id: &str) -> anyhow::Result<Viewer> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", canvas_id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let parent: web::Element = match canvas.parent_element() {
        Some(p) => p,
        None => document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no body"))?
            .into(),
    };

    let (css_w, css_h) = dom::sync_canvas_backing_size(&canvas);
    let scene = Rc::new(RefCell::new(HeartScene::new(Viewport::new(css_w, css_h))));

    let mut progress = LoadingProgress::new(rand::random());
    let fact = progress.pick_fact();
    let overlay = Rc::new(RefCell::new(Overlay::new(&document, &parent, fact)?));

    let overlay_tick = overlay.clone();
    let ticker = Interval::new(LOADING_TICK_MS, move || {
        let percent = progress.advance();
        overlay_tick.borrow().set_progress(percent);
    })?;
    let loading_ticker = Rc::new(RefCell::new(Some(ticker)));

    let listeners = events::wire_input_handlers(&events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        overlay: overlay.clone(),
    });

    let gpu: Rc<RefCell<Option<GpuState>>> = Rc::new(RefCell::new(None));
    let alive = Rc::new(Cell::new(true));

    {
        let gpu = gpu.clone();
        let alive = alive.clone();
        let canvas = canvas.clone();
        spawn_local(async move {
            let state = frame::init_gpu(&canvas).await;
            if alive.get() {
                *gpu.borrow_mut() = state;
            }
        });
    }

    {
        let overlay_done = overlay.clone();
        let ticker_done = loading_ticker.clone();
        let signal = LoadSignal::new(move || {
            ticker_done.borrow_mut().take();
            overlay_done.borrow_mut().finish_loading();
        });
        let scene = scene.clone();
        let alive = alive.clone();
        spawn_local(async move {
            let result = fetch_model(MODEL_ASSET_PATH).await;
            if alive.get() {
                scene.borrow_mut().attach_model(result);
            }
            signal.fire();
        });
    }

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        scene: scene.clone(),
        overlay: overlay.clone(),
        gpu: gpu.clone(),
        canvas,
        last_instant: Instant::now(),
    }));
    let frame_loop = frame::start_loop(frame_ctx);

    Ok(Viewer {
        scene,
        overlay,
        gpu,
        frame_loop,
        listeners,
        loading_ticker,
        alive,
    })
}

async fn fetch_model(url: &str) -> Result<ModelMesh, AssetError> {
    let fetch_err = |e: JsValue| AssetError::Fetch(format!("{:?}", e));
    let window = web::window().ok_or_else(|| AssetError::Fetch("no window".into()))?;
    let response: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(fetch_err)?
        .dyn_into()
        .map_err(fetch_err)?;
    if !response.ok() {
        return Err(AssetError::Status(response.status()));
    }
    let buffer = JsFuture::from(response.array_buffer().map_err(fetch_err)?)
        .await
        .map_err(fetch_err)?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    log::info!("[asset] fetched {} ({} bytes)", url, bytes.len());
    load_glb(&bytes)
}
