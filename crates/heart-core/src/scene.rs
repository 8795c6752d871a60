//! Scene coordinator. All per-frame state lives here and every input event
//! and frame tick goes through it, so handlers and the frame loop never hold
//! separate copies of camera or selection state.

use crate::camera::{ScenePose, Viewport};
use crate::controller::{reference_frames, CameraController, CameraState, PointerMove};
use crate::error::AssetError;
use crate::mesh::ModelMesh;
use crate::model::{ModelAppearance, ModelSlot};
use crate::picker::{pick, PickHit};
use crate::projector::{project_labels, LabelList};
use crate::regions::{regions, RegionId};
use glam::{Mat4, Vec3};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hover {
    pub region: RegionId,
    pub x: f32,
    pub y: f32,
}

/// Snapshot of pointer and selection state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionState {
    pub dragging: bool,
    pub last_pointer_x: f32,
    pub last_pointer_y: f32,
    pub selected: Option<RegionId>,
    pub hovered: Option<RegionId>,
}

/// Everything a front-end needs to draw one frame.
#[derive(Clone, Debug)]
pub struct FrameOutput {
    pub labels: LabelList,
    pub pose: ScenePose,
    pub model_matrix: Mat4,
    pub view_projection: Mat4,
    pub camera_eye: Vec3,
    pub appearance: ModelAppearance,
}

#[derive(Debug)]
pub struct HeartScene {
    controller: CameraController,
    viewport: Viewport,
    selected: Option<RegionId>,
    hover: Option<Hover>,
    xray: bool,
    model: ModelSlot,
    appearance: ModelAppearance,
}

impl HeartScene {
    pub fn new(viewport: Viewport) -> Self {
        log::info!(
            "[scene] start {}x{}",
            viewport.width as u32,
            viewport.height as u32
        );
        Self {
            controller: CameraController::new(viewport.width),
            viewport,
            selected: None,
            hover: None,
            xray: false,
            model: ModelSlot::default(),
            appearance: ModelAppearance::default(),
        }
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn camera_state(&self) -> &CameraState {
        self.controller.state()
    }

    #[inline]
    pub fn controller(&self) -> &CameraController {
        &self.controller
    }

    #[inline]
    pub fn controller_mut(&mut self) -> &mut CameraController {
        &mut self.controller
    }

    #[inline]
    pub fn pose(&self) -> ScenePose {
        self.controller.pose()
    }

    #[inline]
    pub fn model(&self) -> &ModelSlot {
        &self.model
    }

    #[inline]
    pub fn appearance(&self) -> ModelAppearance {
        self.appearance
    }

    #[inline]
    pub fn selected(&self) -> Option<RegionId> {
        self.selected
    }

    #[inline]
    pub fn hover(&self) -> Option<Hover> {
        self.hover
    }

    #[inline]
    pub fn xray(&self) -> bool {
        self.xray
    }

    pub fn interaction(&self) -> InteractionState {
        let last = self.controller.last_pointer();
        InteractionState {
            dragging: self.controller.is_dragging(),
            last_pointer_x: last.x,
            last_pointer_y: last.y,
            selected: self.selected,
            hovered: self.hover.map(|h| h.region),
        }
    }

    // ---------------- Input ----------------

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.controller.pointer_down(x, y);
    }

    /// While not dragging this also clears the hover.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> PointerMove {
        let result = self.controller.pointer_move(x, y);
        if let PointerMove::Idle { .. } = result {
            self.hover = None;
        }
        result
    }

    pub fn pointer_up(&mut self) -> bool {
        self.controller.pointer_up()
    }

    pub fn wheel(&mut self, delta_y: f32) {
        self.controller.wheel(delta_y);
    }

    /// Surface pick for a click at `(x, y)`. Clicks that end a drag, and
    /// clicks before the model is ready, produce nothing.
    pub fn click(&self, x: f32, y: f32) -> Option<PickHit> {
        if !self.controller.is_click(x, y) {
            return None;
        }
        let mesh = self.model.mesh()?;
        let hit = pick(mesh, &self.pose(), self.viewport, x, y)?;
        log::info!("[pick] mapped coordinate: {}", hit.format_local(3));
        Some(hit)
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
    }

    // ---------------- Configuration ----------------

    pub fn set_xray(&mut self, on: bool) {
        if self.xray != on {
            log::info!("[scene] x-ray {}", if on { "on" } else { "off" });
        }
        self.xray = on;
    }

    pub fn toggle_xray(&mut self) -> bool {
        self.set_xray(!self.xray);
        self.xray
    }

    pub fn select(&mut self, region: Option<RegionId>) {
        self.selected = region;
    }

    /// Selecting the already-selected region deselects it.
    pub fn toggle_selection(&mut self, region: RegionId) -> Option<RegionId> {
        self.selected = if self.selected == Some(region) {
            None
        } else {
            Some(region)
        };
        self.selected
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Returns whether the hover changed.
    pub fn set_hover(&mut self, hover: Option<Hover>) -> bool {
        let changed = self.hover != hover;
        self.hover = hover;
        changed
    }

    /// Settles the model slot. Only the first call has an effect.
    pub fn attach_model(&mut self, result: Result<ModelMesh, AssetError>) -> bool {
        self.model.settle(result)
    }

    // ---------------- Frame ----------------

    pub fn tick(&mut self, dt: Duration) -> FrameOutput {
        self.controller.tick(dt, self.selected.is_some());
        self.appearance.step(self.xray, reference_frames(dt));
        self.frame_output()
    }

    /// Frame data for the current state without advancing time.
    pub fn frame_output(&self) -> FrameOutput {
        let pose = self.pose();
        let camera = pose.camera(self.viewport);
        FrameOutput {
            labels: project_labels(regions(), &pose, self.viewport, self.selected, self.xray),
            pose,
            model_matrix: pose.model_matrix(),
            view_projection: camera.view_projection(),
            camera_eye: camera.eye(),
            appearance: self.appearance,
        }
    }
}
