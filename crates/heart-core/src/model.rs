//! Model lifecycle and x-ray appearance.

use crate::constants::{
    DEPTH_WRITE_MIN_OPACITY, OPACITY_BLEND, SOLID_OPACITY, XRAY_OPACITY,
};
use crate::controller::blend_toward;
use crate::error::AssetError;
use crate::mesh::ModelMesh;

/// Where the heart model is in its load. `Pending` and `Failed` are both
/// valid running states: the scene animates an empty group.
#[derive(Debug, Default)]
pub enum ModelSlot {
    #[default]
    Pending,
    Ready(ModelMesh),
    Failed,
}

impl ModelSlot {
    #[inline]
    pub fn mesh(&self) -> Option<&ModelMesh> {
        match self {
            ModelSlot::Ready(mesh) => Some(mesh),
            ModelSlot::Pending | ModelSlot::Failed => None,
        }
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        !matches!(self, ModelSlot::Pending)
    }

    /// Settles a pending slot. Returns `false`, leaving the slot untouched,
    /// when it was already settled.
    pub fn settle(&mut self, result: Result<ModelMesh, AssetError>) -> bool {
        if self.is_settled() {
            log::warn!("[asset] model already settled; ignoring second load result");
            return false;
        }
        *self = match result {
            Ok(mesh) => ModelSlot::Ready(mesh),
            Err(e) => {
                log::error!(
                    "[asset] error loading heart model, continuing without it: {}",
                    e
                );
                ModelSlot::Failed
            }
        };
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelAppearance {
    pub opacity: f32,
    pub depth_write: bool,
}

impl Default for ModelAppearance {
    fn default() -> Self {
        Self {
            opacity: SOLID_OPACITY,
            depth_write: true,
        }
    }
}

impl ModelAppearance {
    #[inline]
    pub fn target_opacity(xray: bool) -> f32 {
        if xray {
            XRAY_OPACITY
        } else {
            SOLID_OPACITY
        }
    }

    pub fn step(&mut self, xray: bool, frames: f32) {
        self.opacity = blend_toward(self.opacity, Self::target_opacity(xray), OPACITY_BLEND, frames);
        self.depth_write = self.opacity > DEPTH_WRITE_MIN_OPACITY;
    }
}
