//! Click-to-surface picking against the loaded model.
//!
//! The hit is reported in the model group's local space, the space region
//! anchors are authored in. It is not used for selection; front-ends show
//! it as a coordinate readout.

use crate::camera::{ScenePose, Viewport};
use crate::mesh::ModelMesh;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickHit {
    /// Hit point in model group local space.
    pub local: Vec3,
    pub world: Vec3,
    /// World-space distance from the camera.
    pub distance: f32,
    pub triangle_index: usize,
}

impl PickHit {
    /// `[x, y, z]` with the given number of decimals.
    pub fn format_local(&self, decimals: usize) -> String {
        format_coord(self.local, decimals)
    }
}

pub fn format_coord(v: Vec3, decimals: usize) -> String {
    format!(
        "[{:.*}, {:.*}, {:.*}]",
        decimals, v.x, decimals, v.y, decimals, v.z
    )
}

/// Casts a ray from the camera through pixel `(x, y)` and returns the
/// nearest intersection with `mesh`.
pub fn pick(mesh: &ModelMesh, pose: &ScenePose, viewport: Viewport, x: f32, y: f32) -> Option<PickHit> {
    let camera = pose.camera(viewport);
    let (origin, dir) = camera.ray_through_ndc(viewport.px_to_ndc(x, y));

    // Intersect in group-local space; the direction is left unnormalized so
    // the ray parameter stays a world distance.
    let group = pose.model_matrix();
    let to_local = group.inverse();
    let local_origin = to_local.transform_point3(origin);
    let local_dir = to_local.transform_vector3(dir);

    let hit = mesh.raycast(local_origin, local_dir)?;
    Some(PickHit {
        local: hit.point,
        world: group.transform_point3(hit.point),
        distance: hit.distance,
        triangle_index: hit.triangle_index,
    })
}
