//! Screen-space label placement for region anchors.

use crate::camera::{ScenePose, Viewport};
use crate::constants::{FRONT_MARGIN, LABEL_NDC_BOUND};
use crate::regions::{Region, RegionId};
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPlacement {
    pub region: RegionId,
    pub name: &'static str,
    pub screen_x: f32,
    pub screen_y: f32,
}

/// One frame's labels, in region table order.
pub type LabelList = SmallVec<[LabelPlacement; 8]>;

/// Visibility policy: once a region is selected only its own label stays,
/// unless x-ray mode keeps everything labelled.
#[inline]
pub fn label_visible(region: RegionId, selected: Option<RegionId>, xray: bool) -> bool {
    match selected {
        None => true,
        Some(sel) => sel == region || xray,
    }
}

/// Pixel position of an anchor, or `None` when it is behind the front
/// margin or too close to the viewport edge.
///
/// The front test compares world depth against the camera, it does not test
/// occlusion by the mesh.
pub fn project_anchor(region: &Region, pose: &ScenePose, viewport: Viewport) -> Option<Vec2> {
    let world = pose
        .rotation_matrix()
        .transform_point3(region.anchor * pose.pulse);
    if world.z >= pose.camera_z - FRONT_MARGIN {
        return None;
    }
    let ndc = pose.camera(viewport).project(world)?;
    let inside = ndc.x > -LABEL_NDC_BOUND
        && ndc.x < LABEL_NDC_BOUND
        && ndc.y > -LABEL_NDC_BOUND
        && ndc.y < LABEL_NDC_BOUND;
    inside.then(|| viewport.ndc_to_px(ndc.truncate()))
}

pub fn project_labels(
    regions: &[Region],
    pose: &ScenePose,
    viewport: Viewport,
    selected: Option<RegionId>,
    xray: bool,
) -> LabelList {
    regions
        .iter()
        .filter_map(|region| {
            let px = project_anchor(region, pose, viewport)?;
            label_visible(region.id, selected, xray).then_some(LabelPlacement {
                region: region.id,
                name: region.name,
                screen_x: px.x,
                screen_y: px.y,
            })
        })
        .collect()
}
