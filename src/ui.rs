// Presentation rules for the overlay, kept free of DOM types.

use heart_core::{Hover, RegionId};

pub const HINT_TEXT: &str = "Drag to rotate · Scroll to zoom · Click a region to explore";
pub const TOOLTIP_CTA: &str = "Click to explore";
pub const BPM_TEXT: &str = "60 BPM";
pub const DETAIL_MAX_FUNCTIONS: usize = 3;
pub const TOOLTIP_OFFSET: (f32, f32) = (16.0, -12.0);

pub fn label_opacity(region: RegionId, selected: Option<RegionId>, hovered: Option<RegionId>) -> f32 {
    if selected == Some(region) {
        1.0
    } else if hovered == Some(region) {
        0.95
    } else {
        0.55
    }
}

/// Tooltip anchor for the current hover. No tooltip is shown for the
/// selected region, whose detail panel is already open.
pub fn tooltip_position(hover: Option<Hover>, selected: Option<RegionId>) -> Option<(f32, f32)> {
    let hover = hover?;
    if selected == Some(hover.region) {
        return None;
    }
    Some((hover.x + TOOLTIP_OFFSET.0, hover.y + TOOLTIP_OFFSET.1))
}

#[inline]
pub fn hint_visible(selected: Option<RegionId>, loaded: bool) -> bool {
    selected.is_none() && loaded
}

#[inline]
pub fn progress_text(percent: f32) -> String {
    format!("{:.0}%", percent.clamp(0.0, 100.0).round())
}

#[inline]
pub fn xray_button_text(xray: bool) -> &'static str {
    if xray {
        "X-ray: on"
    } else {
        "X-ray: off"
    }
}

#[inline]
pub fn pick_badge_text(coord: &str) -> String {
    format!("Surface {coord}")
}

/// `left`/`top` style values for an element centered on a screen point.
#[inline]
pub fn px(v: f32) -> String {
    format!("{:.1}px", v)
}
