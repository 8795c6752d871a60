use glam::Vec2;

/// Canvas bounding rectangle in CSS pixels, as reported by
/// `getBoundingClientRect`.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct CanvasRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Client coordinates to canvas-local CSS pixels (origin top-left).
#[inline]
pub fn client_to_local(rect: CanvasRect, client_x: f32, client_y: f32) -> Vec2 {
    Vec2::new(client_x - rect.left, client_y - rect.top)
}

// WheelEvent.deltaMode values
const DOM_DELTA_LINE: u32 = 1;
const DOM_DELTA_PAGE: u32 = 2;
const LINE_HEIGHT_PX: f32 = 16.0;
const PAGE_HEIGHT_PX: f32 = 800.0;

/// Wheel delta normalized to pixels. Firefox reports line deltas for mouse
/// wheels, which would otherwise barely zoom.
#[inline]
pub fn wheel_delta_px(delta_y: f32, delta_mode: u32) -> f32 {
    match delta_mode {
        DOM_DELTA_LINE => delta_y * LINE_HEIGHT_PX,
        DOM_DELTA_PAGE => delta_y * PAGE_HEIGHT_PX,
        _ => delta_y,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ToggleXray,
    ClearSelection,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "x" | "X" => Some(KeyAction::ToggleXray),
        "Escape" => Some(KeyAction::ClearSelection),
        _ => None,
    }
}
