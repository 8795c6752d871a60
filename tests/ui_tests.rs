// Host-side tests for overlay presentation rules.

#![allow(dead_code)]
mod ui {
    include!("../src/ui.rs");
}

use heart_core::{Hover, RegionId};
use ui::*;

#[test]
fn label_opacity_prefers_selection_over_hover() {
    let lv = RegionId::LeftVentricle;
    assert_eq!(label_opacity(lv, Some(lv), Some(lv)), 1.0);
    assert_eq!(label_opacity(lv, None, Some(lv)), 0.95);
    assert_eq!(label_opacity(lv, Some(RegionId::Aorta), None), 0.55);
}

#[test]
fn tooltip_is_offset_from_hover() {
    let hover = Hover {
        region: RegionId::Aorta,
        x: 100.0,
        y: 50.0,
    };
    assert_eq!(tooltip_position(Some(hover), None), Some((116.0, 38.0)));
    assert_eq!(tooltip_position(None, None), None);
}

#[test]
fn no_tooltip_over_selected_region() {
    let hover = Hover {
        region: RegionId::Aorta,
        x: 0.0,
        y: 0.0,
    };
    assert_eq!(tooltip_position(Some(hover), Some(RegionId::Aorta)), None);
    assert!(tooltip_position(Some(hover), Some(RegionId::LeftAtrium)).is_some());
}

#[test]
fn hint_only_before_selection_once_loaded() {
    assert!(hint_visible(None, true));
    assert!(!hint_visible(None, false));
    assert!(!hint_visible(Some(RegionId::RightAtrium), true));
}

#[test]
fn progress_is_whole_percent() {
    assert_eq!(progress_text(0.0), "0%");
    assert_eq!(progress_text(42.2), "42%");
    assert_eq!(progress_text(42.7), "43%");
    assert_eq!(progress_text(99.6), "100%");
    assert_eq!(progress_text(140.0), "100%");
}

#[test]
fn style_and_badge_text() {
    assert_eq!(px(12.34), "12.3px");
    assert_eq!(pick_badge_text("[0.10, 1.00, -0.50]"), "Surface [0.10, 1.00, -0.50]");
    assert_eq!(xray_button_text(true), "X-ray: on");
}
