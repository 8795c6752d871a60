// Host-side tests for the scene coordinator: selection, hover, picking, x-ray.

use glam::Vec3;
use heart_core::*;
use std::time::Duration;

fn frame() -> Duration {
    Duration::from_secs_f64(1.0 / 60.0)
}

fn scene() -> HeartScene {
    HeartScene::new(Viewport::new(800.0, 600.0))
}

fn backdrop() -> ModelMesh {
    ModelMesh::new(
        vec![
            Vec3::new(-2.0, -2.0, 0.0),
            Vec3::new(2.0, -2.0, 0.0),
            Vec3::new(2.0, 2.0, 0.0),
            Vec3::new(-2.0, 2.0, 0.0),
        ],
        Vec::new(),
        vec![0, 1, 2, 0, 2, 3],
    )
}

#[test]
fn clear_selection_is_idempotent() {
    let mut s = scene();
    s.select(Some(RegionId::Aorta));
    s.clear_selection();
    let once = s.interaction();
    s.clear_selection();
    assert_eq!(s.interaction(), once);
    assert_eq!(once.selected, None);
}

#[test]
fn toggling_the_same_region_deselects() {
    let mut s = scene();
    assert_eq!(s.toggle_selection(RegionId::LeftAtrium), Some(RegionId::LeftAtrium));
    assert_eq!(s.toggle_selection(RegionId::Aorta), Some(RegionId::Aorta));
    assert_eq!(s.toggle_selection(RegionId::Aorta), None);
}

#[test]
fn selection_pauses_auto_rotation() {
    let mut s = scene();
    s.select(Some(RegionId::RightVentricle));
    let yaw = s.camera_state().yaw;
    for _ in 0..30 {
        s.tick(frame());
    }
    assert_eq!(s.camera_state().yaw, yaw);
    s.clear_selection();
    s.tick(frame());
    assert!(s.camera_state().yaw > yaw);
}

#[test]
fn idle_move_clears_hover() {
    let mut s = scene();
    let hover = Hover {
        region: RegionId::Aorta,
        x: 10.0,
        y: 20.0,
    };
    assert!(s.set_hover(Some(hover)));
    assert!(!s.set_hover(Some(hover)));
    assert_eq!(s.interaction().hovered, Some(RegionId::Aorta));

    let moved = s.pointer_move(50.0, 50.0);
    assert_eq!(
        moved,
        PointerMove::Idle {
            cursor: CursorHint::Grab
        }
    );
    assert_eq!(s.hover(), None);
}

#[test]
fn dragging_keeps_hover() {
    let mut s = scene();
    s.set_hover(Some(Hover {
        region: RegionId::LeftVentricle,
        x: 0.0,
        y: 0.0,
    }));
    s.pointer_down(100.0, 100.0);
    assert_eq!(s.pointer_move(120.0, 100.0), PointerMove::Rotated);
    assert!(s.hover().is_some());
    assert!(s.interaction().dragging);
    assert!(s.pointer_up());
    assert!(!s.interaction().dragging);
}

#[test]
fn click_before_model_loads_picks_nothing() {
    let mut s = scene();
    s.pointer_down(400.0, 300.0);
    s.pointer_up();
    assert!(s.click(400.0, 300.0).is_none());
}

#[test]
fn click_maps_to_model_surface() {
    let mut s = scene();
    assert!(s.attach_model(Ok(backdrop())));
    s.pointer_down(400.0, 300.0);
    s.pointer_up();
    let hit = s.click(402.0, 301.0).unwrap();
    assert!(hit.local.z.abs() < 1e-4);
    assert!(hit.local.truncate().length() < 0.1);
}

#[test]
fn drag_release_is_not_a_click() {
    let mut s = scene();
    s.attach_model(Ok(backdrop()));
    s.pointer_down(300.0, 300.0);
    s.pointer_move(360.0, 300.0);
    s.pointer_up();
    // last pointer is now (360, 300)
    assert!(s.click(366.0, 300.0).is_none());
    assert!(s.click(300.0, 300.0).is_none());
    assert!(s.click(365.0, 295.0).is_some());
}

#[test]
fn model_settles_only_once() {
    let mut s = scene();
    assert!(!s.model().is_settled());
    assert!(s.attach_model(Err(AssetError::Status(404))));
    assert!(matches!(s.model(), ModelSlot::Failed));
    assert!(!s.attach_model(Ok(backdrop())));
    assert!(s.model().mesh().is_none());
}

#[test]
fn failed_model_still_animates_and_labels() {
    let mut s = HeartScene::new(Viewport::new(1280.0, 800.0));
    s.attach_model(Err(AssetError::NoTriangles));
    s.controller_mut().set_pose(0.0, 0.0, DESKTOP_DISTANCE);
    let out = s.frame_output();
    assert_eq!(out.labels.len(), HEART_REGIONS.len());
    let before = s.camera_state().yaw;
    s.tick(frame());
    assert!(s.camera_state().yaw > before);
}

#[test]
fn xray_fades_model_and_disables_depth_write() {
    let mut s = scene();
    assert!(s.toggle_xray());
    for _ in 0..200 {
        s.tick(frame());
    }
    let a = s.appearance();
    assert!((a.opacity - XRAY_OPACITY).abs() < 1e-3);
    assert!(!a.depth_write);

    s.set_xray(false);
    for _ in 0..200 {
        s.tick(frame());
    }
    let a = s.appearance();
    assert!((a.opacity - SOLID_OPACITY).abs() < 1e-3);
    assert!(a.depth_write);
}

#[test]
fn xray_keeps_all_labels_with_selection() {
    let mut s = HeartScene::new(Viewport::new(1280.0, 800.0));
    s.controller_mut().set_pose(0.0, 0.0, DESKTOP_DISTANCE);
    s.select(Some(RegionId::Aorta));
    assert_eq!(s.frame_output().labels.len(), 1);
    s.set_xray(true);
    assert_eq!(s.frame_output().labels.len(), HEART_REGIONS.len());
}

#[test]
fn resize_updates_viewport() {
    let mut s = scene();
    s.resize(1024.0, 512.0);
    assert_eq!(s.viewport(), Viewport::new(1024.0, 512.0));
    assert_eq!(s.viewport().aspect(), 2.0);
}
