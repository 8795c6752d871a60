// Host-side tests for the orbit controller: clamps, drag, coasting, pulse.

use heart_core::*;
use std::time::Duration;

fn frame() -> Duration {
    Duration::from_secs_f64(1.0 / 60.0)
}

#[test]
fn desktop_and_mobile_start_distances() {
    assert_eq!(CameraController::new(1280.0).state().distance, DESKTOP_DISTANCE);
    assert_eq!(CameraController::new(390.0).state().distance, MOBILE_DISTANCE);
    let c = CameraController::new(1280.0);
    assert_eq!(c.state().pitch, INITIAL_PITCH);
    assert_eq!(c.rendered().camera_z, CAMERA_START_Z);
}

#[test]
fn pitch_stays_clamped_for_any_drag() {
    for dy in [-1.0e6_f32, -5000.0, -1.0, 0.0, 3.0, 900.0, 1.0e6] {
        let mut c = CameraController::new(1280.0);
        c.pointer_down(0.0, 0.0);
        c.pointer_move(0.0, dy);
        assert!(c.state().pitch.abs() <= PITCH_LIMIT, "dy={dy}");
        c.pointer_up();
        for _ in 0..120 {
            c.tick(frame(), false);
            assert!(c.state().pitch.abs() <= PITCH_LIMIT, "coasting dy={dy}");
            assert!(c.rendered().pitch.abs() <= PITCH_LIMIT);
        }
    }
}

#[test]
fn distance_stays_clamped_for_any_wheel() {
    let mut c = CameraController::new(1280.0);
    for delta in [1.0e7_f32, -3.0, -1.0e7, 250.0, -0.5, 4000.0] {
        c.wheel(delta);
        let d = c.state().distance;
        assert!((MIN_DISTANCE..=MAX_DISTANCE).contains(&d), "delta={delta} d={d}");
    }
    c.wheel(-1.0e7);
    assert_eq!(c.state().distance, MIN_DISTANCE);
    c.wheel(1.0e7);
    assert_eq!(c.state().distance, MAX_DISTANCE);
}

#[test]
fn wheel_scales_delta() {
    let mut c = CameraController::new(1280.0);
    c.wheel(100.0);
    assert!((c.state().distance - (DESKTOP_DISTANCE + 1.0)).abs() < 1e-5);
}

#[test]
fn drag_applies_rotation_immediately() {
    let mut c = CameraController::new(1280.0);
    c.pointer_down(100.0, 100.0);
    assert!(c.is_dragging());
    assert_eq!(c.pointer_move(120.0, 90.0), PointerMove::Rotated);
    let s = c.state();
    assert!((s.yaw_velocity - 0.1).abs() < 1e-6);
    assert!((s.pitch_velocity + 0.05).abs() < 1e-6);
    assert!((s.yaw - 0.1).abs() < 1e-6);
    assert!((s.pitch - (INITIAL_PITCH - 0.05)).abs() < 1e-6);
    assert_eq!(c.last_pointer(), glam::Vec2::new(120.0, 90.0));
}

#[test]
fn pointer_down_zeroes_velocity() {
    let mut c = CameraController::new(1280.0);
    c.pointer_down(0.0, 0.0);
    c.pointer_move(50.0, 50.0);
    c.pointer_up();
    c.pointer_down(10.0, 10.0);
    assert_eq!(c.state().yaw_velocity, 0.0);
    assert_eq!(c.state().pitch_velocity, 0.0);
}

#[test]
fn move_without_drag_requests_grab_cursor() {
    let mut c = CameraController::new(1280.0);
    let before = *c.state();
    assert_eq!(
        c.pointer_move(10.0, 10.0),
        PointerMove::Idle {
            cursor: CursorHint::Grab
        }
    );
    assert_eq!(*c.state(), before);
}

#[test]
fn pointer_up_reports_whether_dragging() {
    let mut c = CameraController::new(1280.0);
    assert!(!c.pointer_up());
    c.pointer_down(0.0, 0.0);
    assert!(c.pointer_up());
    assert!(!c.is_dragging());
}

#[test]
fn released_drag_coasts_with_decreasing_steps() {
    let mut c = CameraController::new(1280.0);
    c.pointer_down(100.0, 100.0);
    c.pointer_move(140.0, 100.0);
    c.pointer_up();

    let mut prev_yaw = c.state().yaw;
    let mut prev_step = f32::INFINITY;
    for i in 0..12 {
        c.tick(frame(), false);
        let step = c.state().yaw - prev_yaw;
        assert!(step > 0.0, "frame {i}: yaw stopped");
        assert!(step < prev_step, "frame {i}: step {step} >= {prev_step}");
        prev_step = step;
        prev_yaw = c.state().yaw;
    }
}

#[test]
fn auto_rotate_only_when_idle_and_unselected() {
    let mut c = CameraController::new(1280.0);
    c.tick(frame(), false);
    let drift = c.state().yaw;
    assert!((drift - AUTO_ROTATE_PER_FRAME).abs() < 1e-6);

    let mut c = CameraController::new(1280.0);
    c.tick(frame(), true);
    assert_eq!(c.state().yaw, 0.0);

    let mut c = CameraController::new(1280.0);
    c.pointer_down(0.0, 0.0);
    c.tick(frame(), false);
    assert_eq!(c.state().yaw, 0.0);
}

#[test]
fn rendered_pose_eases_toward_target() {
    let mut c = CameraController::new(390.0);
    c.tick(frame(), true);
    let z1 = c.rendered().camera_z;
    let expected = CAMERA_START_Z + (MOBILE_DISTANCE - CAMERA_START_Z) * POSE_BLEND;
    assert!((z1 - expected).abs() < 1e-4);
    for _ in 0..600 {
        c.tick(frame(), true);
    }
    assert!((c.rendered().camera_z - MOBILE_DISTANCE).abs() < 1e-3);
    assert!((c.rendered().pitch - INITIAL_PITCH).abs() < 1e-4);
}

#[test]
fn long_frames_are_capped() {
    let mut a = CameraController::new(1280.0);
    let mut b = CameraController::new(1280.0);
    a.tick(Duration::from_secs(5), false);
    b.tick(Duration::from_millis(100), false);
    assert!((a.state().yaw - b.state().yaw).abs() < 1e-6);
}

#[test]
fn pulse_stays_near_rest_scale() {
    let mut c = CameraController::new(1280.0);
    let mut max_seen = 1.0_f32;
    for _ in 0..400 {
        c.tick(frame(), false);
        let p = c.pulse();
        assert!(p >= 1.0 - PULSE_AMPLITUDE - 1e-6 && p <= 1.0 + PULSE_AMPLITUDE + 1e-6);
        max_seen = max_seen.max(p);
    }
    assert!(max_seen > 1.0);
}

#[test]
fn click_slop_distinguishes_drag_release() {
    let mut c = CameraController::new(1280.0);
    c.pointer_down(200.0, 200.0);
    assert!(c.is_click(205.0, 195.0));
    assert!(!c.is_click(206.0, 200.0));
    assert!(!c.is_click(200.0, 194.0));
}
