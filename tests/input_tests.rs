// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn client_coordinates_become_canvas_local() {
    let rect = CanvasRect {
        left: 120.0,
        top: 40.0,
        width: 800.0,
        height: 600.0,
    };
    let p = client_to_local(rect, 520.0, 340.0);
    assert_eq!((p.x, p.y), (400.0, 300.0));
}

#[test]
fn wheel_deltas_normalize_to_pixels() {
    assert_eq!(wheel_delta_px(100.0, 0), 100.0);
    assert_eq!(wheel_delta_px(3.0, 1), 48.0);
    assert_eq!(wheel_delta_px(-1.0, 2), -800.0);
}

#[test]
fn key_bindings() {
    assert_eq!(key_action("x"), Some(KeyAction::ToggleXray));
    assert_eq!(key_action("X"), Some(KeyAction::ToggleXray));
    assert_eq!(key_action("Escape"), Some(KeyAction::ClearSelection));
    assert_eq!(key_action("Enter"), None);
}
