use crate::dom::{self, Listener};
use crate::input::{self, KeyAction};
use crate::overlay::Overlay;
use heart_core::{regions, CursorHint, HeartScene, Hover, PointerMove, RegionId};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<HeartScene>>,
    pub overlay: Rc<RefCell<Overlay>>,
}

/// Registers every listener the viewer needs. Dropping the returned guards
/// unregisters them.
pub fn wire_input_handlers(w: &InputWiring) -> Vec<Listener> {
    let mut listeners = Vec::new();
    wire_canvas_pointer(w, &mut listeners);
    wire_canvas_click(w, &mut listeners);
    wire_canvas_wheel(w, &mut listeners);
    wire_window(w, &mut listeners);
    wire_overlay(w, &mut listeners);
    listeners
}

fn local_px(canvas: &web::HtmlCanvasElement, ev: &web::MouseEvent) -> glam::Vec2 {
    input::client_to_local(
        dom::canvas_rect(canvas),
        ev.client_x() as f32,
        ev.client_y() as f32,
    )
}

fn set_cursor(canvas: &web::HtmlCanvasElement, cursor: CursorHint) {
    dom::set_style(canvas, "cursor", cursor.as_css());
}

fn wire_canvas_pointer(w: &InputWiring, out: &mut Vec<Listener>) {
    let target: &web::EventTarget = w.canvas.as_ref();

    let down = w.clone();
    out.push(Listener::new(target, "pointerdown", move |ev: web::PointerEvent| {
        let p = local_px(&down.canvas, &ev);
        down.scene.borrow_mut().pointer_down(p.x, p.y);
        _ = down.canvas.set_pointer_capture(ev.pointer_id());
        set_cursor(&down.canvas, CursorHint::Grabbing);
    }));

    let mv = w.clone();
    out.push(Listener::new(target, "pointermove", move |ev: web::PointerEvent| {
        let p = local_px(&mv.canvas, &ev);
        let result = mv.scene.borrow_mut().pointer_move(p.x, p.y);
        if let PointerMove::Idle { cursor } = result {
            set_cursor(&mv.canvas, cursor);
        }
    }));

    for kind in ["pointerup", "pointercancel"] {
        let up = w.clone();
        out.push(Listener::new(target, kind, move |ev: web::PointerEvent| {
            if up.scene.borrow_mut().pointer_up() {
                _ = up.canvas.release_pointer_capture(ev.pointer_id());
                set_cursor(&up.canvas, CursorHint::Grab);
            }
        }));
    }

    out.push(Listener::with_passive(
        target,
        "contextmenu",
        false,
        |ev: web::MouseEvent| ev.prevent_default(),
    ));
}

fn wire_canvas_click(w: &InputWiring, out: &mut Vec<Listener>) {
    let w = w.clone();
    let target: web::EventTarget = w.canvas.clone().into();
    out.push(Listener::new(&target, "click", move |ev: web::MouseEvent| {
        let p = local_px(&w.canvas, &ev);
        let hit = w.scene.borrow().click(p.x, p.y);
        if let Some(hit) = hit {
            w.overlay.borrow().show_pick(&hit.format_local(2));
        }
    }));
}

fn wire_canvas_wheel(w: &InputWiring, out: &mut Vec<Listener>) {
    let w = w.clone();
    let target: web::EventTarget = w.canvas.clone().into();
    out.push(Listener::with_passive(&target, "wheel", false, move |ev: web::WheelEvent| {
        ev.prevent_default();
        let delta = input::wheel_delta_px(ev.delta_y() as f32, ev.delta_mode());
        w.scene.borrow_mut().wheel(delta);
    }));
}

fn wire_window(w: &InputWiring, out: &mut Vec<Listener>) {
    let Some(window) = web::window() else {
        return;
    };
    let target: &web::EventTarget = window.as_ref();

    let resize = w.clone();
    out.push(Listener::new(target, "resize", move |_: web::Event| {
        let (css_w, css_h) = dom::sync_canvas_backing_size(&resize.canvas);
        resize.scene.borrow_mut().resize(css_w, css_h);
    }));

    let keys = w.clone();
    out.push(Listener::new(target, "keydown", move |ev: web::KeyboardEvent| {
        if ev.repeat() {
            return;
        }
        match input::key_action(&ev.key()) {
            Some(KeyAction::ToggleXray) => {
                keys.scene.borrow_mut().toggle_xray();
            }
            Some(KeyAction::ClearSelection) => keys.scene.borrow_mut().clear_selection(),
            None => {}
        }
    }));
}

fn wire_overlay(w: &InputWiring, out: &mut Vec<Listener>) {
    let overlay = w.overlay.borrow();
    for r in regions() {
        let id = r.id;
        if let Some(label) = overlay.label(id) {
            wire_label(w, label, id, out);
        }
        if let Some(button) = overlay.region_button(id) {
            let scene = w.scene.clone();
            out.push(Listener::new(button.as_ref(), "click", move |_: web::MouseEvent| {
                scene.borrow_mut().toggle_selection(id);
            }));
        }
    }

    let scene = w.scene.clone();
    out.push(Listener::new(
        overlay.detail_close().as_ref(),
        "click",
        move |ev: web::MouseEvent| {
            ev.stop_propagation();
            scene.borrow_mut().clear_selection();
        },
    ));

    let scene = w.scene.clone();
    out.push(Listener::new(
        overlay.xray_button().as_ref(),
        "click",
        move |_: web::MouseEvent| {
            scene.borrow_mut().toggle_xray();
        },
    ));
}

fn wire_label(w: &InputWiring, label: &web::HtmlElement, id: RegionId, out: &mut Vec<Listener>) {
    let target: &web::EventTarget = label.as_ref();

    let scene = w.scene.clone();
    out.push(Listener::new(target, "click", move |ev: web::MouseEvent| {
        ev.stop_propagation();
        scene.borrow_mut().toggle_selection(id);
    }));

    // hover sits at the label's own position, not the pointer's
    let scene = w.scene.clone();
    let el = label.clone();
    let canvas = w.canvas.clone();
    out.push(Listener::new(target, "mouseenter", move |_: web::MouseEvent| {
        let rect = el.get_bounding_client_rect();
        let origin = dom::canvas_rect(&canvas);
        let center = input::client_to_local(
            origin,
            (rect.left() + rect.width() * 0.5) as f32,
            (rect.top() + rect.height() * 0.5) as f32,
        );
        scene.borrow_mut().set_hover(Some(Hover {
            region: id,
            x: center.x,
            y: center.y,
        }));
    }));

    let scene = w.scene.clone();
    out.push(Listener::new(target, "mouseleave", move |_: web::MouseEvent| {
        scene.borrow_mut().set_hover(None);
    }));
}
