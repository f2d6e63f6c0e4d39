use crate::core::Scene;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Browser shortcuts that must keep their default behavior and must not
/// feed the art state.
#[inline]
pub fn is_reserved_key(key: &str, ctrl: bool, meta: bool) -> bool {
    ctrl || meta || matches!(key, "F5" | "F12")
}

/// Listen on the window so no focus management is needed; any printable or
/// navigation key counts as creative input.
pub fn wire_keyboard(scene: Rc<RefCell<Scene>>, started: Instant) {
    if let Some(window) = web::window() {
        let scene_down = scene.clone();
        let down = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            if is_reserved_key(&ev.key(), ev.ctrl_key(), ev.meta_key()) {
                return;
            }
            let now_ms = started.elapsed().as_secs_f64() * 1000.0;
            scene_down.borrow_mut().on_key(now_ms);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", down.as_ref().unchecked_ref());
        down.forget();

        let up = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::KeyboardEvent| {
            let now_ms = started.elapsed().as_secs_f64() * 1000.0;
            scene.borrow_mut().on_key_release(now_ms);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keyup", up.as_ref().unchecked_ref());
        up.forget();
    }
}
