use std::cell::RefCell;
use std::rc::Rc;

use field_core::FieldState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::input;

/// A DOM event listener that detaches itself from its target when dropped.
/// Unmount must leave nothing behind, so `Closure::forget` is off-limits here.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn attach(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let f: &js_sys::Function = self.closure.as_ref().unchecked_ref();
        _ = self.target.remove_event_listener_with_callback(self.event, f);
    }
}

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub state: Rc<RefCell<FieldState>>,
}

pub fn wire_input_handlers(window: &web::Window, w: &InputWiring) -> Vec<Listener> {
    vec![
        wire_pointermove(w),
        wire_pointerleave(w),
        wire_click(w),
        wire_resize(window, w),
    ]
}

fn wire_pointermove(w: &InputWiring) -> Listener {
    let canvas = w.canvas.clone();
    let state = w.state.clone();
    Listener::attach(&w.canvas, "pointermove", move |ev| {
        let ev: web::PointerEvent = ev.unchecked_into();
        let pos = input::event_field_px(&ev, &canvas);
        state.borrow_mut().pointer_moved(pos.x, pos.y);
    })
}

fn wire_pointerleave(w: &InputWiring) -> Listener {
    let state = w.state.clone();
    Listener::attach(&w.canvas, "pointerleave", move |_ev| {
        state.borrow_mut().pointer_left();
    })
}

fn wire_click(w: &InputWiring) -> Listener {
    let canvas = w.canvas.clone();
    let state = w.state.clone();
    Listener::attach(&w.canvas, "click", move |ev| {
        let ev: web::MouseEvent = ev.unchecked_into();
        let pos = input::event_field_px(&ev, &canvas);
        state.borrow_mut().click(pos.x, pos.y);
        log::info!("[click] ripple at ({:.0}, {:.0})", pos.x, pos.y);
    })
}

fn wire_resize(window: &web::Window, w: &InputWiring) -> Listener {
    let w = w.clone();
    Listener::attach(window, "resize", move |_ev| {
        let (width, height) = dom::sync_canvas_backing_size(&w.canvas, &w.ctx);
        w.state.borrow_mut().resize(width, height);
    })
}
