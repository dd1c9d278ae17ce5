use std::cell::{Cell, RefCell};
use std::rc::Rc;

use field_core::FieldState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::render;

/// Shared pieces the per-frame closure works with.
pub struct FrameContext {
    pub state: Rc<RefCell<FieldState>>,
    pub ctx: web::CanvasRenderingContext2d,
    pub canvas: web::HtmlCanvasElement,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let mut state = self.state.borrow_mut();
        state.step();
        let (width, height) = dom::canvas_css_size(&self.canvas);
        render::draw(&self.ctx, &state, width, height);
    }
}

/// Handle on the running requestAnimationFrame chain. Dropping it cancels the
/// pending callback and releases the tick closure; nothing fires afterwards.
pub struct FrameHandle {
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameHandle {
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let raf_for_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if raf_for_tick.get().is_none() {
            // cancelled between scheduling and delivery
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    raf_for_tick.set(Some(id));
                }
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                raf_id.set(Some(id));
            }
        }
    }
    FrameHandle { raf_id, tick }
}

impl Drop for FrameHandle {
    fn drop(&mut self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // the tick closure holds an Rc to itself; drop it to break the cycle
        self.tick.borrow_mut().take();
    }
}
