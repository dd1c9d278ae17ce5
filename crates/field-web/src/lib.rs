#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;

use field_core::FieldState;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod entrance;
mod events;
mod frame;
mod input;
mod render;

/// Everything wired at mount. Dropping it cancels the frame loop, detaches
/// every DOM listener and reverts the entrance effect.
struct App {
    _listeners: Vec<events::Listener>,
    _frame: frame::FrameHandle,
    _entrance: entrance::Entrance,
}

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("field-web starting");
    mount();
    Ok(())
}

/// Wire the dot field onto the host page. A call while already mounted is a
/// no-op; calling again after `unmount` mounts a fresh field.
#[wasm_bindgen]
pub fn mount() {
    APP.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            return;
        }
        match init() {
            Ok(app) => *slot = app,
            Err(e) => log::error!("init error: {e:?}"),
        }
    });
}

/// Tear down the frame loop, every listener and the entrance effect.
#[wasm_bindgen]
pub fn unmount() {
    APP.with(|slot| slot.borrow_mut().take());
}

fn init() -> anyhow::Result<Option<App>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // No 2d context means the field never starts; the rest of the page is fine.
    let ctx = match canvas.get_context("2d") {
        Ok(Some(obj)) => match obj.dyn_into::<web::CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => {
                log::warn!("2d context has unexpected type; dot field disabled");
                return Ok(None);
            }
        },
        _ => {
            log::warn!("2d context unavailable; dot field disabled");
            return Ok(None);
        }
    };

    let (width, height) = dom::sync_canvas_backing_size(&canvas, &ctx);
    let state = Rc::new(RefCell::new(FieldState::new(width, height)));
    log::info!(
        "[field] mounted at {width:.0}x{height:.0}, {} dots",
        state.borrow().dots.len()
    );

    let listeners = events::wire_input_handlers(
        &window,
        &events::InputWiring {
            canvas: canvas.clone(),
            ctx: ctx.clone(),
            state: state.clone(),
        },
    );

    let entrance = entrance::Entrance::start(&document);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext { state, ctx, canvas }));
    let frame = frame::start_loop(frame_ctx);

    Ok(Some(App {
        _listeners: listeners,
        _frame: frame,
        _entrance: entrance,
    }))
}
