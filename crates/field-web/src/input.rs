use glam::Vec2;
use web_sys as web;

/// Event position relative to the canvas box, in logical (CSS pixel) units,
/// the same space the grid and the DPR-scaled 2d context use.
#[inline]
pub fn event_field_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}
