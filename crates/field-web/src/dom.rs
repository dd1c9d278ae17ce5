use web_sys as web;

/// Logical (CSS pixel) size of the canvas box.
pub fn canvas_css_size(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    (rect.width() as f32, rect.height() as f32)
}

/// Match the canvas backing store to CSS size x devicePixelRatio and rescale
/// the 2d context so all drawing happens in logical units. Returns the logical
/// size. Resetting width/height clears the context transform, so the scale
/// must be reapplied on every sync.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    if let Some(window) = web::window() {
        let dpr = window.device_pixel_ratio();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
        _ = ctx.scale(dpr, dpr);
    }
    (rect.width() as f32, rect.height() as f32)
}
