use std::f64::consts::TAU;

use field_core::{fill_for_alpha, FieldState, Fill};
use web_sys as web;

/// Clear the canvas and redraw every dot from current state. Drawing happens
/// in logical units; the context carries the devicePixelRatio scale.
pub fn draw(ctx: &web::CanvasRenderingContext2d, state: &FieldState, width: f32, height: f32) {
    ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    for (dot, sprite) in state.dots.iter().zip(state.sprites()) {
        ctx.set_fill_style_str(&css_rgba(fill_for_alpha(sprite.alpha)));
        ctx.begin_path();
        _ = ctx.arc(
            dot.pos.x as f64,
            dot.pos.y as f64,
            (dot.size * sprite.scale) as f64,
            0.0,
            TAU,
        );
        ctx.fill();
    }
}

/// CSS color string for a fill, e.g. `rgba(8,204,217,0.700)`.
#[inline]
pub fn css_rgba(fill: Fill) -> String {
    format!(
        "rgba({},{},{},{:.3})",
        fill.rgb[0], fill.rgb[1], fill.rgb[2], fill.opacity
    )
}
