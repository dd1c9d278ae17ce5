// Host-side tests for the pure color formatting helper.
// The main crate is wasm-only, so we include the module directly.

#![allow(dead_code)]
mod render {
    include!("../src/render.rs");
}

use field_core::{fill_for_alpha, Fill};
use render::css_rgba;

#[test]
fn css_rgba_formats_components_and_opacity() {
    let s = css_rgba(Fill {
        rgb: [8, 204, 217],
        opacity: 0.7,
    });
    assert_eq!(s, "rgba(8,204,217,0.700)");
}

#[test]
fn baseline_alpha_renders_as_faint_grey() {
    let s = css_rgba(fill_for_alpha(0.2));
    assert_eq!(s, "rgba(100,100,100,0.200)");
}

#[test]
fn saturated_alpha_renders_as_full_accent() {
    let s = css_rgba(fill_for_alpha(1.5));
    assert_eq!(s, "rgba(8,204,217,1.000)");
}
