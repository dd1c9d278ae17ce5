use glam::Vec2;

use crate::constants::{DOT_SIZE, DOT_SPACING};

/// One lattice point of the field. `base` is the rest position the spring
/// pulls toward and never changes after construction; `pos` and `vel` are
/// rewritten every frame.
#[derive(Clone, Debug)]
pub struct Dot {
    pub pos: Vec2,
    pub base: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Dot {
    pub fn at_rest(base: Vec2) -> Self {
        Self {
            pos: base,
            base,
            vel: Vec2::ZERO,
            size: DOT_SIZE,
        }
    }
}

/// Build the dot lattice covering a `width` x `height` viewport: one dot per
/// `DOT_SPACING` step, inclusive of both edges, so `(cols+1) * (rows+1)` dots.
pub fn build_grid(width: f32, height: f32) -> Vec<Dot> {
    let cols = (width / DOT_SPACING).ceil() as u32;
    let rows = (height / DOT_SPACING).ceil() as u32;
    let mut dots = Vec::with_capacity(((cols + 1) * (rows + 1)) as usize);
    for j in 0..=rows {
        for i in 0..=cols {
            let base = Vec2::new(i as f32 * DOT_SPACING, j as f32 * DOT_SPACING);
            dots.push(Dot::at_rest(base));
        }
    }
    dots
}
