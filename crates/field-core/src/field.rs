//! Per-frame force accumulation and spring integration for the dot field.
//!
//! All mutable animation state (dots, ripples, pointer) lives in one owned
//! [`FieldState`]; event handlers write into it and the frame step reads and
//! advances it. Nothing here touches platform APIs, so the whole model runs
//! under native `cargo test`.

use glam::Vec2;

use crate::constants::*;
use crate::grid::{build_grid, Dot};
use crate::ripple::{Ripple, RippleSet};

/// Last known pointer position in field coordinates. Parked far off-canvas
/// while the pointer is outside the field so no dot is within reach.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    pub pos: Vec2,
}

impl Pointer {
    pub fn offscreen() -> Self {
        Self {
            pos: Vec2::splat(POINTER_OFFSCREEN),
        }
    }

    pub fn set(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
    }

    pub fn clear(&mut self) {
        self.pos = Vec2::splat(POINTER_OFFSCREEN);
    }
}

impl Default for Pointer {
    fn default() -> Self {
        Self::offscreen()
    }
}

/// Output of one force pass over one dot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
    pub pos: Vec2,
    pub scale: f32,
    pub alpha: f32,
}

/// Per-dot visual parameters handed to the renderer. Kept out of [`Dot`] so
/// the dot itself only ever mutates position and velocity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Sprite {
    pub scale: f32,
    pub alpha: f32,
}

/// Combine the pointer-proximity term and every ripple-ring term into the
/// dot's target displacement, scale and alpha for this frame.
///
/// The pointer term measures against the dot's current (displaced) position;
/// the ripple terms measure against its base position. All contributions sum
/// into the same accumulators.
pub fn accumulate(dot: &Dot, pointer: &Pointer, ripples: &[Ripple]) -> Target {
    let mut push = Vec2::ZERO;
    let mut scale = 1.0;
    let mut alpha = BASE_ALPHA;

    let away = dot.pos - pointer.pos;
    let dist = away.length();
    if dist < POINTER_RADIUS {
        let force = (POINTER_RADIUS - dist) / POINTER_RADIUS;
        // bearing is undefined with the pointer exactly on the dot; the
        // magnitude is not, so push along a fixed axis
        let dir = if dist > 0.0 { away / dist } else { Vec2::X };
        push += dir * force * POINTER_FORCE;
        alpha = BASE_ALPHA + force * POINTER_ALPHA_SPAN;
        scale = 1.0 + force * POINTER_SCALE_SPAN;
    }

    for r in ripples {
        let out = dot.base - r.origin;
        let r_dist = out.length();
        if r_dist < MIN_RING_DIST {
            // dot sits on the ripple origin; no direction to push along
            continue;
        }
        let ring_offset = (r_dist - r.radius).abs();
        if ring_offset < RING_WIDTH {
            let force = (1.0 - ring_offset / RING_WIDTH) * r.strength;
            push += (out / r_dist) * force * RIPPLE_FORCE;
            scale += force * RIPPLE_SCALE_GAIN;
            alpha += force;
        }
    }

    Target {
        pos: dot.base + push,
        scale,
        alpha,
    }
}

/// Semi-implicit Euler step of a damped spring toward `target`: accelerate by
/// displacement, damp, then move. A dot at rest on its target stays put.
pub fn integrate(dot: &mut Dot, target: Vec2) {
    dot.vel += (target - dot.pos) * SPRING_STIFFNESS;
    dot.vel *= SPRING_DAMPING;
    dot.pos += dot.vel;
}

/// All per-frame mutable animation state, exclusively owned by the frame loop.
pub struct FieldState {
    pub dots: Vec<Dot>,
    pub ripples: RippleSet,
    pub pointer: Pointer,
    sprites: Vec<Sprite>,
}

impl FieldState {
    pub fn new(width: f32, height: f32) -> Self {
        let dots = build_grid(width, height);
        let sprites = vec![Sprite::default(); dots.len()];
        Self {
            dots,
            ripples: RippleSet::new(),
            pointer: Pointer::offscreen(),
            sprites,
        }
    }

    /// Replace the whole lattice for a new viewport size. Ripples and pointer
    /// state survive a resize; only the dots are rebuilt.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.dots = build_grid(width, height);
        self.sprites = vec![Sprite::default(); self.dots.len()];
        log::debug!("grid rebuilt for {width:.0}x{height:.0}: {} dots", self.dots.len());
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer.set(x, y);
    }

    pub fn pointer_left(&mut self) {
        self.pointer.clear();
    }

    pub fn click(&mut self, x: f32, y: f32) {
        self.ripples.spawn(x, y);
    }

    /// Advance one frame: sweep the ripple set, then accumulate forces and
    /// integrate every dot.
    pub fn step(&mut self) {
        self.ripples.advance();
        for (dot, sprite) in self.dots.iter_mut().zip(self.sprites.iter_mut()) {
            let target = accumulate(dot, &self.pointer, self.ripples.as_slice());
            integrate(dot, target.pos);
            if !dot.pos.is_finite() {
                // a non-finite dot would never recover; snap it back to rest
                dot.pos = dot.base;
                dot.vel = Vec2::ZERO;
            }
            *sprite = Sprite {
                scale: target.scale,
                alpha: target.alpha,
            };
        }
    }

    /// Visual parameters from the latest `step`, index-aligned with `dots`.
    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }
}
