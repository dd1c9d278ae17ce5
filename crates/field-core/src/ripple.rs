use glam::Vec2;
use smallvec::SmallVec;

use crate::constants::{RIPPLE_DEAD_STRENGTH, RIPPLE_DECAY, RIPPLE_MAX_RADIUS, RIPPLE_SPEED};

/// An expanding shockwave ring spawned by a click. `radius` only grows and
/// `strength` only decays while the ripple is alive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub origin: Vec2,
    pub radius: f32,
    pub strength: f32,
    pub max_radius: f32,
}

/// The set of live ripples. Spawned on click, advanced once per frame before
/// force accumulation, swept in place once strength decays away.
#[derive(Clone, Debug, Default)]
pub struct RippleSet {
    active: SmallVec<[Ripple; 8]>,
}

impl RippleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, x: f32, y: f32) {
        self.active.push(Ripple {
            origin: Vec2::new(x, y),
            radius: 0.0,
            strength: 1.0,
            max_radius: RIPPLE_MAX_RADIUS,
        });
    }

    /// Grow and decay every ripple, then drop the ones that have faded out.
    /// Survivors keep their insertion order.
    pub fn advance(&mut self) {
        self.active.retain(|r| {
            r.radius += RIPPLE_SPEED;
            r.strength *= RIPPLE_DECAY;
            r.strength >= RIPPLE_DEAD_STRENGTH
        });
    }

    pub fn as_slice(&self) -> &[Ripple] {
        &self.active
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
