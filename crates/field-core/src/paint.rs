use crate::constants::{ACCENT_ALPHA_THRESHOLD, ACCENT_RGB, NEUTRAL_RGB};

/// Fill color for one dot: rgb components plus draw opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fill {
    pub rgb: [u8; 3],
    pub opacity: f32,
}

/// Two-tone palette switch: dots whose accumulated alpha crosses the threshold
/// take the accent color, everything else stays neutral grey. A hard switch,
/// not a blend between the hues.
#[inline]
pub fn fill_for_alpha(alpha: f32) -> Fill {
    if alpha > ACCENT_ALPHA_THRESHOLD {
        Fill {
            rgb: ACCENT_RGB,
            opacity: alpha.min(1.0),
        }
    } else {
        Fill {
            rgb: NEUTRAL_RGB,
            opacity: alpha,
        }
    }
}
