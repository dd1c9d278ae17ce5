use field_core::constants::{DOT_SIZE, DOT_SPACING};
use field_core::{build_grid, FieldState};
use glam::Vec2;

fn expected_count(width: f32, height: f32) -> usize {
    let cols = (width / DOT_SPACING).ceil() as usize;
    let rows = (height / DOT_SPACING).ceil() as usize;
    (cols + 1) * (rows + 1)
}

#[test]
fn grid_has_one_extra_row_and_column() {
    for (w, h) in [
        (800.0, 600.0),
        (1024.0, 768.0),
        (333.0, 217.0),
        (30.0, 30.0),
        (1.0, 1.0),
    ] {
        let dots = build_grid(w, h);
        assert_eq!(
            dots.len(),
            expected_count(w, h),
            "unexpected dot count for {w}x{h}"
        );
    }
}

#[test]
fn dots_start_at_rest_on_the_lattice() {
    let dots = build_grid(200.0, 100.0);
    for dot in &dots {
        let i = dot.base.x / DOT_SPACING;
        let j = dot.base.y / DOT_SPACING;
        assert_eq!(i, i.round(), "base x off the lattice: {}", dot.base.x);
        assert_eq!(j, j.round(), "base y off the lattice: {}", dot.base.y);
        assert_eq!(dot.pos, dot.base);
        assert_eq!(dot.vel, Vec2::ZERO);
        assert_eq!(dot.size, DOT_SIZE);
    }
}

#[test]
fn degenerate_viewport_still_yields_a_dot() {
    let dots = build_grid(0.0, 0.0);
    assert_eq!(dots.len(), 1);
    assert_eq!(dots[0].base, Vec2::ZERO);
}

#[test]
fn resize_replaces_the_whole_lattice() {
    let mut state = FieldState::new(120.0, 90.0);
    let before = state.dots.len();
    state.resize(600.0, 300.0);
    assert_eq!(state.dots.len(), expected_count(600.0, 300.0));
    assert_ne!(state.dots.len(), before);
    for dot in &state.dots {
        assert_eq!(dot.pos, dot.base, "resize must produce a fresh rest lattice");
        assert_eq!(dot.vel, Vec2::ZERO);
    }
    assert_eq!(state.sprites().len(), state.dots.len());
}

#[test]
fn resize_keeps_ripples_and_pointer() {
    let mut state = FieldState::new(120.0, 90.0);
    state.click(10.0, 10.0);
    state.pointer_moved(5.0, 7.0);
    state.resize(300.0, 300.0);
    assert_eq!(state.ripples.len(), 1, "resize must not clear active ripples");
    assert_eq!(state.pointer.pos, Vec2::new(5.0, 7.0));
}
