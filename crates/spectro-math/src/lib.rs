//! Planar math primitives for the spectro simulation core.
//!
//! All quantities live in screen space: x grows to the right, y grows
//! downward, and one unit of time is one rendered frame.

use nalgebra as na;
use std::f64::consts::{FRAC_PI_2, PI};

/// 2D vector alias.
pub type Vec2 = na::Vector2<f64>;

/// Nominal frame rate of the external frame clock (frames per second).
pub const FRAME_RATE: u32 = 30;

/// Direction of travel of `v`, measured clockwise from the positive x-axis.
///
/// Because y points down on screen, a velocity of `(1, -1)` (up and to the
/// right) yields `+π/4`. The result lies in `(-π/2, 3π/2)`.
///
/// A zero vector reports `π/2`; callers scale by the speed, so the value
/// is irrelevant there.
pub fn heading_clockwise(v: &Vec2) -> f64 {
    let (v_x, v_y) = (v.x, v.y);
    if v_x > 0.0 {
        (-v_y / v_x).atan()
    } else if v_x < 0.0 {
        // atan only covers (-π/2, π/2)
        PI + (-v_y / v_x).atan()
    } else if v_y > 0.0 {
        -FRAC_PI_2
    } else {
        FRAC_PI_2
    }
}

/// Unit vector pointing along a clockwise heading in screen space.
#[inline]
pub fn direction_from_heading(theta: f64) -> Vec2 {
    Vec2::new(theta.cos(), -theta.sin())
}
