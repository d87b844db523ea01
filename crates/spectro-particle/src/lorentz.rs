//! Lorentz force on a charged particle in the plane of the screen.
//!
//! The electric field is a scalar along screen y (positive is down) and the
//! magnetic field a scalar along the screen normal (positive is out of the
//! page). The magnetic term is built from the clockwise heading of the
//! velocity rotated by a quarter turn, which fixes the sign convention:
//! a positive charge moving right through a positive field is pushed
//! toward +y.

use spectro_math::{Vec2, direction_from_heading, heading_clockwise};
use std::f64::consts::FRAC_PI_2;

/// Compute the magnetic force F = q |v| B, perpendicular to the velocity.
///
/// # Arguments
/// * `charge` - Particle charge
/// * `velocity` - Particle velocity (units per frame)
/// * `magnetic_field` - Field strength, positive out of the page
pub fn magnetic_force(charge: f64, velocity: &Vec2, magnetic_field: f64) -> Vec2 {
    let theta = heading_clockwise(velocity) - FRAC_PI_2;
    let magnitude = charge * velocity.norm() * magnetic_field;
    magnitude * direction_from_heading(theta)
}

/// Compute the electric force qE. The field acts along screen y only.
pub fn electric_force(charge: f64, electric_field: f64) -> Vec2 {
    Vec2::new(0.0, charge * electric_field)
}

/// Compute the total Lorentz force q (E + v × B).
pub fn lorentz_force(
    charge: f64,
    velocity: &Vec2,
    electric_field: f64,
    magnetic_field: f64,
) -> Vec2 {
    magnetic_force(charge, velocity, magnetic_field) + electric_force(charge, electric_field)
}
