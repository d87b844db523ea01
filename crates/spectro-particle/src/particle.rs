//! Charged particle state and single-frame integration.

use spectro_collision::{Rect, Shape};
use spectro_math::Vec2;

use crate::error::{Result, require_positive};
use crate::lorentz::lorentz_force;

/// Collision radius of every particle (screen units).
pub const RADIUS: f64 = 5.0;

/// Sign classification of a particle's charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Neutral,
    Negative,
}

impl Polarity {
    /// Classify a charge by its sign.
    pub fn from_charge(charge: f64) -> Self {
        if charge > 0.0 {
            Polarity::Positive
        } else if charge < 0.0 {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }
}

/// Launch parameters for new particles.
///
/// Mass and initial x velocity are validated on the way in, so launching
/// from a config cannot fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleConfig {
    mass: f64,
    charge: f64,
    initial_x_velocity: f64,
}

impl ParticleConfig {
    pub fn new(mass: f64, charge: f64, initial_x_velocity: f64) -> Result<Self> {
        Ok(Self {
            mass: require_positive("mass", mass)?,
            charge,
            initial_x_velocity: require_positive("initial x velocity", initial_x_velocity)?,
        })
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn charge(&self) -> f64 {
        self.charge
    }

    pub fn initial_x_velocity(&self) -> f64 {
        self.initial_x_velocity
    }

    pub fn set_mass(&mut self, mass: f64) -> Result<()> {
        self.mass = require_positive("mass", mass)?;
        Ok(())
    }

    pub fn set_charge(&mut self, charge: f64) {
        self.charge = charge;
    }

    pub fn set_initial_x_velocity(&mut self, initial_x_velocity: f64) -> Result<()> {
        self.initial_x_velocity = require_positive("initial x velocity", initial_x_velocity)?;
        Ok(())
    }
}

/// A charged particle injected rightward into the apparatus.
///
/// Once stopped, the particle never moves again; start a new one instead.
#[derive(Debug, Clone)]
pub struct ChargedParticle {
    mass: f64,
    charge: f64,
    position: Vec2,
    velocity: Vec2,
    stopped: bool,
}

impl ChargedParticle {
    /// Create a particle moving along +x at `initial_x_velocity`.
    ///
    /// Fails with `InvalidParameter` if `mass` or `initial_x_velocity` is
    /// not strictly positive.
    pub fn new(mass: f64, charge: f64, initial_x_velocity: f64, position: Vec2) -> Result<Self> {
        let config = ParticleConfig::new(mass, charge, initial_x_velocity)?;
        Ok(Self::launch(&config, position))
    }

    /// Create a particle from already validated launch parameters.
    pub fn launch(config: &ParticleConfig, position: Vec2) -> Self {
        Self {
            mass: config.mass,
            charge: config.charge,
            position,
            velocity: Vec2::new(config.initial_x_velocity, 0.0),
            stopped: false,
        }
    }

    /// Advance one frame under the given fields.
    ///
    /// Explicit Euler with a unit time step: the position moves with the
    /// old velocity, then the velocity picks up F/m evaluated at that old
    /// velocity. Does nothing once stopped.
    pub fn step(&mut self, electric_field: f64, magnetic_field: f64) {
        if self.stopped {
            return;
        }

        self.position += self.velocity;

        let force = lorentz_force(self.charge, &self.velocity, electric_field, magnetic_field);
        // a = F/m
        self.velocity += force / self.mass;
    }

    /// Freeze the particle permanently.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Replace the mass used for subsequent frames.
    pub fn set_mass(&mut self, mass: f64) -> Result<()> {
        self.mass = require_positive("mass", mass)?;
        Ok(())
    }

    pub fn set_charge(&mut self, charge: f64) {
        self.charge = charge;
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn charge(&self) -> f64 {
        self.charge
    }

    pub fn polarity(&self) -> Polarity {
        Polarity::from_charge(self.charge)
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Collision circle at the current position.
    pub fn shape(&self) -> Shape {
        Shape::Circle {
            center: self.position,
            radius: RADIUS,
        }
    }

    /// Check if the particle's collision circle overlaps `rect`.
    pub fn collides_with(&self, rect: &Rect) -> bool {
        self.shape().intersects(rect)
    }
}
