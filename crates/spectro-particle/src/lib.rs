//! Charged particle dynamics for the spectro mass spectrometer.
//!
//! A particle carries mass, charge, position, and velocity in screen space
//! and advances one frame at a time under a vertical electric field and an
//! out-of-page magnetic field.
//!
//! # Example
//!
//! ```
//! use spectro_math::Vec2;
//! use spectro_particle::ChargedParticle;
//!
//! let mut particle = ChargedParticle::new(5.0, 1.0, 10.0, Vec2::new(5.0, 150.0)).unwrap();
//! particle.step(0.0, 0.0);
//! assert_eq!(particle.position(), Vec2::new(15.0, 150.0));
//! ```

pub mod error;
pub mod lorentz;
pub mod particle;

pub use error::{ParticleError, Result};
pub use lorentz::{electric_force, lorentz_force, magnetic_force};
pub use particle::{ChargedParticle, ParticleConfig, Polarity, RADIUS};
