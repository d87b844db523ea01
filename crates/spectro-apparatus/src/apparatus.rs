//! Frame orchestration for a single particle inside the spectrometer.

use log::{debug, trace};
use spectro_collision::Rect;
use spectro_math::Vec2;
use spectro_particle::error::{require_finite, require_positive};
use spectro_particle::{ChargedParticle, ParticleConfig, RADIUS, Result};

use crate::walls::generate_walls;

/// Force law applied to the particle during a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRegime {
    /// Left half: velocity selector, both fields act.
    ElectricAndMagnetic,
    /// Right half: pure magnetic deflection.
    MagneticOnly,
}

/// A mass spectrometer holding one live particle.
///
/// The walls are derived from `area` once at construction. Field strengths
/// and launch parameters may change between frames.
#[derive(Debug, Clone)]
pub struct Apparatus {
    /// Electric field strength, positive is down.
    electric_field: f64,
    /// Magnetic field strength, positive is out of the page.
    magnetic_field: f64,
    config: ParticleConfig,
    area: Rect,
    walls: [Rect; 4],
    particle: ChargedParticle,
    frame: u64,
}

impl Apparatus {
    /// Create an apparatus and launch its first particle.
    ///
    /// Fails with `InvalidParameter` for a non-positive mass, initial x
    /// velocity, or area dimension, and for non-finite field strengths.
    pub fn new(
        electric_field: f64,
        magnetic_field: f64,
        mass: f64,
        charge: f64,
        initial_x_velocity: f64,
        area: Rect,
    ) -> Result<Self> {
        let electric_field = require_finite("electric field", electric_field)?;
        let magnetic_field = require_finite("magnetic field", magnetic_field)?;
        require_positive("area width", area.width)?;
        require_positive("area height", area.height)?;
        let config = ParticleConfig::new(mass, charge, initial_x_velocity)?;

        Ok(Self {
            electric_field,
            magnetic_field,
            config,
            area,
            walls: generate_walls(&area),
            particle: ChargedParticle::launch(&config, launch_position(&area)),
            frame: 0,
        })
    }

    /// Field regime for the particle's current position.
    pub fn field_regime(&self) -> FieldRegime {
        if self.particle.position().x > self.area.center_x() {
            FieldRegime::MagneticOnly
        } else {
            FieldRegime::ElectricAndMagnetic
        }
    }

    /// Advance the simulation by one frame.
    ///
    /// Steps the particle under the regime for its current position, then
    /// stops it if it overlaps any wall or has left the vertical extent of
    /// the area. A stopped particle is left untouched.
    pub fn advance_frame(&mut self) {
        if self.particle.is_stopped() {
            return;
        }

        let regime = self.field_regime();
        trace!("frame {}: {:?}", self.frame, regime);
        match regime {
            FieldRegime::MagneticOnly => self.particle.step(0.0, self.magnetic_field),
            FieldRegime::ElectricAndMagnetic => {
                self.particle.step(self.electric_field, self.magnetic_field)
            }
        }
        self.frame += 1;

        let position = self.particle.position();
        for (i, wall) in self.walls.iter().enumerate() {
            if self.particle.collides_with(wall) {
                debug!("particle hit wall {} at ({:.2}, {:.2})", i, position.x, position.y);
                self.particle.stop();
            }
        }

        if position.y < self.area.top || position.y > self.area.bottom() {
            debug!("particle left the apparatus at ({:.2}, {:.2})", position.x, position.y);
            self.particle.stop();
        }
    }

    /// Replace the particle with a fresh one at the launch position.
    pub fn reset_particle(&mut self) {
        self.particle = ChargedParticle::launch(&self.config, launch_position(&self.area));
        self.frame = 0;
        debug!(
            "particle reset: mass={}, charge={}, vx={}",
            self.config.mass(),
            self.config.charge(),
            self.config.initial_x_velocity()
        );
    }

    /// Update the mass of the live particle and of future launches.
    pub fn set_mass(&mut self, mass: f64) -> Result<()> {
        self.particle.set_mass(mass)?;
        self.config.set_mass(mass)
    }

    /// Update the charge of the live particle and of future launches.
    pub fn set_charge(&mut self, charge: f64) {
        self.particle.set_charge(charge);
        self.config.set_charge(charge);
    }

    /// Update the launch velocity. Takes effect at the next reset.
    pub fn set_initial_x_velocity(&mut self, initial_x_velocity: f64) -> Result<()> {
        self.config.set_initial_x_velocity(initial_x_velocity)
    }

    /// Update the electric field read by the next frame. Must be finite.
    pub fn set_electric_field(&mut self, electric_field: f64) -> Result<()> {
        self.electric_field = require_finite("electric field", electric_field)?;
        Ok(())
    }

    /// Update the magnetic field read by the next frame. Must be finite.
    pub fn set_magnetic_field(&mut self, magnetic_field: f64) -> Result<()> {
        self.magnetic_field = require_finite("magnetic field", magnetic_field)?;
        Ok(())
    }

    pub fn electric_field(&self) -> f64 {
        self.electric_field
    }

    pub fn magnetic_field(&self) -> f64 {
        self.magnetic_field
    }

    /// Launch parameters used by the next reset.
    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn area(&self) -> &Rect {
        &self.area
    }

    pub fn walls(&self) -> &[Rect; 4] {
        &self.walls
    }

    pub fn particle(&self) -> &ChargedParticle {
        &self.particle
    }

    pub fn position(&self) -> Vec2 {
        self.particle.position()
    }

    pub fn is_stopped(&self) -> bool {
        self.particle.is_stopped()
    }

    /// Frames the current particle has moved since launch.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

/// Just inside the left edge, vertically centered.
fn launch_position(area: &Rect) -> Vec2 {
    Vec2::new(area.left + RADIUS, area.center_y())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use spectro_particle::ParticleError;

    fn apparatus(electric_field: f64, magnetic_field: f64) -> Apparatus {
        Apparatus::new(
            electric_field,
            magnetic_field,
            5.0,
            1.0,
            10.0,
            Rect::new(0.0, 0.0, 600.0, 300.0),
        )
        .unwrap()
    }

    #[test]
    fn test_initial_particle() {
        let app = apparatus(0.0, 0.0);
        assert_eq!(app.position(), Vec2::new(RADIUS, 150.0));
        assert!(!app.is_stopped());
        assert_eq!(app.frame(), 0);
        assert_eq!(app.field_regime(), FieldRegime::ElectricAndMagnetic);
    }

    #[test]
    fn test_invalid_construction() {
        let area = Rect::new(0.0, 0.0, 600.0, 300.0);
        assert!(matches!(
            Apparatus::new(0.0, 0.0, 0.0, 1.0, 10.0, area),
            Err(ParticleError::InvalidParameter(_))
        ));
        assert!(Apparatus::new(0.0, 0.0, 5.0, 1.0, -10.0, area).is_err());
        let flat = Rect::new(0.0, 0.0, 0.0, 300.0);
        let inverted = Rect::new(0.0, 0.0, 600.0, -1.0);
        assert!(Apparatus::new(0.0, 0.0, 5.0, 1.0, 10.0, flat).is_err());
        assert!(Apparatus::new(0.0, 0.0, 5.0, 1.0, 10.0, inverted).is_err());
    }

    #[test]
    fn test_non_finite_fields_rejected() {
        let area = Rect::new(0.0, 0.0, 600.0, 300.0);
        assert!(matches!(
            Apparatus::new(f64::NAN, 0.0, 5.0, 1.0, 10.0, area),
            Err(ParticleError::InvalidParameter(_))
        ));
        assert!(Apparatus::new(0.0, f64::INFINITY, 5.0, 1.0, 10.0, area).is_err());

        let mut app = apparatus(2.0, 0.1);
        assert!(app.set_electric_field(f64::NAN).is_err());
        assert!(app.set_magnetic_field(f64::NEG_INFINITY).is_err());
        assert_eq!(app.electric_field(), 2.0);
        assert_eq!(app.magnetic_field(), 0.1);

        // the rejected values never reach the particle
        for _ in 0..10 {
            app.advance_frame();
        }
        assert!(app.position().x.is_finite());
        assert!(app.position().y.is_finite());
    }

    #[test]
    fn test_one_frame_without_fields() {
        let mut app = apparatus(0.0, 0.0);
        app.advance_frame();
        assert_eq!(app.position(), Vec2::new(RADIUS + 10.0, 150.0));
        assert!(!app.is_stopped());
        assert_eq!(app.frame(), 1);

        app.reset_particle();
        assert_eq!(app.position(), Vec2::new(RADIUS, 150.0));
        assert_eq!(app.frame(), 0);
    }

    #[test]
    fn test_launch_position_follows_area_offset() {
        let app = Apparatus::new(0.0, 0.0, 1.0, 1.0, 1.0, Rect::new(30.0, 40.0, 200.0, 100.0))
            .unwrap();
        assert_eq!(app.position(), Vec2::new(30.0 + RADIUS, 90.0));
    }

    #[test]
    fn test_straight_through_channel() {
        let mut app = apparatus(0.0, 0.0);
        // 60 frames carry the particle from x=5 to x=605, past the right edge
        for _ in 0..60 {
            app.advance_frame();
        }
        assert!(!app.is_stopped());
        assert_eq!(app.position(), Vec2::new(605.0, 150.0));
    }

    #[test]
    fn test_electric_field_drives_into_lower_wall() {
        // a_y = qE/m = 1 * 25 / 5 = 5 per frame
        let mut app = apparatus(25.0, 0.0);

        // y: 150, 155, 165 after frames 1..3, clear of the wall at y >= 175
        for _ in 0..3 {
            app.advance_frame();
            assert!(!app.is_stopped());
        }

        // y = 180 overlaps the lower horizontal wall
        app.advance_frame();
        assert!(app.is_stopped());
        assert_eq!(app.position(), Vec2::new(45.0, 180.0));
    }

    #[test]
    fn test_stopped_particle_is_untouched() {
        let mut app = apparatus(25.0, 0.0);
        while !app.is_stopped() {
            app.advance_frame();
        }
        let position = app.position();
        let velocity = app.particle().velocity();
        let frame = app.frame();

        app.set_electric_field(-100.0).unwrap();
        app.set_magnetic_field(3.0).unwrap();
        for _ in 0..10 {
            app.advance_frame();
        }

        assert!(app.is_stopped());
        assert_eq!(app.position(), position);
        assert_eq!(app.particle().velocity(), velocity);
        assert_eq!(app.frame(), frame);
    }

    #[test]
    fn test_vertical_exit_stops_on_crossing_frame() {
        // a_y = 1 * 5000 / 5 = 1000: the second frame jumps past every wall
        let mut app = apparatus(5000.0, 0.0);
        app.advance_frame();
        assert!(!app.is_stopped());

        app.advance_frame();
        assert!(app.is_stopped());
        assert_eq!(app.position(), Vec2::new(25.0, 1150.0));

        app.advance_frame();
        assert_eq!(app.position(), Vec2::new(25.0, 1150.0));
    }

    #[test]
    fn test_electric_field_suppressed_in_right_half() {
        let mut app = apparatus(0.0, 0.0);
        // move to x = 305, just past the midpoint
        for _ in 0..30 {
            app.advance_frame();
        }
        assert_eq!(app.field_regime(), FieldRegime::MagneticOnly);

        app.set_electric_field(1e6).unwrap();
        app.advance_frame();
        assert!(!app.is_stopped());
        assert_eq!(app.particle().velocity(), Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_midpoint_still_uses_electric_field() {
        let mut app = apparatus(0.0, 0.0);
        // lands exactly on the midpoint, which still belongs to the left half
        app.set_initial_x_velocity(295.0).unwrap();
        app.reset_particle();
        app.advance_frame();
        assert_eq!(app.position().x, 300.0);
        assert_eq!(app.field_regime(), FieldRegime::ElectricAndMagnetic);
    }

    #[test]
    fn test_magnetic_field_curves_in_right_half() {
        let mut app = apparatus(0.0, 0.0);
        for _ in 0..31 {
            app.advance_frame();
        }
        // q v B / m = 1 * 10 * 0.5 / 5 = 1 toward +y
        app.set_magnetic_field(0.5).unwrap();
        app.advance_frame();
        assert_relative_eq!(app.particle().velocity().y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_set_mass_forwards_to_particle() {
        let mut app = apparatus(0.0, 0.0);
        app.set_mass(2.0).unwrap();
        assert_eq!(app.particle().mass(), 2.0);
        assert_eq!(app.config().mass(), 2.0);

        assert!(app.set_mass(-1.0).is_err());
        assert_eq!(app.particle().mass(), 2.0);
        assert_eq!(app.config().mass(), 2.0);

        app.reset_particle();
        assert_eq!(app.particle().mass(), 2.0);
    }

    #[test]
    fn test_set_charge_forwards_to_particle() {
        let mut app = apparatus(0.0, 0.0);
        app.set_charge(-3.0);
        assert_eq!(app.particle().charge(), -3.0);
        app.reset_particle();
        assert_eq!(app.particle().charge(), -3.0);
    }

    #[test]
    fn test_initial_velocity_applies_on_reset() {
        let mut app = apparatus(0.0, 0.0);
        app.set_initial_x_velocity(4.0).unwrap();
        assert_eq!(app.particle().velocity(), Vec2::new(10.0, 0.0));

        app.reset_particle();
        assert_eq!(app.particle().velocity(), Vec2::new(4.0, 0.0));

        assert!(matches!(
            app.set_initial_x_velocity(0.0),
            Err(ParticleError::InvalidParameter(_))
        ));
        assert_eq!(app.config().initial_x_velocity(), 4.0);
    }

    #[test]
    fn test_reset_revives_after_stop() {
        let mut app = apparatus(5000.0, 0.0);
        app.advance_frame();
        app.advance_frame();
        assert!(app.is_stopped());

        app.reset_particle();
        assert!(!app.is_stopped());
        assert_eq!(app.position(), Vec2::new(RADIUS, 150.0));
    }

    #[test]
    fn test_walls_fixed_after_construction() {
        let mut app = apparatus(0.0, 0.0);
        let walls = *app.walls();
        app.set_mass(1.0).unwrap();
        app.reset_particle();
        assert_eq!(*app.walls(), walls);
    }
}
