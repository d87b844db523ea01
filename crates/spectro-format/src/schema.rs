//! Apparatus setup schema and file I/O.

use log::info;
use serde::{Deserialize, Serialize};
use spectro_apparatus::Apparatus;
use spectro_collision::Rect;
use std::path::Path;

use crate::error::Result;

/// Top-level apparatus setup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApparatusSpec {
    pub area: AreaSpec,
    /// Electric field strength, positive is down.
    pub electric_field: f64,
    /// Magnetic field strength, positive is out of the page.
    pub magnetic_field: f64,
    pub particle: ParticleSpec,
}

/// Bounding rectangle of the apparatus in screen units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaSpec {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for AreaSpec {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: 600.0,
            height: 300.0,
        }
    }
}

impl From<AreaSpec> for Rect {
    fn from(area: AreaSpec) -> Self {
        Rect::new(area.left, area.top, area.width, area.height)
    }
}

impl From<Rect> for AreaSpec {
    fn from(rect: Rect) -> Self {
        Self {
            left: rect.left,
            top: rect.top,
            width: rect.width,
            height: rect.height,
        }
    }
}

/// Launch parameters for the particle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleSpec {
    pub mass: f64,
    pub charge: f64,
    pub initial_x_velocity: f64,
}

impl Default for ParticleSpec {
    fn default() -> Self {
        Self {
            mass: 5.0,
            charge: 1.0,
            initial_x_velocity: 10.0,
        }
    }
}

impl ApparatusSpec {
    /// Parse a spec from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Capture the current configuration of a live apparatus.
    pub fn from_apparatus(apparatus: &Apparatus) -> Self {
        let config = apparatus.config();
        Self {
            area: (*apparatus.area()).into(),
            electric_field: apparatus.electric_field(),
            magnetic_field: apparatus.magnetic_field(),
            particle: ParticleSpec {
                mass: config.mass(),
                charge: config.charge(),
                initial_x_velocity: config.initial_x_velocity(),
            },
        }
    }

    /// Build an apparatus with its particle at the launch position.
    pub fn build(&self) -> Result<Apparatus> {
        Ok(Apparatus::new(
            self.electric_field,
            self.magnetic_field,
            self.particle.mass,
            self.particle.charge,
            self.particle.initial_x_velocity,
            self.area.into(),
        )?)
    }
}

/// Load a spec from a JSON file.
pub fn load_spec(path: impl AsRef<Path>) -> Result<ApparatusSpec> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let spec = ApparatusSpec::from_json(&json)?;
    info!("Loaded apparatus spec from {:?}", path);
    Ok(spec)
}

/// Write a spec to a JSON file.
pub fn export_spec(spec: &ApparatusSpec, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, spec.to_json()?)?;
    info!("Saved apparatus spec to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FormatError;
    use approx::assert_relative_eq;
    use spectro_particle::ParticleError;
    use tempfile::TempDir;

    #[test]
    fn test_empty_object_uses_defaults() {
        let spec = ApparatusSpec::from_json("{}").unwrap();
        assert_eq!(spec, ApparatusSpec::default());
    }

    #[test]
    fn test_partial_spec() {
        let spec = ApparatusSpec::from_json(
            r#"{
                "magnetic_field": -0.25,
                "particle": { "charge": -2 },
                "area": { "top": 40 }
            }"#,
        )
        .unwrap();

        assert_relative_eq!(spec.magnetic_field, -0.25);
        assert_relative_eq!(spec.particle.charge, -2.0);
        assert_relative_eq!(spec.particle.mass, 5.0);
        assert_relative_eq!(spec.area.top, 40.0);
        assert_relative_eq!(spec.area.width, 600.0);
    }

    #[test]
    fn test_malformed_json() {
        let result = ApparatusSpec::from_json("{ \"electric_field\": ");
        assert!(matches!(result, Err(FormatError::JsonError(_))));
    }

    #[test]
    fn test_build_apparatus() {
        let spec = ApparatusSpec {
            electric_field: 2.0,
            ..Default::default()
        };
        let app = spec.build().unwrap();

        assert_relative_eq!(app.electric_field(), 2.0);
        assert_relative_eq!(app.position().x, 5.0);
        assert_relative_eq!(app.position().y, 150.0);
    }

    #[test]
    fn test_build_rejects_invalid_particle() {
        let spec = ApparatusSpec {
            particle: ParticleSpec {
                mass: -1.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            spec.build(),
            Err(FormatError::Particle(ParticleError::InvalidParameter(_)))
        ));
    }

    #[test]
    fn test_build_rejects_non_finite_field() {
        let spec = ApparatusSpec {
            magnetic_field: f64::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            spec.build(),
            Err(FormatError::Particle(ParticleError::InvalidParameter(_)))
        ));
    }

    #[test]
    fn test_from_apparatus_captures_changes() {
        let mut app = ApparatusSpec::default().build().unwrap();
        app.set_magnetic_field(0.75).unwrap();
        app.set_charge(-1.0);
        app.set_initial_x_velocity(12.0).unwrap();

        let spec = ApparatusSpec::from_apparatus(&app);
        assert_relative_eq!(spec.magnetic_field, 0.75);
        assert_relative_eq!(spec.particle.charge, -1.0);
        assert_relative_eq!(spec.particle.initial_x_velocity, 12.0);
        assert_eq!(spec.area, AreaSpec::default());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("setup.spectro.json");

        let spec = ApparatusSpec {
            electric_field: 0.5,
            magnetic_field: 0.25,
            ..Default::default()
        };
        export_spec(&spec, &path).unwrap();

        let loaded = load_spec(&path).unwrap();
        assert_eq!(loaded, spec);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_spec(dir.path().join("missing.json"));
        assert!(matches!(result, Err(FormatError::IoError(_))));
    }
}
