//! JSON configuration format for spectro.
//!
//! A `.spectro.json` file describes one apparatus setup: its area, the two
//! field strengths, and the particle launch parameters. Every field is
//! optional and falls back to the classroom default.
//!
//! ```json
//! {
//!   "area": { "left": 0, "top": 0, "width": 600, "height": 300 },
//!   "electric_field": 0.5,
//!   "magnetic_field": 0.05,
//!   "particle": { "mass": 5, "charge": 1, "initial_x_velocity": 10 }
//! }
//! ```

pub mod error;
pub mod schema;

pub use error::{FormatError, Result};
pub use schema::{ApparatusSpec, AreaSpec, ParticleSpec, export_spec, load_spec};
