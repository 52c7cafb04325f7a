//! Browser-independent core of the mousegram viewer.
//!
//! Everything that can be computed without a DOM lives here: per-row
//! averaging of the subject columns, linear scales with nice domains and
//! tick generation, the horizontal zoom transform, light/dark/estrus phase
//! bands, panel geometry and the scatter drill-down window.

pub mod config;
pub mod error;
pub mod layout;
pub mod loader;
pub mod phase;
pub mod scale;
pub mod scatter;
pub mod series;
pub mod types;
pub mod zoom;

pub use config::AppConfig;
pub use error::LoadError;
pub use series::{Series, Session};
pub use types::{Measurement, Sample, Sex};
