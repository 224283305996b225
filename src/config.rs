use std::path::Path;

use anyhow::{anyhow, Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::normalize::Normalization;
use crate::turning_angle::DEFAULT_TOLERANCE;

/// Settings of a [`PolygonSet`](crate::PolygonSet).
///
/// Can be read from TOML:
///
/// ```toml
/// tolerance = 1e-6
///
/// [normalization]
/// offset = [25.0, 45.0]
/// scale = 50.0
/// ```
///
/// Every key is optional.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Angle, in radians, the magnitude of an angle sum must exceed for a point to be inside.
    pub tolerance: f64,
    /// Applied to every ring before it is turned into a polygon.
    pub normalization: Normalization,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            normalization: Normalization::IDENTITY,
        }
    }
}

impl ClassifierConfig {
    /// Parses and validates a configuration.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("Invalid classifier configuration.")?;
        config.validate()?;
        debug!("Loaded classifier configuration: {:?}", config);
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read {}.", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("In {}.", path.display()))
    }

    /// Fails if the tolerance is not a positive number or if the normalization is not invertible.
    pub fn validate(&self) -> Result<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.) {
            return Err(anyhow!(
                "The tolerance should be a positive number, got {}.",
                self.tolerance
            ));
        }
        let Normalization { offset, scale } = self.normalization;
        if !(scale.is_finite() && scale != 0.) {
            return Err(anyhow!(
                "The scale should be a non-zero number, got {}.",
                scale
            ));
        }
        if offset.iter().any(|o| !o.is_finite()) {
            return Err(anyhow!("The offset should be finite, got {:?}.", offset));
        }
        Ok(())
    }
}
