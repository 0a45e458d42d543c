use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};

/// Inclusive numeric range with a starting value, mirroring a slider widget
/// on the host dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderSpec {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl SliderSpec {
    /// Clamp a widget value into this slider's range.
    pub fn clamp_value(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    fn check(&self, label: &str) -> Result<()> {
        if self.min <= self.default && self.default <= self.max {
            Ok(())
        } else {
            Err(Error::Config(format!(
                "{label}: expected min <= default <= max, got {} / {} / {}",
                self.min, self.default, self.max
            )))
        }
    }
}

/// The interactive control surface: page size plus the two outlier
/// thresholds. Defaults match the dashboard's stock widgets; a YAML file can
/// override them per deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Controls {
    pub page_size: usize,
    pub low_threshold: SliderSpec,
    pub high_threshold: SliderSpec,
}

impl Default for Controls {
    fn default() -> Self {
        Controls {
            page_size: 20,
            low_threshold: SliderSpec {
                min: 0.0,
                max: 100_000.0,
                default: 5_000.0,
            },
            high_threshold: SliderSpec {
                min: 100_000.0,
                max: 1_000_000.0,
                default: 300_000.0,
            },
        }
    }
}

impl Controls {
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let controls: Controls = serde_yaml::from_str(&text)?;
        controls.validate()?;
        info!(path = %path.display(), "loaded controls");
        Ok(controls)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::Config("page_size must be at least 1".into()));
        }
        self.low_threshold.check("low_threshold")?;
        self.high_threshold.check("high_threshold")?;
        Ok(())
    }
}
