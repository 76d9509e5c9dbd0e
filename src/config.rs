//! Configuration for track reconstruction

use crate::error::{Result, TrackError};
use serde::Deserialize;
use std::path::Path;

/// Reconstruction settings.
///
/// Tolerances are in metres, the goal tolerance in grid cells. The benthic
/// tolerance defaults to infinity, which disables the clearance check (TOML
/// has no literal for it; omit the key to keep the default).
#[derive(Clone, Debug, Deserialize)]
pub struct TrackerConfig {
    /// Spatial slack around a goal anchor, in cells (detector range)
    #[serde(default)]
    pub goal_tolerance: i32,

    /// Base allowed apparent penetration into the seabed (metres)
    #[serde(default)]
    pub seabed_tolerance: f64,

    /// Per-attempt growth rate of the seabed tolerance (0 disables)
    #[serde(default)]
    pub seabed_adapt_rate: f64,

    /// Base allowed clearance above the seabed (metres, default unlimited)
    #[serde(default = "default_benthic_tolerance")]
    pub benthic_tolerance: f64,

    /// Per-attempt growth rate of the benthic tolerance (0 disables)
    #[serde(default)]
    pub benthic_adapt_rate: f64,

    /// Number of widened retries after the base attempt (0 = single attempt)
    #[serde(default)]
    pub adaptation_steps: u32,
}

fn default_benthic_tolerance() -> f64 {
    f64::INFINITY
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            goal_tolerance: 0,
            seabed_tolerance: 0.0,
            seabed_adapt_rate: 0.0,
            benthic_tolerance: default_benthic_tolerance(),
            benthic_adapt_rate: 0.0,
            adaptation_steps: 0,
        }
    }
}

impl TrackerConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TrackError::Config(format!("Failed to read config file: {}", e)))?;
        let config: TrackerConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the reconstruction cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.goal_tolerance < 0 {
            return Err(TrackError::Config(
                "goal_tolerance must be non-negative".into(),
            ));
        }
        if self.seabed_tolerance < 0.0 || self.benthic_tolerance < 0.0 {
            return Err(TrackError::Config(
                "tolerances must be non-negative".into(),
            ));
        }
        if self.seabed_adapt_rate < 0.0 || self.benthic_adapt_rate < 0.0 {
            return Err(TrackError::Config(
                "adaptation rates must be non-negative".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let c = TrackerConfig::default();
        assert_eq!(c.goal_tolerance, 0);
        assert_eq!(c.seabed_tolerance, 0.0);
        assert_eq!(c.seabed_adapt_rate, 0.0);
        assert!(c.benthic_tolerance.is_infinite());
        assert_eq!(c.benthic_adapt_rate, 0.0);
        assert_eq!(c.adaptation_steps, 0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let c: TrackerConfig =
            toml::from_str("seabed_tolerance = 2.5\nadaptation_steps = 3\n").unwrap();
        assert_eq!(c.seabed_tolerance, 2.5);
        assert_eq!(c.adaptation_steps, 3);
        assert!(c.benthic_tolerance.is_infinite());
        assert_eq!(c.goal_tolerance, 0);
    }

    #[test]
    fn test_validate_rejects_negative() {
        let mut c = TrackerConfig::default();
        c.seabed_adapt_rate = -0.1;
        assert!(c.validate().is_err());

        let mut c = TrackerConfig::default();
        c.goal_tolerance = -1;
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "goal_tolerance = 1").unwrap();
        writeln!(file, "seabed_tolerance = 10.0").unwrap();
        writeln!(file, "seabed_adapt_rate = 0.1").unwrap();
        let c = TrackerConfig::load(file.path()).unwrap();
        assert_eq!(c.goal_tolerance, 1);
        assert_eq!(c.seabed_tolerance, 10.0);
        assert_eq!(c.seabed_adapt_rate, 0.1);
    }
}
