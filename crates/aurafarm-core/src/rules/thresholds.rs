//! Threshold policy for the task rules.
//!
//! The defaults are the dashboard's rule-of-thumb values. They are policy,
//! not agronomic constants, so they can be overridden from config.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Trigger thresholds. All comparisons against them are strict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleThresholds {
    /// Irrigate when soil moisture (%) drops below this
    #[serde(default = "default_soil_moisture_min")]
    pub soil_moisture_min: f64,
    /// Fertilize when nitrogen (ppm) drops below this
    #[serde(default = "default_soil_nitrogen_min")]
    pub soil_nitrogen_min: f64,
    #[serde(default = "default_soil_ph_min")]
    pub soil_ph_min: f64,
    #[serde(default = "default_soil_ph_max")]
    pub soil_ph_max: f64,
    /// Monitor drainage above this rainfall (mm)
    #[serde(default = "default_precipitation_max")]
    pub precipitation_max: f64,
    /// Increase irrigation above this air temperature (°C)
    #[serde(default = "default_temperature_max")]
    pub temperature_max: f64,
    /// Check plant stability above this wind speed (km/h)
    #[serde(default = "default_wind_speed_max")]
    pub wind_speed_max: f64,
    #[serde(default = "default_ndvi_min")]
    pub ndvi_min: f64,
    #[serde(default = "default_disease_risk_max")]
    pub disease_risk_max: f64,
    #[serde(default = "default_water_stress_max")]
    pub water_stress_max: f64,
}

fn default_soil_moisture_min() -> f64 {
    30.0
}
fn default_soil_nitrogen_min() -> f64 {
    20.0
}
fn default_soil_ph_min() -> f64 {
    6.0
}
fn default_soil_ph_max() -> f64 {
    7.5
}
fn default_precipitation_max() -> f64 {
    5.0
}
fn default_temperature_max() -> f64 {
    30.0
}
fn default_wind_speed_max() -> f64 {
    20.0
}
fn default_ndvi_min() -> f64 {
    0.5
}
fn default_disease_risk_max() -> f64 {
    0.3
}
fn default_water_stress_max() -> f64 {
    0.3
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            soil_moisture_min: default_soil_moisture_min(),
            soil_nitrogen_min: default_soil_nitrogen_min(),
            soil_ph_min: default_soil_ph_min(),
            soil_ph_max: default_soil_ph_max(),
            precipitation_max: default_precipitation_max(),
            temperature_max: default_temperature_max(),
            wind_speed_max: default_wind_speed_max(),
            ndvi_min: default_ndvi_min(),
            disease_risk_max: default_disease_risk_max(),
            water_stress_max: default_water_stress_max(),
        }
    }
}

impl RuleThresholds {
    /// Reject non-finite values and an inverted pH band.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` naming the first offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("soil_moisture_min", self.soil_moisture_min),
            ("soil_nitrogen_min", self.soil_nitrogen_min),
            ("soil_ph_min", self.soil_ph_min),
            ("soil_ph_max", self.soil_ph_max),
            ("precipitation_max", self.precipitation_max),
            ("temperature_max", self.temperature_max),
            ("wind_speed_max", self.wind_speed_max),
            ("ndvi_min", self.ndvi_min),
            ("disease_risk_max", self.disease_risk_max),
            ("water_stress_max", self.water_stress_max),
        ];

        for (key, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::InvalidValue {
                    key: format!("thresholds.{key}"),
                    message: format!("{value} is not a finite number"),
                });
            }
        }

        if self.soil_ph_min > self.soil_ph_max {
            return Err(ConfigError::InvalidValue {
                key: "thresholds.soil_ph_min".to_string(),
                message: format!(
                    "{} exceeds soil_ph_max ({})",
                    self.soil_ph_min, self.soil_ph_max
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(RuleThresholds::default().validate().is_ok());
    }

    #[test]
    fn inverted_ph_band_is_rejected() {
        let thresholds = RuleThresholds {
            soil_ph_min: 8.0,
            ..Default::default()
        };
        let err = thresholds.validate().unwrap_err();
        assert!(err.to_string().contains("thresholds.soil_ph_min"));
    }

    #[test]
    fn nan_threshold_is_rejected() {
        let thresholds = RuleThresholds {
            ndvi_min: f64::NAN,
            ..Default::default()
        };
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let thresholds: RuleThresholds = toml::from_str("soil_moisture_min = 25.0").unwrap();
        assert_eq!(thresholds.soil_moisture_min, 25.0);
        assert_eq!(thresholds.soil_ph_max, 7.5);
        assert_eq!(thresholds.water_stress_max, 0.3);
    }
}
