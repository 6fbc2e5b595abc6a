//! Environmental readings fed to the rule engine.
//!
//! A snapshot bundles three independently loaded sections. A section that is
//! `None` has not been loaded yet and means "no data", never zero.
//!
//! Every numeric reading is a [`Reading`]. Files may give it as a bare number
//! or in the dashboard's `{ "value": 25, "unit": "%", "status": "warning" }`
//! form; both deserialize to the same value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One measured value with the dashboard's optional unit and status labels.
///
/// Serializes as a bare number when neither label is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ReadingRepr", into = "ReadingRepr")]
pub struct Reading {
    pub value: f64,
    /// Display unit, e.g. "%" or "ppm"
    pub unit: Option<String>,
    /// Display status, e.g. "optimal" or "warning"
    pub status: Option<String>,
}

impl Reading {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            unit: None,
            status: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

impl From<f64> for Reading {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ReadingRepr {
    Plain(f64),
    Measured {
        value: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        unit: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        status: Option<String>,
    },
}

impl From<ReadingRepr> for Reading {
    fn from(repr: ReadingRepr) -> Self {
        match repr {
            ReadingRepr::Plain(value) => Self::new(value),
            ReadingRepr::Measured {
                value,
                unit,
                status,
            } => Self {
                value,
                unit,
                status,
            },
        }
    }
}

impl From<Reading> for ReadingRepr {
    fn from(reading: Reading) -> Self {
        match reading {
            Reading {
                value,
                unit: None,
                status: None,
            } => ReadingRepr::Plain(value),
            Reading {
                value,
                unit,
                status,
            } => ReadingRepr::Measured {
                value,
                unit,
                status,
            },
        }
    }
}

/// Soil sensor readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilReadings {
    /// Volumetric moisture (%)
    pub moisture: Reading,
    /// Nitrogen (ppm)
    pub nitrogen: Reading,
    pub ph: Reading,
    /// Soil temperature (°C)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<Reading>,
    /// Phosphorus (ppm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phosphorus: Option<Reading>,
    /// Potassium (ppm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub potassium: Option<Reading>,
    /// Organic matter (%)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organic_matter: Option<Reading>,
}

/// Weather station readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReadings {
    /// Air temperature (°C)
    #[serde(alias = "temp")]
    pub temperature: Reading,
    /// Wind speed (km/h)
    pub wind_speed: Reading,
    /// Precipitation (mm)
    pub precipitation: Reading,
    /// Relative humidity (%)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<Reading>,
    /// Pressure (hPa)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<Reading>,
    /// Wind direction (degrees)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_direction: Option<Reading>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uv_index: Option<Reading>,
    /// Visibility (km)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Reading>,
}

/// Plant health indices, mostly satellite derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantReadings {
    /// Normalized Difference Vegetation Index, roughly [0, 1]
    pub ndvi: Reading,
    /// Disease risk estimate in [0, 1]
    pub disease_risk: Reading,
    /// Water stress estimate in [0, 1]
    pub water_stress: Reading,
    /// Enhanced Vegetation Index
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evi: Option<Reading>,
    /// Overall health score (%)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<Reading>,
    /// Free-text growth stage, e.g. "Vegetative"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_stage: Option<String>,
}

/// A point-in-time bundle of readings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil: Option<SoilReadings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherReadings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plants: Option<PlantReadings>,
}

impl EnvironmentalSnapshot {
    /// True when no section has been loaded.
    pub fn is_empty(&self) -> bool {
        self.soil.is_none() && self.weather.is_none() && self.plants.is_none()
    }

    /// Sections that are present, in rule-evaluation order.
    pub fn sections(&self) -> Vec<Section> {
        let mut sections = Vec::with_capacity(3);
        if self.soil.is_some() {
            sections.push(Section::Soil);
        }
        if self.weather.is_some() {
            sections.push(Section::Weather);
        }
        if self.plants.is_some() {
            sections.push(Section::Plants);
        }
        sections
    }
}

/// Snapshot section a rule depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Soil,
    Weather,
    Plants,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Soil => "soil",
            Section::Weather => "weather",
            Section::Plants => "plants",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_snapshot_is_empty() {
        let snapshot = EnvironmentalSnapshot::default();
        assert!(snapshot.is_empty());
        assert!(snapshot.sections().is_empty());
    }

    #[test]
    fn deserializes_dashboard_shape_with_temp_alias() {
        let json = r#"{
            "weather": { "temp": 31.0, "windSpeed": 4.0, "precipitation": 0.0, "humidity": 40 },
            "plants": { "ndvi": 0.6, "diseaseRisk": 0.1, "waterStress": 0.2, "growthStage": "Flowering" }
        }"#;
        let snapshot: EnvironmentalSnapshot = serde_json::from_str(json).unwrap();

        assert!(snapshot.soil.is_none());
        let weather = snapshot.weather.as_ref().unwrap();
        assert_eq!(weather.temperature.value, 31.0);
        assert_eq!(weather.humidity, Some(Reading::new(40.0)));
        assert_eq!(
            snapshot.plants.as_ref().unwrap().growth_stage.as_deref(),
            Some("Flowering")
        );
        assert_eq!(snapshot.sections(), vec![Section::Weather, Section::Plants]);
    }

    #[test]
    fn section_missing_required_reading_is_rejected() {
        let json = r#"{ "soil": { "moisture": 40.0, "ph": 6.5 } }"#;
        let result: Result<EnvironmentalSnapshot, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn absent_sections_are_omitted_on_output() {
        let snapshot = EnvironmentalSnapshot {
            soil: Some(SoilReadings {
                moisture: Reading::new(40.0).with_unit("%").with_status("optimal"),
                nitrogen: Reading::new(22.0),
                ph: Reading::new(6.5),
                temperature: None,
                phosphorus: None,
                potassium: None,
                organic_matter: Some(Reading::new(3.1)),
            }),
            weather: None,
            plants: None,
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert!(json.get("weather").is_none());
        assert_eq!(json["soil"]["organicMatter"], 3.1);
        assert!(json["soil"].get("phosphorus").is_none());
        assert_eq!(json["soil"]["moisture"]["unit"], "%");
        assert_eq!(json["soil"]["moisture"]["value"], 40.0);
        assert!(json["soil"]["moisture"].get("status").is_some());
    }

    #[test]
    fn reading_accepts_bare_and_labelled_forms() {
        let bare: Reading = serde_json::from_str("25").unwrap();
        assert_eq!(bare, Reading::new(25.0));

        let labelled: Reading =
            serde_json::from_str(r#"{ "value": 25, "unit": "%", "status": "warning" }"#).unwrap();
        assert_eq!(labelled, Reading::new(25.0).with_unit("%").with_status("warning"));

        let value_only: Reading = serde_json::from_str(r#"{ "value": 0.7 }"#).unwrap();
        assert_eq!(value_only, Reading::new(0.7));
        assert_eq!(serde_json::to_string(&value_only).unwrap(), "0.7");
    }

    #[test]
    fn reading_without_value_is_rejected() {
        let result: Result<Reading, _> = serde_json::from_str(r#"{ "unit": "%" }"#);
        assert!(result.is_err());
    }
}
