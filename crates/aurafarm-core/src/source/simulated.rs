//! Simulated field data.
//!
//! Without jitter the source always returns the same baseline snapshot.
//! With jitter the primary readings wander around the baseline, driven by a
//! PCG generator so a seed reproduces the same sequence.

use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;

use super::SnapshotSource;
use crate::error::SourceError;
use crate::readings::{
    EnvironmentalSnapshot, PlantReadings, Reading, SoilReadings, WeatherReadings,
};

/// Source returning simulated readings.
#[derive(Debug, Clone)]
pub struct SimulatedSource {
    baseline: EnvironmentalSnapshot,
    rng: Option<Mcg128Xsl64>,
}

impl SimulatedSource {
    /// Source that always returns [`SimulatedSource::baseline`].
    pub fn new() -> Self {
        Self {
            baseline: Self::baseline(),
            rng: None,
        }
    }

    /// Source that perturbs the baseline on every fetch.
    ///
    /// `None` seeds from OS entropy.
    pub fn with_jitter(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
            None => Mcg128Xsl64::from_entropy(),
        };
        Self {
            baseline: Self::baseline(),
            rng: Some(rng),
        }
    }

    /// The stock snapshot shown before any real data arrives, labelled the
    /// way the dashboard labels it.
    pub fn baseline() -> EnvironmentalSnapshot {
        EnvironmentalSnapshot {
            soil: Some(SoilReadings {
                moisture: measured(45.0, "%", Some("optimal")),
                nitrogen: measured(25.0, "ppm", Some("warning")),
                ph: measured(6.8, "", Some("optimal")),
                temperature: Some(measured(18.5, "°C", Some("optimal"))),
                phosphorus: Some(measured(15.0, "ppm", Some("optimal"))),
                potassium: Some(measured(180.0, "ppm", Some("optimal"))),
                organic_matter: Some(measured(3.2, "%", Some("optimal"))),
            }),
            weather: Some(WeatherReadings {
                temperature: measured(22.5, "°C", None),
                wind_speed: measured(12.3, "km/h", None),
                precipitation: measured(0.0, "mm", None),
                humidity: Some(measured(65.0, "%", None)),
                pressure: Some(measured(1013.25, "hPa", None)),
                wind_direction: Some(measured(180.0, "°", None)),
                uv_index: Some(measured(6.0, "", None)),
                visibility: Some(measured(10.0, "km", None)),
            }),
            plants: Some(PlantReadings {
                ndvi: Reading::new(0.72).with_status("good"),
                disease_risk: Reading::new(0.12).with_status("low"),
                water_stress: Reading::new(0.15).with_status("low"),
                evi: Some(Reading::new(0.45).with_status("good")),
                health: Some(measured(85.0, "%", Some("good"))),
                growth_stage: Some("Vegetative".to_string()),
            }),
        }
    }

    fn jittered(&self, rng: &mut Mcg128Xsl64) -> EnvironmentalSnapshot {
        let mut snapshot = self.baseline.clone();

        if let Some(soil) = snapshot.soil.as_mut() {
            wander(rng, &mut soil.moisture, 20.0, 0.0, 100.0);
            wander(rng, &mut soil.nitrogen, 10.0, 0.0, f64::MAX);
            wander(rng, &mut soil.ph, 1.0, 0.0, 14.0);
        }
        if let Some(weather) = snapshot.weather.as_mut() {
            wander(rng, &mut weather.temperature, 10.0, -40.0, 60.0);
            wander(rng, &mut weather.wind_speed, 12.0, 0.0, f64::MAX);
            let rain = weather.precipitation.value + rng.gen_range(0.0..=8.0);
            weather.precipitation.value = round2(rain);
        }
        if let Some(plants) = snapshot.plants.as_mut() {
            wander(rng, &mut plants.ndvi, 0.3, 0.0, 1.0);
            wander(rng, &mut plants.disease_risk, 0.3, 0.0, 1.0);
            wander(rng, &mut plants.water_stress, 0.3, 0.0, 1.0);
        }

        snapshot
    }
}

impl Default for SimulatedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotSource for SimulatedSource {
    fn name(&self) -> &str {
        "simulated"
    }

    fn fetch(&mut self) -> Result<EnvironmentalSnapshot, SourceError> {
        match self.rng.take() {
            Some(mut rng) => {
                let snapshot = self.jittered(&mut rng);
                self.rng = Some(rng);
                Ok(snapshot)
            }
            None => Ok(self.baseline.clone()),
        }
    }
}

fn measured(value: f64, unit: &str, status: Option<&str>) -> Reading {
    Reading {
        value,
        unit: Some(unit.to_string()),
        status: status.map(str::to_string),
    }
}

/// Move the reading by up to `spread` either way, clamped to `[min, max]`.
///
/// The status label no longer describes the new value, so it is dropped.
fn wander(rng: &mut Mcg128Xsl64, reading: &mut Reading, spread: f64, min: f64, max: f64) {
    let value = reading.value + rng.gen_range(-spread..=spread);
    reading.value = round2(value.clamp(min, max));
    reading.status = None;
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
