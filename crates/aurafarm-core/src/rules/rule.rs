//! The fixed rule table.
//!
//! Each rule reads one snapshot section and contributes at most one task.

use serde::{Deserialize, Serialize};

use super::RuleThresholds;
use crate::readings::{EnvironmentalSnapshot, Section};
use crate::task::{Priority, Task, TaskAction};

/// One row of the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    LowSoilMoisture,
    LowNitrogen,
    SoilPhOutOfRange,
    HeavyPrecipitation,
    HighTemperature,
    HighWind,
    LowVegetation,
    DiseaseRisk,
    WaterStress,
    RoutineInspection,
}

impl Rule {
    /// Every rule in evaluation order. Output ties keep this order.
    pub const ALL: [Rule; 10] = [
        Rule::LowSoilMoisture,
        Rule::LowNitrogen,
        Rule::SoilPhOutOfRange,
        Rule::HeavyPrecipitation,
        Rule::HighTemperature,
        Rule::HighWind,
        Rule::LowVegetation,
        Rule::DiseaseRisk,
        Rule::WaterStress,
        Rule::RoutineInspection,
    ];

    /// Section whose presence the rule requires.
    pub fn section(self) -> Section {
        match self {
            Rule::LowSoilMoisture | Rule::LowNitrogen | Rule::SoilPhOutOfRange => Section::Soil,
            Rule::HeavyPrecipitation | Rule::HighTemperature | Rule::HighWind => Section::Weather,
            Rule::LowVegetation
            | Rule::DiseaseRisk
            | Rule::WaterStress
            | Rule::RoutineInspection => Section::Plants,
        }
    }

    /// Whether the rule fires. An absent section never fires.
    pub fn fires(self, snapshot: &EnvironmentalSnapshot, t: &RuleThresholds) -> bool {
        let soil = snapshot.soil.as_ref();
        let weather = snapshot.weather.as_ref();
        let plants = snapshot.plants.as_ref();

        match self {
            Rule::LowSoilMoisture => {
                soil.is_some_and(|s| s.moisture.value < t.soil_moisture_min)
            }
            Rule::LowNitrogen => soil.is_some_and(|s| s.nitrogen.value < t.soil_nitrogen_min),
            Rule::SoilPhOutOfRange => {
                soil.is_some_and(|s| s.ph.value < t.soil_ph_min || s.ph.value > t.soil_ph_max)
            }
            Rule::HeavyPrecipitation => {
                weather.is_some_and(|w| w.precipitation.value > t.precipitation_max)
            }
            Rule::HighTemperature => {
                weather.is_some_and(|w| w.temperature.value > t.temperature_max)
            }
            Rule::HighWind => weather.is_some_and(|w| w.wind_speed.value > t.wind_speed_max),
            Rule::LowVegetation => plants.is_some_and(|p| p.ndvi.value < t.ndvi_min),
            Rule::DiseaseRisk => {
                plants.is_some_and(|p| p.disease_risk.value > t.disease_risk_max)
            }
            Rule::WaterStress => {
                plants.is_some_and(|p| p.water_stress.value > t.water_stress_max)
            }
            Rule::RoutineInspection => plants.is_some(),
        }
    }

    pub fn priority(self) -> Priority {
        match self {
            Rule::SoilPhOutOfRange | Rule::HeavyPrecipitation | Rule::HighWind => Priority::Medium,
            Rule::RoutineInspection => Priority::Low,
            _ => Priority::High,
        }
    }

    pub fn action(self) -> TaskAction {
        match self {
            Rule::LowSoilMoisture | Rule::HighTemperature | Rule::WaterStress => {
                TaskAction::Irrigate
            }
            Rule::LowNitrogen => TaskAction::Fertilize,
            Rule::SoilPhOutOfRange => TaskAction::PhAdjust,
            Rule::HeavyPrecipitation => TaskAction::Monitor,
            Rule::HighWind | Rule::LowVegetation | Rule::RoutineInspection => TaskAction::Inspect,
            Rule::DiseaseRisk => TaskAction::Spray,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Rule::LowSoilMoisture => "Irrigate Field",
            Rule::LowNitrogen => "Apply Nitrogen Fertilizer",
            Rule::SoilPhOutOfRange => "Adjust Soil pH",
            Rule::HeavyPrecipitation => "Monitor Drainage",
            Rule::HighTemperature => "Increase Irrigation",
            Rule::HighWind => "Check Plant Stability",
            Rule::LowVegetation => "Investigate Low Vegetation",
            Rule::DiseaseRisk => "Apply Pesticide",
            Rule::WaterStress => "Urgent Irrigation Needed",
            Rule::RoutineInspection => "Routine Field Inspection",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Rule::LowSoilMoisture => "Soil moisture is low. Robot should water the crops.",
            Rule::LowNitrogen => "Nitrogen levels are below optimal. Apply fertilizer.",
            Rule::SoilPhOutOfRange => "Soil pH is outside optimal range. Apply pH correction.",
            Rule::HeavyPrecipitation => "Heavy rainfall detected. Check field drainage systems.",
            Rule::HighTemperature => "High temperature detected. Increase watering frequency.",
            Rule::HighWind => "High winds detected. Inspect plants for damage.",
            Rule::LowVegetation => "NDVI indicates poor plant health. Inspect affected areas.",
            Rule::DiseaseRisk => "High disease risk detected. Apply preventive treatment.",
            Rule::WaterStress => "Plants showing water stress. Immediate watering required.",
            Rule::RoutineInspection => "Perform regular visual inspection of crops.",
        }
    }

    fn estimated_time(self) -> &'static str {
        match self {
            Rule::LowSoilMoisture | Rule::HighTemperature | Rule::DiseaseRisk => "2 hours",
            Rule::LowNitrogen | Rule::LowVegetation => "1.5 hours",
            Rule::SoilPhOutOfRange | Rule::HighWind | Rule::RoutineInspection => "1 hour",
            Rule::HeavyPrecipitation => "30 minutes",
            Rule::WaterStress => "2.5 hours",
        }
    }

    /// Why the rule exists, shown in the decision-logic listing.
    pub fn reasoning(self) -> &'static str {
        match self {
            Rule::LowSoilMoisture => "Low soil moisture indicates plants need water immediately",
            Rule::LowNitrogen => "Insufficient nitrogen limits plant growth and yield",
            Rule::SoilPhOutOfRange => "Nutrient uptake drops when soil pH leaves the optimal band",
            Rule::HeavyPrecipitation => "Standing water after heavy rain can drown roots",
            Rule::HighTemperature => "High temperatures increase water evaporation and plant stress",
            Rule::HighWind => "Strong winds can lodge or break stems",
            Rule::LowVegetation => "Low vegetation index indicates poor plant health or growth issues",
            Rule::DiseaseRisk => "High disease risk requires immediate preventive action",
            Rule::WaterStress => "Water-stressed plants lose yield within days",
            Rule::RoutineInspection => "Regular walks catch problems the sensors miss",
        }
    }

    /// Human-readable trigger condition under the given thresholds.
    pub fn condition(self, t: &RuleThresholds) -> String {
        match self {
            Rule::LowSoilMoisture => format!("moisture < {} %", t.soil_moisture_min),
            Rule::LowNitrogen => format!("nitrogen < {} ppm", t.soil_nitrogen_min),
            Rule::SoilPhOutOfRange => format!("pH < {} or pH > {}", t.soil_ph_min, t.soil_ph_max),
            Rule::HeavyPrecipitation => format!("precipitation > {} mm", t.precipitation_max),
            Rule::HighTemperature => format!("temperature > {} °C", t.temperature_max),
            Rule::HighWind => format!("wind speed > {} km/h", t.wind_speed_max),
            Rule::LowVegetation => format!("NDVI < {}", t.ndvi_min),
            Rule::DiseaseRisk => format!("disease risk > {}", t.disease_risk_max),
            Rule::WaterStress => format!("water stress > {}", t.water_stress_max),
            Rule::RoutineInspection => "plant data present".to_string(),
        }
    }

    /// Build the task this rule contributes.
    pub fn task(self) -> Task {
        Task::new(
            self.title(),
            self.description(),
            self.priority(),
            self.action(),
            self.estimated_time(),
        )
    }
}

/// One entry of the decision-logic listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDescription {
    pub rule: Rule,
    pub section: Section,
    pub condition: String,
    pub title: String,
    pub priority: Priority,
    pub action: TaskAction,
    pub reasoning: String,
}

impl RuleDescription {
    pub fn new(rule: Rule, thresholds: &RuleThresholds) -> Self {
        Self {
            rule,
            section: rule.section(),
            condition: rule.condition(thresholds),
            title: rule.title().to_string(),
            priority: rule.priority(),
            action: rule.action(),
            reasoning: rule.reasoning().to_string(),
        }
    }
}
