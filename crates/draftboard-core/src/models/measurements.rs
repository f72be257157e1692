use serde::{Deserialize, Serialize};

use super::{deserialize_optional_number, NO_DATA};
use crate::utils::format_number;

/// Combine measurements for one player. Every field may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Measurements {
    #[serde(rename = "playerId")]
    pub player_id: i64,
    #[serde(rename = "heightNoShoes", default, deserialize_with = "deserialize_optional_number")]
    pub height_no_shoes: Option<f64>,
    #[serde(rename = "heightShoes", default, deserialize_with = "deserialize_optional_number")]
    pub height_shoes: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub wingspan: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub reach: Option<f64>,
    #[serde(rename = "maxVertical", default, deserialize_with = "deserialize_optional_number")]
    pub max_vertical: Option<f64>,
    #[serde(rename = "noStepVertical", default, deserialize_with = "deserialize_optional_number")]
    pub no_step_vertical: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub weight: Option<f64>,
    #[serde(rename = "bodyFat", default, deserialize_with = "deserialize_optional_number")]
    pub body_fat: Option<f64>,
    #[serde(rename = "handLength", default, deserialize_with = "deserialize_optional_number")]
    pub hand_length: Option<f64>,
    #[serde(rename = "handWidth", default, deserialize_with = "deserialize_optional_number")]
    pub hand_width: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub agility: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub sprint: Option<f64>,
    #[serde(rename = "shuttleLeft", default, deserialize_with = "deserialize_optional_number")]
    pub shuttle_left: Option<f64>,
    #[serde(rename = "shuttleRight", default, deserialize_with = "deserialize_optional_number")]
    pub shuttle_right: Option<f64>,
    #[serde(rename = "shuttleBest", default, deserialize_with = "deserialize_optional_number")]
    pub shuttle_best: Option<f64>,
}

/// One labelled row of the measurements panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementLine {
    pub label: &'static str,
    pub value: Option<f64>,
    pub unit: &'static str,
}

impl MeasurementLine {
    /// Value with its unit, or the placeholder.
    pub fn display(&self) -> String {
        match self.value {
            Some(v) if self.unit.is_empty() => format_number(v),
            Some(v) => format!("{} {}", format_number(v), self.unit),
            None => NO_DATA.to_string(),
        }
    }
}

impl Measurements {
    /// Fixed, ordered rows for display. Missing values stay in place as
    /// `None` so the panel always has the same shape.
    pub fn lines(&self) -> Vec<MeasurementLine> {
        let row = |label: &'static str, value: Option<f64>, unit: &'static str| {
            MeasurementLine { label, value, unit }
        };
        vec![
            row("Height (No Shoes)", self.height_no_shoes, "in"),
            row("Wingspan", self.wingspan, "in"),
            row("Standing Reach", self.reach, "in"),
            row("Max Vertical", self.max_vertical, "in"),
            row("No-Step Vertical", self.no_step_vertical, "in"),
            row("Hand Length", self.hand_length, "in"),
            row("Hand Width", self.hand_width, "in"),
            row("Lane Agility", self.agility, "sec"),
            row("Sprint", self.sprint, "sec"),
            row("Shuttle (Best)", self.shuttle_best, "sec"),
            row("Body Fat %", self.body_fat, ""),
        ]
    }

    /// Height in shoes as feet and inches, e.g. `6'7"`.
    pub fn height_shoes_display(&self) -> Option<String> {
        self.height_shoes.map(format_height)
    }
}

/// Format a height in inches as feet and inches.
pub fn format_height(inches: f64) -> String {
    let total = inches.round() as i64;
    format!("{}'{}\"", total / 12, total % 12)
}
