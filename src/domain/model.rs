use crate::utils::error::AlcometerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl Sex {
    /// Widmark-style share of body mass that alcohol distributes into.
    pub fn distribution_ratio(self) -> f64 {
        match self {
            Sex::Male => 0.7,
            Sex::Female => 0.6,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

impl FromStr for Sex {
    type Err = AlcometerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            _ => Err(AlcometerError::InvalidSex {
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl Severity {
    /// Bands: `[0, 0.5)` low, `[0.5, 1.0]` moderate, above 1.0 high.
    pub fn classify(value: f64) -> Self {
        if value > 1.0 {
            Severity::High
        } else if value >= 0.5 {
            Severity::Moderate
        } else {
            Severity::Low
        }
    }

    pub fn default_color(self) -> DisplayColor {
        match self {
            Severity::Low => DisplayColor::Green,
            Severity::Moderate => DisplayColor::Yellow,
            Severity::High => DisplayColor::Red,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Moderate => write!(f, "moderate"),
            Severity::High => write!(f, "high"),
        }
    }
}

/// Color token handed to the display layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayColor {
    #[default]
    Green,
    Yellow,
    Red,
}

impl DisplayColor {
    pub const NAMES: [&'static str; 3] = ["green", "yellow", "red"];

    pub fn ansi_code(self) -> &'static str {
        match self {
            DisplayColor::Green => "32",
            DisplayColor::Yellow => "33",
            DisplayColor::Red => "31",
        }
    }
}

impl fmt::Display for DisplayColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayColor::Green => write!(f, "green"),
            DisplayColor::Yellow => write!(f, "yellow"),
            DisplayColor::Red => write!(f, "red"),
        }
    }
}

impl FromStr for DisplayColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "green" => Ok(DisplayColor::Green),
            "yellow" => Ok(DisplayColor::Yellow),
            "red" => Ok(DisplayColor::Red),
            other => Err(format!("unknown color '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityPalette {
    pub low: DisplayColor,
    pub moderate: DisplayColor,
    pub high: DisplayColor,
}

impl SeverityPalette {
    pub fn color_for(&self, severity: Severity) -> DisplayColor {
        match severity {
            Severity::Low => self.low,
            Severity::Moderate => self.moderate,
            Severity::High => self.high,
        }
    }
}

impl Default for SeverityPalette {
    fn default() -> Self {
        Self {
            low: Severity::Low.default_color(),
            moderate: Severity::Moderate.default_color(),
            high: Severity::High.default_color(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BacInput {
    pub weight_kg: f64,
    pub bottle_count: f64,
    pub hours_since_drinking: f64,
    pub sex: Sex,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BacResult {
    pub value: f64,
    pub severity: Severity,
}

impl BacResult {
    /// Value with two decimals, the way the result is shown to the user.
    pub fn formatted(&self) -> String {
        format!("{:.2}", self.value)
    }
}

impl Serialize for BacResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("BacResult", 3)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("formatted", &self.formatted())?;
        state.serialize_field("severity", &self.severity)?;
        state.end()
    }
}
