use crate::core::estimator::estimate;
use crate::domain::model::{BacInput, BacResult, DisplayColor, SeverityPalette, Sex, Theme};
use crate::domain::ports::Alerter;
use crate::utils::error::{AlcometerError, Result};
use crate::utils::validation::{parse_or_zero, parse_weight};

pub const MISSING_WEIGHT_TITLE: &str = "Warning";
pub const MISSING_WEIGHT_MESSAGE: &str = "Please enter your weight.";
pub const CALCULATION_ERROR_TITLE: &str = "Error";

/// Title and message shown for an error that blocks the calculation.
pub fn alert_for(error: &AlcometerError) -> (&'static str, String) {
    match error {
        AlcometerError::MissingWeight => {
            (MISSING_WEIGHT_TITLE, MISSING_WEIGHT_MESSAGE.to_string())
        }
        other => (CALCULATION_ERROR_TITLE, other.user_friendly_message()),
    }
}

/// State of the calculator screen: raw field text, selections and what is on display.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub weight: String,
    pub bottles: String,
    pub hours: String,
    pub sex: Sex,
    pub theme: Theme,
    pub palette: SeverityPalette,
    pub result_text: String,
    pub result_color: DisplayColor,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(SeverityPalette::default())
    }
}

impl FormState {
    pub fn new(palette: SeverityPalette) -> Self {
        Self {
            weight: String::new(),
            bottles: "0".to_string(),
            hours: String::new(),
            sex: Sex::default(),
            theme: Theme::default(),
            palette,
            result_text: String::new(),
            result_color: DisplayColor::Green,
        }
    }

    pub fn set_weight(&mut self, text: impl Into<String>) {
        self.weight = text.into();
    }

    pub fn set_bottles(&mut self, text: impl Into<String>) {
        self.bottles = text.into();
    }

    pub fn set_hours(&mut self, text: impl Into<String>) {
        self.hours = text.into();
    }

    pub fn select_sex(&mut self, sex: Sex) {
        self.sex = sex;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Stepper buttons. No lower bound.
    pub fn step_bottles(&mut self, delta: i32) {
        self.bottles = Self::stepped(&self.bottles, delta);
    }

    pub fn step_hours(&mut self, delta: i32) {
        self.hours = Self::stepped(&self.hours, delta);
    }

    fn stepped(text: &str, delta: i32) -> String {
        (parse_or_zero(text) + f64::from(delta)).to_string()
    }

    pub fn inputs(&self) -> Result<BacInput> {
        Ok(BacInput {
            weight_kg: parse_weight(&self.weight)?,
            bottle_count: parse_or_zero(&self.bottles),
            hours_since_drinking: parse_or_zero(&self.hours),
            sex: self.sex,
        })
    }

    /// Run the estimator and update the displayed value and its color.
    ///
    /// A missing weight raises an alert and leaves the display untouched.
    pub fn calculate<A: Alerter>(&mut self, alerter: &A) -> Option<BacResult> {
        let result = self.inputs().and_then(|input| estimate(&input));

        match result {
            Ok(result) => {
                self.result_text = result.formatted();
                self.result_color = self.palette.color_for(result.severity);
                tracing::info!(
                    "BAC {} ({}, shown in {})",
                    self.result_text,
                    result.severity,
                    self.result_color
                );
                Some(result)
            }
            Err(e) => {
                tracing::warn!("calculation blocked: {}", e);
                let (title, message) = alert_for(&e);
                alerter.alert(title, &message);
                None
            }
        }
    }
}
