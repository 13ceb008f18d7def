use std::fmt;

use itertools::Itertools;

use crate::choice::WithOther;

pub const AGE: &str = "Age";
pub const GENDER: &str = "Gender";
pub const HEIGHT: &str = "Height (cm)";
pub const WEIGHT: &str = "Weight (kg)";
pub const BMI: &str = "BMI";
pub const STRESS_LEVEL: &str = "Stress Level";
pub const ACTIVITY_STATUS: &str = "Activity Status";
pub const ACTIVITY_FREQUENCY: &str = "Activity Frequency";
pub const ACTIVITY_TYPES: &str = "Activity Types";
pub const LIVING_SITUATION: &str = "Living Situation";
pub const SOCIAL_SUPPORT: &str = "Social Support (1-10)";
pub const DIET_PREFERENCES: &str = "Diet Preferences";
pub const DAILY_WATER: &str = "Daily Water Intake";
pub const MEAL_REGULARITY: &str = "Meal Regularity";
pub const SLEEP_HOURS: &str = "Sleep Hours";
pub const SLEEP_QUALITY: &str = "Sleep Quality";
pub const MEDICAL_CONDITIONS: &str = "Medical Conditions";
pub const MEDICATIONS: &str = "Medications";
pub const HEALTH_GOALS: &str = "Health Goals";
pub const ADDITIONAL_INFORMATION: &str = "Additional Information";

pub const NONE_REPORTED: &str = "None reported";
pub const NONE_PROVIDED: &str = "None provided";

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Integer(u32),
    Decimal(f64),
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(x) => write!(f, "{}", x),
            FieldValue::Decimal(x) => write!(f, "{:.1}", x),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<u32> for FieldValue {
    fn from(x: u32) -> Self {
        FieldValue::Integer(x)
    }
}

impl From<f64> for FieldValue {
    fn from(x: f64) -> Self {
        FieldValue::Decimal(x)
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HealthProfile {
    entries: Vec<(&'static str, FieldValue)>,
}

impl HealthProfile {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, label: &'static str, value: impl Into<FieldValue>) {
        self.entries.push((label, value.into()));
    }

    pub fn get(&self, label: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.entries.iter().map(|(label, value)| (*label, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Body mass index for the given height and weight, rounded to one decimal
/// with ties going to the even digit.
pub fn body_mass_index(height_cm: u32, weight_kg: u32) -> f64 {
    let height_m = height_cm as f64 / 100.0;
    let bmi = weight_kg as f64 / height_m.powf(2.0);
    (bmi * 10.0).round_ties_even() / 10.0
}

/// Joins the selected options with ", ". The free-text value is appended only
/// when the "Other" option is among them.
pub fn join_choices<T>(selected: &[T], other: &str) -> String
where
    T: WithOther + AsRef<str>,
{
    let joined = selected.iter().map(|choice| choice.as_ref()).join(", ");
    let other = other.trim();
    if !other.is_empty() && selected.iter().any(WithOther::is_other) {
        format!("{}, {}", joined, other)
    } else {
        joined
    }
}

pub fn text_or(value: &str, placeholder: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        placeholder.to_owned()
    } else {
        value.to_owned()
    }
}
