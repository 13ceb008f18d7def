use std::str::FromStr;

use crate::choice::{
    ActivityFrequency, ActivityStatus, ActivityType, DietPreference, Gender, HealthGoal,
    LivingSituation, MealRegularity, SleepQuality, WaterIntake,
};
use crate::profile::{self, body_mass_index, join_choices, text_or, HealthProfile};

pub mod field {
    pub const AGE: &str = "age";
    pub const GENDER: &str = "gender";
    pub const HEIGHT: &str = "height";
    pub const WEIGHT: &str = "weight";
    pub const STRESS_LEVEL: &str = "stress_level";
    pub const ACTIVITY_STATUS: &str = "activity_status";
    pub const ACTIVITY_FREQUENCY: &str = "activity_frequency";
    pub const ACTIVITY_TYPES: &str = "activity_types";
    pub const OTHER_ACTIVITY: &str = "other_activity";
    pub const LIVING_SITUATION: &str = "living_situation";
    pub const SOCIAL_SUPPORT: &str = "social_support";
    pub const DIET_PREFERENCES: &str = "diet_preferences";
    pub const DIET_OTHER: &str = "diet_other";
    pub const DAILY_WATER: &str = "daily_water";
    pub const MEAL_REGULARITY: &str = "meal_regularity";
    pub const SLEEP_HOURS: &str = "sleep_hours";
    pub const SLEEP_QUALITY: &str = "sleep_quality";
    pub const MEDICAL_CONDITIONS: &str = "medical_conditions";
    pub const MEDICATIONS: &str = "medications";
    pub const HEALTH_GOALS: &str = "health_goals";
    pub const GOALS_OTHER: &str = "goals_other";
    pub const ADDITIONAL_INFO: &str = "additional_info";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub min: u32,
    pub max: u32,
    pub default: Option<u32>,
}

impl Range {
    const fn new(min: u32, max: u32, default: Option<u32>) -> Self {
        Self { min, max, default }
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn check(&self, field: &'static str, value: u32) -> Result<u32, ValidationError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(ValidationError::OutOfRange {
                field,
                min: self.min,
                max: self.max,
            })
        }
    }
}

pub const AGE_RANGE: Range = Range::new(1, 120, None);
pub const HEIGHT_RANGE: Range = Range::new(50, 250, None);
pub const WEIGHT_RANGE: Range = Range::new(20, 300, None);
pub const STRESS_RANGE: Range = Range::new(1, 10, Some(5));
pub const SOCIAL_SUPPORT_RANGE: Range = Range::new(1, 10, Some(5));
pub const SLEEP_HOURS_RANGE: Range = Range::new(1, 12, Some(7));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields (Age, Gender, Height, Weight)")]
    MissingRequired,
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
    },
    #[error("Invalid value \"{value}\" for {field}")]
    InvalidValue { field: String, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Survey {
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub height_cm: Option<u32>,
    pub weight_kg: Option<u32>,
    pub stress_level: u32,
    pub activity_status: ActivityStatus,
    pub activity_frequency: ActivityFrequency,
    pub activity_types: Vec<ActivityType>,
    pub other_activity: String,
    pub living_situation: LivingSituation,
    pub social_support: u32,
    pub diet_preferences: Vec<DietPreference>,
    pub diet_other: String,
    pub daily_water: WaterIntake,
    pub meal_regularity: MealRegularity,
    pub sleep_hours: u32,
    pub sleep_quality: SleepQuality,
    pub medical_conditions: String,
    pub medications: String,
    pub health_goals: Vec<HealthGoal>,
    pub goals_other: String,
    pub additional_info: String,
}

impl Default for Survey {
    fn default() -> Self {
        Self {
            age: None,
            gender: None,
            height_cm: None,
            weight_kg: None,
            stress_level: STRESS_RANGE.default.unwrap_or(STRESS_RANGE.min),
            activity_status: ActivityStatus::default(),
            activity_frequency: ActivityFrequency::default(),
            activity_types: Vec::new(),
            other_activity: String::new(),
            living_situation: LivingSituation::default(),
            social_support: SOCIAL_SUPPORT_RANGE
                .default
                .unwrap_or(SOCIAL_SUPPORT_RANGE.min),
            diet_preferences: Vec::new(),
            diet_other: String::new(),
            daily_water: WaterIntake::default(),
            meal_regularity: MealRegularity::default(),
            sleep_hours: SLEEP_HOURS_RANGE.default.unwrap_or(SLEEP_HOURS_RANGE.min),
            sleep_quality: SleepQuality::default(),
            medical_conditions: String::new(),
            medications: String::new(),
            health_goals: Vec::new(),
            goals_other: String::new(),
            additional_info: String::new(),
        }
    }
}

fn parse_number(name: &str, value: &str) -> Result<Option<u32>, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| ValidationError::InvalidValue {
            field: name.to_owned(),
            value: value.to_owned(),
        })
}

fn parse_choice<T: FromStr>(name: &str, value: &str) -> Result<T, ValidationError> {
    T::from_str(value).map_err(|_| ValidationError::InvalidValue {
        field: name.to_owned(),
        value: value.to_owned(),
    })
}

impl Survey {
    /// Builds a survey from decoded form pairs. Multi-choice controls submit
    /// one pair per selected option and unknown names are ignored. A value
    /// that does not parse leaves its control at the preselected value; the
    /// first such error is returned next to everything that did parse.
    pub fn parse_form_pairs<K, V>(
        pairs: impl IntoIterator<Item = (K, V)>,
    ) -> (Self, Option<ValidationError>)
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut survey = Survey::default();
        let mut first_error = None;
        for (name, value) in pairs {
            if let Err(e) = survey.apply(name.as_ref(), value.as_ref()) {
                first_error.get_or_insert(e);
            }
        }
        (survey, first_error)
    }

    fn apply(&mut self, name: &str, value: &str) -> Result<(), ValidationError> {
        match name {
            field::AGE => self.age = parse_number(name, value)?,
            field::GENDER if value.is_empty() => self.gender = None,
            field::GENDER => self.gender = Some(parse_choice(name, value)?),
            field::HEIGHT => self.height_cm = parse_number(name, value)?,
            field::WEIGHT => self.weight_kg = parse_number(name, value)?,
            field::STRESS_LEVEL => {
                self.stress_level = parse_number(name, value)?.unwrap_or(self.stress_level)
            }
            field::ACTIVITY_STATUS => self.activity_status = parse_choice(name, value)?,
            field::ACTIVITY_FREQUENCY => self.activity_frequency = parse_choice(name, value)?,
            field::ACTIVITY_TYPES => self.activity_types.push(parse_choice(name, value)?),
            field::OTHER_ACTIVITY => self.other_activity = value.to_owned(),
            field::LIVING_SITUATION => self.living_situation = parse_choice(name, value)?,
            field::SOCIAL_SUPPORT => {
                self.social_support = parse_number(name, value)?.unwrap_or(self.social_support)
            }
            field::DIET_PREFERENCES => self.diet_preferences.push(parse_choice(name, value)?),
            field::DIET_OTHER => self.diet_other = value.to_owned(),
            field::DAILY_WATER => self.daily_water = parse_choice(name, value)?,
            field::MEAL_REGULARITY => self.meal_regularity = parse_choice(name, value)?,
            field::SLEEP_HOURS => {
                self.sleep_hours = parse_number(name, value)?.unwrap_or(self.sleep_hours)
            }
            field::SLEEP_QUALITY => self.sleep_quality = parse_choice(name, value)?,
            field::MEDICAL_CONDITIONS => self.medical_conditions = value.to_owned(),
            field::MEDICATIONS => self.medications = value.to_owned(),
            field::HEALTH_GOALS => self.health_goals.push(parse_choice(name, value)?),
            field::GOALS_OTHER => self.goals_other = value.to_owned(),
            field::ADDITIONAL_INFO => self.additional_info = value.to_owned(),
            _ => {}
        }
        Ok(())
    }

    pub fn validate(self) -> Result<HealthProfile, ValidationError> {
        let (Some(age), Some(gender), Some(height), Some(weight)) =
            (self.age, self.gender, self.height_cm, self.weight_kg)
        else {
            return Err(ValidationError::MissingRequired);
        };
        if age == 0 || height == 0 || weight == 0 {
            return Err(ValidationError::MissingRequired);
        }

        let age = AGE_RANGE.check(profile::AGE, age)?;
        let height = HEIGHT_RANGE.check(profile::HEIGHT, height)?;
        let weight = WEIGHT_RANGE.check(profile::WEIGHT, weight)?;
        let stress_level = STRESS_RANGE.check(profile::STRESS_LEVEL, self.stress_level)?;
        let social_support =
            SOCIAL_SUPPORT_RANGE.check(profile::SOCIAL_SUPPORT, self.social_support)?;
        let sleep_hours = SLEEP_HOURS_RANGE.check(profile::SLEEP_HOURS, self.sleep_hours)?;

        let mut p = HealthProfile::new();
        p.push(profile::AGE, age);
        p.push(profile::GENDER, gender.to_string());
        p.push(profile::HEIGHT, height);
        p.push(profile::WEIGHT, weight);
        p.push(profile::BMI, body_mass_index(height, weight));
        p.push(profile::STRESS_LEVEL, stress_level);
        p.push(profile::ACTIVITY_STATUS, self.activity_status.to_string());
        p.push(
            profile::ACTIVITY_FREQUENCY,
            self.activity_frequency.to_string(),
        );
        p.push(
            profile::ACTIVITY_TYPES,
            join_choices(&self.activity_types, &self.other_activity),
        );
        p.push(profile::LIVING_SITUATION, self.living_situation.to_string());
        p.push(profile::SOCIAL_SUPPORT, social_support);
        p.push(
            profile::DIET_PREFERENCES,
            join_choices(&self.diet_preferences, &self.diet_other),
        );
        p.push(profile::DAILY_WATER, self.daily_water.to_string());
        p.push(profile::MEAL_REGULARITY, self.meal_regularity.to_string());
        p.push(profile::SLEEP_HOURS, sleep_hours);
        p.push(profile::SLEEP_QUALITY, self.sleep_quality.to_string());
        p.push(
            profile::MEDICAL_CONDITIONS,
            text_or(&self.medical_conditions, profile::NONE_REPORTED),
        );
        p.push(
            profile::MEDICATIONS,
            text_or(&self.medications, profile::NONE_REPORTED),
        );
        p.push(
            profile::HEALTH_GOALS,
            join_choices(&self.health_goals, &self.goals_other),
        );
        p.push(
            profile::ADDITIONAL_INFORMATION,
            text_or(&self.additional_info, profile::NONE_PROVIDED),
        );
        Ok(p)
    }
}
