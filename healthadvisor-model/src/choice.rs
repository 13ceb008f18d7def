use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, EnumString, Display, AsRefStr)]
pub enum Gender {
    #[default]
    Male,
    Female,
    #[strum(to_string = "Non-binary")]
    NonBinary,
    #[strum(to_string = "Prefer not to say")]
    PreferNotToSay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, EnumString, Display, AsRefStr)]
pub enum ActivityStatus {
    #[default]
    Inactive,
    #[strum(to_string = "Somewhat Active")]
    SomewhatActive,
    Active,
    #[strum(to_string = "Very Active")]
    VeryActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, EnumString, Display, AsRefStr)]
pub enum ActivityFrequency {
    #[default]
    None,
    #[strum(to_string = "1-2 times per week")]
    OneToTwo,
    #[strum(to_string = "3-4 times per week")]
    ThreeToFour,
    #[strum(to_string = "5+ times per week")]
    FivePlus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, Display, AsRefStr)]
pub enum ActivityType {
    Walking,
    Running,
    Swimming,
    Cycling,
    #[strum(to_string = "Weight Training")]
    WeightTraining,
    Yoga,
    #[strum(to_string = "Team Sports")]
    TeamSports,
    #[strum(to_string = "HIIT")]
    Hiit,
    Dancing,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, EnumString, Display, AsRefStr)]
pub enum LivingSituation {
    #[default]
    Alone,
    #[strum(to_string = "With partner")]
    WithPartner,
    #[strum(to_string = "With family")]
    WithFamily,
    #[strum(to_string = "With roommates/friends")]
    WithRoommates,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, Display, AsRefStr)]
pub enum DietPreference {
    #[strum(to_string = "No specific diet")]
    NoSpecificDiet,
    Vegetarian,
    Vegan,
    Pescatarian,
    Paleo,
    Keto,
    #[strum(to_string = "Gluten-free")]
    GlutenFree,
    #[strum(to_string = "Dairy-free")]
    DairyFree,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, EnumString, Display, AsRefStr)]
pub enum WaterIntake {
    #[default]
    #[strum(to_string = "Less than 1 liter")]
    LessThanOne,
    #[strum(to_string = "1-2 liters")]
    OneToTwo,
    #[strum(to_string = "2-3 liters")]
    TwoToThree,
    #[strum(to_string = "3+ liters")]
    ThreePlus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, EnumString, Display, AsRefStr)]
pub enum MealRegularity {
    #[default]
    #[strum(to_string = "Regular meals at set times")]
    Regular,
    #[strum(to_string = "Somewhat regular")]
    SomewhatRegular,
    #[strum(to_string = "Irregular eating patterns")]
    Irregular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, EnumString, Display, AsRefStr)]
pub enum SleepQuality {
    #[default]
    Poor,
    Fair,
    Good,
    Excellent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, Display, AsRefStr)]
pub enum HealthGoal {
    #[strum(to_string = "Weight loss")]
    WeightLoss,
    #[strum(to_string = "Muscle gain")]
    MuscleGain,
    #[strum(to_string = "Improved fitness")]
    ImprovedFitness,
    #[strum(to_string = "Better sleep")]
    BetterSleep,
    #[strum(to_string = "Stress reduction")]
    StressReduction,
    #[strum(to_string = "Disease management")]
    DiseaseManagement,
    #[strum(to_string = "Overall wellness")]
    OverallWellness,
    Other,
}

/// Multi-choice controls whose "Other" option unlocks a free-text input.
pub trait WithOther {
    fn is_other(&self) -> bool;
}

impl WithOther for ActivityType {
    fn is_other(&self) -> bool {
        *self == ActivityType::Other
    }
}

impl WithOther for DietPreference {
    fn is_other(&self) -> bool {
        *self == DietPreference::Other
    }
}

impl WithOther for HealthGoal {
    fn is_other(&self) -> bool {
        *self == HealthGoal::Other
    }
}
