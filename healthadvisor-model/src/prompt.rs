use crate::profile::HealthProfile;

const PREAMBLE: &str = "\
You are a professional health advisor with expertise in providing personalized health recommendations.
Based on the following user health profile, provide detailed, personalized health recommendations.";

pub const SECTIONS: [&str; 7] = [
    "Summary of Health Status",
    "Diet Recommendations (specific foods, meal timing, hydration advice)",
    "Exercise Recommendations (types, frequency, duration based on their current activity level)",
    "Sleep Improvement Suggestions",
    "Stress Management Techniques",
    "Social Health Suggestions",
    "Additional Personalized Advice (based on their specific conditions/goals)",
];

const INSTRUCTIONS: &str = "\
For each section, provide 3-5 specific, actionable recommendations. Be detailed but concise.
Ensure all advice is evidence-based and appropriate for their specific health profile.
Do not prescribe medications or make specific medical treatment recommendations.
If there are serious health concerns, recommend consulting with a healthcare professional.

Important: If insufficient information is provided for any section, indicate this and provide general
best practices instead.";

pub fn format(profile: &HealthProfile) -> String {
    let fields: String = profile
        .iter()
        .map(|(label, value)| format!("{}: {}\n", label, value))
        .collect();
    let sections: String = SECTIONS
        .iter()
        .enumerate()
        .map(|(i, section)| format!("{}. {}\n", i + 1, section))
        .collect();

    format!(
        "{}\n\nUSER HEALTH PROFILE:\n{}\nPlease provide recommendations in the following format:\n{}\n{}\n",
        PREAMBLE, fields, sections, INSTRUCTIONS
    )
}

#[cfg(test)]
mod tests {
    use crate::choice::{Gender, HealthGoal};
    use crate::survey::Survey;

    use super::*;

    fn profile() -> HealthProfile {
        Survey {
            age: Some(30),
            gender: Some(Gender::Male),
            height_cm: Some(180),
            weight_kg: Some(80),
            health_goals: vec![HealthGoal::BetterSleep, HealthGoal::Other],
            goals_other: "Run a marathon".to_owned(),
            ..Default::default()
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn prompt_contains_every_field() {
        let prompt = format(&profile());

        assert!(prompt.contains("BMI: 24.7\n"));
        assert!(prompt.contains("Age: 30\n"));
        assert!(prompt.contains("Gender: Male\n"));
        assert!(prompt.contains("Health Goals: Better sleep, Other, Run a marathon\n"));
        assert!(prompt.contains("Medications: None reported\n"));
        assert!(prompt.contains("Additional Information: None provided\n"));
    }

    #[test]
    fn prompt_lists_sections_in_order() {
        let prompt = format(&profile());

        let positions: Vec<_> = SECTIONS
            .iter()
            .enumerate()
            .map(|(i, section)| prompt.find(&format!("{}. {}", i + 1, section)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(prompt.find("USER HEALTH PROFILE:").unwrap() < positions[0]);
    }

    #[test]
    fn prompt_carries_safety_constraints() {
        let prompt = format(&profile());

        assert!(prompt.starts_with("You are a professional health advisor"));
        assert!(prompt.contains("Do not prescribe medications"));
        assert!(prompt.contains("consulting with a healthcare professional"));
    }

    #[test]
    fn prompt_layout() {
        let prompt = format(&profile());

        assert!(prompt.contains("personalized health recommendations.\n\nUSER HEALTH PROFILE:\nAge: 30\n"));
        assert!(prompt.contains(
            "Additional Information: None provided\n\nPlease provide recommendations in the following format:\n1. Summary of Health Status\n"
        ));
        assert!(prompt.contains("(based on their specific conditions/goals)\n\nFor each section"));
        assert!(prompt.ends_with("best practices instead.\n"));
        assert_eq!(prompt.matches("\n\n").count(), 4);
    }

    #[test]
    fn prompt_is_deterministic() {
        assert_eq!(format(&profile()), format(&profile()));
    }
}
