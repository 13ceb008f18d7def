use html_escape::{encode_double_quoted_attribute, encode_text};
use strum::IntoEnumIterator;

use healthadvisor_model::choice::{
    ActivityStatus, ActivityType, DietPreference, HealthGoal, SleepQuality,
};
use healthadvisor_model::survey::{
    field, Range, AGE_RANGE, HEIGHT_RANGE, SLEEP_HOURS_RANGE, SOCIAL_SUPPORT_RANGE, STRESS_RANGE,
    WEIGHT_RANGE,
};
use healthadvisor_model::{HealthProfile, Survey};

use crate::advisor::Outcome;

const PAGE_TEMPLATE: &str = include_str!("../templates/page.html");

pub const SUCCESS_MESSAGE: &str = "Health recommendations generated successfully!";
pub const FAILURE_MESSAGE: &str = "An error occurred while generating recommendations";
pub const RETRY_HINT: &str = "Please try again later or contact support if the problem persists.";
pub const DISCLAIMER: &str = "<strong>Disclaimer</strong>: These recommendations are generated by AI \
and should not be considered medical advice. Always consult with qualified healthcare professionals \
before making significant changes to your health routine, especially if you have existing medical \
conditions.";

/// Renders the survey form, prefilled with `survey`, followed by the outcome
/// of the last submission if there was one. User text is never scanned for
/// placeholders.
pub fn page(survey: &Survey, outcome: Option<&Outcome>) -> String {
    let (head, rest) = PAGE_TEMPLATE.split_once("{{FORM}}").unwrap_or((PAGE_TEMPLATE, ""));
    let (middle, tail) = rest.split_once("{{RESULT}}").unwrap_or((rest, ""));
    [
        head,
        form(survey).as_str(),
        middle,
        outcome.map(result).unwrap_or_default().as_str(),
        tail,
    ]
    .concat()
}

fn result(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Invalid(e) => banner("error", &encode_text(&e.to_string())),
        Outcome::Failed(e) => {
            let message = format!("{}: {}", FAILURE_MESSAGE, e);
            banner("error", &encode_text(&message)) + &banner("info", RETRY_HINT)
        }
        Outcome::Advised {
            profile,
            recommendations,
        } => format!(
            r#"{}
  <div class="results">
    <div>
      <h2>Your Health Profile</h2>
      {}
    </div>
    <div>
      <h2>Your Personalized Health Recommendations</h2>
      <div class="recommendations">{}</div>
    </div>
  </div>
  {}"#,
            banner("success", SUCCESS_MESSAGE),
            profile_table(profile),
            encode_text(recommendations),
            banner("info", DISCLAIMER),
        ),
    }
}

fn banner(kind: &str, html: &str) -> String {
    format!(r#"<div class="banner {}">{}</div>"#, kind, html)
}

fn profile_table(profile: &HealthProfile) -> String {
    let rows: String = profile
        .iter()
        .map(|(label, value)| {
            format!(
                "<tr><td>{}</td><td>{}</td></tr>",
                encode_text(label),
                encode_text(&value.to_string())
            )
        })
        .collect();
    format!(
        "<table><thead><tr><th>Factor</th><th>Value</th></tr></thead><tbody>{}</tbody></table>",
        rows
    )
}

fn form(survey: &Survey) -> String {
    let mut html = String::from(
        r#"<form id="health_form" method="post" action="/recommendations">"#,
    );

    html += &fieldset(
        "Personal Health Information",
        &[
            r#"<div class="columns"><div>"#.to_owned(),
            number_input(field::AGE, "Age", AGE_RANGE, survey.age),
            select(field::GENDER, "Gender", survey.gender),
            "</div><div>".to_owned(),
            number_input(field::HEIGHT, "Height (cm)", HEIGHT_RANGE, survey.height_cm),
            number_input(field::WEIGHT, "Weight (kg)", WEIGHT_RANGE, survey.weight_kg),
            "</div></div>".to_owned(),
            slider(
                field::STRESS_LEVEL,
                "Stress Level (1-10)",
                STRESS_RANGE,
                survey.stress_level,
                "1 = Very Low Stress, 10 = Extremely High Stress",
            ),
        ],
    );
    html += &fieldset(
        "Physical Activity",
        &[
            radio::<ActivityStatus>(
                field::ACTIVITY_STATUS,
                "Activity Status",
                survey.activity_status,
            ),
            select(
                field::ACTIVITY_FREQUENCY,
                "Activity Frequency",
                Some(survey.activity_frequency),
            ),
            checkboxes::<ActivityType>(
                field::ACTIVITY_TYPES,
                "Types of Physical Activities",
                &survey.activity_types,
            ),
            text_input(
                field::OTHER_ACTIVITY,
                "Please specify other activities",
                &survey.other_activity,
            ),
        ],
    );
    html += &fieldset(
        "Social Context",
        &[
            select(
                field::LIVING_SITUATION,
                "Living Situation",
                Some(survey.living_situation),
            ),
            slider(
                field::SOCIAL_SUPPORT,
                "Social Support Network (1-10)",
                SOCIAL_SUPPORT_RANGE,
                survey.social_support,
                "1 = Very Limited Support, 10 = Extensive Support Network",
            ),
        ],
    );
    html += &fieldset(
        "Diet & Nutrition",
        &[
            checkboxes::<DietPreference>(
                field::DIET_PREFERENCES,
                "Diet Preferences",
                &survey.diet_preferences,
            ),
            text_input(
                field::DIET_OTHER,
                "Please specify other diet preferences",
                &survey.diet_other,
            ),
            select(
                field::DAILY_WATER,
                "Daily Water Intake",
                Some(survey.daily_water),
            ),
            select(
                field::MEAL_REGULARITY,
                "Meal Regularity",
                Some(survey.meal_regularity),
            ),
        ],
    );
    html += &fieldset(
        "Sleep Patterns",
        &[
            slider(
                field::SLEEP_HOURS,
                "Average Hours of Sleep per Night",
                SLEEP_HOURS_RANGE,
                survey.sleep_hours,
                "",
            ),
            radio::<SleepQuality>(field::SLEEP_QUALITY, "Sleep Quality", survey.sleep_quality),
        ],
    );
    html += &fieldset(
        "Medical Information (Optional)",
        &[
            text_area(
                field::MEDICAL_CONDITIONS,
                "Existing Medical Conditions (if any)",
                &survey.medical_conditions,
                "E.g., diabetes, hypertension, asthma, etc.",
            ),
            text_area(
                field::MEDICATIONS,
                "Current Medications (if any)",
                &survey.medications,
                "Please list any medications you're currently taking",
            ),
        ],
    );
    html += &fieldset(
        "Health Goals",
        &[
            checkboxes::<HealthGoal>(
                field::HEALTH_GOALS,
                "What are your health goals?",
                &survey.health_goals,
            ),
            text_input(
                field::GOALS_OTHER,
                "Please specify other health goals",
                &survey.goals_other,
            ),
            text_area(
                field::ADDITIONAL_INFO,
                "Any additional information you'd like to share?",
                &survey.additional_info,
                "Anything else that might be relevant to your health consultation",
            ),
        ],
    );

    html += r#"<button type="submit">Get Health Recommendations</button></form>"#;
    html
}

fn fieldset(legend: &str, controls: &[String]) -> String {
    format!(
        "<fieldset><legend>{}</legend>{}</fieldset>",
        encode_text(legend),
        controls.concat()
    )
}

fn help(text: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!(r#"<span class="help">{}</span>"#, encode_text(text))
    }
}

fn number_input(name: &str, label: &str, range: Range, value: Option<u32>) -> String {
    format!(
        r#"<label>{label}<input type="number" name="{name}" min="{min}" max="{max}" step="1" value="{value}" required></label>"#,
        label = encode_text(label),
        name = name,
        min = range.min,
        max = range.max,
        value = value.map(|v| v.to_string()).unwrap_or_default(),
    )
}

fn slider(name: &str, label: &str, range: Range, value: u32, help_text: &str) -> String {
    format!(
        r#"<label>{label}: <output>{value}</output>{help}<input type="range" name="{name}" min="{min}" max="{max}" step="1" value="{value}" oninput="this.parentElement.querySelector('output').value = this.value"></label>"#,
        label = encode_text(label),
        help = help(help_text),
        name = name,
        min = range.min,
        max = range.max,
        value = value,
    )
}

fn select<T>(name: &str, label: &str, selected: Option<T>) -> String
where
    T: IntoEnumIterator + AsRef<str> + PartialEq,
{
    let placeholder = if selected.is_none() {
        r#"<option value="" selected disabled>Select...</option>"#
    } else {
        ""
    };
    let options: String = T::iter()
        .map(|choice| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                encode_double_quoted_attribute(choice.as_ref()),
                if selected.as_ref() == Some(&choice) {
                    " selected"
                } else {
                    ""
                },
                encode_text(choice.as_ref())
            )
        })
        .collect();
    format!(
        r#"<label>{}<select name="{}">{}{}</select></label>"#,
        encode_text(label),
        name,
        placeholder,
        options
    )
}

fn radio<T>(name: &str, label: &str, selected: T) -> String
where
    T: IntoEnumIterator + AsRef<str> + PartialEq,
{
    let options: String = T::iter()
        .map(|choice| {
            format!(
                r#"<label class="option"><input type="radio" name="{}" value="{}"{}> {}</label>"#,
                name,
                encode_double_quoted_attribute(choice.as_ref()),
                if choice == selected { " checked" } else { "" },
                encode_text(choice.as_ref())
            )
        })
        .collect();
    format!("<label>{}</label>{}", encode_text(label), options)
}

fn checkboxes<T>(name: &str, label: &str, selected: &[T]) -> String
where
    T: IntoEnumIterator + AsRef<str> + PartialEq,
{
    let options: String = T::iter()
        .map(|choice| {
            format!(
                r#"<label class="option"><input type="checkbox" name="{}" value="{}"{}> {}</label>"#,
                name,
                encode_double_quoted_attribute(choice.as_ref()),
                if selected.contains(&choice) {
                    " checked"
                } else {
                    ""
                },
                encode_text(choice.as_ref())
            )
        })
        .collect();
    format!("<label>{}</label>{}", encode_text(label), options)
}

fn text_input(name: &str, label: &str, value: &str) -> String {
    format!(
        r#"<label>{}<input type="text" name="{}" value="{}"></label>"#,
        encode_text(label),
        name,
        encode_double_quoted_attribute(value)
    )
}

fn text_area(name: &str, label: &str, value: &str, help_text: &str) -> String {
    format!(
        r#"<label>{}{}<textarea name="{}">{}</textarea></label>"#,
        encode_text(label),
        help(help_text),
        name,
        encode_text(value)
    )
}

#[cfg(test)]
mod tests {
    use healthadvisor_client::Error as ClientError;
    use healthadvisor_model::choice::Gender;
    use healthadvisor_model::ValidationError;

    use super::*;

    fn profile() -> HealthProfile {
        Survey {
            age: Some(30),
            gender: Some(Gender::Male),
            height_cm: Some(180),
            weight_kg: Some(80),
            additional_info: "<script>alert(1)</script>".to_owned(),
            ..Default::default()
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn empty_form_has_every_section() {
        let html = page(&Survey::default(), None);

        for section in [
            "Personal Health Information",
            "Physical Activity",
            "Social Context",
            "Diet &amp; Nutrition",
            "Sleep Patterns",
            "Medical Information (Optional)",
            "Health Goals",
        ] {
            assert!(html.contains(section), "missing section {}", section);
        }
        assert!(html.contains(r#"name="age" min="1" max="120""#));
        assert!(html.contains(r#"<option value="" selected disabled>Select...</option>"#));
        assert!(html.contains(r#"name="stress_level" min="1" max="10" step="1" value="5""#));
        assert!(html.contains("Get Health Recommendations"));
        assert!(!html.contains("{{"));
        assert!(!html.contains("Your Health Profile"));
    }

    #[test]
    fn form_keeps_previous_answers() {
        let survey = Survey {
            age: Some(42),
            gender: Some(Gender::NonBinary),
            activity_types: vec![ActivityType::Hiit],
            goals_other: "\"quoted\"".to_owned(),
            ..Default::default()
        };
        let html = page(&survey, None);

        assert!(html.contains(r#"value="42""#));
        assert!(html.contains(r#"<option value="Non-binary" selected>"#));
        assert!(html.contains(r#"value="HIIT" checked>"#));
        assert!(html.contains(r#"value="&quot;quoted&quot;""#));
    }

    #[test]
    fn success_shows_table_recommendations_and_disclaimer() {
        let outcome = Outcome::Advised {
            profile: profile(),
            recommendations: "## Summary\nYou are <b>fine</b>.".to_owned(),
        };
        let html = page(&Survey::default(), Some(&outcome));

        assert!(html.contains(SUCCESS_MESSAGE));
        assert_eq!(html.matches("<tr><td>").count(), 20);
        assert!(html.contains("<tr><td>BMI</td><td>24.7</td></tr>"));
        assert!(html.contains("## Summary\nYou are &lt;b&gt;fine&lt;/b&gt;."));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("should not be considered medical advice"));
    }

    #[test]
    fn failure_shows_error_without_table() {
        let outcome = Outcome::Failed(ClientError::InternalServerError);
        let html = page(&Survey::default(), Some(&outcome));

        assert!(html.contains(
            "An error occurred while generating recommendations: internal server error"
        ));
        assert!(html.contains(RETRY_HINT));
        assert!(!html.contains("Your Health Profile"));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn placeholders_in_answers_are_left_alone() {
        let survey = Survey {
            goals_other: "{{RESULT}}".to_owned(),
            additional_info: "{{FORM}}".to_owned(),
            ..Default::default()
        };
        let outcome = Outcome::Advised {
            profile: profile(),
            recommendations: "{{RESULT}} {{FORM}}".to_owned(),
        };
        let html = page(&survey, Some(&outcome));

        assert_eq!(html.matches(SUCCESS_MESSAGE).count(), 1);
        assert_eq!(html.matches(r#"<form id="health_form""#).count(), 1);
        assert!(html.contains(r#"value="{{RESULT}}""#));
        assert!(html.contains(r#"<textarea name="additional_info">{{FORM}}</textarea>"#));
        assert!(html.contains("{{RESULT}} {{FORM}}</div>"));
    }

    #[test]
    fn invalid_submission_shows_validation_message() {
        let outcome = Outcome::Invalid(ValidationError::MissingRequired);
        let html = page(&Survey::default(), Some(&outcome));

        assert!(html.contains("Please fill in all required fields (Age, Gender, Height, Weight)"));
        assert!(!html.contains("<table>"));
    }
}
