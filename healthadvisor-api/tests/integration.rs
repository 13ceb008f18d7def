use std::sync::Arc;

use actix_web::{
    http::{header::ContentType, StatusCode},
    test, web, App,
};
use healthadvisor_api::routes;
use healthadvisor_client::{Client, Error, MockClient};
use mockall::predicate;

const COMPLETE_SURVEY: &str = "age=30&gender=Male&height=180&weight=80\
&stress_level=6&activity_status=Somewhat+Active&activity_frequency=1-2+times+per+week\
&activity_types=Walking&activity_types=Other&other_activity=Bouldering\
&living_situation=With+family&social_support=8&diet_preferences=Vegetarian\
&daily_water=2-3+liters&meal_regularity=Somewhat+regular&sleep_hours=6&sleep_quality=Fair\
&medical_conditions=&medications=&health_goals=Better+sleep&additional_info=";

fn app_data(client: MockClient) -> web::Data<dyn Client> {
    let client: Arc<dyn Client> = Arc::new(client);
    web::Data::from(client)
}

async fn submit(client: MockClient, body: &'static str) -> (StatusCode, String) {
    let app = test::init_service(
        App::new()
            .app_data(app_data(client))
            .configure(routes::configure),
    )
    .await;
    let req = test::TestRequest::post()
        .uri("/recommendations")
        .insert_header(ContentType::form_url_encoded())
        .set_payload(body)
        .to_request();

    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[actix_web::test]
async fn index_renders_form() {
    let app = test::init_service(
        App::new()
            .app_data(app_data(MockClient::new()))
            .configure(routes::configure),
    )
    .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains(r#"<form id="health_form" method="post" action="/recommendations">"#));
    assert!(body.contains("Get Health Recommendations"));
}

#[actix_web::test]
async fn complete_survey_shows_profile_and_recommendations() {
    let mut client = MockClient::new();
    client
        .expect_generate()
        .withf(|prompt| {
            prompt.contains("BMI: 24.7\n")
                && prompt.contains("Activity Types: Walking, Other, Bouldering\n")
                && prompt.contains("Medical Conditions: None reported\n")
                && prompt.contains("Additional Information: None provided\n")
        })
        .times(1)
        .returning(|_| Ok("1. Summary of Health Status\nAll good & well.".to_owned()));

    let (status, body) = submit(client, COMPLETE_SURVEY).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Health recommendations generated successfully!"));
    assert_eq!(body.matches("<tr><td>").count(), 20);
    assert!(body.contains("<tr><td>BMI</td><td>24.7</td></tr>"));
    assert!(body.contains("<tr><td>Social Support (1-10)</td><td>8</td></tr>"));
    assert!(body.contains("1. Summary of Health Status\nAll good &amp; well."));
    assert!(body.contains("should not be considered medical advice"));
    assert!(body.contains(r#"value="Bouldering""#));
}

#[actix_web::test]
async fn missing_required_field_skips_model() {
    let mut client = MockClient::new();
    client.expect_generate().never();

    let (status, body) = submit(client, "age=30&height=180&weight=80&stress_level=5").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("Please fill in all required fields (Age, Gender, Height, Weight)"));
    assert!(!body.contains("<table>"));
}

#[actix_web::test]
async fn malformed_value_skips_model() {
    let mut client = MockClient::new();
    client.expect_generate().never();

    let (status, body) = submit(client, "age=old&gender=Male&height=180&weight=80").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains(r#"Invalid value "old" for age"#));
    assert!(body.contains(r#"<option value="Male" selected>"#));
    assert!(body.contains(r#"name="height" min="50" max="250" step="1" value="180""#));
    assert!(body.contains(r#"name="weight" min="20" max="300" step="1" value="80""#));
}

#[actix_web::test]
async fn model_failure_shows_error_and_allows_resubmission() {
    let mut client = MockClient::new();
    client
        .expect_generate()
        .with(predicate::str::contains("Gender: Male\n"))
        .times(1)
        .returning(|_| Err(Error::AuthenticationError));

    let (status, body) = submit(client, COMPLETE_SURVEY).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.contains("An error occurred while generating recommendations"));
    assert!(body.contains("Please try again later or contact support if the problem persists."));
    assert!(!body.contains("<table>"));
    assert!(body.contains(r#"<form id="health_form""#));
    assert!(body.contains(r#"name="age" min="1" max="120" step="1" value="30""#));
}
