use actix_web::{get, http::StatusCode, post, web, HttpResponse};
use healthadvisor_client::Client;
use healthadvisor_model::Survey;
use log::{info, warn};

use crate::advisor::{self, Outcome};
use crate::render;

fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(body)
}

#[get("/")]
async fn index() -> HttpResponse {
    html(StatusCode::OK, render::page(&Survey::default(), None))
}

#[post("/recommendations")]
async fn recommendations(client: web::Data<dyn Client>, body: String) -> HttpResponse {
    info!("Received survey submission");
    let pairs: Vec<(String, String)> = match serde_urlencoded::from_str(&body) {
        Ok(pairs) => pairs,
        Err(e) => {
            warn!("Malformed form body: {}", e);
            return HttpResponse::BadRequest().body("malformed form data");
        }
    };

    let (survey, error) = Survey::parse_form_pairs(pairs);
    if let Some(e) = error {
        warn!("Rejecting submission: {}", e);
        let outcome = Outcome::Invalid(e);
        return html(
            StatusCode::UNPROCESSABLE_ENTITY,
            render::page(&survey, Some(&outcome)),
        );
    }

    let outcome = advisor::advise(client.get_ref(), survey.clone()).await;
    let status = match outcome {
        Outcome::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        Outcome::Failed(_) => StatusCode::BAD_GATEWAY,
        Outcome::Advised { .. } => StatusCode::OK,
    };
    html(status, render::page(&survey, Some(&outcome)))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(recommendations);
}
