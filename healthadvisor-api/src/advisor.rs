use healthadvisor_client::{Client, Error as ClientError};
use healthadvisor_model::{prompt, HealthProfile, Survey, ValidationError};
use log::{debug, error, info, warn};

#[derive(Debug)]
pub enum Outcome {
    Invalid(ValidationError),
    Failed(ClientError),
    Advised {
        profile: HealthProfile,
        recommendations: String,
    },
}

pub async fn advise(client: &dyn Client, survey: Survey) -> Outcome {
    let profile = match survey.validate() {
        Ok(profile) => profile,
        Err(e) => {
            warn!("Rejecting submission: {}", e);
            return Outcome::Invalid(e);
        }
    };
    debug!("Profile: {:?}", profile);

    let prompt = prompt::format(&profile);
    info!("Requesting recommendations");
    match client.generate(&prompt).await {
        Ok(recommendations) => {
            info!(
                "Received recommendations, {} bytes",
                recommendations.len()
            );
            Outcome::Advised {
                profile,
                recommendations,
            }
        }
        Err(e) => {
            error!("Failed to generate recommendations: {}", e);
            Outcome::Failed(e)
        }
    }
}
