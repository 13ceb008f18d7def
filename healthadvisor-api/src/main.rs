use std::{error::Error, sync::Arc};

use actix_web::{web, App, HttpServer};
use healthadvisor_api::{config::Config, routes};
use healthadvisor_client::Client;
use log::{error, info};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    log4rs::init_file("log4rs.yml", Default::default())?;

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return Err(e.into());
        }
    };

    info!("Using model {}", config.client.model);
    let client: Arc<dyn Client> = Arc::new(healthadvisor_client::create(config.client));
    let client = web::Data::from(client);

    info!("Listening on {}:{}", config.bind_address, config.port);
    HttpServer::new(move || {
        App::new()
            .app_data(client.clone())
            .configure(routes::configure)
    })
    .bind((config.bind_address.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
