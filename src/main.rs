use actix_cors::Cors;
use actix_web::{middleware::Logger, App, HttpServer};
use anyhow::Context;
use log::{info, warn};

use social_api::config::Settings;
use social_api::databases::setup_backend;
use social_api::services::clock::MessageClock;
use social_api::services::hub::{ConversationHub, HUB_CAPACITY};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env()?;
    let pool = setup_backend(&settings).await?;
    let clock = MessageClock::new(settings.timezone);
    let hub = ConversationHub::new(HUB_CAPACITY);

    info!("Message timestamps use the {} time zone", clock.zone());
    match local_ip_address::local_ip() {
        Ok(ip) => info!("Reachable on the local network at http://{}:{}", ip, settings.port),
        Err(e) => warn!("Could not determine local IP address: {}", e),
    }

    let cors_origin = settings.cors_origin.clone();
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&cors_origin)
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .configure(social_api::configure(pool.clone(), clock, hub.clone()))
    })
    .bind((settings.host.as_str(), settings.port))
    .with_context(|| format!("Failed to bind {}:{}", settings.host, settings.port))?
    .run()
    .await
    .context("HTTP server exited with an error")
}
