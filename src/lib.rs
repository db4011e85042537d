use actix_web::web;
use sqlx::SqlitePool;

pub mod client;
pub mod config;
pub mod databases;
pub mod routes;
pub mod services;

use services::clock::MessageClock;
use services::hub::ConversationHub;

/// Registers shared state and every route on an actix `App`.
pub fn configure(
    pool: SqlitePool,
    clock: MessageClock,
    hub: ConversationHub,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(pool))
            .app_data(web::Data::new(clock))
            .app_data(web::Data::new(hub));
        routes::init(cfg);
    }
}
