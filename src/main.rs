use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod errors;
mod models;
mod store;
mod validation;

use config::Config;
use store::NoteStore;

pub struct AppState {
    pub store: Arc<NoteStore>,
    /// Server start time for uptime calculation
    pub started_at: std::time::Instant,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let port = config.port;
    let bind_address = config.bind_address.clone();

    log::info!("notes-service v{}", env!("CARGO_PKG_VERSION"));

    // The store lives for the whole process and is shared by every worker
    let store = Arc::new(NoteStore::new());
    let started_at = std::time::Instant::now();

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(AppState {
                store: Arc::clone(&store),
                started_at,
            }))
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config_routes)
            .configure(controllers::notes::config)
            .configure(controllers::docs::config)
    })
    .bind((bind_address.as_str(), port))?
    .run();

    log::info!("Listening on {}:{}", bind_address, port);

    // Get server handle for graceful shutdown
    let server_handle = server.handle();

    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
        log::info!("Received Ctrl+C, shutting down...");
        server_handle.stop(true).await;
        log::info!("Shutdown complete");
    });

    server.await
}
