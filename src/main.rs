use crate::db::{initialize_store, Database};
use crate::router::{handle, AppContext};
use crate::session::SessionRegistry;
use astra::Server;
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::time::Duration;

mod db;
mod domain;
mod errors;
mod forms;
mod responses;
mod router;
mod session;
mod settings;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let settings = match settings::load_settings() {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    // Create the listings store on first run
    let db = Database::new(&settings.database_path);
    if let Err(e) = initialize_store(&db) {
        log::error!("Database initialization failed: {e}");
        std::process::exit(1);
    }

    let addr: SocketAddr = match format!("{}:{}", settings.address, settings.port).parse() {
        Ok(addr) => addr,
        Err(e) => {
            log::error!("Invalid bind address: {e}");
            std::process::exit(1);
        }
    };

    let ctx = AppContext {
        db,
        sessions: SessionRegistry::new(
            Duration::from_secs(settings.session_ttl_secs),
            settings.max_sessions,
        ),
        map: settings.map.clone(),
    };

    log::info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(settings.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &ctx) {
        Ok(resp) => resp,
        Err(err) => {
            log::warn!("Request failed: {err}");
            templates::html_error_response(err)
        }
    });

    if let Err(e) = result {
        log::error!("Server ended with error: {e}");
    }

    log::info!("Server shut down cleanly.");
}
