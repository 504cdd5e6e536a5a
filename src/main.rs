use crate::applyhome::ApplyhomeClient;
use crate::board::BoardController;
use crate::config::AppConfig;
use crate::router::{handle, AppState};
use astra::Server;
use tracing::{error, info, warn};

mod applyhome;
mod board;
mod config;
mod domain;
mod errors;
mod logging;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    logging::init();

    // 1️⃣ Read configuration
    let config = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("configuration failed: {e}");
            std::process::exit(1);
        }
    };
    if config.api.service_key.is_none() {
        warn!("APPLYHOME_SERVICE_KEY is not set; the board will show a configuration error");
    }

    // 2️⃣ Build the API client and the board
    let client = match ApplyhomeClient::new(config.api.clone()) {
        Ok(c) => c,
        Err(e) => {
            error!("HTTP client init failed: {e}");
            std::process::exit(1);
        }
    };
    let state = AppState::new(BoardController::new(client, config.items_per_page));

    // 3️⃣ Start the server
    info!(addr = %config.bind_addr, "starting server at http://{}", config.bind_addr);

    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => responses::html_error_response(err),
    });

    if let Err(e) = result {
        error!("server ended with error: {e}");
    }

    info!("server shut down cleanly");
}
