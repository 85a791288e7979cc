use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use crate::handlers;
use crate::llm::OpenAIProvider;
use crate::state::AppState;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub llm_base_url: String,
    pub model: String,
    pub api_key: String,
}

/// Route table, shared by the server and handler tests.
pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/chat", web::post().to(handlers::chat::handler))
            .route("/health", web::get().to(handlers::health::handler)),
    );
}

pub async fn run_server(config: ServerConfig) -> io::Result<()> {
    log::info!(
        "Initializing server with LLM base URL: {}, model: {}",
        config.llm_base_url,
        config.model
    );

    let provider = OpenAIProvider::new(config.api_key.clone())
        .with_base_url(config.llm_base_url.clone())
        .with_model(config.model.clone());
    let state = web::Data::new(AppState::new(Arc::new(provider)));

    log::info!("Listening on {}:{}", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .configure(app_config)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
