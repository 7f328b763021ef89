use std::{net::SocketAddr, sync::Arc, time::Duration};

#[macro_use]
extern crate lazy_static;

use axum::{error_handling::HandleErrorLayer, extract::DefaultBodyLimit, BoxError};
use parking_lot::Mutex;
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::{
    app::{envy::Envy, errors::DefaultApiError, models::session::Session},
    generations::{
        apis::{dream_chef::service::DreamChefApi, GenerationApi},
        enums::generation_mode::GenerationMode,
    },
};

mod app;
mod exports;
mod generations;
mod inputs;
mod pages;

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
    pub mode: GenerationMode,
    pub api: Arc<dyn GenerationApi>,
    pub client: reqwest::Client,
    pub envy: Arc<Envy>,
}

impl AppState {
    pub fn new(
        envy: Envy,
        mode: GenerationMode,
        api: Arc<dyn GenerationApi>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::new(mode))),
            mode,
            api,
            client,
            envy: Arc::new(envy),
        }
    }
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or(EnvFilter::new("dream_chef=debug,tower_http=debug")),
        )
        .init();

    // environment
    let envy = match Envy::load() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    let mode = match &envy.generation_mode {
        Some(value) => match GenerationMode::from_value(value) {
            Some(mode) => mode,
            None => panic!("unknown generation_mode {}", value),
        },
        None => GenerationMode::Split,
    };

    // properties
    let port = envy.port.to_owned().unwrap_or(3000);
    let client = reqwest::Client::new();
    let api = match DreamChefApi::new(client.clone(), &envy.api_url, envy.error_field.to_owned()) {
        Ok(api) => api,
        Err(e) => panic!("{}", e),
    };

    tracing::info!(
        "generation service at {} ({} mode)",
        envy.api_url,
        mode.value()
    );

    let state = AppState::new(envy, mode, Arc::new(api), client);

    // app
    let app = app::router::routes(state.clone())
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(TraceLayer::new_for_http())
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|err: BoxError| async move {
                    tracing::error!(%err);
                    DefaultApiError::InternalServerError.value()
                }))
                .layer(BufferLayer::new(1024))
                .layer(RateLimitLayer::new(20, Duration::from_secs(1))),
        );

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    tracing::info!("listening on http://{}", addr);

    let server = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal());

    if let Err(e) = server.await {
        tracing::error!(%e);
    }

    state.session.lock().unload_guard.detach();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(%e);
    }
    tracing::info!("shutting down");
}
