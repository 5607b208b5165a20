use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub mod cli;
use cli::Cli;

pub mod db;

mod errors;
pub use errors::*;

mod form_or_json;
pub use form_or_json::*;

mod state;
pub use state::*;

pub mod routes;

/// Builds the full application: the JSON API, the landing page at `/` and
/// the public assets for everything else
pub fn app(state: AppState, args: &Cli) -> Router {
    let cors = match &args.cors_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin.clone())
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::permissive(),
    };

    routes::router()
        .route_service("/", ServeFile::new(args.views_dir.join("index.html")))
        .fallback_service(ServeDir::new(&args.public_dir))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
