pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use chess_core::GameController;
use tokio::sync::Mutex;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::config::Config;

/// The single live game. Every request goes through this lock, so moves are
/// applied one at a time.
pub type SharedGame = Arc<Mutex<GameController>>;

pub fn new_game(config: &Config) -> SharedGame {
    let game = GameController::new().with_king_safety(config.enforce_king_safety);
    Arc::new(Mutex::new(game))
}

/// Build the HTTP router. Unmatched paths are served from `config.static_dir`.
pub fn router(game: SharedGame, config: &Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/board_state", get(routes::game::get_board_state))
        .route("/move", post(routes::game::make_move))
        .route("/reset", post(routes::game::reset_game))
        .route("/legal_moves", get(routes::game::get_legal_moves))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(Extension(game))
        .layer(CompressionLayer::new())
        .layer(cors)
}
