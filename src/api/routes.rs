use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    matchup::post_predict,
    pages::{
        get_home_page, get_player_page, get_pool_cards, get_pool_page, get_team_navigation,
        post_page_click,
    },
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/pages/home", get(get_home_page))
        .route("/api/pages/pool/:pool", get(get_pool_page))
        .route("/api/pages/player/:id", get(get_player_page))
        .route("/api/click/:page", post(post_page_click))
        .route("/api/pools/:pool/cards", get(get_pool_cards))
        .route("/api/predict", post(post_predict))
        .route("/api/navigate/:team", get(get_team_navigation))
        .with_state(state)
}
