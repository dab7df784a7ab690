use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use std::sync::{Arc, Mutex};

use super::{chart_error_response, AppState};
use crate::api::models::{NavigationResponse, PoolCardsResponse};
use crate::api::navigation::team_path;
use crate::chart::{bind_click, ChartKind, PointEvent};
use crate::services::rendering::Page;
use crate::stats::build_stat_cards;

#[derive(Deserialize)]
pub struct PageParams {
    /// Only return plots of this chart kind
    pub kind: Option<String>,
}

#[derive(Deserialize)]
pub struct ClickRequest {
    pub key: Option<String>,
    pub target: String,
    pub event: PointEvent,
}

pub async fn get_team_navigation(Path(team): Path<String>) -> Json<NavigationResponse> {
    Json(NavigationResponse {
        path: team_path(&team),
    })
}

pub async fn get_home_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> impl IntoResponse {
    page_response(&state, &Page::Home, &params)
}

pub async fn get_pool_page(
    State(state): State<Arc<AppState>>,
    Path(pool): Path<String>,
    Query(params): Query<PageParams>,
) -> impl IntoResponse {
    page_response(&state, &Page::Pool(pool), &params)
}

pub async fn get_player_page(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<String>,
    Query(params): Query<PageParams>,
) -> impl IntoResponse {
    page_response(&state, &Page::Player(player_id), &params)
}

fn page_response(state: &AppState, page: &Page, params: &PageParams) -> Response {
    let kind = match params.kind.as_deref().map(str::parse::<ChartKind>).transpose() {
        Ok(kind) => kind,
        Err(e) => return chart_error_response(&e),
    };

    let mut rendered = match state.renderer.render_page(page) {
        Ok(rendered) => rendered,
        Err(e) => return chart_error_response(&e),
    };

    if let Some(kind) = kind {
        rendered.plan.retain_kind(kind);
    }
    Json(rendered.plan).into_response()
}

/// Resolves a click on a rendered chart to the page it should open.
pub async fn post_page_click(
    State(state): State<Arc<AppState>>,
    Path(page): Path<String>,
    Json(request): Json<ClickRequest>,
) -> impl IntoResponse {
    let page = match Page::parse(&page, request.key.as_deref()) {
        Ok(page) => page,
        Err(e) => return chart_error_response(&e),
    };

    let mut rendered = match state.renderer.render_page(&page) {
        Ok(rendered) => rendered,
        Err(e) => return chart_error_response(&e),
    };

    let Some(chart) = rendered.navigable_chart(&request.target) else {
        return (
            StatusCode::NOT_FOUND,
            format!("No clickable chart in #{}", request.target),
        )
            .into_response();
    };

    let destination = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&destination);
    bind_click(chart, move |team| {
        if let Ok(mut slot) = sink.lock() {
            *slot = Some(team_path(team));
        }
    });
    chart.dispatch_click(&request.event);

    let path = destination.lock().ok().and_then(|mut slot| slot.take());
    match path {
        Some(path) => Json(NavigationResponse { path }).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

pub async fn get_pool_cards(
    State(state): State<Arc<AppState>>,
    Path(pool_key): Path<String>,
) -> impl IntoResponse {
    let pool = match state.renderer.pool(&pool_key) {
        Ok(pool) => pool,
        Err(e) => return chart_error_response(&e),
    };

    let cards = build_stat_cards(&pool.teams, &state.renderer.data().teams);
    Json(PoolCardsResponse {
        pool_name: pool.display_name(&pool_key.to_uppercase()),
        cards,
    })
    .into_response()
}
