use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::api::models::ErrorBody;
use crate::config::settings::AppConfig;
use crate::errors::{ChartError, MatchupError};
use crate::services::rendering::PageRenderer;

pub mod matchup;
pub mod pages;

pub struct AppState {
    pub renderer: PageRenderer,
    pub config: AppConfig,
}

pub fn chart_error_response(err: &ChartError) -> Response {
    let status = match err {
        ChartError::UnknownKind(_) | ChartError::UnknownPage(_) | ChartError::MissingPageKey(_) => {
            StatusCode::BAD_REQUEST
        }
        ChartError::PoolNotFound(_) | ChartError::PlayerNotFound(_) => StatusCode::NOT_FOUND,
        ChartError::SeriesCount { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_body(status, err)
}

pub fn matchup_error_response(err: &MatchupError) -> Response {
    let status = match err {
        MatchupError::MissingTeamNames => StatusCode::BAD_REQUEST,
        MatchupError::TeamNotFound(_) => StatusCode::NOT_FOUND,
        MatchupError::MissingStats(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_body(status, err)
}

fn error_body(status: StatusCode, err: &dyn std::error::Error) -> Response {
    (status, Json(ErrorBody { error: err.to_string() })).into_response()
}
