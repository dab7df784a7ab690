use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use log::info;
use serde::Deserialize;
use std::sync::Arc;

use super::{matchup_error_response, AppState};
use crate::stats::predict;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictRequest {
    pub team_a: Option<String>,
    pub team_b: Option<String>,
}

pub async fn post_predict(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictRequest>,
) -> impl IntoResponse {
    let team_a = request.team_a.unwrap_or_default();
    let team_b = request.team_b.unwrap_or_default();

    match predict(&state.renderer.data().teams, &team_a, &team_b) {
        Ok(prediction) => {
            info!("Predicted {} vs {}: {}", team_a, team_b, prediction.winner);
            Json(prediction).into_response()
        }
        Err(e) => matchup_error_response(&e),
    }
}
