use serde::Serialize;

use crate::stats::StatCard;

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Serialize)]
pub struct NavigationResponse {
    pub path: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolCardsResponse {
    pub pool_name: String,
    pub cards: Vec<StatCard>,
}
