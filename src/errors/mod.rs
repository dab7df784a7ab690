use anyhow::Context as _;
use thiserror::Error;

use crate::chart::ChartKind;

/// Errors raised while turning data into charts or pages.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("unknown chart kind: {0}")]
    UnknownKind(String),
    #[error("unknown page: {0}")]
    UnknownPage(String),
    #[error("{kind} chart expects exactly {expected} series, got {actual}")]
    SeriesCount {
        kind: ChartKind,
        expected: usize,
        actual: usize,
    },
    #[error("pool not found: {0}")]
    PoolNotFound(String),
    #[error("player not found: {0}")]
    PlayerNotFound(String),
    #[error("{0} page needs a key")]
    MissingPageKey(String),
}

/// Errors of the head-to-head predictor.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchupError {
    #[error("missing team names")]
    MissingTeamNames,
    #[error("team data not found: {0}")]
    TeamNotFound(String),
    #[error("team stats (OPS/ERA) missing for {0}")]
    MissingStats(String),
}

/// Add context to data file load errors
pub fn load_context(key: &str) -> String {
    format!("Failed to load data file: {}", key)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, data_type: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(parse_context(data_type))
}
