use serde::Serialize;

use super::coerce::coerce_number;
use crate::config::ranges::{
    CARD_ERA_DEFAULT, CARD_ERA_RANGE, CARD_OPS_DEFAULT, CARD_OPS_RANGE, CARD_WHIP_DEFAULT,
    CARD_WHIP_RANGE,
};
use crate::domain::{Entity, StatRecord, Teams};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardStats {
    #[serde(rename = "ERA")]
    pub era: f64,
    #[serde(rename = "OPS")]
    pub ops: f64,
    #[serde(rename = "WHIP")]
    pub whip: f64,
}

/// Team card on the pool page: raw team stats and their 0-100 scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub name: String,
    pub raw: CardStats,
    pub normalized: CardStats,
}

pub fn build_stat_cards(entities: &[Entity], teams: &Teams) -> Vec<StatCard> {
    entities
        .iter()
        .map(|entity| {
            let stats = teams.get(&entity.name).map(|t| &t.team_stats);
            build_card(&entity.name, stats)
        })
        .collect()
}

fn build_card(name: &str, stats: Option<&StatRecord>) -> StatCard {
    let raw = CardStats {
        era: stat_or(stats, "ERA", CARD_ERA_DEFAULT),
        ops: stat_or(stats, "OPS", CARD_OPS_DEFAULT),
        whip: stat_or(stats, "WHIP", CARD_WHIP_DEFAULT),
    };
    let normalized = CardStats {
        era: CARD_ERA_RANGE.score(raw.era),
        ops: CARD_OPS_RANGE.score(raw.ops),
        whip: CARD_WHIP_RANGE.score(raw.whip),
    };

    StatCard {
        name: name.to_string(),
        raw,
        normalized,
    }
}

fn stat_or(stats: Option<&StatRecord>, field: &str, default: f64) -> f64 {
    stats
        .and_then(|s| s.get(field))
        .map(coerce_number)
        .unwrap_or(default)
}
