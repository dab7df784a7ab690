//! Stat ranges and chart field presets used by the pool pages.
//!
//! ERA and WHIP score higher when lower; OPS, OBP and SLG score higher when higher.

use crate::series::{Axis, FieldSpec};
use crate::stats::StatRange;

pub const HITTING: &str = "hitting";
pub const PITCHING: &str = "pitching";

/// Key field of the hitting and pitching datasets
pub const TEAM_KEY: &str = "Team";

pub const ERA_RANGE: StatRange = StatRange::lower_is_better(0.0, 10.0);
pub const OPS_RANGE: StatRange = StatRange::higher_is_better(0.3, 1.0);
pub const WHIP_RANGE: StatRange = StatRange::lower_is_better(0.0, 5.0);
pub const OBP_RANGE: StatRange = StatRange::higher_is_better(0.2, 0.5);
pub const SLG_RANGE: StatRange = StatRange::higher_is_better(0.3, 1.0);

/// Tighter ranges for the pool stat cards
pub const CARD_ERA_RANGE: StatRange = StatRange::lower_is_better(0.0, 10.0);
pub const CARD_OPS_RANGE: StatRange = StatRange::higher_is_better(0.6, 1.0);
pub const CARD_WHIP_RANGE: StatRange = StatRange::lower_is_better(0.8, 2.0);

/// Substituted on the cards when a team has no value for the stat
pub const CARD_ERA_DEFAULT: f64 = 10.0;
pub const CARD_OPS_DEFAULT: f64 = 0.6;
pub const CARD_WHIP_DEFAULT: f64 = 2.0;

/// ERA score vs OPS score, grouped per team
pub fn pool_bar_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new(PITCHING, "ERA", "ERA score").scored(ERA_RANGE).colored("#1f77b4"),
        FieldSpec::new(HITTING, "OPS", "OPS score").scored(OPS_RANGE).colored("#ff7f0e"),
    ]
}

/// Raw ERA and OPS on separate value axes
pub fn pool_raw_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new(PITCHING, "ERA", "ERA").colored("#d62728"),
        FieldSpec::new(HITTING, "OPS", "OPS").colored("#2ca02c").on_axis(Axis::Secondary),
    ]
}

/// Five-axis team strength profile
pub fn radar_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new(PITCHING, "ERA", "ERA score").scored(ERA_RANGE),
        FieldSpec::new(HITTING, "OPS", "OPS score").scored(OPS_RANGE),
        FieldSpec::new(PITCHING, "WHIP", "WHIP score").scored(WHIP_RANGE),
        FieldSpec::new(HITTING, "OBP", "OBP score").scored(OBP_RANGE),
        FieldSpec::new(HITTING, "SLG", "SLG score").scored(SLG_RANGE),
    ]
}
