pub mod cards;
pub mod coerce;
pub mod matchup;
pub mod normalizer;

pub use cards::{build_stat_cards, StatCard};
pub use coerce::{coerce_field, coerce_number, COERCE_DEFAULT};
pub use matchup::{predict, Prediction};
pub use normalizer::{normalize, scale, Polarity, StatRange};
