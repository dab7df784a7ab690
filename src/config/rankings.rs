use chrono::NaiveDate;
use std::collections::HashMap;

/// Fixed world-ranking reference table keyed by canonical country name.
///
/// Only countries present here are drawn on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct RankTable {
    as_of: Option<NaiveDate>,
    ranks: HashMap<String, u32>,
}

impl RankTable {
    pub fn new<I, K>(as_of: Option<NaiveDate>, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, u32)>,
        K: Into<String>,
    {
        Self {
            as_of,
            ranks: entries.into_iter().map(|(k, r)| (k.into(), r)).collect(),
        }
    }

    pub fn rank(&self, country: &str) -> Option<u32> {
        self.ranks.get(country).copied()
    }

    pub fn as_of(&self) -> Option<NaiveDate> {
        self.as_of
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

/// WBSC men's baseball world ranking, published 2025-11-11
pub fn default_rank_table() -> RankTable {
    RankTable::new(
        NaiveDate::from_ymd_opt(2025, 11, 11),
        [
            ("Japan", 1),
            ("Chinese Taipei", 2),
            ("United States", 3),
            ("Korea", 4),
            ("Venezuela", 5),
            ("Mexico", 6),
            ("Puerto Rico", 7),
            ("Panama", 8),
            ("Cuba", 9),
            ("Netherlands", 10),
            ("Australia", 11),
            ("Dominican Republic", 12),
            ("Colombia", 13),
            ("Italy", 14),
            ("Czech Republic", 15),
            ("Nicaragua", 16),
            ("Great Britain", 19),
            ("Canada", 20),
            ("Israel", 21),
            ("Brazil", 22),
        ],
    )
}
