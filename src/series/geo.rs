use log::debug;
use std::collections::HashSet;

use super::types::{Series, SeriesPoint};
use crate::config::aliases::AliasMap;
use crate::config::rankings::RankTable;
use crate::domain::Pool;

/// Choropleth series of ranked participating countries.
///
/// Pools are walked in the order given. A team is skipped when its canonical
/// country was already emitted or has no rank. Labels are canonical country
/// names, values are ranks, and the payload keeps the team name as listed in
/// the pool.
pub fn build_geo_series<'a, I>(pools: I, ranks: &RankTable, aliases: &AliasMap) -> Series
where
    I: IntoIterator<Item = (&'a String, &'a Pool)>,
{
    let mut series = Series::new("World rank");
    let mut seen: HashSet<String> = HashSet::new();

    for (key, pool) in pools {
        let pool_name = pool.display_name(key);

        for team in &pool.teams {
            if team.name.is_empty() {
                continue;
            }

            let country = aliases.canonical(&team.name);
            if !seen.insert(country.to_string()) {
                continue;
            }

            let Some(rank) = ranks.rank(country) else {
                debug!("{} has no world rank, leaving it off the map", country);
                continue;
            };

            let text = format!("{} ({}) - World Rank: {}", team.name, pool_name, rank);
            series.push(SeriesPoint::new(country, f64::from(rank), "", &team.name).with_text(text));
        }
    }

    series
}
