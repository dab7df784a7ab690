use super::join::{resolve_value, Datasets};
use super::types::{FieldSpec, Series, SeriesPoint};
use crate::config::aliases::AliasMap;
use crate::domain::Entity;

/// One statistic of a single entity, already read from its record.
#[derive(Debug, Clone, PartialEq)]
pub struct StatBar {
    pub label: String,
    pub value: f64,
    pub color: String,
}

impl StatBar {
    pub fn new(label: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            color: color.into(),
        }
    }
}

/// Comparative series: one per field spec, entities as categories.
///
/// Entities keep their input order and are never dropped; missing data shows
/// up as a zero (or scored-zero) bar. Each series keeps the axis tag of its
/// field spec so rate and ratio style metrics can share one category axis.
pub fn build_bar_series(
    entities: &[Entity],
    datasets: &Datasets,
    fields: &[FieldSpec],
    aliases: &AliasMap,
) -> Vec<Series> {
    fields
        .iter()
        .map(|spec| build_field_series(entities, datasets, spec, aliases))
        .collect()
}

fn build_field_series(
    entities: &[Entity],
    datasets: &Datasets,
    spec: &FieldSpec,
    aliases: &AliasMap,
) -> Series {
    let mut series = Series::new(&spec.label).on_axis(spec.axis);
    for entity in entities {
        let value = resolve_value(datasets, aliases, &entity.name, spec);
        series.push(SeriesPoint::new(&entity.name, value, &spec.color, &entity.name));
    }
    series
}

/// Single-entity series whose categories are stat labels (player page).
pub fn build_stat_bar_series(name: &str, identity: &str, bars: &[StatBar]) -> Series {
    let mut series = Series::new(name);
    for bar in bars {
        let point = SeriesPoint::new(&bar.label, bar.value, &bar.color, identity)
            .with_text(bar.value.to_string());
        series.push(point);
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::join::test_support::{hitting, pitching, record};
    use crate::series::join::Dataset;
    use crate::series::types::Axis;
    use crate::stats::StatRange;
    use serde_json::json;

    fn teams(names: &[&str]) -> Vec<Entity> {
        names.iter().map(|n| Entity::new(*n)).collect()
    }

    #[test]
    fn test_bar_series_follows_entity_order() {
        let datasets = Datasets::new().with("pitching", pitching()).with("hitting", hitting());
        let fields = vec![
            FieldSpec::new("pitching", "ERA", "ERA score")
                .scored(StatRange::lower_is_better(0.0, 10.0))
                .colored("#1f77b4"),
            FieldSpec::new("hitting", "OPS", "OPS score")
                .scored(StatRange::higher_is_better(0.3, 1.0))
                .colored("#ff7f0e"),
        ];
        let aliases = AliasMap::new([("USA", "United States")]);

        let series = build_bar_series(&teams(&["USA", "Japan", "Italy"]), &datasets, &fields, &aliases);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].labels(), ["USA", "Japan", "Italy"]);
        assert!((series[0].values()[0] - 60.0).abs() < 1e-9);
        assert_eq!(series[0].values()[1..], [75.0, 100.0]);
        assert_eq!(series[1].values()[2], 0.0);
        assert_eq!(series[1].payload(), ["USA", "Japan", "Italy"]);
        assert!(series[1].colors().iter().all(|c| c == "#ff7f0e"));
    }

    #[test]
    fn test_dual_scale_series_keep_axes_and_order() {
        let rows = [
            ("Japan", 2.5, 0.71),
            ("Korea", 3.1, 0.65),
            ("Cuba", 4.0, 0.80),
            ("Mexico", 1.8, 0.90),
        ];
        let records = rows
            .iter()
            .map(|(team, era, ops)| record(json!({"Team": team, "ERA": era, "OPS": ops})))
            .collect();
        let datasets = Datasets::new().with("team", Dataset::new("Team", records));
        let fields = vec![
            FieldSpec::new("team", "ERA", "ERA").on_axis(Axis::Primary),
            FieldSpec::new("team", "OPS", "OPS").on_axis(Axis::Secondary),
        ];
        let entities = teams(&["Japan", "Korea", "Cuba", "Mexico"]);

        let series = build_bar_series(&entities, &datasets, &fields, &AliasMap::default());

        assert_eq!(series[0].axis(), Axis::Primary);
        assert_eq!(series[1].axis(), Axis::Secondary);
        assert_eq!(series[0].values(), [2.5, 3.1, 4.0, 1.8]);
        assert_eq!(series[1].values(), [0.71, 0.65, 0.80, 0.90]);
        assert_eq!(series[1].labels(), series[0].labels());
    }

    #[test]
    fn test_stat_bar_series_carries_identity() {
        let bars = [
            StatBar::new("WHIP", 1.12, "#ff7f0e"),
            StatBar::new("ERA", 3.0, "#d62728"),
        ];
        let series = build_stat_bar_series("Pitching", "p7", &bars);

        assert_eq!(series.payload(), ["p7", "p7"]);
        assert_eq!(series.text()[1].as_deref(), Some("3"));
    }
}
