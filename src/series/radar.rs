use super::join::{resolve_value, Datasets};
use super::types::{FieldSpec, Series, SeriesPoint};
use crate::config::aliases::AliasMap;
use crate::domain::Entity;

/// One closed polar series per entity, axes in field-spec order.
pub fn build_radar_series(
    entities: &[Entity],
    datasets: &Datasets,
    fields: &[FieldSpec],
    aliases: &AliasMap,
) -> Vec<Series> {
    entities
        .iter()
        .map(|entity| build_entity_series(entity, datasets, fields, aliases))
        .collect()
}

fn build_entity_series(
    entity: &Entity,
    datasets: &Datasets,
    fields: &[FieldSpec],
    aliases: &AliasMap,
) -> Series {
    let mut series = Series::new(&entity.name);
    for spec in fields {
        let score = resolve_value(datasets, aliases, &entity.name, spec);
        series.push(SeriesPoint::new(&spec.label, score, &spec.color, &entity.name));
    }
    series.closed()
}
