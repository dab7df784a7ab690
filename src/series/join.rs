use log::debug;
use serde_json::Value;
use std::collections::HashMap;

use super::types::FieldSpec;
use crate::config::aliases::AliasMap;
use crate::domain::StatRecord;
use crate::stats::coerce_field;

/// Records of one statistic source, matched on `key_field`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    key_field: String,
    records: Vec<StatRecord>,
}

impl Dataset {
    pub fn new(key_field: impl Into<String>, records: Vec<StatRecord>) -> Self {
        Self {
            key_field: key_field.into(),
            records,
        }
    }

    /// First record whose key field equals `name` exactly.
    pub fn find(&self, name: &str) -> Option<&StatRecord> {
        self.records
            .iter()
            .find(|record| record.get(&self.key_field).and_then(Value::as_str) == Some(name))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Datasets addressable by the name a [`FieldSpec`] refers to.
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    inner: HashMap<String, Dataset>,
}

impl Datasets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, dataset: Dataset) -> Self {
        self.inner.insert(name.into(), dataset);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Dataset> {
        self.inner.get(name)
    }
}

/// Value of `spec` for the entity called `name`.
///
/// The name goes through the alias map first. A missing dataset, record or
/// field reads as `0` before scoring.
pub fn resolve_value(datasets: &Datasets, aliases: &AliasMap, name: &str, spec: &FieldSpec) -> f64 {
    let canonical = aliases.canonical(name);
    let record = find_record(datasets, &spec.dataset, canonical);
    if record.is_none() {
        debug!("No {} record for {}, defaulting {} to 0", spec.dataset, canonical, spec.field);
    }

    let raw = coerce_field(record, &spec.field);
    match &spec.range {
        Some(range) => range.score(raw),
        None => raw,
    }
}

fn find_record<'a>(datasets: &'a Datasets, dataset: &str, canonical: &str) -> Option<&'a StatRecord> {
    datasets.get(dataset).and_then(|d| d.find(canonical))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use serde_json::json;

    pub fn record(value: Value) -> StatRecord {
        match value {
            Value::Object(map) => map,
            _ => StatRecord::new(),
        }
    }

    pub fn pitching() -> Dataset {
        Dataset::new(
            "Team",
            vec![
                record(json!({"Team": "Japan", "ERA": 2.5, "WHIP": "1.05"})),
                record(json!({"Team": "United States", "ERA": "4.0", "WHIP": 1.4})),
            ],
        )
    }

    pub fn hitting() -> Dataset {
        Dataset::new(
            "Team",
            vec![
                record(json!({"Team": "Japan", "OPS": 0.86, "OBP": 0.37, "SLG": 0.49})),
                record(json!({"Team": "United States", "OPS": "0.79", "OBP": 0.34, "SLG": 0.45})),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::stats::StatRange;

    #[test]
    fn test_resolve_value_through_alias() {
        let datasets = Datasets::new().with("pitching", pitching());
        let aliases = AliasMap::new([("USA", "United States")]);
        let spec = FieldSpec::new("pitching", "ERA", "ERA");

        assert_eq!(resolve_value(&datasets, &aliases, "USA", &spec), 4.0);
    }

    #[test]
    fn test_missing_record_defaults_to_zero_before_scoring() {
        let datasets = Datasets::new().with("pitching", pitching());
        let aliases = AliasMap::default();
        let raw = FieldSpec::new("pitching", "ERA", "ERA");
        let scored = raw.clone().scored(StatRange::lower_is_better(0.0, 10.0));

        assert_eq!(resolve_value(&datasets, &aliases, "Brazil", &raw), 0.0);
        assert_eq!(resolve_value(&datasets, &aliases, "Brazil", &scored), 100.0);
    }

    #[test]
    fn test_unknown_dataset_defaults_to_zero() {
        let spec = FieldSpec::new("fielding", "FPCT", "FPCT");
        assert_eq!(resolve_value(&Datasets::new(), &AliasMap::default(), "Japan", &spec), 0.0);
    }
}
