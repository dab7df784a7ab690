use super::types::{Series, SeriesPoint};

/// Raw count for one slice of a categorical chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub label: String,
    pub value: f64,
    pub color: String,
}

impl Category {
    pub fn new(label: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            color: color.into(),
        }
    }
}

/// Outcome of building a categorical series.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoricalSeries {
    Data(Series),
    /// Nothing left to chart; callers show a placeholder instead.
    NoData,
}

impl CategoricalSeries {
    pub fn is_no_data(&self) -> bool {
        matches!(self, CategoricalSeries::NoData)
    }
}

/// Drops zero-valued categories and keeps the survivors in order.
///
/// Only an exact `0` is dropped. If what remains sums to zero the result is
/// [`CategoricalSeries::NoData`], never an empty series.
pub fn build_pie_series(name: &str, categories: &[Category], identity: &str) -> CategoricalSeries {
    let mut series = Series::new(name);
    for category in categories.iter().filter(|c| c.value != 0.0) {
        series.push(SeriesPoint::new(&category.label, category.value, &category.color, identity));
    }

    if series.total() == 0.0 {
        return CategoricalSeries::NoData;
    }
    CategoricalSeries::Data(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(values: &[f64]) -> Vec<Category> {
        let labels = ["1B", "2B", "3B", "HR", "OUT"];
        let colors = ["#1f77b4", "#2ca02c", "#9467bd", "#d62728", "#7f7f7f"];
        values
            .iter()
            .enumerate()
            .map(|(i, v)| Category::new(labels[i], *v, colors[i]))
            .collect()
    }

    #[test]
    fn test_zero_categories_are_filtered() {
        let built = build_pie_series("Outcomes", &categories(&[3.0, 0.0, 5.0, 0.0, 2.0]), "b1");

        let CategoricalSeries::Data(series) = built else {
            panic!("expected data");
        };
        assert_eq!(series.len(), 3);
        assert_eq!(series.labels(), ["1B", "3B", "OUT"]);
        assert_eq!(series.values(), [3.0, 5.0, 2.0]);
        assert_eq!(series.colors(), ["#1f77b4", "#9467bd", "#7f7f7f"]);
    }

    #[test]
    fn test_all_zero_is_no_data() {
        let built = build_pie_series("Outcomes", &categories(&[0.0, 0.0, 0.0, 0.0, 0.0]), "b1");
        assert!(built.is_no_data());
        assert!(build_pie_series("Outcomes", &[], "b1").is_no_data());
    }
}
