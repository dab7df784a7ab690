use serde::Serialize;

use crate::stats::StatRange;

/// Which value axis a series is drawn against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Axis {
    #[default]
    Primary,
    Secondary,
}

/// One `(label, value, color, payload)` tuple plus optional hover text.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
    pub color: String,
    pub payload: String,
    pub text: Option<String>,
}

impl SeriesPoint {
    pub fn new(
        label: impl Into<String>,
        value: f64,
        color: impl Into<String>,
        payload: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            value,
            color: color.into(),
            payload: payload.into(),
            text: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// Ordered parallel sequences feeding one chart trace.
///
/// Points can only be appended whole, so every sequence has the same length.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    name: String,
    axis: Axis,
    labels: Vec<String>,
    values: Vec<f64>,
    colors: Vec<String>,
    payload: Vec<String>,
    text: Vec<Option<String>>,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn on_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn push(&mut self, point: SeriesPoint) {
        self.labels.push(point.label);
        self.values.push(point.value);
        self.colors.push(point.color);
        self.payload.push(point.payload);
        self.text.push(point.text);
    }

    pub fn point(&self, idx: usize) -> Option<SeriesPoint> {
        Some(SeriesPoint {
            label: self.labels.get(idx)?.clone(),
            value: *self.values.get(idx)?,
            color: self.colors.get(idx)?.clone(),
            payload: self.payload.get(idx)?.clone(),
            text: self.text.get(idx)?.clone(),
        })
    }

    /// Repeats the first point at the end, as polar charts require.
    pub fn closed(mut self) -> Self {
        if let Some(first) = self.point(0) {
            self.push(first);
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn payload(&self) -> &[String] {
        &self.payload
    }

    /// Hover text per point, `None` where the builder supplied none.
    pub fn text(&self) -> &[Option<String>] {
        &self.text
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// How to pull one value out of a named dataset for a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub dataset: String,
    pub field: String,
    pub label: String,
    /// Raw value is charted when no range is given.
    pub range: Option<StatRange>,
    pub color: String,
    pub axis: Axis,
}

impl FieldSpec {
    pub fn new(dataset: impl Into<String>, field: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            dataset: dataset.into(),
            field: field.into(),
            label: label.into(),
            range: None,
            color: String::new(),
            axis: Axis::Primary,
        }
    }

    pub fn scored(mut self, range: StatRange) -> Self {
        self.range = Some(range);
        self
    }

    pub fn colored(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn on_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }
}
