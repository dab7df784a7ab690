//! Chart specification in the vocabulary of the browser charting library.
//!
//! Everything here serializes straight into the `traces` / `layout` /
//! `config` arguments of a `newPlot` call.

use serde::Serialize;

use super::kind::ChartKind;

/// Immutable chart description handed to the rendering capability.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    kind: ChartKind,
    traces: Vec<Trace>,
    layout: Layout,
    config: RenderConfig,
}

impl ChartSpec {
    pub(crate) fn new(kind: ChartKind, traces: Vec<Trace>, layout: Layout, config: RenderConfig) -> Self {
        Self { kind, traces, layout, config }
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Bar(BarTrace),
    Pie(PieTrace),
    Scatterpolar(PolarTrace),
    Choropleth(ChoroplethTrace),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(String),
    PerPoint(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarMarker {
    pub color: ColorSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textposition: Option<String>,
    pub marker: BarMarker,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offsetgroup: Option<String>,
    pub customdata: Vec<String>,
    pub hovertemplate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieMarker {
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieTrace {
    pub name: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub hole: f64,
    pub textinfo: String,
    pub textposition: String,
    pub textfont: Font,
    pub marker: PieMarker,
    pub customdata: Vec<String>,
    pub hovertemplate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolarTrace {
    pub name: String,
    pub r: Vec<f64>,
    pub theta: Vec<String>,
    pub fill: String,
    pub customdata: Vec<String>,
    pub hovertemplate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoroplethTrace {
    pub locationmode: String,
    pub locations: Vec<String>,
    pub z: Vec<f64>,
    pub text: Vec<String>,
    pub customdata: Vec<String>,
    pub hovertemplate: String,
    pub colorscale: String,
    pub reversescale: bool,
    pub showscale: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<AxisLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<AxisLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis2: Option<AxisLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polar: Option<PolarLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autosize: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AxisLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlaying: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadialAxis {
    pub visible: bool,
    pub range: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolarLayout {
    pub radialaxis: RadialAxis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoLayout {
    pub projection: Projection,
    pub showland: bool,
    pub landcolor: String,
    pub showcountries: bool,
    pub countrycolor: String,
    pub countrywidth: f64,
    pub showcoastlines: bool,
    pub coastlinecolor: String,
    pub coastlinewidth: f64,
}

impl Default for GeoLayout {
    fn default() -> Self {
        Self {
            projection: Projection { kind: "robinson".to_string() },
            showland: true,
            landcolor: "White".to_string(),
            showcountries: true,
            countrycolor: "rgba(0, 0, 0, 1)".to_string(),
            countrywidth: 0.5,
            showcoastlines: true,
            coastlinecolor: "rgba(0, 0, 0, 1)".to_string(),
            coastlinewidth: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub t: u32,
    pub b: u32,
    pub l: u32,
    pub r: u32,
}

impl Margin {
    pub const fn uniform(px: u32) -> Self {
        Self { t: px, b: px, l: px, r: px }
    }
}

/// Options passed alongside traces and layout when drawing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_mode_bar: Option<bool>,
}

impl RenderConfig {
    /// Responsive, no toolbar; used for the compact player charts.
    pub const fn compact() -> Self {
        Self {
            responsive: Some(true),
            display_mode_bar: Some(false),
        }
    }
}
