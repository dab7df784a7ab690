use super::kind::ChartKind;
use super::options::ChartOptions;
use super::spec::{
    AxisLayout, BarMarker, BarTrace, ChartSpec, ChoroplethTrace, ColorSpec, Font, GeoLayout, Layout,
    PieMarker, PieTrace, PolarLayout, PolarTrace, RadialAxis, Trace,
};
use crate::errors::ChartError;
use crate::series::{Axis, Series};

const SECONDARY_AXIS_REF: &str = "y2";

/// Shapes built series into a chart spec of the requested kind.
///
/// Bar and radar charts take one trace per series. Pie and choropleth charts
/// take exactly one series.
pub fn to_chart_spec(series: &[Series], kind: ChartKind, options: &ChartOptions) -> Result<ChartSpec, ChartError> {
    let (traces, layout) = match kind {
        ChartKind::Bar => (bar_traces(series, options), bar_layout(series, options)),
        ChartKind::Pie => {
            let single = expect_single(series, kind)?;
            (vec![Trace::Pie(pie_trace(single, options))], base_layout(options))
        }
        ChartKind::Radar => (radar_traces(series), radar_layout(options)),
        ChartKind::Choropleth => {
            let single = expect_single(series, kind)?;
            (vec![Trace::Choropleth(choropleth_trace(single, options))], geo_layout(options))
        }
    };

    Ok(ChartSpec::new(kind, traces, layout, options.render))
}

fn expect_single(series: &[Series], kind: ChartKind) -> Result<&Series, ChartError> {
    match series {
        [single] => Ok(single),
        _ => Err(ChartError::SeriesCount {
            kind,
            expected: 1,
            actual: series.len(),
        }),
    }
}

// --- Bar ---

fn bar_traces(series: &[Series], options: &ChartOptions) -> Vec<Trace> {
    let dual = has_secondary(series);
    series
        .iter()
        .enumerate()
        .map(|(idx, s)| Trace::Bar(bar_trace(s, idx, dual, options)))
        .collect()
}

fn bar_trace(series: &Series, idx: usize, dual: bool, options: &ChartOptions) -> BarTrace {
    let (text, textposition) = if options.show_values {
        (Some(point_text(series)), Some("auto".to_string()))
    } else {
        (None, None)
    };

    BarTrace {
        name: series.name().to_string(),
        x: series.labels().to_vec(),
        y: series.values().to_vec(),
        text,
        textposition,
        marker: BarMarker { color: bar_color(series) },
        yaxis: (series.axis() == Axis::Secondary).then(|| SECONDARY_AXIS_REF.to_string()),
        offsetgroup: dual.then(|| idx.to_string()),
        customdata: series.payload().to_vec(),
        hovertemplate: bar_hover_template(series),
    }
}

/// One colour for the whole trace when all points agree, otherwise per point.
fn bar_color(series: &Series) -> ColorSpec {
    let colors = series.colors();
    match colors.first() {
        Some(first) if colors.iter().all(|c| c == first) => ColorSpec::Single(first.clone()),
        _ => ColorSpec::PerPoint(colors.to_vec()),
    }
}

fn bar_hover_template(series: &Series) -> String {
    format!("<b>%{{x}}</b><br>{}: %{{y}}<extra></extra>", series.name())
}

fn bar_layout(series: &[Series], options: &ChartOptions) -> Layout {
    let mut layout = base_layout(options);
    layout.barmode = Some(options.bar_mode.as_str().to_string());
    layout.xaxis = titled_axis(&options.x_axis_title);
    layout.yaxis = titled_axis(&options.y_axis_title);

    if has_secondary(series) {
        layout.yaxis2 = Some(AxisLayout {
            title: options.secondary_axis_title.clone(),
            overlaying: Some("y".to_string()),
            side: Some("right".to_string()),
        });
    }
    layout
}

fn has_secondary(series: &[Series]) -> bool {
    series.iter().any(|s| s.axis() == Axis::Secondary)
}

fn titled_axis(title: &Option<String>) -> Option<AxisLayout> {
    title.as_ref().map(|t| AxisLayout {
        title: Some(t.clone()),
        ..AxisLayout::default()
    })
}

// --- Pie ---

fn pie_trace(series: &Series, options: &ChartOptions) -> PieTrace {
    PieTrace {
        name: series.name().to_string(),
        labels: series.labels().to_vec(),
        values: series.values().to_vec(),
        hole: options.hole,
        textinfo: "label+value+percent".to_string(),
        textposition: "outside".to_string(),
        textfont: Font { size: 14 },
        marker: PieMarker {
            colors: series.colors().to_vec(),
        },
        customdata: series.payload().to_vec(),
        hovertemplate: "<b>%{label}</b><br>Value: %{value}<br>Share: %{percent}<extra></extra>".to_string(),
    }
}

// --- Radar ---

fn radar_traces(series: &[Series]) -> Vec<Trace> {
    series
        .iter()
        .map(|s| {
            Trace::Scatterpolar(PolarTrace {
                name: s.name().to_string(),
                r: s.values().to_vec(),
                theta: s.labels().to_vec(),
                fill: "toself".to_string(),
                customdata: s.payload().to_vec(),
                hovertemplate: format!("{}<br>%{{theta}}: %{{r:.1f}}<extra></extra>", s.name()),
            })
        })
        .collect()
}

fn radar_layout(options: &ChartOptions) -> Layout {
    let mut layout = base_layout(options);
    layout.polar = Some(PolarLayout {
        radialaxis: RadialAxis {
            visible: true,
            range: options.radial_range,
        },
    });
    layout
}

// --- Choropleth ---

fn choropleth_trace(series: &Series, options: &ChartOptions) -> ChoroplethTrace {
    ChoroplethTrace {
        locationmode: "country names".to_string(),
        locations: series.labels().to_vec(),
        z: series.values().to_vec(),
        text: point_text(series),
        customdata: series.payload().to_vec(),
        hovertemplate: "%{text}<extra></extra>".to_string(),
        colorscale: options.colorscale.clone(),
        reversescale: options.reverse_scale,
        showscale: true,
    }
}

fn geo_layout(options: &ChartOptions) -> Layout {
    let mut layout = base_layout(options);
    layout.geo = Some(GeoLayout::default());
    layout
}

// --- Shared ---

fn base_layout(options: &ChartOptions) -> Layout {
    Layout {
        title: options.title.clone(),
        showlegend: options.show_legend,
        autosize: options.autosize,
        margin: options.margin,
        ..Layout::default()
    }
}

/// Builder-supplied text, or `label: value` where none was given.
fn point_text(series: &Series) -> Vec<String> {
    series
        .text()
        .iter()
        .zip(series.labels().iter().zip(series.values()))
        .map(|(text, (label, value))| match text {
            Some(text) => text.clone(),
            None => format!("{}: {}", label, value),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::SeriesPoint;

    fn series(name: &str, axis: Axis, points: &[(&str, f64)]) -> Series {
        let mut s = Series::new(name).on_axis(axis);
        for (label, value) in points {
            s.push(SeriesPoint::new(*label, *value, "#1f77b4", *label));
        }
        s
    }

    fn four_teams(name: &str, axis: Axis, values: [f64; 4]) -> Series {
        let teams = ["Japan", "Korea", "Cuba", "Mexico"];
        let points: Vec<(&str, f64)> = teams.iter().copied().zip(values).collect();
        series(name, axis, &points)
    }

    #[test]
    fn test_dual_axis_bar_spec() {
        let rate = four_teams("ERA", Axis::Primary, [2.5, 3.1, 4.0, 1.8]);
        let ratio = four_teams("OPS", Axis::Secondary, [0.71, 0.65, 0.80, 0.90]);
        let options = ChartOptions::titled("Run prevention vs production").secondary_axis("OPS");

        let spec = to_chart_spec(&[rate, ratio], ChartKind::Bar, &options).unwrap();

        let [Trace::Bar(first), Trace::Bar(second)] = spec.traces() else {
            panic!("expected two bar traces");
        };
        assert_eq!(first.yaxis, None);
        assert_eq!(second.yaxis.as_deref(), Some("y2"));
        assert_eq!(first.y, vec![2.5, 3.1, 4.0, 1.8]);
        assert_eq!(second.y, vec![0.71, 0.65, 0.80, 0.90]);
        assert_eq!(first.x, second.x);
        assert_ne!(first.offsetgroup, second.offsetgroup);

        let yaxis2 = spec.layout().yaxis2.as_ref().unwrap();
        assert_eq!(yaxis2.overlaying.as_deref(), Some("y"));
        assert_eq!(yaxis2.side.as_deref(), Some("right"));
    }

    #[test]
    fn test_single_axis_bar_has_no_secondary_layout() {
        let s = four_teams("ERA score", Axis::Primary, [75.0, 69.0, 60.0, 82.0]);
        let spec = to_chart_spec(&[s], ChartKind::Bar, &ChartOptions::default()).unwrap();

        assert!(spec.layout().yaxis2.is_none());
        assert_eq!(spec.layout().barmode.as_deref(), Some("group"));
    }

    #[test]
    fn test_pie_requires_exactly_one_series() {
        let a = series("a", Axis::Primary, &[("x", 1.0)]);
        let err = to_chart_spec(&[a.clone(), a], ChartKind::Pie, &ChartOptions::default()).unwrap_err();
        assert_eq!(
            err,
            ChartError::SeriesCount {
                kind: ChartKind::Pie,
                expected: 1,
                actual: 2
            }
        );
    }

    #[test]
    fn test_single_series_pie_spec() {
        let s = series("Outcomes", Axis::Primary, &[("Strikeout (SO)", 12.0), ("Walk (BB)", 3.0)]);
        let spec = to_chart_spec(&[s], ChartKind::Pie, &ChartOptions::default()).unwrap();

        let [Trace::Pie(trace)] = spec.traces() else {
            panic!("expected one pie trace");
        };
        assert_eq!(trace.labels, vec!["Strikeout (SO)", "Walk (BB)"]);
        assert_eq!(trace.values, vec![12.0, 3.0]);
        assert_eq!(trace.textinfo, "label+value+percent");
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["traces"][0]["type"], "pie");
    }

    #[test]
    fn test_choropleth_keeps_payload_and_text() {
        let mut s = Series::new("World rank");
        s.push(SeriesPoint::new("United States", 3.0, "", "USA").with_text("USA (Pool C) - World Rank: 3"));

        let spec = to_chart_spec(&[s], ChartKind::Choropleth, &ChartOptions::default()).unwrap();
        let Trace::Choropleth(trace) = &spec.traces()[0] else {
            panic!("expected choropleth");
        };

        assert_eq!(trace.locations, vec!["United States"]);
        assert_eq!(trace.customdata, vec!["USA"]);
        assert_eq!(trace.text, vec!["USA (Pool C) - World Rank: 3"]);
        assert!(spec.layout().geo.is_some());
    }

    #[test]
    fn test_radar_uses_radial_range() {
        let s = series("Japan", Axis::Primary, &[("ERA", 75.0), ("OPS", 80.0), ("ERA", 75.0)]);
        let spec = to_chart_spec(&[s], ChartKind::Radar, &ChartOptions::default()).unwrap();

        let polar = spec.layout().polar.as_ref().unwrap();
        assert_eq!(polar.radialaxis.range, [0.0, 100.0]);
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["traces"][0]["type"], "scatterpolar");
        assert_eq!(json["traces"][0]["fill"], "toself");
    }

    #[test]
    fn test_bar_color_collapses_when_uniform() {
        let s = series("OPS score", Axis::Primary, &[("Japan", 80.0), ("Korea", 70.0)]);
        let spec = to_chart_spec(&[s], ChartKind::Bar, &ChartOptions::default()).unwrap();
        let json = serde_json::to_value(&spec).unwrap();

        assert_eq!(json["traces"][0]["marker"]["color"], "#1f77b4");
    }
}
