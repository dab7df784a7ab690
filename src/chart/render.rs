use log::warn;
use serde::Serialize;

use super::interaction::RenderedChart;
use super::spec::ChartSpec;

/// "No data" message shown instead of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    pub title: String,
    pub message: String,
}

impl Placeholder {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// The external drawing capability, addressed by container id.
///
/// Drawing into a target replaces whatever was drawn there before.
pub trait RenderSurface {
    fn has_target(&self, target: &str) -> bool;
    fn draw(&mut self, target: &str, spec: &ChartSpec);
    fn show_placeholder(&mut self, target: &str, placeholder: &Placeholder);
}

/// Draws `spec` into `target`, or skips this one chart if the target is missing.
pub fn render<S>(surface: &mut S, target: &str, spec: &ChartSpec) -> Option<RenderedChart>
where
    S: RenderSurface + ?Sized,
{
    if !resolve_target(surface, target) {
        return None;
    }
    surface.draw(target, spec);
    Some(RenderedChart::new(target))
}

pub fn render_placeholder<S>(surface: &mut S, target: &str, placeholder: &Placeholder) -> bool
where
    S: RenderSurface + ?Sized,
{
    if !resolve_target(surface, target) {
        return false;
    }
    surface.show_placeholder(target, placeholder);
    true
}

fn resolve_target<S>(surface: &S, target: &str) -> bool
where
    S: RenderSurface + ?Sized,
{
    let found = surface.has_target(target);
    if !found {
        warn!("Render target #{} not found, skipping chart", target);
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{to_chart_spec, ChartKind, ChartOptions};
    use crate::series::{Series, SeriesPoint};

    #[derive(Default)]
    struct RecordingSurface {
        targets: Vec<&'static str>,
        drawn: Vec<String>,
        placeholders: Vec<String>,
    }

    impl RenderSurface for RecordingSurface {
        fn has_target(&self, target: &str) -> bool {
            self.targets.iter().any(|t| *t == target)
        }

        fn draw(&mut self, target: &str, _spec: &ChartSpec) {
            self.drawn.push(target.to_string());
        }

        fn show_placeholder(&mut self, target: &str, _placeholder: &Placeholder) {
            self.placeholders.push(target.to_string());
        }
    }

    fn spec() -> ChartSpec {
        let mut s = Series::new("OPS");
        s.push(SeriesPoint::new("Japan", 0.86, "#ff7f0e", "Japan"));
        to_chart_spec(&[s], ChartKind::Bar, &ChartOptions::default()).unwrap()
    }

    #[test]
    fn test_missing_target_skips_only_that_chart() {
        let mut surface = RecordingSurface {
            targets: vec!["barPlot"],
            ..Default::default()
        };

        assert!(render(&mut surface, "team-Japan-plot", &spec()).is_none());
        let chart = render(&mut surface, "barPlot", &spec()).unwrap();

        assert_eq!(chart.target(), "barPlot");
        assert_eq!(surface.drawn, vec!["barPlot"]);
    }

    #[test]
    fn test_placeholder_respects_guard() {
        let mut surface = RecordingSurface {
            targets: vec!["pie-chart"],
            ..Default::default()
        };
        let placeholder = Placeholder::new("No data", "No strikeouts or walks recorded");

        assert!(render_placeholder(&mut surface, "pie-chart", &placeholder));
        assert!(!render_placeholder(&mut surface, "missing", &placeholder));
        assert_eq!(surface.placeholders, vec!["pie-chart"]);
    }
}
