use super::spec::{Margin, RenderConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarMode {
    #[default]
    Group,
    Stack,
    Overlay,
}

impl BarMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BarMode::Group => "group",
            BarMode::Stack => "stack",
            BarMode::Overlay => "overlay",
        }
    }
}

/// Per-chart presentation settings. Fields a kind does not use are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub title: Option<String>,
    pub x_axis_title: Option<String>,
    pub y_axis_title: Option<String>,
    pub secondary_axis_title: Option<String>,
    pub bar_mode: BarMode,
    /// Print each bar's value on the bar (player charts).
    pub show_values: bool,
    pub radial_range: [f64; 2],
    pub hole: f64,
    pub colorscale: String,
    pub reverse_scale: bool,
    pub show_legend: Option<bool>,
    pub autosize: Option<bool>,
    pub margin: Option<Margin>,
    pub render: RenderConfig,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: None,
            x_axis_title: None,
            y_axis_title: None,
            secondary_axis_title: None,
            bar_mode: BarMode::Group,
            show_values: false,
            radial_range: [0.0, 100.0],
            hole: 0.4,
            colorscale: "Inferno".to_string(),
            reverse_scale: true,
            show_legend: None,
            autosize: None,
            margin: None,
            render: RenderConfig::default(),
        }
    }
}

impl ChartOptions {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn axis_titles(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_axis_title = Some(x.into());
        self.y_axis_title = Some(y.into());
        self
    }

    pub fn secondary_axis(mut self, title: impl Into<String>) -> Self {
        self.secondary_axis_title = Some(title.into());
        self
    }

    pub fn legend(mut self, show: bool) -> Self {
        self.show_legend = Some(show);
        self
    }

    pub fn margin(mut self, margin: Margin) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn render_config(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }
}
