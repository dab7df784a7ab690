pub mod adapter;
pub mod interaction;
pub mod kind;
pub mod options;
pub mod render;
pub mod spec;

pub use adapter::to_chart_spec;
pub use interaction::{bind_click, EventPoint, PointEvent, RenderedChart};
pub use kind::ChartKind;
pub use options::{BarMode, ChartOptions};
pub use render::{render, render_placeholder, Placeholder, RenderSurface};
pub use spec::{ChartSpec, Margin, RenderConfig, Trace};
