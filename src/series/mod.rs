pub mod bar;
pub mod geo;
pub mod join;
pub mod pie;
pub mod radar;
pub mod types;

pub use bar::{build_bar_series, build_stat_bar_series, StatBar};
pub use geo::build_geo_series;
pub use join::{resolve_value, Dataset, Datasets};
pub use pie::{build_pie_series, CategoricalSeries, Category};
pub use radar::build_radar_series;
pub use types::{Axis, FieldSpec, Series, SeriesPoint};
