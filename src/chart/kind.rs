use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::errors::ChartError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Pie,
    Radar,
    Choropleth,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::Radar => "radar",
            ChartKind::Choropleth => "choropleth",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bar" => Ok(ChartKind::Bar),
            "pie" => Ok(ChartKind::Pie),
            "radar" => Ok(ChartKind::Radar),
            "choropleth" | "map" => Ok(ChartKind::Choropleth),
            _ => Err(ChartError::UnknownKind(s.to_string())),
        }
    }
}
