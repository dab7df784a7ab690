pub mod aliases;
pub mod ranges;
pub mod rankings;
pub mod settings;

pub use aliases::AliasMap;
pub use rankings::RankTable;
pub use settings::AppConfig;
