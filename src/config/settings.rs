use std::path::PathBuf;

use super::aliases::{default_aliases, AliasMap};
use super::rankings::{default_rank_table, RankTable};

pub const DATA_DIR_ENV: &str = "WBC_DATA_DIR";

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

#[derive(Debug, Clone)]
pub struct DataSettings {
    pub data_dir: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        let data_dir = std::env::var(DATA_DIR_ENV).unwrap_or_else(|_| "data".to_string());
        Self {
            data_dir: PathBuf::from(data_dir),
        }
    }
}

/// Lookup tables consulted while building series
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    pub aliases: AliasMap,
    pub ranks: RankTable,
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self {
            aliases: default_aliases(),
            ranks: default_rank_table(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub data: DataSettings,
    pub tables: ReferenceTables,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            server: ServerSettings::default(),
            data: DataSettings::default(),
            tables: ReferenceTables::default(),
        }
    }

    pub fn with_port(mut self, port: Option<u16>) -> Self {
        if let Some(port) = port {
            self.server.port = port;
        }
        self
    }

    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data.data_dir = dir;
        }
        self
    }
}
