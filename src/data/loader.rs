use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ranges::{HITTING, PITCHING, TEAM_KEY};
use crate::domain::{Players, Pools, StatRecord, Teams};
use crate::errors::{load_context, with_parse_context};
use crate::series::{Dataset, Datasets};

/// Read-only access to the JSON files exported by the stats pipeline
pub struct DataStore {
    data_dir: PathBuf,
}

impl DataStore {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Load a file that must exist
    pub fn load<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Result<T> {
        self.load_opt(key)?
            .with_context(|| load_context(key))
    }

    /// Load a file, `None` if it is absent
    pub fn load_opt<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Result<Option<T>> {
        let file_path = self.build_path(key);
        if !file_path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&file_path).with_context(|| load_context(key))?;
        let data = with_parse_context(serde_json::from_str(&json), key)?;

        info!("Loaded data file: {}", file_path.display());
        Ok(Some(data))
    }

    pub fn exists(&self, key: &str) -> bool {
        self.build_path(key).exists()
    }

    fn build_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

/// Everything the pages are built from
#[derive(Debug, Clone, Default)]
pub struct SiteData {
    pub pools: Pools,
    pub teams: Teams,
    pub players: Players,
    pub hitting: Vec<StatRecord>,
    pub pitching: Vec<StatRecord>,
}

impl SiteData {
    /// Pools are required; the other files may be missing.
    pub fn load(store: &DataStore) -> Result<Self> {
        let data = Self {
            pools: store.load("pools")?,
            teams: store.load_opt("teams")?.unwrap_or_default(),
            players: store.load_opt("players")?.unwrap_or_default(),
            hitting: store.load_opt(HITTING)?.unwrap_or_default(),
            pitching: store.load_opt(PITCHING)?.unwrap_or_default(),
        };

        info!(
            "Site data: {} pools, {} teams, {} players, {} hitting / {} pitching rows",
            data.pools.len(),
            data.teams.len(),
            data.players.len(),
            data.hitting.len(),
            data.pitching.len()
        );
        Ok(data)
    }

    /// Hitting and pitching tables keyed by team name
    pub fn datasets(&self) -> Datasets {
        Datasets::new()
            .with(HITTING, Dataset::new(TEAM_KEY, self.hitting.clone()))
            .with(PITCHING, Dataset::new(TEAM_KEY, self.pitching.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_site_data() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("pools.json"),
            r#"{"A": {"name": "Pool A", "teams": [{"name": "Japan"}, {"name": "Korea", "id": "kor"}]}}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("pitching.json"),
            r#"[{"Team": "Japan", "ERA": "2.10", "WHIP": 1.01}]"#,
        )
        .unwrap();

        let data = SiteData::load(&DataStore::new(dir.path())).unwrap();

        let pool = data.pools.get("A").unwrap();
        assert_eq!(pool.teams.len(), 2);
        assert_eq!(pool.teams[1].id.as_deref(), Some("kor"));
        assert!(data.teams.is_empty());
        assert!(data.datasets().get(PITCHING).unwrap().find("Japan").is_some());
    }

    #[test]
    fn test_missing_pools_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = DataStore::new(dir.path());

        assert!(!store.exists("pools"));
        assert!(SiteData::load(&store).is_err());
    }

    #[test]
    fn test_malformed_file_reports_key() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("pools.json"), "{not json").unwrap();

        let err = SiteData::load(&DataStore::new(dir.path())).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse pools"));
    }
}
