use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// A row of named numeric-ish fields, exactly as it arrives from the data files.
pub type StatRecord = Map<String, Value>;

/// Team or country taking part in a rendering context. Identity is the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), id: None }
    }
}

/// Tournament pool (group) and the teams drawn into it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pool {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub teams: Vec<Entity>,
}

impl Pool {
    pub fn display_name(&self, key: &str) -> String {
        match &self.name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => format!("Pool {}", key),
        }
    }
}

/// Pools keyed by their short code ("A", "B", ...), in the order the data file lists them.
#[derive(Debug, Clone, Default)]
pub struct Pools {
    entries: Vec<(String, Pool)>,
}

impl Pools {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the pool of an existing key in place, otherwise appends.
    pub fn insert(&mut self, key: impl Into<String>, pool: Pool) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = pool,
            None => self.entries.push((key, pool)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Pool> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, pool)| pool)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Pool)> {
        self.into_iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Pools {
    type Item = (&'a String, &'a Pool);
    type IntoIter = std::iter::Map<std::slice::Iter<'a, (String, Pool)>, fn(&'a (String, Pool)) -> (&'a String, &'a Pool)>;

    fn into_iter(self) -> Self::IntoIter {
        let split: fn(&'a (String, Pool)) -> (&'a String, &'a Pool) = |(key, pool)| (key, pool);
        self.entries.iter().map(split)
    }
}

impl Serialize for Pools {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, pool) in &self.entries {
            map.serialize_entry(key, pool)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Pools {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PoolsVisitor)
    }
}

struct PoolsVisitor;

impl<'de> Visitor<'de> for PoolsVisitor {
    type Value = Pools;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of pool code to pool")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Pools, A::Error> {
        let mut pools = Pools::new();
        while let Some((key, pool)) = access.next_entry::<String, Pool>()? {
            pools.insert(key, pool);
        }
        Ok(pools)
    }
}

/// Team-level aggregate stats and roster
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Team {
    #[serde(default)]
    pub team_stats: StatRecord,
    #[serde(default)]
    pub players: Vec<String>,
}

pub type Teams = BTreeMap<String, Team>;

/// Individual player line. Stat fields stay untyped until coerced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub player_type: String,
    #[serde(flatten)]
    pub stats: StatRecord,
}

impl Player {
    /// Anything not explicitly a batter is charted as a pitcher.
    pub fn is_batter(&self) -> bool {
        self.player_type == "batter"
    }
}

pub type Players = BTreeMap<String, Player>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pools_keep_file_order() {
        let pools: Pools =
            serde_json::from_str(r#"{"D": {"teams": []}, "A": {"teams": []}, "C": {"teams": []}}"#).unwrap();

        let keys: Vec<&String> = pools.keys().collect();
        assert_eq!(keys, ["D", "A", "C"]);
    }

    #[test]
    fn test_repeated_pool_key_keeps_first_position() {
        let pools: Pools = serde_json::from_str(
            r#"{"B": {"teams": [{"name": "Cuba"}]}, "A": {"teams": []}, "B": {"teams": [{"name": "Italy"}]}}"#,
        )
        .unwrap();

        assert_eq!(pools.len(), 2);
        assert_eq!(pools.keys().next().map(String::as_str), Some("B"));
        assert_eq!(pools.get("B").unwrap().teams[0].name, "Italy");
    }
}
