use std::collections::HashMap;

/// Roster name → country name as used by the world ranking and the map.
///
/// Names that are not listed resolve to themselves, so most teams
/// (Japan, Mexico, Cuba, ...) need no entry at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AliasMap {
    entries: HashMap<String, String>,
}

impl AliasMap {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Canonical lookup name for `name`, falling back to `name` itself.
    pub fn canonical<'a>(&'a self, name: &'a str) -> &'a str {
        self.entries.get(name).map(String::as_str).unwrap_or(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Aliases between WBC roster names and country names
pub fn default_aliases() -> AliasMap {
    AliasMap::new([
        ("USA", "United States"),
        ("Chinese Taipei", "Chinese Taipei"),
        ("Great Britain", "Great Britain"),
        ("Korea", "Korea"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_falls_back_to_name() {
        let aliases = default_aliases();
        assert_eq!(aliases.canonical("USA"), "United States");
        assert_eq!(aliases.canonical("Japan"), "Japan");
        assert_eq!(AliasMap::default().canonical("USA"), "USA");
    }
}
