//! Normalized alias lookup for character ids.

use std::collections::HashMap;

use super::CharacterRecord;

/// Normalize a user-supplied character reference for alias lookup.
///
/// Trims surrounding whitespace and folds case.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Mapping from normalized alias to canonical character id.
///
/// Keys come from each record's id, display name and declared aliases (all
/// case-folded) plus the localized name, which is stored verbatim. When two
/// records register the same key the record declared last wins.
#[derive(Debug, Clone, Default)]
pub struct AliasIndex {
    map: HashMap<String, String>,
}

impl AliasIndex {
    /// Build the index over `records` in declaration order.
    pub fn build(records: &[CharacterRecord]) -> Self {
        let mut index = Self::default();
        for record in records {
            index.insert(record.id.to_lowercase(), &record.id);
            index.insert(record.display_name.to_lowercase(), &record.id);
            index.insert(record.localized_name.clone(), &record.id);
            for alias in &record.aliases {
                index.insert(alias.to_lowercase(), &record.id);
            }
        }
        index
    }

    fn insert(&mut self, key: String, id: &str) {
        if key.is_empty() {
            return;
        }
        if let Some(previous) = self.map.insert(key.clone(), id.to_string()) {
            if previous != id {
                tracing::debug!(alias = %key, previous = %previous, id = %id, "alias reassigned");
            }
        }
    }

    /// Resolve a raw reference (trimmed and case-folded first) to its id.
    pub fn resolve(&self, input: &str) -> Option<&str> {
        let key = normalize(input);
        if key.is_empty() {
            return None;
        }
        self.map.get(&key).map(String::as_str)
    }

    /// Number of distinct keys in the index.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn record(id: &str, name: &str, localized: &str, aliases: &[&str]) -> CharacterRecord {
        CharacterRecord {
            id: id.to_string(),
            display_name: name.to_string(),
            localized_name: localized.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            portrait: PathBuf::from(format!("characters/{}.png", id)),
        }
    }

    #[test]
    fn test_normalize_trims_and_folds() {
        assert_eq!(normalize("  SoL \t"), "sol");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_every_id_maps_to_itself() {
        let index = AliasIndex::build(&[
            record("sol", "Sol Badguy", "ソル", &[]),
            record("ky", "Ky Kiske", "カイ", &["kyle"]),
        ]);
        assert_eq!(index.resolve("sol"), Some("sol"));
        assert_eq!(index.resolve("ky"), Some("ky"));
    }

    #[test]
    fn test_display_name_and_aliases_fold_case() {
        let index = AliasIndex::build(&[record("ky", "Ky Kiske", "カイ", &["KYLE"])]);
        assert_eq!(index.resolve("ky kiske"), Some("ky"));
        assert_eq!(index.resolve("KY KISKE"), Some("ky"));
        assert_eq!(index.resolve("kyle"), Some("ky"));
    }

    #[test]
    fn test_localized_name_stored_verbatim() {
        // An uppercase localized key is unreachable because queries are folded.
        let index = AliasIndex::build(&[record("aba", "A.B.A", "ABA-JP", &[])]);
        assert_eq!(index.resolve("ABA-JP"), None);

        let index = AliasIndex::build(&[record("sol", "Sol Badguy", "ソル", &[])]);
        assert_eq!(index.resolve(" ソル "), Some("sol"));
    }

    #[test]
    fn test_last_declared_wins_on_collision() {
        let index = AliasIndex::build(&[
            record("first", "First", "一", &["shared"]),
            record("second", "Second", "二", &["shared"]),
        ]);
        assert_eq!(index.resolve("shared"), Some("second"));
    }

    #[test]
    fn test_empty_keys_are_never_registered() {
        let index = AliasIndex::build(&[record("may", "May", "", &[""])]);
        assert_eq!(index.resolve(""), None);
        assert_eq!(index.resolve("   "), None);
        assert_eq!(index.len(), 1);
    }
}
