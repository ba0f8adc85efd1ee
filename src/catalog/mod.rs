//! Character catalog and alias resolution.
//!
//! The catalog is a fixed, read-only list of playable characters. It owns an
//! [`AliasIndex`] built once at load time, so every lookup after construction
//! is a plain read and a single catalog can be shared by any number of readers.
//!
//! The built-in roster is compiled into the binary and parsed on first use via
//! [`Catalog::builtin`]. Tests and embedders can build their own catalog with
//! [`Catalog::from_records`] or [`Catalog::from_json`] and inject it wherever a
//! `&Catalog` is taken.

mod alias;

pub use alias::{normalize, AliasIndex};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::OnceLock;
use thiserror::Error;

/// Canonical character identifier (e.g. `"sol"`).
pub type CharacterId = String;

const BUILTIN_CHARACTERS: &str = include_str!("characters.json");

/// A single playable character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    /// Canonical lowercase id
    pub id: CharacterId,
    /// English display name
    #[serde(rename = "name")]
    pub display_name: String,
    /// Japanese name, shown under the player label
    pub localized_name: String,
    /// Additional shorthands accepted on the command line
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Portrait image path, relative to the assets directory
    pub portrait: PathBuf,
}

/// Error loading catalog data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// JSON did not match the catalog layout
    #[error("invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two records share an id
    #[error("duplicate character id '{0}'")]
    DuplicateId(String),
}

#[derive(Deserialize)]
struct CatalogFile {
    characters: Vec<CharacterRecord>,
}

/// Read-only character table with alias lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    characters: Vec<CharacterRecord>,
    by_id: HashMap<CharacterId, usize>,
    aliases: AliasIndex,
}

impl Catalog {
    /// The built-in roster, parsed once per process.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Catalog::from_json(BUILTIN_CHARACTERS).expect("built-in character data is valid")
        })
    }

    /// Build a catalog from records in declaration order.
    ///
    /// Ids must be unique; a repeated id is rejected.
    pub fn from_records(characters: Vec<CharacterRecord>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(characters.len());
        for (i, record) in characters.iter().enumerate() {
            if by_id.insert(record.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateId(record.id.clone()));
            }
        }
        let aliases = AliasIndex::build(&characters);
        tracing::debug!(characters = characters.len(), aliases = aliases.len(), "catalog loaded");
        Ok(Self { characters, by_id, aliases })
    }

    /// Parse a `{"characters": [...]}` document.
    pub fn from_json(data: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(data)?;
        Self::from_records(file.characters)
    }

    /// Look up a character by id, display name, localized name or alias.
    ///
    /// The query is trimmed and case-folded. Empty or unknown input yields `None`.
    pub fn get_character(&self, id_or_alias: &str) -> Option<&CharacterRecord> {
        self.resolve_character_id(id_or_alias).and_then(|id| self.get_character_by_id(id))
    }

    /// Exact lookup by canonical id, without normalization.
    pub fn get_character_by_id(&self, id: &str) -> Option<&CharacterRecord> {
        self.by_id.get(id).map(|&i| &self.characters[i])
    }

    /// Resolve any accepted reference to the canonical id.
    pub fn resolve_character_id(&self, id_or_alias: &str) -> Option<&str> {
        self.aliases.resolve(id_or_alias)
    }

    /// Check whether a reference resolves.
    pub fn has_character(&self, id_or_alias: &str) -> bool {
        self.resolve_character_id(id_or_alias).is_some()
    }

    /// All characters in declaration order.
    pub fn all_characters(&self) -> &[CharacterRecord] {
        &self.characters
    }

    /// All canonical ids in declaration order.
    pub fn all_character_ids(&self) -> Vec<&str> {
        self.characters.iter().map(|c| c.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_roster_size() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 32);
        assert_eq!(catalog.all_character_ids().len(), 32);
    }

    #[test]
    fn test_get_character_by_id() {
        let catalog = Catalog::builtin();
        let sol = catalog.get_character("sol").unwrap();
        assert_eq!(sol.id, "sol");
        assert_eq!(sol.display_name, "Sol Badguy");
        assert_eq!(catalog.get_character_by_id("ky").unwrap().display_name, "Ky Kiske");
    }

    #[test]
    fn test_get_character_by_localized_name() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get_character("ソル").unwrap().id, "sol");
        assert_eq!(catalog.get_character("名残雪").unwrap().id, "nagoriyuki");
    }

    #[test]
    fn test_get_character_by_alias() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get_character("pot").unwrap().id, "potemkin");
    }

    #[test]
    fn test_get_character_case_and_whitespace_insensitive() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get_character("SOL").unwrap().id, "sol");
        assert_eq!(catalog.get_character(" SOL "), catalog.get_character("sol"));
        assert_eq!(catalog.get_character("  sol  ").unwrap().id, "sol");
    }

    #[test]
    fn test_unknown_and_empty_are_not_found() {
        let catalog = Catalog::builtin();
        assert!(catalog.get_character("unknown").is_none());
        assert!(catalog.get_character("").is_none());
        assert!(!catalog.has_character(""));
        assert!(!catalog.has_character("unknown"));
        assert!(catalog.get_character_by_id("unknown").is_none());
    }

    #[test]
    fn test_get_character_by_id_is_not_normalized() {
        let catalog = Catalog::builtin();
        assert!(catalog.get_character_by_id("SOL").is_none());
        assert!(catalog.get_character_by_id(" sol").is_none());
    }

    #[test]
    fn test_resolve_common_aliases() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.resolve_character_id("nago"), Some("nagoriyuki"));
        assert_eq!(catalog.resolve_character_id("gio"), Some("giovanna"));
        assert_eq!(catalog.resolve_character_id("ram"), Some("ramlethal"));
        assert_eq!(catalog.resolve_character_id("invalid"), None);
    }

    #[test]
    fn test_every_id_and_alias_resolves_to_owner() {
        let catalog = Catalog::builtin();
        for record in catalog.all_characters() {
            assert_eq!(catalog.resolve_character_id(&record.id), Some(record.id.as_str()));
            assert_eq!(
                catalog.resolve_character_id(&record.display_name),
                Some(record.id.as_str()),
                "display name of {}",
                record.id
            );
            for alias in &record.aliases {
                assert_eq!(
                    catalog.resolve_character_id(alias),
                    Some(record.id.as_str()),
                    "alias '{}'",
                    alias
                );
            }
        }
    }

    #[test]
    fn test_declaration_order_is_stable() {
        let catalog = Catalog::builtin();
        let ids = catalog.all_character_ids();
        assert_eq!(&ids[..3], &["sol", "ky", "may"]);
        let from_records: Vec<&str> =
            catalog.all_characters().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, from_records);
    }

    #[test]
    fn test_has_character() {
        let catalog = Catalog::builtin();
        assert!(catalog.has_character("sol"));
        assert!(catalog.has_character("ソル"));
        assert!(catalog.has_character("pot"));
    }

    #[test]
    fn test_custom_catalog_from_json() {
        let catalog = Catalog::from_json(
            r#"{"characters":[{"id":"hero","name":"Hero","localized_name":"勇者","portrait":"h.png"}]}"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.resolve_character_id("HERO"), Some("hero"));
        assert!(catalog.get_character("hero").unwrap().aliases.is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::from_json(
            r#"{"characters":[
                {"id":"a","name":"A","localized_name":"ア","portrait":"a.png"},
                {"id":"a","name":"B","localized_name":"ビ","portrait":"b.png"}
            ]}"#,
        );
        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == "a"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(Catalog::from_json("{"), Err(CatalogError::Parse(_))));
    }
}
