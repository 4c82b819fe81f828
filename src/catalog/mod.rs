//! The herb catalog: entries, their validation, and the navigation codec.
//!
//! A [`Catalog`] is built once and never mutated. The builtin catalog is the
//! default; a TOML file can replace it.

mod codec;
mod entry;
mod error;

pub use codec::{decode, encode};
pub use entry::CatalogEntry;
pub use error::{CatalogError, DecodeError, EncodeError};

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// An immutable, validated list of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

#[derive(Deserialize)]
struct CatalogFile {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Validates `entries` and wraps them.
    ///
    /// Rejects an empty list, duplicate ids, and any entry that fails
    /// [`CatalogEntry::validate`]. Order is preserved.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            entry.validate()?;
            if !seen.insert(entry.id) {
                return Err(CatalogError::DuplicateId { id: entry.id });
            }
        }

        Ok(Self { entries })
    }

    /// The three herbs the application ships with.
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                CatalogEntry::new(
                    1,
                    "薄荷 (Mint)",
                    "清凉解表，提神醒脑。",
                    "/images/mint.png",
                    "薄荷是唇形科植物，具有清凉的香气，常用于泡茶或作为烹饪点缀。性凉，归肺、肝经。",
                ),
                CatalogEntry::new(
                    2,
                    "迷迭香 (Rosemary)",
                    "香气浓郁，增强记忆。",
                    "/images/rosemary.png",
                    "迷迭香是一种常绿灌木，叶片针状。在西餐中常用于牛排调味，也具有抗氧化、提神的功效。",
                ),
                CatalogEntry::new(
                    3,
                    "枸杞 (Goji Berry)",
                    "滋补肝肾，益精明目。",
                    "/images/goji.png",
                    "枸杞是传统中药材，富含胡萝卜素和维生素。无论是泡水还是煲汤，都是养生首选。",
                ),
            ],
        }
    }

    /// Loads a catalog from a TOML file made of `[[entries]]` tables.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let file: CatalogFile =
            toml::from_str(&content).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let catalog = Self::new(file.entries)?;
        tracing::debug!(path = %path.display(), entries = catalog.len(), "Loaded catalog file");
        Ok(catalog)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, id: u32) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_ids_are_one_to_three() {
        let ids: Vec<u32> = Catalog::builtin().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn builtin_passes_validation() {
        let entries = Catalog::builtin().entries().to_vec();
        assert_eq!(Catalog::new(entries).unwrap(), Catalog::builtin());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut entries = Catalog::builtin().entries().to_vec();
        entries[2].id = 1;
        assert!(matches!(
            Catalog::new(entries),
            Err(CatalogError::DuplicateId { id: 1 })
        ));
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(matches!(Catalog::new(Vec::new()), Err(CatalogError::Empty)));
    }

    #[test]
    fn get_finds_by_id() {
        let catalog = Catalog::builtin();
        assert!(catalog.get(2).unwrap().name.contains("迷迭香"));
        assert!(catalog.get(4).is_none());
    }
}
