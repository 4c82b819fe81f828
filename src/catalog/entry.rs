use serde::{Deserialize, Serialize};

use crate::catalog::error::CatalogError;

/// One herb in the catalog.
///
/// The serialized field names are the navigation wire format, so they must
/// not be renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Positive id, unique within a catalog.
    pub id: u32,
    /// Display name, e.g. "薄荷 (Mint)".
    pub name: String,
    /// One-line summary shown in the list.
    pub desc: String,
    /// Relative path to a bundled image. Never loaded or checked.
    pub image: String,
    /// Long-form text shown on the detail screen.
    pub detail: String,
}

impl CatalogEntry {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        desc: impl Into<String>,
        image: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            desc: desc.into(),
            image: image.into(),
            detail: detail.into(),
        }
    }

    /// Checks the per-entry invariants: non-zero id and no blank field.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.id == 0 {
            return Err(CatalogError::ZeroId);
        }

        let fields = [
            ("name", &self.name),
            ("desc", &self.desc),
            ("image", &self.image),
            ("detail", &self.detail),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(CatalogError::EmptyField { id: self.id, field });
            }
        }

        Ok(())
    }
}
