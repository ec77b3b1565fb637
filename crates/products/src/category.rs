//! Category references.
//!
//! Categories are owned and validated by their own module; a product only points
//! at one.

use serde::{Deserialize, Serialize};

use catalog_core::{Entity, EntityId};

/// Foreign key from a product to its category.
///
/// Stored as given. No rule constrains it, negative values included.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub i32);

impl CategoryId {
    pub fn new(raw: i32) -> Self {
        Self(raw)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl core::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i32> for CategoryId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// Read-only view of a category, as loaded alongside a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: EntityId,
    pub name: String,
}

impl Category {
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// The foreign key a product uses to refer to this category.
    pub fn key(&self) -> CategoryId {
        CategoryId(self.id.get())
    }
}

impl Entity for Category {
    type Id = EntityId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
