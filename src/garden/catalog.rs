//! Asset catalogs
//!
//! Three ordered lists (floor textures, plants, furniture). Position in a
//! list is the stable index used by the menu, the paint controller and the
//! grid.

use serde::{Deserialize, Serialize};

use super::GridError;

/// Positional index into one catalog
pub type CatalogIndex = usize;

/// Catalog category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Floor,
    Plant,
    Furniture,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Floor, Category::Plant, Category::Furniture];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Floor => "Floor",
            Category::Plant => "Plants",
            Category::Furniture => "Furniture",
        }
    }
}

/// A placeable item: a model plus the thumbnail shown in the menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Model file; validated and kept in the catalog but not rendered yet
    pub model: String,
    pub thumbnail: String,
}

impl CatalogEntry {
    pub fn new(model: &str, thumbnail: &str) -> Self {
        Self {
            model: model.to_string(),
            thumbnail: thumbnail.to_string(),
        }
    }
}

/// All selectable assets, in menu order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Floor texture paths; entry 0 is the default tile
    pub floor: Vec<String>,
    pub plants: Vec<CatalogEntry>,
    pub furniture: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn sizes(&self) -> CatalogSizes {
        CatalogSizes {
            floor: self.floor.len(),
            plants: self.plants.len(),
            furniture: self.furniture.len(),
        }
    }

    /// Entries of an item category (empty for Floor, which has no models)
    pub fn entries(&self, category: Category) -> &[CatalogEntry] {
        match category {
            Category::Floor => &[],
            Category::Plant => &self.plants,
            Category::Furniture => &self.furniture,
        }
    }
}

/// Catalog lengths, all the grid and the controller need for validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogSizes {
    pub floor: usize,
    pub plants: usize,
    pub furniture: usize,
}

impl CatalogSizes {
    pub fn len(&self, category: Category) -> usize {
        match category {
            Category::Floor => self.floor,
            Category::Plant => self.plants,
            Category::Furniture => self.furniture,
        }
    }

    /// Reject an index outside the category's catalog
    pub fn check(&self, category: Category, index: CatalogIndex) -> Result<(), GridError> {
        let len = self.len(category);
        if index >= len {
            return Err(GridError::InvalidCatalogIndex { category, index, len });
        }
        Ok(())
    }
}
