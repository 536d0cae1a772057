//! UI intents
//!
//! Everything the overlay menu can ask of the garden, as one typed enum
//! delivered through a single queue.

use super::catalog::{CatalogIndex, Category};
use super::event::EventQueue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiIntent {
    /// Paint floor tiles (`None` = floor eraser)
    EnterFloor(Option<CatalogIndex>),
    /// Place plants (`None` = plant eraser)
    EnterPlant(Option<CatalogIndex>),
    /// Place furniture (`None` = furniture eraser)
    EnterFurniture(Option<CatalogIndex>),
    /// Back to idle
    Cancel,
    /// Capture the 3D view to a PNG
    Snapshot,
}

impl UiIntent {
    pub fn enter(category: Category, selection: Option<CatalogIndex>) -> Self {
        match category {
            Category::Floor => UiIntent::EnterFloor(selection),
            Category::Plant => UiIntent::EnterPlant(selection),
            Category::Furniture => UiIntent::EnterFurniture(selection),
        }
    }

    /// Category and selection for the `Enter*` intents
    pub fn paint_target(&self) -> Option<(Category, Option<CatalogIndex>)> {
        match *self {
            UiIntent::EnterFloor(sel) => Some((Category::Floor, sel)),
            UiIntent::EnterPlant(sel) => Some((Category::Plant, sel)),
            UiIntent::EnterFurniture(sel) => Some((Category::Furniture, sel)),
            UiIntent::Cancel | UiIntent::Snapshot => None,
        }
    }
}

pub type IntentQueue = EventQueue<UiIntent>;
