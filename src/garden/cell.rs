//! Grid cells and the change notifications they produce

use super::catalog::CatalogIndex;

/// Default floor variant for a fresh cell
pub const DEFAULT_FLOOR_VARIANT: CatalogIndex = 0;

/// What stands on a cell (at most one thing)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Occupant {
    #[default]
    Empty,
    Plant(CatalogIndex),
    Furniture(CatalogIndex),
}

impl Occupant {
    pub fn is_empty(&self) -> bool {
        matches!(self, Occupant::Empty)
    }
}

/// One grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Column, -5..=4
    pub h: i32,
    /// Row, -5..=4
    pub v: i32,
    pub floor_variant: CatalogIndex,
    pub occupant: Occupant,
}

impl Cell {
    pub fn new(h: i32, v: i32) -> Self {
        Self {
            h,
            v,
            floor_variant: DEFAULT_FLOOR_VARIANT,
            occupant: Occupant::Empty,
        }
    }
}

/// What changed on a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellChangeKind {
    Floor(CatalogIndex),
    Occupant(Occupant),
}

/// Sent to the renderer whenever a cell's state actually changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    pub index: usize,
    pub kind: CellChangeKind,
}
