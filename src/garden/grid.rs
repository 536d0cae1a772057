//! The 10x10 placement grid
//!
//! Cells are stored row-major by `v` (flat index = (v + 5) * 10 + (h + 5)).
//! Each cell also has a pickable tile quad lying flat at `TILE_ELEVATION`;
//! picking works on these bounds only, never on the render tree.

use super::cell::{Cell, CellChange, CellChangeKind, Occupant};
use super::catalog::{CatalogIndex, CatalogSizes, Category};
use super::event::EventQueue;
use crate::view::{ray_plane_intersection, Ray, Vec3};

/// Cells per side
pub const GRID_SIZE: usize = 10;
/// Total cells
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;
/// Lowest column/row coordinate
pub const COORD_MIN: i32 = -5;
/// Highest column/row coordinate
pub const COORD_MAX: i32 = COORD_MIN + GRID_SIZE as i32 - 1;
/// Tile edge length in world units
pub const TILE_SIZE: f32 = 10.0;
/// Height of the tile plane above the ground
pub const TILE_ELEVATION: f32 = 1.0;

/// Errors from grid access and mutation
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Cell coordinates or flat index outside the 10x10 grid
    OutOfRange(String),
    /// Catalog index past the end of its catalog
    InvalidCatalogIndex { category: Category, index: CatalogIndex, len: usize },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::OutOfRange(what) => write!(f, "Cell out of range: {}", what),
            GridError::InvalidCatalogIndex { category, index, len } => write!(
                f,
                "Invalid {} index {} (catalog has {} entries)",
                category.label(),
                index,
                len
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// Flat index of (h, v), or None when outside the grid
pub fn flat_index(h: i32, v: i32) -> Option<usize> {
    let in_range = |c: i32| (COORD_MIN..=COORD_MAX).contains(&c);
    if !in_range(h) || !in_range(v) {
        return None;
    }
    Some((v - COORD_MIN) as usize * GRID_SIZE + (h - COORD_MIN) as usize)
}

/// Horizontal square tile, pickable from above or below
#[derive(Debug, Clone, Copy)]
pub struct TileBounds {
    pub center: Vec3,
    pub half_extent: f32,
}

impl TileBounds {
    /// Ray parameter of the hit, if the ray crosses the square
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let t = ray_plane_intersection(ray, self.center, Vec3::UP)?;
        let hit = ray.at(t);
        let inside = (hit.x - self.center.x).abs() <= self.half_extent
            && (hit.z - self.center.z).abs() <= self.half_extent;
        inside.then_some(t)
    }
}

/// Owns every cell and reports each effective change
pub struct GridModel {
    cells: Vec<Cell>,
    tiles: Vec<TileBounds>,
    sizes: CatalogSizes,
    changes: EventQueue<CellChange>,
}

impl GridModel {
    pub fn new(sizes: CatalogSizes) -> Self {
        let mut cells = Vec::with_capacity(CELL_COUNT);
        let mut tiles = Vec::with_capacity(CELL_COUNT);
        for v in COORD_MIN..=COORD_MAX {
            for h in COORD_MIN..=COORD_MAX {
                cells.push(Cell::new(h, v));
                tiles.push(TileBounds {
                    center: Vec3::new(
                        TILE_SIZE * h as f32 + TILE_SIZE * 0.5,
                        TILE_ELEVATION,
                        TILE_SIZE * v as f32 + TILE_SIZE * 0.5,
                    ),
                    half_extent: TILE_SIZE * 0.5,
                });
            }
        }
        Self {
            cells,
            tiles,
            sizes,
            changes: EventQueue::new(),
        }
    }

    pub fn sizes(&self) -> CatalogSizes {
        self.sizes
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell by flat index
    pub fn cell(&self, index: usize) -> Result<&Cell, GridError> {
        self.cells
            .get(index)
            .ok_or_else(|| GridError::OutOfRange(format!("index {} (max {})", index, CELL_COUNT - 1)))
    }

    /// Cell by column/row
    pub fn cell_at(&self, h: i32, v: i32) -> Result<&Cell, GridError> {
        let index = flat_index(h, v)
            .ok_or_else(|| GridError::OutOfRange(format!("(h={}, v={})", h, v)))?;
        self.cell(index)
    }

    fn cell_mut(&mut self, index: usize) -> Result<&mut Cell, GridError> {
        self.cells
            .get_mut(index)
            .ok_or_else(|| GridError::OutOfRange(format!("index {} (max {})", index, CELL_COUNT - 1)))
    }

    /// Centre of a cell's tile in world space
    pub fn world_position(&self, index: usize) -> Result<Vec3, GridError> {
        self.cell(index)?;
        Ok(self.tiles[index].center)
    }

    pub fn set_floor_variant(&mut self, index: usize, variant: CatalogIndex) -> Result<(), GridError> {
        self.sizes.check(Category::Floor, variant)?;
        let cell = self.cell_mut(index)?;
        if cell.floor_variant == variant {
            return Ok(());
        }
        cell.floor_variant = variant;
        self.changes.send(CellChange { index, kind: CellChangeKind::Floor(variant) });
        Ok(())
    }

    pub fn set_occupant(&mut self, index: usize, occupant: Occupant) -> Result<(), GridError> {
        match occupant {
            Occupant::Empty => {}
            Occupant::Plant(i) => self.sizes.check(Category::Plant, i)?,
            Occupant::Furniture(i) => self.sizes.check(Category::Furniture, i)?,
        }
        let cell = self.cell_mut(index)?;
        if cell.occupant == occupant {
            return Ok(());
        }
        cell.occupant = occupant;
        self.changes.send(CellChange { index, kind: CellChangeKind::Occupant(occupant) });
        Ok(())
    }

    /// Take all changes queued since the last drain, oldest first
    pub fn drain_changes(&mut self) -> Vec<CellChange> {
        self.changes.drain().collect()
    }

    pub fn has_pending_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Nearest tile hit by the ray. Equal distances go to the lowest index.
    pub fn pick(&self, ray: &Ray) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (index, tile) in self.tiles.iter().enumerate() {
            if let Some(t) = tile.intersect(ray) {
                if best.map_or(true, |(_, best_t)| t < best_t) {
                    best = Some((index, t));
                }
            }
        }
        best.map(|(index, _)| index)
    }
}
