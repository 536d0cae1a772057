//! Garden scene rendering
//!
//! `SceneVisuals` mirrors the grid as per-cell visuals and is only ever
//! updated through `CellChange`s, so a paint touches one cell's visual and
//! never rebuilds the whole grid. `SceneAssets` holds the loaded textures.
//! `draw_garden` renders both through macroquad's 3D pipeline.

use macroquad::prelude::*;

use crate::garden::{CatalogIndex, Catalog, Category, CellChange, CellChangeKind, GridModel, Occupant, TILE_ELEVATION, TILE_SIZE};
use crate::ui::theme;
use crate::view::{OrbitCamera, Vec3 as GardenVec3};

/// Half-size of the lawn plane under the tiles
const LAWN_HALF_EXTENT: f32 = 1000.0;
/// Cursor floats this far above the tile it marks
const CURSOR_LIFT: f32 = 1.0;

/// Decoration standing on a cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    pub category: Category,
    pub index: CatalogIndex,
}

/// What the renderer shows for one cell
#[derive(Debug, Clone, PartialEq)]
pub struct CellVisual {
    pub position: (f32, f32, f32),
    pub floor_variant: CatalogIndex,
    pub decoration: Option<Decoration>,
}

/// Render-side copy of the grid
#[derive(Debug, Default)]
pub struct SceneVisuals {
    cells: Vec<CellVisual>,
}

impl SceneVisuals {
    /// Build the mirror from the grid's current state
    pub fn from_grid(grid: &GridModel) -> Self {
        let cells = grid
            .cells()
            .iter()
            .enumerate()
            .map(|(index, cell)| {
                let p = grid
                    .world_position(index)
                    .expect("every grid cell has a tile");
                CellVisual {
                    position: (p.x, p.y, p.z),
                    floor_variant: cell.floor_variant,
                    decoration: decoration_for(cell.occupant),
                }
            })
            .collect();
        Self { cells }
    }

    pub fn cells(&self) -> &[CellVisual] {
        &self.cells
    }

    /// Update the single cell a change refers to.
    ///
    /// Changes only come from the grid, so an unknown index is a broken
    /// invariant and panics.
    pub fn apply(&mut self, change: &CellChange) {
        let count = self.cells.len();
        let visual = self
            .cells
            .get_mut(change.index)
            .unwrap_or_else(|| panic!("change for unknown cell {} (mirror has {})", change.index, count));
        match change.kind {
            CellChangeKind::Floor(variant) => visual.floor_variant = variant,
            // Replacing drops the previous decoration
            CellChangeKind::Occupant(occupant) => visual.decoration = decoration_for(occupant),
        }
    }

    /// Apply everything the grid queued since the last frame
    pub fn sync(&mut self, grid: &mut GridModel) -> usize {
        let changes = grid.drain_changes();
        for change in &changes {
            self.apply(change);
        }
        changes.len()
    }
}

fn decoration_for(occupant: Occupant) -> Option<Decoration> {
    match occupant {
        Occupant::Empty => None,
        Occupant::Plant(index) => Some(Decoration { category: Category::Plant, index }),
        Occupant::Furniture(index) => Some(Decoration { category: Category::Furniture, index }),
    }
}

/// Textures for floors and thumbnails; missing files stay None and fall back to colors
#[derive(Default)]
pub struct SceneAssets {
    floor: Vec<Option<Texture2D>>,
    plants: Vec<Option<Texture2D>>,
    furniture: Vec<Option<Texture2D>>,
}

async fn load_optional(path: &str) -> Option<Texture2D> {
    match load_texture(path).await {
        Ok(tex) => {
            tex.set_filter(FilterMode::Linear);
            Some(tex)
        }
        Err(e) => {
            eprintln!("Failed to load texture {}: {}", path, e);
            None
        }
    }
}

impl SceneAssets {
    pub async fn load(catalog: &Catalog) -> Self {
        let mut assets = Self::default();
        for path in &catalog.floor {
            assets.floor.push(load_optional(path).await);
        }
        for entry in catalog.entries(Category::Plant) {
            assets.plants.push(load_optional(&entry.thumbnail).await);
        }
        for entry in catalog.entries(Category::Furniture) {
            assets.furniture.push(load_optional(&entry.thumbnail).await);
        }
        let loaded = [&assets.floor, &assets.plants, &assets.furniture]
            .iter()
            .map(|list| list.iter().filter(|t| t.is_some()).count())
            .sum::<usize>();
        println!("Loaded {} garden textures", loaded);
        assets
    }

    pub fn floor_texture(&self, variant: CatalogIndex) -> Option<&Texture2D> {
        self.floor.get(variant).and_then(Option::as_ref)
    }

    /// Menu image for an item; floors use their texture
    pub fn thumbnail(&self, category: Category, index: CatalogIndex) -> Option<&Texture2D> {
        let list = match category {
            Category::Floor => &self.floor,
            Category::Plant => &self.plants,
            Category::Furniture => &self.furniture,
        };
        list.get(index).and_then(Option::as_ref)
    }
}

/// Render the 3D garden with `camera`. Leaves the 3D camera active.
pub fn draw_garden(visuals: &SceneVisuals, assets: &SceneAssets, camera: &OrbitCamera, cursor: Option<GardenVec3>) {
    clear_background(theme::SKY_COLOR);
    set_camera(&camera.to_camera3d());

    draw_plane(vec3(0.0, 0.0, 0.0), vec2(LAWN_HALF_EXTENT, LAWN_HALF_EXTENT), None, theme::LAWN_COLOR);

    let half = TILE_SIZE * 0.5;
    for cell in visuals.cells() {
        let (x, y, z) = cell.position;
        let center = vec3(x, y, z);
        match assets.floor_texture(cell.floor_variant) {
            Some(tex) => draw_plane(center, vec2(half, half), Some(tex), WHITE),
            None => draw_plane(center, vec2(half, half), None, theme::floor_color(cell.floor_variant)),
        }
        if let Some(decoration) = &cell.decoration {
            draw_decoration(decoration, center, assets);
        }
    }

    if let Some(p) = cursor {
        let lifted = vec3(p.x, TILE_ELEVATION + CURSOR_LIFT, p.z);
        draw_plane(lifted, vec2(half, half), None, theme::CURSOR_COLOR);
    }
}

/// Tint for a decoration whose thumbnail did not load
fn fallback_color(category: Category) -> Color {
    match category {
        Category::Plant => theme::PLANT_COLOR,
        Category::Furniture => theme::FURNITURE_COLOR,
        Category::Floor => theme::floor_color(0),
    }
}

fn draw_decoration(decoration: &Decoration, base: macroquad::math::Vec3, assets: &SceneAssets) {
    let thumb = assets.thumbnail(decoration.category, decoration.index);
    // Vary the silhouette by catalog index so neighbours are told apart
    let scale = 1.0 + (decoration.index % 3) as f32 * 0.35;
    match decoration.category {
        Category::Plant => {
            // Cone: wide base, pointed top
            let height = 6.0 * scale;
            let radius = 2.5 * scale;
            match thumb {
                Some(tex) => draw_cylinder(base, 0.0, radius, height, Some(tex), WHITE),
                None => draw_cylinder(base, 0.0, radius, height, None, fallback_color(decoration.category)),
            }
        }
        Category::Furniture => {
            let size = vec3(6.0, 2.5 * scale, 4.0);
            let center = base + vec3(0.0, size.y * 0.5, 0.0);
            match thumb {
                Some(tex) => draw_cube(center, size, Some(tex), WHITE),
                None => draw_cube(center, size, None, fallback_color(decoration.category)),
            }
        }
        Category::Floor => {}
    }
}
