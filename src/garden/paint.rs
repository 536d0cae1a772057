//! Paint controller
//!
//! Pointer interaction state machine. The active mode decides what a click
//! does; pointer moves keep a picked tile and the hover cursor up to date.
//! A selection of `None` is the erase marker for every category.
//!
//! ```text
//!  Idle ──enter_mode──▶ Floor(sel) / Plant(sel) / Furniture(sel)
//!   ▲                        │   ▲ enter_mode (any category)
//!   └────────cancel──────────┘───┘
//! ```
//!
//! Clicking never leaves the current mode, so consecutive cells can be
//! painted until `cancel` or a category switch.

use super::catalog::{CatalogIndex, CatalogSizes, Category};
use super::cell::{Occupant, DEFAULT_FLOOR_VARIANT};
use super::grid::{GridError, GridModel};
use crate::ui::Rect;
use crate::view::{screen_to_ndc, RayCaster, Vec3};

/// Active paint mode with its selection (`None` = erase)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintMode {
    #[default]
    Idle,
    Floor(Option<CatalogIndex>),
    Plant(Option<CatalogIndex>),
    Furniture(Option<CatalogIndex>),
}

impl PaintMode {
    pub fn new(category: Category, selection: Option<CatalogIndex>) -> Self {
        match category {
            Category::Floor => PaintMode::Floor(selection),
            Category::Plant => PaintMode::Plant(selection),
            Category::Furniture => PaintMode::Furniture(selection),
        }
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            PaintMode::Idle => None,
            PaintMode::Floor(_) => Some(Category::Floor),
            PaintMode::Plant(_) => Some(Category::Plant),
            PaintMode::Furniture(_) => Some(Category::Furniture),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, PaintMode::Idle)
    }
}

/// Tile under the pointer, refreshed on every pointer move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickResult {
    #[default]
    None,
    Cell(usize),
}

pub struct PaintController {
    mode: PaintMode,
    pick: PickResult,
    /// World position of the hover cursor, None while hidden
    cursor: Option<Vec3>,
    sizes: CatalogSizes,
}

impl PaintController {
    pub fn new(sizes: CatalogSizes) -> Self {
        Self {
            mode: PaintMode::Idle,
            pick: PickResult::None,
            cursor: None,
            sizes,
        }
    }

    pub fn mode(&self) -> PaintMode {
        self.mode
    }

    pub fn pick(&self) -> PickResult {
        self.pick
    }

    pub fn cursor(&self) -> Option<Vec3> {
        self.cursor
    }

    /// Switch to painting `category`. An out-of-catalog index leaves the mode untouched.
    pub fn enter_mode(&mut self, category: Category, selection: Option<CatalogIndex>) -> Result<(), GridError> {
        if let Some(index) = selection {
            self.sizes.check(category, index)?;
        }
        self.mode = PaintMode::new(category, selection);
        Ok(())
    }

    pub fn cancel(&mut self) {
        self.mode = PaintMode::Idle;
        self.pick = PickResult::None;
        self.cursor = None;
    }

    /// Re-pick the tile under a pointer at (`x`, `y`) on `surface`
    pub fn on_pointer_move<C: RayCaster>(
        &mut self,
        x: f32,
        y: f32,
        surface: &Rect,
        caster: &C,
        grid: &GridModel,
    ) {
        if self.mode.is_idle() {
            return;
        }

        let picked = screen_to_ndc(x, y, surface)
            .map(|(ndc_x, ndc_y)| caster.ray_from_ndc(ndc_x, ndc_y))
            .and_then(|ray| grid.pick(&ray));

        match picked {
            Some(index) => {
                let pos = grid
                    .world_position(index)
                    .expect("picked index comes from grid.pick");
                self.pick = PickResult::Cell(index);
                self.cursor = Some(pos);
            }
            None => {
                self.pick = PickResult::None;
                self.cursor = None;
            }
        }
    }

    /// Apply the current mode at the picked cell.
    ///
    /// Returns the painted cell index, or None when idle or nothing is picked.
    pub fn on_click(&mut self, grid: &mut GridModel) -> Result<Option<usize>, GridError> {
        let PickResult::Cell(index) = self.pick else {
            return Ok(None);
        };

        match self.mode {
            PaintMode::Idle => return Ok(None),
            PaintMode::Floor(selection) => {
                grid.set_floor_variant(index, selection.unwrap_or(DEFAULT_FLOOR_VARIANT))?;
            }
            PaintMode::Plant(selection) => {
                grid.set_occupant(index, selection.map_or(Occupant::Empty, Occupant::Plant))?;
            }
            PaintMode::Furniture(selection) => {
                grid.set_occupant(index, selection.map_or(Occupant::Empty, Occupant::Furniture))?;
            }
        }
        Ok(Some(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::garden::grid::CELL_COUNT;
    use crate::view::Ray;

    const SURFACE: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);
    /// World half-width covered by the top-down caster
    const SPAN: f32 = 50.0;

    /// Looks straight down; NDC maps linearly onto the XZ plane
    struct TopDown;

    impl RayCaster for TopDown {
        fn ray_from_ndc(&self, ndc_x: f32, ndc_y: f32) -> Ray {
            Ray::new(
                Vec3::new(ndc_x * SPAN, 100.0, -ndc_y * SPAN),
                Vec3::new(0.0, -1.0, 0.0),
            )
        }
    }

    fn sizes() -> CatalogSizes {
        CatalogSizes { floor: 4, plants: 6, furniture: 3 }
    }

    /// Screen position over the centre of cell `index`
    fn pointer_over(grid: &GridModel, index: usize) -> (f32, f32) {
        let p = grid.world_position(index).unwrap();
        let ndc_x = p.x / SPAN;
        let ndc_y = -p.z / SPAN;
        ((ndc_x + 1.0) * 0.5 * SURFACE.w, (1.0 - ndc_y) * 0.5 * SURFACE.h)
    }

    fn hover(ctl: &mut PaintController, grid: &GridModel, index: usize) {
        let (x, y) = pointer_over(grid, index);
        ctl.on_pointer_move(x, y, &SURFACE, &TopDown, grid);
    }

    #[test]
    fn test_pointer_maps_to_cell() {
        let grid = GridModel::new(sizes());
        let mut ctl = PaintController::new(sizes());
        ctl.enter_mode(Category::Floor, Some(1)).unwrap();
        for index in [0, 9, 37, 55, 99] {
            hover(&mut ctl, &grid, index);
            assert_eq!(ctl.pick(), PickResult::Cell(index));
            assert_eq!(ctl.cursor(), Some(grid.world_position(index).unwrap()));
        }
    }

    #[test]
    fn test_pointer_move_ignored_when_idle() {
        let grid = GridModel::new(sizes());
        let mut ctl = PaintController::new(sizes());
        hover(&mut ctl, &grid, 37);
        assert_eq!(ctl.pick(), PickResult::None);
        assert_eq!(ctl.cursor(), None);
    }

    #[test]
    fn test_pointer_off_grid_hides_cursor() {
        let grid = GridModel::new(sizes());
        let mut ctl = PaintController::new(sizes());
        ctl.enter_mode(Category::Plant, Some(0)).unwrap();
        hover(&mut ctl, &grid, 37);
        assert!(ctl.cursor().is_some());

        // NDC x = 3.0, world x = 150
        ctl.on_pointer_move(200.0, 50.0, &SURFACE, &TopDown, &grid);
        assert_eq!(ctl.pick(), PickResult::None);
        assert_eq!(ctl.cursor(), None);
    }

    #[test]
    fn test_floor_paint_touches_only_picked_cell() {
        let mut grid = GridModel::new(sizes());
        let mut ctl = PaintController::new(sizes());
        ctl.enter_mode(Category::Floor, Some(2)).unwrap();
        hover(&mut ctl, &grid, 37);
        assert_eq!(ctl.on_click(&mut grid), Ok(Some(37)));

        assert_eq!(grid.cell(37).unwrap().floor_variant, 2);
        for index in (0..CELL_COUNT).filter(|&i| i != 37) {
            let cell = grid.cell(index).unwrap();
            assert_eq!(cell.floor_variant, 0, "cell {}", index);
            assert!(cell.occupant.is_empty(), "cell {}", index);
        }
    }

    #[test]
    fn test_plant_then_erase() {
        let mut grid = GridModel::new(sizes());
        let mut ctl = PaintController::new(sizes());

        ctl.enter_mode(Category::Plant, Some(5)).unwrap();
        hover(&mut ctl, &grid, 10);
        ctl.on_click(&mut grid).unwrap();
        assert_eq!(grid.cell(10).unwrap().occupant, Occupant::Plant(5));

        ctl.enter_mode(Category::Plant, None).unwrap();
        hover(&mut ctl, &grid, 10);
        ctl.on_click(&mut grid).unwrap();
        assert_eq!(grid.cell(10).unwrap().occupant, Occupant::Empty);
    }

    #[test]
    fn test_floor_eraser_restores_default() {
        let mut grid = GridModel::new(sizes());
        let mut ctl = PaintController::new(sizes());
        ctl.enter_mode(Category::Floor, Some(3)).unwrap();
        hover(&mut ctl, &grid, 5);
        ctl.on_click(&mut grid).unwrap();
        ctl.enter_mode(Category::Floor, None).unwrap();
        ctl.on_click(&mut grid).unwrap();
        assert_eq!(grid.cell(5).unwrap().floor_variant, DEFAULT_FLOOR_VARIANT);
    }

    #[test]
    fn test_switching_category_leaves_no_residue() {
        let mut ctl = PaintController::new(sizes());
        ctl.enter_mode(Category::Floor, Some(1)).unwrap();
        ctl.enter_mode(Category::Plant, Some(3)).unwrap();
        assert_eq!(ctl.mode(), PaintMode::Plant(Some(3)));
    }

    #[test]
    fn test_invalid_selection_keeps_mode() {
        let mut ctl = PaintController::new(sizes());
        ctl.enter_mode(Category::Furniture, Some(1)).unwrap();
        let err = ctl.enter_mode(Category::Plant, Some(6)).unwrap_err();
        assert!(matches!(err, GridError::InvalidCatalogIndex { category: Category::Plant, index: 6, .. }));
        assert_eq!(ctl.mode(), PaintMode::Furniture(Some(1)));
    }

    #[test]
    fn test_click_without_pick_is_noop() {
        let mut grid = GridModel::new(sizes());
        let mut ctl = PaintController::new(sizes());
        ctl.enter_mode(Category::Floor, Some(2)).unwrap();
        assert_eq!(ctl.on_click(&mut grid), Ok(None));
        assert!(!grid.has_pending_changes());
    }

    #[test]
    fn test_cancel_blocks_placement() {
        let mut grid = GridModel::new(sizes());
        let mut ctl = PaintController::new(sizes());
        ctl.enter_mode(Category::Furniture, Some(1)).unwrap();
        hover(&mut ctl, &grid, 64);
        assert_eq!(ctl.pick(), PickResult::Cell(64));

        ctl.cancel();
        assert_eq!(ctl.mode(), PaintMode::Idle);
        assert_eq!(ctl.cursor(), None);
        assert_eq!(ctl.on_click(&mut grid), Ok(None));
        assert!(grid.cell(64).unwrap().occupant.is_empty());
        assert!(!grid.has_pending_changes());
    }

    #[test]
    fn test_mode_persists_across_clicks() {
        let mut grid = GridModel::new(sizes());
        let mut ctl = PaintController::new(sizes());
        ctl.enter_mode(Category::Furniture, Some(2)).unwrap();
        for index in [1, 2, 3] {
            hover(&mut ctl, &grid, index);
            ctl.on_click(&mut grid).unwrap();
        }
        assert_eq!(ctl.mode(), PaintMode::Furniture(Some(2)));
        assert!((1..=3).all(|i| grid.cell(i).unwrap().occupant == Occupant::Furniture(2)));
    }
}
