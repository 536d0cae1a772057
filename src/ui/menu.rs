//! Overlay menu
//!
//! A bottom bar with one button per category plus a snapshot button.
//! Opening a category swaps the bar for that category's items; closing it
//! cancels painting and brings the main bar back.
//!
//! Button presses never touch the garden directly, they only send
//! `UiIntent`s.

use macroquad::prelude::*;

use super::{theme, Rect, UiContext};
use crate::garden::{CatalogSizes, Category, IntentQueue, UiIntent};
use crate::scene::SceneAssets;

/// Largest button edge in pixels
pub const MAX_BUTTON_SIZE: f32 = 64.0;
/// Gap between buttons and around the bar
pub const BUTTON_GAP: f32 = 5.0;

/// Which bar is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuPanel {
    #[default]
    Main,
    Category(Category),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton {
    Open(Category),
    Snapshot,
    Close,
    Item(usize),
    Eraser,
}

#[derive(Debug, Default)]
pub struct GardenMenu {
    pub panel: MenuPanel,
    /// Selected item/eraser in the open category
    pub highlighted: Option<MenuButton>,
}

impl GardenMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buttons of the current bar, left to right
    pub fn buttons(&self, sizes: CatalogSizes) -> Vec<MenuButton> {
        match self.panel {
            MenuPanel::Main => {
                let mut buttons: Vec<_> = Category::ALL.iter().map(|c| MenuButton::Open(*c)).collect();
                buttons.push(MenuButton::Snapshot);
                buttons
            }
            MenuPanel::Category(category) => {
                let mut buttons = vec![MenuButton::Close];
                buttons.extend((0..sizes.len(category)).map(MenuButton::Item));
                buttons.push(MenuButton::Eraser);
                buttons
            }
        }
    }

    /// Apply a button press, returning the intent it produces
    pub fn press(&mut self, button: MenuButton) -> Option<UiIntent> {
        match (self.panel, button) {
            (MenuPanel::Main, MenuButton::Open(category)) => {
                self.panel = MenuPanel::Category(category);
                self.highlighted = None;
                None
            }
            (MenuPanel::Main, MenuButton::Snapshot) => Some(UiIntent::Snapshot),
            (MenuPanel::Category(_), MenuButton::Close) => {
                self.panel = MenuPanel::Main;
                self.highlighted = None;
                Some(UiIntent::Cancel)
            }
            (MenuPanel::Category(category), MenuButton::Item(index)) => {
                self.highlighted = Some(button);
                Some(UiIntent::enter(category, Some(index)))
            }
            (MenuPanel::Category(category), MenuButton::Eraser) => {
                self.highlighted = Some(button);
                Some(UiIntent::enter(category, None))
            }
            // Button from a bar that is not showing
            _ => None,
        }
    }

    /// Escape closes an open category bar
    pub fn escape(&mut self) -> Option<UiIntent> {
        match self.panel {
            MenuPanel::Main => None,
            MenuPanel::Category(_) => self.press(MenuButton::Close),
        }
    }

    /// Claim the bar area before the garden sees this frame's pointer
    pub fn claim(&self, ctx: &mut UiContext, screen: Rect, sizes: CatalogSizes) {
        if let Some(bar) = bar_bounds(&layout_bar(self.buttons(sizes).len(), screen)) {
            ctx.claim(&bar);
        }
    }

    /// Draw the current bar, queue intents for pressed buttons
    pub fn draw(
        &mut self,
        ctx: &mut UiContext,
        screen: Rect,
        sizes: CatalogSizes,
        assets: &SceneAssets,
        intents: &mut IntentQueue,
    ) {
        draw_title(screen);

        let buttons = self.buttons(sizes);
        let rects = layout_bar(buttons.len(), screen);
        let Some(bar) = bar_bounds(&rects) else {
            return;
        };
        ctx.claim(&bar);
        draw_rectangle(bar.x, bar.y, bar.w, bar.h, theme::BAR_COLOR);

        let mut pressed = None;
        for (button, rect) in buttons.iter().zip(&rects) {
            let hovered = ctx.mouse.inside(rect);
            let bg = if hovered { theme::BUTTON_HOVER } else { theme::BUTTON_COLOR };
            draw_rectangle(rect.x, rect.y, rect.w, rect.h, bg);

            let texture = match (self.panel, button) {
                (MenuPanel::Category(category), MenuButton::Item(i)) => assets.thumbnail(category, *i),
                _ => None,
            };
            match texture {
                Some(tex) => {
                    let inner = rect.pad(2.0);
                    draw_texture_ex(tex, inner.x, inner.y, WHITE, DrawTextureParams {
                        dest_size: Some(vec2(inner.w, inner.h)),
                        ..Default::default()
                    })
                }
                None => draw_label(&button_label(button), rect),
            }

            if self.highlighted == Some(*button) {
                draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 3.0, theme::HIGHLIGHT_COLOR);
            }
            if ctx.mouse.clicked(rect) {
                pressed = Some(*button);
            }
        }

        if let Some(button) = pressed {
            if let Some(intent) = self.press(button) {
                intents.send(intent);
            }
        }
    }
}

fn button_label(button: &MenuButton) -> String {
    match button {
        MenuButton::Open(category) => category.label().to_string(),
        MenuButton::Snapshot => "Photo".to_string(),
        MenuButton::Close => "Close".to_string(),
        MenuButton::Item(i) => format!("#{}", i + 1),
        MenuButton::Eraser => "Erase".to_string(),
    }
}

fn draw_label(text: &str, rect: &Rect) {
    let font_size = theme::FONT_SIZE_CONTENT.min(rect.h * 0.4);
    let dims = measure_text(text, None, font_size as u16, 1.0);
    let x = (rect.center_x() - dims.width * 0.5).round();
    let y = (rect.center_y() + dims.height * 0.5).round();
    draw_text(text, x, y, font_size, theme::TEXT_COLOR);
}

fn draw_title(screen: Rect) {
    let text = "My Beauty Garden";
    let size = theme::FONT_SIZE_TITLE.min(screen.h * 0.08);
    let dims = measure_text(text, None, size as u16, 1.0);
    draw_text(text, (screen.center_x() - dims.width * 0.5).round(), (dims.height + 12.0).round(), size, DARKGREEN);
}

/// Square buttons in one centred row along the bottom edge.
///
/// The bar never takes more than a quarter of the screen height, and the
/// buttons shrink when the row would not fit the width.
pub fn layout_bar(count: usize, screen: Rect) -> Vec<Rect> {
    if count == 0 || screen.w <= 0.0 || screen.h <= 0.0 {
        return Vec::new();
    }
    let n = count as f32;
    let by_height = screen.h * 0.25 - BUTTON_GAP * 2.0;
    let by_width = (screen.w - BUTTON_GAP * (n + 1.0)) / n;
    let size = MAX_BUTTON_SIZE.min(by_height).min(by_width).max(1.0);

    let row_w = n * size + (n - 1.0) * BUTTON_GAP;
    let x0 = screen.center_x() - row_w * 0.5;
    let y = screen.bottom() - BUTTON_GAP - size;
    (0..count)
        .map(|i| Rect::new(x0 + i as f32 * (size + BUTTON_GAP), y, size, size))
        .collect()
}

/// Bar background around a laid-out row
fn bar_bounds(rects: &[Rect]) -> Option<Rect> {
    let first = rects.first()?;
    let last = rects.last()?;
    Some(Rect::new(
        first.x - BUTTON_GAP,
        first.y - BUTTON_GAP,
        last.right() - first.x + BUTTON_GAP * 2.0,
        first.h + BUTTON_GAP * 2.0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes() -> CatalogSizes {
        CatalogSizes { floor: 3, plants: 2, furniture: 4 }
    }

    #[test]
    fn test_main_bar_buttons() {
        let menu = GardenMenu::new();
        assert_eq!(menu.buttons(sizes()), vec![
            MenuButton::Open(Category::Floor),
            MenuButton::Open(Category::Plant),
            MenuButton::Open(Category::Furniture),
            MenuButton::Snapshot,
        ]);
    }

    #[test]
    fn test_category_bar_buttons() {
        let mut menu = GardenMenu::new();
        assert_eq!(menu.press(MenuButton::Open(Category::Furniture)), None);
        let buttons = menu.buttons(sizes());
        assert_eq!(buttons.first(), Some(&MenuButton::Close));
        assert_eq!(buttons.last(), Some(&MenuButton::Eraser));
        assert_eq!(buttons.len(), 4 + 2);
    }

    #[test]
    fn test_select_item_and_close() {
        let mut menu = GardenMenu::new();
        menu.press(MenuButton::Open(Category::Plant));
        assert_eq!(menu.press(MenuButton::Item(1)), Some(UiIntent::EnterPlant(Some(1))));
        assert_eq!(menu.highlighted, Some(MenuButton::Item(1)));

        assert_eq!(menu.press(MenuButton::Close), Some(UiIntent::Cancel));
        assert_eq!(menu.panel, MenuPanel::Main);
        assert_eq!(menu.highlighted, None);
    }

    #[test]
    fn test_furniture_eraser_erases_furniture() {
        let mut menu = GardenMenu::new();
        menu.press(MenuButton::Open(Category::Furniture));
        assert_eq!(menu.press(MenuButton::Eraser), Some(UiIntent::EnterFurniture(None)));
    }

    #[test]
    fn test_snapshot_and_escape() {
        let mut menu = GardenMenu::new();
        assert_eq!(menu.press(MenuButton::Snapshot), Some(UiIntent::Snapshot));
        assert_eq!(menu.escape(), None);

        menu.press(MenuButton::Open(Category::Floor));
        assert_eq!(menu.press(MenuButton::Snapshot), None);
        assert_eq!(menu.escape(), Some(UiIntent::Cancel));
        assert_eq!(menu.panel, MenuPanel::Main);
    }

    #[test]
    fn test_layout_fits_screen() {
        let screen = Rect::screen(800.0, 600.0);
        let rects = layout_bar(6, screen);
        assert_eq!(rects.len(), 6);
        for pair in rects.windows(2) {
            assert!(pair[0].right() < pair[1].x);
        }
        for r in &rects {
            assert!(r.x >= 0.0 && r.right() <= screen.w);
            assert!(r.bottom() <= screen.h);
            assert_eq!(r.w, MAX_BUTTON_SIZE);
        }
        let left = rects[0].x;
        let right = screen.w - rects[5].right();
        assert!((left - right).abs() < 0.01);
    }

    #[test]
    fn test_layout_shrinks_to_fit() {
        // Short screen: capped at a quarter of the height
        let rects = layout_bar(4, Rect::screen(800.0, 100.0));
        assert!(rects[0].h <= 25.0);

        // Narrow screen: capped by width
        let screen = Rect::screen(200.0, 600.0);
        let rects = layout_bar(8, screen);
        assert!(rects[7].right() <= screen.w + 0.01);
        assert!(rects[0].x >= -0.01);
    }

    #[test]
    fn test_layout_empty() {
        assert!(layout_bar(0, Rect::screen(800.0, 600.0)).is_empty());
        assert!(bar_bounds(&[]).is_none());
    }
}
