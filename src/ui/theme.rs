//! UI Theme - Shared colors and styling constants

use macroquad::prelude::Color;

/// Menu bar background
pub const BAR_COLOR: Color = Color::new(0.11, 0.11, 0.13, 0.75);

/// Button background
pub const BUTTON_COLOR: Color = Color::new(0.2, 0.2, 0.23, 1.0);

/// Button background while hovered
pub const BUTTON_HOVER: Color = Color::new(0.28, 0.28, 0.32, 1.0);

/// Selected catalog item tint (0xff5555)
pub const HIGHLIGHT_COLOR: Color = Color::new(1.0, 0.333, 0.333, 1.0);

/// Primary text color
pub const TEXT_COLOR: Color = Color::new(0.9, 0.9, 0.92, 1.0);

/// Status and mode text drawn straight onto the sky
pub const HINT_COLOR: Color = Color::new(0.1, 0.25, 0.12, 1.0);

/// Standard label size
pub const FONT_SIZE_CONTENT: f32 = 16.0;

/// Title text size
pub const FONT_SIZE_TITLE: f32 = 36.0;

// =============================================================================
// Scene colors
// =============================================================================

/// Sky (0xdfffff)
pub const SKY_COLOR: Color = Color::new(0.875, 1.0, 1.0, 1.0);

/// Base lawn under the tiles (0x22ff22)
pub const LAWN_COLOR: Color = Color::new(0.133, 1.0, 0.133, 1.0);

/// Hover cursor tile
pub const CURSOR_COLOR: Color = Color::new(1.0, 0.0, 0.0, 0.85);

pub const PLANT_COLOR: Color = Color::new(0.15, 0.55, 0.2, 1.0);

pub const FURNITURE_COLOR: Color = Color::new(0.55, 0.35, 0.2, 1.0);

/// Fallback floor colors for variants without a loaded texture
pub const FLOOR_PALETTE: [Color; 6] = [
    Color::new(0.45, 0.75, 0.35, 1.0),
    Color::new(0.62, 0.62, 0.6, 1.0),
    Color::new(0.6, 0.42, 0.25, 1.0),
    Color::new(0.78, 0.74, 0.62, 1.0),
    Color::new(0.85, 0.85, 0.88, 1.0),
    Color::new(0.4, 0.5, 0.65, 1.0),
];

/// Fallback color for floor variant `variant`
pub fn floor_color(variant: usize) -> Color {
    FLOOR_PALETTE[variant % FLOOR_PALETTE.len()]
}
