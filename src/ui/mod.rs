//! Immediate-mode overlay UI
//!
//! Drawn in screen space on top of the 3D garden each frame. Widgets claim
//! the area they cover so clicks on the menu never paint the tile below.

mod rect;
mod input;
mod menu;
pub mod theme;

pub use rect::*;
pub use input::*;
pub use menu::*;
