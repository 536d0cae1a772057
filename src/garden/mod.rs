//! Garden model
//!
//! - `grid` - the 10x10 cell grid, tile bounds and picking
//! - `paint` - pointer interaction state machine
//! - `catalog` - floor / plant / furniture asset lists
//! - `intent` - typed menu requests
//! - `event` - generic per-frame event queue

mod catalog;
mod cell;
mod event;
mod grid;
mod intent;
mod paint;

pub use catalog::*;
pub use cell::*;
pub use grid::*;
pub use intent::*;
pub use paint::*;
