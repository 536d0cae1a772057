//! My Beauty Garden: a tile-based 3D garden designer
//!
//! Paint floor tiles, plants and furniture onto a 10x10 grid seen through
//! an orbiting perspective camera:
//! - Bottom menu bar picks a category and an item (or the eraser)
//! - Left click paints the tile under the pointer
//! - Right drag orbits, mouse wheel zooms
//! - The photo button saves the view as a PNG

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod config;
mod garden;
mod scene;
mod snapshot;
mod ui;
mod view;

use macroquad::prelude::*;
use app::GardenApp;
use config::CONFIG_PATH;
use scene::SceneAssets;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("My Beauty Garden v{}", VERSION),
        window_width: 1280,
        window_height: 800,
        window_resizable: true,
        high_dpi: true,
        sample_count: 4,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    let config = config::load_or_seed(CONFIG_PATH);
    #[cfg(target_arch = "wasm32")]
    let config = config::config_or_default(macroquad::file::load_string(CONFIG_PATH).await.ok().as_deref());

    let assets = SceneAssets::load(&config.catalog()).await;
    let mut app = GardenApp::new(config);

    println!("=== My Beauty Garden v{} ===", VERSION);

    loop {
        app.update();
        app.draw(&assets);
        next_frame().await;
    }
}
