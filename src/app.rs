//! Application state
//!
//! `GardenApp` owns the grid, the paint controller, the camera and the
//! overlay menu. `main` drives it once per frame: `update` reads input and
//! applies intents, `draw` renders the garden and the overlay.

use std::path::PathBuf;

use macroquad::prelude::{
    draw_text, get_frame_time, is_key_pressed, screen_height, screen_width, set_default_camera,
    KeyCode,
};

use crate::config::GardenConfig;
use crate::garden::{GridModel, IntentQueue, PaintController, UiIntent};
use crate::scene::{draw_garden, SceneAssets, SceneVisuals};
use crate::snapshot::SnapshotError;
use crate::ui::{theme, GardenMenu, MouseState, Rect, UiContext};
use crate::view::OrbitCamera;

/// Radians of orbit per pixel of right-drag
const ORBIT_SPEED: f32 = 0.005;
/// World units per wheel notch
const ZOOM_STEP: f32 = 10.0;
/// Seconds a status message stays up
const STATUS_SECS: f32 = 3.0;

pub struct GardenApp {
    pub config: GardenConfig,
    pub grid: GridModel,
    pub paint: PaintController,
    pub camera: OrbitCamera,
    pub visuals: SceneVisuals,
    pub menu: GardenMenu,
    pub intents: IntentQueue,
    pub ui: UiContext,
    snapshot_pending: bool,
    /// (message, seconds left)
    status_message: Option<(String, f32)>,
    last_mouse: Option<(f32, f32)>,
}

impl GardenApp {
    pub fn new(config: GardenConfig) -> Self {
        let sizes = config.catalog().sizes();
        let grid = GridModel::new(sizes);
        let visuals = SceneVisuals::from_grid(&grid);
        Self {
            config,
            grid,
            paint: PaintController::new(sizes),
            camera: OrbitCamera::new(),
            visuals,
            menu: GardenMenu::new(),
            intents: IntentQueue::new(),
            ui: UiContext::new(),
            snapshot_pending: false,
            status_message: None,
            last_mouse: None,
        }
    }

    /// Set a status message that will be displayed for a duration
    pub fn set_status(&mut self, message: &str, duration_secs: f32) {
        self.status_message = Some((message.to_string(), duration_secs));
    }

    pub fn get_status(&self) -> Option<&str> {
        self.status_message.as_ref().map(|(msg, _)| msg.as_str())
    }

    fn tick_status(&mut self, dt: f32) {
        if let Some((_, left)) = &mut self.status_message {
            *left -= dt;
            if *left <= 0.0 {
                self.status_message = None;
            }
        }
    }

    pub fn snapshot_pending(&self) -> bool {
        self.snapshot_pending
    }

    pub fn apply_intent(&mut self, intent: UiIntent) {
        if let Some((category, selection)) = intent.paint_target() {
            if let Err(e) = self.paint.enter_mode(category, selection) {
                eprintln!("Ignoring menu selection: {}", e);
                self.set_status(&e.to_string(), STATUS_SECS);
            }
            return;
        }
        match intent {
            UiIntent::Cancel => self.paint.cancel(),
            UiIntent::Snapshot => self.snapshot_pending = true,
            _ => {}
        }
    }

    /// Apply every intent queued since the last frame, in order
    pub fn process_intents(&mut self) {
        let pending: Vec<UiIntent> = self.intents.drain().collect();
        for intent in pending {
            self.apply_intent(intent);
        }
    }

    /// Camera and paint handling for the pointer in `self.ui`
    pub fn handle_pointer(&mut self, surface: Rect) {
        let mouse = self.ui.mouse;

        if let Some((last_x, last_y)) = self.last_mouse {
            if mouse.right_down {
                self.camera.orbit(-(mouse.x - last_x) * ORBIT_SPEED, -(mouse.y - last_y) * ORBIT_SPEED);
            }
        }
        self.last_mouse = Some((mouse.x, mouse.y));
        if mouse.scroll != 0.0 && !self.ui.pointer_over_ui {
            self.camera.zoom(-mouse.scroll.signum() * ZOOM_STEP);
        }

        // Re-pick every frame: orbiting moves the garden under a still pointer
        self.paint.on_pointer_move(mouse.x, mouse.y, &surface, &self.camera, &self.grid);

        if mouse.left_pressed && !self.ui.click_consumed {
            if let Err(e) = self.paint.on_click(&mut self.grid) {
                eprintln!("Paint failed: {}", e);
                self.set_status(&e.to_string(), STATUS_SECS);
            }
        }
    }

    /// Read input and apply it to the garden
    pub fn update(&mut self) {
        let screen = Rect::screen(screen_width(), screen_height());
        self.camera.set_aspect(screen.w, screen.h);

        self.ui.begin_frame(MouseState::capture());
        self.menu.claim(&mut self.ui, screen, self.grid.sizes());

        if is_key_pressed(KeyCode::Escape) {
            if let Some(intent) = self.menu.escape() {
                self.intents.send(intent);
            }
        }

        self.process_intents();
        self.handle_pointer(screen);
        self.tick_status(get_frame_time());
    }

    /// Render the garden, export a pending snapshot, then draw the overlay
    pub fn draw(&mut self, assets: &SceneAssets) {
        let screen = Rect::screen(screen_width(), screen_height());

        if self.grid.has_pending_changes() {
            self.visuals.sync(&mut self.grid);
        }
        draw_garden(&self.visuals, assets, &self.camera, self.paint.cursor());

        if self.snapshot_pending {
            self.snapshot_pending = false;
            self.export_snapshot();
        }

        set_default_camera();
        let sizes = self.grid.sizes();
        self.menu.draw(&mut self.ui, screen, sizes, assets, &mut self.intents);

        let mut y = theme::FONT_SIZE_TITLE + 36.0;
        if let Some(category) = self.paint.mode().category() {
            let hint = format!("Painting {} (Esc to stop)", category.label());
            draw_text(&hint, 12.0, y, theme::FONT_SIZE_CONTENT, theme::HINT_COLOR);
            y += theme::FONT_SIZE_CONTENT + 4.0;
        }
        if let Some(msg) = self.get_status() {
            draw_text(msg, 12.0, y, theme::FONT_SIZE_CONTENT, theme::HINT_COLOR);
        }
    }

    fn export_snapshot(&mut self) {
        let result = self.capture_snapshot();
        self.report_snapshot(result);
    }

    /// Capture the 3D view drawn so far and write it as PNG
    #[cfg(not(target_arch = "wasm32"))]
    fn capture_snapshot(&self) -> Result<PathBuf, SnapshotError> {
        use crate::snapshot::{image_from_capture, local_file_name, save_snapshot, snapshot_dir};

        let capture = macroquad::prelude::get_screen_data();
        let img = image_from_capture(capture.width as u32, capture.height as u32, capture.bytes)?;
        let dir = snapshot_dir(self.config.snapshot_dir.as_deref());
        save_snapshot(&img, &dir, &local_file_name())
    }

    #[cfg(target_arch = "wasm32")]
    fn capture_snapshot(&self) -> Result<PathBuf, SnapshotError> {
        Err(SnapshotError::Unsupported)
    }

    fn report_snapshot(&mut self, result: Result<PathBuf, SnapshotError>) {
        match result {
            Ok(path) => {
                println!("Saved snapshot {}", path.display());
                self.set_status(&format!("Saved {}", path.display()), STATUS_SECS);
            }
            Err(e) => {
                eprintln!("Snapshot failed: {}", e);
                self.set_status(&format!("Snapshot failed: {}", e), STATUS_SECS);
            }
        }
    }
}
