//! Input state for overlay interaction

use super::Rect;

/// Mouse button state
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub right_down: bool,
    pub left_pressed: bool,  // Just pressed this frame
    pub scroll: f32,         // Scroll wheel delta
}

impl MouseState {
    /// Sample macroquad's input for this frame
    pub fn capture() -> Self {
        use macroquad::prelude::*;
        let (x, y) = mouse_position();
        Self {
            x,
            y,
            right_down: is_mouse_button_down(MouseButton::Right),
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
            scroll: mouse_wheel().1,
        }
    }

    /// Check if mouse is inside a rect
    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }

    /// Check if mouse just clicked inside a rect
    pub fn clicked(&self, rect: &Rect) -> bool {
        self.left_pressed && rect.contains(self.x, self.y)
    }
}

/// UI context passed through the frame
#[derive(Default)]
pub struct UiContext {
    pub mouse: MouseState,
    /// Set once any widget has taken this frame's click
    pub click_consumed: bool,
    /// Pointer is over some overlay widget or bar
    pub pointer_over_ui: bool,
}

impl UiContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset at start of frame (call before UI code)
    pub fn begin_frame(&mut self, mouse: MouseState) {
        self.mouse = mouse;
        self.click_consumed = false;
        self.pointer_over_ui = false;
    }

    /// Mark `rect` as overlay area; clicks inside it never reach the garden
    pub fn claim(&mut self, rect: &Rect) {
        if self.mouse.inside(rect) {
            self.pointer_over_ui = true;
            if self.mouse.left_pressed {
                self.click_consumed = true;
            }
        }
    }
}
