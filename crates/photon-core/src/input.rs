//! Interaction state: discrete input events applied to the viewer state.

use crate::consts::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, KEY_ZOOM_STEP, WHEEL_ZOOM_STEP};

/// Discrete input events the viewer reacts to. Everything else the
/// windowing layer produces is a no-op by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close request or the Escape key.
    Quit,
    /// Window resized to the given drawable size.
    Resized { width: u32, height: u32 },
    /// Keyboard zoom in (`+` / `=`).
    ZoomIn,
    /// Keyboard zoom out (`-`).
    ZoomOut,
    /// Mouse wheel with a signed vertical delta.
    Wheel { delta: i32 },
    /// Scale the image to fit the window (`f`).
    FitToWindow,
    /// Reset to 1:1 pixels (`1`).
    ActualSize,
    /// Toggle the metadata overlay (`i`).
    ToggleInfo,
    /// Pan by a pixel delta (arrow keys, mouse drag).
    Pan { dx: i32, dy: i32 },
}

/// The single mutable viewer state, owned by the frame loop.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerState {
    pub window_width: u32,
    pub window_height: u32,
    /// Positive scale factor, unbounded in both directions; the render
    /// cap in `viewport::compute_rect` is the only effective ceiling.
    pub zoom: f32,
    pub pan_x: i32,
    pub pan_y: i32,
    pub fit_to_window: bool,
    pub show_info: bool,
    pub running: bool,
}

impl ViewerState {
    pub fn new(window_width: u32, window_height: u32) -> Self {
        Self {
            window_width,
            window_height,
            zoom: 1.0,
            pan_x: 0,
            pan_y: 0,
            fit_to_window: true,
            show_info: false,
            running: true,
        }
    }

    /// Apply a single event. Every transition is total; no event can
    /// leave the state inconsistent.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => self.running = false,
            InputEvent::Resized { width, height } => {
                self.window_width = width;
                self.window_height = height;
            }
            InputEvent::ZoomIn => {
                self.zoom *= KEY_ZOOM_STEP;
                self.fit_to_window = false;
            }
            InputEvent::ZoomOut => {
                self.zoom /= KEY_ZOOM_STEP;
                self.fit_to_window = false;
            }
            InputEvent::Wheel { delta } if delta > 0 => {
                self.zoom *= WHEEL_ZOOM_STEP;
                self.fit_to_window = false;
            }
            InputEvent::Wheel { delta } if delta < 0 => {
                self.zoom /= WHEEL_ZOOM_STEP;
                self.fit_to_window = false;
            }
            InputEvent::Wheel { .. } => {}
            InputEvent::FitToWindow => {
                self.fit_to_window = true;
                self.zoom = 1.0;
                self.pan_x = 0;
                self.pan_y = 0;
            }
            InputEvent::ActualSize => {
                self.fit_to_window = false;
                self.zoom = 1.0;
                self.pan_x = 0;
                self.pan_y = 0;
            }
            InputEvent::ToggleInfo => self.show_info = !self.show_info,
            InputEvent::Pan { dx, dy } => {
                self.pan_x = self.pan_x.saturating_add(dx);
                self.pan_y = self.pan_y.saturating_add(dy);
            }
        }
    }

    /// Drain a frame's worth of pending events in order.
    pub fn apply_all<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            self.apply(event);
        }
    }
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT)
    }
}
