//! Viewport geometry: viewer state to destination rectangle, recomputed
//! from scratch every frame.

use crate::consts::MAX_RENDER_DIMENSION;
use crate::input::ViewerState;

/// Destination rectangle in window coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Compute where the image lands in the window.
///
/// Pure function of the current state and image size; no accumulation
/// between frames. Returns `None` when the free-mode rectangle has a
/// degenerate or over-cap extent and nothing should be drawn.
pub fn compute_rect(state: &ViewerState, image_w: u32, image_h: u32) -> Option<Rect> {
    if image_w == 0 || image_h == 0 {
        return None;
    }

    let window_w = state.window_width as i32;
    let window_h = state.window_height as i32;

    if state.fit_to_window {
        let image_aspect = image_w as f32 / image_h as f32;
        let window_aspect = state.window_width as f32 / state.window_height as f32;

        // Clamp the longer relative axis to the window, derive the other
        // from the image aspect, and center the slack. Pan and zoom are
        // ignored in this mode.
        let (width, height) = if image_aspect > window_aspect {
            (window_w, (window_w as f32 / image_aspect).round() as i32)
        } else {
            ((window_h as f32 * image_aspect).round() as i32, window_h)
        };

        return Some(Rect {
            x: (window_w - width) / 2,
            y: (window_h - height) / 2,
            width,
            height,
        });
    }

    let width = (image_w as f32 * state.zoom).round() as i32;
    let height = (image_h as f32 * state.zoom).round() as i32;

    if width <= 0 || height <= 0 || width > MAX_RENDER_DIMENSION || height > MAX_RENDER_DIMENSION {
        return None;
    }

    Some(Rect {
        x: state.pan_x.saturating_add((window_w - width) / 2),
        y: state.pan_y.saturating_add((window_h - height) / 2),
        width,
        height,
    })
}
