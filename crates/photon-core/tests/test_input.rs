use approx::assert_relative_eq;
use photon_core::input::{InputEvent, ViewerState};

#[test]
fn test_initial_state() {
    let state = ViewerState::new(800, 600);
    assert_eq!(state.window_width, 800);
    assert_eq!(state.window_height, 600);
    assert_eq!(state.zoom, 1.0);
    assert_eq!((state.pan_x, state.pan_y), (0, 0));
    assert!(state.fit_to_window);
    assert!(!state.show_info);
    assert!(state.running);
}

#[test]
fn test_quit_and_resize() {
    let mut state = ViewerState::new(800, 600);

    state.apply(InputEvent::Resized {
        width: 1280,
        height: 720,
    });
    assert_eq!(state.window_width, 1280);
    assert_eq!(state.window_height, 720);
    assert!(state.running);

    state.apply(InputEvent::Quit);
    assert!(!state.running);
}

#[test]
fn test_keyboard_zoom_compounds() {
    let mut state = ViewerState::new(800, 600);

    state.apply(InputEvent::ZoomIn);
    state.apply(InputEvent::ZoomIn);
    assert_relative_eq!(state.zoom, 1.44, epsilon = 1e-5);
    assert!(!state.fit_to_window);

    state.apply(InputEvent::ZoomOut);
    state.apply(InputEvent::ZoomOut);
    assert_relative_eq!(state.zoom, 1.0, epsilon = 1e-5);
}

#[test]
fn test_wheel_zoom() {
    let mut state = ViewerState::new(800, 600);

    state.apply(InputEvent::Wheel { delta: 1 });
    assert_relative_eq!(state.zoom, 1.1, epsilon = 1e-5);
    assert!(!state.fit_to_window);

    state.apply(InputEvent::Wheel { delta: -1 });
    assert_relative_eq!(state.zoom, 1.0, epsilon = 1e-5);

    // Zero delta is a no-op.
    let before = state.clone();
    state.apply(InputEvent::Wheel { delta: 0 });
    assert_eq!(state, before);
}

#[test]
fn test_zoom_has_no_floor_or_ceiling() {
    let mut state = ViewerState::new(800, 600);

    for _ in 0..200 {
        state.apply(InputEvent::ZoomOut);
    }
    assert!(state.zoom > 0.0, "zoom never reaches zero");

    for _ in 0..400 {
        state.apply(InputEvent::ZoomIn);
    }
    assert!(state.zoom > 1.0);
}

#[test]
fn test_fit_is_idempotent() {
    let mut state = ViewerState::new(800, 600);
    state.apply(InputEvent::ZoomIn);
    state.apply(InputEvent::Pan { dx: 40, dy: -25 });

    state.apply(InputEvent::FitToWindow);
    let once = state.clone();
    state.apply(InputEvent::FitToWindow);

    assert_eq!(state, once);
    assert!(state.fit_to_window);
    assert_eq!(state.zoom, 1.0);
    assert_eq!((state.pan_x, state.pan_y), (0, 0));
}

#[test]
fn test_actual_size_resets_without_fit() {
    let mut state = ViewerState::new(800, 600);
    state.apply(InputEvent::ZoomIn);
    state.apply(InputEvent::Pan { dx: 10, dy: 10 });

    state.apply(InputEvent::ActualSize);
    assert!(!state.fit_to_window);
    assert_eq!(state.zoom, 1.0);
    assert_eq!((state.pan_x, state.pan_y), (0, 0));
}

#[test]
fn test_info_toggle_roundtrips() {
    let mut state = ViewerState::new(800, 600);
    let before = state.clone();

    state.apply(InputEvent::ToggleInfo);
    assert!(state.show_info);

    state.apply(InputEvent::ToggleInfo);
    assert_eq!(state, before);
}

#[test]
fn test_pan_accumulates() {
    let mut state = ViewerState::new(800, 600);
    state.apply(InputEvent::Pan { dx: 10, dy: -5 });
    state.apply(InputEvent::Pan { dx: -3, dy: 20 });
    assert_eq!((state.pan_x, state.pan_y), (7, 15));
    // Panning never flips the display mode.
    assert!(state.fit_to_window);
}

#[test]
fn test_apply_all_preserves_order() {
    let mut state = ViewerState::new(800, 600);
    state.apply_all([
        InputEvent::ZoomIn,
        InputEvent::FitToWindow,
        InputEvent::Wheel { delta: 1 },
    ]);
    // The wheel event lands after the fit reset.
    assert!(!state.fit_to_window);
    assert_relative_eq!(state.zoom, 1.1, epsilon = 1e-5);
}
