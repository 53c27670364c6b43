// Host-side tests for the theme controller.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod theme {
    include!("../src/theme.rs");
}

use theme::*;

#[derive(Default)]
struct RecordingMarkers {
    dark: bool,
    red: bool,
    writes: Vec<(ThemeMarker, bool)>,
}

impl ThemeMarkers for RecordingMarkers {
    fn set_marker(&mut self, marker: ThemeMarker, present: bool) {
        match marker {
            ThemeMarker::Dark => self.dark = present,
            ThemeMarker::Red => self.red = present,
        }
        self.writes.push((marker, present));
    }
}

fn all_flag_states() -> [ThemeFlags; 4] {
    [
        ThemeFlags { is_dark: false, is_red: false },
        ThemeFlags { is_dark: true, is_red: false },
        ThemeFlags { is_dark: false, is_red: true },
        ThemeFlags { is_dark: true, is_red: true },
    ]
}

#[test]
fn toggle_dark_then_red_walkthrough() {
    let mut markers = RecordingMarkers::default();
    let mut theme = ThemeController::default();

    let flags = theme.toggle_dark(&mut markers);
    assert_eq!(flags, ThemeFlags { is_dark: true, is_red: false });
    assert!(markers.dark);

    let flags = theme.toggle_red(&mut markers);
    assert_eq!(flags, ThemeFlags { is_dark: false, is_red: true });
    assert!(!markers.dark);
    assert!(markers.red);
}

#[test]
fn toggle_red_always_clears_dark() {
    for start in all_flag_states() {
        let mut markers = RecordingMarkers::default();
        let mut theme = ThemeController::new(start);
        theme.apply(&mut markers);

        let flags = theme.toggle_red(&mut markers);
        assert!(!flags.is_dark, "dark survived toggle_red from {:?}", start);
        assert_eq!(flags.is_red, !start.is_red);
        assert!(!markers.dark);
        assert_eq!(markers.red, flags.is_red);
    }
}

// toggle_dark leaves red as it was; pinned on purpose.
#[test]
fn toggle_dark_does_not_clear_red() {
    let mut markers = RecordingMarkers::default();
    let mut theme = ThemeController::new(ThemeFlags { is_dark: false, is_red: true });
    theme.apply(&mut markers);

    let flags = theme.toggle_dark(&mut markers);
    assert_eq!(flags, ThemeFlags { is_dark: true, is_red: true });
    assert!(markers.dark);
    assert!(markers.red);
}

#[test]
fn markers_track_flags_after_every_toggle() {
    let mut markers = RecordingMarkers::default();
    let mut theme = ThemeController::default();
    let sequence = [true, false, false, true, true, false, true];
    for use_red in sequence {
        let flags = if use_red {
            theme.toggle_red(&mut markers)
        } else {
            theme.toggle_dark(&mut markers)
        };
        assert_eq!(markers.dark, flags.is_dark);
        assert_eq!(markers.red, flags.is_red);
    }
}

#[test]
fn toggle_dark_only_writes_the_dark_marker() {
    let mut markers = RecordingMarkers::default();
    let mut theme = ThemeController::default();
    theme.toggle_dark(&mut markers);
    theme.toggle_dark(&mut markers);
    assert_eq!(
        markers.writes,
        vec![(ThemeMarker::Dark, true), (ThemeMarker::Dark, false)]
    );
    assert_eq!(theme.flags(), ThemeFlags::default());
}

#[test]
fn apply_projects_both_markers() {
    let mut markers = RecordingMarkers::default();
    let theme = ThemeController::new(ThemeFlags { is_dark: true, is_red: false });
    theme.apply(&mut markers);
    assert!(markers.dark);
    assert!(!markers.red);
    assert_eq!(markers.writes.len(), 2);
}
