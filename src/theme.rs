/// The two visual modes the page can be in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeFlags {
    pub is_dark: bool,
    pub is_red: bool,
}

/// Document-level marker consumed by the stylesheet and the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemeMarker {
    Dark,
    Red,
}

/// Sink for marker mutations. The web build writes `classList`; tests record.
pub trait ThemeMarkers {
    fn set_marker(&mut self, marker: ThemeMarker, present: bool);
}

#[derive(Debug, Default)]
pub struct ThemeController {
    flags: ThemeFlags,
}

impl ThemeController {
    pub fn new(flags: ThemeFlags) -> Self {
        Self { flags }
    }

    #[inline]
    pub fn flags(&self) -> ThemeFlags {
        self.flags
    }

    pub fn toggle_dark(&mut self, markers: &mut impl ThemeMarkers) -> ThemeFlags {
        // Red is left alone here; only toggle_red clears the other mode.
        self.flags.is_dark = !self.flags.is_dark;
        markers.set_marker(ThemeMarker::Dark, self.flags.is_dark);
        log::info!("[theme] dark={}", self.flags.is_dark);
        self.flags
    }

    pub fn toggle_red(&mut self, markers: &mut impl ThemeMarkers) -> ThemeFlags {
        self.flags.is_red = !self.flags.is_red;
        self.flags.is_dark = false;
        self.apply(markers);
        log::info!("[theme] red={} (dark cleared)", self.flags.is_red);
        self.flags
    }

    /// Project both markers from the flags; marker present iff flag set.
    pub fn apply(&self, markers: &mut impl ThemeMarkers) {
        markers.set_marker(ThemeMarker::Dark, self.flags.is_dark);
        markers.set_marker(ThemeMarker::Red, self.flags.is_red);
    }
}
