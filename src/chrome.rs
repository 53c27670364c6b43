use crate::audio::{AudioGate, MediaTrack, TrackSources};
use crate::config::ChromeConfig;
use crate::pointer::{HoverTarget, PointerSample, PointerTracker};
use crate::theme::{ThemeController, ThemeFlags, ThemeMarkers};
use glam::Vec2;

/// Cursor dot colour. White sits on the red palette, accent everywhere else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorColor {
    White,
    Accent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorLook {
    pub enlarged: bool,
    pub icon_visible: bool,
    pub color: CursorColor,
    pub hint_visible: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioLabel {
    Play,
    Pause,
}

impl AudioLabel {
    #[inline]
    pub fn for_playing(playing: bool) -> Self {
        if playing {
            AudioLabel::Pause
        } else {
            AudioLabel::Play
        }
    }

    #[inline]
    pub fn title(self) -> &'static str {
        match self {
            AudioLabel::Play => crate::constants::PLAY_TITLE,
            AudioLabel::Pause => crate::constants::PAUSE_TITLE,
        }
    }
}

/// Everything the render layer needs for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChromeSnapshot {
    pub theme: ThemeFlags,
    pub follower: Vec2,
    pub hovering: bool,
    pub playing: bool,
    pub interacted: bool,
}

impl ChromeSnapshot {
    pub fn cursor(&self) -> CursorLook {
        CursorLook {
            enlarged: self.hovering,
            icon_visible: self.hovering,
            color: if self.theme.is_red {
                CursorColor::White
            } else {
                CursorColor::Accent
            },
            hint_visible: !self.interacted && !self.hovering,
        }
    }

    #[inline]
    pub fn audio_label(&self) -> AudioLabel {
        AudioLabel::for_playing(self.playing)
    }
}

/// Which parts of the view must be rewritten between two snapshots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewDelta {
    pub position: bool,
    pub cursor: bool,
    pub audio: bool,
    pub theme: bool,
}

impl ViewDelta {
    pub fn between(prev: Option<&ChromeSnapshot>, next: &ChromeSnapshot) -> Self {
        match prev {
            None => Self {
                position: true,
                cursor: true,
                audio: true,
                theme: true,
            },
            Some(p) => Self {
                position: p.follower != next.follower,
                cursor: p.cursor() != next.cursor(),
                audio: p.audio_label() != next.audio_label(),
                theme: p.theme != next.theme,
            },
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.position || self.cursor || self.audio || self.theme)
    }

    /// Anything beyond follower motion changed.
    #[inline]
    pub fn is_state_change(&self) -> bool {
        self.cursor || self.audio || self.theme
    }
}

/// Single owner of theme, pointer and audio state for the page session.
pub struct Chrome {
    theme: ThemeController,
    pointer: PointerTracker,
    audio: AudioGate,
}

impl Chrome {
    pub fn new(config: &ChromeConfig) -> Self {
        Self {
            theme: ThemeController::new(ThemeFlags::default()),
            pointer: PointerTracker::new(config.ease_duration_sec),
            audio: AudioGate::new(TrackSources {
                default: config.track_default.clone(),
                red: config.track_red.clone(),
            }),
        }
    }

    #[inline]
    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    #[inline]
    pub fn audio(&self) -> &AudioGate {
        &self.audio
    }

    /// Mount-time sync: project markers, register the hover band, pick the
    /// track and re-read it. Runs again on every remount of the same session.
    pub fn attach(
        &mut self,
        hover_target: Option<HoverTarget>,
        markers: &mut impl ThemeMarkers,
        track: &mut impl MediaTrack,
    ) {
        self.pointer.set_hover_target(hover_target);
        self.theme.apply(markers);
        self.audio.sync_source(self.theme.flags().is_red, track);
        self.audio.reconcile(track);
    }

    pub fn on_pointer_move(&mut self, sample: PointerSample, now: f64) -> bool {
        self.pointer.on_pointer_move(sample, now)
    }

    pub fn on_generic_click(&mut self, track: &mut impl MediaTrack) -> bool {
        self.audio.on_generic_click(track)
    }

    pub fn on_audio_button(&mut self, track: &mut impl MediaTrack) {
        self.audio.on_audio_button_activate(track);
    }

    pub fn reconcile_audio(&mut self, track: &impl MediaTrack) -> bool {
        self.audio.reconcile(track)
    }

    pub fn toggle_dark(&mut self, markers: &mut impl ThemeMarkers) -> ThemeFlags {
        self.theme.toggle_dark(markers)
    }

    /// Red also selects the matching background track.
    pub fn toggle_red(
        &mut self,
        markers: &mut impl ThemeMarkers,
        track: &mut impl MediaTrack,
    ) -> ThemeFlags {
        let flags = self.theme.toggle_red(markers);
        self.audio.sync_source(flags.is_red, track);
        flags
    }

    /// The follower has landed and `shown` already displays where it landed,
    /// so another frame would change nothing.
    pub fn follower_at_rest(&self, now: f64, shown: Option<Vec2>) -> bool {
        self.pointer.is_settled(now) && shown == Some(self.pointer.follower_target())
    }

    pub fn snapshot(&self, now: f64) -> ChromeSnapshot {
        ChromeSnapshot {
            theme: self.theme.flags(),
            follower: self.pointer.follower_at(now),
            hovering: self.pointer.is_hovering(),
            playing: self.audio.is_playing(),
            interacted: self.audio.has_user_interacted(),
        }
    }
}
