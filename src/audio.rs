/// Playback surface of the looping background track.
///
/// Requests are fire-and-forget: `request_play` may be refused later by the
/// platform, so callers must re-read `is_paused` instead of trusting it.
pub trait MediaTrack {
    fn is_paused(&self) -> bool;
    fn request_play(&mut self);
    fn request_pause(&mut self);
    fn source(&self) -> Option<String>;
    fn set_source(&mut self, url: &str);
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrackSources {
    pub default: String,
    pub red: String,
}

impl TrackSources {
    #[inline]
    pub fn for_theme(&self, is_red: bool) -> &str {
        if is_red {
            &self.red
        } else {
            &self.default
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    /// No user gesture yet; the track stays paused.
    Locked,
    /// First gesture consumed; playback is user controlled from here on.
    Unlocked,
}

pub struct AudioGate {
    state: GateState,
    is_playing: bool,
    sources: TrackSources,
}

impl AudioGate {
    pub fn new(sources: TrackSources) -> Self {
        Self {
            state: GateState::Locked,
            is_playing: false,
            sources,
        }
    }

    #[inline]
    pub fn state(&self) -> GateState {
        self.state
    }

    #[inline]
    pub fn has_user_interacted(&self) -> bool {
        self.state == GateState::Unlocked
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Page click outside the audio control. Only the first one counts.
    /// Returns true if this click unlocked the gate.
    pub fn on_generic_click(&mut self, track: &mut impl MediaTrack) -> bool {
        if self.state == GateState::Unlocked {
            return false;
        }
        self.state = GateState::Unlocked;
        if track.is_paused() {
            track.request_play();
        }
        self.reconcile(track);
        log::info!("[audio] unlocked by page click, playing={}", self.is_playing);
        true
    }

    /// Audio button press. The caller stops propagation so the same gesture
    /// never reaches `on_generic_click`.
    pub fn on_audio_button_activate(&mut self, track: &mut impl MediaTrack) {
        if self.state == GateState::Locked {
            self.state = GateState::Unlocked;
            log::info!("[audio] unlocked by audio button");
        }
        if track.is_paused() {
            track.request_play();
        } else {
            track.request_pause();
        }
        self.reconcile(track);
        log::info!("[audio] toggled, playing={}", self.is_playing);
    }

    /// Mirror the element's real state. Returns true if `is_playing` changed.
    pub fn reconcile(&mut self, track: &impl MediaTrack) -> bool {
        let playing = !track.is_paused();
        let changed = playing != self.is_playing;
        self.is_playing = playing;
        changed
    }

    /// Point the track at the URL for the current theme. Mid-playback swaps are
    /// left to the media element.
    pub fn sync_source(&mut self, is_red: bool, track: &mut impl MediaTrack) -> bool {
        let wanted = self.sources.for_theme(is_red);
        if track.source().as_deref() == Some(wanted) {
            return false;
        }
        track.set_source(wanted);
        log::info!("[audio] source -> {}", wanted);
        true
    }
}
