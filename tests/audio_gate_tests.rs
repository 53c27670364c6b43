// Host-side tests for the audio gate state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod audio {
    include!("../src/audio.rs");
}

use audio::*;

const DEFAULT_URL: &str = "https://example.test/world1.mp3";
const RED_URL: &str = "https://example.test/world2.mp3";

struct FakeTrack {
    paused: bool,
    honors_play: bool,
    plays: usize,
    pauses: usize,
    src: Option<String>,
    source_sets: usize,
}

impl FakeTrack {
    fn new() -> Self {
        Self {
            paused: true,
            honors_play: true,
            plays: 0,
            pauses: 0,
            src: None,
            source_sets: 0,
        }
    }

    fn blocking() -> Self {
        Self {
            honors_play: false,
            ..Self::new()
        }
    }
}

impl MediaTrack for FakeTrack {
    fn is_paused(&self) -> bool {
        self.paused
    }
    fn request_play(&mut self) {
        self.plays += 1;
        if self.honors_play {
            self.paused = false;
        }
    }
    fn request_pause(&mut self) {
        self.pauses += 1;
        self.paused = true;
    }
    fn source(&self) -> Option<String> {
        self.src.clone()
    }
    fn set_source(&mut self, url: &str) {
        self.src = Some(url.to_string());
        self.source_sets += 1;
    }
}

fn gate() -> AudioGate {
    AudioGate::new(TrackSources {
        default: DEFAULT_URL.into(),
        red: RED_URL.into(),
    })
}

#[test]
fn starts_locked_and_silent() {
    let g = gate();
    assert_eq!(g.state(), GateState::Locked);
    assert!(!g.has_user_interacted());
    assert!(!g.is_playing());
}

#[test]
fn first_page_click_unlocks_and_plays() {
    let mut g = gate();
    let mut track = FakeTrack::new();
    assert!(g.on_generic_click(&mut track));
    assert_eq!(g.state(), GateState::Unlocked);
    assert!(g.is_playing());
    assert_eq!(track.plays, 1);
}

#[test]
fn later_page_clicks_are_noops() {
    let mut g = gate();
    let mut track = FakeTrack::new();
    g.on_generic_click(&mut track);
    // user pauses via the button, then clicks the page again
    g.on_audio_button_activate(&mut track);
    assert!(!g.is_playing());
    for _ in 0..3 {
        assert!(!g.on_generic_click(&mut track));
    }
    assert!(!g.is_playing());
    assert_eq!(track.plays, 1);
}

#[test]
fn audio_button_unlocks_without_page_click() {
    let mut g = gate();
    let mut track = FakeTrack::new();
    g.on_audio_button_activate(&mut track);
    assert_eq!(g.state(), GateState::Unlocked);
    assert!(g.is_playing());
    // the gate is already consumed; a page click does nothing
    assert!(!g.on_generic_click(&mut track));
    assert_eq!(track.plays, 1);
}

#[test]
fn button_toggle_matches_prior_paused_state() {
    let mut g = gate();
    let mut track = FakeTrack::new();
    for _ in 0..6 {
        let was_paused = track.is_paused();
        g.on_audio_button_activate(&mut track);
        assert_eq!(g.is_playing(), was_paused);
        assert_eq!(g.is_playing(), !track.is_paused());
    }
}

#[test]
fn playing_track_pauses_on_button() {
    let mut g = gate();
    let mut track = FakeTrack::new();
    g.on_generic_click(&mut track);
    assert!(g.is_playing());
    g.on_audio_button_activate(&mut track);
    assert!(!g.is_playing());
    assert!(track.is_paused());
    assert_eq!(track.pauses, 1);
}

#[test]
fn blocked_playback_is_not_reported_as_playing() {
    let mut g = gate();
    let mut track = FakeTrack::blocking();
    g.on_generic_click(&mut track);
    assert_eq!(track.plays, 1);
    assert!(g.has_user_interacted());
    assert!(!g.is_playing());

    g.on_audio_button_activate(&mut track);
    assert_eq!(track.plays, 2);
    assert!(!g.is_playing());
}

#[test]
fn button_reads_element_not_cached_flag() {
    let mut g = gate();
    let mut track = FakeTrack::new();
    g.on_generic_click(&mut track);
    assert!(g.is_playing());

    // paused behind the gate's back
    track.paused = true;
    g.on_audio_button_activate(&mut track);
    assert!(g.is_playing());
    assert_eq!(track.plays, 2);
    assert_eq!(track.pauses, 0);
}

#[test]
fn reconcile_reports_changes_only() {
    let mut g = gate();
    let mut track = FakeTrack::new();
    assert!(!g.reconcile(&track));
    track.paused = false;
    assert!(g.reconcile(&track));
    assert!(g.is_playing());
    assert!(!g.reconcile(&track));
}

#[test]
fn source_follows_theme_and_skips_redundant_writes() {
    let mut g = gate();
    let mut track = FakeTrack::new();
    assert!(g.sync_source(false, &mut track));
    assert_eq!(track.src.as_deref(), Some(DEFAULT_URL));
    assert!(!g.sync_source(false, &mut track));
    assert!(g.sync_source(true, &mut track));
    assert_eq!(track.src.as_deref(), Some(RED_URL));
    assert_eq!(track.source_sets, 2);
}

#[test]
fn sources_for_theme() {
    let s = TrackSources {
        default: DEFAULT_URL.into(),
        red: RED_URL.into(),
    };
    assert_eq!(s.for_theme(false), DEFAULT_URL);
    assert_eq!(s.for_theme(true), RED_URL);
}
