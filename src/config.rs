use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("element id for {0} is empty")]
    EmptyId(&'static str),
    #[error("track url for {0} is empty")]
    EmptyTrackUrl(&'static str),
    #[error("ease duration must be positive and finite, got {0}")]
    BadEaseDuration(f64),
}

/// Element ids the chrome binds to.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementIds {
    pub cursor: String,
    pub cursor_point: String,
    pub cursor_hint: String,
    pub title: String,
    pub theme_button: String,
    pub audio_button: String,
    pub audio_element: String,
    pub audio_icon_idle: String,
    pub audio_icon_playing: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            cursor: CURSOR_ID.into(),
            cursor_point: CURSOR_POINT_ID.into(),
            cursor_hint: CURSOR_HINT_ID.into(),
            title: TITLE_ID.into(),
            theme_button: THEME_BUTTON_ID.into(),
            audio_button: AUDIO_BUTTON_ID.into(),
            audio_element: AUDIO_ELEMENT_ID.into(),
            audio_icon_idle: AUDIO_ICON_IDLE_ID.into(),
            audio_icon_playing: AUDIO_ICON_PLAYING_ID.into(),
        }
    }
}

impl ElementIds {
    /// Elements the chrome cannot run without. Title, theme button, hint and
    /// icons are optional: when absent their feature is skipped.
    pub fn required(&self) -> [(&'static str, &str); 4] {
        [
            ("cursor", &self.cursor),
            ("cursor point", &self.cursor_point),
            ("audio button", &self.audio_button),
            ("audio element", &self.audio_element),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChromeConfig {
    pub ids: ElementIds,
    pub track_default: String,
    pub track_red: String,
    pub ease_duration_sec: f64,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            track_default: TRACK_URL_DEFAULT.into(),
            track_red: TRACK_URL_RED.into(),
            ease_duration_sec: FOLLOW_EASE_DURATION_SEC,
        }
    }
}

impl ChromeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ids = [
            ("cursor", &self.ids.cursor),
            ("cursor point", &self.ids.cursor_point),
            ("cursor hint", &self.ids.cursor_hint),
            ("title", &self.ids.title),
            ("theme button", &self.ids.theme_button),
            ("audio button", &self.ids.audio_button),
            ("audio element", &self.ids.audio_element),
            ("idle icon", &self.ids.audio_icon_idle),
            ("playing icon", &self.ids.audio_icon_playing),
        ];
        if let Some((name, _)) = ids.iter().find(|(_, id)| id.trim().is_empty()) {
            return Err(ConfigError::EmptyId(name));
        }
        if self.track_default.trim().is_empty() {
            return Err(ConfigError::EmptyTrackUrl("default theme"));
        }
        if self.track_red.trim().is_empty() {
            return Err(ConfigError::EmptyTrackUrl("red theme"));
        }
        if !(self.ease_duration_sec.is_finite() && self.ease_duration_sec > 0.0) {
            return Err(ConfigError::BadEaseDuration(self.ease_duration_sec));
        }
        Ok(())
    }
}
