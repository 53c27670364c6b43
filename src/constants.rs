/// Interaction tuning and page wiring constants.
///
/// Ids and class names must agree with the page markup and stylesheet; the
/// track URLs are the two fixed background loops.
// Cursor follower ease duration (seconds); matches the "1 time unit" feel
pub const FOLLOW_EASE_DURATION_SEC: f64 = 1.0;

// Background tracks, one per theme variant
pub const TRACK_URL_DEFAULT: &str = "https://thirtysixstudio.com/audio/world1.mp3";
pub const TRACK_URL_RED: &str = "https://thirtysixstudio.com/audio/world2.mp3";

// Element ids provided by the page markup
pub const CURSOR_ID: &str = "cursor";
pub const CURSOR_POINT_ID: &str = "cursor-point";
pub const CURSOR_HINT_ID: &str = "cursor-hint";
pub const TITLE_ID: &str = "title";
pub const THEME_BUTTON_ID: &str = "theme-btn";
pub const AUDIO_BUTTON_ID: &str = "audio-btn";
pub const AUDIO_ELEMENT_ID: &str = "bg-music";
pub const AUDIO_ICON_IDLE_ID: &str = "audio-icon-idle";
pub const AUDIO_ICON_PLAYING_ID: &str = "audio-icon-playing";

// Document-level theme markers ("dark" on <html>, "red" on <body>)
pub const DARK_MARKER_CLASS: &str = "dark";
pub const RED_MARKER_CLASS: &str = "red";

// Cursor presentation classes
pub const CURSOR_HOVER_CLASS: &str = "is-hovering";
pub const CURSOR_INVERT_CLASS: &str = "is-red";
pub const HIDDEN_CLASS: &str = "hidden";

// Text surfaces
pub const SOUND_HINT_TEXT: &str = "Click for sound";
pub const PLAY_TITLE: &str = "Play Sound";
pub const PAUSE_TITLE: &str = "Pause Sound";

// Render-layer notification
pub const CHANGE_EVENT_NAME: &str = "chrome:change";
