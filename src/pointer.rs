use crate::easing::FollowerTween;
use glam::Vec2;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("hover target element is not in the document")]
    Missing,
    #[error("hover target geometry is not usable (top={top}, height={height})")]
    Degenerate { top: f64, height: f64 },
}

/// Vertical band in document coordinates, measured once at mount.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverTarget {
    pub top_offset: f64,
    pub height: f64,
}

impl HoverTarget {
    pub fn from_layout(top_offset: f64, height: f64) -> Result<Self, LayoutError> {
        if !top_offset.is_finite() || !height.is_finite() || height < 0.0 {
            return Err(LayoutError::Degenerate {
                top: top_offset,
                height,
            });
        }
        Ok(Self { top_offset, height })
    }

    #[inline]
    pub fn contains(&self, document_y: f64) -> bool {
        self.top_offset <= document_y && document_y <= self.top_offset + self.height
    }
}

/// One pointer-move reading plus the layout it was taken against.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerSample {
    /// Viewport-relative pointer position.
    pub client: Vec2,
    /// Window scroll offsets at the time of the event.
    pub scroll: Vec2,
    /// Current rendered size of the follower dot.
    pub follower_size: Vec2,
}

impl PointerSample {
    #[inline]
    pub fn document_y(&self) -> f64 {
        self.client.y as f64 + self.scroll.y as f64
    }

    /// Where the follower should end up: centred on the pointer in page space.
    #[inline]
    pub fn follower_target(&self) -> Vec2 {
        self.client + self.scroll - self.follower_size * 0.5
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub last_x: f32,
    pub last_y: f32,
    pub is_over_hover_target: bool,
}

pub struct PointerTracker {
    state: PointerState,
    hover_target: Option<HoverTarget>,
    follower: FollowerTween,
}

impl PointerTracker {
    pub fn new(ease_duration_sec: f64) -> Self {
        Self {
            state: PointerState::default(),
            hover_target: None,
            follower: FollowerTween::new(Vec2::ZERO, ease_duration_sec),
        }
    }

    /// `None` means geometry was unavailable; hover then never matches.
    pub fn set_hover_target(&mut self, target: Option<HoverTarget>) {
        self.hover_target = target;
    }

    #[inline]
    pub fn state(&self) -> PointerState {
        self.state
    }

    #[inline]
    pub fn is_hovering(&self) -> bool {
        self.state.is_over_hover_target
    }

    /// Record a sample, re-evaluate hover, and retarget the follower.
    /// Returns true when hover membership changed.
    pub fn on_pointer_move(&mut self, sample: PointerSample, now: f64) -> bool {
        let was_hovering = self.state.is_over_hover_target;
        self.state.last_x = sample.client.x;
        self.state.last_y = sample.client.y;
        self.state.is_over_hover_target = self
            .hover_target
            .map(|t| t.contains(sample.document_y()))
            .unwrap_or(false);
        self.follower.retarget(sample.follower_target(), now);
        was_hovering != self.state.is_over_hover_target
    }

    #[inline]
    pub fn follower_at(&self, now: f64) -> Vec2 {
        self.follower.sample(now)
    }

    #[inline]
    pub fn follower_target(&self) -> Vec2 {
        self.follower.target()
    }

    #[inline]
    pub fn is_settled(&self, now: f64) -> bool {
        self.follower.is_settled(now)
    }
}
