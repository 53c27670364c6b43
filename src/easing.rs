use glam::Vec2;

/// Decelerating cubic curve (`power3.out`): fast start, gentle landing.
#[inline]
pub fn power3_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Time-based interpolation of the cursor follower toward its latest target.
///
/// Retargeting restarts the curve from wherever the follower currently is, so
/// a new pointer sample always supersedes the in-flight target instead of
/// queueing behind it.
#[derive(Clone, Copy, Debug)]
pub struct FollowerTween {
    from: Vec2,
    to: Vec2,
    started_at: f64,
    duration: f64,
}

impl FollowerTween {
    pub fn new(origin: Vec2, duration_sec: f64) -> Self {
        Self {
            from: origin,
            to: origin,
            started_at: 0.0,
            duration: duration_sec.max(f64::EPSILON),
        }
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.to
    }

    #[inline]
    pub fn progress(&self, now: f64) -> f64 {
        ((now - self.started_at) / self.duration).clamp(0.0, 1.0)
    }

    pub fn sample(&self, now: f64) -> Vec2 {
        if self.is_settled(now) {
            return self.to;
        }
        let k = power3_out(self.progress(now)) as f32;
        self.from.lerp(self.to, k)
    }

    pub fn retarget(&mut self, target: Vec2, now: f64) {
        self.from = self.sample(now);
        self.to = target;
        self.started_at = now;
    }

    #[inline]
    pub fn is_settled(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}
