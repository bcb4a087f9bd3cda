/// Cubic ease-out: fast start, gentle landing.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// One reveal run of a chart, sampled with animation-frame timestamps (ms).
#[derive(Clone, Debug, PartialEq)]
pub struct ChartAnimator {
    /// Taken from the first sampled frame, not from scheduling time.
    start: Option<f64>,
    duration_ms: f64,
    finished: bool,
}

impl ChartAnimator {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            start: None,
            duration_ms,
            finished: false,
        }
    }

    /// Eased progress for the frame at `timestamp`.
    pub fn sample(&mut self, timestamp: f64) -> f64 {
        let start = *self.start.get_or_insert(timestamp);
        let t = if self.duration_ms <= 0.0 {
            1.0
        } else {
            ((timestamp - start) / self.duration_ms).clamp(0.0, 1.0)
        };
        if t >= 1.0 {
            self.finished = true;
        }
        ease_out_cubic(t)
    }

    /// True once a frame at or past the full duration was sampled.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
