//! Folds keyboard, click, touch and wheel input into navigation intents.
//!
//! Intents are advisory: the navigator may drop them, and nothing here queues
//! them for later.

use crate::config::Timing;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIntent {
    Next,
    Prev,
    GoTo(usize),
}

/// Raw input, already stripped of browser event types.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    Key(String),
    PrevButton,
    NextButton,
    Dot(usize),
    TouchStart { x: f64, y: f64 },
    TouchEnd { x: f64, y: f64 },
    Wheel { delta_y: f64 },
}

/// Navigation keys. The caller prevents the browser default exactly when
/// this returns `Some`.
pub fn intent_for_key(key: &str) -> Option<NavIntent> {
    match key {
        "ArrowRight" | "ArrowDown" | " " | "Space" | "Spacebar" => Some(NavIntent::Next),
        "ArrowLeft" | "ArrowUp" => Some(NavIntent::Prev),
        _ => None,
    }
}

/// Swipe direction from the displacement between touch start and end.
/// Leftward or upward travel moves forward.
pub fn classify_swipe(dx: f64, dy: f64, threshold: f64) -> Option<NavIntent> {
    let (abs_dx, abs_dy) = (dx.abs(), dy.abs());
    if abs_dx < threshold && abs_dy < threshold {
        return None; // tap
    }
    let delta = if abs_dx > abs_dy { dx } else { dy };
    if delta < -threshold {
        Some(NavIntent::Next)
    } else if delta > threshold {
        Some(NavIntent::Prev)
    } else {
        None
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SwipeTracker {
    start: Option<(f64, f64)>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
    }

    /// Consumes the start sample. An end without a start is ignored.
    pub fn end(&mut self, x: f64, y: f64, threshold: f64) -> Option<NavIntent> {
        let (sx, sy) = self.start.take()?;
        classify_swipe(x - sx, y - sy, threshold)
    }
}

/// Wheel debounce. Events inside the cool-down are dropped, not buffered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WheelGate {
    cooldown_until: Option<f64>,
}

impl WheelGate {
    pub fn accept(&mut self, delta_y: f64, now: f64, timing: &Timing) -> Option<NavIntent> {
        if self.cooldown_until.is_some_and(|until| now < until) {
            return None;
        }
        // any event outside the window opens a new one, even a small delta
        self.cooldown_until = Some(now + timing.wheel_cooldown_ms);
        if delta_y > timing.wheel_delta_threshold {
            Some(NavIntent::Next)
        } else if delta_y < -timing.wheel_delta_threshold {
            Some(NavIntent::Prev)
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputDispatcher {
    swipe: SwipeTracker,
    wheel: WheelGate,
}

impl InputDispatcher {
    pub fn dispatch(&mut self, event: &InputEvent, now: f64, timing: &Timing) -> Option<NavIntent> {
        match event {
            InputEvent::Key(key) => intent_for_key(key),
            InputEvent::PrevButton => Some(NavIntent::Prev),
            InputEvent::NextButton => Some(NavIntent::Next),
            InputEvent::Dot(i) => Some(NavIntent::GoTo(*i)),
            InputEvent::TouchStart { x, y } => {
                self.swipe.begin(*x, *y);
                None
            }
            InputEvent::TouchEnd { x, y } => self.swipe.end(*x, *y, timing.swipe_threshold_px),
            InputEvent::Wheel { delta_y } => self.wheel.accept(*delta_y, now, timing),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(intent_for_key("ArrowRight"), Some(NavIntent::Next));
        assert_eq!(intent_for_key(" "), Some(NavIntent::Next));
        assert_eq!(intent_for_key("ArrowDown"), Some(NavIntent::Next));
        assert_eq!(intent_for_key("ArrowLeft"), Some(NavIntent::Prev));
        assert_eq!(intent_for_key("ArrowUp"), Some(NavIntent::Prev));
        assert_eq!(intent_for_key("Enter"), None);
        assert_eq!(intent_for_key("a"), None);
    }

    #[test]
    fn test_swipe_classification() {
        assert_eq!(classify_swipe(-50.0, 0.0, 40.0), Some(NavIntent::Next));
        assert_eq!(classify_swipe(50.0, 0.0, 40.0), Some(NavIntent::Prev));
        assert_eq!(classify_swipe(10.0, 10.0, 40.0), None);
        assert_eq!(classify_swipe(5.0, -80.0, 40.0), Some(NavIntent::Next));
        assert_eq!(classify_swipe(-5.0, 80.0, 40.0), Some(NavIntent::Prev));
    }

    #[test]
    fn test_swipe_below_threshold_on_dominant_axis() {
        // vertical travel breaks the tap test but the dominant axis decides
        assert_eq!(classify_swipe(45.0, 45.0, 40.0), Some(NavIntent::Prev));
        assert_eq!(classify_swipe(-40.0, 10.0, 40.0), None);
    }

    #[test]
    fn test_tracker_needs_start() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.end(0.0, 0.0, 40.0), None);
        tracker.begin(200.0, 100.0);
        assert_eq!(tracker.end(120.0, 110.0, 40.0), Some(NavIntent::Next));
        assert_eq!(tracker.end(0.0, 110.0, 40.0), None);
    }

    #[test]
    fn test_wheel_debounce_within_cooldown() {
        let timing = Timing::default();
        let mut gate = WheelGate::default();
        let hits: Vec<_> = [0.0, 100.0]
            .iter()
            .filter_map(|&t| gate.accept(50.0, t, &timing))
            .collect();
        assert_eq!(hits, vec![NavIntent::Next]);
    }

    #[test]
    fn test_wheel_after_cooldown() {
        let timing = Timing::default();
        let mut gate = WheelGate::default();
        let hits: Vec<_> = [0.0, 1100.0]
            .iter()
            .filter_map(|&t| gate.accept(50.0, t, &timing))
            .collect();
        assert_eq!(hits, vec![NavIntent::Next, NavIntent::Next]);
    }

    #[test]
    fn test_small_wheel_delta_still_starts_cooldown() {
        let timing = Timing::default();
        let mut gate = WheelGate::default();
        assert_eq!(gate.accept(10.0, 0.0, &timing), None);
        assert_eq!(gate.accept(-60.0, 500.0, &timing), None);
        assert_eq!(gate.accept(-60.0, 1000.0, &timing), Some(NavIntent::Prev));
    }

    #[test]
    fn test_dispatch_clicks_and_touch() {
        let timing = Timing::default();
        let mut input = InputDispatcher::default();
        assert_eq!(input.dispatch(&InputEvent::Dot(4), 0.0, &timing), Some(NavIntent::GoTo(4)));
        assert_eq!(input.dispatch(&InputEvent::PrevButton, 0.0, &timing), Some(NavIntent::Prev));
        assert_eq!(input.dispatch(&InputEvent::TouchStart { x: 10.0, y: 300.0 }, 0.0, &timing), None);
        assert_eq!(
            input.dispatch(&InputEvent::TouchEnd { x: 12.0, y: 200.0 }, 0.0, &timing),
            Some(NavIntent::Next)
        );
    }
}
