//! Timing and threshold settings for navigation, input and reveal animations.
//! Every field has a default so a deck document may omit the whole block.

use serde::{Deserialize, Serialize};

use crate::deck::activation::RevealGroup;

/// Staggered reveal schedule for one group of slide content.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stagger {
    /// Delay before the first item, measured from slide activation.
    pub base_ms: f64,
    /// Extra delay per item index.
    pub stride_ms: f64,
    /// CSS transition length once an item is revealed.
    pub duration_ms: f64,
}

impl Stagger {
    pub const fn new(base_ms: f64, stride_ms: f64, duration_ms: f64) -> Self {
        Self { base_ms, stride_ms, duration_ms }
    }

    pub fn delay_for(&self, index: usize) -> f64 {
        self.base_ms + index as f64 * self.stride_ms
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Length of the navigation lock and of the exiting-slide window.
    pub transition_ms: f64,
    /// Minimum travel on the dominant axis for a touch gesture to count as a swipe.
    pub swipe_threshold_px: f64,
    /// Minimum |deltaY| for a wheel event to navigate.
    pub wheel_delta_threshold: f64,
    /// Window after a wheel event during which further wheel events are dropped.
    pub wheel_cooldown_ms: f64,
    pub chart_duration_ms: f64,
    /// Delay between evaluation slide activation and the chart animation start.
    pub chart_delay_ms: f64,
    pub cards: Stagger,
    pub deploy_steps: Stagger,
    pub step_cards: Stagger,
    pub bullets: Stagger,
    pub score_bars: Stagger,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            transition_ms: 750.0,
            swipe_threshold_px: 40.0,
            wheel_delta_threshold: 30.0,
            wheel_cooldown_ms: 1000.0,
            chart_duration_ms: 1200.0,
            chart_delay_ms: 300.0,
            cards: Stagger::new(200.0, 120.0, 500.0),
            deploy_steps: Stagger::new(300.0, 150.0, 450.0),
            step_cards: Stagger::new(200.0, 130.0, 500.0),
            bullets: Stagger::new(400.0, 120.0, 400.0),
            score_bars: Stagger::new(600.0, 150.0, 800.0),
        }
    }
}

impl Timing {
    pub fn stagger(&self, group: RevealGroup) -> Stagger {
        match group {
            RevealGroup::Cards => self.cards,
            RevealGroup::DeploySteps => self.deploy_steps,
            RevealGroup::StepCards => self.step_cards,
            RevealGroup::Bullets => self.bullets,
            RevealGroup::ScoreBars => self.score_bars,
        }
    }
}
