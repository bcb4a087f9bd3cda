//! Entrance sequences replayed each time a slide becomes active.

use super::timeline::{Task, Timeline};
use crate::config::Timing;
use crate::model::SlideSpec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealGroup {
    Cards,
    DeploySteps,
    StepCards,
    Bullets,
    ScoreBars,
}

impl RevealGroup {
    pub const ALL: [RevealGroup; 5] = [
        RevealGroup::Cards,
        RevealGroup::DeploySteps,
        RevealGroup::StepCards,
        RevealGroup::Bullets,
        RevealGroup::ScoreBars,
    ];

    fn slot(self) -> usize {
        match self {
            RevealGroup::Cards => 0,
            RevealGroup::DeploySteps => 1,
            RevealGroup::StepCards => 2,
            RevealGroup::Bullets => 3,
            RevealGroup::ScoreBars => 4,
        }
    }

    /// Transform applied while an item waits for its reveal.
    pub fn hidden_transform(self) -> &'static str {
        match self {
            RevealGroup::Cards => "translateY(20px) scale(0.95)",
            RevealGroup::DeploySteps => "translateY(20px)",
            RevealGroup::StepCards => "translateX(-15px)",
            RevealGroup::Bullets => "translateX(-10px)",
            RevealGroup::ScoreBars => "none",
        }
    }

    pub fn shown_transform(self) -> &'static str {
        match self {
            RevealGroup::Cards => "translateY(0) scale(1)",
            RevealGroup::DeploySteps => "translateY(0)",
            RevealGroup::StepCards => "translateX(0)",
            RevealGroup::Bullets => "translateX(0)",
            RevealGroup::ScoreBars => "none",
        }
    }

    /// Inline style for an opacity/transform reveal. Hidden items have
    /// transitions disabled so a replay snaps back before animating again.
    pub fn style(self, revealed: bool, timing: &Timing) -> String {
        if revealed {
            let secs = timing.stagger(self).duration_ms / 1000.0;
            format!(
                "opacity:1; transform:{}; transition:opacity {secs}s ease, transform {secs}s ease;",
                self.shown_transform()
            )
        } else {
            format!("opacity:0; transform:{}; transition:none;", self.hidden_transform())
        }
    }
}

/// How many items of each reveal group a slide carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlideContent {
    counts: [usize; 5],
    pub has_chart: bool,
}

impl SlideContent {
    pub fn of(slide: &SlideSpec) -> Self {
        let bars = slide.evaluation.as_ref().map_or(0, |e| e.bars.len());
        Self {
            counts: [
                slide.cards.len(),
                slide.deploy_steps.len(),
                slide.step_cards.len(),
                slide.bullets.len(),
                bars,
            ],
            has_chart: slide.evaluation.is_some(),
        }
    }

    #[cfg(test)]
    pub fn with_count(mut self, group: RevealGroup, count: usize) -> Self {
        self.counts[group.slot()] = count;
        self
    }

    pub fn with_chart(mut self, has_chart: bool) -> Self {
        self.has_chart = has_chart;
        self
    }

    pub fn count(&self, group: RevealGroup) -> usize {
        self.counts[group.slot()]
    }
}

/// Revealed flags of every item on one slide.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SlideReveal {
    revealed: [Vec<bool>; 5],
}

impl SlideReveal {
    pub fn new(content: &SlideContent) -> Self {
        let mut reveal = Self::default();
        for group in RevealGroup::ALL {
            reveal.revealed[group.slot()] = vec![false; content.count(group)];
        }
        reveal
    }

    pub fn is_revealed(&self, group: RevealGroup, index: usize) -> bool {
        self.revealed[group.slot()]
            .get(index)
            .copied()
            .unwrap_or(false)
    }

    pub fn hide_all(&mut self) {
        for flags in &mut self.revealed {
            flags.iter_mut().for_each(|f| *f = false);
        }
    }

    /// Returns whether the flag changed.
    pub fn reveal(&mut self, group: RevealGroup, index: usize) -> bool {
        match self.revealed[group.slot()].get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }
}

/// Schedules the entrance sequence of `slide` relative to `now`, dropping any
/// part of an earlier sequence for the same slide that has not run yet.
pub fn plan_entrance(slide: usize, content: &SlideContent, timing: &Timing, now: f64, timeline: &mut Timeline) {
    timeline.cancel_where(|t| t.entrance_of() == Some(slide));
    for group in RevealGroup::ALL {
        let stagger = timing.stagger(group);
        for index in 0..content.count(group) {
            timeline.schedule(now + stagger.delay_for(index), Task::Reveal { slide, group, index });
        }
    }
    if content.has_chart {
        timeline.schedule(now + timing.chart_delay_ms, Task::StartChart { slide });
    }
}
