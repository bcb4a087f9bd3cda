//! Ties navigation, input, entrance sequences and the evaluation chart
//! together. Input handlers call [`Presenter::handle_input`]; one
//! animation-frame loop calls [`Presenter::tick`], the only place queued work
//! runs.

use super::activation::{SlideContent, SlideReveal, plan_entrance};
use super::input::{InputDispatcher, InputEvent, NavIntent};
use super::navigator::{Navigator, Transition};
use super::timeline::{Task, Timeline};
use crate::chart::ChartAnimator;
use crate::config::Timing;
use crate::error::Result;
use crate::model::DeckConfig;

/// What the view has to do after a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameUpdate {
    /// Slide classes, chrome or reveal styles changed.
    pub rerender: bool,
    /// Repaint the evaluation chart at this progress.
    pub chart_progress: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct ChartState {
    slide: Option<usize>,
    run: Option<ChartAnimator>,
    progress: f64,
    dirty: bool,
}

#[derive(Clone, Debug)]
pub struct Presenter {
    timing: Timing,
    navigator: Navigator,
    input: InputDispatcher,
    timeline: Timeline,
    contents: Vec<SlideContent>,
    reveals: Vec<SlideReveal>,
    chart: ChartState,
}

impl Presenter {
    pub fn new(deck: &DeckConfig, now: f64) -> Result<Self> {
        let timing = deck.timing;
        let navigator = Navigator::new(deck.slides.len(), timing.transition_ms)?;
        let chart_slide = deck.evaluation_slide();
        let contents: Vec<SlideContent> = deck
            .slides
            .iter()
            .enumerate()
            .map(|(i, s)| SlideContent::of(s).with_chart(chart_slide == Some(i)))
            .collect();
        let reveals = contents.iter().map(SlideReveal::new).collect();
        let mut presenter = Self {
            timing,
            navigator,
            input: InputDispatcher::default(),
            timeline: Timeline::default(),
            contents,
            reveals,
            chart: ChartState {
                slide: chart_slide,
                dirty: chart_slide.is_some(),
                ..ChartState::default()
            },
        };
        presenter.on_slide_activated(0, now);
        Ok(presenter)
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn reveal(&self, slide: usize) -> Option<&SlideReveal> {
        self.reveals.get(slide)
    }

    #[cfg(test)]
    pub fn chart_progress(&self) -> f64 {
        self.chart.progress
    }

    #[cfg(test)]
    pub fn chart_running(&self) -> bool {
        self.chart.run.is_some()
    }

    /// Returns whether the event moved the deck.
    pub fn handle_input(&mut self, event: &InputEvent, now: f64) -> bool {
        match self.input.dispatch(event, now, &self.timing) {
            Some(intent) => self.navigate(intent, now),
            None => false,
        }
    }

    pub fn navigate(&mut self, intent: NavIntent, now: f64) -> bool {
        let transition = match intent {
            NavIntent::Next => self.navigator.go_next(now),
            NavIntent::Prev => self.navigator.go_prev(now),
            NavIntent::GoTo(target) => self.navigator.go_to(target, now),
        };
        let Some(transition) = transition else {
            return false;
        };
        log::debug!("slide {} -> {}", transition.from, transition.to);
        self.timeline.schedule(transition.settles_at, Task::Settle(transition));
        self.on_slide_left(&transition);
        self.on_slide_activated(transition.to, now);
        true
    }

    fn on_slide_left(&mut self, transition: &Transition) {
        if self.chart.slide == Some(transition.from) {
            let slide = transition.from;
            self.timeline
                .cancel_where(|t| matches!(t, Task::StartChart { slide: s } if *s == slide));
            if self.chart.run.take().is_some() {
                log::debug!("chart animation cancelled on slide {slide}");
            }
        }
    }

    /// Runs when `slide` becomes the active slide; restarts its entrance
    /// sequence from the beginning.
    fn on_slide_activated(&mut self, slide: usize, now: f64) {
        let Some(content) = self.contents.get(slide) else {
            return;
        };
        if let Some(reveal) = self.reveals.get_mut(slide) {
            reveal.hide_all();
        }
        if content.has_chart {
            self.chart.run = None;
            self.chart.progress = 0.0;
            self.chart.dirty = true;
        }
        plan_entrance(slide, content, &self.timing, now, &mut self.timeline);
    }

    /// Runs every task due at `now` and advances the chart animation.
    pub fn tick(&mut self, now: f64) -> FrameUpdate {
        let mut rerender = false;
        for task in self.timeline.drain_due(now) {
            match task {
                Task::Settle(transition) => {
                    self.navigator.settle(&transition);
                    rerender = true;
                }
                Task::Reveal { slide, group, index } => {
                    if let Some(reveal) = self.reveals.get_mut(slide) {
                        rerender |= reveal.reveal(group, index);
                    }
                }
                Task::StartChart { slide } => {
                    if self.navigator.current() == slide {
                        self.chart.run = Some(ChartAnimator::new(self.timing.chart_duration_ms));
                    }
                }
            }
        }
        if let Some(run) = self.chart.run.as_mut() {
            self.chart.progress = run.sample(now);
            self.chart.dirty = true;
            if run.is_finished() {
                self.chart.run = None;
            }
        }
        let chart_progress = std::mem::take(&mut self.chart.dirty).then_some(self.chart.progress);
        FrameUpdate {
            rerender,
            chart_progress,
        }
    }
}
