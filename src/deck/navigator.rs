//! Slide navigation state machine.
//!
//! `Idle` while `now >= locked_until`, `Transitioning` otherwise. The lock is a
//! deadline rather than a flag somebody has to clear, so a lost settle task can
//! never freeze navigation.

use crate::error::{DeckError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideStatus {
    Idle,
    Active,
    Exiting,
}

impl SlideStatus {
    pub fn class(self) -> &'static str {
        match self {
            SlideStatus::Idle => "slide",
            SlideStatus::Active => "slide active",
            SlideStatus::Exiting => "slide exiting",
        }
    }
}

/// A successful switch of the active slide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    /// When the outgoing slide stops being `Exiting` and the lock lifts.
    pub settles_at: f64,
}

/// Progress bar, counter, arrow and dot state for the current slide.
#[derive(Clone, Debug, PartialEq)]
pub struct Chrome {
    pub progress_pct: f64,
    pub counter: String,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub active_dot: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Navigator {
    current: usize,
    total: usize,
    locked_until: f64,
    exiting: Option<usize>,
    transition_ms: f64,
}

impl Navigator {
    pub fn new(total: usize, transition_ms: f64) -> Result<Self> {
        if total == 0 {
            return Err(DeckError::EmptyDeck);
        }
        Ok(Self {
            current: 0,
            total,
            locked_until: f64::NEG_INFINITY,
            exiting: None,
            transition_ms,
        })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_animating(&self, now: f64) -> bool {
        now < self.locked_until
    }

    /// Switches to `target`. Returns `None` without touching any state when
    /// a transition is running, `target` is already current, or out of range.
    pub fn go_to(&mut self, target: usize, now: f64) -> Option<Transition> {
        if self.is_animating(now) || target == self.current || target >= self.total {
            return None;
        }
        let from = self.current;
        self.exiting = Some(from);
        self.current = target;
        self.locked_until = now + self.transition_ms;
        Some(Transition {
            from,
            to: target,
            settles_at: self.locked_until,
        })
    }

    pub fn go_next(&mut self, now: f64) -> Option<Transition> {
        self.go_to(self.current + 1, now)
    }

    pub fn go_prev(&mut self, now: f64) -> Option<Transition> {
        let target = self.current.checked_sub(1)?;
        self.go_to(target, now)
    }

    /// Ends the exiting window of `transition`. A stale transition whose
    /// outgoing slide was already replaced leaves state untouched.
    pub fn settle(&mut self, transition: &Transition) {
        if self.exiting == Some(transition.from) && self.current == transition.to {
            self.exiting = None;
        }
    }

    pub fn status(&self, index: usize) -> SlideStatus {
        if index == self.current {
            SlideStatus::Active
        } else if self.exiting == Some(index) {
            SlideStatus::Exiting
        } else {
            SlideStatus::Idle
        }
    }

    pub fn chrome(&self) -> Chrome {
        Chrome {
            progress_pct: (self.current + 1) as f64 / self.total as f64 * 100.0,
            counter: format!("{:02} / {:02}", self.current + 1, self.total),
            prev_disabled: self.current == 0,
            next_disabled: self.current == self.total - 1,
            active_dot: self.current,
        }
    }
}
