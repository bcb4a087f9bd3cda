//! Deferred work ordered by due time.
//!
//! Tasks due at the same instant run in scheduling order.

use super::activation::RevealGroup;
use super::navigator::Transition;

#[derive(Clone, Debug, PartialEq)]
pub enum Task {
    /// Ends the exiting window of a transition.
    Settle(Transition),
    Reveal {
        slide: usize,
        group: RevealGroup,
        index: usize,
    },
    StartChart { slide: usize },
}

impl Task {
    /// Slide whose entrance sequence the task belongs to. Settling is
    /// navigation bookkeeping and belongs to none.
    pub fn entrance_of(&self) -> Option<usize> {
        match self {
            Task::Settle(_) => None,
            Task::Reveal { slide, .. } | Task::StartChart { slide } => Some(*slide),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Scheduled {
    due: f64,
    seq: u64,
    task: Task,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    pending: Vec<Scheduled>,
    next_seq: u64,
}

impl Timeline {
    pub fn schedule(&mut self, due: f64, task: Task) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Scheduled { due, seq, task });
    }

    /// Removes and returns every task due at or before `now`, earliest first.
    pub fn drain_due(&mut self, now: f64) -> Vec<Task> {
        let mut due: Vec<Scheduled> = Vec::new();
        self.pending.retain(|s| {
            if s.due <= now {
                due.push(s.clone());
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.due.total_cmp(&b.due).then(a.seq.cmp(&b.seq)));
        due.into_iter().map(|s| s.task).collect()
    }

    pub fn cancel_where(&mut self, pred: impl Fn(&Task) -> bool) {
        self.pending.retain(|s| !pred(&s.task));
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reveal(index: usize) -> Task {
        Task::Reveal {
            slide: 1,
            group: RevealGroup::Cards,
            index,
        }
    }

    #[test]
    fn test_drain_returns_due_tasks_in_order() {
        let mut timeline = Timeline::default();
        timeline.schedule(300.0, reveal(2));
        timeline.schedule(100.0, reveal(0));
        timeline.schedule(900.0, reveal(9));
        timeline.schedule(100.0, reveal(1));
        assert!(timeline.drain_due(50.0).is_empty());
        assert_eq!(timeline.drain_due(300.0), vec![reveal(0), reveal(1), reveal(2)]);
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.drain_due(10_000.0), vec![reveal(9)]);
        assert!(timeline.is_empty());
    }

    #[test]
    fn test_cancel_by_slide() {
        let mut timeline = Timeline::default();
        timeline.schedule(100.0, reveal(0));
        timeline.schedule(100.0, Task::StartChart { slide: 2 });
        timeline.schedule(
            100.0,
            Task::Settle(Transition {
                from: 1,
                to: 2,
                settles_at: 100.0,
            }),
        );
        timeline.cancel_where(|t| t.entrance_of() == Some(1));
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline.drain_due(100.0)[0], Task::StartChart { slide: 2 });
    }
}
