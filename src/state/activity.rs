//! Simulated assistant activity indicator.
//!
//! Models the multi-stage "thinking" display: a fixed set of tasks that
//! complete one at a time in random order while a reply is being prepared.
//! The indicator never finishes on its own - the last task is intentionally
//! held pending until the reply dispatcher forces completion, so the UI can
//! never show "all done" before the reply exists.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Display labels for the simulated work stages, in render order.
pub const TASK_LABELS: [&str; 3] = ["Searching", "Analyzing", "Summarizing"];

/// Completion state of one activity task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Done,
}

/// One animated stage of the activity indicator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityTask {
    pub label: String,
    pub status: TaskStatus,
}

/// Pick which pending task completes on this tick.
///
/// Pure selection logic, kept separate from the timer glue so randomness can
/// be tested with a seeded generator. Returns a uniformly chosen element of
/// `pending`, or `None` when one or fewer tasks remain (the last task stays
/// pending until the reply arrives).
pub fn pick_next_completion(pending: &[usize], rng: &mut impl Rng) -> Option<usize> {
    if pending.len() <= 1 {
        return None;
    }
    Some(pending[rng.gen_range(0..pending.len())])
}

/// The fixed task set plus its transition rules.
///
/// Idle display state is all-done with no timer running; `begin` flips every
/// task back to pending when a reply cycle starts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityIndicator {
    tasks: Vec<ActivityTask>,
}

impl Default for ActivityIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityIndicator {
    /// Start in the idle display state: every task done.
    pub fn new() -> Self {
        Self {
            tasks: TASK_LABELS
                .iter()
                .map(|label| ActivityTask {
                    label: (*label).to_string(),
                    status: TaskStatus::Done,
                })
                .collect(),
        }
    }

    /// Enter the active state: reset every task to pending.
    pub fn begin(&mut self) {
        for task in &mut self.tasks {
            task.status = TaskStatus::Pending;
        }
    }

    /// Advance the animation by one tick, completing one randomly chosen
    /// pending task. No-op (returns `None`) when one or fewer remain pending.
    pub fn tick(&mut self, rng: &mut impl Rng) -> Option<usize> {
        let pending: Vec<usize> = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.status == TaskStatus::Pending)
            .map(|(i, _)| i)
            .collect();

        let completed = pick_next_completion(&pending, rng)?;
        self.tasks[completed].status = TaskStatus::Done;
        Some(completed)
    }

    /// Force every task done. Called when the reply is delivered (or the
    /// conversation is reset), regardless of how far the animation got.
    pub fn finish(&mut self) {
        for task in &mut self.tasks {
            task.status = TaskStatus::Done;
        }
    }

    /// Current task list, in render order.
    pub fn tasks(&self) -> &[ActivityTask] {
        &self.tasks
    }

    /// Number of tasks still pending.
    pub fn pending_count(&self) -> usize {
        self.tasks
            .iter()
            .filter(|task| task.status == TaskStatus::Pending)
            .count()
    }

    /// Whether the indicator shows the idle (all-done) state.
    pub fn is_idle(&self) -> bool {
        self.pending_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_is_idle() {
        let indicator = ActivityIndicator::new();
        assert!(indicator.is_idle());
        assert_eq!(indicator.tasks().len(), TASK_LABELS.len());
        let labels: Vec<_> = indicator.tasks().iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, TASK_LABELS);
    }

    #[test]
    fn test_begin_resets_all_to_pending() {
        let mut indicator = ActivityIndicator::new();
        indicator.begin();
        assert_eq!(indicator.pending_count(), TASK_LABELS.len());
        assert!(!indicator.is_idle());
    }

    #[test]
    fn test_ticks_leave_last_task_pending() {
        let mut indicator = ActivityIndicator::new();
        let mut rng = StdRng::seed_from_u64(42);
        indicator.begin();

        let n = TASK_LABELS.len();
        for expected_remaining in (2..=n).rev() {
            assert_eq!(indicator.pending_count(), expected_remaining);
            assert!(indicator.tick(&mut rng).is_some());
        }

        // Exactly one task left; further ticks are no-ops.
        assert_eq!(indicator.pending_count(), 1);
        assert!(indicator.tick(&mut rng).is_none());
        assert!(indicator.tick(&mut rng).is_none());
        assert_eq!(indicator.pending_count(), 1);
    }

    #[test]
    fn test_finish_forces_all_done_at_any_point() {
        let mut indicator = ActivityIndicator::new();
        let mut rng = StdRng::seed_from_u64(7);

        indicator.begin();
        indicator.finish();
        assert!(indicator.is_idle());

        indicator.begin();
        indicator.tick(&mut rng);
        indicator.finish();
        assert!(indicator.is_idle());
    }

    #[test]
    fn test_tick_completes_a_previously_pending_task() {
        let mut indicator = ActivityIndicator::new();
        let mut rng = StdRng::seed_from_u64(3);
        indicator.begin();

        let completed = indicator.tick(&mut rng).unwrap();
        assert!(completed < TASK_LABELS.len());
        assert_eq!(indicator.tasks()[completed].status, TaskStatus::Done);
        assert_eq!(indicator.pending_count(), TASK_LABELS.len() - 1);
    }

    #[test]
    fn test_pick_next_completion_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_next_completion(&[], &mut rng), None);
        assert_eq!(pick_next_completion(&[2], &mut rng), None);

        let pending = [0, 2, 5];
        for _ in 0..32 {
            let picked = pick_next_completion(&pending, &mut rng).unwrap();
            assert!(pending.contains(&picked));
        }
    }

    #[test]
    fn test_pick_next_completion_is_deterministic_with_seed() {
        let pending = [0, 1, 2];
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for _ in 0..8 {
            assert_eq!(
                pick_next_completion(&pending, &mut a),
                pick_next_completion(&pending, &mut b)
            );
        }
    }
}
