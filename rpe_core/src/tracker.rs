//! In-memory session log of strength sets.
//!
//! A [`LiftTracker`] is owned by exactly one session and passed to whatever
//! drives it. It is append-only apart from explicit delete-by-position.

use crate::rpe::weight_for;
use crate::{Exercise, LoggedSet, PersonalBest, Rpe};

/// Insertion-ordered log of sets for a single session
#[derive(Clone, Debug, Default)]
pub struct LiftTracker {
    sets: Vec<LoggedSet>,
}

impl LiftTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log a set and return it
    ///
    /// Inputs are accepted as given; the caller owns any range checks.
    pub fn log_set(&mut self, exercise: Exercise, weight: f64, reps: u32, rpe: Rpe) -> &LoggedSet {
        let set = LoggedSet::new(exercise, weight, reps, rpe);
        tracing::debug!(
            "Logged {} {}x{} @{} (e1RM {})",
            exercise,
            weight,
            reps,
            rpe,
            set.estimated_max()
        );
        self.sets.push(set);
        &self.sets[self.sets.len() - 1]
    }

    /// Remove the set at `index` (0-based)
    ///
    /// Out-of-bounds indices leave the log untouched and return `None`.
    pub fn delete(&mut self, index: usize) -> Option<LoggedSet> {
        if index < self.sets.len() {
            let removed = self.sets.remove(index);
            tracing::debug!("Deleted set {} ({})", index, removed.id());
            Some(removed)
        } else {
            tracing::debug!("Ignoring delete of out-of-range index {}", index);
            None
        }
    }

    /// Set with the highest e1RM for an exercise; the earliest wins ties
    pub fn best_set(&self, exercise: Exercise) -> Option<&LoggedSet> {
        self.sets
            .iter()
            .filter(|set| set.exercise() == exercise)
            .fold(None, |best: Option<&LoggedSet>, set| match best {
                Some(current) if set.estimated_max() > current.estimated_max() => Some(set),
                None => Some(set),
                kept => kept,
            })
    }

    /// Weight to use for `target_reps` at `target_rpe`, based on the current best set
    pub fn target_weight(&self, exercise: Exercise, target_reps: u32, target_rpe: Rpe) -> Option<f64> {
        self.best_set(exercise)
            .map(|best| weight_for(best.estimated_max(), target_reps, target_rpe))
    }

    /// Best set per exercise, in display order, skipping exercises without data
    pub fn personal_bests(&self) -> Vec<PersonalBest> {
        Exercise::ALL
            .iter()
            .filter_map(|exercise| {
                self.best_set(*exercise).map(|set| PersonalBest {
                    exercise: *exercise,
                    set: set.clone(),
                })
            })
            .collect()
    }

    /// All logged sets in insertion order
    pub fn sets(&self) -> &[LoggedSet] {
        &self.sets
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
