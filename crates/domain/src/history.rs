use chrono::{Duration, NaiveDate, NaiveDateTime};
use derive_more::Deref;
use uuid::Uuid;

use crate::{ExerciseID, RPE, ReadError, WorkoutSet};

#[allow(async_fn_in_trait)]
pub trait WorkoutSessionRepository {
    async fn read_workout_sessions(&self) -> Result<Vec<WorkoutSession>, ReadError>;
}

/// A finished workout. Sessions are never modified once recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSession {
    pub id: WorkoutSessionID,
    pub start: NaiveDateTime,
    pub duration: Duration,
    pub exercises: Vec<PerformedExercise>,
    pub location: Option<String>,
    pub rpe: Option<RPE>,
}

impl WorkoutSession {
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    #[must_use]
    pub fn completed_sets(&self) -> usize {
        self.exercises
            .iter()
            .flat_map(|e| &e.sets)
            .filter(|s| s.completed)
            .count()
    }

    /// Sum of reps times weight over all completed sets.
    ///
    /// Sets without weight count with their reps only.
    #[must_use]
    pub fn volume_load(&self) -> u32 {
        self.exercises
            .iter()
            .flat_map(|e| &e.sets)
            .filter(|s| s.completed)
            .filter_map(|s| {
                let reps = u32::from(s.reps?);
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_precision_loss,
                    clippy::cast_sign_loss
                )]
                Some(match s.weight {
                    Some(weight) => (reps as f32 * f32::from(weight)).round() as u32,
                    None => reps,
                })
            })
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PerformedExercise {
    pub exercise_id: ExerciseID,
    pub sets: Vec<WorkoutSet>,
    pub notes: String,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutSessionID(Uuid);

impl WorkoutSessionID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutSessionID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutSessionID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}
