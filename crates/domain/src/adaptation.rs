use std::collections::BTreeMap;

use log::debug;

use crate::{Exercise, ExerciseID, PlannedExercise, Zone, check_compatibility, find_exercise};

#[derive(Debug, Clone, PartialEq)]
pub struct AdaptedSession {
    pub exercises: Vec<PlannedExercise>,
    pub replaced: usize,
    pub dropped: usize,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum AdaptError {
    #[error("No exercise can be performed at this location ({dropped} dropped)")]
    NoExercisesLeft { dropped: usize },
}

/// Prepare the exercises of a session for `zone`.
///
/// Exercises which cannot be performed are swapped for the exercise selected in `replacements`
/// or dropped if no replacement was selected. Exercises missing from the catalog are kept.
pub fn adapt(
    exercises: &[PlannedExercise],
    zone: &Zone,
    catalog: &[Exercise],
    replacements: &BTreeMap<ExerciseID, ExerciseID>,
) -> Result<AdaptedSession, AdaptError> {
    let mut result = AdaptedSession {
        exercises: vec![],
        replaced: 0,
        dropped: 0,
    };

    for planned in exercises {
        let Some(exercise) = find_exercise(catalog, planned.exercise_id) else {
            result.exercises.push(planned.clone());
            continue;
        };

        if check_compatibility(exercise, zone).is_compatible() {
            result.exercises.push(planned.clone());
        } else if let Some(replacement_id) = replacements.get(&exercise.id) {
            debug!("replacing {} in {}", exercise.name, zone.name);
            result.exercises.push(replace(planned, exercise, *replacement_id));
            result.replaced += 1;
        } else {
            debug!("dropping {} in {}", exercise.name, zone.name);
            result.dropped += 1;
        }
    }

    if result.exercises.is_empty() {
        return Err(AdaptError::NoExercisesLeft {
            dropped: result.dropped,
        });
    }

    Ok(result)
}

fn replace(
    planned: &PlannedExercise,
    original: &Exercise,
    replacement_id: ExerciseID,
) -> PlannedExercise {
    let annotation = format!("Replaced {}", original.name);
    PlannedExercise {
        exercise_id: replacement_id,
        sets: planned.sets.clone(),
        notes: if planned.notes.is_empty() {
            annotation
        } else {
            format!("{annotation}\n{}", planned.notes)
        },
        tracking: planned.tracking,
    }
}
