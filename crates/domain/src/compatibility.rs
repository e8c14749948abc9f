use crate::{Equipment, Exercise, ExerciseID, PlannedExercise, Zone, find_exercise};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Compatibility {
    Compatible,
    Incompatible { missing: Vec<Equipment> },
}

impl Compatibility {
    #[must_use]
    pub fn is_compatible(&self) -> bool {
        *self == Compatibility::Compatible
    }

    #[must_use]
    pub fn missing(&self) -> &[Equipment] {
        match self {
            Compatibility::Compatible => &[],
            Compatibility::Incompatible { missing } => missing,
        }
    }
}

/// Check whether `exercise` can be performed with the equipment of `zone`.
///
/// If requirement groups are defined, an unmet group is reported as the primary equipment of
/// the exercise instead of the group itself.
#[must_use]
pub fn check_compatibility(exercise: &Exercise, zone: &Zone) -> Compatibility {
    if !exercise.requirements.is_empty() {
        return if exercise
            .requirements
            .iter()
            .all(|group| group.iter().any(|e| zone.has(*e)))
        {
            Compatibility::Compatible
        } else {
            Compatibility::Incompatible {
                missing: vec![exercise.primary_equipment()],
            }
        };
    }

    let mut missing = vec![];

    for e in &exercise.equipment {
        if *e != Equipment::Bodyweight && !zone.has(*e) && !missing.contains(e) {
            missing.push(*e);
        }
    }

    if missing.is_empty() {
        Compatibility::Compatible
    } else {
        Compatibility::Incompatible { missing }
    }
}

/// Exercises of `catalog` which can replace the exercise `original` in `zone`.
///
/// Candidates must train at least one muscle of the original exercise. The result is ordered
/// by descending score, candidates with equal score keep their catalog order. An unknown
/// original exercise yields no candidates.
#[must_use]
pub fn find_substitutes<'a>(
    original: ExerciseID,
    zone: &Zone,
    catalog: &'a [Exercise],
) -> Vec<&'a Exercise> {
    let Some(original) = find_exercise(catalog, original) else {
        return vec![];
    };

    let mut candidates = catalog
        .iter()
        .filter(|e| e.id != original.id)
        .filter(|e| e.shares_muscles_with(original))
        .filter(|e| check_compatibility(e, zone).is_compatible())
        .collect::<Vec<_>>();

    candidates.sort_by_key(|e| std::cmp::Reverse(e.score()));
    candidates
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub exercise_id: ExerciseID,
    pub missing: Vec<Equipment>,
}

/// Exercises of a session which cannot be performed in `zone`.
///
/// Exercises missing from the catalog are not reported.
#[must_use]
pub fn find_conflicts(
    exercises: &[PlannedExercise],
    zone: &Zone,
    catalog: &[Exercise],
) -> Vec<Conflict> {
    exercises
        .iter()
        .filter_map(|planned| {
            let exercise = find_exercise(catalog, planned.exercise_id)?;
            match check_compatibility(exercise, zone) {
                Compatibility::Compatible => None,
                Compatibility::Incompatible { missing } => Some(Conflict {
                    exercise_id: exercise.id,
                    missing,
                }),
            }
        })
        .collect()
}
