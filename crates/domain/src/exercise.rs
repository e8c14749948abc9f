use std::slice::Iter;

use derive_more::Deref;
use uuid::Uuid;

use crate::{Name, ReadError, TrackingType};

#[allow(async_fn_in_trait)]
pub trait ExerciseRepository {
    async fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
}

/// An entry of the exercise catalog.
///
/// `requirements` is a conjunction of alternatives: every group must be satisfied by at least
/// one of its members. Exercises without requirement groups fall back to `equipment`, of which
/// every item except [`Equipment::Bodyweight`] must be available.
#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub equipment: Vec<Equipment>,
    pub requirements: Vec<Vec<Equipment>>,
    pub muscles: Vec<MuscleID>,
    pub score: Option<u8>,
    pub tracking: TrackingType,
}

impl Exercise {
    pub const DEFAULT_SCORE: u8 = 5;

    #[must_use]
    pub fn score(&self) -> u8 {
        self.score.unwrap_or(Self::DEFAULT_SCORE)
    }

    /// The equipment item reported when an exercise cannot be performed.
    #[must_use]
    pub fn primary_equipment(&self) -> Equipment {
        self.equipment.first().copied().unwrap_or(Equipment::Other)
    }

    #[must_use]
    pub fn shares_muscles_with(&self, other: &Exercise) -> bool {
        self.muscles.iter().any(|m| other.muscles.contains(m))
    }
}

#[must_use]
pub fn find_exercise(catalog: &[Exercise], id: ExerciseID) -> Option<&Exercise> {
    catalog.iter().find(|e| e.id == id)
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MuscleID {
    Neck,
    Chest,
    Traps,
    Lats,
    Shoulders,
    Biceps,
    Triceps,
    Forearms,
    Abs,
    LowerBack,
    Glutes,
    Quads,
    Hamstrings,
    Adductors,
    Calves,
}

impl MuscleID {
    pub fn iter() -> Iter<'static, MuscleID> {
        static MUSCLES: [MuscleID; 15] = [
            MuscleID::Neck,
            MuscleID::Chest,
            MuscleID::Traps,
            MuscleID::Lats,
            MuscleID::Shoulders,
            MuscleID::Biceps,
            MuscleID::Triceps,
            MuscleID::Forearms,
            MuscleID::Abs,
            MuscleID::LowerBack,
            MuscleID::Glutes,
            MuscleID::Quads,
            MuscleID::Hamstrings,
            MuscleID::Adductors,
            MuscleID::Calves,
        ];
        MUSCLES.iter()
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            MuscleID::Neck => "Neck",
            MuscleID::Chest => "Chest",
            MuscleID::Traps => "Traps",
            MuscleID::Lats => "Lats",
            MuscleID::Shoulders => "Shoulders",
            MuscleID::Biceps => "Biceps",
            MuscleID::Triceps => "Triceps",
            MuscleID::Forearms => "Forearms",
            MuscleID::Abs => "Abs",
            MuscleID::LowerBack => "Lower Back",
            MuscleID::Glutes => "Glutes",
            MuscleID::Quads => "Quads",
            MuscleID::Hamstrings => "Hamstrings",
            MuscleID::Adductors => "Adductors",
            MuscleID::Calves => "Calves",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Equipment {
    /// Placeholder for an unspecified piece of equipment.
    Other,
    /// Always available, regardless of the zone.
    Bodyweight,
    Barbell,
    Bench,
    Box,
    Cable,
    Dumbbell,
    EzBar,
    GymnasticRings,
    Kettlebell,
    Machine,
    ParallelBars,
    PullUpBar,
    ResistanceBand,
    SquatRack,
    TrapBar,
}

impl Equipment {
    pub fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 15] = [
            Equipment::Bodyweight,
            Equipment::Barbell,
            Equipment::Bench,
            Equipment::Box,
            Equipment::Cable,
            Equipment::Dumbbell,
            Equipment::EzBar,
            Equipment::GymnasticRings,
            Equipment::Kettlebell,
            Equipment::Machine,
            Equipment::ParallelBars,
            Equipment::PullUpBar,
            Equipment::ResistanceBand,
            Equipment::SquatRack,
            Equipment::TrapBar,
        ];
        EQUIPMENT.iter()
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Equipment::Other => "Equipment",
            Equipment::Bodyweight => "Bodyweight",
            Equipment::Barbell => "Barbell",
            Equipment::Bench => "Bench",
            Equipment::Box => "Box",
            Equipment::Cable => "Cable",
            Equipment::Dumbbell => "Dumbbell",
            Equipment::EzBar => "EZ Bar",
            Equipment::GymnasticRings => "Gymnastic Rings",
            Equipment::Kettlebell => "Kettlebell",
            Equipment::Machine => "Machine",
            Equipment::ParallelBars => "Parallel Bars",
            Equipment::PullUpBar => "Pull Up Bar",
            Equipment::ResistanceBand => "Resistance Band",
            Equipment::SquatRack => "Squat Rack",
            Equipment::TrapBar => "Trap Bar",
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    pub(crate) fn exercise(
        id: u128,
        name: &str,
        equipment: &[Equipment],
        requirements: &[&[Equipment]],
        muscles: &[MuscleID],
        score: Option<u8>,
    ) -> Exercise {
        Exercise {
            id: id.into(),
            name: Name::new(name).unwrap(),
            equipment: equipment.to_vec(),
            requirements: requirements.iter().map(|r| r.to_vec()).collect(),
            muscles: muscles.to_vec(),
            score,
            tracking: TrackingType::RepsWeight,
        }
    }

    #[rstest]
    #[case(None, 5)]
    #[case(Some(0), 0)]
    #[case(Some(9), 9)]
    fn test_exercise_score(#[case] score: Option<u8>, #[case] expected: u8) {
        assert_eq!(
            exercise(1, "Squat", &[], &[], &[MuscleID::Quads], score).score(),
            expected
        );
    }

    #[rstest]
    #[case(&[Equipment::Barbell, Equipment::Bench], Equipment::Barbell)]
    #[case(&[], Equipment::Other)]
    fn test_exercise_primary_equipment(
        #[case] equipment: &[Equipment],
        #[case] expected: Equipment,
    ) {
        assert_eq!(
            exercise(1, "Bench Press", equipment, &[], &[], None).primary_equipment(),
            expected
        );
    }

    #[test]
    fn test_exercise_shares_muscles_with() {
        let bench_press = exercise(
            1,
            "Bench Press",
            &[],
            &[],
            &[MuscleID::Chest, MuscleID::Triceps],
            None,
        );
        let dip = exercise(2, "Dip", &[], &[], &[MuscleID::Triceps], None);
        let squat = exercise(3, "Squat", &[], &[], &[MuscleID::Quads], None);

        assert!(bench_press.shares_muscles_with(&dip));
        assert!(dip.shares_muscles_with(&bench_press));
        assert!(!bench_press.shares_muscles_with(&squat));
    }

    #[test]
    fn test_find_exercise() {
        let catalog = [
            exercise(1, "Squat", &[], &[], &[], None),
            exercise(2, "Deadlift", &[], &[], &[], None),
        ];

        assert_eq!(
            find_exercise(&catalog, 2.into()).map(|e| e.name.as_ref().clone()),
            Some("Deadlift".to_string())
        );
        assert_eq!(find_exercise(&catalog, 3.into()), None);
    }

    #[test]
    fn test_exercise_id_nil() {
        assert!(ExerciseID::nil().is_nil());
        assert_eq!(ExerciseID::nil(), ExerciseID::default());
    }

    #[test]
    fn test_muscle_id_name() {
        let mut names = HashSet::new();

        for muscle in MuscleID::iter() {
            let name = muscle.name();

            assert!(!name.is_empty());
            assert!(!names.contains(name));

            names.insert(name);
        }
    }

    #[test]
    fn test_equipment_iter() {
        assert!(!Equipment::iter().any(|e| *e == Equipment::Other));
    }

    #[test]
    fn test_equipment_name() {
        let mut names = HashSet::new();

        for equipment in Equipment::iter().chain([Equipment::Other].iter()) {
            let name = equipment.name();

            assert!(!name.is_empty());
            assert!(!names.contains(name));

            names.insert(name);
        }
    }
}
