use chrono::{Datelike, NaiveDate, Weekday};
use derive_more::Deref;
use uuid::Uuid;

use crate::{Exercise, ExerciseID, Name, ReadError, TrackingType, WorkoutSet};

#[allow(async_fn_in_trait)]
pub trait PlanRepository {
    async fn read_recurring_plans(&self) -> Result<Vec<RecurringPlan>, ReadError>;
    async fn read_scheduled_activities(&self) -> Result<Vec<ScheduledActivity>, ReadError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannedExercise {
    pub exercise_id: ExerciseID,
    pub sets: Vec<WorkoutSet>,
    pub notes: String,
    pub tracking: Option<TrackingType>,
}

impl PlannedExercise {
    /// The tracking type of this exercise, preferring the override over the catalog entry.
    #[must_use]
    pub fn tracking(&self, exercise: Option<&Exercise>) -> TrackingType {
        self.tracking
            .or(exercise.map(|e| e.tracking))
            .unwrap_or_default()
    }
}

/// A training template repeating on fixed weekdays.
///
/// The end date is inclusive. A plan with an end date before its start date never occurs.
#[derive(Debug, Clone, PartialEq)]
pub struct RecurringPlan {
    pub id: RecurringPlanID,
    pub title: Name,
    pub weekdays: Weekdays,
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
    pub exercises: Vec<PlannedExercise>,
}

impl RecurringPlan {
    #[must_use]
    pub fn is_occurring(&self, day: NaiveDate) -> bool {
        self.weekdays.contains(day.weekday())
            && day >= self.start
            && self.end.is_none_or(|end| day <= end)
    }

    /// The first day on or after `from` on which the plan occurs.
    #[must_use]
    pub fn next_occurrence(&self, from: NaiveDate) -> Option<NaiveDate> {
        if self.weekdays.is_empty() {
            return None;
        }
        from.max(self.start)
            .iter_days()
            .take(7)
            .find(|day| self.is_occurring(*day))
    }

    /// Create the concrete activity which overrides this plan on `day`.
    #[must_use]
    pub fn materialize(&self, id: ScheduledActivityID, day: NaiveDate) -> ScheduledActivity {
        ScheduledActivity {
            id,
            date: day,
            title: self.title.clone(),
            completed: false,
            exercises: self.exercises.clone(),
            recurrence_id: Some(self.id),
        }
    }
}

/// A set of weekdays.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Weekdays(u8);

impl Weekdays {
    #[must_use]
    pub fn contains(self, weekday: Weekday) -> bool {
        self.0 & Self::bit(weekday) != 0
    }

    pub fn insert(&mut self, weekday: Weekday) {
        self.0 |= Self::bit(weekday);
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Day numbers of the set in ascending order, starting with 0 for Sunday.
    #[must_use]
    pub fn numbers(self) -> Vec<u8> {
        (0..7u8).filter(|n| self.0 & (1 << *n) != 0).collect()
    }

    fn bit(weekday: Weekday) -> u8 {
        1 << weekday.num_days_from_sunday()
    }
}

impl FromIterator<Weekday> for Weekdays {
    fn from_iter<T: IntoIterator<Item = Weekday>>(iter: T) -> Self {
        let mut weekdays = Weekdays::default();
        for weekday in iter {
            weekdays.insert(weekday);
        }
        weekdays
    }
}

impl TryFrom<&[u8]> for Weekdays {
    type Error = WeekdayError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let mut weekdays = Weekdays::default();
        for &n in value {
            if n > 6 {
                return Err(WeekdayError::OutOfRange(n));
            }
            weekdays.0 |= 1 << n;
        }
        Ok(weekdays)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeekdayError {
    #[error("Weekday must be in the range 0 (Sunday) to 6 (Saturday) ({0} > 6)")]
    OutOfRange(u8),
}

/// A dated activity, either planned once or materialized from a recurring plan.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledActivity {
    pub id: ScheduledActivityID,
    pub date: NaiveDate,
    pub title: Name,
    pub completed: bool,
    pub exercises: Vec<PlannedExercise>,
    pub recurrence_id: Option<RecurringPlanID>,
}

impl ScheduledActivity {
    #[must_use]
    pub fn overrides(&self, plan: &RecurringPlan, day: NaiveDate) -> bool {
        self.recurrence_id == Some(plan.id) && self.date == day
    }
}

/// An entry of a plan store holding templates and concrete activities side by side.
#[derive(Debug, Clone, PartialEq)]
pub enum PlannedActivity {
    Template(RecurringPlan),
    Concrete(ScheduledActivity),
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct RecurringPlanID(Uuid);

impl RecurringPlanID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for RecurringPlanID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for RecurringPlanID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScheduledActivityID(Uuid);

impl ScheduledActivityID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ScheduledActivityID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ScheduledActivityID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    pub(crate) fn planned_exercise(exercise_id: u128) -> PlannedExercise {
        PlannedExercise {
            exercise_id: exercise_id.into(),
            sets: vec![WorkoutSet::default(), WorkoutSet::default()],
            notes: String::new(),
            tracking: None,
        }
    }

    /// Monday, Wednesday and Friday starting on Monday, 2024-01-01.
    pub(crate) fn plan(id: u128, end: Option<NaiveDate>) -> RecurringPlan {
        RecurringPlan {
            id: id.into(),
            title: Name::new("Full Body").unwrap(),
            weekdays: Weekdays::try_from([1_u8, 3, 5].as_slice()).unwrap(),
            start: date(2024, 1, 1),
            end,
            exercises: vec![planned_exercise(1)],
        }
    }

    pub(crate) fn activity(
        id: u128,
        date: NaiveDate,
        completed: bool,
        recurrence_id: Option<u128>,
    ) -> ScheduledActivity {
        ScheduledActivity {
            id: id.into(),
            date,
            title: Name::new("Conditioning").unwrap(),
            completed,
            exercises: vec![planned_exercise(2)],
            recurrence_id: recurrence_id.map(RecurringPlanID::from),
        }
    }

    #[rstest]
    #[case::before_start(plan(1, None), date(2023, 12, 29), false)]
    #[case::start(plan(1, None), date(2024, 1, 1), true)]
    #[case::other_weekday(plan(1, None), date(2024, 1, 2), false)]
    #[case::wednesday(plan(1, None), date(2024, 1, 3), true)]
    #[case::far_future(plan(1, None), date(2030, 6, 7), true)]
    #[case::end(plan(1, Some(date(2024, 1, 5))), date(2024, 1, 5), true)]
    #[case::after_end(plan(1, Some(date(2024, 1, 5))), date(2024, 1, 8), false)]
    #[case::end_before_start(plan(1, Some(date(2023, 12, 1))), date(2024, 1, 1), false)]
    #[case::no_weekdays(
        RecurringPlan { weekdays: Weekdays::default(), ..plan(1, None) },
        date(2024, 1, 1),
        false
    )]
    fn test_recurring_plan_is_occurring(
        #[case] plan: RecurringPlan,
        #[case] day: NaiveDate,
        #[case] expected: bool,
    ) {
        assert_eq!(plan.is_occurring(day), expected);
    }

    #[test]
    fn test_recurring_plan_is_occurring_matches_definition() {
        let plan = plan(1, Some(date(2024, 3, 31)));
        let weekdays = plan.weekdays.numbers();

        for day in date(2023, 12, 1).iter_days().take(150) {
            #[allow(clippy::cast_possible_truncation)]
            let weekday = day.weekday().num_days_from_sunday() as u8;
            assert_eq!(
                plan.is_occurring(day),
                weekdays.contains(&weekday) && day >= plan.start && day <= date(2024, 3, 31),
                "{day}"
            );
        }
    }

    #[rstest]
    #[case::before_start(plan(1, None), date(2023, 6, 1), Some(date(2024, 1, 1)))]
    #[case::occurring(plan(1, None), date(2024, 1, 3), Some(date(2024, 1, 3)))]
    #[case::weekend(plan(1, None), date(2024, 1, 6), Some(date(2024, 1, 8)))]
    #[case::ended(plan(1, Some(date(2024, 1, 5))), date(2024, 1, 6), None)]
    #[case::no_weekdays(
        RecurringPlan { weekdays: Weekdays::default(), ..plan(1, None) },
        date(2024, 1, 1),
        None
    )]
    fn test_recurring_plan_next_occurrence(
        #[case] plan: RecurringPlan,
        #[case] from: NaiveDate,
        #[case] expected: Option<NaiveDate>,
    ) {
        assert_eq!(plan.next_occurrence(from), expected);
    }

    #[test]
    fn test_recurring_plan_materialize() {
        let plan = plan(1, None);
        let activity = plan.materialize(7.into(), date(2024, 1, 3));

        assert_eq!(
            activity,
            ScheduledActivity {
                id: 7.into(),
                date: date(2024, 1, 3),
                title: plan.title.clone(),
                completed: false,
                exercises: plan.exercises.clone(),
                recurrence_id: Some(plan.id),
            }
        );
        assert!(activity.overrides(&plan, date(2024, 1, 3)));
        assert!(!activity.overrides(&plan, date(2024, 1, 5)));
    }

    #[rstest]
    #[case(&[], Ok(vec![]))]
    #[case(&[0, 6], Ok(vec![0, 6]))]
    #[case(&[5, 1, 3, 1], Ok(vec![1, 3, 5]))]
    #[case(&[7], Err(WeekdayError::OutOfRange(7)))]
    fn test_weekdays_try_from(#[case] input: &[u8], #[case] expected: Result<Vec<u8>, WeekdayError>) {
        assert_eq!(Weekdays::try_from(input).map(Weekdays::numbers), expected);
    }

    #[test]
    fn test_weekdays_from_iter() {
        let weekdays = [Weekday::Sun, Weekday::Sat].into_iter().collect::<Weekdays>();

        assert!(weekdays.contains(Weekday::Sun));
        assert!(weekdays.contains(Weekday::Sat));
        assert!(!weekdays.contains(Weekday::Mon));
        assert_eq!(weekdays.numbers(), vec![0, 6]);
    }

    #[rstest]
    #[case(None, Some(TrackingType::Time), TrackingType::Time)]
    #[case(Some(TrackingType::Reps), Some(TrackingType::Time), TrackingType::Reps)]
    #[case(None, None, TrackingType::RepsWeight)]
    fn test_planned_exercise_tracking(
        #[case] tracking: Option<TrackingType>,
        #[case] catalog_tracking: Option<TrackingType>,
        #[case] expected: TrackingType,
    ) {
        let exercise = catalog_tracking.map(|tracking| Exercise {
            tracking,
            ..crate::exercise::tests::exercise(1, "Plank", &[], &[], &[], None)
        });

        assert_eq!(
            PlannedExercise {
                tracking,
                ..planned_exercise(1)
            }
            .tracking(exercise.as_ref()),
            expected
        );
    }
}
