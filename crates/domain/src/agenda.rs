use std::collections::{BTreeMap, BTreeSet};

use chrono::{Days, NaiveDate, Weekday};
use log::trace;

use crate::{PlannedActivity, RecurringPlan, ScheduledActivity, WorkoutSession};

/// An inclusive range of days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl Interval {
    #[must_use]
    pub fn month(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let last = first.checked_add_months(chrono::Months::new(1))?.pred_opt()?;
        Some(Interval { first, last })
    }

    /// The seven days of the week containing `day`.
    #[must_use]
    pub fn week_of(day: NaiveDate, week_start: Weekday) -> Self {
        let first = day
            .week(week_start)
            .checked_first_day()
            .unwrap_or(NaiveDate::MIN);
        Interval {
            first,
            last: first.checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX),
        }
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let last = self.last;
        self.first.iter_days().take_while(move |d| *d <= last)
    }
}

impl From<std::ops::RangeInclusive<NaiveDate>> for Interval {
    fn from(value: std::ops::RangeInclusive<NaiveDate>) -> Self {
        Interval {
            first: *value.start(),
            last: *value.end(),
        }
    }
}

/// Something to show on a calendar day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DueItem<'a> {
    /// An occurrence of a recurring plan which has not been materialized for the day.
    Recurring(&'a RecurringPlan),
    /// A concrete activity which has not been completed yet.
    Planned(&'a ScheduledActivity),
    Completed(&'a WorkoutSession),
}

impl DueItem<'_> {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, DueItem::Recurring(_) | DueItem::Planned(_))
    }
}

/// Snapshot of plans, concrete activities and history used to derive what is due on a day.
pub struct Agenda<'a> {
    plans: Vec<&'a RecurringPlan>,
    activities: Vec<&'a ScheduledActivity>,
    history: Vec<&'a WorkoutSession>,
}

impl<'a> Agenda<'a> {
    #[must_use]
    pub fn new(
        plans: &'a [RecurringPlan],
        activities: &'a [ScheduledActivity],
        history: &'a [WorkoutSession],
    ) -> Self {
        Self {
            plans: plans.iter().collect(),
            activities: activities.iter().collect(),
            history: history.iter().collect(),
        }
    }

    #[must_use]
    pub fn from_planned(planned: &'a [PlannedActivity], history: &'a [WorkoutSession]) -> Self {
        let mut plans = vec![];
        let mut activities = vec![];
        for p in planned {
            match p {
                PlannedActivity::Template(plan) => plans.push(plan),
                PlannedActivity::Concrete(activity) => activities.push(activity),
            }
        }
        Self {
            plans,
            activities,
            history: history.iter().collect(),
        }
    }

    /// All items of `day`.
    ///
    /// Incomplete concrete activities come first, followed by completed sessions and the
    /// occurrences of recurring plans. An occurrence is suppressed if any concrete activity,
    /// completed or not, refers to the plan on the same day.
    #[must_use]
    pub fn project_day(&self, day: NaiveDate) -> Vec<DueItem<'a>> {
        let planned = self
            .activities
            .iter()
            .copied()
            .filter(|a| a.date == day && !a.completed)
            .map(DueItem::Planned);
        let completed = self
            .history
            .iter()
            .copied()
            .filter(|s| s.date() == day)
            .map(DueItem::Completed);

        let mut items = planned.chain(completed).collect::<Vec<_>>();
        let mut seen = BTreeSet::new();

        for plan in self.plans.iter().copied() {
            if plan.is_occurring(day)
                && !self.activities.iter().any(|a| a.overrides(plan, day))
                && seen.insert(plan.id)
            {
                items.push(DueItem::Recurring(plan));
            }
        }

        trace!("{} items due on {day}", items.len());

        items
    }

    /// Items of every day in `interval`. Days without items are omitted.
    #[must_use]
    pub fn project_range(&self, interval: &Interval) -> BTreeMap<NaiveDate, Vec<DueItem<'a>>> {
        interval
            .days()
            .map(|day| (day, self.project_day(day)))
            .filter(|(_, items)| !items.is_empty())
            .collect()
    }

    /// Whether a recurring or planned activity is pending on `day`.
    #[must_use]
    pub fn is_due(&self, day: NaiveDate) -> bool {
        self.project_day(day).iter().any(DueItem::is_pending)
    }
}

#[must_use]
pub fn project_day<'a>(
    day: NaiveDate,
    plans: &'a [RecurringPlan],
    activities: &'a [ScheduledActivity],
    history: &'a [WorkoutSession],
) -> Vec<DueItem<'a>> {
    Agenda::new(plans, activities, history).project_day(day)
}

#[must_use]
pub fn project_range<'a>(
    interval: &Interval,
    plans: &'a [RecurringPlan],
    activities: &'a [ScheduledActivity],
    history: &'a [WorkoutSession],
) -> BTreeMap<NaiveDate, Vec<DueItem<'a>>> {
    Agenda::new(plans, activities, history).project_range(interval)
}
