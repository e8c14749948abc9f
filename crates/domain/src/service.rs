use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::{debug, error};

use crate::{
    AdaptError, AdaptedSession, Agenda, Conflict, DueItem, Exercise, ExerciseID,
    ExerciseRepository, Interval, PlanRepository, PlannedExercise, PlateLoading, ReadError,
    RecurringPlan, ScheduledActivity, Settings, SettingsRepository, WorkoutSession,
    WorkoutSessionRepository, Zone, ZoneID, ZoneRepository, adapt, allocate, find_conflicts,
    find_substitutes, find_zone,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

/// An owned counterpart of [`DueItem`].
#[derive(Debug, Clone, PartialEq)]
pub enum DueActivity {
    Recurring(RecurringPlan),
    Planned(ScheduledActivity),
    Completed(WorkoutSession),
}

impl From<DueItem<'_>> for DueActivity {
    fn from(value: DueItem<'_>) -> Self {
        match value {
            DueItem::Recurring(plan) => DueActivity::Recurring(plan.clone()),
            DueItem::Planned(activity) => DueActivity::Planned(activity.clone()),
            DueItem::Completed(session) => DueActivity::Completed(session.clone()),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum PrepareError {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Adapt(#[from] AdaptError),
}

impl<R> Service<R>
where
    R: PlanRepository + WorkoutSessionRepository + SettingsRepository,
{
    pub async fn due_on(&self, day: NaiveDate) -> Result<Vec<DueActivity>, ReadError> {
        let (plans, activities, history) = self.read_agenda().await?;
        Ok(Agenda::new(&plans, &activities, &history)
            .project_day(day)
            .into_iter()
            .map(DueActivity::from)
            .collect())
    }

    pub async fn is_due(&self, day: NaiveDate) -> Result<bool, ReadError> {
        let (plans, activities, history) = self.read_agenda().await?;
        Ok(Agenda::new(&plans, &activities, &history).is_due(day))
    }

    pub async fn calendar(
        &self,
        interval: &Interval,
    ) -> Result<BTreeMap<NaiveDate, Vec<DueActivity>>, ReadError> {
        let (plans, activities, history) = self.read_agenda().await?;
        Ok(Agenda::new(&plans, &activities, &history)
            .project_range(interval)
            .into_iter()
            .map(|(day, items)| (day, items.into_iter().map(DueActivity::from).collect()))
            .collect())
    }

    /// Calendar of a month. An invalid month results in an empty calendar.
    pub async fn month(
        &self,
        year: i32,
        month: u32,
    ) -> Result<BTreeMap<NaiveDate, Vec<DueActivity>>, ReadError> {
        match Interval::month(year, month) {
            Some(interval) => self.calendar(&interval).await,
            None => Ok(BTreeMap::new()),
        }
    }

    /// Calendar of the week containing `day`, starting on the configured weekday.
    pub async fn week(
        &self,
        day: NaiveDate,
    ) -> Result<BTreeMap<NaiveDate, Vec<DueActivity>>, ReadError> {
        let settings = self.settings().await;
        self.calendar(&Interval::week_of(day, settings.week_start))
            .await
    }

    async fn read_agenda(
        &self,
    ) -> Result<(Vec<RecurringPlan>, Vec<ScheduledActivity>, Vec<WorkoutSession>), ReadError> {
        let plans = log_on_error!(
            self.repository.read_recurring_plans(),
            ReadError,
            "read",
            "recurring plans"
        )?;
        let activities = log_on_error!(
            self.repository.read_scheduled_activities(),
            ReadError,
            "read",
            "scheduled activities"
        )?;
        let history = log_on_error!(
            self.repository.read_workout_sessions(),
            ReadError,
            "read",
            "workout sessions"
        )?;
        Ok((plans, activities, history))
    }
}

impl<R: SettingsRepository> Service<R> {
    pub async fn settings(&self) -> Settings {
        log_on_error!(
            self.repository.read_settings(),
            ReadError,
            "read",
            "settings"
        )
        .unwrap_or_default()
    }
}

impl<R> Service<R>
where
    R: ExerciseRepository + ZoneRepository,
{
    /// Exercises which cannot be performed in the zone, `None` if the zone is unknown.
    pub async fn conflicts(
        &self,
        exercises: &[PlannedExercise],
        zone_id: ZoneID,
    ) -> Result<Option<Vec<Conflict>>, ReadError> {
        let (catalog, zone) = self.read_catalog_and_zone(zone_id).await?;
        Ok(zone.map(|zone| find_conflicts(exercises, &zone, &catalog)))
    }

    /// Ranked replacements for an exercise. An unknown zone yields no replacements.
    pub async fn substitutes(
        &self,
        exercise_id: ExerciseID,
        zone_id: ZoneID,
    ) -> Result<Vec<Exercise>, ReadError> {
        let (catalog, zone) = self.read_catalog_and_zone(zone_id).await?;
        Ok(zone
            .map(|zone| {
                find_substitutes(exercise_id, &zone, &catalog)
                    .into_iter()
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    /// Adapt the exercises of a session before starting it in the zone.
    pub async fn prepare_session(
        &self,
        exercises: &[PlannedExercise],
        zone_id: ZoneID,
        replacements: &BTreeMap<ExerciseID, ExerciseID>,
    ) -> Result<Option<AdaptedSession>, PrepareError> {
        let (catalog, zone) = self.read_catalog_and_zone(zone_id).await?;
        let Some(zone) = zone else {
            return Ok(None);
        };
        Ok(Some(adapt(exercises, &zone, &catalog, replacements)?))
    }

    async fn read_catalog_and_zone(
        &self,
        zone_id: ZoneID,
    ) -> Result<(Vec<Exercise>, Option<Zone>), ReadError> {
        let catalog = log_on_error!(
            self.repository.read_exercises(),
            ReadError,
            "read",
            "exercises"
        )?;
        let zones = log_on_error!(self.repository.read_zones(), ReadError, "read", "zones")?;
        Ok((catalog, find_zone(&zones, zone_id).cloned()))
    }
}

impl<R> Service<R>
where
    R: ZoneRepository + SettingsRepository,
{
    /// Plates for loading a barbell to `total`.
    ///
    /// The plates of the zone are used if it defines a non-empty set, otherwise the configured
    /// plates.
    pub async fn plate_loading(
        &self,
        total: f32,
        zone_id: Option<ZoneID>,
    ) -> Result<PlateLoading, ReadError> {
        let settings = self.settings().await;
        let zone = match zone_id {
            Some(zone_id) => {
                let zones =
                    log_on_error!(self.repository.read_zones(), ReadError, "read", "zones")?;
                find_zone(&zones, zone_id).cloned()
            }
            None => None,
        };
        let plates = zone
            .as_ref()
            .and_then(Zone::custom_plates)
            .unwrap_or(settings.plates.as_slice());
        Ok(allocate(total, settings.bar_weight, plates))
    }
}
