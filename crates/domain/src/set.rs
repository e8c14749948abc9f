use std::fmt;

use derive_more::{Display, Into};

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(0..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 0 to 999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

/// Duration of a set in seconds.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Time(u32);

impl Time {
    pub fn new(value: u32) -> Result<Self, TimeError> {
        if !(0..86_400).contains(&value) {
            return Err(TimeError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Time {
    type Error = TimeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Time::new(parsed_value),
            Err(_) => Err(TimeError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TimeError {
    #[error("Time must be in the range 0 to 86399 s")]
    OutOfRange,
    #[error("Time must be an integer")]
    ParseError,
}

/// Load in kilograms with a resolution of 0.01 kg.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !(0.0..1000.0).contains(&value) {
            return Err(WeightError::OutOfRange);
        }

        let hundredths = value * 100.0;

        if (hundredths - hundredths.round()).abs() > 1e-3 {
            return Err(WeightError::InvalidResolution);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be in the range 0.0 to 999.99 kg")]
    OutOfRange,
    #[error("Weight must be a multiple of 0.01 kg")]
    InvalidResolution,
    #[error("Weight must be a decimal")]
    ParseError,
}

/// Distance in meters.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Distance(u32);

impl Distance {
    pub fn new(value: u32) -> Result<Self, DistanceError> {
        if value > 1_000_000 {
            return Err(DistanceError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Distance {
    type Error = DistanceError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Distance::new(parsed_value),
            Err(_) => Err(DistanceError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DistanceError {
    #[error("Distance must be 1000000 m or less")]
    OutOfRange,
    #[error("Distance must be an integer")]
    ParseError,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct RPE(u8);

impl RPE {
    pub const ZERO: RPE = RPE(0);
    pub const FIVE: RPE = RPE(50);
    pub const SEVEN: RPE = RPE(70);
    pub const EIGHT: RPE = RPE(80);
    pub const TEN: RPE = RPE(100);

    pub fn new(value: f32) -> Result<Self, RPEError> {
        if !(0.0..=10.0).contains(&value) {
            return Err(RPEError::OutOfRange);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let v = (value * 10.0).round() as u8;

        if v % 5 != 0 {
            return Err(RPEError::InvalidResolution);
        }

        Ok(Self(v))
    }
}

impl From<RPE> for f32 {
    fn from(value: RPE) -> Self {
        f32::from(value.0) / 10.0
    }
}

impl TryFrom<&str> for RPE {
    type Error = RPEError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<f32>() {
            Ok(parsed_value) => RPE::new(parsed_value),
            Err(_) => Err(RPEError::ParseError),
        }
    }
}

impl fmt::Display for RPE {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", f32::from(*self))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RPEError {
    #[error("RPE must be in the range 0.0 to 10.0")]
    OutOfRange,
    #[error("RPE must be a multiple of 0.5")]
    InvalidResolution,
    #[error("RPE must be a decimal")]
    ParseError,
}

/// How the performance of a set is measured.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TrackingType {
    #[default]
    RepsWeight,
    Reps,
    Time,
    TimeDistance,
    RepsOnTime,
}

impl TrackingType {
    #[must_use]
    pub fn measures_reps(self) -> bool {
        matches!(
            self,
            TrackingType::RepsWeight | TrackingType::Reps | TrackingType::RepsOnTime
        )
    }

    #[must_use]
    pub fn measures_weight(self) -> bool {
        self == TrackingType::RepsWeight
    }

    #[must_use]
    pub fn measures_time(self) -> bool {
        matches!(
            self,
            TrackingType::Time | TrackingType::TimeDistance | TrackingType::RepsOnTime
        )
    }

    #[must_use]
    pub fn measures_distance(self) -> bool {
        self == TrackingType::TimeDistance
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            TrackingType::RepsWeight => "Reps and weight",
            TrackingType::Reps => "Reps",
            TrackingType::Time => "Time",
            TrackingType::TimeDistance => "Time and distance",
            TrackingType::RepsOnTime => "Reps on time",
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct WorkoutSet {
    pub reps: Option<Reps>,
    pub weight: Option<Weight>,
    pub time: Option<Time>,
    pub distance: Option<Distance>,
    pub completed: bool,
}

impl WorkoutSet {
    /// Whether every value measured by `tracking` has been recorded.
    #[must_use]
    pub fn is_complete_for(&self, tracking: TrackingType) -> bool {
        (!tracking.measures_reps() || self.reps.is_some())
            && (!tracking.measures_weight() || self.weight.is_some())
            && (!tracking.measures_time() || self.time.is_some())
            && (!tracking.measures_distance() || self.distance.is_some())
    }
}
