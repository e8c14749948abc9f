use chrono::Weekday;

use crate::{ReadError, STANDARD_PLATES};

#[allow(async_fn_in_trait)]
pub trait SettingsRepository {
    async fn read_settings(&self) -> Result<Settings, ReadError>;
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub bar_weight: f32,
    pub plates: Vec<f32>,
    pub week_start: Weekday,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bar_weight: 20.0,
            plates: STANDARD_PLATES.to_vec(),
            week_start: Weekday::Mon,
        }
    }
}
