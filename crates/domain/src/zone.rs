use derive_more::Deref;
use uuid::Uuid;

use crate::{Equipment, Name, ReadError, STANDARD_PLATES};

#[allow(async_fn_in_trait)]
pub trait ZoneRepository {
    async fn read_zones(&self) -> Result<Vec<Zone>, ReadError>;
}

/// A training location and the equipment available there.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    pub id: ZoneID,
    pub name: Name,
    pub equipment: Vec<Equipment>,
    pub plates: Option<Vec<f32>>,
}

impl Zone {
    #[must_use]
    pub fn has(&self, equipment: Equipment) -> bool {
        self.equipment.contains(&equipment)
    }

    /// Plate denominations defined for this zone. An empty list counts as none.
    #[must_use]
    pub fn custom_plates(&self) -> Option<&[f32]> {
        self.plates.as_deref().filter(|plates| !plates.is_empty())
    }

    /// Plate denominations available for loading a barbell.
    ///
    /// A custom set replaces the standard set entirely.
    #[must_use]
    pub fn plates(&self) -> &[f32] {
        self.custom_plates().unwrap_or(&STANDARD_PLATES)
    }
}

#[must_use]
pub fn find_zone(zones: &[Zone], id: ZoneID) -> Option<&Zone> {
    zones.iter().find(|z| z.id == id)
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZoneID(Uuid);

impl ZoneID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ZoneID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ZoneID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    pub(crate) fn zone(id: u128, equipment: &[Equipment]) -> Zone {
        Zone {
            id: id.into(),
            name: Name::new("Gym").unwrap(),
            equipment: equipment.to_vec(),
            plates: None,
        }
    }

    #[test]
    fn test_zone_has() {
        let zone = zone(1, &[Equipment::Barbell, Equipment::Bench]);

        assert!(zone.has(Equipment::Barbell));
        assert!(!zone.has(Equipment::Dumbbell));
    }

    #[test]
    fn test_zone_plates_default() {
        assert_eq!(zone(1, &[]).plates(), &STANDARD_PLATES);
    }

    #[test]
    fn test_zone_plates_custom() {
        let zone = Zone {
            plates: Some(vec![20.0, 10.0, 5.0]),
            ..zone(1, &[Equipment::Barbell])
        };

        assert_eq!(zone.plates(), &[20.0, 10.0, 5.0]);
    }

    #[test]
    fn test_zone_plates_empty() {
        let zone = Zone {
            plates: Some(vec![]),
            ..zone(1, &[Equipment::Barbell])
        };

        assert_eq!(zone.custom_plates(), None);
        assert_eq!(zone.plates(), &STANDARD_PLATES);
    }

    #[test]
    fn test_find_zone() {
        let zones = [zone(1, &[]), zone(2, &[Equipment::Kettlebell])];

        assert_eq!(find_zone(&zones, 2.into()), Some(&zones[1]));
        assert_eq!(find_zone(&zones, 3.into()), None);
    }
}
