/// Plate denominations in kg used when a zone defines no plates of its own.
pub const STANDARD_PLATES: [f32; 7] = [25.0, 20.0, 15.0, 10.0, 5.0, 2.5, 1.25];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateCount {
    pub plate: f32,
    pub count: u32,
}

/// Plates to load on each side of a barbell.
#[derive(Debug, Clone, PartialEq)]
pub enum PlateLoading {
    /// The target weight is lower than the bar itself.
    UnderBar { deficit: f32 },
    BarOnly,
    /// Plates for one side, heaviest first. The sum may fall short of the target if it cannot
    /// be represented by the available plates.
    Plates(Vec<PlateCount>),
}

/// Split `total` into the bar and the plates of one side.
///
/// Weights are handled in steps of 0.01 kg. Plates are taken greedily from the heaviest to the
/// lightest denomination. A remainder which cannot be covered by the lightest plate is dropped,
/// so the loaded weight never exceeds `total`.
#[must_use]
pub fn allocate(total: f32, bar: f32, plates: &[f32]) -> PlateLoading {
    let total_hundredths = hundredths(total);
    let bar_hundredths = hundredths(bar);

    if total_hundredths < bar_hundredths {
        #[allow(clippy::cast_precision_loss)]
        let deficit = (bar_hundredths - total_hundredths) as f32 / 100.0;
        return PlateLoading::UnderBar { deficit };
    }

    if total_hundredths == bar_hundredths {
        return PlateLoading::BarOnly;
    }

    let mut denominations = plates
        .iter()
        .map(|p| (hundredths(*p), *p))
        .filter(|(h, _)| *h > 0)
        .collect::<Vec<_>>();
    denominations.sort_by(|a, b| b.0.cmp(&a.0));
    denominations.dedup_by_key(|(h, _)| *h);

    let mut remaining = (total_hundredths - bar_hundredths) / 2;
    let mut result = vec![];

    for (plate_hundredths, plate) in denominations {
        let count = remaining / plate_hundredths;
        if count > 0 {
            remaining -= count * plate_hundredths;
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            result.push(PlateCount {
                plate,
                count: count as u32,
            });
        }
    }

    PlateLoading::Plates(result)
}

/// Total weight of the bar loaded with `plates` on both sides.
#[must_use]
pub fn loaded_weight(bar: f32, plates: &[PlateCount]) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    let side = plates
        .iter()
        .map(|p| p.count as f32 * p.plate)
        .sum::<f32>();
    round(bar + 2.0 * side)
}

fn round(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

#[allow(clippy::cast_possible_truncation)]
fn hundredths(value: f32) -> i64 {
    (f64::from(value) * 100.0).round() as i64
}
