//! Admissions by weekday and hour of day.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

pub const HOURS: usize = 24;

/// Monday-first row order used by the grid.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// One aggregated cell. `day_of_week` follows the upstream aggregation:
/// 1 is Sunday, 7 is Saturday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub hour: u32,
    #[serde(rename = "dayOfWeek")]
    pub day_of_week: u32,
    pub count: u64,
}

impl HeatmapCell {
    pub fn weekday(&self) -> Option<Weekday> {
        match self.day_of_week {
            1 => Some(Weekday::Sun),
            2..=7 => Some(WEEK[(self.day_of_week - 2) as usize]),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapEnvelope {
    pub data: Vec<HeatmapCell>,
}

/// Dense 7x24 grid of counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapGrid {
    pub rows: Vec<HeatmapRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapRow {
    pub day: String,
    pub counts: Vec<u64>,
}

impl HeatmapGrid {
    /// Cells with an unknown weekday or an hour past 23 are dropped.
    pub fn from_cells(cells: &[HeatmapCell]) -> Self {
        let mut counts = [[0u64; HOURS]; 7];
        for cell in cells {
            let Some(day) = cell.weekday() else {
                continue;
            };
            let hour = cell.hour as usize;
            if hour >= HOURS {
                continue;
            }
            counts[day.num_days_from_monday() as usize][hour] += cell.count;
        }
        let rows = WEEK
            .iter()
            .zip(counts.iter())
            .map(|(day, row)| HeatmapRow {
                day: day.to_string(),
                counts: row.to_vec(),
            })
            .collect();
        Self { rows }
    }

    pub fn get(&self, day: Weekday, hour: usize) -> u64 {
        self.rows
            .get(day.num_days_from_monday() as usize)
            .and_then(|row| row.counts.get(hour))
            .copied()
            .unwrap_or(0)
    }

    pub fn peak(&self) -> Option<(Weekday, usize, u64)> {
        WEEK.iter()
            .flat_map(|day| (0..HOURS).map(move |hour| (*day, hour)))
            .map(|(day, hour)| (day, hour, self.get(day, hour)))
            .filter(|(_, _, count)| *count > 0)
            .max_by_key(|(_, _, count)| *count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sunday_is_day_one() {
        let cell = HeatmapCell {
            hour: 0,
            day_of_week: 1,
            count: 1,
        };
        assert_eq!(cell.weekday(), Some(Weekday::Sun));
        let cell = HeatmapCell {
            day_of_week: 2,
            ..cell
        };
        assert_eq!(cell.weekday(), Some(Weekday::Mon));
    }

    #[test]
    fn grid_places_cells_and_finds_peak() {
        let cells = vec![
            HeatmapCell {
                hour: 14,
                day_of_week: 2,
                count: 40,
            },
            HeatmapCell {
                hour: 3,
                day_of_week: 7,
                count: 5,
            },
            HeatmapCell {
                hour: 30,
                day_of_week: 3,
                count: 99,
            },
            HeatmapCell {
                hour: 1,
                day_of_week: 0,
                count: 99,
            },
        ];
        let grid = HeatmapGrid::from_cells(&cells);
        assert_eq!(grid.rows.len(), 7);
        assert_eq!(grid.rows[0].day, "Mon");
        assert_eq!(grid.get(Weekday::Mon, 14), 40);
        assert_eq!(grid.get(Weekday::Sat, 3), 5);
        assert_eq!(grid.peak(), Some((Weekday::Mon, 14, 40)));
    }
}
