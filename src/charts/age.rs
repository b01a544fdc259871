//! Population pyramid by age group and gender.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeBucket {
    pub age_group: String,
    pub gender: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeDistributionEnvelope {
    pub data: Vec<AgeBucket>,
    #[serde(default)]
    pub total_records: Option<u64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub detailed: Option<bool>,
}

/// One pyramid bar pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PyramidRow {
    pub age_group: String,
    pub male: u64,
    pub female: u64,
}

/// Fold buckets into pyramid rows ordered by the leading number of the age
/// group label (`"18-30"`, `"80+"`, `"42"`). Genders other than M/F are
/// ignored.
pub fn pyramid(buckets: &[AgeBucket]) -> Vec<PyramidRow> {
    let mut rows: IndexMap<&str, PyramidRow> = IndexMap::new();
    for bucket in buckets {
        let row = rows
            .entry(bucket.age_group.as_str())
            .or_insert_with(|| PyramidRow {
                age_group: bucket.age_group.clone(),
                male: 0,
                female: 0,
            });
        match bucket.gender.as_str() {
            "M" => row.male += bucket.count,
            "F" => row.female += bucket.count,
            _ => {}
        }
    }
    let mut rows: Vec<PyramidRow> = rows.into_values().collect();
    rows.sort_by_key(|row| leading_number(&row.age_group));
    rows
}

fn leading_number(label: &str) -> u32 {
    label
        .chars()
        .take_while(char::is_ascii_digit)
        .collect::<String>()
        .parse()
        .unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(age_group: &str, gender: &str, count: u64) -> AgeBucket {
        AgeBucket {
            age_group: age_group.into(),
            gender: gender.into(),
            count,
        }
    }

    #[test]
    fn rows_are_numerically_ordered() {
        let rows = pyramid(&[
            bucket("80+", "F", 7),
            bucket("18-30", "M", 3),
            bucket("18-30", "F", 4),
            bucket("0-18", "M", 1),
            bucket("0-18", "X", 50),
        ]);
        let labels: Vec<_> = rows.iter().map(|r| r.age_group.as_str()).collect();
        assert_eq!(labels, vec!["0-18", "18-30", "80+"]);
        assert_eq!(rows[0].male, 1);
        assert_eq!(rows[0].female, 0);
        assert_eq!(rows[1].male + rows[1].female, 7);
    }
}
