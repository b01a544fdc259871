//! Chart payloads and the reshaping the dashboard applies before drawing.

pub mod age;
pub mod chord;
pub mod heatmap;

use serde::{Deserialize, Serialize};

pub use age::{pyramid, AgeBucket, PyramidRow};
pub use chord::{TransferGraph, TransferLink, UnitTotals};
pub use heatmap::{HeatmapCell, HeatmapGrid};

/// Headline counters on the landing dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_patients: u64,
    pub total_admissions: u64,
    pub mortality_rate: f64,
    #[serde(default)]
    pub total_deaths: u64,
    pub total_icu_stays: u64,
}

/// Length of stay summary for one ICU care unit, in days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IcuStay {
    pub careunit: String,
    pub avg_stay_days: f64,
    pub total_stays: u64,
    pub min_stay: f64,
    pub max_stay: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IcuStayEnvelope {
    pub data: Vec<IcuStay>,
    #[serde(default)]
    pub total_units: Option<usize>,
    #[serde(default)]
    pub description: Option<String>,
}
