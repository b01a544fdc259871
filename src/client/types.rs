//! Patient, chat and health payloads.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Patient {
    pub subject_id: u64,
    pub gender: String,
    pub anchor_age: u32,
    pub anchor_year: i32,
    pub anchor_year_group: String,
    /// Date of death, when recorded.
    pub dod: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Admission {
    pub subject_id: u64,
    pub hadm_id: u64,
    pub admittime: String,
    pub dischtime: String,
    pub deathtime: Option<String>,
    pub admission_type: Option<String>,
    pub admission_location: Option<String>,
    pub discharge_location: Option<String>,
    pub insurance: Option<String>,
    pub language: Option<String>,
    pub marital_status: Option<String>,
    pub race: Option<String>,
    pub hospital_expire_flag: u8,
}

impl Admission {
    pub fn admitted_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.admittime, TIMESTAMP_FORMAT).ok()
    }

    pub fn discharged_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.dischtime, TIMESTAMP_FORMAT).ok()
    }

    /// Fractional days between admission and discharge.
    pub fn length_of_stay_days(&self) -> Option<f64> {
        let stay = self.discharged_at()? - self.admitted_at()?;
        Some(stay.num_minutes() as f64 / (24.0 * 60.0))
    }

    pub fn died_in_hospital(&self) -> bool {
        self.hospital_expire_flag == 1
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Diagnosis {
    pub subject_id: u64,
    pub hadm_id: u64,
    pub seq_num: u32,
    pub icd_code: String,
    pub icd_version: u8,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Procedure {
    pub subject_id: u64,
    pub hadm_id: u64,
    pub seq_num: u32,
    pub icd_code: String,
    pub icd_version: u8,
    pub chartdate: Option<String>,
    pub description: Option<String>,
}

/// Full record returned by the patient lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub patient: Patient,
    #[serde(default)]
    pub admissions: Vec<Admission>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_admissions: Option<usize>,
    #[serde(default)]
    pub diagnoses: Vec<Diagnosis>,
    #[serde(default)]
    pub procedures: Vec<Procedure>,
}

impl PatientRecord {
    pub fn in_hospital_deaths(&self) -> usize {
        self.admissions.iter().filter(|a| a.died_in_hospital()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientList {
    pub patients: Vec<Patient>,
    #[serde(default)]
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub history: &'a [ChatMessage],
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChatReply {
    pub response: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SummaryReply {
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}
