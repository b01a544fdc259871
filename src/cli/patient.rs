//! CLI entry-points for patient lookup.

use anyhow::{bail, Result};
use clap::Args as ClapArgs;
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    cli::print_json,
    client::{ApiClient, PatientRecord},
    config::Settings,
};

/// Args for the `patient` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// MIMIC-IV subject_id.
    pub subject_id: String,
    /// Also request the generated clinical summary.
    #[arg(long)]
    pub summary: bool,
}

/// Args for the `patients` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct ListArgs {
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}

#[derive(Debug, Serialize)]
struct PatientView {
    #[serde(flatten)]
    record: PatientRecord,
    in_hospital_deaths: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    if args.subject_id.trim().is_empty() {
        bail!("subject_id must not be empty");
    }
    let client = ApiClient::new(&settings)?;
    let record = match client.patient(&args.subject_id).await {
        Ok(record) => record,
        Err(err) => {
            warn!(%err, "patient lookup failed");
            bail!(err.user_message());
        }
    };
    info!(
        subject_id = record.patient.subject_id,
        admissions = record.admissions.len(),
        "loaded patient"
    );

    let summary = if args.summary {
        match client.summarize_patient(&record).await {
            Ok(text) => Some(text),
            Err(err) => {
                warn!(%err, "summary unavailable");
                None
            }
        }
    } else {
        None
    };

    let in_hospital_deaths = record.in_hospital_deaths();
    print_json(&PatientView {
        record,
        in_hospital_deaths,
        summary,
    })
}

#[instrument(skip(settings))]
pub async fn list(args: ListArgs, settings: Settings) -> Result<()> {
    let client = ApiClient::new(&settings)?;
    let list = client.patients(args.limit).await?;
    info!(count = list.patients.len(), "listed patients");
    print_json(&list)
}
