//! CLI entry-point for exporting every chart payload to disk.

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use futures::stream::{self, StreamExt};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    charts::{heatmap::HOURS, pyramid, HeatmapGrid},
    client::ApiClient,
    config::Settings,
    hierarchy::{medication_hierarchy, TreeEnvelope},
    view::LoadState,
};

/// Args for the `snapshot` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Charts fetched at the same time.
    #[arg(long, default_value_t = 4)]
    pub concurrency: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chart {
    Stats,
    Diagnoses,
    Medications,
    Transfers,
    Age,
    Heatmap,
    Icu,
}

impl Chart {
    const ALL: [Chart; 7] = [
        Chart::Stats,
        Chart::Diagnoses,
        Chart::Medications,
        Chart::Transfers,
        Chart::Age,
        Chart::Heatmap,
        Chart::Icu,
    ];

    fn stem(self) -> &'static str {
        match self {
            Chart::Stats => "dashboard-stats",
            Chart::Diagnoses => "diagnosis-icicle",
            Chart::Medications => "medications-sunburst",
            Chart::Transfers => "hospital-transfers-chord",
            Chart::Age => "age-distribution",
            Chart::Heatmap => "admission-heatmap",
            Chart::Icu => "icu-stay-duration",
        }
    }
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    settings.ensure_outputs_dir()?;
    let client = ApiClient::new(&settings)?;

    let outcomes: Vec<(Chart, LoadState<Vec<PathBuf>>)> = stream::iter(Chart::ALL)
        .map(|chart| {
            let client = client.clone();
            let settings = settings.clone();
            async move {
                info!(chart = chart.stem(), "fetching chart");
                let state = match export(chart, &client, &settings).await {
                    Ok(paths) => LoadState::Ready(paths),
                    Err(err) => {
                        let message = format!("{err:#}");
                        warn!(chart = chart.stem(), %message, "chart export failed");
                        LoadState::Failed(message)
                    }
                };
                (chart, state)
            }
        })
        .buffer_unordered(args.concurrency.max(1))
        .collect()
        .await;

    let mut index: IndexMap<&str, LoadState<Vec<PathBuf>>> = IndexMap::new();
    for chart in Chart::ALL {
        if let Some((_, state)) = outcomes.iter().find(|(c, _)| *c == chart) {
            index.insert(chart.stem(), state.clone());
        }
    }
    let failed = index.values().filter(|s| s.error().is_some()).count();
    let index_path = settings.join_output("index.json");
    write_json(&index_path, &index)?;
    info!(path = %index_path.display(), failed, "snapshot complete");
    Ok(())
}

async fn export(chart: Chart, client: &ApiClient, settings: &Settings) -> Result<Vec<PathBuf>> {
    let json_path = settings.join_output(format!("{}.json", chart.stem()));
    let csv_path = settings.join_output(format!("{}.csv", chart.stem()));
    match chart {
        Chart::Stats => {
            write_json(&json_path, &client.dashboard_stats().await?)?;
            Ok(vec![json_path])
        }
        Chart::Diagnoses => {
            let tree = client.diagnosis_icicle(1).await?;
            write_json(&json_path, &TreeEnvelope { data: tree })?;
            Ok(vec![json_path])
        }
        Chart::Medications => {
            let routes = client.medications().await?;
            let tree = medication_hierarchy(&routes);
            write_json(&json_path, &TreeEnvelope { data: tree })?;
            Ok(vec![json_path])
        }
        Chart::Transfers => {
            write_json(&json_path, &client.transfers().await?)?;
            Ok(vec![json_path])
        }
        Chart::Age => {
            let envelope = client.age_distribution(false).await?;
            let rows = pyramid(&envelope.data);
            write_json(&json_path, &envelope)?;
            write_csv(&csv_path, &rows)?;
            Ok(vec![json_path, csv_path])
        }
        Chart::Heatmap => {
            let cells = client.admission_heatmap().await?;
            let grid = HeatmapGrid::from_cells(&cells);
            write_json(&json_path, &cells)?;
            write_heatmap_csv(&csv_path, &grid)?;
            Ok(vec![json_path, csv_path])
        }
        Chart::Icu => {
            let stays = client.icu_stays().await?;
            write_json(&json_path, &stays)?;
            write_csv(&csv_path, &stays)?;
            Ok(vec![json_path, csv_path])
        }
    }
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {path:?}"))?;
    serde_json::to_writer_pretty(file, value)?;
    info!(path = %path.display(), "saved json");
    Ok(())
}

fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("create {path:?}"))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    info!(path = %path.display(), rows = rows.len(), "saved csv");
    Ok(())
}

fn write_heatmap_csv(path: &Path, grid: &HeatmapGrid) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("create {path:?}"))?;
    let header =
        std::iter::once("day".to_string()).chain((0..HOURS).map(|hour| hour.to_string()));
    writer.write_record(header)?;
    for row in &grid.rows {
        let record = std::iter::once(row.day.clone())
            .chain(row.counts.iter().map(u64::to_string));
        writer.write_record(record)?;
    }
    writer.flush()?;
    Ok(())
}
