//! Command-line interface wiring for mimic-insight.

use std::io::{self, Write};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use crate::{config::Settings, hierarchy::TreeNode};

pub mod chat;
pub mod chord;
pub mod filter;
pub mod health;
pub mod icicle;
pub mod patient;
pub mod serve;
pub mod series;
pub mod snapshot;
pub mod stats;
pub mod sunburst;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "MIMIC-IV dashboard toolkit", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Health(args) => health::run(args, settings).await,
            Commands::Stats => stats::run(settings).await,
            Commands::Icicle(args) => icicle::run(args, settings).await,
            Commands::Sunburst(args) => sunburst::run(args, settings).await,
            Commands::Chord(args) => chord::run(args, settings).await,
            Commands::Age(args) => series::age(args, settings).await,
            Commands::Heatmap => series::heatmap(settings).await,
            Commands::Icu => series::icu(settings).await,
            Commands::Patient(args) => patient::run(args, settings).await,
            Commands::Patients(args) => patient::list(args, settings).await,
            Commands::Chat(args) => chat::run(args, settings).await,
            Commands::Filter(args) => filter::run(args).await,
            Commands::Snapshot(args) => snapshot::run(args, settings).await,
            Commands::Serve(args) => serve::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Probe the statistics API.
    Health(health::Args),
    /// Headline dashboard counters.
    Stats,
    /// Diagnosis hierarchy filtered by leaf count.
    Icicle(icicle::Args),
    /// Medications by route filtered by a count window.
    Sunburst(sunburst::Args),
    /// Transfers between care units filtered by a count window.
    Chord(chord::Args),
    /// Population pyramid by age group.
    Age(series::AgeArgs),
    /// Admissions by weekday and hour.
    Heatmap,
    /// Length of stay per ICU care unit.
    Icu,
    /// Look up one patient.
    Patient(patient::Args),
    /// List the first patients available.
    Patients(patient::ListArgs),
    /// Ask questions about the database in natural language.
    Chat(chat::Args),
    /// Filter a hierarchy stored in a local JSON file.
    Filter(filter::Args),
    /// Fetch every chart into the outputs directory.
    Snapshot(snapshot::Args),
    /// Serve filtered chart payloads over HTTP.
    Serve(serve::Args),
}

/// How hierarchies are printed.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum TreeFormat {
    /// `{ "data": ... }` as served upstream.
    #[default]
    Json,
    /// Indented outline, heaviest branches first.
    Outline,
    /// One line per leaf: full path and count.
    Paths,
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

pub(crate) fn print_tree(tree: &TreeNode, format: TreeFormat) -> Result<()> {
    match format {
        TreeFormat::Json => print_json(&serde_json::json!({ "data": tree })),
        TreeFormat::Outline => {
            print!("{}", tree.sorted_by_weight());
            Ok(())
        }
        TreeFormat::Paths => {
            let mut stdout = io::stdout().lock();
            for node in tree.flatten().iter().filter(|n| n.is_leaf) {
                writeln!(stdout, "{}\t{}", node.full_path(" > "), node.weight)?;
            }
            Ok(())
        }
    }
}
