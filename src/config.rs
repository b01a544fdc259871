//! Runtime configuration utilities for mimic-insight.

use std::{
    env,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use anyhow::Context;
use serde::Deserialize;

use crate::hierarchy::LeafRange;

const DEFAULT_API_URL: &str = "https://tfg-api.angeloyo.com";

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Base URL of the MIMIC-IV statistics API, without trailing slash.
    pub api_base_url: String,
    /// Timeout applied to the health probe only.
    pub health_timeout: Duration,
    /// Delay between probes in `health --watch`.
    pub health_interval: Duration,
    /// Root folder for exported snapshots.
    pub outputs_dir: PathBuf,
    /// Initial leaf threshold for the diagnosis icicle.
    pub icicle_min_count: f64,
    /// Initial drug count window for the medications sunburst.
    pub sunburst_range: LeafRange,
    /// Initial link count window for the transfers chord.
    pub chord_range: LeafRange,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve settings through `lookup`, so callers can supply variables
    /// without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("MIMIC_API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        reqwest::Url::parse(&api_base_url)
            .with_context(|| format!("MIMIC_API_URL is not a valid url: {api_base_url}"))?;

        let health_timeout =
            Duration::from_secs(parse_or(&lookup, "HEALTH_TIMEOUT_SECS", 5u64).max(1));
        let health_interval =
            Duration::from_secs(parse_or(&lookup, "HEALTH_INTERVAL_SECS", 30u64).max(1));
        let outputs_dir = lookup("OUTPUTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./outputs"));

        let icicle_min_count = parse_or(&lookup, "ICICLE_MIN_COUNT", 50.0);
        let sunburst_range = LeafRange::between(
            parse_or(&lookup, "SUNBURST_MIN_COUNT", 50_000.0),
            parse_or(&lookup, "SUNBURST_MAX_COUNT", 500_000.0),
        );
        let chord_range = LeafRange::between(
            parse_or(&lookup, "CHORD_MIN_COUNT", 10_000.0),
            parse_or(&lookup, "CHORD_MAX_COUNT", 1_000_000.0),
        );

        Ok(Self {
            api_base_url,
            health_timeout,
            health_interval,
            outputs_dir,
            icicle_min_count,
            sunburst_range,
            chord_range,
        })
    }

    /// Convenience helper for derived output path segments.
    pub fn join_output<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.outputs_dir.join(path)
    }

    pub fn ensure_outputs_dir(&self) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.outputs_dir).context("creating outputs dir")
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
