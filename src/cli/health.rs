//! CLI entry-point for probing the statistics API.

use anyhow::{bail, Result};
use clap::Args as ClapArgs;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, instrument, warn};

use crate::{client::ApiClient, config::Settings};

/// Args for the `health` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Keep probing at the configured interval until interrupted.
    #[arg(long)]
    pub watch: bool,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let client = ApiClient::new(&settings)?;
    if !args.watch {
        let up = client.is_up().await;
        println!("{}", if up { "up" } else { "down" });
        if !up {
            bail!("{} is not answering", settings.api_base_url);
        }
        return Ok(());
    }

    let mut ticker = interval(settings.health_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last = None;
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let up = client.is_up().await;
                if last != Some(up) {
                    if up {
                        info!(url = %settings.api_base_url, "api is up");
                    } else {
                        warn!(url = %settings.api_base_url, "api is down");
                    }
                    last = Some(up);
                }
            }
            _ = &mut ctrl_c => {
                info!("stopping health watch");
                return Ok(());
            }
        }
    }
}
