//! CLI entry-point for the natural-language chat panel.

use anyhow::Result;
use clap::Args as ClapArgs;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{instrument, warn};

use crate::{
    client::{ApiClient, ChatMessage},
    config::Settings,
};

/// Args for the `chat` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Ask a single question; without it, each stdin line is one turn.
    pub message: Option<String>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let client = ApiClient::new(&settings)?;
    let mut history = Vec::new();

    if let Some(message) = args.message {
        println!("{}", turn(&client, &mut history, message).await);
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        println!("{}\n", turn(&client, &mut history, line.to_string()).await);
    }
    Ok(())
}

/// Append the question and the reply to `history`; a failed request is
/// recorded as an `Error` reply so the conversation can continue.
async fn turn(client: &ApiClient, history: &mut Vec<ChatMessage>, message: String) -> String {
    history.push(ChatMessage::user(message));
    let reply = match client.chat(history).await {
        Ok(reply) => reply,
        Err(err) => {
            warn!(%err, "chat request failed");
            "Error".to_string()
        }
    };
    history.push(ChatMessage::assistant(reply.clone()));
    reply
}
