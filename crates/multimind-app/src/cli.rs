use std::path::PathBuf;

use clap::Parser;
use multimind_config::is_known_service;

/// MultiMind: several AI chat services side by side, with a scratch clipboard.
#[derive(Parser, Debug)]
#[command(name = "multimind", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (a tracing directive, e.g. `multimind=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Service to show at startup (gemini, chatgpt, claude, ...).
    #[arg(short = 's', long)]
    pub service: Option<String>,
}

impl Args {
    /// The service shown first: `--service` if it names a built-in
    /// service, else the configured default.
    pub fn startup_service(&self, configured: &str) -> String {
        match self.service.as_deref() {
            Some(key) if is_known_service(key) => key.to_string(),
            Some(key) => {
                tracing::warn!(service = %key, "unknown --service, using {configured}");
                configured.to_string()
            }
            None => configured.to_string(),
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
