//! CLI argument parsing via clap.

use clap::Parser;

/// Interactive troubleshooting helper for a small catalog of games.
#[derive(Debug, Parser)]
#[command(name = "medic", version)]
pub struct Args {
    /// Path to config file (default: ./medic.toml or ~/.config/medic/medic.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}
