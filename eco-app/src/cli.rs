use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "eco")]
#[command(about = "Recife Sustentável - cliente do programa de recompensas por reciclagem")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Run a debug command instead of the interactive client
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
