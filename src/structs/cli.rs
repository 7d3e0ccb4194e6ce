use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "waha-dashboard")]
#[clap(about = "Manage WAHA messaging sessions", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
