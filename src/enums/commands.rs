use clap::Subcommand;
use crate::enums::session_command::SessionCommand;
use crate::structs::backend_args::BackendArgs;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Run the route proxy in front of the WAHA service
    Serve {
        #[clap(short, long)]
        port: Option<u16>,
        #[clap(long)]
        host: Option<String>,
    },
    /// Manage sessions
    Sessions {
        #[clap(flatten)]
        backend: BackendArgs,
        #[clap(subcommand)]
        command: SessionCommand,
    },
}
