use std::path::PathBuf;
use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum SessionCommand {
    List,
    Create {
        name: String,
        /// Ask the service to start the session right away
        #[clap(long)]
        start: bool,
        /// Webhook URL receiving session events (repeatable)
        #[clap(long = "webhook")]
        webhooks: Vec<String>,
        /// Events delivered to the webhooks
        #[clap(long = "event", default_value = "message")]
        events: Vec<String>,
    },
    Get {
        name: String,
    },
    Start {
        name: String,
        /// Keep polling until the session leaves STARTING
        #[clap(short, long)]
        wait: bool,
    },
    Stop {
        name: String,
    },
    Restart {
        name: String,
        #[clap(short, long)]
        wait: bool,
    },
    Logout {
        name: String,
    },
    Delete {
        name: String,
    },
    Qr {
        name: String,
        #[clap(short, long, default_value = "qr.png")]
        out: PathBuf,
    },
    Profile {
        name: String,
    },
}
