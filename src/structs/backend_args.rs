use clap::Args;

/// Where session commands are sent.
#[derive(Args, Debug, Clone, Default)]
pub struct BackendArgs {
    /// Talk to the WAHA service directly (requires the API key in the environment)
    #[clap(long)]
    pub direct: bool,

    /// Route proxy endpoint, defaults to the configured server address
    #[clap(long)]
    pub endpoint: Option<String>,
}
