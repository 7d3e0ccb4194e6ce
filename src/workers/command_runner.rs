use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::enums::session_command::SessionCommand;
use crate::errors::{DashboardError, DashboardResult};
use crate::services::backends::proxy_backend::ProxyBackend;
use crate::services::backends::remote_backend::RemoteBackend;
use crate::services::remote::remote_client;
use crate::services::session_store::SessionStore;
use crate::structs::backend_args::BackendArgs;
use crate::structs::config::config::Config;
use crate::structs::session::create_session_data::CreateSessionData;
use crate::structs::session::session::Session;
use crate::traits::session_backend::SessionBackend;
use crate::ui::proxy_server::ProxyServer;
use crate::workers::status_poller::PollOutcome;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> DashboardResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command().await,
            Commands::Serve { port, host } => self.serve_command(port, host).await,
            Commands::Sessions { backend, command } => self.sessions_command(backend, command).await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    async fn init_command(&self) -> DashboardResult<()> {
        log::info!("🚀 Initializing waha-dashboard configuration...");

        let path = ConfigManager::default_path();
        match ConfigManager::create_sample_config(&path) {
            Ok(_) => {
                log::info!("✅ Configuration file created successfully!");
                log::info!("📝 Edit {} to point at your WAHA service.", path.display());
                log::info!("🔑 Export the API key before running 'waha-dashboard serve'.");
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                return Err(e);
            }
        }

        Ok(())
    }

    async fn serve_command(&self, port: Option<u16>, host: Option<String>) -> DashboardResult<()> {
        let mut config = Self::load_config()?;
        if let Some(port) = port {
            config.server.port = port;
        }
        if let Some(host) = host {
            config.server.host = host;
        }

        let api_key = ConfigManager::api_key(&config)?;
        log::info!("🔑 {} is set, forwarding to {}", config.remote.api_key_env, config.remote.base_url);

        let backend = RemoteBackend::new(remote_client(&config.remote, &api_key));
        let mut server = ProxyServer::new(backend, &config.server);
        let addr = server.start().await?;

        log::info!("🚀 Sessions API available at http://{}/api/waha/sessions", addr);
        log::info!("⏹️ Press Ctrl+C to stop the proxy");

        tokio::signal::ctrl_c()
            .await
            .map_err(|e| DashboardError::system_error("wait for Ctrl+C", &e.to_string()))?;

        server.shutdown().await
    }

    async fn sessions_command(&self, args: BackendArgs, command: SessionCommand) -> DashboardResult<()> {
        let config = Self::load_config()?;
        let backend = Self::backend_for(&config, &args)?;
        let store = SessionStore::new(backend, config.polling);

        match command {
            SessionCommand::List => {
                store.refresh().await;
                Self::check_store(&store, "list sessions")?;
                Self::print_sessions(&store.sessions());
            }
            SessionCommand::Create { name, start, webhooks, events } => {
                let mut data = CreateSessionData::new(&name).with_start(start);
                for url in &webhooks {
                    data = data.with_webhook(url, &events);
                }
                let session = store.create(&data).await;
                let session = Self::require(&store, session, "create session")?;
                println!("{} {} created ({})", session.status.emoji(), session.name, session.status);
            }
            SessionCommand::Get { name } => {
                store.refresh().await;
                Self::check_store(&store, "fetch sessions")?;
                let session = store.session(&name).ok_or_else(|| {
                    let snapshot = store.snapshot();
                    DashboardError::session_not_found(&name, snapshot.names())
                })?;
                println!("{}", serde_json::to_string_pretty(&session)?);
            }
            SessionCommand::Start { name, wait } => {
                self.transition_command(&store, &name, wait, false).await?;
            }
            SessionCommand::Restart { name, wait } => {
                self.transition_command(&store, &name, wait, true).await?;
            }
            SessionCommand::Stop { name } => {
                let session = store.stop(&name).await;
                let session = Self::require(&store, session, "stop session")?;
                println!("{} {} is {}", session.status.emoji(), session.name, session.status);
            }
            SessionCommand::Logout { name } => {
                let session = store.logout(&name).await;
                let session = Self::require(&store, session, "log out session")?;
                println!("{} {} is {}", session.status.emoji(), session.name, session.status);
            }
            SessionCommand::Delete { name } => {
                if !store.delete(&name).await {
                    return Err(Self::store_failure(&store, "delete session"));
                }
                println!("🗑️ {} deleted", name);
            }
            SessionCommand::Qr { name, out } => {
                self.qr_command(&store, &name, &out).await?;
            }
            SessionCommand::Profile { name } => {
                let profile = store.profile(&name).await.ok_or_else(|| {
                    DashboardError::operation_failed("fetch profile", &format!("no profile available for '{}'", name))
                })?;
                println!("{}", serde_json::to_string_pretty(&profile)?);
            }
        }

        Ok(())
    }

    async fn transition_command(&self, store: &SessionStore, name: &str, wait: bool, restart: bool) -> DashboardResult<()> {
        // seed the list so background status checks have an entry to update
        store.refresh().await;

        let (session, operation) = if restart {
            (store.restart(name).await, "restart session")
        } else {
            (store.start(name).await, "start session")
        };
        let session = Self::require(store, session, operation)?;
        println!("{} {} is {}", session.status.emoji(), session.name, session.status);

        if !wait || !session.status.is_transient() {
            store.cancel_all_polls();
            return Ok(());
        }

        log::info!("⏳ Waiting for '{}' to leave {}...", name, session.status);
        match store.wait_for_poll(name).await {
            Some(PollOutcome::Settled(status)) => {
                println!("{} {} is {}", status.emoji(), name, status);
                Ok(())
            }
            Some(PollOutcome::Exhausted) => Err(DashboardError::operation_failed(
                operation,
                &format!("'{}' did not leave STARTING in time", name),
            )),
            Some(PollOutcome::FetchFailed) | None => Err(DashboardError::operation_failed(
                operation,
                &format!("lost track of '{}' while it was starting", name),
            )),
        }
    }

    async fn qr_command(&self, store: &SessionStore, name: &str, out: &Path) -> DashboardResult<()> {
        let qr = store.qr_code(name).await.ok_or_else(|| {
            DashboardError::operation_failed("fetch QR code", &format!("QR code not available for '{}'", name))
        })?;

        qr.write_to(out)?;
        println!("📷 QR code for {} written to {} ({} bytes)", name, out.display(), qr.len());
        Ok(())
    }

    fn load_config() -> DashboardResult<Config> {
        ConfigManager::load().map_err(|e| {
            log::error!("❌ Failed to load configuration: {}", e);
            log::error!("💡 Run 'waha-dashboard init' to create a configuration file.");
            e
        })
    }

    fn backend_for(config: &Config, args: &BackendArgs) -> DashboardResult<Arc<dyn SessionBackend>> {
        if args.direct {
            let api_key = ConfigManager::api_key(config)?;
            log::debug!("Talking to {} directly", config.remote.base_url);
            return Ok(Arc::new(RemoteBackend::new(remote_client(&config.remote, &api_key))));
        }

        let endpoint = args.endpoint.clone().unwrap_or_else(|| config.server.endpoint());
        let backend = ProxyBackend::new(&endpoint);
        log::debug!("Talking to route proxy at {}", backend.base_url());
        Ok(Arc::new(backend))
    }

    fn check_store(store: &SessionStore, operation: &str) -> DashboardResult<()> {
        match store.error() {
            Some(message) => Err(DashboardError::operation_failed(operation, &message)),
            None => Ok(()),
        }
    }

    fn require<T>(store: &SessionStore, value: Option<T>, operation: &str) -> DashboardResult<T> {
        value.ok_or_else(|| Self::store_failure(store, operation))
    }

    fn store_failure(store: &SessionStore, operation: &str) -> DashboardError {
        let message = store.error().unwrap_or_else(|| "unknown error".to_string());
        DashboardError::operation_failed(operation, &message)
    }

    fn print_sessions(sessions: &[Session]) {
        if sessions.is_empty() {
            println!("No sessions yet. Create one with 'waha-dashboard sessions create <name>'.");
            return;
        }

        println!("{:<24} {:<14} {}", "NAME", "STATUS", "ACCOUNT");
        for session in sessions {
            let account = session.me.as_ref().map(|me| me.label().to_string()).unwrap_or_else(|| "-".to_string());
            println!("{:<24} {} {:<12} {}", session.name, session.status.emoji(), session.status.as_str(), account);
        }
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
