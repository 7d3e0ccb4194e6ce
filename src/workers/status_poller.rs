use std::sync::Arc;
use dashmap::DashMap;
use futures::future::join_all;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use uuid::Uuid;
use crate::enums::session_status::SessionStatus;
use crate::structs::config::polling_config::PollingConfig;
use crate::structs::session::sessions_view::SessionsView;
use crate::traits::session_backend::SessionBackend;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    Settled(SessionStatus),
    Exhausted,
    FetchFailed,
}

struct PollChain {
    id: Uuid,
    handle: JoinHandle<PollOutcome>,
}

/// Background status checks after start/restart, at most one chain per session name.
pub struct StatusPoller {
    chains: Arc<DashMap<String, PollChain>>,
    config: PollingConfig,
}

impl StatusPoller {
    pub fn new(config: PollingConfig) -> Self {
        Self {
            chains: Arc::new(DashMap::new()),
            config,
        }
    }

    pub fn config(&self) -> PollingConfig {
        self.config
    }

    pub fn spawn(&self, name: &str, backend: Arc<dyn SessionBackend>, state: Arc<watch::Sender<SessionsView>>) {
        let id = Uuid::new_v4();
        let chains = Arc::clone(&self.chains);
        let config = self.config;
        let key = name.to_string();

        // the chain may only clean up after its own registry entry exists
        let (registered_tx, registered_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            if registered_rx.await.is_err() {
                return PollOutcome::FetchFailed;
            }
            let outcome = run_chain(backend.as_ref(), &state, &key, config).await;
            // a newer chain may already own this slot
            chains.remove_if(&key, |_, chain| chain.id == id);
            outcome
        });

        log::debug!("🔁 Poll chain {} started for session '{}'", id, name);
        if let Some(previous) = self.chains.insert(name.to_string(), PollChain { id, handle }) {
            log::debug!("Replacing poll chain {} for session '{}'", previous.id, name);
            previous.handle.abort();
        }
        registered_tx.send(()).ok();
    }

    pub fn cancel(&self, name: &str) -> bool {
        match self.chains.remove(name) {
            Some((_, chain)) => {
                chain.handle.abort();
                log::debug!("🛑 Poll chain {} for session '{}' cancelled", chain.id, name);
                true
            }
            None => false,
        }
    }

    pub fn cancel_all(&self) -> usize {
        let names: Vec<String> = self.chains.iter().map(|entry| entry.key().clone()).collect();
        names.iter().filter(|name| self.cancel(name)).count()
    }

    pub fn active(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .chains
            .iter()
            .filter(|entry| !entry.value().handle.is_finished())
            .map(|entry| entry.key().clone())
            .collect();
        names.sort();
        names
    }

    /// Wait for the chain of `name` to end. `None` if there is none or it was aborted.
    pub async fn wait(&self, name: &str) -> Option<PollOutcome> {
        let (_, chain) = self.chains.remove(name)?;
        chain.handle.await.ok()
    }

    pub async fn wait_all(&self) -> Vec<(String, Option<PollOutcome>)> {
        let names: Vec<String> = self.chains.iter().map(|entry| entry.key().clone()).collect();
        let chains: Vec<(String, PollChain)> = names
            .into_iter()
            .filter_map(|name| self.chains.remove(&name))
            .collect();

        let (names, handles): (Vec<String>, Vec<JoinHandle<PollOutcome>>) =
            chains.into_iter().map(|(name, chain)| (name, chain.handle)).unzip();
        let outcomes = join_all(handles).await;

        names
            .into_iter()
            .zip(outcomes.into_iter().map(Result::ok))
            .collect()
    }
}

impl Drop for StatusPoller {
    fn drop(&mut self) {
        let cancelled = self.cancel_all();
        if cancelled > 0 {
            log::debug!("Cancelled {} poll chain(s) on teardown", cancelled);
        }
    }
}

async fn run_chain(
    backend: &dyn SessionBackend,
    state: &watch::Sender<SessionsView>,
    name: &str,
    config: PollingConfig,
) -> PollOutcome {
    let mut attempts: u32 = 0;

    loop {
        tokio::time::sleep(config.interval()).await;

        match backend.get(name).await {
            Ok(session) => {
                let status = session.status;
                state.send_modify(|view| {
                    view.replace(session);
                });

                if !status.is_transient() {
                    log::info!("{} Session '{}' is now {}", status.emoji(), name, status);
                    return PollOutcome::Settled(status);
                }
            }
            Err(e) => {
                log::error!("Error polling session status for '{}': {}", name, e);
                return PollOutcome::FetchFailed;
            }
        }

        attempts += 1;
        if attempts >= config.max_attempts {
            log::warn!("⏰ Session '{}' still STARTING after {} checks, giving up", name, attempts);
            return PollOutcome::Exhausted;
        }
    }
}
