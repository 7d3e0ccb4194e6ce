use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use crate::enums::api_error::ApiError;
use crate::enums::session_action::SessionAction;
use crate::structs::config::polling_config::PollingConfig;
use crate::structs::session::create_session_data::CreateSessionData;
use crate::structs::session::profile::Profile;
use crate::structs::session::qr_code::QrCode;
use crate::structs::session::session::Session;
use crate::structs::session::sessions_view::SessionsView;
use crate::traits::session_backend::SessionBackend;
use crate::workers::status_poller::{PollOutcome, StatusPoller};

/// Local changes only happen after the backend confirmed them. QR and profile
/// lookups and poll failures never touch the error slot.
pub struct SessionStore {
    backend: Arc<dyn SessionBackend>,
    state: Arc<watch::Sender<SessionsView>>,
    poller: StatusPoller,
    in_flight: AtomicUsize,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn SessionBackend>, polling: PollingConfig) -> Self {
        let (sender, _) = watch::channel(SessionsView::default());
        Self {
            backend,
            state: Arc::new(sender),
            poller: StatusPoller::new(polling),
            in_flight: AtomicUsize::new(0),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionsView> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> SessionsView {
        self.state.borrow().clone()
    }

    pub fn sessions(&self) -> Vec<Session> {
        self.state.borrow().sessions.clone()
    }

    pub fn session(&self, name: &str) -> Option<Session> {
        self.state.borrow().find(name).cloned()
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// Replace the list wholesale. Failures only populate the error slot.
    pub async fn refresh(&self) {
        self.begin();
        match self.backend.list().await {
            Ok(sessions) => {
                log::debug!("Fetched {} session(s)", sessions.len());
                self.state.send_modify(|view| view.sessions = sessions);
            }
            Err(e) => self.fail(&e, "Failed to fetch sessions"),
        }
        self.finish();
    }

    pub async fn create(&self, data: &CreateSessionData) -> Option<Session> {
        self.begin();
        let result = match self.backend.create(data).await {
            Ok(session) => {
                log::info!("➕ Session '{}' created ({})", session.name, session.status);
                self.state.send_modify(|view| view.upsert(session.clone()));
                Some(session)
            }
            Err(e) => {
                self.fail(&e, "Failed to create session");
                None
            }
        };
        self.finish();
        result
    }

    pub async fn start(&self, name: &str) -> Option<Session> {
        self.transition(name, SessionAction::Start).await
    }

    pub async fn restart(&self, name: &str) -> Option<Session> {
        self.transition(name, SessionAction::Restart).await
    }

    pub async fn stop(&self, name: &str) -> Option<Session> {
        self.transition(name, SessionAction::Stop).await
    }

    pub async fn logout(&self, name: &str) -> Option<Session> {
        self.transition(name, SessionAction::Logout).await
    }

    pub async fn delete(&self, name: &str) -> bool {
        self.begin();
        let deleted = match self.backend.delete(name).await {
            Ok(()) => {
                self.poller.cancel(name);
                self.state.send_modify(|view| {
                    view.remove(name);
                });
                log::info!("🗑️ Session '{}' deleted", name);
                true
            }
            Err(e) => {
                self.fail(&e, "Failed to delete session");
                false
            }
        };
        self.finish();
        deleted
    }

    /// Fresh pairing image on every call. Failures are logged and stay local to the call.
    pub async fn qr_code(&self, name: &str) -> Option<QrCode> {
        match self.backend.qr_code(name).await {
            Ok(qr) if !qr.is_empty() => Some(qr),
            Ok(_) => {
                log::warn!("QR code for '{}' came back empty", name);
                None
            }
            Err(e) => {
                log::warn!("Failed to fetch QR code for '{}': {}", name, e);
                None
            }
        }
    }

    pub async fn profile(&self, name: &str) -> Option<Profile> {
        match self.backend.profile(name).await {
            Ok(profile) => Some(profile),
            Err(e) => {
                log::warn!("Failed to fetch profile for '{}': {}", name, e);
                None
            }
        }
    }

    pub fn active_polls(&self) -> Vec<String> {
        self.poller.active()
    }

    pub fn cancel_poll(&self, name: &str) -> bool {
        self.poller.cancel(name)
    }

    pub fn cancel_all_polls(&self) -> usize {
        self.poller.cancel_all()
    }

    pub async fn wait_for_poll(&self, name: &str) -> Option<PollOutcome> {
        self.poller.wait(name).await
    }

    pub async fn wait_for_all_polls(&self) -> Vec<(String, Option<PollOutcome>)> {
        self.poller.wait_all().await
    }

    async fn transition(&self, name: &str, action: SessionAction) -> Option<Session> {
        self.begin();
        let result = match action {
            SessionAction::Start => self.backend.start(name).await,
            SessionAction::Stop => self.backend.stop(name).await,
            SessionAction::Restart => self.backend.restart(name).await,
            SessionAction::Logout => self.backend.logout(name).await,
        };

        let outcome = match result {
            Ok(session) => {
                log::info!("{} Session '{}' {} -> {}", session.status.emoji(), name, action, session.status);
                self.state.send_modify(|view| {
                    view.replace(session.clone());
                });
                Some(session)
            }
            Err(e) => {
                self.fail(&e, &action.failure_message());
                None
            }
        };
        self.finish();

        if outcome.is_some() {
            if action.needs_status_poll() {
                self.poller.spawn(name, Arc::clone(&self.backend), Arc::clone(&self.state));
            } else {
                self.poller.cancel(name);
            }
        }
        outcome
    }

    fn begin(&self) {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        self.state.send_modify(|view| {
            view.loading = true;
            view.error = None;
        });
    }

    fn finish(&self) {
        let remaining = self.in_flight.fetch_sub(1, Ordering::SeqCst).saturating_sub(1);
        self.state.send_modify(|view| view.loading = remaining > 0);
    }

    fn fail(&self, error: &ApiError, fallback: &str) {
        let message = match error {
            ApiError::Status { .. } => fallback.to_string(),
            other => other.to_string(),
        };
        log::error!("❌ {}: {}", fallback, error);
        self.state.send_modify(|view| view.error = Some(message));
    }
}
