use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use serde::Serialize;
use serde_json::{json, Value};
use tokio::sync::oneshot;
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Filter, Rejection, Reply};
use crate::config::constants::{sleep_duration_millis, MAX_SESSION_NAME_LENGTH, SERVER_SHUTDOWN_GRACE_PERIOD_MS};
use crate::enums::api_error::ApiError;
use crate::enums::session_action::SessionAction;
use crate::errors::{DashboardError, DashboardResult};
use crate::services::backends::remote_backend::RemoteBackend;
use crate::structs::config::server_config::ServerConfig;
use crate::structs::session::create_session_data::CreateSessionData;

/// Forwards `/api/waha/...` to the WAHA service. The API key never leaves this side.
pub struct ProxyServer {
    backend: Arc<RemoteBackend>,
    host: String,
    port: u16,
    local_addr: Option<SocketAddr>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl ProxyServer {
    pub fn new(backend: RemoteBackend, config: &ServerConfig) -> Self {
        Self {
            backend: Arc::new(backend),
            host: config.host.clone(),
            port: config.port,
            local_addr: None,
            shutdown_tx: None,
        }
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.local_addr
    }

    pub async fn start(&mut self) -> DashboardResult<SocketAddr> {
        let ip: IpAddr = self.host.parse().map_err(|_| {
            DashboardError::config_error(
                &format!("'{}' is not an IP address", self.host),
                Some("server.host"),
                Some("use 127.0.0.1 or 0.0.0.0"),
            )
        })?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let routes = Self::routes(Arc::clone(&self.backend));

        let (addr, server) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(SocketAddr::new(ip, self.port), async {
                shutdown_rx.await.ok();
            })
            .map_err(|e| DashboardError::system_error("bind route proxy", &e.to_string()))?;

        tokio::spawn(server);
        self.shutdown_tx = Some(shutdown_tx);
        self.local_addr = Some(addr);

        log::info!("🌐 Route proxy listening on http://{}", addr);
        Ok(addr)
    }

    pub async fn shutdown(&mut self) -> DashboardResult<()> {
        log::info!("🛑 Shutting down route proxy...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx.send(()).map_err(|_|
                DashboardError::system_error("shutdown", "Failed to send shutdown signal")
            )?;
        }

        tokio::time::sleep(sleep_duration_millis(SERVER_SHUTDOWN_GRACE_PERIOD_MS)).await;
        self.local_addr = None;
        log::info!("✅ Route proxy shutdown complete");

        Ok(())
    }

    pub fn routes(backend: Arc<RemoteBackend>) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
        let backend_filter = warp::any().map(move || Arc::clone(&backend));

        let list_sessions = warp::path!("api" / "waha" / "sessions")
            .and(warp::get())
            .and(backend_filter.clone())
            .and_then(list_sessions_handler);

        let create_session = warp::path!("api" / "waha" / "sessions")
            .and(warp::post())
            .and(warp::body::bytes())
            .and(backend_filter.clone())
            .and_then(create_session_handler);

        let get_session = warp::path!("api" / "waha" / "sessions" / String)
            .and(warp::get())
            .and(backend_filter.clone())
            .and_then(get_session_handler);

        let delete_session = warp::path!("api" / "waha" / "sessions" / String)
            .and(warp::delete())
            .and(backend_filter.clone())
            .and_then(delete_session_handler);

        let session_action = warp::path!("api" / "waha" / "sessions" / String / String)
            .and(warp::post())
            .and(backend_filter.clone())
            .and_then(session_action_handler);

        let qr_code = warp::path!("api" / "waha" / "auth" / String / "qr")
            .and(warp::get())
            .and(backend_filter.clone())
            .and_then(qr_code_handler);

        let profile = warp::path!("api" / "waha" / "profile" / String)
            .and(warp::get())
            .and(backend_filter)
            .and_then(profile_handler);

        list_sessions
            .or(create_session)
            .or(get_session)
            .or(delete_session)
            .or(session_action)
            .or(qr_code)
            .or(profile)
            .with(warp::cors()
                .allow_origin("http://127.0.0.1")
                .allow_origin("http://localhost")
                .allow_headers(vec!["content-type"])
                .allow_methods(vec!["GET", "POST", "DELETE"]))
            .with(warp::log("waha_dashboard::proxy"))
    }
}

pub fn is_valid_session_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_SESSION_NAME_LENGTH
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn json_reply<T: Serialize>(body: &T, status: StatusCode) -> Response {
    warp::reply::with_status(warp::reply::json(body), status).into_response()
}

fn remote_status(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::OK)
}

/// Remote status if the service reported one, 500 otherwise.
fn error_reply(error: &ApiError, message: &str, with_details: bool) -> Response {
    log::error!("❌ {}: {}", message, error);
    if let Some(body) = error.body() {
        log::debug!("Remote error body: {}", body.summary());
    }

    let status = error
        .status()
        .and_then(|s| StatusCode::from_u16(s).ok())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = if with_details {
        json!({ "error": message, "details": error.to_string() })
    } else {
        json!({ "error": message })
    };
    json_reply(&body, status)
}

fn invalid_name_reply() -> Response {
    json_reply(&json!({ "error": "Invalid session name" }), StatusCode::BAD_REQUEST)
}

async fn list_sessions_handler(backend: Arc<RemoteBackend>) -> Result<Response, Infallible> {
    log::debug!("🔄 Fetching sessions...");
    match backend.sessions().list_raw().await {
        Ok(response) => Ok(json_reply(&response.data, remote_status(response.status))),
        Err(e) => Ok(error_reply(&e, "Failed to fetch sessions", true)),
    }
}

async fn create_session_handler(body: warp::hyper::body::Bytes, backend: Arc<RemoteBackend>) -> Result<Response, Infallible> {
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    if CreateSessionData::validate_payload(&payload).is_err() {
        return Ok(json_reply(&json!({ "error": "Session name is required" }), StatusCode::BAD_REQUEST));
    }

    match backend.sessions().create_raw(&payload).await {
        Ok(response) => Ok(json_reply(&response.data, remote_status(response.status))),
        Err(e) => Ok(error_reply(&e, "Failed to create session", false)),
    }
}

async fn get_session_handler(name: String, backend: Arc<RemoteBackend>) -> Result<Response, Infallible> {
    if !is_valid_session_name(&name) {
        return Ok(invalid_name_reply());
    }

    match backend.sessions().get(&name).await {
        Ok(response) => Ok(json_reply(&response.data, remote_status(response.status))),
        Err(e) => Ok(error_reply(&e, "Failed to fetch session", false)),
    }
}

async fn delete_session_handler(name: String, backend: Arc<RemoteBackend>) -> Result<Response, Infallible> {
    if !is_valid_session_name(&name) {
        return Ok(invalid_name_reply());
    }

    match backend.sessions().delete(&name).await {
        Ok(response) => {
            // 204 cannot carry the JSON acknowledgement
            let status = match response.status {
                204 => StatusCode::OK,
                other => remote_status(other),
            };
            Ok(json_reply(&json!({ "success": true }), status))
        }
        Err(e) => Ok(error_reply(&e, "Failed to delete session", false)),
    }
}

async fn session_action_handler(name: String, action: String, backend: Arc<RemoteBackend>) -> Result<Response, Rejection> {
    let action: SessionAction = action.parse().map_err(|_| warp::reject::not_found())?;
    if !is_valid_session_name(&name) {
        return Ok(invalid_name_reply());
    }

    let sessions = backend.sessions();
    let result = match action {
        SessionAction::Start => sessions.start(&name).await,
        SessionAction::Stop => sessions.stop(&name).await,
        SessionAction::Restart => sessions.restart(&name).await,
        SessionAction::Logout => sessions.logout(&name).await,
    };

    match result {
        Ok(response) => Ok(json_reply(&response.data, remote_status(response.status))),
        Err(e) => Ok(error_reply(&e, &action.failure_message(), false)),
    }
}

async fn qr_code_handler(name: String, backend: Arc<RemoteBackend>) -> Result<Response, Infallible> {
    if !is_valid_session_name(&name) {
        return Ok(invalid_name_reply());
    }

    match backend.auth().qr_code(&name).await {
        Ok(response) if !response.data.is_empty() => {
            let status = remote_status(response.status);
            let reply = warp::reply::with_header(response.data.data, "content-type", "image/png");
            let reply = warp::reply::with_header(reply, "cache-control", "no-cache");
            Ok(warp::reply::with_status(reply, status).into_response())
        }
        Ok(_) => Ok(json_reply(&json!({ "error": "QR Code not available" }), StatusCode::NOT_FOUND)),
        Err(e) => Ok(error_reply(&e, "Failed to get QR code", false)),
    }
}

async fn profile_handler(name: String, backend: Arc<RemoteBackend>) -> Result<Response, Infallible> {
    if !is_valid_session_name(&name) {
        return Ok(invalid_name_reply());
    }

    match backend.profile_api().get(&name).await {
        Ok(response) => Ok(json_reply(&response.data, remote_status(response.status))),
        Err(e) => Ok(error_reply(&e, "Failed to get profile", false)),
    }
}
