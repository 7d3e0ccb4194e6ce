#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use serde_json::{json, Value};
use warp::http::{Method, Response, StatusCode};
use warp::hyper::body::Bytes;
use warp::hyper::Body;
use warp::path::FullPath;
use warp::Filter;
use waha_dashboard::services::backends::remote_backend::RemoteBackend;
use waha_dashboard::services::remote::remote_client;
use waha_dashboard::structs::config::remote_config::RemoteConfig;
use waha_dashboard::structs::config::server_config::ServerConfig;
use waha_dashboard::ui::proxy_server::ProxyServer;

pub const API_KEY: &str = "test-key";
pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0, 0, 0, 13];

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: String,
    pub api_key: Option<String>,
    pub body: Vec<u8>,
}

#[derive(Default)]
struct MockState {
    requests: Mutex<Vec<RecordedRequest>>,
    status_checks: AtomicUsize,
    starting_checks: usize,
}

/// Stand-in for the WAHA service under `/api`.
///
/// `GET /sessions/{name}` answers STARTING for the first `starting_checks`
/// calls and WORKING afterwards. `missing` is unknown, `locked` refuses to be
/// deleted, `paired` has no QR code to hand out.
pub struct MockRemote {
    pub addr: SocketAddr,
    state: Arc<MockState>,
}

impl MockRemote {
    pub async fn start(starting_checks: usize) -> Self {
        let state = Arc::new(MockState {
            starting_checks,
            ..MockState::default()
        });
        let handler_state = Arc::clone(&state);

        let routes = warp::method()
            .and(warp::path::full())
            .and(warp::query::raw().or(warp::any().map(String::new)).unify())
            .and(warp::header::optional::<String>("x-api-key"))
            .and(warp::body::bytes())
            .map(move |method: Method, path: FullPath, query: String, api_key: Option<String>, body: Bytes| {
                handler_state.requests.lock().unwrap().push(RecordedRequest {
                    method: method.to_string(),
                    path: path.as_str().to_string(),
                    query,
                    api_key,
                    body: body.to_vec(),
                });
                respond(&handler_state, &method, path.as_str(), &body)
            });

        let (addr, server) = warp::serve(routes).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn hits(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }

    pub fn hits_for(&self, method: &str, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }
}

fn session_json(name: &str, status: &str) -> Value {
    json!({
        "name": name,
        "status": status,
        "config": { "debug": false },
        "engine": { "engine": "NOWEB" }
    })
}

fn json_response(status: StatusCode, body: Value) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn respond(state: &MockState, method: &Method, path: &str, body: &[u8]) -> Response<Body> {
    let segments: Vec<&str> = path.trim_start_matches("/api/").split('/').collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", ["sessions"]) => json_response(
            StatusCode::OK,
            json!([
                {
                    "name": "default",
                    "status": "WORKING",
                    "me": { "id": "15550001111@c.us", "pushName": "Support" },
                    "engine": { "engine": "NOWEB" }
                },
                { "name": "sales", "status": "STOPPED" }
            ]),
        ),
        ("POST", ["sessions"]) => {
            let payload: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
            let name = payload["name"].as_str().unwrap_or_default();
            json_response(StatusCode::CREATED, session_json(name, "STOPPED"))
        }
        ("GET", ["sessions", "missing"]) => {
            json_response(StatusCode::NOT_FOUND, json!({ "message": "Session not found" }))
        }
        ("GET", ["sessions", name]) => {
            let seen = state.status_checks.fetch_add(1, Ordering::SeqCst);
            let status = if seen < state.starting_checks { "STARTING" } else { "WORKING" };
            json_response(StatusCode::OK, session_json(name, status))
        }
        ("POST", ["sessions", "missing", _]) => {
            json_response(StatusCode::NOT_FOUND, json!({ "message": "Session not found" }))
        }
        ("POST", ["sessions", name, "start" | "restart"]) => {
            json_response(StatusCode::CREATED, session_json(name, "STARTING"))
        }
        ("POST", ["sessions", name, "stop" | "logout"]) => {
            json_response(StatusCode::CREATED, session_json(name, "STOPPED"))
        }
        ("DELETE", ["sessions", "locked"]) => {
            json_response(StatusCode::CONFLICT, json!({ "message": "Session is busy" }))
        }
        ("DELETE", ["sessions", _]) => Response::builder()
            .status(StatusCode::NO_CONTENT)
            .body(Body::empty())
            .unwrap(),
        ("GET", ["paired", "auth", "qr"]) => Response::builder()
            .status(StatusCode::OK)
            .header("content-type", "image/png")
            .body(Body::empty())
            .unwrap(),
        ("GET", [_, "auth", "qr"]) => Response::builder()
            .status(StatusCode::OK)
            .header("content-type", "image/png")
            .body(Body::from(PNG_BYTES.to_vec()))
            .unwrap(),
        ("GET", [name, "profile"]) => json_response(
            StatusCode::OK,
            json!({ "id": "15550001111@c.us", "name": format!("{} account", name), "picture": null }),
        ),
        _ => json_response(StatusCode::NOT_FOUND, json!({ "message": "no such route" })),
    }
}

pub fn remote_config(base_url: &str) -> RemoteConfig {
    RemoteConfig {
        base_url: base_url.to_string(),
        api_key_env: "WAHA_API_KEY".to_string(),
        timeout_secs: 5,
    }
}

/// Route proxy bound to an ephemeral port in front of `base_url`.
pub async fn start_proxy(base_url: &str) -> (ProxyServer, String) {
    let backend = RemoteBackend::new(remote_client(&remote_config(base_url), API_KEY));
    let server_config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
    };

    let mut server = ProxyServer::new(backend, &server_config);
    let addr = server.start().await.unwrap();
    (server, format!("http://{}", addr))
}
