use reqwest::StatusCode;
use serde_json::{json, Value};
use crate::common::{start_proxy, MockRemote, API_KEY, PNG_BYTES};

#[tokio::test]
async fn list_forwards_remote_body_with_api_key() {
    let remote = MockRemote::start(0).await;
    let (mut proxy, endpoint) = start_proxy(&remote.base_url()).await;

    let response = reqwest::get(format!("{}/api/waha/sessions", endpoint)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();

    assert_eq!(body[0]["name"], "default");
    assert_eq!(body[0]["engine"]["engine"], "NOWEB");
    assert_eq!(body[1]["status"], "STOPPED");

    let requests = remote.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/api/sessions");
    assert_eq!(requests[0].query, "all=true");
    assert_eq!(requests[0].api_key.as_deref(), Some(API_KEY));

    proxy.shutdown().await.unwrap();
}

#[tokio::test]
async fn create_without_name_never_reaches_remote() {
    let remote = MockRemote::start(0).await;
    let (_proxy, endpoint) = start_proxy(&remote.base_url()).await;
    let client = reqwest::Client::new();

    for payload in [json!({ "name": "" }), json!({}), json!({ "name": 42 })] {
        let response = client
            .post(format!("{}/api/waha/sessions", endpoint))
            .json(&payload)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Session name is required");
    }

    let response = client
        .post(format!("{}/api/waha/sessions", endpoint))
        .body("not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(remote.hits(), 0);
}

#[tokio::test]
async fn create_forwards_descriptor() {
    let remote = MockRemote::start(0).await;
    let (_proxy, endpoint) = start_proxy(&remote.base_url()).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/waha/sessions", endpoint))
        .json(&json!({ "name": "support", "start": false, "config": { "debug": true } }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["name"], "support");

    let requests = remote.requests();
    assert_eq!(requests.len(), 1);
    let forwarded: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(forwarded["name"], "support");
    assert_eq!(forwarded["config"]["debug"], true);
}

#[tokio::test]
async fn create_forwards_fields_it_does_not_model() {
    let remote = MockRemote::start(0).await;
    let (_proxy, endpoint) = start_proxy(&remote.base_url()).await;
    let client = reqwest::Client::new();

    let payloads = [
        json!({ "name": "a", "engine": "GOWS" }),
        json!({ "name": "b", "config": { "proxy": { "server": "x" } } }),
    ];
    for payload in &payloads {
        let response = client
            .post(format!("{}/api/waha/sessions", endpoint))
            .json(payload)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let requests = remote.requests();
    assert_eq!(requests.len(), 2);
    for (request, payload) in requests.iter().zip(payloads.iter()) {
        let forwarded: Value = serde_json::from_slice(&request.body).unwrap();
        assert_eq!(&forwarded, payload);
    }
}

#[tokio::test]
async fn remote_status_passes_through() {
    let remote = MockRemote::start(0).await;
    let (_proxy, endpoint) = start_proxy(&remote.base_url()).await;
    let client = reqwest::Client::new();

    let response = client.get(format!("{}/api/waha/sessions/missing", endpoint)).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Failed to fetch session");

    let response = client.post(format!("{}/api/waha/sessions/missing/start", endpoint)).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Failed to start session");

    let response = client.delete(format!("{}/api/waha/sessions/locked", endpoint)).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn actions_hit_matching_remote_endpoints() {
    let remote = MockRemote::start(0).await;
    let (_proxy, endpoint) = start_proxy(&remote.base_url()).await;
    let client = reqwest::Client::new();

    for (action, status) in [("start", "STARTING"), ("stop", "STOPPED"), ("restart", "STARTING"), ("logout", "STOPPED")] {
        let response = client
            .post(format!("{}/api/waha/sessions/default/{}", endpoint, action))
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["status"], status);
        assert_eq!(remote.hits_for("POST", &format!("/api/sessions/default/{}", action)), 1);
    }

    let response = client.post(format!("{}/api/waha/sessions/default/reboot", endpoint)).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(remote.hits(), 4);
}

#[tokio::test]
async fn delete_acknowledges_no_content() {
    let remote = MockRemote::start(0).await;
    let (_proxy, endpoint) = start_proxy(&remote.base_url()).await;

    let response = reqwest::Client::new()
        .delete(format!("{}/api/waha/sessions/sales", endpoint))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "success": true }));
    assert_eq!(remote.hits_for("DELETE", "/api/sessions/sales"), 1);
}

#[tokio::test]
async fn qr_code_is_served_as_uncached_png() {
    let remote = MockRemote::start(0).await;
    let (_proxy, endpoint) = start_proxy(&remote.base_url()).await;

    let response = reqwest::get(format!("{}/api/waha/auth/default/qr", endpoint)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "image/png");
    assert_eq!(response.headers()["cache-control"], "no-cache");
    assert_eq!(response.bytes().await.unwrap().as_ref(), PNG_BYTES);

    let requests = remote.requests();
    assert_eq!(requests[0].path, "/api/default/auth/qr");
    assert_eq!(requests[0].query, "format=image");
}

#[tokio::test]
async fn empty_qr_code_is_not_found() {
    let remote = MockRemote::start(0).await;
    let (_proxy, endpoint) = start_proxy(&remote.base_url()).await;

    let response = reqwest::get(format!("{}/api/waha/auth/paired/qr", endpoint)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "QR Code not available");
}

#[tokio::test]
async fn profile_is_forwarded() {
    let remote = MockRemote::start(0).await;
    let (_proxy, endpoint) = start_proxy(&remote.base_url()).await;

    let response = reqwest::get(format!("{}/api/waha/profile/default", endpoint)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["name"], "default account");
    assert_eq!(remote.hits_for("GET", "/api/default/profile"), 1);
}

#[tokio::test]
async fn malformed_session_name_is_rejected_locally() {
    let remote = MockRemote::start(0).await;
    let (_proxy, endpoint) = start_proxy(&remote.base_url()).await;

    let response = reqwest::get(format!("{}/api/waha/sessions/bad.name", endpoint)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(remote.hits(), 0);
}

#[tokio::test]
async fn unreachable_remote_maps_to_internal_error() {
    // nothing listens on the discard port
    let (_proxy, endpoint) = start_proxy("http://127.0.0.1:9/api").await;

    let response = reqwest::get(format!("{}/api/waha/sessions", endpoint)).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Failed to fetch sessions");
    assert!(body["details"].is_string());
}
