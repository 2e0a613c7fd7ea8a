//! Integration tests for the health endpoint.
//!
//! Router tests drive an isolated router in-process with `oneshot`. The
//! server tests bind a real listener on an ephemeral port and talk to it
//! over TCP.
//!
//! Run with: cargo test --test health_endpoint

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use axum_server::Handle;
use tower::ServiceExt;

use health_reporter::http::{bind, serve};
use health_reporter::{create_router, AppState};

const HEALTHY_BODY: &str = "{\"status\":\"healthy\"}\n";

fn setup() -> Router {
    create_router(AppState::default())
}

async fn send(app: Router, method: Method, uri: &str) -> axum::response::Response {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_get_health() {
    let response = send(setup(), Method::GET, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert_eq!(body_string(response).await, HEALTHY_BODY);
}

#[tokio::test]
async fn test_post_health_is_not_method_restricted() {
    let response = send(setup(), Method::POST, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert_eq!(body_string(response).await, HEALTHY_BODY);
}

#[tokio::test]
async fn test_other_methods_get_same_answer() {
    for method in [Method::PUT, Method::DELETE, Method::PATCH] {
        let response = send(setup(), method.clone(), "/health").await;
        assert_eq!(response.status(), StatusCode::OK, "method {method}");
        assert_eq!(body_string(response).await, HEALTHY_BODY, "method {method}");
    }
}

#[tokio::test]
async fn test_repeated_calls_are_identical() {
    let app = setup();
    let mut bodies = Vec::new();
    for _ in 0..5 {
        let response = send(app.clone(), Method::GET, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        bodies.push(body_string(response).await);
    }
    assert!(bodies.iter().all(|b| b == HEALTHY_BODY));
}

#[tokio::test]
async fn test_health_is_not_cacheable() {
    let response = send(setup(), Method::GET, "/health").await;
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-store"
    );
}

#[tokio::test]
async fn test_unknown_path_is_default_not_found() {
    for uri in ["/", "/healthz", "/health/extra", "/status"] {
        let response = send(setup(), Method::GET, uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "uri {uri}");
        assert!(body_string(response).await.is_empty(), "uri {uri}");
    }
}

#[tokio::test]
async fn test_request_id_header_is_unique_uuid() {
    let app = setup();
    let first = send(app.clone(), Method::GET, "/health").await;
    let second = send(app, Method::GET, "/missing").await;

    let first_id = first.headers().get("x-request-id").unwrap().to_str().unwrap();
    let second_id = second.headers().get("x-request-id").unwrap().to_str().unwrap();

    assert!(uuid::Uuid::parse_str(first_id).is_ok());
    assert!(uuid::Uuid::parse_str(second_id).is_ok());
    assert_ne!(first_id, second_id);
}

#[tokio::test]
async fn test_serves_over_tcp_and_shuts_down() {
    let listener = bind("127.0.0.1:0".parse().unwrap()).unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = Handle::new();
    let server = tokio::spawn(serve(listener, setup(), handle.clone()));
    handle.listening().await.unwrap();

    let client = reqwest::Client::new();
    let url = format!("http://{addr}/health");

    let response = client.get(&url).send().await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        response.headers().get(reqwest::header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert_eq!(response.text().await.unwrap(), HEALTHY_BODY);

    let response = client.post(&url).send().await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), HEALTHY_BODY);

    let missing = client
        .get(format!("http://{addr}/nope"))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);

    handle.graceful_shutdown(Some(Duration::from_secs(1)));
    let result = tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("server did not stop after graceful shutdown")
        .unwrap();
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_isolated_instances_serve_concurrently() {
    let mut servers = Vec::new();
    for _ in 0..2 {
        let listener = bind("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = Handle::new();
        let task = tokio::spawn(serve(listener, setup(), handle.clone()));
        handle.listening().await.unwrap();
        servers.push((addr, handle, task));
    }

    let client = reqwest::Client::new();
    let requests = servers.iter().flat_map(|(addr, _, _)| {
        let client = client.clone();
        (0..4).map(move |_| {
            let client = client.clone();
            let url = format!("http://{addr}/health");
            tokio::spawn(async move { client.get(url).send().await.unwrap().text().await.unwrap() })
        })
    });
    let requests: Vec<_> = requests.collect();

    for request in requests {
        assert_eq!(request.await.unwrap(), HEALTHY_BODY);
    }

    for (_, handle, task) in servers {
        handle.shutdown();
        task.await.unwrap().unwrap();
    }
}
