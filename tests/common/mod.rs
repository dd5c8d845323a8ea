//! Stub Symphony API used by the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Decides the status and body for a recorded request, given its path and
/// how many requests already hit that path.
pub type Responder = fn(&str, usize) -> (StatusCode, String);

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Clone)]
struct StubState {
    root_status: StatusCode,
    responder: Responder,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

pub struct StubApi {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
    handle: JoinHandle<()>,
}

impl StubApi {
    /// Every POST answers 201 with an empty body.
    pub async fn accepting(root_status: StatusCode) -> Self {
        Self::start(root_status, |_, _| (StatusCode::CREATED, String::new())).await
    }

    pub async fn start(root_status: StatusCode, responder: Responder) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            root_status,
            responder,
            requests: requests.clone(),
        };
        let app = Router::new()
            .route("/", get(root))
            .fallback(record)
            .with_state(state);

        // Bind to any available port
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        StubApi {
            base_url: format!("http://{addr}"),
            requests,
            handle,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn posts_to(&self, path: &str) -> Vec<Value> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == Method::POST && r.path == path)
            .filter_map(|r| r.body)
            .collect()
    }

    pub fn post_count(&self) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == Method::POST)
            .count()
    }
}

impl Drop for StubApi {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn root(State(state): State<StubState>) -> Response {
    (state.root_status, "Hello, World!").into_response()
}

async fn record(State(state): State<StubState>, method: Method, uri: Uri, body: Bytes) -> Response {
    let path = uri.path().to_string();
    let seen = {
        let mut requests = state.requests.lock().unwrap();
        let seen = requests.iter().filter(|r| r.path == path).count();
        requests.push(Recorded {
            method,
            path: path.clone(),
            body: serde_json::from_slice(&body).ok(),
        });
        seen
    };
    let (status, body) = (state.responder)(&path, seen);
    (status, body).into_response()
}
