//! A stub of the external budget API for exercising handlers over real HTTP.

use std::sync::{Arc, Mutex};

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde_json::Value;

/// A running stub backend plus the request bodies it has received.
#[derive(Clone)]
pub(crate) struct StubBackend {
    /// Base URL to point an `ApiClient` at.
    pub(crate) base_url: String,
    /// Bodies of every POST the stub received, in arrival order.
    pub(crate) received: Arc<Mutex<Vec<Value>>>,
}

#[derive(Clone)]
struct StubState {
    expenses: Value,
    budgets: Value,
    goals: Value,
    received: Arc<Mutex<Vec<Value>>>,
}

/// Spawn a stub backend whose three list endpoints answer with the given
/// bodies and whose create endpoints echo the posted record back.
pub(crate) async fn spawn_stub_backend(
    expenses: Value,
    budgets: Value,
    goals: Value,
) -> StubBackend {
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        expenses,
        budgets,
        goals,
        received: received.clone(),
    };

    let router = Router::new()
        .route("/api/expenses", get(list_expenses).post(create_record))
        .route("/api/budgets", get(list_budgets).post(create_record))
        .route("/api/goals", get(list_goals).post(create_record))
        .with_state(state);

    let base_url = serve(router).await;

    StubBackend { base_url, received }
}

/// Spawn `router` on an OS-assigned port and return its base URL.
///
/// The socket is listening before this returns, so requests can be made
/// immediately; the server task lives until the test runtime shuts down.
pub(crate) async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("could not bind stub backend");
    let addr = listener
        .local_addr()
        .expect("stub backend has no local address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("stub backend crashed");
    });

    format!("http://{addr}")
}

/// Spawn a backend where every route answers 500.
pub(crate) async fn spawn_failing_backend() -> String {
    let router = Router::new().fallback(|| async { StatusCode::INTERNAL_SERVER_ERROR });

    serve(router).await
}

/// A base URL on which nothing is listening.
pub(crate) async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("could not bind");
    let addr = listener.local_addr().expect("no local address");
    drop(listener);

    format!("http://{addr}")
}

async fn list_expenses(State(state): State<StubState>) -> Json<Value> {
    Json(state.expenses.clone())
}

async fn list_budgets(State(state): State<StubState>) -> Json<Value> {
    Json(state.budgets.clone())
}

async fn list_goals(State(state): State<StubState>) -> Json<Value> {
    Json(state.goals.clone())
}

async fn create_record(State(state): State<StubState>, Json(body): Json<Value>) -> Json<Value> {
    state
        .received
        .lock()
        .expect("stub backend mutex poisoned")
        .push(body.clone());

    Json(body)
}
