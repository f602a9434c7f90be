pub mod error;
pub mod extract;
pub mod models;
pub mod store;

use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use extract::ApiJson;
use models::{CreateTodo, Todo};
use serde_json::{json, Value};
use store::Store;
use tokio::{
    net::TcpListener,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

// === App State ===
#[derive(Debug, Clone)]
struct AppState {
    state: Arc<RwLock<Store>>,
}
impl AppState {
    fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(Store::new())),
        }
    }

    // borrow immutable state
    async fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.state.read().await
    }
    // borrow mutable state
    async fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.state.write().await
    }
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/todos", get(list_todos).post(create_todo))
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    // initialize tracing
    tracing_subscriber::fmt::init();

    let state = AppState::new();
    let app = app(state);

    // run our app with hyper, listening globally on port 3000
    let listener = TcpListener::bind("0.0.0.0:3000").await?;
    tracing::info!("listening on http://localhost:3000");
    axum::serve(listener, app).await?;
    Ok(())
}

// === Routes ===
async fn root() -> Json<Value> {
    Json(json!({ "message": "OK" }))
}

async fn list_todos(State(state): State<AppState>) -> Json<Vec<Todo>> {
    let store = state.read().await;
    Json(store.list())
}

// The id bump and the append happen under a single write guard, so
// concurrent creates can't race each other.
async fn create_todo(
    State(state): State<AppState>,
    ApiJson(data): ApiJson<CreateTodo>,
) -> Json<Todo> {
    let mut store = state.write().await;
    let todo = store.create(data);
    tracing::debug!(id = todo.id, "created todo");
    Json(todo)
}
