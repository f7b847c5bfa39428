//! HTTP service for named to-do lists.
//!
//! `app()` wires the controllers to an in-memory store; `router()` accepts
//! any `AppState`, which is how tests swap in a recording store.

use std::{future::Future, sync::Arc};

use axum::{
    routing::{get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub mod config;
pub mod controllers;
pub mod error;
pub mod logging;
pub mod store;

pub use config::Config;
pub use controllers::{ListController, ToDoController};
pub use error::{ControllerError, ControllerResult};
pub use store::InMemoryStore;

use controllers::{list, todo};

/// Shared handler state: one controller per resource.
#[derive(Clone)]
pub struct AppState {
    pub lists: ListController,
    pub todos: ToDoController,
}

impl AppState {
    /// Serve both resources from the same in-memory store.
    pub fn in_memory(store: InMemoryStore) -> Self {
        let store = Arc::new(store);
        Self {
            lists: ListController::new(store.clone()),
            todos: ToDoController::new(store),
        }
    }
}

pub fn app() -> Router {
    router(AppState::in_memory(InMemoryStore::new()))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/lists", get(list::get_to_do_lists))
        .route(
            "/lists/{name}",
            get(list::get_to_do_list_by_name)
                .post(list::create_to_do_list)
                .put(list::update_list_name)
                .delete(list::delete_to_do_list),
        )
        .route("/lists/{name}/merge/{other}", post(list::merge_lists))
        .route(
            "/lists/{name}/todos",
            get(todo::get_to_do_items).post(todo::add_to_do),
        )
        .route(
            "/lists/{name}/todos/{id}",
            get(todo::get_to_do_item).delete(todo::delete_to_do_from_list),
        )
        .route("/lists/{name}/todos/{id}/check", put(todo::check_to_do_mark))
        .route("/lists/{name}/todos/{id}/uncheck", put(todo::uncheck_to_do_mark))
        .route(
            "/lists/{name}/todos/{id}/description",
            put(todo::update_to_do_description),
        )
        .route(
            "/lists/{name}/todos/{id}/move/{destination}",
            post(todo::move_to_do_to_another_list),
        )
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve until `shutdown` resolves, letting in-flight requests finish.
pub async fn run_until<F>(listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app()).with_graceful_shutdown(shutdown).await
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
