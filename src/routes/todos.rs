use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use crate::{
    db::{StorageError, entities::todo, todo_repo, todo_repo::TodoChanges},
    error::AppError,
    response::{ApiResponse, ApiResult},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

// Unrecognized keys are ignored; title may be set to empty here, only
// creation demands a non-empty one.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateTodoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(state)
}

async fn list_todos(State(state): State<Arc<AppState>>) -> ApiResult<Vec<TodoResponse>> {
    let todos = todo_repo::list_all(&state.db)
        .await
        .map_err(|err| storage_error(err, "Database error occurred"))?;
    ApiResponse::list(todos.into_iter().map(TodoResponse::from).collect())
}

async fn get_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<TodoResponse> {
    let id = parse_id(&id)?;
    let todo = todo_repo::find_by_id(&state.db, id)
        .await
        .map_err(|err| storage_error(err, "Database error occurred"))?
        .ok_or_else(|| AppError::not_found("Todo not found"))?;
    ApiResponse::ok(todo.into())
}

async fn create_todo(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateTodoRequest>,
) -> ApiResult<TodoResponse> {
    let title = match body.title.as_deref() {
        Some(title) if !title.is_empty() => title,
        _ => return Err(AppError::bad_request("Title is required")),
    };
    let description = body.description.as_deref().unwrap_or("");

    let todo = todo_repo::create(&state.db, title, description)
        .await
        .map_err(|err| storage_error(err, "Failed to create todo"))?;
    ApiResponse::created(todo.into(), "Todo created successfully")
}

async fn update_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<UpdateTodoRequest>,
) -> ApiResult<TodoResponse> {
    let id = parse_id(&id)?;
    let changes = TodoChanges {
        title: body.title,
        description: body.description,
        completed: body.completed,
    };
    let todo = todo_repo::update(&state.db, id, changes)
        .await
        .map_err(|err| storage_error(err, "Failed to update todo"))?
        .ok_or_else(|| AppError::not_found("Todo not found"))?;
    ApiResponse::with_message(todo.into(), "Todo updated successfully")
}

async fn delete_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<serde_json::Value> {
    let id = parse_id(&id)?;
    let deleted = todo_repo::delete(&state.db, id)
        .await
        .map_err(|err| storage_error(err, "Failed to delete todo"))?;
    if !deleted {
        return Err(AppError::not_found("Todo not found"));
    }
    ApiResponse::message_only("Todo deleted successfully")
}

// A non-numeric id segment never matches a todo route; it reads as an
// unknown path, same as the global fallback.
fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.parse::<i32>()
        .map_err(|_| AppError::not_found("Resource not found"))
}

fn storage_error(err: StorageError, client_message: &'static str) -> AppError {
    tracing::error!("storage failure: {err}");
    AppError::internal(client_message)
}

impl From<todo::Model> for TodoResponse {
    fn from(model: todo::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            completed: model.completed,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
