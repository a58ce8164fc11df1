//! Endpoint handlers for the filesystem gateway.
//!
//! Each handler unpacks its request, runs the matching `PathGateway`
//! operation on the blocking thread pool and serializes the outcome.
//! Failures leave through `GatewayError`'s `IntoResponse` impl.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use std::sync::Arc;

use crate::error::{GatewayError, GatewayResult};
use crate::protocol::requests::{
    CreateDirectoryRequest, CreateFileRequest, DeleteDirectoryRequest, DeleteFileRequest,
    EditDirectoryRequest, EditFileRequest, GetContentsQuery, path_or_root,
};
use crate::protocol::responses::{Health, Message, PathContents};
use crate::storage::PathGateway;

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<PathGateway>,
}

impl AppState {
    pub fn new(gateway: PathGateway) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }
}

/// Runs a synchronous gateway operation without stalling the runtime.
///
/// # Arguments
///
/// * `state` - Handler state holding the gateway.
/// * `op` - The filesystem operation to perform.
///
/// # Returns
///
/// * `GatewayResult<T>` - The operation's own result, or `Internal` if the
///   blocking task could not be joined.
async fn run_blocking<T, F>(state: &AppState, op: F) -> GatewayResult<T>
where
    T: Send + 'static,
    F: FnOnce(&PathGateway) -> GatewayResult<T> + Send + 'static,
{
    let gateway = Arc::clone(&state.gateway);
    tokio::task::spawn_blocking(move || op(&gateway))
        .await
        .map_err(|e| GatewayError::Internal(e.to_string()))?
}

/// Unwraps an extracted body, turning axum's rejection into `BadRequest`
fn accept<T>(payload: Result<Json<T>, JsonRejection>) -> GatewayResult<T> {
    payload
        .map(|Json(req)| req)
        .map_err(|rejection| GatewayError::BadRequest(rejection.body_text()))
}

pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// `GET /?path=` - file contents or directory listing
pub async fn get_contents(
    State(state): State<AppState>,
    query: Result<Query<GetContentsQuery>, QueryRejection>,
) -> Result<Json<PathContents>, GatewayError> {
    let Query(query) =
        query.map_err(|rejection| GatewayError::BadRequest(rejection.body_text()))?;
    let contents = run_blocking(&state, move |gw| gw.get(&query.path)).await?;
    Ok(Json(contents))
}

/// `POST /file`
pub async fn create_file(
    State(state): State<AppState>,
    payload: Result<Json<CreateFileRequest>, JsonRejection>,
) -> Result<Json<Message>, GatewayError> {
    let req = accept(payload)?;
    let path = path_or_root(req.path);
    let message =
        run_blocking(&state, move |gw| gw.create_file(&path, &req.name, &req.content)).await?;
    Ok(Json(message))
}

/// `POST /directory`
pub async fn create_directory(
    State(state): State<AppState>,
    payload: Result<Json<CreateDirectoryRequest>, JsonRejection>,
) -> Result<Json<Message>, GatewayError> {
    let req = accept(payload)?;
    let path = path_or_root(req.path);
    let message = run_blocking(&state, move |gw| gw.create_directory(&path, &req.name)).await?;
    Ok(Json(message))
}

/// `PUT /file`
pub async fn edit_file(
    State(state): State<AppState>,
    payload: Result<Json<EditFileRequest>, JsonRejection>,
) -> Result<Json<Message>, GatewayError> {
    let req = accept(payload)?;
    let path = path_or_root(req.path);
    let message = run_blocking(&state, move |gw| gw.edit_file(&path, &req.content)).await?;
    Ok(Json(message))
}

/// `PUT /directory`
pub async fn edit_directory(
    State(state): State<AppState>,
    payload: Result<Json<EditDirectoryRequest>, JsonRejection>,
) -> Result<Json<Message>, GatewayError> {
    let req = accept(payload)?;
    let message = run_blocking(&state, move |gw| gw.edit_directory(&req.path, &req.name)).await?;
    Ok(Json(message))
}

/// `DELETE /file`
pub async fn delete_file(
    State(state): State<AppState>,
    payload: Result<Json<DeleteFileRequest>, JsonRejection>,
) -> Result<Json<Message>, GatewayError> {
    let req = accept(payload)?;
    let message = run_blocking(&state, move |gw| gw.delete_file(&req.path)).await?;
    Ok(Json(message))
}

/// `DELETE /directory`
pub async fn delete_directory(
    State(state): State<AppState>,
    payload: Result<Json<DeleteDirectoryRequest>, JsonRejection>,
) -> Result<Json<Message>, GatewayError> {
    let req = accept(payload)?;
    let message = run_blocking(&state, move |gw| gw.delete_directory(&req.path)).await?;
    Ok(Json(message))
}
