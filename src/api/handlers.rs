use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::*;
use crate::store::Store;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// A path segment that isn't a UUID can't name a stored item, so it is
/// reported the same way as an unknown id.
fn parse_item_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::NotFound)
}

// ============================================================
// Health / page
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

// ============================================================
// Items
// ============================================================

pub async fn list_items(State(store): State<Store>) -> Json<Vec<Item>> {
    Json(store.list())
}

pub async fn get_item(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let id = parse_item_id(&id)?;
    store.get(id).map(Json).ok_or(ApiError::NotFound)
}

pub async fn create_item(
    State(store): State<Store>,
    payload: Result<Json<CreateItemInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Json(input) = payload?;
    let item = store.add(input.text)?;
    tracing::info!(id = %item.id, "Created item");
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update_item(
    State(store): State<Store>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateItemInput>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let id = parse_item_id(&id)?;
    let Json(input) = payload?;
    store.update(id, input)?.map(Json).ok_or(ApiError::NotFound)
}

pub async fn delete_item(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<Json<DeleteItemResponse>, ApiError> {
    let id = parse_item_id(&id)?;
    if store.delete(id) {
        Ok(Json(DeleteItemResponse { success: true }))
    } else {
        Err(ApiError::NotFound)
    }
}
