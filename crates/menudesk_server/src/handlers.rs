//! Route handlers.
//!
//! Each handler parses its inputs, hands one closure to
//! [`AppState::with_menu_service`], and wraps the resulting view.

use crate::dto::{
    parse_id, parse_item_path, CreateMenuBody, CreateMenuItemBody, MenuQuery, UpdateMenuBody,
    UpdateMenuItemBody,
};
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{Method, StatusCode, Uri};
use axum::Json;
use menudesk_core::{
    core_version, CreateMenuItemRequest, CreateMenuRequest, MenuView, UpdateMenuItemRequest,
    UpdateMenuRequest,
};
use serde::Serialize;

type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize)]
pub struct HealthBody {
    status: &'static str,
    version: &'static str,
}

pub async fn health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok",
        version: core_version(),
    })
}

pub async fn create_menu(
    State(state): State<AppState>,
    payload: Result<Json<CreateMenuBody>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MenuView>)> {
    let Json(body) = payload?;
    let request = CreateMenuRequest::from(body);
    let view = state
        .with_menu_service(move |service| service.create_menu(&request))
        .await?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn list_menus(State(state): State<AppState>) -> ApiResult<Json<Vec<MenuView>>> {
    let views = state
        .with_menu_service(|service| service.list_menus())
        .await?;
    Ok(Json(views))
}

pub async fn get_menu(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<MenuQuery>, QueryRejection>,
) -> ApiResult<Json<MenuView>> {
    let menu_id = parse_id(&id, "id")?;
    let Query(query) = query.map_err(|err| ApiError::bad_request(err.body_text()))?;
    let depth_limit = query.depth_limit()?;
    let view = state
        .with_menu_service(move |service| service.get_menu(menu_id, depth_limit))
        .await?;
    Ok(Json(view))
}

pub async fn update_menu(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateMenuBody>, JsonRejection>,
) -> ApiResult<Json<MenuView>> {
    let menu_id = parse_id(&id, "id")?;
    let Json(body) = payload?;
    let request = UpdateMenuRequest::from(body);
    let view = state
        .with_menu_service(move |service| service.update_menu(menu_id, &request))
        .await?;
    Ok(Json(view))
}

pub async fn delete_menu(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let menu_id = parse_id(&id, "id")?;
    state
        .with_menu_service(move |service| service.delete_menu(menu_id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn create_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CreateMenuItemBody>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MenuView>)> {
    let menu_id = parse_id(&id, "id")?;
    let Json(body) = payload?;
    let request = CreateMenuItemRequest::from(body);
    let view = state
        .with_menu_service(move |service| service.create_item(menu_id, &request))
        .await?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn update_item(
    State(state): State<AppState>,
    Path(ids): Path<(String, String)>,
    payload: Result<Json<UpdateMenuItemBody>, JsonRejection>,
) -> ApiResult<Json<MenuView>> {
    let (menu_id, item_id) = parse_item_path(&ids)?;
    let Json(body) = payload?;
    let request = UpdateMenuItemRequest::from(body);
    let view = state
        .with_menu_service(move |service| service.update_item(menu_id, item_id, &request))
        .await?;
    Ok(Json(view))
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path(ids): Path<(String, String)>,
) -> ApiResult<Json<MenuView>> {
    let (menu_id, item_id) = parse_item_path(&ids)?;
    let view = state
        .with_menu_service(move |service| service.delete_item(menu_id, item_id))
        .await?;
    Ok(Json(view))
}

pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::new(
        StatusCode::NOT_FOUND,
        format!("Cannot {} {}", method, uri.path()),
    )
}
