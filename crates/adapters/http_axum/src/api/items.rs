//! JSON REST handlers for items.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{FromRequestParts, Path, State};
use axum::http::{StatusCode, header};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use stockroom_app::ports::ItemStore;
use stockroom_domain::id::ItemId;
use stockroom_domain::item::{Item, ItemFields, Record};

use crate::error::ApiError;
use crate::state::AppState;

/// `{id}` path segment constrained to an unsigned decimal integer.
///
/// Any other segment is answered like an unmatched route: a bare `404`
/// without a JSON body.
pub struct ItemIdParam(pub ItemId);

impl<St> FromRequestParts<St> for ItemIdParam
where
    St: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &St) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::NOT_FOUND)?;
        raw.parse().map(Self).map_err(|_| StatusCode::NOT_FOUND)
    }
}

/// Body returned after a successful delete.
#[derive(Serialize)]
pub struct DeletedItem {
    pub message: String,
    pub item: Item,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Record>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum ItemResponse {
    Ok(Json<Item>),
}

impl IntoResponse for ItemResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Item>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok(Json<DeletedItem>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /items`
pub async fn list<S>(State(state): State<AppState<S>>) -> Result<ListResponse, ApiError>
where
    S: ItemStore + Send + Sync + 'static,
{
    let records = state.item_service.list_items().await?;
    Ok(ListResponse::Ok(Json(records)))
}

/// `GET /items/{id}`
pub async fn get<S>(
    State(state): State<AppState<S>>,
    ItemIdParam(id): ItemIdParam,
) -> Result<ItemResponse, ApiError>
where
    S: ItemStore + Send + Sync + 'static,
{
    let item = state.item_service.get_item(id).await?;
    Ok(ItemResponse::Ok(Json(item)))
}

/// `POST /items`
pub async fn create<S>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> Result<CreateResponse, ApiError>
where
    S: ItemStore + Send + Sync + 'static,
{
    let fields = ItemFields::parse(&body)?;
    let created = state.item_service.create_item(fields).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /items/{id}`
pub async fn update<S>(
    State(state): State<AppState<S>>,
    ItemIdParam(id): ItemIdParam,
    body: Bytes,
) -> Result<ItemResponse, ApiError>
where
    S: ItemStore + Send + Sync + 'static,
{
    let fields = ItemFields::parse(&body)?;
    let updated = state.item_service.update_item(id, fields).await?;
    Ok(ItemResponse::Ok(Json(updated)))
}

/// `DELETE /items/{id}`
pub async fn delete<S>(
    State(state): State<AppState<S>>,
    ItemIdParam(id): ItemIdParam,
) -> Result<DeleteResponse, ApiError>
where
    S: ItemStore + Send + Sync + 'static,
{
    let item = state.item_service.delete_item(id).await?;
    Ok(DeleteResponse::Ok(Json(DeletedItem {
        message: format!("item {id} deleted"),
        item,
    })))
}

/// Any other method on `/items/{id}`.
///
/// Segments that are not item ids stay a bare `404`, like every other
/// method on this route.
pub async fn unsupported_method(ItemIdParam(_): ItemIdParam) -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "GET,HEAD,PUT,DELETE")],
    )
}
