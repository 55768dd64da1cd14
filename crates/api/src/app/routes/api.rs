//! JSON view of the same store.

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use stocklist_inventory::{AddItem, Item};

use crate::app::{dto, errors, SharedStore};

pub fn router() -> Router {
    Router::new().route("/items", get(list_items).post(add_item))
}

pub async fn list_items(Extension(store): Extension<SharedStore>) -> Json<Vec<Item>> {
    Json(store.list())
}

pub async fn add_item(
    Extension(store): Extension<SharedStore>,
    body: Result<Json<dto::AddItemRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    store.append(AddItem::from(body).into_item());
    let count = store.len();
    tracing::info!(count, "item appended");

    (StatusCode::CREATED, Json(dto::AddItemResponse { count })).into_response()
}
