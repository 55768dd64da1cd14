//! The HTML form: render the list, append from a form post.

use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Extension, Query,
    },
    response::{Html, Redirect},
    routing::{get, post},
    Form, Router,
};

use stocklist_inventory::AddItem;

use crate::app::{dto, render, SharedStore};

type Pairs = Vec<(String, String)>;

pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/add", post(add_item))
}

pub async fn index(Extension(store): Extension<SharedStore>) -> Html<String> {
    Html(render::inventory_page(&store.list()))
}

/// Never rejects. Query-string parameters come before body fields, and the
/// first value of a repeated key wins. An unreadable body contributes nothing.
pub async fn add_item(
    Extension(store): Extension<SharedStore>,
    query: Result<Query<Pairs>, QueryRejection>,
    body: Result<Form<Pairs>, FormRejection>,
) -> Redirect {
    let query = match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "unreadable query string, ignoring");
            Vec::new()
        }
    };
    let body = match body {
        Ok(Form(pairs)) => pairs,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "unreadable form body, ignoring");
            Vec::new()
        }
    };

    let cmd = AddItem::from(dto::AddItemForm::from_pairs(query.into_iter().chain(body)));
    store.append(cmd.into_item());
    tracing::info!(count = store.len(), "item appended");

    Redirect::to("/")
}
