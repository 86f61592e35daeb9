//! The landing page: the form with an empty result area.

use axum::{response::Html, routing::get, Router};

use crate::render;

pub fn routes() -> Router {
    Router::new().route("/", get(index))
}

async fn index() -> Html<String> {
    Html(render::page(""))
}
