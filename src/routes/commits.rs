//! The query endpoint: validates the form input, fetches the commit list
//! from GitHub, and renders the page with the result area populated.

use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::error::Result;
use crate::github::SharedClient;
use crate::models;
use crate::render;

pub fn routes(client: SharedClient) -> Router {
    Router::new()
        .route("/commits", get(get_commits))
        .with_state(client)
}

/// Raw form fields as submitted. Absent fields validate the same as blank
/// ones, so both default to the empty string.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CommitsQuery {
    account: String,
    repository: String,
}

async fn get_commits(
    State(client): State<SharedClient>,
    Query(params): Query<CommitsQuery>,
) -> Result<Html<String>> {
    let query = models::Query::from_form(&params.account, &params.repository)?;
    let commits = client.list_commits(&query).await?;
    Ok(Html(render::page(&render::commit_list(&commits))))
}
