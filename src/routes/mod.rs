//! Route handlers.
//!
//! - `index`: the form page (GET /)
//! - `commits`: one fetch-and-render cycle (GET /commits?account=&repository=)

pub mod commits;
pub mod index;

use axum::Router;

use crate::github::SharedClient;

pub fn create_router(client: SharedClient) -> Router {
    Router::new()
        .merge(index::routes())
        .merge(commits::routes(client))
}
