//! Application error types and HTTP response mapping.
//!
//! Defines `AppError` for all failure classes of one submission and
//! implements Axum's `IntoResponse` so a failed handler still renders the
//! full page, with the result area replaced by an alert block.
//!
//! Error mappings:
//! - `Validation` → 400
//! - `RepoNotFound` → 404
//! - `RateLimited` → 429
//! - `Upstream` → 502

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::render;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Please enter both username and repository name.")]
    Validation,

    #[error("Repository not found: {account}/{repository}")]
    RepoNotFound { account: String, repository: String },

    #[error("API rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Error fetching data: {0}")]
    Upstream(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation => StatusCode::BAD_REQUEST,
            AppError::RepoNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = render::page(&render::alert(&self.to_string()));
        (self.status(), Html(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
