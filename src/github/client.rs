//! Unauthenticated GitHub REST client for the list-commits endpoint.
//!
//! One request per submission: no retries, no pagination, no token. The
//! caller is subject to GitHub's unauthenticated rate limit, which surfaces
//! as `AppError::RateLimited`.

use std::sync::Arc;

use reqwest::StatusCode;

use crate::error::{AppError, Result};
use crate::models::{CommitRecord, Query};

pub type SharedClient = Arc<GitHubClient>;

pub struct GitHubClient {
    http: reqwest::Client,
    base_url: String,
}

impl GitHubClient {
    /// Create a client against the public GitHub API.
    ///
    /// # Panics
    ///
    /// * If the `reqwest::Client` fails to build.
    #[must_use]
    pub fn new() -> Self {
        // GitHub rejects requests without a User-Agent.
        let http = reqwest::Client::builder()
            .user_agent("commit-viewer")
            .build()
            .unwrap();
        Self {
            http,
            base_url: "https://api.github.com".to_string(),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Fetch the first page of commits for the queried repository.
    ///
    /// Status classification: 404 → `RepoNotFound`, 403 → `RateLimited`
    /// (regardless of body), any other non-success status or a transport or
    /// parse failure → `Upstream` with the status code or error text.
    pub async fn list_commits(&self, query: &Query) -> Result<Vec<CommitRecord>> {
        let url = format!(
            "{}/repos/{}/{}/commits",
            self.base_url, query.account, query.repository
        );
        tracing::debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;

        let status = response.status();
        match status {
            StatusCode::NOT_FOUND => Err(AppError::RepoNotFound {
                account: query.account.clone(),
                repository: query.repository.clone(),
            }),
            StatusCode::FORBIDDEN => Err(AppError::RateLimited),
            s if !s.is_success() => Err(AppError::Upstream(s.as_u16().to_string())),
            _ => response
                .json()
                .await
                .map_err(|e| AppError::Upstream(e.to_string())),
        }
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn query() -> Query {
        Query::from_form("octocat", "Hello-World").unwrap()
    }

    fn commit_json(message: &str, url: &str) -> serde_json::Value {
        serde_json::json!({
            "commit": {
                "author": { "date": "2024-01-01T12:00:00Z" },
                "message": message
            },
            "author": { "login": "octocat", "avatar_url": "http://x/a.png" },
            "committer": { "login": "octocat", "avatar_url": "http://x/a.png" },
            "html_url": url
        })
    }

    #[tokio::test]
    async fn returns_commits_in_response_order() {
        let server = MockServer::start().await;
        let body = serde_json::json!([
            commit_json("first", "http://x/commit/1"),
            commit_json("second", "http://x/commit/2"),
            commit_json("third", "http://x/commit/3"),
        ]);

        Mock::given(method("GET"))
            .and(path("/repos/octocat/Hello-World/commits"))
            .and(header("Accept", "application/vnd.github.v3+json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let client = GitHubClient::new().with_base_url(server.uri());
        let commits = client.list_commits(&query()).await.unwrap();

        assert_eq!(commits.len(), 3);
        assert_eq!(commits[0].commit.message, "first");
        assert_eq!(commits[1].commit.message, "second");
        assert_eq!(commits[2].commit.message, "third");
    }

    #[tokio::test]
    async fn not_found_carries_the_submitted_names() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/octocat/Hello-World/commits"))
            .respond_with(ResponseTemplate::new(404).set_body_json(
                serde_json::json!({ "message": "Not Found" }),
            ))
            .mount(&server)
            .await;

        let client = GitHubClient::new().with_base_url(server.uri());
        let err = client.list_commits(&query()).await.unwrap_err();

        match err {
            AppError::RepoNotFound {
                account,
                repository,
            } => {
                assert_eq!(account, "octocat");
                assert_eq!(repository, "Hello-World");
            }
            other => panic!("expected RepoNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn forbidden_is_rate_limited_regardless_of_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/octocat/Hello-World/commits"))
            .respond_with(ResponseTemplate::new(403).set_body_string("nope"))
            .mount(&server)
            .await;

        let client = GitHubClient::new().with_base_url(server.uri());
        let err = client.list_commits(&query()).await.unwrap_err();

        assert!(matches!(err, AppError::RateLimited));
    }

    #[tokio::test]
    async fn other_statuses_become_upstream_with_the_code() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/octocat/Hello-World/commits"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = GitHubClient::new().with_base_url(server.uri());
        let err = client.list_commits(&query()).await.unwrap_err();

        match err {
            AppError::Upstream(detail) => assert_eq!(detail, "500"),
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_becomes_upstream() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/octocat/Hello-World/commits"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = GitHubClient::new().with_base_url(server.uri());
        let err = client.list_commits(&query()).await.unwrap_err();

        assert!(matches!(err, AppError::Upstream(_)));
    }
}
