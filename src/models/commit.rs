use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Avatar shown when the commit has no associated GitHub account.
pub const FALLBACK_AVATAR_URL: &str = "https://avatars.githubusercontent.com/u/0?v=4";

/// One element of the GitHub list-commits response. Only the fields the
/// viewer displays are modeled; everything else in the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitRecord {
    pub commit: CommitDetail,
    pub author: Option<ActorInfo>,
    pub committer: Option<ActorInfo>,
    pub html_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitDetail {
    pub author: GitSignature,
    pub message: String,
}

/// The git-level signature recorded in the commit itself.
#[derive(Debug, Clone, Deserialize)]
pub struct GitSignature {
    pub date: DateTime<Utc>,
}

/// A GitHub account attached to the commit. Both `author` and `committer`
/// are absent when the commit email does not map to an account.
#[derive(Debug, Clone, Deserialize)]
pub struct ActorInfo {
    pub login: Option<String>,
    pub avatar_url: Option<String>,
}

impl CommitRecord {
    /// Attributed display name: committer login, then author login,
    /// then "Unknown".
    pub fn display_name(&self) -> &str {
        self.committer
            .as_ref()
            .and_then(|c| c.login.as_deref())
            .or_else(|| self.author.as_ref().and_then(|a| a.login.as_deref()))
            .unwrap_or("Unknown")
    }

    pub fn avatar_url(&self) -> &str {
        self.author
            .as_ref()
            .and_then(|a| a.avatar_url.as_deref())
            .unwrap_or(FALLBACK_AVATAR_URL)
    }
}
