pub mod client;
pub mod issues;

use anyhow::Result;
use async_trait::async_trait;

use crate::github::issues::{Comment, Issue, RepoId};

/// Remote issue-tracking operations the session depends on.
///
/// The live implementation is [`client::GitHubClient`]; tests drive the
/// session against an in-memory fake so the interactive loop runs
/// deterministically without network access.
#[async_trait]
pub trait IssueApi {
    /// List every issue labeled `stale` visible to the authenticated
    /// identity, across all states and all accessible repositories,
    /// in the order the service returns them.
    async fn list_stale_issues(&self) -> Result<Vec<Issue>>;

    /// Fetch the full comment thread of one issue, in service order.
    async fn list_comments(&self, repo: &RepoId, number: u64) -> Result<Vec<Comment>>;

    /// Post a comment to an issue thread and return the created comment.
    async fn create_comment(&self, repo: &RepoId, number: u64, body: &str) -> Result<Comment>;
}
