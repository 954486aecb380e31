use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;

use crate::github::IssueApi;
use crate::github::issues::{self, Comment, Issue, RepoId};

/// GitHub API endpoints
mod endpoints {
    pub const API_BASE: &str = "https://api.github.com";
}

const ACCEPT: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = "triage-cli";
const PER_PAGE: u32 = 100;

/// Request body for posting an issue comment
#[derive(Serialize, Debug)]
struct CommentRequest<'a> {
    body: &'a str,
}

/// Authenticated GitHub REST client.
///
/// No request timeout is configured: the session is fully synchronous
/// and a hung call blocks it, which is the intended behavior.
pub struct GitHubClient {
    http: reqwest::Client,
    token: String,
}

impl GitHubClient {
    pub fn new(token: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .context("Failed to create HTTP client")?;
        Ok(GitHubClient { http, token })
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .bearer_auth(&self.token)
            .header("Accept", ACCEPT)
            .header("User-Agent", USER_AGENT)
    }

    async fn fetch_issue_page(&self, page: u32) -> Result<Vec<serde_json::Value>> {
        let response = self
            .get(&format!("{}/issues", endpoints::API_BASE))
            .query(&[("filter", "all"), ("state", "all"), ("labels", "stale")])
            .query(&[("page", page.to_string()), ("per_page", PER_PAGE.to_string())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "API request error: {}",
                response.status()
            ));
        }

        Ok(response.json::<Vec<serde_json::Value>>().await?)
    }
}

#[async_trait]
impl IssueApi for GitHubClient {
    async fn list_stale_issues(&self) -> Result<Vec<Issue>> {
        let mut all_issues = Vec::new();
        let mut page = 1;

        loop {
            let items = self
                .fetch_issue_page(page)
                .await
                .context("Failed to list stale issues")?;
            if items.is_empty() {
                break;
            }
            all_issues.extend(issues::parse_issues(&items));
            page += 1;
        }

        Ok(all_issues)
    }

    async fn list_comments(&self, repo: &RepoId, number: u64) -> Result<Vec<Comment>> {
        let url = format!(
            "{}/repos/{}/{}/issues/{}/comments",
            endpoints::API_BASE,
            repo.owner,
            repo.name,
            number
        );
        let response = self
            .get(&url)
            .send()
            .await
            .context("Failed to fetch comments")?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "API request error: {}",
                response.status()
            ));
        }

        let items = response.json::<Vec<serde_json::Value>>().await?;
        Ok(issues::parse_comments(&items))
    }

    async fn create_comment(&self, repo: &RepoId, number: u64, body: &str) -> Result<Comment> {
        let url = format!(
            "{}/repos/{}/{}/issues/{}/comments",
            endpoints::API_BASE,
            repo.owner,
            repo.name,
            number
        );
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .header("Accept", ACCEPT)
            .header("User-Agent", USER_AGENT)
            .json(&CommentRequest { body })
            .send()
            .await
            .context("Failed to create comment")?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "API request error: {}",
                response.status()
            ));
        }

        let item = response.json::<serde_json::Value>().await?;
        Ok(issues::parse_comment(&item))
    }
}
