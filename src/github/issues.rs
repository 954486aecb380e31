use std::fmt;

/// Repository coordinates, rendered as `owner/name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// A stale issue as returned by the issues listing endpoint.
///
/// Read-only for the duration of a session; the only remote mutation is
/// the comment a reply creates. `user_login` is part of the record but
/// the presenter never renders it.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub repo: RepoId,
    pub number: u64,
    pub title: String,
    pub body: String,
    pub comments: u64,
    pub user_login: String,
    pub html_url: String,
}

/// A comment on an issue thread.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub user_login: String,
    pub body: String,
    pub html_url: String,
}

pub fn parse_issues(items: &[serde_json::Value]) -> Vec<Issue> {
    items.iter().filter_map(parse_issue).collect()
}

/// Parse a single item from the issues listing.
///
/// Returns `None` for pull requests (the issues endpoint returns both)
/// and for records missing the fields the session cannot work without.
/// Title and body may legitimately be absent; they default to empty and
/// the presenter substitutes placeholders.
pub fn parse_issue(item: &serde_json::Value) -> Option<Issue> {
    if !item["pull_request"].is_null() {
        return None;
    }

    let number = item["number"].as_u64()?;
    let owner = item["repository"]["owner"]["login"].as_str()?;
    let name = item["repository"]["name"].as_str()?;
    let html_url = item["html_url"].as_str()?;

    Some(Issue {
        repo: RepoId {
            owner: owner.to_string(),
            name: name.to_string(),
        },
        number,
        title: item["title"].as_str().unwrap_or_default().to_string(),
        body: item["body"].as_str().unwrap_or_default().to_string(),
        comments: item["comments"].as_u64().unwrap_or(0),
        user_login: item["user"]["login"].as_str().unwrap_or_default().to_string(),
        html_url: html_url.to_string(),
    })
}

pub fn parse_comments(items: &[serde_json::Value]) -> Vec<Comment> {
    items.iter().map(parse_comment).collect()
}

pub fn parse_comment(item: &serde_json::Value) -> Comment {
    Comment {
        user_login: item["user"]["login"].as_str().unwrap_or_default().to_string(),
        body: item["body"].as_str().unwrap_or_default().to_string(),
        html_url: item["html_url"].as_str().unwrap_or_default().to_string(),
    }
}
