use std::io::{BufRead, Write};

use anyhow::Result;

use crate::github::IssueApi;
use crate::github::client::GitHubClient;
use crate::highlight::{AnsiHighlight, Highlight};
use crate::presenter;
use crate::prompt::{self, Outcome};

pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const TOKEN_GUIDANCE: &str = "Please set the GITHUB_TOKEN environment variable\n\
    You can get one here (with repo scope): https://github.com/settings/tokens/new";

/// Fetch the stale issue list once, then present each issue and run the
/// per-issue prompt until the list is exhausted or the user quits.
///
/// Comments are fetched lazily: issues reporting a zero comment count
/// never trigger a thread fetch.
pub async fn run_session<A, B, R, W, H>(
    api: &A,
    open_url: B,
    input: &mut R,
    out: &mut W,
    hl: &H,
) -> Result<()>
where
    A: IssueApi + Sync,
    B: Fn(&str) -> Result<()>,
    R: BufRead,
    W: Write,
    H: Highlight,
{
    let issues = api.list_stale_issues().await?;

    for issue in &issues {
        presenter::print_issue(issue, out, hl)?;
        if issue.comments > 0 {
            let comments = api.list_comments(&issue.repo, issue.number).await?;
            presenter::print_comments(issue, &comments, out, hl)?;
        }

        match prompt::action_loop(issue, api, &open_url, input, out, hl).await? {
            // Dealt-with issues get a closing rule; quitting does not.
            Outcome::NextIssue => presenter::print_footer(issue, out)?,
            Outcome::Quit => break,
        }
    }

    Ok(())
}

/// Entry point for the binary: wires the live client, stdin/stdout, the
/// system browser opener, and ANSI highlighting into the session.
///
/// A missing token is not an error: print guidance and exit cleanly.
pub async fn run() -> Result<()> {
    let token = match std::env::var(TOKEN_ENV) {
        Ok(token) if !token.is_empty() => token,
        _ => {
            println!("{TOKEN_GUIDANCE}");
            return Ok(());
        }
    };

    let client = GitHubClient::new(token)?;
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout();

    run_session(
        &client,
        |url| open::that(url).map_err(anyhow::Error::from),
        &mut input,
        &mut out,
        &AnsiHighlight,
    )
    .await
}
