use std::io::{BufRead, Write};

use anyhow::Result;

use crate::github::IssueApi;
use crate::github::issues::Issue;
use crate::highlight::Highlight;

pub const PROMPT: &str = "What should I do? [r/o/q/?] (empty to skip): ";
pub const REPLY_PROMPT: &str = "Reply with what? (empty to cancel): ";
pub const INVALID_NOTICE: &str = "Please enter a valid option!";
pub const HELP: &str = "[r]eply to the current issue\n\
                        [o]pen the issue in your web browser\n\
                        [q]uit the application";

/// Per-issue command, dispatched on the first byte of the input line.
#[derive(Debug, PartialEq)]
pub enum Action {
    Skip,
    Reply,
    Open,
    Quit,
    Help,
    Invalid,
}

/// What the caller should do once the loop returns.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    NextIssue,
    Quit,
}

pub fn parse_action(line: &str) -> Action {
    match line.as_bytes().first() {
        None => Action::Skip,
        Some(b'r') => Action::Reply,
        Some(b'o') => Action::Open,
        Some(b'q') => Action::Quit,
        Some(b'?') => Action::Help,
        Some(_) => Action::Invalid,
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

/// Run the interactive prompt for one issue until the user decides.
///
/// `open_url` failures are swallowed: opening a browser is best-effort
/// and never aborts the session. `open` and `?` fall back to the prompt
/// line without repainting the issue.
pub async fn action_loop<A, B, R, W, H>(
    issue: &Issue,
    api: &A,
    open_url: &B,
    input: &mut R,
    out: &mut W,
    hl: &H,
) -> Result<Outcome>
where
    A: IssueApi + Sync,
    B: Fn(&str) -> Result<()>,
    R: BufRead,
    W: Write,
    H: Highlight,
{
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;
        let line = read_line(input)?;

        match parse_action(&line) {
            Action::Skip => return Ok(Outcome::NextIssue),
            Action::Reply => {
                write!(out, "{REPLY_PROMPT}")?;
                out.flush()?;
                let reply = read_line(input)?;
                if reply.is_empty() {
                    continue;
                }
                writeln!(out, "Replying with `{reply}`...")?;
                let comment = api.create_comment(&issue.repo, issue.number, &reply).await?;
                writeln!(out, "Reply can be viewed at {}", comment.html_url)?;
                return Ok(Outcome::NextIssue);
            }
            Action::Open => {
                writeln!(out, "Opening {}...", issue.html_url)?;
                let _ = open_url(&issue.html_url);
            }
            Action::Quit => return Ok(Outcome::Quit),
            Action::Help => writeln!(out, "{HELP}")?,
            Action::Invalid => writeln!(out, "{}", hl.error(INVALID_NOTICE))?,
        }
    }
}
