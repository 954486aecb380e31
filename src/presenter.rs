use std::io::Write;

use crate::github::issues::{Comment, Issue};
use crate::highlight::Highlight;

pub const NO_TITLE: &str = "No title.";
pub const NO_BODY: &str = "No description provided.";

/// Issue title with the placeholder substituted for empty input.
pub fn display_title(issue: &Issue) -> &str {
    if issue.title.is_empty() {
        NO_TITLE
    } else {
        &issue.title
    }
}

/// Issue body with the placeholder substituted for empty input.
pub fn display_body(issue: &Issue) -> &str {
    if issue.body.is_empty() {
        NO_BODY
    } else {
        &issue.body
    }
}

/// Header line without styling, used for display and for sizing the
/// separator rule above it.
pub fn format_header(issue: &Issue) -> String {
    format!("{}#{} {}", issue.repo, issue.number, display_title(issue))
}

pub fn format_comment(comment: &Comment) -> String {
    format!("[{}] {}", comment.user_login, comment.body)
}

fn rule(len: usize) -> String {
    "-".repeat(len)
}

/// Print the separator rule, the header, and the body of one issue.
pub fn print_issue<W: Write, H: Highlight>(
    issue: &Issue,
    out: &mut W,
    hl: &H,
) -> std::io::Result<()> {
    let header = format_header(issue);
    writeln!(out, "{}", rule(header.chars().count()))?;
    writeln!(
        out,
        "{}#{} {}",
        issue.repo,
        hl.accent(&issue.number.to_string()),
        display_title(issue)
    )?;
    writeln!(out, "{}", hl.dim(display_body(issue)))?;
    Ok(())
}

/// Print the closing rule once an issue has been dealt with, sized like
/// the one above its header so the block is framed on both sides.
pub fn print_footer<W: Write>(issue: &Issue, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", rule(format_header(issue).chars().count()))
}

/// Print a separator rule sized to the displayed body, then the comment
/// thread in the order received.
pub fn print_comments<W: Write, H: Highlight>(
    issue: &Issue,
    comments: &[Comment],
    out: &mut W,
    hl: &H,
) -> std::io::Result<()> {
    writeln!(out, "{}", rule(display_body(issue).chars().count()))?;
    for comment in comments {
        writeln!(out, "{}", hl.dim(&format_comment(comment)))?;
    }
    Ok(())
}
