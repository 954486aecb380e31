use crate::TriageWorld;
use anyhow::Result;
use async_trait::async_trait;
use cucumber::{given, then, when};
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Mutex;

use triage::github::IssueApi;
use triage::github::issues::{Comment, Issue, RepoId};
use triage::highlight::PlainHighlight;
use triage::run::run_session;

struct FakeApi {
    issues: Vec<Issue>,
    comments: HashMap<u64, Vec<Comment>>,
    created: Mutex<Vec<(String, u64, String)>>,
    comment_fetches: Mutex<Vec<u64>>,
}

#[async_trait]
impl IssueApi for FakeApi {
    async fn list_stale_issues(&self) -> Result<Vec<Issue>> {
        Ok(self.issues.clone())
    }

    async fn list_comments(&self, _repo: &RepoId, number: u64) -> Result<Vec<Comment>> {
        self.comment_fetches.lock().unwrap().push(number);
        Ok(self.comments.get(&number).cloned().unwrap_or_default())
    }

    async fn create_comment(&self, repo: &RepoId, number: u64, body: &str) -> Result<Comment> {
        self.created
            .lock()
            .unwrap()
            .push((repo.to_string(), number, body.to_string()));
        Ok(Comment {
            user_login: "me".to_string(),
            body: body.to_string(),
            html_url: format!("https://github.com/{repo}/issues/{number}#issuecomment-1"),
        })
    }
}

#[given(
    expr = "a stale issue in {string} numbered {int} titled {string} with body {string} and {int} comments"
)]
async fn a_stale_issue(
    world: &mut TriageWorld,
    repo: String,
    number: u64,
    title: String,
    body: String,
    comments: u64,
) {
    let (owner, name) = repo
        .split_once('/')
        .expect("repository must be <owner>/<repo>");
    world.issues.push(Issue {
        repo: RepoId {
            owner: owner.to_string(),
            name: name.to_string(),
        },
        number,
        title,
        body,
        comments,
        user_login: "octocat".to_string(),
        html_url: format!("https://github.com/{repo}/issues/{number}"),
    });
}

#[given(expr = "issue {int} has a comment by {string} saying {string}")]
async fn issue_has_comment(world: &mut TriageWorld, number: u64, login: String, body: String) {
    world.comments.entry(number).or_default().push(Comment {
        user_login: login,
        body,
        html_url: String::new(),
    });
}

#[given(expr = "the user will type {string}")]
async fn user_will_type(world: &mut TriageWorld, line: String) {
    world.script.push(line);
}

#[when("the session runs")]
async fn session_runs(world: &mut TriageWorld) {
    let api = FakeApi {
        issues: world.issues.clone(),
        comments: world.comments.clone(),
        created: Mutex::new(Vec::new()),
        comment_fetches: Mutex::new(Vec::new()),
    };
    let opened = Mutex::new(Vec::new());

    let mut script = world.script.join("\n");
    if !script.is_empty() {
        script.push('\n');
    }
    let mut reader = Cursor::new(script.into_bytes());
    let mut out = Vec::new();

    run_session(
        &api,
        |url: &str| -> Result<()> {
            opened.lock().unwrap().push(url.to_string());
            Ok(())
        },
        &mut reader,
        &mut out,
        &PlainHighlight,
    )
    .await
    .expect("session should not fail against the fake API");

    world.output = String::from_utf8(out).expect("session output should be UTF-8");
    world.created = api.created.into_inner().unwrap();
    world.comment_fetches = api.comment_fetches.into_inner().unwrap();
    world.opened = opened.into_inner().unwrap();
}

#[then(expr = "the output contains {string}")]
async fn output_contains(world: &mut TriageWorld, expected: String) {
    assert!(
        world.output.contains(&expected),
        "expected output to contain {:?}, got:\n{}",
        expected,
        world.output
    );
}

#[then(expr = "the output does not contain {string}")]
async fn output_does_not_contain(world: &mut TriageWorld, unexpected: String) {
    assert!(
        !world.output.contains(&unexpected),
        "expected output not to contain {:?}, got:\n{}",
        unexpected,
        world.output
    );
}

#[then("no comment thread was fetched")]
async fn no_comment_thread_fetched(world: &mut TriageWorld) {
    assert!(
        world.comment_fetches.is_empty(),
        "unexpected comment fetches: {:?}",
        world.comment_fetches
    );
}

#[then(expr = "the comment thread of issue {int} was fetched")]
async fn comment_thread_fetched(world: &mut TriageWorld, number: u64) {
    assert_eq!(world.comment_fetches, vec![number]);
}

#[then("no comments were created")]
async fn no_comments_created(world: &mut TriageWorld) {
    assert!(
        world.created.is_empty(),
        "unexpected comments created: {:?}",
        world.created
    );
}

#[then(expr = "exactly one comment with body {string} was created on issue {int}")]
async fn one_comment_created(world: &mut TriageWorld, body: String, number: u64) {
    assert_eq!(world.created.len(), 1, "created: {:?}", world.created);
    assert_eq!(world.created[0].1, number);
    assert_eq!(world.created[0].2, body);
}

#[then(expr = "the browser opened {string}")]
async fn browser_opened(world: &mut TriageWorld, url: String) {
    assert_eq!(world.opened, vec![url]);
}
