use std::path::{Path, PathBuf};
use std::time::Duration;

use scribe_core::clock;
use scribe_core::{CommitRecord, SessionWindow};
use thiserror::Error;
use tokio::process::Command;

/// Bound on every git sub-query; a timeout degrades like any other failure.
pub const GIT_TIMEOUT: Duration = Duration::from_secs(10);

/// Unit/record separators for the log format string. Neither can appear
/// in commit metadata, so multi-line bodies survive the split.
const FIELD_SEP: char = '\u{1f}';
const RECORD_SEP: char = '\u{1e}';

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("git not available: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("`{argv}` exited with {code}: {stderr}")]
    NonZero {
        argv: String,
        code: i32,
        stderr: String,
    },
    #[error("`{argv}` timed out after {seconds}s")]
    Timeout { argv: String, seconds: u64 },
}

/// Raw results of the VCS sub-queries, after fail-soft degradation.
#[derive(Debug, Clone)]
pub struct GitActivity {
    pub commits: Vec<CommitRecord>,
    /// Raw `--stat` stream for the session window; parsed elsewhere.
    pub diff_stat_text: String,
    pub has_uncommitted_changes: bool,
    /// Raw short-status listing; empty when the tree is clean.
    pub uncommitted_status: String,
    pub branch: String,
    pub remote_status: String,
}

/// Read-only queries against a git repository. Every sub-query is
/// independent and bounded by [`GIT_TIMEOUT`].
#[derive(Debug, Clone)]
pub struct GitQuery {
    root: PathBuf,
}

impl GitQuery {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    async fn run(&self, args: &[&str]) -> Result<String, QueryError> {
        let argv = format!("git {}", args.join(" "));
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .kill_on_drop(true)
            .output();

        match tokio::time::timeout(GIT_TIMEOUT, output).await {
            Ok(Ok(out)) if out.status.success() => {
                Ok(String::from_utf8_lossy(&out.stdout).into_owned())
            }
            Ok(Ok(out)) => Err(QueryError::NonZero {
                argv,
                code: out.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
            }),
            Ok(Err(e)) => Err(QueryError::Spawn(e)),
            Err(_) => Err(QueryError::Timeout {
                argv,
                seconds: GIT_TIMEOUT.as_secs(),
            }),
        }
    }

    /// Commits whose timestamp is at or after `since` (RFC 3339), in log
    /// order (reverse-chronological).
    pub async fn commits_since(&self, since: &str) -> Result<Vec<CommitRecord>, QueryError> {
        let since_arg = format!("--since={since}");
        let format_arg = format!(
            "--format=%H{FIELD_SEP}%s{FIELD_SEP}%an{FIELD_SEP}%ai{FIELD_SEP}%b{RECORD_SEP}"
        );
        let stdout = self.run(&["log", &since_arg, &format_arg]).await?;
        Ok(parse_log_records(&stdout))
    }

    /// Per-commit `--stat` blocks for the same window, as raw text for the
    /// diff-stat parser.
    pub async fn diff_stat_since(&self, since: &str) -> Result<String, QueryError> {
        let since_arg = format!("--since={since}");
        self.run(&["log", &since_arg, "--format=format:", "--stat"])
            .await
    }

    /// Raw short-status listing; empty output means a clean tree.
    pub async fn working_tree_status(&self) -> Result<String, QueryError> {
        self.run(&["status", "--short"]).await
    }

    pub async fn current_branch(&self) -> Result<String, QueryError> {
        let stdout = self.run(&["branch", "--show-current"]).await?;
        Ok(stdout.trim().to_string())
    }

    /// One-line ahead/behind summary from the porcelain branch header.
    pub async fn remote_status(&self) -> Result<String, QueryError> {
        let stdout = self.run(&["status", "--porcelain", "--branch"]).await?;
        Ok(stdout.lines().next().unwrap_or("").to_string())
    }
}

fn parse_log_records(stdout: &str) -> Vec<CommitRecord> {
    let mut commits = Vec::new();
    for record in stdout.split(RECORD_SEP) {
        let record = record.trim();
        if record.is_empty() {
            continue;
        }
        let mut fields = record.splitn(5, FIELD_SEP);
        let (Some(hash), Some(subject)) = (fields.next(), fields.next()) else {
            continue;
        };
        if hash.trim().is_empty() {
            continue;
        }
        let author = fields.next().unwrap_or("Unknown");
        let timestamp = fields.next().unwrap_or("");
        let body = fields.next().unwrap_or("").trim();
        commits.push(CommitRecord::new(
            hash.trim(),
            subject,
            author,
            timestamp,
            body,
        ));
    }
    commits
}

fn soft<T>(result: Result<T, QueryError>, what: &str, default: T) -> T {
    match result {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("{what} query degraded to default: {e}");
            default
        }
    }
}

/// Issue every sub-query concurrently and degrade any failure to its
/// empty/unknown default. The archiver always produces output, even with
/// no VCS signal available.
pub async fn collect_activity(root: &Path, window: &SessionWindow) -> GitActivity {
    let q = GitQuery::new(root);
    let since = clock::format_rfc3339(window.start);

    let (commits, diff_stat, status, branch, remote) = tokio::join!(
        q.commits_since(&since),
        q.diff_stat_since(&since),
        q.working_tree_status(),
        q.current_branch(),
        q.remote_status(),
    );

    let commits = soft(commits, "commit log", Vec::new());
    let diff_stat_text = soft(diff_stat, "diff stat", String::new());
    let status_text = soft(status, "working tree status", String::new());
    let branch = soft(branch, "current branch", "unknown".to_string());
    let remote_status = soft(remote, "remote status", String::new());

    let has_uncommitted_changes = !status_text.trim().is_empty();
    GitActivity {
        commits,
        diff_stat_text,
        uncommitted_status: if has_uncommitted_changes {
            status_text
        } else {
            String::new()
        },
        has_uncommitted_changes,
        branch,
        remote_status,
    }
}
