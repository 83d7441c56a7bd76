use anyhow::Context;
use std::path::{Path, PathBuf};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use scribe_archive::{
    update_changelog_archive, update_worklist, write_session_docs, ScribePaths, SessionDocs,
    WorkspaceLock,
};
use scribe_core::clock;
use scribe_core::{SessionWindow, TaskCounts, WorklistConfig};
use scribe_report::{
    build_snapshot, render_changelog, render_metrics, render_summary, render_worklist,
};
use scribe_vcs::{collect_activity, parse_diff_stat};

/// Environment variable consulted when `--since` is absent.
const SESSION_START_ENV: &str = "SCRIBE_SESSION_START";

pub struct ArchiveParams<'a> {
    pub cwd: &'a Path,
    pub since: Option<&'a str>,
    pub root: Option<&'a str>,
    pub tasks: Option<&'a str>,
    pub config: Option<&'a str>,
}

pub fn execute(params: &ArchiveParams<'_>) -> anyhow::Result<()> {
    let root = resolve_root(params);
    let paths = ScribePaths::discover(&root);

    let now = OffsetDateTime::now_utc();
    let window = resolve_window(params.since, now)?;
    let date = clock::format_date(window.end);

    // Gather. The VCS sub-queries run concurrently and each fails soft;
    // the run continues on any degradation.
    let activity =
        tokio::runtime::Runtime::new()?.block_on(collect_activity(&root, &window));
    let diff = parse_diff_stat(&activity.diff_stat_text);
    let task_counts = load_task_counts(&paths, params.tasks);
    let worklist_cfg = load_worklist_config(&paths, params.config);

    let snapshot = build_snapshot(window, activity, diff, task_counts);

    let docs = SessionDocs {
        summary: render_summary(&snapshot),
        worklist: render_worklist(&snapshot, &worklist_cfg),
        changelog: render_changelog(&snapshot),
        metrics: render_metrics(&snapshot, &worklist_cfg),
    };

    // Persist under the workspace lock. Failures past this point are
    // fatal: the artifacts are the whole point of the run.
    paths.ensure_layout()?;
    let _lock = WorkspaceLock::acquire(&paths)?;
    let artifacts = write_session_docs(&paths, &date, &docs)?;
    let worklist_path = update_worklist(&paths, &date, &docs.worklist)?;
    let archive_path = update_changelog_archive(&paths, &docs.changelog)?;

    println!(
        "Session archived ({})",
        clock::format_duration(snapshot.window.duration())
    );
    println!("  Summary:   {}", artifacts.summary.display());
    println!("  Worklist:  {}", artifacts.worklist.display());
    println!("  Changelog: {}", artifacts.changelog.display());
    println!("  Metrics:   {}", artifacts.metrics.display());
    println!("  Project worklist:  {}", worklist_path.display());
    println!("  Changelog archive: {}", archive_path.display());
    Ok(())
}

fn resolve_root(params: &ArchiveParams<'_>) -> PathBuf {
    if let Some(r) = params.root {
        return PathBuf::from(r);
    }
    ScribePaths::find_root(params.cwd).unwrap_or_else(|| params.cwd.to_path_buf())
}

/// Resolve the session window: explicit `--since`, then the environment,
/// then a flagged near-zero fallback ending at `now`.
fn resolve_window(since: Option<&str>, now: OffsetDateTime) -> anyhow::Result<SessionWindow> {
    let supplied = match since {
        Some(s) => Some(s.to_string()),
        None => std::env::var(SESSION_START_ENV).ok(),
    };
    match supplied {
        Some(raw) => {
            let start = OffsetDateTime::parse(raw.trim(), &Rfc3339)
                .with_context(|| format!("invalid session start instant: {raw}"))?;
            Ok(SessionWindow::new(start, now))
        }
        None => {
            tracing::warn!("no session start reference; reporting a near-zero session");
            Ok(SessionWindow::fallback(now))
        }
    }
}

fn load_task_counts(paths: &ScribePaths, overridden: Option<&str>) -> TaskCounts {
    let path = overridden
        .map(PathBuf::from)
        .unwrap_or_else(|| paths.tasks_json.clone());
    match std::fs::read_to_string(&path) {
        Ok(text) => match TaskCounts::from_json(&text) {
            Ok(counts) => counts,
            Err(e) => {
                tracing::warn!("task snapshot {} unreadable: {e}", path.display());
                TaskCounts::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => TaskCounts::default(),
        Err(e) => {
            tracing::warn!("task snapshot {} unreadable: {e}", path.display());
            TaskCounts::default()
        }
    }
}

fn load_worklist_config(paths: &ScribePaths, overridden: Option<&str>) -> WorklistConfig {
    let path = overridden
        .map(PathBuf::from)
        .unwrap_or_else(|| paths.worklist_yaml.clone());
    match std::fs::read_to_string(&path) {
        Ok(text) => match WorklistConfig::from_yaml(&text) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!("worklist config {} unreadable: {e}", path.display());
                WorklistConfig::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => WorklistConfig::default(),
        Err(e) => {
            tracing::warn!("worklist config {} unreadable: {e}", path.display());
            WorklistConfig::default()
        }
    }
}
