use scribe_core::{ActivitySnapshot, SessionWindow, TaskCounts};
use scribe_vcs::{DiffSummary, GitActivity};

/// Combine the raw VCS results, the parsed diff summary, and the external
/// task counts into one immutable [`ActivitySnapshot`].
///
/// This is the only place a snapshot is built; everything downstream reads
/// it and nothing mutates it, so the four rendered artifacts always agree.
pub fn build_snapshot(
    window: SessionWindow,
    git: GitActivity,
    diff: DiffSummary,
    task_counts: TaskCounts,
) -> ActivitySnapshot {
    ActivitySnapshot {
        window,
        commits: git.commits,
        file_deltas: diff.deltas,
        totals: diff.totals,
        branch: git.branch,
        remote_status: git.remote_status,
        has_uncommitted_changes: git.has_uncommitted_changes,
        uncommitted_status: git.uncommitted_status,
        task_counts,
    }
}
