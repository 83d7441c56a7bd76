use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::category::{classify, Category};

// ── Session window ──

/// The time span, from a reference start instant to "now", over which
/// activity is collected.
#[derive(Debug, Clone, Copy)]
pub struct SessionWindow {
    pub start: OffsetDateTime,
    pub end: OffsetDateTime,
    /// True when the reference start instant was missing and the window
    /// degraded to a near-zero span ending at `end`.
    pub start_fallback: bool,
}

impl SessionWindow {
    /// Build a window, clamping so `end >= start` always holds.
    pub fn new(start: OffsetDateTime, end: OffsetDateTime) -> Self {
        let start = if start > end { end } else { start };
        Self {
            start,
            end,
            start_fallback: false,
        }
    }

    /// Window for a missing reference instant: zero duration ending at `end`.
    pub fn fallback(end: OffsetDateTime) -> Self {
        Self {
            start: end,
            end,
            start_fallback: true,
        }
    }

    /// Elapsed time; never negative.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

// ── Commits ──

/// One immutable version-control change record.
#[derive(Debug, Clone)]
pub struct CommitRecord {
    /// Short hash, truncated to 7 hex characters.
    pub hash: String,
    pub subject: String,
    pub author: String,
    /// Commit timestamp as reported by the log query, verbatim.
    pub timestamp_text: String,
    /// Derived from the subject at construction; not stored upstream.
    pub category: Category,
    pub body: String,
}

impl CommitRecord {
    pub fn new(
        hash: &str,
        subject: &str,
        author: &str,
        timestamp_text: &str,
        body: &str,
    ) -> Self {
        Self {
            hash: hash.chars().take(7).collect(),
            subject: subject.to_string(),
            author: author.to_string(),
            timestamp_text: timestamp_text.to_string(),
            category: classify(subject),
            body: body.to_string(),
        }
    }
}

// ── File deltas ──

/// Per-file addition/removal magnitude from the diff-stat stream.
///
/// Counts are glyph counts, not exact line counts: the upstream format
/// truncates large changes to a fixed number of `+`/`-` glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDelta {
    pub path: String,
    pub added: u32,
    pub removed: u32,
}

/// Aggregate totals over the final delta list, so `files_changed` always
/// equals the number of deltas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffTotals {
    pub files_changed: usize,
    pub lines_added: u32,
    pub lines_removed: u32,
}

impl DiffTotals {
    pub fn from_deltas(deltas: &[FileDelta]) -> Self {
        Self {
            files_changed: deltas.len(),
            lines_added: deltas.iter().map(|d| d.added).sum(),
            lines_removed: deltas.iter().map(|d| d.removed).sum(),
        }
    }

    pub fn net_change(&self) -> i64 {
        i64::from(self.lines_added) - i64::from(self.lines_removed)
    }
}

// ── Task tracking ──

/// Task-tracker counts, supplied by an external snapshot (`tasks.json`).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskCounts {
    pub total: u32,
    pub completed: u32,
    pub in_progress: u32,
    pub pending: u32,
}

impl TaskCounts {
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

// ── Aggregate root ──

/// One session's activity. Constructed once per run by the aggregator and
/// never mutated afterward; all rendered views read the same snapshot.
#[derive(Debug, Clone)]
pub struct ActivitySnapshot {
    pub window: SessionWindow,
    /// Log order (reverse-chronological); regrouped only for display.
    pub commits: Vec<CommitRecord>,
    /// Insertion order = order of appearance in the diff-stat stream.
    pub file_deltas: Vec<FileDelta>,
    pub totals: DiffTotals,
    pub branch: String,
    pub remote_status: String,
    pub has_uncommitted_changes: bool,
    pub uncommitted_status: String,
    pub task_counts: TaskCounts,
}

impl ActivitySnapshot {
    /// Commits carrying the given category, in log order.
    pub fn commits_in(&self, category: Category) -> Vec<&CommitRecord> {
        self.commits
            .iter()
            .filter(|c| c.category == category)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    #[test]
    fn window_clamps_inverted_bounds() {
        let end = OffsetDateTime::UNIX_EPOCH;
        let start = end + Duration::hours(1);
        let w = SessionWindow::new(start, end);
        assert_eq!(w.duration(), Duration::ZERO);
    }

    #[test]
    fn fallback_window_is_zero_length_and_flagged() {
        let now = OffsetDateTime::UNIX_EPOCH;
        let w = SessionWindow::fallback(now);
        assert!(w.start_fallback);
        assert_eq!(w.duration(), Duration::ZERO);
    }

    #[test]
    fn commit_record_truncates_hash_and_classifies() {
        let c = CommitRecord::new(
            "abcdef0123456789",
            "FIX: broken pipe",
            "alice",
            "2026-08-06 10:00:00 +0000",
            "",
        );
        assert_eq!(c.hash, "abcdef0");
        assert_eq!(c.category, Category::Fix);
    }

    #[test]
    fn totals_track_delta_list_size() {
        let deltas = vec![
            FileDelta {
                path: "a.rs".into(),
                added: 5,
                removed: 2,
            },
            FileDelta {
                path: "b.rs".into(),
                added: 0,
                removed: 7,
            },
        ];
        let t = DiffTotals::from_deltas(&deltas);
        assert_eq!(t.files_changed, deltas.len());
        assert_eq!(t.lines_added, 5);
        assert_eq!(t.lines_removed, 9);
        assert_eq!(t.net_change(), -4);
    }

    #[test]
    fn task_counts_parse_with_defaults() {
        let t = TaskCounts::from_json(r#"{"total": 4, "completed": 1}"#).unwrap();
        assert_eq!(t.total, 4);
        assert_eq!(t.completed, 1);
        assert_eq!(t.in_progress, 0);
        assert_eq!(t.pending, 0);
    }
}
