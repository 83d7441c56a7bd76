use scribe_core::category::{CHANGELOG_ORDER, SUMMARY_ORDER};
use scribe_core::clock;
use scribe_core::{ActivitySnapshot, WorklistConfig};

// ── Renderers ──
//
// All four views are pure functions of one snapshot (plus the externally
// supplied worklist configuration); they never touch the filesystem or
// re-query collaborators.

/// Narrative session summary: commits grouped by category, file deltas
/// sorted by churn, code metrics, and a trailing uncommitted-changes
/// warning block when the tree is dirty.
pub fn render_summary(snap: &ActivitySnapshot) -> String {
    let date = clock::format_date(snap.window.end);
    let duration = clock::format_duration(snap.window.duration());

    let mut out = String::new();
    out.push_str(&format!("# Session Summary - {date}\n\n"));
    out.push_str(&format!("**Duration:** {duration}\n"));
    out.push_str(&format!(
        "**Time:** {}\n",
        clock::format_clock(snap.window.end)
    ));
    out.push_str(&format!("**Branch:** {}\n", snap.branch));
    if !snap.remote_status.is_empty() {
        out.push_str(&format!("**Remote Status:** {}\n", snap.remote_status));
    }
    if snap.window.start_fallback {
        out.push_str(
            "\n> Note: no session start reference was available; duration reflects a near-zero window.\n",
        );
    }

    if !snap.commits.is_empty() {
        out.push_str(&format!(
            "\n## Commits Made ({} total)\n\n",
            snap.commits.len()
        ));
        for cat in SUMMARY_ORDER {
            let commits = snap.commits_in(cat);
            if commits.is_empty() {
                continue;
            }
            out.push_str(&format!("### {}\n", cat.label()));
            for c in commits {
                out.push_str(&format!("- `{}` - {}\n", c.hash, c.subject));
            }
            out.push('\n');
        }
    }

    if !snap.file_deltas.is_empty() {
        out.push_str(&format!(
            "## Files Modified ({} files)\n",
            snap.totals.files_changed
        ));
        let mut sorted: Vec<_> = snap.file_deltas.iter().collect();
        sorted.sort_by(|a, b| (b.added + b.removed).cmp(&(a.added + a.removed)));
        for d in sorted {
            out.push_str(&format!("- `{}` (+{}, -{})\n", d.path, d.added, d.removed));
        }
        out.push('\n');
    }

    out.push_str("## Code Metrics\n");
    out.push_str(&format!(
        "- Total files changed: {}\n",
        snap.totals.files_changed
    ));
    out.push_str(&format!("- Lines added: +{}\n", snap.totals.lines_added));
    out.push_str(&format!(
        "- Lines removed: -{}\n",
        snap.totals.lines_removed
    ));
    out.push_str(&format!("- Net change: {:+}\n", snap.totals.net_change()));
    out.push_str(&format!("- Total commits: {}\n", snap.commits.len()));

    if !snap.commits.is_empty() {
        out.push_str("\n## Commits by Category\n");
        for cat in SUMMARY_ORDER {
            let n = snap.commits_in(cat).len();
            if n > 0 {
                out.push_str(&format!("- {}: {n}\n", cat.label()));
            }
        }
    }

    if snap.has_uncommitted_changes {
        out.push_str(&format!(
            "\n**Warning:** uncommitted changes detected:\n```\n{}\n```\n",
            snap.uncommitted_status.trim_end()
        ));
    }

    out
}

/// Task board: live counts from the task tracker plus the configured
/// priority tiers. Item content comes entirely from the configuration.
pub fn render_worklist(snap: &ActivitySnapshot, config: &WorklistConfig) -> String {
    let date = clock::format_date(snap.window.end);
    let t = &snap.task_counts;

    let mut out = String::new();
    if config.title.is_empty() {
        out.push_str("# Project Worklist\n");
    } else {
        out.push_str(&format!("# Project Worklist - {}\n", config.title));
    }
    out.push_str(&format!("**Last Updated:** {date}\n\n"));

    out.push_str("## Statistics\n");
    out.push_str(&format!("- Total Items: {}\n", t.total));
    out.push_str(&format!("- Completed: {}\n", t.completed));
    out.push_str(&format!("- In Progress: {}\n", t.in_progress));
    out.push_str(&format!("- Pending: {}\n", t.pending));

    for tier in &config.tiers {
        out.push_str(&format!(
            "\n## {} - {} items\n",
            tier.label,
            tier.items.len()
        ));
        if tier.items.is_empty() {
            out.push_str("- (none)\n");
        }
        for item in &tier.items {
            out.push_str(&format!("- [ ] {item}\n"));
        }
    }

    out.push_str(&format!(
        "\n---\n*Updated: {}*\n",
        clock::format_timestamp(snap.window.end)
    ));
    out
}

/// Categorized changelog for the session window. Categories with zero
/// commits are omitted; unclassified commits land in a trailing OTHER
/// section rather than being dropped.
pub fn render_changelog(snap: &ActivitySnapshot) -> String {
    let date = clock::format_date(snap.window.end);
    let duration = clock::format_duration(snap.window.duration());

    let mut out = String::new();
    out.push_str(&format!("# Changelog - {date}\n\n"));
    out.push_str(&format!("**Session Duration:** {duration}\n"));
    out.push_str(&format!("**Total Commits:** {}\n\n", snap.commits.len()));

    for cat in CHANGELOG_ORDER {
        let commits = snap.commits_in(cat);
        if commits.is_empty() {
            continue;
        }
        out.push_str(&format!("## {}\n", cat.label()));
        for c in commits {
            out.push_str(&format!("- `{}` - {}\n", c.hash, c.subject));
        }
        out.push('\n');
    }

    out
}

/// Plain key/value metrics report. The estimated-remaining-work breakdown
/// is configuration, not derived data.
pub fn render_metrics(snap: &ActivitySnapshot, config: &WorklistConfig) -> String {
    let date = clock::format_date(snap.window.end);
    let t = &snap.task_counts;

    let mut out = String::new();
    out.push_str(&format!("SESSION METRICS - {date}\n"));
    out.push_str(&"=".repeat(50));
    out.push_str("\n\n");

    out.push_str(&format!(
        "Duration: {}\n",
        clock::format_duration(snap.window.duration())
    ));
    out.push_str(&format!(
        "Start Time: {}\n",
        clock::format_clock(snap.window.start)
    ));
    out.push_str(&format!(
        "End Time: {}\n\n",
        clock::format_clock(snap.window.end)
    ));

    out.push_str("FILES CHANGED:\n");
    out.push_str(&format!("  Total: {}\n", snap.totals.files_changed));
    out.push_str(&format!("  Lines Added: +{}\n", snap.totals.lines_added));
    out.push_str(&format!(
        "  Lines Removed: -{}\n",
        snap.totals.lines_removed
    ));
    out.push_str(&format!("  Net Change: {:+}\n\n", snap.totals.net_change()));

    out.push_str("GIT ACTIVITY:\n");
    out.push_str(&format!("  Commits: {}\n", snap.commits.len()));
    out.push_str(&format!(
        "  Uncommitted Changes: {}\n\n",
        if snap.has_uncommitted_changes {
            "Yes"
        } else {
            "No"
        }
    ));

    out.push_str("TASK METRICS:\n");
    out.push_str(&format!("  Completed: {}\n", t.completed));
    out.push_str(&format!("  In Progress: {}\n", t.in_progress));
    out.push_str(&format!("  Pending: {}\n", t.pending));
    out.push_str(&format!("  Total: {}\n\n", t.total));

    out.push_str("ESTIMATED REMAINING WORK:\n");
    for tier in &config.tiers {
        out.push_str(&format!(
            "  {}: ~{} hours\n",
            tier.label, tier.estimated_hours
        ));
    }
    out.push_str(&format!(
        "  TOTAL: ~{} hours\n",
        config.total_estimated_hours()
    ));

    out.push_str(&format!(
        "\n---\nGenerated: {}\n",
        clock::format_timestamp(snap.window.end)
    ));
    out
}
