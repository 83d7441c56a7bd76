use scribe_core::{DiffTotals, FileDelta};

/// Parsed diff-stat stream: ordered per-file deltas plus totals.
#[derive(Debug, Clone, Default)]
pub struct DiffSummary {
    pub deltas: Vec<FileDelta>,
    pub totals: DiffTotals,
}

/// Parse a textual diff-summary stream in the conventional
/// `"path | N ++--"` shape.
///
/// A line participates iff it contains a pipe separator and at least one
/// digit; everything else is skipped silently. `added`/`removed` are the
/// counts of literal `+`/`-` glyphs after the pipe: a magnitude
/// heuristic, not an exact line count, because the upstream format
/// truncates large changes to a fixed number of glyphs. Repeated paths
/// keep their first position in the list; the later counts win.
pub fn parse_diff_stat(text: &str) -> DiffSummary {
    let mut deltas: Vec<FileDelta> = Vec::new();

    for line in text.lines() {
        if !line.chars().any(|c| c.is_ascii_digit()) {
            continue;
        }
        let Some((path_part, stat_part)) = line.split_once(" | ") else {
            continue;
        };
        let path = path_part.trim();
        if path.is_empty() {
            continue;
        }

        let added = stat_part.chars().filter(|&c| c == '+').count() as u32;
        let removed = stat_part.chars().filter(|&c| c == '-').count() as u32;

        match deltas.iter().position(|d| d.path == path) {
            Some(i) => {
                deltas[i].added = added;
                deltas[i].removed = removed;
            }
            None => deltas.push(FileDelta {
                path: path.to_string(),
                added,
                removed,
            }),
        }
    }

    let totals = DiffTotals::from_deltas(&deltas);
    DiffSummary { deltas, totals }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_glyphs_not_lines() {
        let s = parse_diff_stat("src/app.go | 12 +++++-----");
        assert_eq!(s.deltas.len(), 1);
        assert_eq!(s.deltas[0].path, "src/app.go");
        assert_eq!(s.deltas[0].added, 5);
        assert_eq!(s.deltas[0].removed, 5);
    }

    #[test]
    fn skips_non_matching_lines() {
        let text = "\
commit text without pipe
 3 files changed, 10 insertions(+), 2 deletions(-)
 src/lib.rs | 4 ++--
";
        let s = parse_diff_stat(text);
        assert_eq!(s.deltas.len(), 1);
        assert_eq!(s.deltas[0].path, "src/lib.rs");
    }

    #[test]
    fn totals_match_final_delta_list() {
        let text = "\
 a.rs | 3 ++-
 b.rs | 2 ++
";
        let s = parse_diff_stat(text);
        assert_eq!(s.totals.files_changed, s.deltas.len());
        assert_eq!(s.totals.lines_added, 4);
        assert_eq!(s.totals.lines_removed, 1);
    }

    #[test]
    fn repeated_path_keeps_position_last_write_wins() {
        let text = "\
 a.rs | 3 ++-
 b.rs | 2 ++
 a.rs | 6 ++++--
";
        let s = parse_diff_stat(text);
        assert_eq!(s.deltas.len(), 2);
        assert_eq!(s.deltas[0].path, "a.rs");
        assert_eq!(s.deltas[0].added, 4);
        assert_eq!(s.deltas[0].removed, 2);
        assert_eq!(s.totals.files_changed, 2);
    }

    #[test]
    fn empty_input_is_empty_summary() {
        let s = parse_diff_stat("");
        assert!(s.deltas.is_empty());
        assert_eq!(s.totals, DiffTotals::default());
    }
}
