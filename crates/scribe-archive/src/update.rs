use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::paths::ScribePaths;

/// File names of the four per-session documents.
pub const SUMMARY_FILE: &str = "SESSION_SUMMARY.md";
pub const WORKLIST_FILE: &str = "WORKLIST.md";
pub const CHANGELOG_FILE: &str = "CHANGELOG.md";
pub const METRICS_FILE: &str = "METRICS.txt";

/// Separator between archived changelog entries.
const ARCHIVE_SEPARATOR: &str = "\n\n---\n\n";

/// The four rendered documents of one run.
#[derive(Debug, Clone)]
pub struct SessionDocs {
    pub summary: String,
    pub worklist: String,
    pub changelog: String,
    pub metrics: String,
}

/// Paths written by [`write_session_docs`].
#[derive(Debug, Clone)]
pub struct SessionArtifacts {
    pub dir: PathBuf,
    pub summary: PathBuf,
    pub worklist: PathBuf,
    pub changelog: PathBuf,
    pub metrics: PathBuf,
}

/// Write the four per-session documents into the dated folder.
///
/// Reruns on the same date land in the same folder and overwrite the
/// documents in place. Failures here are fatal: the artifacts are the
/// whole point of the run.
pub fn write_session_docs(
    paths: &ScribePaths,
    date: &str,
    docs: &SessionDocs,
) -> Result<SessionArtifacts> {
    let dir = paths.session_dir(date);
    fs::create_dir_all(&dir)
        .with_context(|| format!("cannot create session dir {}", dir.display()))?;

    let artifacts = SessionArtifacts {
        summary: dir.join(SUMMARY_FILE),
        worklist: dir.join(WORKLIST_FILE),
        changelog: dir.join(CHANGELOG_FILE),
        metrics: dir.join(METRICS_FILE),
        dir,
    };
    fs::write(&artifacts.summary, docs.summary.as_bytes())?;
    fs::write(&artifacts.worklist, docs.worklist.as_bytes())?;
    fs::write(&artifacts.changelog, docs.changelog.as_bytes())?;
    fs::write(&artifacts.metrics, docs.metrics.as_bytes())?;
    Ok(artifacts)
}

/// Overwrite the durable worklist wholesale with the latest rendered view
/// plus a session-history footer naming today's archive location. No
/// merge with prior content.
pub fn update_worklist(paths: &ScribePaths, date: &str, worklist_doc: &str) -> Result<PathBuf> {
    let mut content = String::with_capacity(worklist_doc.len() + 128);
    content.push_str(worklist_doc);
    content.push_str(&format!(
        "\n## Session History\n- **{date}**: Session archived - see `.scribe/sessions/{date}/`\n"
    ));
    fs::write(&paths.worklist_file, content.as_bytes()).with_context(|| {
        format!(
            "cannot write worklist {}",
            paths.worklist_file.display()
        )
    })?;
    Ok(paths.worklist_file.clone())
}

/// Prepend the new changelog above the existing archive.
///
/// Prior entries are preserved verbatim, newest first; no entry is ever
/// deleted or rewritten. The first run's document becomes the entire
/// archive. Safe to invoke multiple times per day.
pub fn update_changelog_archive(paths: &ScribePaths, changelog_doc: &str) -> Result<PathBuf> {
    let merged = match fs::read_to_string(&paths.archive_file) {
        Ok(existing) => format!("{changelog_doc}{ARCHIVE_SEPARATOR}{existing}"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => changelog_doc.to_string(),
        Err(e) => {
            return Err(e).with_context(|| {
                format!("cannot read archive {}", paths.archive_file.display())
            })
        }
    };
    fs::write(&paths.archive_file, merged.as_bytes()).with_context(|| {
        format!("cannot write archive {}", paths.archive_file.display())
    })?;
    Ok(paths.archive_file.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace() -> (tempfile::TempDir, ScribePaths) {
        let tmp = tempfile::tempdir().unwrap();
        let paths = ScribePaths::discover(tmp.path());
        paths.ensure_layout().unwrap();
        (tmp, paths)
    }

    fn docs(tag: &str) -> SessionDocs {
        SessionDocs {
            summary: format!("summary {tag}"),
            worklist: format!("worklist {tag}"),
            changelog: format!("changelog {tag}"),
            metrics: format!("metrics {tag}"),
        }
    }

    #[test]
    fn session_docs_land_in_dated_folder() {
        let (_tmp, paths) = workspace();
        let a = write_session_docs(&paths, "2026-08-06", &docs("one")).unwrap();
        assert_eq!(a.dir, paths.session_dir("2026-08-06"));
        assert!(a.summary.exists());
        assert!(a.worklist.exists());
        assert!(a.changelog.exists());
        assert!(a.metrics.exists());
    }

    #[test]
    fn rerun_same_date_overwrites_in_place() {
        let (_tmp, paths) = workspace();
        write_session_docs(&paths, "2026-08-06", &docs("one")).unwrap();
        let a = write_session_docs(&paths, "2026-08-06", &docs("two")).unwrap();
        assert_eq!(fs::read_to_string(&a.summary).unwrap(), "summary two");
        // Same dated folder, not a new one.
        assert_eq!(fs::read_dir(&paths.sessions_dir).unwrap().count(), 1);
    }

    #[test]
    fn worklist_is_overwrite_only() {
        let (_tmp, paths) = workspace();
        update_worklist(&paths, "2026-08-05", "W1 content").unwrap();
        update_worklist(&paths, "2026-08-06", "W2 content").unwrap();

        let content = fs::read_to_string(&paths.worklist_file).unwrap();
        assert!(content.starts_with("W2 content"));
        assert!(!content.contains("W1"));
        assert!(content.contains("2026-08-06"));
        assert!(!content.contains("2026-08-05"));
    }

    #[test]
    fn worklist_footer_names_the_dated_folder() {
        let (_tmp, paths) = workspace();
        update_worklist(&paths, "2026-08-06", "body").unwrap();
        let content = fs::read_to_string(&paths.worklist_file).unwrap();
        assert!(content.contains("`.scribe/sessions/2026-08-06/`"));
    }

    #[test]
    fn changelog_archive_prepends_newest_first() {
        let (_tmp, paths) = workspace();
        update_changelog_archive(&paths, "A").unwrap();
        update_changelog_archive(&paths, "B").unwrap();

        let content = fs::read_to_string(&paths.archive_file).unwrap();
        assert_eq!(content, "B\n\n---\n\nA");
    }

    #[test]
    fn first_changelog_becomes_the_archive() {
        let (_tmp, paths) = workspace();
        update_changelog_archive(&paths, "A").unwrap();
        assert_eq!(fs::read_to_string(&paths.archive_file).unwrap(), "A");
    }

    #[test]
    fn archive_never_rewrites_prior_entries() {
        let (_tmp, paths) = workspace();
        update_changelog_archive(&paths, "entry one\nwith lines").unwrap();
        update_changelog_archive(&paths, "entry two").unwrap();
        update_changelog_archive(&paths, "entry three").unwrap();

        let content = fs::read_to_string(&paths.archive_file).unwrap();
        assert_eq!(
            content,
            "entry three\n\n---\n\nentry two\n\n---\n\nentry one\nwith lines"
        );
    }

    #[test]
    fn missing_session_dir_parent_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = ScribePaths::discover(tmp.path());
        // No ensure_layout: .scribe/ does not exist, but create_dir_all
        // still succeeds; simulate a real failure with a file in the way.
        fs::write(tmp.path().join(".scribe"), "not a dir").unwrap();
        assert!(write_session_docs(&paths, "2026-08-06", &docs("x")).is_err());
    }
}
