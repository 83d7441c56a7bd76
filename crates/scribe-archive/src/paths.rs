use std::path::{Path, PathBuf};

/// All well-known paths under `.scribe/`.
#[derive(Debug, Clone)]
pub struct ScribePaths {
    pub root: PathBuf,
    pub scribe_dir: PathBuf,
    pub sessions_dir: PathBuf,
    /// Durable worklist, overwritten wholesale every run.
    pub worklist_file: PathBuf,
    /// Durable changelog archive, prepend-only.
    pub archive_file: PathBuf,
    pub lock_file: PathBuf,
    /// Worklist tier configuration (YAML).
    pub worklist_yaml: PathBuf,
    /// Task-tracker snapshot (JSON).
    pub tasks_json: PathBuf,
}

impl ScribePaths {
    /// Derive all paths from a repo root. Pure computation, no I/O.
    pub fn discover(repo_root: impl Into<PathBuf>) -> Self {
        let root = repo_root.into();
        let scribe_dir = root.join(".scribe");
        Self {
            sessions_dir: scribe_dir.join("sessions"),
            worklist_file: scribe_dir.join("WORKLIST.md"),
            archive_file: scribe_dir.join("CHANGELOG_ARCHIVE.md"),
            lock_file: scribe_dir.join("LOCK"),
            worklist_yaml: scribe_dir.join("worklist.yaml"),
            tasks_json: scribe_dir.join("tasks.json"),
            scribe_dir,
            root,
        }
    }

    /// Create the required directories. Idempotent.
    pub fn ensure_layout(&self) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.sessions_dir)?;
        Ok(())
    }

    /// Check whether `.scribe/` exists.
    pub fn is_initialized(&self) -> bool {
        self.scribe_dir.is_dir()
    }

    /// Dated session folder under `.scribe/sessions/<date>/`. Reruns on
    /// the same date target the same folder.
    pub fn session_dir(&self, date: &str) -> PathBuf {
        self.sessions_dir.join(date)
    }

    /// Walk up from `start` looking for a directory containing `.scribe/`.
    /// Returns `None` if not found.
    pub fn find_root(start: &Path) -> Option<PathBuf> {
        let mut cur = start.to_path_buf();
        loop {
            if cur.join(".scribe").is_dir() {
                return Some(cur);
            }
            if !cur.pop() {
                return None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discover_builds_correct_paths() {
        let p = ScribePaths::discover("/tmp/repo");
        assert_eq!(p.scribe_dir, PathBuf::from("/tmp/repo/.scribe"));
        assert_eq!(p.sessions_dir, PathBuf::from("/tmp/repo/.scribe/sessions"));
        assert_eq!(
            p.worklist_file,
            PathBuf::from("/tmp/repo/.scribe/WORKLIST.md")
        );
        assert_eq!(
            p.archive_file,
            PathBuf::from("/tmp/repo/.scribe/CHANGELOG_ARCHIVE.md")
        );
        assert_eq!(p.lock_file, PathBuf::from("/tmp/repo/.scribe/LOCK"));
        assert_eq!(
            p.session_dir("2026-08-06"),
            PathBuf::from("/tmp/repo/.scribe/sessions/2026-08-06")
        );
    }

    #[test]
    fn ensure_layout_creates_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let p = ScribePaths::discover(tmp.path());
        p.ensure_layout().unwrap();
        assert!(p.sessions_dir.is_dir());
        assert!(p.is_initialized());
        // Idempotent.
        p.ensure_layout().unwrap();
    }

    #[test]
    fn find_root_walks_up() {
        let tmp = tempfile::tempdir().unwrap();
        let p = ScribePaths::discover(tmp.path());
        p.ensure_layout().unwrap();
        let nested = tmp.path().join("a/b/c");
        std::fs::create_dir_all(&nested).unwrap();
        let found = ScribePaths::find_root(&nested).unwrap();
        assert_eq!(found, tmp.path());
        assert!(ScribePaths::find_root(Path::new("/nonexistent/dir")).is_none());
    }
}
