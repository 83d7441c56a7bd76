use scribe_archive::ScribePaths;
use std::path::Path;

const STARTER_WORKLIST: &str = r#"# Project worklist configuration. Ordered priority tiers rendered into
# WORKLIST.md and the metrics report; estimated_hours feeds the
# estimated-remaining-work breakdown.
title: ""
tiers:
  - label: "CRITICAL (Do First)"
    items: []
    estimated_hours: 0
  - label: "HIGH (Do This Sprint)"
    items: []
    estimated_hours: 0
  - label: "MEDIUM (Next Sprint)"
    items: []
    estimated_hours: 0
  - label: "LOW & MISCELLANEOUS"
    items: []
    estimated_hours: 0
"#;

pub fn execute(root: &Path) -> anyhow::Result<()> {
    let paths = ScribePaths::discover(root);
    let already = paths.is_initialized();
    paths.ensure_layout()?;

    if !paths.worklist_yaml.exists() {
        std::fs::write(&paths.worklist_yaml, STARTER_WORKLIST)?;
        println!("Wrote starter config {}", paths.worklist_yaml.display());
    }

    if already {
        println!("Workspace already initialized at {}", paths.scribe_dir.display());
    } else {
        println!("Initialized workspace at {}", paths.scribe_dir.display());
    }
    Ok(())
}
