pub mod aggregate;
pub mod compose;

pub use aggregate::build_snapshot;
pub use compose::{render_changelog, render_metrics, render_summary, render_worklist};
