pub mod lock;
pub mod paths;
pub mod update;

pub use lock::WorkspaceLock;
pub use paths::ScribePaths;
pub use update::{
    update_changelog_archive, update_worklist, write_session_docs, SessionArtifacts, SessionDocs,
};
