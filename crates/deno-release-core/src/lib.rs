pub mod commit;
pub mod error;
mod path;
pub mod sections;
pub mod types;

pub use commit::{BREAKING_CHANGE_NOTE, CommitNote, CommitReference, ConventionalCommit};
pub use error::*;
pub use path::{ComponentPath, ROOT_PROJECT_PATH};
pub use sections::{ChangelogSection, default_changelog_sections, filter_commits};
pub use types::*;
