use deno_release_core::{DEFAULT_FILE_MODE, FileContents};
use deno_release_updaters::ContentUpdater;
use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::traits::ContentSource;
use crate::update::UpdateDirective;
use crate::{Result, StrategyError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub content: String,
    /// `None` when the file is created by this change.
    pub original_content: Option<String>,
    pub mode: String,
}

/// New file contents keyed by path, in directive order.
pub type ChangeSet = IndexMap<String, FileChange>;

/// Applies every directive to the current contents of its file on `branch`.
///
/// Directives whose file is missing are skipped unless they may create it.
/// Cached contents are used instead of fetching when a directive carries them.
///
/// # Errors
///
/// Returns an error if a fetch fails for any reason other than a missing file,
/// or if an updater rejects the existing content.
pub fn build_change_set<S>(
    updates: &[UpdateDirective],
    source: &S,
    branch: &str,
) -> Result<ChangeSet>
where
    S: ContentSource + ?Sized,
{
    let mut changes = ChangeSet::new();

    for update in updates {
        let current: Option<FileContents> = match &update.cached_file_contents {
            Some(cached) => Some(cached.clone()),
            None => match source.file_contents_on_branch(&update.path, branch) {
                Ok(contents) => Some(contents),
                Err(StrategyError::FileNotFound { .. }) if update.create_if_missing => None,
                Err(StrategyError::FileNotFound { .. }) => {
                    warn!(path = %update.path, "file did not exist, skipping update");
                    continue;
                }
                Err(e) => return Err(e),
            },
        };

        let content = update
            .updater
            .update_content(current.as_ref().map(|c| c.content.as_str()))?;
        debug!(path = %update.path, created = current.is_none(), "applied update");

        let (original_content, mode) = match current {
            Some(contents) => (Some(contents.content), contents.mode),
            None => (None, DEFAULT_FILE_MODE.to_string()),
        };
        changes.insert(
            update.path.clone(),
            FileChange {
                content,
                original_content,
                mode,
            },
        );
    }

    Ok(changes)
}
