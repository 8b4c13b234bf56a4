use serde::{Deserialize, Serialize};

use crate::commit::ConventionalCommit;

/// Maps a commit type to a changelog section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogSection {
    #[serde(rename = "type")]
    pub kind: String,
    pub section: String,
    #[serde(default)]
    pub hidden: bool,
}

impl ChangelogSection {
    #[must_use]
    pub fn new(kind: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            section: section.into(),
            hidden: false,
        }
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

#[must_use]
pub fn default_changelog_sections() -> Vec<ChangelogSection> {
    vec![
        ChangelogSection::new("feat", "Features"),
        ChangelogSection::new("feature", "Features"),
        ChangelogSection::new("fix", "Bug Fixes"),
        ChangelogSection::new("perf", "Performance Improvements"),
        ChangelogSection::new("revert", "Reverts"),
        ChangelogSection::new("docs", "Documentation").hidden(),
        ChangelogSection::new("style", "Styles").hidden(),
        ChangelogSection::new("chore", "Miscellaneous Chores").hidden(),
        ChangelogSection::new("refactor", "Code Refactoring").hidden(),
        ChangelogSection::new("test", "Tests").hidden(),
        ChangelogSection::new("build", "Build System").hidden(),
        ChangelogSection::new("ci", "Continuous Integration").hidden(),
    ]
}

/// Keeps commits of a visible section type, and breaking commits of a hidden
/// section type. Commits whose type has no section are dropped.
#[must_use]
pub fn filter_commits(
    commits: &[ConventionalCommit],
    sections: Option<&[ChangelogSection]>,
) -> Vec<ConventionalCommit> {
    let defaults;
    let sections = if let Some(sections) = sections {
        sections
    } else {
        defaults = default_changelog_sections();
        &defaults
    };

    let is_kind = |commit: &ConventionalCommit, hidden: bool| {
        sections
            .iter()
            .any(|section| section.hidden == hidden && section.kind == commit.kind)
    };

    commits
        .iter()
        .filter(|commit| {
            is_kind(*commit, false) || (commit.breaking && is_kind(*commit, true))
        })
        .cloned()
        .collect()
}
