use semver::Version;
use tracing::debug;

use crate::{ContentUpdater, Result};

const CHANGELOG_HEADER: &str = "# Changelog";

/// Inserts a rendered release entry into a Markdown changelog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Changelog {
    pub version: Version,
    pub changelog_entry: String,
}

impl Changelog {
    #[must_use]
    pub fn new(version: Version, changelog_entry: impl Into<String>) -> Self {
        Self {
            version,
            changelog_entry: changelog_entry.into(),
        }
    }
}

impl ContentUpdater for Changelog {
    fn update_content(&self, content: Option<&str>) -> Result<String> {
        let content = content.unwrap_or_default();
        let entry = self.changelog_entry.trim();

        if content.trim().is_empty() {
            debug!(version = %self.version, "creating new changelog");
            return Ok(format!("{CHANGELOG_HEADER}\n\n{entry}\n"));
        }

        if is_release_heading(content) {
            return Ok(format!("{entry}\n\n{}\n", content.trim()));
        }

        let Some(insertion_point) = find_release_heading(content) else {
            return Ok(format!("{}\n\n{entry}\n", content.trim_end()));
        };

        let (before, after) = content.split_at(insertion_point);
        let mut updated = String::with_capacity(content.len() + entry.len() + 2);
        updated.push_str(before);
        updated.push('\n');
        updated.push_str(entry);
        updated.push('\n');
        updated.push_str(after);

        Ok(format!("{}\n", updated.trim()))
    }
}

/// Byte offset of the newline preceding the newest release heading.
fn find_release_heading(content: &str) -> Option<usize> {
    content
        .match_indices('\n')
        .map(|(index, _)| index)
        .find(|&index| is_release_heading(&content[index + 1..]))
}

fn is_release_heading(line: &str) -> bool {
    let Some(rest) = line
        .strip_prefix("### ")
        .or_else(|| line.strip_prefix("## "))
    else {
        return false;
    };
    let rest = rest.strip_prefix('v').unwrap_or(rest);
    rest.starts_with(|c: char| c.is_ascii_digit() || c == '[')
}
