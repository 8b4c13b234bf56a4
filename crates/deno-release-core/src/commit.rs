use serde::{Deserialize, Serialize};

pub const BREAKING_CHANGE_NOTE: &str = "BREAKING CHANGE";

const BREAKING_FOOTERS: [&str; 2] = ["BREAKING CHANGE:", "BREAKING-CHANGE:"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitNote {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitReference {
    pub issue: String,
}

/// A commit whose header follows `type(scope)!: subject`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConventionalCommit {
    pub sha: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub scope: Option<String>,
    pub bare_message: String,
    pub breaking: bool,
    pub notes: Vec<CommitNote>,
    pub references: Vec<CommitReference>,
}

impl ConventionalCommit {
    /// Returns `None` when the header is not a conventional commit header.
    #[must_use]
    pub fn parse(sha: impl Into<String>, message: impl Into<String>) -> Option<Self> {
        let message = message.into();
        let mut lines = message.lines();
        let header = lines.next()?.trim();

        let (prefix, subject) = header.split_once(':')?;
        let subject = subject.trim();
        if subject.is_empty() {
            return None;
        }

        let (prefix, bang) = match prefix.strip_suffix('!') {
            Some(prefix) => (prefix, true),
            None => (prefix, false),
        };

        let (kind, scope) = match prefix.split_once('(') {
            Some((kind, rest)) => {
                let scope = rest.strip_suffix(')')?.trim();
                (kind, (!scope.is_empty()).then(|| scope.to_string()))
            }
            None => (prefix, None),
        };

        if kind.is_empty()
            || !kind
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return None;
        }

        let mut notes: Vec<CommitNote> = lines
            .filter_map(|line| {
                BREAKING_FOOTERS
                    .iter()
                    .find_map(|footer| line.trim_start().strip_prefix(footer))
            })
            .map(|text| CommitNote {
                title: BREAKING_CHANGE_NOTE.to_string(),
                text: text.trim().to_string(),
            })
            .collect();

        if bang && notes.is_empty() {
            notes.push(CommitNote {
                title: BREAKING_CHANGE_NOTE.to_string(),
                text: subject.to_string(),
            });
        }

        let references = issue_references(&message);

        Some(Self {
            sha: sha.into(),
            kind: kind.to_string(),
            scope,
            bare_message: subject.to_string(),
            breaking: !notes.is_empty(),
            notes,
            references,
            message,
        })
    }

    #[must_use]
    pub fn breaking_change_note(&self) -> Option<&str> {
        self.notes
            .iter()
            .rev()
            .find(|note| note.title == BREAKING_CHANGE_NOTE)
            .map(|note| note.text.as_str())
    }
}

fn issue_references(message: &str) -> Vec<CommitReference> {
    let mut references: Vec<CommitReference> = Vec::new();
    let mut rest = message;

    while let Some(index) = rest.find('#') {
        rest = &rest[index + 1..];
        let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
        if digits.is_empty() || references.iter().any(|r| r.issue == digits) {
            continue;
        }
        references.push(CommitReference { issue: digits });
    }

    references
}
