use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::{Result, UpdaterError};

const DEFAULT_INDENT: &str = "  ";

pub(crate) fn parse_object(
    content: Option<&str>,
    file: &'static str,
) -> Result<Map<String, Value>> {
    let content = content.ok_or(UpdaterError::MissingContent { file })?;
    let value: Value =
        serde_json::from_str(content).map_err(|source| UpdaterError::Parse { file, source })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(UpdaterError::Shape {
            file,
            field: "<root>".to_string(),
            expected: "object",
        }),
    }
}

/// Serializes `value` with the indentation and trailing newline of `original`.
pub(crate) fn stringify_like(value: &Map<String, Value>, original: &str) -> Result<String> {
    let indent = detect_indent(original);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(UpdaterError::Serialize)?;

    let mut output = String::from_utf8_lossy(&buf).into_owned();
    if original.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

fn detect_indent(original: &str) -> String {
    original
        .lines()
        .skip(1)
        .find_map(|line| {
            let indent: String = line
                .chars()
                .take_while(|c| *c == ' ' || *c == '\t')
                .collect();
            (!indent.is_empty()).then_some(indent)
        })
        .unwrap_or_else(|| DEFAULT_INDENT.to_string())
}
