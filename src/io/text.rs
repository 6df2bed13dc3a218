//! Plain-text files

use super::fs::ensure_parent_exists;
use crate::error::{Error, Result};
use std::path::Path;

/// Read a whole text file
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::NotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Write a text file after stripping common indentation, creating the
/// parent directory if needed
pub fn write_text(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    let path = path.as_ref();
    ensure_parent_exists(path)?;
    std::fs::write(path, dedent(contents))?;
    Ok(())
}

/// Remove the leading whitespace shared by every non-blank line.
///
/// Lines made only of whitespace are emptied and do not count towards the
/// common prefix.
pub fn dedent(text: &str) -> String {
    let mut margin: Option<&str> = None;
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let indent = &line[..line.len() - line.trim_start_matches([' ', '\t']).len()];
        margin = Some(match margin {
            None => indent,
            Some(m) => common_prefix(m, indent),
        });
    }
    let margin = margin.unwrap_or("");

    let mut out = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        let (body, ending) = match line.strip_suffix('\n') {
            Some(body) => (body, "\n"),
            None => (line, ""),
        };
        if body.trim().is_empty() {
            out.push_str(ending);
        } else {
            out.push_str(body.strip_prefix(margin).unwrap_or(body));
            out.push_str(ending);
        }
    }
    out
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..len]
}
