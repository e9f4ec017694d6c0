//! Answer file loading and validation
//!
//! An answer file is a line-oriented UTF-8 document of `KEY="value"`
//! assignments that pre-seeds the interactive `setup-alpine` installer.
//! Comment lines (`#`) and blank lines are ignored; a quoted value may span
//! multiple lines (INTERFACESOPTS carries an entire /etc/network/interfaces),
//! and embedded newlines are preserved verbatim.
//!
//! The loader makes one pass over one document and either produces the full
//! mapping or fails with the offending line number. There is no partial
//! result: acting on half an installer configuration is unsafe.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, warn};

use crate::error::{AnswerFileError, ParseError, Result};
use crate::options::{InstallerOption, Warning};
use crate::shell;

/// One `KEY="value"` assignment, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Option name exactly as written (upper-case by grammar)
    pub key: String,
    /// Raw value between the quotes, byte-for-byte, embedded newlines included
    pub value: String,
    /// 1-based line the assignment started on
    pub line: usize,
}

/// A parsed answer file: every assignment in document order.
///
/// Duplicate keys are kept here so validation can point at them; the mapping
/// views (`get`, `to_env_vars`, `to_document`, JSON) resolve duplicates with
/// last-write-wins while preserving the insertion order of first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerFile {
    entries: Vec<Entry>,
}

impl AnswerFile {
    /// Parse a full answer file document.
    ///
    /// Fails with [`ParseError::MalformedAssignment`] on any non-comment,
    /// non-blank line outside the `KEY="..."` grammar, and with
    /// [`ParseError::UnterminatedQuote`] when a value's closing quote never
    /// arrives; the latter is reported at the line the quote opened on.
    pub fn parse(document: &str) -> std::result::Result<Self, ParseError> {
        let mut entries = Vec::new();

        // Open multi-line value: (key, accumulated value, opening line)
        let mut open: Option<(String, String, usize)> = None;

        for (idx, raw_line) in document.lines().enumerate() {
            let lineno = idx + 1;

            if let Some((key, mut value, opened_at)) = open.take() {
                // Inside a quoted value: comments and blanks are content
                match find_closing_quote(raw_line) {
                    Some(end) => {
                        value.push_str(&raw_line[..end]);
                        if !raw_line[end + 1..].trim().is_empty() {
                            return Err(ParseError::MalformedAssignment { line: lineno });
                        }
                        entries.push(Entry {
                            key,
                            value,
                            line: opened_at,
                        });
                    }
                    None => {
                        value.push_str(raw_line);
                        value.push('\n');
                        open = Some((key, value, opened_at));
                    }
                }
                continue;
            }

            let line = raw_line.trim_start();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, rest) = split_assignment(line)
                .ok_or(ParseError::MalformedAssignment { line: lineno })?;

            match find_closing_quote(rest) {
                Some(end) => {
                    if !rest[end + 1..].trim().is_empty() {
                        return Err(ParseError::MalformedAssignment { line: lineno });
                    }
                    entries.push(Entry {
                        key: key.to_string(),
                        value: rest[..end].to_string(),
                        line: lineno,
                    });
                }
                None => {
                    let mut value = rest.to_string();
                    value.push('\n');
                    open = Some((key.to_string(), value, lineno));
                }
            }
        }

        if let Some((_, _, opened_at)) = open {
            return Err(ParseError::UnterminatedQuote { line: opened_at });
        }

        debug!(entries = entries.len(), "parsed answer file document");
        Ok(Self { entries })
    }

    /// Read and parse an answer file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading answer file");
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content)?)
    }

    /// Check the parsed mapping against the closed known-option set.
    ///
    /// Never fails: unknown keys are warnings so files written for a newer
    /// installer still load, and duplicates are warnings because the mapping
    /// already resolved them last-write-wins.
    pub fn validate(&self) -> Vec<Warning> {
        let mut warnings = Vec::new();

        for entry in &self.entries {
            if InstallerOption::from_str(&entry.key).is_err() {
                warn!(key = %entry.key, line = entry.line, "unknown answer file option");
                warnings.push(Warning::UnknownOption {
                    key: entry.key.clone(),
                    line: entry.line,
                });
            }
            let first = self
                .entries
                .iter()
                .find(|e| e.key == entry.key)
                .map(|e| e.line);
            if first != Some(entry.line) {
                warn!(key = %entry.key, line = entry.line, "duplicate answer file option");
                warnings.push(Warning::DuplicateOption {
                    key: entry.key.clone(),
                    line: entry.line,
                });
            }
        }

        warnings
    }

    /// Fail when validation produced any warning.
    ///
    /// Warnings are advisory by default; strict consumers (CI pipelines,
    /// image builds) call this to refuse files with unknown or duplicate
    /// options instead of shipping them to the installer.
    pub fn ensure_valid(&self) -> Result<()> {
        let warnings = self.validate();
        if warnings.is_empty() {
            return Ok(());
        }
        let summary: Vec<String> = warnings.iter().map(|w| w.to_string()).collect();
        Err(AnswerFileError::validation(summary.join("; ")))
    }

    /// Value for a key, if assigned (last assignment wins).
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }

    /// Value for a known installer option, if assigned.
    pub fn option(&self, option: InstallerOption) -> Option<&str> {
        self.get(&option.to_string())
    }

    /// Number of distinct keys in the mapping.
    pub fn len(&self) -> usize {
        self.resolved().len()
    }

    /// True when the document assigned nothing (comments and blanks only).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All raw assignments in document order, duplicates included.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The resolved mapping: insertion order of first occurrence, value of
    /// the last assignment for each key.
    pub fn resolved(&self) -> Vec<(&str, &str)> {
        let mut out: Vec<(&str, &str)> = Vec::new();
        for entry in &self.entries {
            match out.iter_mut().find(|(k, _)| *k == entry.key) {
                Some(slot) => slot.1 = entry.value.as_str(),
                None => out.push((entry.key.as_str(), entry.value.as_str())),
            }
        }
        out
    }

    /// The mapping as environment variables for the installer process.
    ///
    /// Keys are exposed exactly as written and values unmodified; this is the
    /// whole contract `setup-alpine` consumes.
    pub fn to_env_vars(&self) -> Vec<(String, String)> {
        self.resolved()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// Re-serialize the mapping as an answer file document.
    ///
    /// `KEY="value"` per entry, values byte-for-byte including embedded
    /// newlines, so parsing the output yields an equivalent mapping.
    pub fn to_document(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.resolved() {
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(value);
            out.push_str("\"\n");
        }
        out
    }

    /// The mapping as `KEY='value'` lines safe to `eval` in a POSIX shell.
    pub fn to_shell_exports(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.resolved() {
            out.push_str(key);
            out.push('=');
            out.push_str(&shell::quote(value));
            out.push('\n');
        }
        out
    }
}

// JSON view of the resolved mapping (object of key -> value)
impl Serialize for AnswerFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let resolved = self.resolved();
        let mut map = serializer.serialize_map(Some(resolved.len()))?;
        for (key, value) in resolved {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Split `KEY="rest` into the key and the text after the opening quote.
///
/// Keys are upper-case ASCII with digits and underscores, per the grammar.
fn split_assignment(line: &str) -> Option<(&str, &str)> {
    let eq = line.find('=')?;
    let key = &line[..eq];
    if key.is_empty()
        || !key
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
    {
        return None;
    }
    let rest = line[eq + 1..].strip_prefix('"')?;
    Some((key, rest))
}

/// Byte index of the first unescaped `"` in `s`, if any.
fn find_closing_quote(s: &str) -> Option<usize> {
    let mut backslashes = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '\\' => backslashes += 1,
            '"' if backslashes % 2 == 0 => return Some(i),
            _ => backslashes = 0,
        }
    }
    None
}
