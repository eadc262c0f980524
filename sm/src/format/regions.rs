//! Generic region scanning
//!
//! One scanning algorithm consumes per-meeting-type tables of [`RegionSpec`]
//! records, so each meeting layout is data rather than its own control flow.
//! A region is the span of lines between a recognized header line and the
//! first blank line or terminator line; a missing terminator extends the
//! region to the end of the text, and a missing header yields a not-found
//! region, never an error.

use regex::Regex;

/// How extracted entries are pulled out of a region body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// Lines matching item markers, with the marker stripped
    Items,
    /// The whole region body, trimmed, as one entry
    Raw,
}

/// Whether a section renders when its header was never found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Render the header with a placeholder even with nothing extracted
    Always,
    /// Omit the section entirely when the header is absent
    WhenFound,
}

/// How captured entries are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    /// Re-numbered sequentially: "1. ..."
    Numbered,
    /// Unordered: "- ..."
    Bulleted,
}

/// One section of a meeting document layout
#[derive(Debug, Clone, Copy)]
pub struct RegionSpec {
    /// Rendered section heading
    pub title: &'static str,
    /// Case-insensitive header aliases (substring match)
    pub headers: &'static [&'static str],
    /// Aliases that end the region body (besides a blank line)
    pub terminators: &'static [&'static str],
    pub capture: Capture,
    pub presence: Presence,
    pub listing: Listing,
    /// Capture every header occurrence instead of only the first
    pub repeating: bool,
}

/// Result of scanning one region spec against raw text
#[derive(Debug, Clone)]
pub struct ScannedRegion {
    /// Whether any header alias was found
    pub found: bool,
    /// Extracted entries, in input order
    pub entries: Vec<String>,
}

/// Leading markers accepted on item lines: bullets, numbers, emoji-keycap
/// digits, check marks, checkbox brackets
fn item_regex() -> Regex {
    Regex::new(r"^\s*(?:[-*•]|\d+[.)]|\d\x{FE0F}?\x{20E3}|✅|☑\x{FE0F}?|\[[ xX]\])\s*(.*)$")
        .unwrap_or_else(|e| panic!("item marker regex is invalid: {e}"))
}

fn line_matches_any(line: &str, aliases: &[&str]) -> bool {
    let line = line.to_lowercase();
    aliases.iter().any(|a| line.contains(a))
}

/// Text after the first header alias on a header line, minus numbering and
/// separator punctuation ("User Story 1: as a user..." -> "as a user...")
fn header_remainder(line: &str, aliases: &[&str]) -> Option<String> {
    for alias in aliases {
        let pattern = format!("(?i){}", regex::escape(alias));
        let re = Regex::new(&pattern).ok()?;
        if let Some(m) = re.find(line) {
            let rest = line[m.end()..]
                .trim_start_matches(|c: char| c.is_ascii_digit() || c.is_whitespace() || matches!(c, ':' | '.' | '-'))
                .trim();
            if !rest.is_empty() {
                return Some(rest.to_string());
            }
            return None;
        }
    }
    None
}

fn extract_item(line: &str, item_re: &Regex) -> Option<String> {
    let captures = item_re.captures(line)?;
    let item = captures.get(1)?.as_str().trim();
    if item.is_empty() { None } else { Some(item.to_string()) }
}

/// Scan raw text for the region(s) described by `spec`
pub fn scan(text: &str, spec: &RegionSpec) -> ScannedRegion {
    let lines: Vec<&str> = text.lines().collect();
    let item_re = item_regex();
    let mut entries = Vec::new();
    let mut found = false;

    let mut i = 0;
    while i < lines.len() {
        if !line_matches_any(lines[i], spec.headers) {
            i += 1;
            continue;
        }
        found = true;

        // Body runs to the first blank line, terminator line, or end of text
        let start = i + 1;
        let mut end = start;
        while end < lines.len() {
            let line = lines[end];
            if line.trim().is_empty() || line_matches_any(line, spec.terminators) {
                break;
            }
            end += 1;
        }

        match spec.capture {
            Capture::Items => {
                for line in &lines[start..end] {
                    if let Some(item) = extract_item(line, &item_re) {
                        entries.push(item);
                    }
                }
            }
            Capture::Raw => {
                let mut parts: Vec<String> = Vec::new();
                if let Some(lead) = header_remainder(lines[i], spec.headers) {
                    parts.push(lead);
                }
                let body = lines[start..end].join("\n").trim().to_string();
                if !body.is_empty() {
                    parts.push(body);
                }
                if !parts.is_empty() {
                    entries.push(parts.join("\n"));
                }
            }
        }

        if !spec.repeating {
            break;
        }
        i = end;
    }

    ScannedRegion { found, entries }
}
