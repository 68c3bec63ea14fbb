//! Idempotent textual splicing of a [`PatchPlan`] into source text.
//!
//! Pure string-in / string-out; the application layer owns the read and the
//! write-back.

use regex::Regex;

use crate::domain::{
    entities::patch_plan::{AnchorRule, InsertionBlock, PatchOutcome, PatchPlan},
    source::SourceScan,
};

/// Result of applying a plan to a source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Splice {
    /// The sentinel is already present; the text must not be touched.
    AlreadyApplied,
    /// The guard passed. `content` may equal the input when no anchor matched.
    Applied {
        content: String,
        outcome: PatchOutcome,
    },
}

impl PatchPlan {
    /// Splice the import block and the body block into `source`.
    ///
    /// Imports go first; the body anchor is searched in the already-modified
    /// text. Each insertion that finds no anchor is skipped and reported as
    /// `false` in the returned [`PatchOutcome`].
    pub fn apply(&self, source: &str) -> Splice {
        if source.contains(&self.sentinel) {
            return Splice::AlreadyApplied;
        }

        let mut content = source.to_string();
        let mut outcome = PatchOutcome::default();

        if let Some(patched) = insert_block(&content, &self.imports) {
            content = patched;
            outcome.import_inserted = true;
        }

        if let Some(patched) = insert_block(&content, &self.body) {
            content = patched;
            outcome.body_inserted = true;
        }

        Splice::Applied { content, outcome }
    }
}

fn insert_block(source: &str, block: &InsertionBlock) -> Option<String> {
    match &block.anchor {
        AnchorRule::AfterLastImport { marker, keyword } => {
            insert_after_last_import(source, &block.text, marker, keyword)
        }
        AnchorRule::BeforeFirstMatch { pattern } => insert_before_match(source, &block.text, pattern),
    }
}

/// Insert `text` (trimmed) as a new line after the last import statement.
fn insert_after_last_import(source: &str, text: &str, marker: &str, keyword: &str) -> Option<String> {
    let scan = SourceScan::scan(source);

    if !source
        .match_indices(marker)
        .any(|(at, _)| scan.is_code(at))
    {
        return None;
    }

    let lines: Vec<&str> = source.split('\n').collect();
    let starts = line_starts(&lines);

    let last_import = lines.iter().enumerate().rev().find_map(|(idx, line)| {
        let body = line.trim_start();
        let at = starts[idx] + (line.len() - body.len());
        (starts_with_keyword(body, keyword) && scan.is_code(at)).then_some(idx)
    })?;

    let end = statement_end(&lines, &starts, &scan, last_import);

    let mut lines = lines;
    lines.insert(end + 1, text.trim());
    Some(lines.join("\n"))
}

/// Insert `text` surrounded by newlines right before the first live match.
fn insert_before_match(source: &str, text: &str, pattern: &Regex) -> Option<String> {
    let scan = SourceScan::scan(source);
    let anchor = pattern
        .find_iter(source)
        .find(|m| scan.is_code(m.start()))?;

    let (before, after) = source.split_at(anchor.start());
    Some(format!("{before}\n{text}\n{after}"))
}

fn line_starts(lines: &[&str]) -> Vec<usize> {
    let mut offset = 0;
    lines
        .iter()
        .map(|line| {
            let start = offset;
            offset += line.len() + 1;
            start
        })
        .collect()
}

/// `import x`, `import {`, `import *`, `import "side-effect"`; not
/// `import(` / `import.meta` / `imports`.
fn starts_with_keyword(line: &str, keyword: &str) -> bool {
    line.strip_prefix(keyword)
        .is_some_and(|rest| match rest.chars().next() {
            None => true,
            Some(c) => c.is_whitespace() || matches!(c, '{' | '*' | '"' | '\''),
        })
}

/// Index of the line closing the import that starts on `first`.
///
/// A braced specifier list may span several lines; the statement ends on the
/// line where the live brace depth returns to zero.
fn statement_end(lines: &[&str], starts: &[usize], scan: &SourceScan, first: usize) -> usize {
    let mut depth: usize = 0;

    for (idx, line) in lines.iter().enumerate().skip(first) {
        for (col, b) in line.bytes().enumerate() {
            if !scan.is_code(starts[idx] + col) {
                continue;
            }
            match b {
                b'{' => depth += 1,
                b'}' => depth = depth.saturating_sub(1),
                _ => {}
            }
        }
        if depth == 0 {
            return idx;
        }
    }

    first
}
