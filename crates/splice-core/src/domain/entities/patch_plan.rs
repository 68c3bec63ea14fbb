use regex::Regex;
use serde::Serialize;

use crate::domain::error::DomainError;

/// Keyword that opens a module import statement in the target file.
pub const DEFAULT_IMPORT_KEYWORD: &str = "import";

/// Which of the two blocks a patch carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Import,
    Body,
}

impl BlockKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Import => "import",
            Self::Body => "body",
        }
    }
}

/// Where a block may be spliced into the target.
#[derive(Debug, Clone)]
pub enum AnchorRule {
    /// On its own line after the last import statement. Only applies when
    /// `marker` (a known import of the target) is present.
    AfterLastImport { marker: String, keyword: String },
    /// Immediately before the first match of `pattern`.
    BeforeFirstMatch { pattern: Regex },
}

/// A named block of literal text plus the rule that places it.
#[derive(Debug, Clone)]
pub struct InsertionBlock {
    pub kind: BlockKind,
    pub text: String,
    pub anchor: AnchorRule,
}

/// Everything the patcher needs to wire an entry file.
#[derive(Debug, Clone)]
pub struct PatchPlan {
    /// Substring whose presence means the patch was already applied.
    pub sentinel: String,
    pub imports: InsertionBlock,
    pub body: InsertionBlock,
}

impl PatchPlan {
    pub fn builder() -> PatchPlanBuilder {
        PatchPlanBuilder::default()
    }
}

/// Which insertions a patch run actually performed.
///
/// A missing anchor is not an error, so callers inspect these flags to tell a
/// fully patched file from a half patched one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PatchOutcome {
    pub import_inserted: bool,
    pub body_inserted: bool,
}

impl PatchOutcome {
    pub fn is_complete(&self) -> bool {
        self.import_inserted && self.body_inserted
    }

    pub fn is_noop(&self) -> bool {
        !self.import_inserted && !self.body_inserted
    }
}

/// Builder for `PatchPlan`.
#[derive(Debug, Default)]
pub struct PatchPlanBuilder {
    sentinel: Option<String>,
    import_block: Option<String>,
    import_marker: Option<String>,
    import_keyword: Option<String>,
    body_block: Option<String>,
    body_anchor: Option<String>,
}

impl PatchPlanBuilder {
    pub fn sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinel = Some(sentinel.into());
        self
    }

    pub fn import_block(mut self, text: impl Into<String>) -> Self {
        self.import_block = Some(text.into());
        self
    }

    pub fn import_marker(mut self, marker: impl Into<String>) -> Self {
        self.import_marker = Some(marker.into());
        self
    }

    /// Defaults to [`DEFAULT_IMPORT_KEYWORD`].
    pub fn import_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.import_keyword = Some(keyword.into());
        self
    }

    pub fn body_block(mut self, text: impl Into<String>) -> Self {
        self.body_block = Some(text.into());
        self
    }

    /// Regular expression locating the body insertion point.
    pub fn body_anchor(mut self, pattern: impl Into<String>) -> Self {
        self.body_anchor = Some(pattern.into());
        self
    }

    /// Consume builder and construct `PatchPlan`.
    ///
    /// # Errors
    ///
    /// - `MissingRequiredField` if a field other than the keyword is unset
    /// - `EmptyBlock` if a block, the sentinel, or the marker is blank
    /// - `InvalidAnchor` if the body anchor does not compile
    pub fn build(self) -> Result<PatchPlan, DomainError> {
        let sentinel = required(self.sentinel, "sentinel")?;
        let import_text = required(self.import_block, "import_block")?;
        let marker = required(self.import_marker, "import_marker")?;
        let body_text = required(self.body_block, "body_block")?;
        let pattern = required(self.body_anchor, "body_anchor")?;
        let keyword = self
            .import_keyword
            .unwrap_or_else(|| DEFAULT_IMPORT_KEYWORD.to_string());

        for (value, block) in [
            (&sentinel, "sentinel"),
            (&marker, "import marker"),
            (&keyword, "import keyword"),
            (&import_text, BlockKind::Import.as_str()),
            (&body_text, BlockKind::Body.as_str()),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::EmptyBlock { block });
            }
        }

        let pattern = Regex::new(&pattern).map_err(|e| DomainError::InvalidAnchor {
            pattern: pattern.clone(),
            reason: e.to_string(),
        })?;

        Ok(PatchPlan {
            sentinel,
            imports: InsertionBlock {
                kind: BlockKind::Import,
                text: import_text,
                anchor: AnchorRule::AfterLastImport { marker, keyword },
            },
            body: InsertionBlock {
                kind: BlockKind::Body,
                text: body_text,
                anchor: AnchorRule::BeforeFirstMatch { pattern },
            },
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, DomainError> {
    value.ok_or(DomainError::MissingRequiredField { field })
}
