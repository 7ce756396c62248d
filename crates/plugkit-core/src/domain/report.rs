//! Per-unit outcomes and the report they fold into.

use std::fmt;

use serde::Serialize;

/// Pipeline stage a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Rename,
    Substitute,
    Bootstrap,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Self::Rename, Self::Substitute, Self::Bootstrap];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rename => "rename",
            Self::Substitute => "substitute",
            Self::Bootstrap => "bootstrap",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one unit of work: a rename, a file, or a bootstrap stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformResult {
    pub stage: Stage,
    /// Path or command the result is about.
    pub subject: String,
    pub succeeded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl TransformResult {
    pub fn success(stage: Stage, subject: impl Into<String>) -> Self {
        Self {
            stage,
            subject: subject.into(),
            succeeded: true,
            detail: None,
        }
    }

    pub fn failure(stage: Stage, subject: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            stage,
            subject: subject.into(),
            succeeded: false,
            detail: Some(reason.into()),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl fmt::Display for TransformResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.succeeded { "ok" } else { "failed" };
        write!(f, "[{}] {} {}", self.stage, status, self.subject)?;
        if let Some(detail) = &self.detail {
            write!(f, ": {detail}")?;
        }
        Ok(())
    }
}

/// Every result of a run, in the order they were produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransformReport {
    results: Vec<TransformResult>,
}

impl TransformReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: TransformResult) {
        self.results.push(result);
    }

    pub fn extend(&mut self, results: impl IntoIterator<Item = TransformResult>) {
        self.results.extend(results);
    }

    pub fn results(&self) -> &[TransformResult] {
        &self.results
    }

    pub fn stage(&self, stage: Stage) -> impl Iterator<Item = &TransformResult> {
        self.results.iter().filter(move |r| r.stage == stage)
    }

    pub fn failures(&self) -> impl Iterator<Item = &TransformResult> {
        self.results.iter().filter(|r| !r.succeeded)
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn success_count(&self) -> usize {
        self.results.len() - self.failure_count()
    }

    pub fn is_clean(&self) -> bool {
        self.results.iter().all(|r| r.succeeded)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
