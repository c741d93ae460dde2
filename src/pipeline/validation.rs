//! Checks an [`ExtractorSpec`](super::spec::ExtractorSpec) before it becomes
//! a configuration.
//!
//! Every rule runs, even after one fails, and the findings land in a single
//! [`ValidationReport`]. Errors reject the spec; warnings are logged and the
//! value is normalized on conversion.
//!
//! ```rust
//! use rapid_keywords::pipeline::spec::ExtractorSpec;
//! use rapid_keywords::pipeline::validation::ValidationEngine;
//!
//! let spec = ExtractorSpec::from_json(r#"{ "v": 1, "max_keywords": 0 }"#).unwrap();
//! let report = ValidationEngine::with_defaults().validate(&spec);
//! assert!(report.has_errors());
//! assert!(report.into_result().is_err());
//! ```

use std::fmt;

use serde::Serialize;

use super::error_code::ErrorCode;
use super::errors::SpecError;
use super::spec::*;
use crate::errors::ExtractError;
use crate::types::{DEFAULT_MIN_TOKEN_LEN, MAX_KEYWORDS_CAP};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Rejects the spec.
    Error,
    /// Reported, then normalized away.
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// One finding: a [`SpecError`] tagged with how serious it is.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: SpecError,
}

impl ValidationDiagnostic {
    pub fn error(err: SpecError) -> Self {
        Self::with_severity(Severity::Error, err)
    }

    pub fn warning(err: SpecError) -> Self {
        Self::with_severity(Severity::Warning, err)
    }

    fn with_severity(severity: Severity, error: SpecError) -> Self {
        Self { severity, error }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity.as_str(), self.error)
    }
}

/// Everything the rules found, in rule order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    fn of(&self, severity: Severity) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
            .map(|d| &d.error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &SpecError> {
        self.of(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &SpecError> {
        self.of(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(ValidationDiagnostic::is_error)
    }

    /// Warnings alone still count as valid.
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Error messages joined with `"; "`.
    pub fn error_summary(&self) -> String {
        self.errors()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// `Err(InvalidSpec)` carrying [`error_summary`](Self::error_summary) if
    /// any error was found, otherwise the report (which may hold warnings).
    pub fn into_result(self) -> Result<Self, ExtractError> {
        if self.has_errors() {
            Err(ExtractError::InvalidSpec(self.error_summary()))
        } else {
            Ok(self)
        }
    }
}

/// A check over an [`ExtractorSpec`].
///
/// Rules hold no state; the engine is shared across threads.
pub trait ValidationRule: Send + Sync {
    /// Stable identifier, e.g. `"max_keywords"`.
    fn name(&self) -> &str;

    fn validate(&self, spec: &ExtractorSpec) -> Vec<ValidationDiagnostic>;
}

pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// An engine with no rules; every spec passes.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Version, keyword count, token length, stopwords, unknown fields.
    pub fn with_defaults() -> Self {
        Self::new()
            .with_rule(VersionRule)
            .with_rule(MaxKeywordsRule)
            .with_rule(MinTokenLenRule)
            .with_rule(ExtraStopwordsRule)
            .with_rule(UnknownFieldsRule)
    }

    pub fn with_rule(mut self, rule: impl ValidationRule + 'static) -> Self {
        self.add_rule(Box::new(rule));
        self
    }

    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn validate(&self, spec: &ExtractorSpec) -> ValidationReport {
        ValidationReport {
            diagnostics: self.rules.iter().flat_map(|r| r.validate(spec)).collect(),
        }
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. Only version 1 is understood ────────────────────────────────────────

struct VersionRule;

impl ValidationRule for VersionRule {
    fn name(&self) -> &str {
        "version"
    }

    fn validate(&self, spec: &ExtractorSpec) -> Vec<ValidationDiagnostic> {
        if spec.v == SPEC_VERSION {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            SpecError::new(
                ErrorCode::UnsupportedVersion,
                "/v",
                format!("unsupported spec version {}", spec.v),
            )
            .with_hint(format!("Set \"v\": {SPEC_VERSION}")),
        )]
    }
}

// ─── 2. max_keywords: zero is an error, above the cap is clamped ────────────

struct MaxKeywordsRule;

impl ValidationRule for MaxKeywordsRule {
    fn name(&self) -> &str {
        "max_keywords"
    }

    fn validate(&self, spec: &ExtractorSpec) -> Vec<ValidationDiagnostic> {
        match spec.max_keywords {
            Some(0) => vec![ValidationDiagnostic::error(
                SpecError::new(
                    ErrorCode::InvalidValue,
                    "/max_keywords",
                    "max_keywords must be greater than 0",
                )
                .with_hint(format!(
                    "Use a value between 1 and {MAX_KEYWORDS_CAP}, or remove it for the default"
                )),
            )],
            Some(n) if n > MAX_KEYWORDS_CAP => vec![ValidationDiagnostic::warning(
                SpecError::new(
                    ErrorCode::InvalidValue,
                    "/max_keywords",
                    format!("max_keywords {n} exceeds {MAX_KEYWORDS_CAP} and will be clamped"),
                ),
            )],
            _ => vec![],
        }
    }
}

// ─── 3. min_token_len may not admit one- or two-character tokens ───────────

struct MinTokenLenRule;

impl ValidationRule for MinTokenLenRule {
    fn name(&self) -> &str {
        "min_token_len"
    }

    fn validate(&self, spec: &ExtractorSpec) -> Vec<ValidationDiagnostic> {
        match spec.min_token_len {
            Some(n) if n < DEFAULT_MIN_TOKEN_LEN => vec![ValidationDiagnostic::error(
                SpecError::new(
                    ErrorCode::InvalidValue,
                    "/min_token_len",
                    format!("min_token_len must be at least {DEFAULT_MIN_TOKEN_LEN}, got {n}"),
                )
                .with_hint(format!(
                    "Remove min_token_len to use the default of {DEFAULT_MIN_TOKEN_LEN}"
                )),
            )],
            _ => vec![],
        }
    }
}

// ─── 4. Blank extra stopwords are ignored ───────────────────────────────────

struct ExtraStopwordsRule;

impl ValidationRule for ExtraStopwordsRule {
    fn name(&self) -> &str {
        "extra_stopwords"
    }

    fn validate(&self, spec: &ExtractorSpec) -> Vec<ValidationDiagnostic> {
        spec.extra_stopwords
            .iter()
            .enumerate()
            .filter(|(_, word)| word.trim().is_empty())
            .map(|(i, _)| {
                ValidationDiagnostic::warning(SpecError::new(
                    ErrorCode::InvalidValue,
                    format!("/extra_stopwords/{i}"),
                    "blank stopword is ignored",
                ))
            })
            .collect()
    }
}

// ─── 5. Unknown fields (strict → error, non-strict → warning) ──────────────

struct UnknownFieldsRule;

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, spec: &ExtractorSpec) -> Vec<ValidationDiagnostic> {
        let diag_fn = if spec.strict {
            ValidationDiagnostic::error
        } else {
            ValidationDiagnostic::warning
        };

        let mut keys: Vec<&String> = spec.unknown_fields.keys().collect();
        keys.sort();

        keys.into_iter()
            .map(|key| {
                diag_fn(
                    SpecError::new(
                        ErrorCode::UnknownField,
                        format!("/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════
