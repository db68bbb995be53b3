//! Parse configuration
//!
//! A `ParseConfig` is immutable and passed by reference into every entry
//! point; the parser keeps no process-wide state.

/// When temporal operators (`always`, `until`, `'`, `var` ...) are accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TemporalMode {
    /// Always accepted
    #[default]
    Enabled,
    /// Parsed, but every use reports a failed-predicate diagnostic
    Disabled,
    /// Accepted when the `#lang` line names a temporal dialect, or after
    /// `option problem_type temporal`
    FromLangLine,
}

/// Options for a single parse
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParseConfig {
    pub temporal: TemporalMode,
    /// Stop recording diagnostics after this many; parsing continues
    pub max_diagnostics: Option<usize>,
}

impl ParseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_temporal(mut self, temporal: TemporalMode) -> Self {
        self.temporal = temporal;
        self
    }

    pub fn with_max_diagnostics(mut self, max: usize) -> Self {
        self.max_diagnostics = Some(max);
        self
    }

    /// Whether temporal constructs are accepted from the start of input
    pub fn temporal_enabled_for(&self, language: Option<&str>) -> bool {
        match self.temporal {
            TemporalMode::Enabled => true,
            TemporalMode::Disabled => false,
            TemporalMode::FromLangLine => language.is_some_and(is_temporal_language),
        }
    }
}

/// `forge/temporal` and friends
pub fn is_temporal_language(language: &str) -> bool {
    language.split('/').any(|part| part.trim() == "temporal")
}
