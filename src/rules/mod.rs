//! Replacement rules and the rewriter that applies them.
//!
//! This module handles:
//! - The `ReplacementRule` data model (literal or regex, global or single-shot)
//! - The ordered rule table for the SDR → CLOSER migration
//! - Compiling and applying rules to a text buffer, with a per-rule match report

pub mod rewriter;
pub mod table;
pub mod types;

pub use rewriter::{CompiledRule, Rewrite, RuleOutcome, apply, apply_compiled, compile_rules};
pub use table::RULES;
pub use types::{ReplacementRule, RuleKind};
