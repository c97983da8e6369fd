//! Convenience re-exports for common `rolecall` types.
//!
//! Meant to be glob-imported when defining and composing experiments:
//!
//! ```ignore
//! use rolecall::prelude::*;
//! ```
//!
//! This pulls in the experiment model, the composition entry points, the
//! default English linguistics, and the runtime boundary types. Internals
//! (the document serde helpers, the raw composer and validator functions)
//! are intentionally excluded — import those from their modules directly
//! when needed.

// ── Experiment model ────────────────────────────────────────────────
pub use crate::experiment::{
    AgentCount, Combination, Experiment, Placeholder, PlaceholderKind, Role, Section, SectionKind,
    SectionTarget, combinations,
};

// ── Errors ──────────────────────────────────────────────────────────
pub use crate::error::{Error, Result};

// ── Linguistics ─────────────────────────────────────────────────────
pub use crate::lang::{EnglishLexicon, EnglishPluralizer, Lexicon, Pluralizer};

// ── Runtime boundary ────────────────────────────────────────────────
pub use crate::runtime::{AgentSpec, ConversationRuntime, ScriptedRuntime, Transcript};

// ── Definitions on disk ─────────────────────────────────────────────
pub use crate::config::ExperimentConfig;
