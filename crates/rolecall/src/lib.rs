//! Prompt-composition harness for multi-agent role-play experiments.
//!
//! `rolecall` assembles the system prompt of every agent in a role-play
//! experiment (guards and prisoners, debaters, negotiators — any set of
//! named roles) from ordered, role-specific, and shared text sections. The
//! sections are templates: bracketed placeholder tags such as
//! `<GUARD_NOUN>` or `<PRISONER_VERB_OBEY>` resolve to role- and
//! count-dependent text, so the same experiment definition composes
//! correct prompts whether one guard faces one prisoner or two face three.
//!
//! The crate's guarantee is that **no prompt reaches the conversation
//! runtime with an unresolved placeholder**. Two gates enforce it:
//! content is only accepted into an experiment after the
//! [placeholder validator](prompt::validator) confirms every referenced
//! tag exists or is a well-formed new verb placeholder, and the
//! [composer](prompt::composer) refuses to emit a prompt in which any
//! tag survived substitution.
//!
//! # Getting started
//!
//! ```
//! use rolecall::prelude::*;
//!
//! # fn main() -> rolecall::error::Result<()> {
//! let mut start = Section::new(0, "starting_prompt", "", SectionKind::Private);
//! start.assign_role("guard");
//! let mut goal = Section::new(1, "goal", "", SectionKind::Private);
//! goal.assign_role("guard");
//!
//! let guard = Role::new("guard", vec![start, goal])?;
//! let mut experiment = Experiment::new("Begin.", vec![guard], vec![], vec![])?;
//!
//! experiment.set_section_content(
//!     SectionTarget::Private { role: "guard", title: "starting_prompt" },
//!     "You are a guard.",
//!     &EnglishLexicon,
//! )?;
//! experiment.set_section_content(
//!     SectionTarget::Private { role: "guard", title: "goal" },
//!     "There are <GUARD_NUM> of you on shift.",
//!     &EnglishLexicon,
//! )?;
//!
//! let combination = vec![("guard".to_string(), AgentCount::new(2)?)];
//! let prompt = experiment.compose_role_prompt("guard", &combination, &EnglishPluralizer)?;
//! assert!(prompt.contains("There are 2 of you on shift."));
//! # Ok(())
//! # }
//! ```
//!
//! # Where to find things
//!
//! - **Model an experiment:** [`Experiment`](experiment::Experiment),
//!   [`Role`](experiment::Role), [`Section`](experiment::Section),
//!   [`Placeholder`](experiment::Placeholder), and the validated
//!   [`AgentCount`](experiment::AgentCount) context.
//! - **Compose prompts:** [`prompt::composer::compose`] for the raw
//!   algorithm, or the experiment-level entry points
//!   [`Experiment::compose_role_prompt`](experiment::Experiment::compose_role_prompt)
//!   and
//!   [`Experiment::compose_summarizer_prompt`](experiment::Experiment::compose_summarizer_prompt).
//! - **Validate authored content:** [`prompt::validator::reconcile`] and
//!   [`Experiment::set_section_content`](experiment::Experiment::set_section_content).
//! - **Hand agents to a runtime:** [`runtime::AgentSpec`],
//!   [`runtime::ConversationRuntime`], and the deterministic
//!   [`runtime::ScriptedRuntime`] stand-in.
//! - **Load definitions from disk:** [`config::ExperimentConfig`].
//! - **Swap the linguistics:** the [`lang::Pluralizer`] and
//!   [`lang::Lexicon`] traits.
//!
//! # Design principles
//!
//! 1. **Fail before the API call.** Every malformed tag, unknown
//!    placeholder, or out-of-vocabulary agent count is caught while the
//!    experiment is being authored, never after an LLM round has been
//!    paid for.
//! 2. **Value objects, not shared state.** Experiments are built fresh
//!    per run and treated as append-only during authoring; composition is
//!    a pure function of the experiment and an agent-count context.
//! 3. **The runtime is a stranger.** The core hands over a name and a
//!    finished string, nothing else.

pub mod config;
pub mod error;
pub mod experiment;
pub mod lang;
pub mod prelude;
pub mod prompt;
pub mod runtime;

pub use error::{Error, Result};
