//! Crate-wide error taxonomy.
//!
//! Errors fall into three bands: configuration errors (malformed tags,
//! counts outside the supported vocabulary, missing starting prompt) that
//! are fatal for the current experiment definition; validation rejections
//! ([`Error::InvalidPlaceholders`]) that are recoverable — the author fixes
//! the content and resubmits; and composition failures
//! ([`Error::UnresolvedPlaceholders`]) that indicate composition ran
//! against an unvalidated section set.

use std::path::PathBuf;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// All errors produced by the rolecall library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A placeholder tag failed to parse into the `<ROLE_TYPE>` /
    /// `<ROLE_VERB_BASEFORM>` grammar.
    #[error("malformed placeholder tag `{tag}`: {reason}")]
    MalformedTag { tag: String, reason: String },

    /// An agent count fell outside the supported `1..=4` vocabulary.
    #[error("agent count {0} is outside the supported range 1..=4")]
    CountOutOfRange(u32),

    /// A composed section set has no `Starting prompt` section.
    #[error("no `Starting prompt` section in the composed set")]
    MissingStartingPrompt,

    /// Newly authored content referenced tags that are neither known
    /// placeholders nor well-formed new verb placeholders. The whole
    /// submission is rejected; nothing was registered.
    #[error("invalid placeholder tags: {}", tags.join(", "))]
    InvalidPlaceholders { tags: Vec<String> },

    /// Tags survived substitution — composition ran against a section set
    /// that was never validated.
    #[error("unresolved placeholder tags after substitution: {}", tags.join(", "))]
    UnresolvedPlaceholders { tags: Vec<String> },

    /// A role name was referenced that the experiment does not declare.
    #[error("unknown role `{0}`")]
    UnknownRole(String),

    /// A section was referenced that the experiment does not hold.
    #[error("unknown section `{0}`")]
    UnknownSection(String),

    /// A role was handed a section that is not private to it.
    #[error("section `{title}` is not a private section of role `{role}`")]
    ForeignSection { title: String, role: String },

    /// An experiment-global placeholder must target `agents` or `roles`.
    #[error("global placeholder `{0}` must target `agents` or `roles`")]
    InvalidGlobalPlaceholder(String),

    /// An experiment definition file is structurally unusable.
    #[error("invalid experiment definition: {0}")]
    Definition(String),

    /// Reading or writing an experiment file failed.
    #[error("i/o failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An experiment file is not valid JSON for the expected shape.
    #[error("malformed JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// True for the recoverable authoring rejection — callers re-prompt the
    /// author instead of aborting.
    pub fn is_validation_rejection(&self) -> bool {
        matches!(self, Error::InvalidPlaceholders { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_placeholders_lists_every_tag() {
        let err = Error::InvalidPlaceholders {
            tags: vec!["<A_B_C>".into(), "<D_E_F>".into()],
        };
        let text = err.to_string();
        assert!(text.contains("<A_B_C>"));
        assert!(text.contains("<D_E_F>"));
    }

    #[test]
    fn rejection_classification() {
        let rejection = Error::InvalidPlaceholders { tags: vec![] };
        assert!(rejection.is_validation_rejection());
        assert!(!Error::MissingStartingPrompt.is_validation_rejection());
    }
}
