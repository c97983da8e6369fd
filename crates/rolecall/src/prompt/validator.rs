//! Reconciles freshly referenced tags against the known placeholder set.

use std::collections::BTreeSet;

use tracing::error;

use crate::error::{Error, Result};
use crate::experiment::placeholder::{Placeholder, PlaceholderKind};
use crate::lang::Lexicon;

/// Validate the tags extracted from newly authored content.
///
/// Tags already in `known` pass untouched. Every other tag must be a
/// well-formed new verb placeholder: three segments, a first segment
/// naming a declared role (matched case-insensitively), the literal
/// `VERB` infix, and a base form the lexicon accepts.
///
/// The gate is all-or-nothing per submission: if any new tag fails, the
/// whole batch is rejected with every offending tag listed, and nothing
/// is minted. On success the minted verb placeholders are returned for
/// the caller to register with their owning roles.
pub fn reconcile(
    extracted: &BTreeSet<String>,
    known: &BTreeSet<String>,
    role_names: &BTreeSet<String>,
    lexicon: &dyn Lexicon,
) -> Result<Vec<Placeholder>> {
    let mut minted = Vec::new();
    let mut invalid = Vec::new();
    for tag in extracted.difference(known) {
        match mint_verb_placeholder(tag, role_names, lexicon) {
            Some(placeholder) => minted.push(placeholder),
            None => {
                error!("invalid placeholder tag: {tag}");
                invalid.push(tag.clone());
            }
        }
    }
    if invalid.is_empty() {
        Ok(minted)
    } else {
        Err(Error::InvalidPlaceholders { tags: invalid })
    }
}

/// Parse a candidate tag as a new verb placeholder for a declared role.
fn mint_verb_placeholder(
    tag: &str,
    role_names: &BTreeSet<String>,
    lexicon: &dyn Lexicon,
) -> Option<Placeholder> {
    let placeholder = Placeholder::parse(tag).ok()?;
    match placeholder.kind() {
        PlaceholderKind::Verb { base }
            if role_names.contains(placeholder.role()) && lexicon.is_base_form_verb(base) =>
        {
            Some(placeholder)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::EnglishLexicon;

    fn set(tags: &[&str]) -> BTreeSet<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn known_tags_pass_untouched() {
        let minted = reconcile(
            &set(&["<GUARD_NOUN>"]),
            &set(&["<GUARD_NOUN>"]),
            &set(&["guard"]),
            &EnglishLexicon,
        )
        .unwrap();
        assert!(minted.is_empty());
    }

    #[test]
    fn well_formed_verb_tag_is_minted() {
        let minted = reconcile(
            &set(&["<GUARD_VERB_MAKE>"]),
            &set(&[]),
            &set(&["guard"]),
            &EnglishLexicon,
        )
        .unwrap();
        assert_eq!(minted.len(), 1);
        assert_eq!(minted[0].tag(), "<GUARD_VERB_MAKE>");
        assert_eq!(minted[0].role(), "guard");
    }

    #[test]
    fn one_bad_tag_rejects_the_whole_batch() {
        let err = reconcile(
            &set(&["<GUARD_NOUN>", "<GUARD_VERB_RUN>", "<PRISONER_VERB_RUNS>"]),
            &set(&["<GUARD_NOUN>"]),
            &set(&["guard", "prisoner"]),
            &EnglishLexicon,
        )
        .unwrap_err();
        match err {
            Error::InvalidPlaceholders { tags } => {
                assert_eq!(tags, vec!["<PRISONER_VERB_RUNS>".to_string()]);
            }
            other => panic!("expected InvalidPlaceholders, got {other:?}"),
        }
    }

    #[test]
    fn unknown_role_rejected() {
        assert!(
            reconcile(
                &set(&["<WARDEN_VERB_MAKE>"]),
                &set(&[]),
                &set(&["guard"]),
                &EnglishLexicon,
            )
            .is_err()
        );
    }

    #[test]
    fn non_verb_new_tags_rejected() {
        // A structurally valid 2-segment tag is still not mintable: only
        // verb placeholders may be created from content.
        assert!(
            reconcile(
                &set(&["<GUARD_PRON>"]),
                &set(&[]),
                &set(&["guard"]),
                &EnglishLexicon,
            )
            .is_err()
        );
    }

    #[test]
    fn third_person_base_form_rejected() {
        assert!(
            reconcile(
                &set(&["<GUARD_VERB_MAKES>"]),
                &set(&[]),
                &set(&["guard"]),
                &EnglishLexicon,
            )
            .is_err()
        );
    }
}
