//! Renders one ordered section set into a final system message.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::experiment::section::{Section, extract_tags};

/// Compose a system message from the sections applicable to one agent.
///
/// Sections are sorted into their total order, rendered (starting prompt
/// bare, everything else under a `## Title` header), every occurrence of
/// every mapped tag is replaced by literal substring substitution, and the
/// rendered blocks are joined with blank lines.
///
/// Fails when the set has no starting prompt, and — rather than leaking a
/// literal `<TAG>` into an expensive LLM call — when any placeholder-shaped
/// tag survives substitution.
pub fn compose(sections: &[&Section], values: &BTreeMap<String, String>) -> Result<String> {
    if !sections.iter().any(|s| s.is_starting_prompt()) {
        return Err(Error::MissingStartingPrompt);
    }
    let mut ordered: Vec<&Section> = sections.to_vec();
    ordered.sort();

    let rendered: Vec<String> = ordered
        .iter()
        .map(|section| {
            let mut text = section.to_string();
            for (tag, value) in values {
                text = text.replace(tag, value);
            }
            text
        })
        .collect();
    let message = rendered.join("\n\n");

    let leftover = extract_tags(&message);
    if leftover.is_empty() {
        Ok(message)
    } else {
        Err(Error::UnresolvedPlaceholders {
            tags: leftover.into_iter().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experiment::section::SectionKind;

    fn starting(content: &str) -> Section {
        Section::new(0, "starting_prompt", content, SectionKind::RoleDeclaration)
    }

    #[test]
    fn plain_sections_round_trip_in_sorted_order() {
        let start = starting("You are an agent.");
        let b = Section::new(2, "rules", "Follow the rules.", SectionKind::Shared);
        let a = Section::new(1, "goal", "Win.", SectionKind::Shared);
        // Authored out of order on purpose. Every rendered section keeps
        // its trailing newline, so the blank-line join leaves one empty
        // line between blocks.
        let prompt = compose(&[&b, &start, &a], &BTreeMap::new()).unwrap();
        assert_eq!(
            prompt,
            "You are an agent.\n\n\n## Goal\n\nWin.\n\n\n## Rules\n\nFollow the rules.\n"
        );
    }

    #[test]
    fn substitutes_every_occurrence() {
        let start = starting("The <GUARD_NOUN> watch. The <GUARD_NOUN> decide.");
        let values = BTreeMap::from([("<GUARD_NOUN>".to_string(), "guards".to_string())]);
        let prompt = compose(&[&start], &values).unwrap();
        assert_eq!(prompt, "The guards watch. The guards decide.\n");
    }

    #[test]
    fn missing_starting_prompt_is_fatal() {
        let lone = Section::new(1, "goal", "Win.", SectionKind::Shared);
        let err = compose(&[&lone], &BTreeMap::new()).unwrap_err();
        assert!(matches!(err, Error::MissingStartingPrompt));
    }

    #[test]
    fn unresolved_tags_are_refused_and_listed() {
        let start = starting("Watch the <PRISONER_NOUN> and <GUARD_VERB_GO>.");
        let values = BTreeMap::from([("<PRISONER_NOUN>".to_string(), "prisoners".to_string())]);
        let err = compose(&[&start], &values).unwrap_err();
        match err {
            Error::UnresolvedPlaceholders { tags } => {
                assert_eq!(tags, vec!["<GUARD_VERB_GO>".to_string()]);
            }
            other => panic!("expected UnresolvedPlaceholders, got {other:?}"),
        }
    }

    #[test]
    fn private_sections_sort_before_shared_regardless_of_index() {
        let start = starting("Intro.");
        let mut private = Section::new(3, "goal", "Private goal.", SectionKind::Private);
        private.assign_role("guard");
        let shared = Section::new(1, "study", "Shared study.", SectionKind::Shared);
        let prompt = compose(&[&shared, &private, &start], &BTreeMap::new()).unwrap();
        let goal = prompt.find("## Goal").unwrap();
        let study = prompt.find("## Study").unwrap();
        assert!(goal < study);
    }
}
