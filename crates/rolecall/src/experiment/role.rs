//! Named agent archetypes owning private sections and placeholders.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::document;
use super::placeholder::{Placeholder, PlaceholderKind};
use super::section::{Section, SectionKind};
use crate::error::{Error, Result};

/// A named agent archetype.
///
/// Every section a role owns is private to it; every role starts with a
/// noun, a possessive, and a count placeholder derived from its name.
/// Roles persist in the original document shape: sections and placeholders
/// as lists, re-keyed by title and tag on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub name: String,
    #[serde(with = "document::sections_by_title")]
    pub sections: BTreeMap<String, Section>,
    #[serde(with = "document::placeholders_by_tag")]
    pub placeholders: BTreeMap<String, Placeholder>,
}

impl Role {
    /// Create a role from its private sections, seeding the starting
    /// placeholders.
    ///
    /// Fails if any section is not private to this role.
    pub fn new(name: impl Into<String>, sections: Vec<Section>) -> Result<Self> {
        let name = name.into();
        let placeholders = starting_placeholders(&name);
        Role::with_placeholders(name, sections, placeholders)
    }

    /// Create a role with an explicit placeholder set (e.g. restored from a
    /// persisted document). An empty set falls back to the starting three.
    pub fn with_placeholders(
        name: impl Into<String>,
        sections: Vec<Section>,
        placeholders: Vec<Placeholder>,
    ) -> Result<Self> {
        let name = name.into().to_lowercase();
        // Role names become tag segments, so anything beyond ASCII
        // alphanumerics would break the tag grammar.
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::Definition(format!(
                "role name `{name}` must be non-empty and alphanumeric"
            )));
        }
        for section in &sections {
            if section.kind != SectionKind::Private || section.role_name() != name {
                return Err(Error::ForeignSection {
                    title: section.title.clone(),
                    role: name,
                });
            }
        }
        let placeholders = if placeholders.is_empty() {
            starting_placeholders(&name)
        } else {
            placeholders
        };
        let role = Role {
            name,
            sections: sections
                .into_iter()
                .map(|s| (s.title.clone(), s))
                .collect(),
            placeholders: placeholders
                .into_iter()
                .map(|p| (p.tag().to_string(), p))
                .collect(),
        };
        debug!(
            "created role `{}` with {} private sections and {} placeholders",
            role.name,
            role.sections.len(),
            role.placeholders.len()
        );
        Ok(role)
    }

    /// Register a placeholder minted for this role.
    pub fn add_placeholder(&mut self, placeholder: Placeholder) {
        self.placeholders
            .insert(placeholder.tag().to_string(), placeholder);
    }

    /// The role's sections in render order.
    pub fn sorted_sections(&self) -> Vec<&Section> {
        let mut sections: Vec<&Section> = self.sections.values().collect();
        sections.sort();
        sections
    }
}

/// The noun, possessive, and count placeholders every role begins with.
fn starting_placeholders(name: &str) -> Vec<Placeholder> {
    vec![
        Placeholder::from_parts(name, PlaceholderKind::Noun),
        Placeholder::from_parts(name, PlaceholderKind::Possessive),
        Placeholder::from_parts(name, PlaceholderKind::Count),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn private_section(title: &str, role: &str) -> Section {
        let mut s = Section::new(1, title, "content", SectionKind::Private);
        s.assign_role(role);
        s
    }

    #[test]
    fn seeds_starting_placeholders() {
        let role = Role::new("guard", vec![private_section("goal", "guard")]).unwrap();
        assert!(role.placeholders.contains_key("<GUARD_NOUN>"));
        assert!(role.placeholders.contains_key("<GUARD_POSS>"));
        assert!(role.placeholders.contains_key("<GUARD_NUM>"));
        assert_eq!(role.placeholders.len(), 3);
    }

    #[test]
    fn rejects_sections_of_other_roles() {
        let err = Role::new("guard", vec![private_section("goal", "prisoner")]).unwrap_err();
        assert!(matches!(err, Error::ForeignSection { .. }));
    }

    #[test]
    fn rejects_non_private_sections() {
        let shared = Section::new(1, "study", "x", SectionKind::Shared);
        assert!(Role::new("guard", vec![shared]).is_err());
    }

    #[test]
    fn role_names_must_be_alphanumeric() {
        assert!(Role::new("cell_block", vec![]).is_err());
        assert!(Role::new("", vec![]).is_err());
        assert!(Role::new("Guard", vec![]).is_ok());
    }

    #[test]
    fn explicit_placeholders_suppress_seeding() {
        let p = Placeholder::parse("<GUARD_VERB_MAKE>").unwrap();
        let role = Role::with_placeholders("guard", vec![], vec![p]).unwrap();
        assert_eq!(role.placeholders.len(), 1);
        assert!(role.placeholders.contains_key("<GUARD_VERB_MAKE>"));
    }

    #[test]
    fn serde_round_trip() {
        let role = Role::new("guard", vec![private_section("goal", "guard")]).unwrap();
        let json = serde_json::to_string(&role).unwrap();
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, role);
    }
}
