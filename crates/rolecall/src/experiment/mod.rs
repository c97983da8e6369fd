//! Experiment definitions: roles, sections, placeholders, and the
//! operations that turn them into per-agent system prompts.
//!
//! An [`Experiment`] is an immutable-once-running value object built fresh
//! per run — roles with private sections, sections shared across roles, a
//! separate section set for the summarizer, and the experiment-global
//! placeholders `<AGENTS_NUM>` and `<ROLES_NUM>`. Content enters only
//! through [`Experiment::set_section_content`], which gates every
//! submission through the placeholder validator, so a fully authored
//! experiment is guaranteed composable.

pub mod placeholder;
pub mod role;
pub mod section;

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::lang::{Lexicon, Pluralizer};
use crate::prompt::{composer, validator};
use crate::runtime::AgentSpec;

pub use placeholder::{AgentCount, Placeholder, PlaceholderKind};
pub use role::Role;
pub use section::{Section, SectionKind, normalize_title};

/// One agent-count context: how many agents of each role participate.
pub type Combination = Vec<(String, AgentCount)>;

// ── Section addressing ─────────────────────────────────────────────

/// Addresses one section within an experiment for content updates.
#[derive(Debug, Clone, Copy)]
pub enum SectionTarget<'a> {
    Private { role: &'a str, title: &'a str },
    Shared { title: &'a str },
    Summarizer { title: &'a str },
}

// ── Experiment ─────────────────────────────────────────────────────

/// A complete role-play experiment definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experiment {
    /// Message that opens every conversation.
    pub starting_message: String,
    /// Free-form author note.
    #[serde(default)]
    pub note: String,
    /// Who authored this version of the experiment.
    #[serde(default)]
    pub creator: String,
    /// Author-flagged as important.
    #[serde(default)]
    pub favourite: bool,
    #[serde(with = "document::roles_by_name")]
    pub roles: BTreeMap<String, Role>,
    #[serde(with = "document::sections_by_title")]
    pub shared_sections: BTreeMap<String, Section>,
    #[serde(with = "document::sections_by_title")]
    pub summarizer_sections: BTreeMap<String, Section>,
    /// Experiment-global placeholders (`<AGENTS_NUM>`, `<ROLES_NUM>`).
    #[serde(with = "document::placeholders_by_tag")]
    pub placeholders: BTreeMap<String, Placeholder>,
    pub created_at: DateTime<Utc>,
}

impl Experiment {
    /// Assemble an experiment from its parts, seeding the global
    /// placeholders.
    ///
    /// Fails if a shared or summarizer section carries the wrong kind.
    pub fn new(
        starting_message: impl Into<String>,
        roles: Vec<Role>,
        shared_sections: Vec<Section>,
        summarizer_sections: Vec<Section>,
    ) -> Result<Self> {
        for section in &shared_sections {
            if section.kind != SectionKind::Shared {
                return Err(Error::Definition(format!(
                    "section `{}` in the shared set is not shared",
                    section.title
                )));
            }
        }
        for section in &summarizer_sections {
            if section.kind != SectionKind::Summarizer {
                return Err(Error::Definition(format!(
                    "section `{}` in the summarizer set is not a summarizer section",
                    section.title
                )));
            }
        }
        let experiment = Experiment {
            starting_message: starting_message.into(),
            note: String::new(),
            creator: String::new(),
            favourite: false,
            roles: roles.into_iter().map(|r| (r.name.clone(), r)).collect(),
            shared_sections: shared_sections
                .into_iter()
                .map(|s| (s.title.clone(), s))
                .collect(),
            summarizer_sections: summarizer_sections
                .into_iter()
                .map(|s| (s.title.clone(), s))
                .collect(),
            placeholders: global_placeholders()
                .into_iter()
                .map(|p| (p.tag().to_string(), p))
                .collect(),
            created_at: Utc::now(),
        };
        debug!(
            "created experiment with {} roles, {} shared sections, {} summarizer sections",
            experiment.roles.len(),
            experiment.shared_sections.len(),
            experiment.summarizer_sections.len()
        );
        Ok(experiment)
    }

    /// Attach an author note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Record the author.
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = creator.into();
        self
    }

    /// Flag the experiment as important.
    pub fn with_favourite(mut self, favourite: bool) -> Self {
        self.favourite = favourite;
        self
    }

    /// Deep-copy the experiment for a new versioned run.
    ///
    /// The copy gets a fresh creation timestamp and creator; sections the
    /// author wants rewritten should then be marked for reset and refilled
    /// through [`Experiment::set_section_content`].
    pub fn duplicate(&self, creator: impl Into<String>) -> Self {
        let mut copy = self.clone();
        copy.creator = creator.into();
        copy.created_at = Utc::now();
        copy
    }

    /// Every placeholder tag known to the experiment: all roles' tags plus
    /// the global ones.
    pub fn known_tags(&self) -> BTreeSet<String> {
        let mut tags: BTreeSet<String> = self.placeholders.keys().cloned().collect();
        for role in self.roles.values() {
            tags.extend(role.placeholders.keys().cloned());
        }
        tags
    }

    /// Declared role names, lowercased.
    pub fn role_names(&self) -> BTreeSet<String> {
        self.roles.keys().cloned().collect()
    }

    /// Submit content for one section.
    ///
    /// The submission is an all-or-nothing gate: every tag the content
    /// references must already be known or be a well-formed new verb
    /// placeholder. On acceptance any new verb placeholders are minted
    /// into their owning roles and the newly created tags are returned;
    /// on rejection nothing is stored or registered.
    pub fn set_section_content(
        &mut self,
        target: SectionTarget<'_>,
        content: &str,
        lexicon: &dyn Lexicon,
    ) -> Result<Vec<String>> {
        self.ensure_section_exists(target)?;
        let extracted = section::extract_tags(content);
        let minted =
            validator::reconcile(&extracted, &self.known_tags(), &self.role_names(), lexicon)?;

        let section = self.section_mut(target)?;
        section.set_content(content);

        let mut created = Vec::with_capacity(minted.len());
        for placeholder in minted {
            created.push(placeholder.tag().to_string());
            if let Some(role) = self.roles.get_mut(placeholder.role()) {
                role.add_placeholder(placeholder);
            }
        }
        if !created.is_empty() {
            warn!("new placeholders created: {}", created.join(", "));
        }
        Ok(created)
    }

    /// Check the whole experiment is composable: no empty or reset-pending
    /// sections, every referenced tag resolvable, and a starting prompt in
    /// both the per-role and summarizer section sets.
    pub fn validate(&self) -> Result<()> {
        let known = self.known_tags();
        let mut unknown = BTreeSet::new();
        let mut awaiting = Vec::new();
        for (section, label) in self.all_sections_labelled() {
            if section.content.is_empty() || section.needs_reset {
                awaiting.push(label);
                continue;
            }
            for tag in section::extract_tags(&section.content) {
                if !known.contains(&tag) {
                    unknown.insert(tag);
                }
            }
        }
        if !awaiting.is_empty() {
            return Err(Error::Definition(format!(
                "sections awaiting content: {}",
                awaiting.join(", ")
            )));
        }
        if !unknown.is_empty() {
            return Err(Error::InvalidPlaceholders {
                tags: unknown.into_iter().collect(),
            });
        }
        for role in self.roles.values() {
            if !self.role_section_set(role).iter().any(|s| s.is_starting_prompt()) {
                return Err(Error::MissingStartingPrompt);
            }
        }
        if !self.summarizer_sections.is_empty()
            && !self
                .summarizer_sections
                .values()
                .any(|s| s.is_starting_prompt())
        {
            return Err(Error::MissingStartingPrompt);
        }
        Ok(())
    }

    /// Resolve every applicable placeholder for one agent-count context.
    ///
    /// Role placeholders resolve against that role's count; `<ROLES_NUM>`
    /// against the number of roles present and `<AGENTS_NUM>` against the
    /// total agent count, both of which must themselves be valid counts.
    pub fn placeholder_values(
        &self,
        combination: &[(String, AgentCount)],
        pluralizer: &dyn Pluralizer,
    ) -> Result<BTreeMap<String, String>> {
        let mut values = BTreeMap::new();
        let mut total: u32 = 0;
        for (role_name, count) in combination {
            let role = self
                .roles
                .get(&role_name.to_lowercase())
                .ok_or_else(|| Error::UnknownRole(role_name.clone()))?;
            total += u32::from(count.get());
            for placeholder in role.placeholders.values() {
                values.insert(
                    placeholder.tag().to_string(),
                    placeholder.to_value(*count, pluralizer),
                );
            }
        }
        let roles_count = AgentCount::new(combination.len() as u32)?;
        let agents_count = AgentCount::new(total)?;
        for placeholder in self.placeholders.values() {
            let count = match placeholder.role() {
                "roles" => roles_count,
                "agents" => agents_count,
                _ => {
                    return Err(Error::InvalidGlobalPlaceholder(
                        placeholder.tag().to_string(),
                    ));
                }
            };
            values.insert(
                placeholder.tag().to_string(),
                placeholder.to_value(count, pluralizer),
            );
        }
        Ok(values)
    }

    /// Compose the system prompt for one role under one agent-count
    /// context: its private sections plus the shared sections, in order.
    pub fn compose_role_prompt(
        &self,
        role_name: &str,
        combination: &[(String, AgentCount)],
        pluralizer: &dyn Pluralizer,
    ) -> Result<String> {
        let role = self
            .roles
            .get(&role_name.to_lowercase())
            .ok_or_else(|| Error::UnknownRole(role_name.to_string()))?;
        let values = self.placeholder_values(combination, pluralizer)?;
        composer::compose(&self.role_section_set(role), &values)
    }

    /// Compose the summarizer's system prompt from its own section set.
    pub fn compose_summarizer_prompt(
        &self,
        combination: &[(String, AgentCount)],
        pluralizer: &dyn Pluralizer,
    ) -> Result<String> {
        let values = self.placeholder_values(combination, pluralizer)?;
        let sections: Vec<&Section> = self.summarizer_sections.values().collect();
        composer::compose(&sections, &values)
    }

    /// Build the agent specs for one agent-count context, ready to hand to
    /// a conversation runtime.
    ///
    /// Agents of the same role share one prompt and are named `Role_1`,
    /// `Role_2`, ... in order, so a run is reproducible end to end.
    pub fn agent_specs(
        &self,
        combination: &[(String, AgentCount)],
        pluralizer: &dyn Pluralizer,
    ) -> Result<Vec<AgentSpec>> {
        let mut specs = Vec::new();
        for (role_name, count) in combination {
            let prompt = self.compose_role_prompt(role_name, combination, pluralizer)?;
            let display_name = normalize_title(role_name);
            for ordinal in count.one_through() {
                specs.push(AgentSpec {
                    name: format!("{display_name}_{ordinal}"),
                    role: role_name.to_lowercase(),
                    system_message: prompt.clone(),
                });
            }
        }
        Ok(specs)
    }

    /// Persist the experiment as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| Error::Json {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Restore an experiment persisted with [`Experiment::save`].
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&json).map_err(|e| Error::Json {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn role_section_set<'a>(&'a self, role: &'a Role) -> Vec<&'a Section> {
        role.sections
            .values()
            .chain(self.shared_sections.values())
            .collect()
    }

    fn all_sections_labelled(&self) -> Vec<(&Section, String)> {
        let mut sections = Vec::new();
        for role in self.roles.values() {
            for section in role.sections.values() {
                sections.push((section, format!("{}/{}", role.name, section.title)));
            }
        }
        for section in self.shared_sections.values() {
            sections.push((section, format!("shared/{}", section.title)));
        }
        for section in self.summarizer_sections.values() {
            sections.push((section, format!("summarizer/{}", section.title)));
        }
        sections
    }

    fn ensure_section_exists(&self, target: SectionTarget<'_>) -> Result<()> {
        match target {
            SectionTarget::Private { role, title } => {
                let role_entry = self
                    .roles
                    .get(&role.to_lowercase())
                    .ok_or_else(|| Error::UnknownRole(role.to_string()))?;
                lookup(&role_entry.sections, title)?;
            }
            SectionTarget::Shared { title } => {
                lookup(&self.shared_sections, title)?;
            }
            SectionTarget::Summarizer { title } => {
                lookup(&self.summarizer_sections, title)?;
            }
        }
        Ok(())
    }

    fn section_mut(&mut self, target: SectionTarget<'_>) -> Result<&mut Section> {
        match target {
            SectionTarget::Private { role, title } => {
                let role_entry = self
                    .roles
                    .get_mut(&role.to_lowercase())
                    .ok_or_else(|| Error::UnknownRole(role.to_string()))?;
                lookup_mut(&mut role_entry.sections, title)
            }
            SectionTarget::Shared { title } => lookup_mut(&mut self.shared_sections, title),
            SectionTarget::Summarizer { title } => lookup_mut(&mut self.summarizer_sections, title),
        }
    }
}

fn lookup<'a>(map: &'a BTreeMap<String, Section>, title: &str) -> Result<&'a Section> {
    let key = normalize_title(title);
    map.get(&key).ok_or(Error::UnknownSection(key))
}

fn lookup_mut<'a>(map: &'a mut BTreeMap<String, Section>, title: &str) -> Result<&'a mut Section> {
    let key = normalize_title(title);
    map.get_mut(&key).ok_or(Error::UnknownSection(key))
}

/// The two placeholders every experiment carries: total agent count and
/// role count.
fn global_placeholders() -> Vec<Placeholder> {
    vec![
        Placeholder::from_parts("agents", PlaceholderKind::Count),
        Placeholder::from_parts("roles", PlaceholderKind::Count),
    ]
}

// ── Agent-count combinations ───────────────────────────────────────

/// Enumerate agent-count contexts from per-role maxima.
///
/// With `try_each` set, produces the full cartesian product of
/// `1..=max` per role (the original try-every-combination sweep);
/// otherwise a single combination at the maxima.
pub fn combinations(maxima: &[(String, AgentCount)], try_each: bool) -> Vec<Combination> {
    if !try_each {
        return vec![maxima.to_vec()];
    }
    let mut result = Vec::new();
    let mut current: Combination = Vec::with_capacity(maxima.len());
    expand(maxima, &mut current, &mut result);
    result
}

fn expand(
    remaining: &[(String, AgentCount)],
    current: &mut Combination,
    result: &mut Vec<Combination>,
) {
    let Some(((role, max), rest)) = remaining.split_first() else {
        result.push(current.clone());
        return;
    };
    for count in max.one_through() {
        current.push((role.clone(), count));
        expand(rest, current, result);
        current.pop();
    }
}

// ── Document serde helpers ─────────────────────────────────────────

/// Persist keyed collections in the original document shape: lists that
/// are re-keyed by title, tag, or name on load.
pub(crate) mod document {
    pub(crate) mod sections_by_title {
        use super::super::section::Section;
        use serde::{Deserialize, Deserializer, Serializer};
        use std::collections::BTreeMap;

        pub fn serialize<S: Serializer>(
            map: &BTreeMap<String, Section>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(map.values())
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<BTreeMap<String, Section>, D::Error> {
            let items = Vec::<Section>::deserialize(deserializer)?;
            Ok(items.into_iter().map(|s| (s.title.clone(), s)).collect())
        }
    }

    pub(crate) mod placeholders_by_tag {
        use super::super::placeholder::Placeholder;
        use serde::{Deserialize, Deserializer, Serializer};
        use std::collections::BTreeMap;

        pub fn serialize<S: Serializer>(
            map: &BTreeMap<String, Placeholder>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(map.values())
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<BTreeMap<String, Placeholder>, D::Error> {
            let items = Vec::<Placeholder>::deserialize(deserializer)?;
            Ok(items
                .into_iter()
                .map(|p| (p.tag().to_string(), p))
                .collect())
        }
    }

    pub(crate) mod roles_by_name {
        use super::super::role::Role;
        use serde::{Deserialize, Deserializer, Serializer};
        use std::collections::BTreeMap;

        pub fn serialize<S: Serializer>(
            map: &BTreeMap<String, Role>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(map.values())
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<BTreeMap<String, Role>, D::Error> {
            let items = Vec::<Role>::deserialize(deserializer)?;
            Ok(items.into_iter().map(|r| (r.name.clone(), r)).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{EnglishLexicon, EnglishPluralizer};

    fn count(n: u32) -> AgentCount {
        AgentCount::new(n).unwrap()
    }

    fn two_role_experiment() -> Experiment {
        let mut guard_start = Section::new(0, "starting_prompt", "", SectionKind::Private);
        guard_start.assign_role("guard");
        let mut guard_goal = Section::new(1, "goal", "", SectionKind::Private);
        guard_goal.assign_role("guard");
        let mut prisoner_start = Section::new(0, "starting_prompt", "", SectionKind::Private);
        prisoner_start.assign_role("prisoner");
        let mut prisoner_goal = Section::new(1, "goal", "", SectionKind::Private);
        prisoner_goal.assign_role("prisoner");
        let guard = Role::new("guard", vec![guard_start, guard_goal]).unwrap();
        let prisoner = Role::new("prisoner", vec![prisoner_start, prisoner_goal]).unwrap();
        let shared = Section::new(2, "study", "", SectionKind::Shared);
        Experiment::new("Begin.", vec![guard, prisoner], vec![shared], vec![]).unwrap()
    }

    fn filled_experiment() -> Experiment {
        let mut experiment = two_role_experiment();
        let lex = EnglishLexicon;
        for role in ["guard", "prisoner"] {
            experiment
                .set_section_content(
                    SectionTarget::Private {
                        role,
                        title: "starting_prompt",
                    },
                    &format!("You are a {role} in a study."),
                    &lex,
                )
                .unwrap();
        }
        experiment
            .set_section_content(
                SectionTarget::Private {
                    role: "guard",
                    title: "goal",
                },
                "Control the <PRISONER_NOUN>.",
                &lex,
            )
            .unwrap();
        experiment
            .set_section_content(
                SectionTarget::Private {
                    role: "prisoner",
                    title: "goal",
                },
                "Endure the <GUARD_NOUN>.",
                &lex,
            )
            .unwrap();
        experiment
            .set_section_content(
                SectionTarget::Shared { title: "study" },
                "Research study with <AGENTS_NUM> agents.",
                &lex,
            )
            .unwrap();
        experiment
    }

    #[test]
    fn seeds_global_placeholders() {
        let experiment = two_role_experiment();
        assert!(experiment.placeholders.contains_key("<AGENTS_NUM>"));
        assert!(experiment.placeholders.contains_key("<ROLES_NUM>"));
    }

    #[test]
    fn known_tags_unions_roles_and_globals() {
        let experiment = two_role_experiment();
        let tags = experiment.known_tags();
        assert!(tags.contains("<GUARD_NOUN>"));
        assert!(tags.contains("<PRISONER_POSS>"));
        assert!(tags.contains("<AGENTS_NUM>"));
    }

    #[test]
    fn placeholder_values_for_combination() {
        let experiment = two_role_experiment();
        let combination = vec![("guard".to_string(), count(1)), ("prisoner".to_string(), count(2))];
        let values = experiment
            .placeholder_values(&combination, &EnglishPluralizer)
            .unwrap();
        assert_eq!(values.get("<GUARD_NOUN>").unwrap(), "guard");
        assert_eq!(values.get("<PRISONER_NOUN>").unwrap(), "prisoners");
        assert_eq!(values.get("<PRISONER_POSS>").unwrap(), "prisoners'");
        assert_eq!(values.get("<AGENTS_NUM>").unwrap(), "3");
        assert_eq!(values.get("<ROLES_NUM>").unwrap(), "2");
    }

    #[test]
    fn oversized_total_agent_count_is_rejected() {
        let experiment = two_role_experiment();
        let combination = vec![("guard".to_string(), count(3)), ("prisoner".to_string(), count(3))];
        let err = experiment
            .placeholder_values(&combination, &EnglishPluralizer)
            .unwrap_err();
        assert!(matches!(err, Error::CountOutOfRange(6)));
    }

    #[test]
    fn content_minting_new_verb_placeholder() {
        let mut experiment = two_role_experiment();
        let created = experiment
            .set_section_content(
                SectionTarget::Private {
                    role: "guard",
                    title: "goal",
                },
                "You <GUARD_VERB_DECIDE> the rules.",
                &EnglishLexicon,
            )
            .unwrap();
        assert_eq!(created, vec!["<GUARD_VERB_DECIDE>".to_string()]);
        assert!(
            experiment.roles["guard"]
                .placeholders
                .contains_key("<GUARD_VERB_DECIDE>")
        );
    }

    #[test]
    fn rejected_submission_registers_nothing() {
        let mut experiment = two_role_experiment();
        let err = experiment
            .set_section_content(
                SectionTarget::Private {
                    role: "guard",
                    title: "goal",
                },
                "Use <GUARD_VERB_RUN> and <PRISONER_VERB_RUNS>.",
                &EnglishLexicon,
            )
            .unwrap_err();
        assert!(matches!(err, Error::InvalidPlaceholders { .. }));
        assert!(
            !experiment.roles["guard"]
                .placeholders
                .contains_key("<GUARD_VERB_RUN>")
        );
        assert!(experiment.roles["guard"].sections["Goal"].content.is_empty());
    }

    #[test]
    fn unknown_section_rejected_before_validation() {
        let mut experiment = two_role_experiment();
        let err = experiment
            .set_section_content(
                SectionTarget::Shared { title: "absent" },
                "text",
                &EnglishLexicon,
            )
            .unwrap_err();
        assert!(matches!(err, Error::UnknownSection(_)));
    }

    #[test]
    fn validate_reports_awaiting_sections() {
        let experiment = two_role_experiment();
        let err = experiment.validate().unwrap_err();
        assert!(matches!(err, Error::Definition(_)));
    }

    #[test]
    fn filled_experiment_validates() {
        filled_experiment().validate().unwrap();
    }

    #[test]
    fn compose_role_prompt_end_to_end() {
        let experiment = filled_experiment();
        let combination = vec![("guard".to_string(), count(1)), ("prisoner".to_string(), count(2))];
        let prompt = experiment
            .compose_role_prompt("guard", &combination, &EnglishPluralizer)
            .unwrap();
        let goal_pos = prompt.find("## Goal\n\nControl the prisoners.\n").unwrap();
        let study_pos = prompt
            .find("## Study\n\nResearch study with 3 agents.\n")
            .unwrap();
        assert!(prompt.starts_with("You are a guard in a study."));
        assert!(goal_pos < study_pos, "private sections precede shared ones");
        assert!(!prompt.contains("<PRISONER_NOUN>"));
    }

    #[test]
    fn agent_specs_are_deterministically_named() {
        let experiment = filled_experiment();
        let combination = vec![("guard".to_string(), count(2)), ("prisoner".to_string(), count(1))];
        let specs = experiment
            .agent_specs(&combination, &EnglishPluralizer)
            .unwrap();
        let names: Vec<&str> = specs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Guard_1", "Guard_2", "Prisoner_1"]);
        assert_eq!(specs[0].system_message, specs[1].system_message);
        assert_ne!(specs[0].system_message, specs[2].system_message);
    }

    #[test]
    fn duplicate_carries_content_with_new_authorship() {
        let experiment = filled_experiment().with_creator("alice");
        let copy = experiment.duplicate("bob");
        assert_eq!(copy.creator, "bob");
        assert_eq!(
            copy.roles["guard"].sections["Goal"].content,
            experiment.roles["guard"].sections["Goal"].content
        );
    }

    #[test]
    fn combinations_cartesian_product() {
        let maxima = vec![("guard".to_string(), count(2)), ("prisoner".to_string(), count(2))];
        let all = combinations(&maxima, true);
        assert_eq!(all.len(), 4);
        assert_eq!(all[0][0].1.get(), 1);
        assert_eq!(all[3][0].1.get(), 2);

        let single = combinations(&maxima, false);
        assert_eq!(single.len(), 1);
        assert_eq!(single[0][0].1.get(), 2);
    }

    #[test]
    fn save_and_load_round_trip() {
        let experiment = filled_experiment().with_note("round trip");
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("experiment.json");
        experiment.save(&path).unwrap();
        let restored = Experiment::load(&path).unwrap();
        assert_eq!(restored.note, "round trip");
        assert_eq!(restored.role_names(), experiment.role_names());
        assert_eq!(
            restored.roles["guard"].sections["Goal"].content,
            experiment.roles["guard"].sections["Goal"].content
        );
        restored.validate().unwrap();
    }
}
