//! Declarative experiment definitions loaded from JSON files.
//!
//! A definition file names the roles, lists the agent sections in render
//! order (the first must be the starting prompt), marks which are shared,
//! and supplies the template content — shared sections carry one `content`,
//! private sections one entry per role under `contents`. Building an
//! [`Experiment`] from a definition pushes every piece of content through
//! the placeholder validator, so a definition that builds is a definition
//! that composes.
//!
//! ```json
//! {
//!   "starting_message": "Begin the experiment.",
//!   "roles": ["guard", "prisoner"],
//!   "agent_sections": [
//!     { "title": "starting_prompt", "contents": {
//!         "guard": "You are a guard.", "prisoner": "You are a prisoner." } },
//!     { "title": "goal", "contents": {
//!         "guard": "Control the <PRISONER_NOUN>.",
//!         "prisoner": "Endure the <GUARD_NOUN>." } },
//!     { "title": "study", "shared": true, "content": "A research study." }
//!   ],
//!   "counts": { "guard": 1, "prisoner": 2 }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::experiment::{
    AgentCount, Experiment, Role, Section, SectionKind, SectionTarget, normalize_title,
    section::STARTING_PROMPT_TITLE,
};
use crate::lang::Lexicon;

/// One agent section in a definition file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionDef {
    pub title: String,
    /// Shared sections appear once in every role's prompt.
    #[serde(default)]
    pub shared: bool,
    /// Content for a shared section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Per-role content for a private section.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub contents: BTreeMap<String, String>,
}

/// One summarizer section in a definition file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerSectionDef {
    pub title: String,
    pub content: String,
}

/// A whole experiment definition as authored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub starting_message: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub favourite: bool,
    pub roles: Vec<String>,
    pub agent_sections: Vec<SectionDef>,
    #[serde(default)]
    pub summarizer_sections: Vec<SummarizerSectionDef>,
    /// Agents per role: the maxima when sweeping combinations, the exact
    /// counts otherwise.
    #[serde(default)]
    pub counts: BTreeMap<String, u32>,
    /// Sweep every combination from one agent per role up to the maxima.
    #[serde(default)]
    pub try_each_combination: bool,
}

impl ExperimentConfig {
    /// Read a definition file.
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

    /// Build and fully validate the experiment this definition describes.
    pub fn build(&self, lexicon: &dyn Lexicon) -> Result<Experiment> {
        if self.roles.is_empty() {
            return Err(Error::Definition("no roles declared".into()));
        }
        self.check_starting_prompt()?;

        let mut shared_sections = Vec::new();
        let mut role_templates: Vec<Section> = Vec::new();
        for (position, def) in self.agent_sections.iter().enumerate() {
            let index = position as u32;
            if def.shared {
                shared_sections.push(Section::new(index, &def.title, "", SectionKind::Shared));
            } else {
                role_templates.push(Section::new(index, &def.title, "", SectionKind::Private));
            }
        }

        let mut roles = Vec::new();
        for name in &self.roles {
            let mut sections = role_templates.clone();
            for section in &mut sections {
                section.assign_role(name);
            }
            roles.push(Role::new(name.clone(), sections)?);
        }

        let summarizer_sections: Vec<Section> = self
            .summarizer_sections
            .iter()
            .enumerate()
            .map(|(position, def)| {
                Section::new(position as u32, &def.title, "", SectionKind::Summarizer)
            })
            .collect();

        let mut experiment =
            Experiment::new(&self.starting_message, roles, shared_sections, summarizer_sections)?
                .with_note(&self.note)
                .with_creator(&self.creator)
                .with_favourite(self.favourite);

        for def in &self.agent_sections {
            if def.shared {
                let content = def.content.as_deref().ok_or_else(|| {
                    Error::Definition(format!("shared section `{}` has no content", def.title))
                })?;
                experiment.set_section_content(
                    SectionTarget::Shared { title: &def.title },
                    content,
                    lexicon,
                )?;
            } else {
                for role in &self.roles {
                    let content = def.contents.get(role).ok_or_else(|| {
                        Error::Definition(format!(
                            "private section `{}` has no content for role `{role}`",
                            def.title
                        ))
                    })?;
                    experiment.set_section_content(
                        SectionTarget::Private {
                            role,
                            title: &def.title,
                        },
                        content,
                        lexicon,
                    )?;
                }
            }
        }
        for def in &self.summarizer_sections {
            experiment.set_section_content(
                SectionTarget::Summarizer { title: &def.title },
                &def.content,
                lexicon,
            )?;
        }

        experiment.validate()?;
        Ok(experiment)
    }

    /// The per-role agent counts, in declaration order.
    pub fn maxima(&self) -> Result<Vec<(String, AgentCount)>> {
        let mut maxima = Vec::with_capacity(self.roles.len());
        for role in &self.roles {
            let raw = self.counts.get(role).copied().ok_or_else(|| {
                Error::Definition(format!("no agent count declared for role `{role}`"))
            })?;
            maxima.push((role.clone(), AgentCount::new(raw)?));
        }
        Ok(maxima)
    }

    fn check_starting_prompt(&self) -> Result<()> {
        let leads_with_start = |title: Option<&String>| {
            title.is_some_and(|t| normalize_title(t) == STARTING_PROMPT_TITLE)
        };
        if !leads_with_start(self.agent_sections.first().map(|d| &d.title)) {
            return Err(Error::MissingStartingPrompt);
        }
        if !self.summarizer_sections.is_empty()
            && !leads_with_start(self.summarizer_sections.first().map(|d| &d.title))
        {
            return Err(Error::MissingStartingPrompt);
        }
        Ok(())
    }
}
