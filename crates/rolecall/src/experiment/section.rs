//! Titled, ordered blocks of prompt template text.
//!
//! Sections carry the raw template content an author writes; the composer
//! renders them in their total order and substitutes placeholder values.
//! The section titled `Starting prompt` (index 0) renders bare, every
//! other section under a `## Title` markdown header.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Normalized title of the header-less opening section.
pub const STARTING_PROMPT_TITLE: &str = "Starting prompt";

// ── Section kind ───────────────────────────────────────────────────

/// Where a section belongs and how it ranks in render order.
///
/// Declaration order is rank order: role-declaration sections sort before
/// private ones, private before shared, shared before summarizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    /// Authored against the role set, not yet split into shared/private.
    RoleDeclaration,
    /// Belongs to exactly one role.
    Private,
    /// Reused verbatim across every role's prompt.
    Shared,
    /// Composed only into the summarizer's prompt.
    Summarizer,
}

// ── Section ────────────────────────────────────────────────────────

/// An ordered, titled block of prompt text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Render position within the section's kind; 0 is reserved for the
    /// starting prompt, which sorts before everything.
    pub index: u32,
    /// Normalized title: underscores become spaces, first letter upper.
    pub title: String,
    /// Trimmed template content.
    pub content: String,
    /// Kind, which doubles as the primary ordering rank.
    pub kind: SectionKind,
    /// Owning role name; present iff the section is private.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Set while a duplication flow waits for replacement content.
    #[serde(skip)]
    pub needs_reset: bool,
}

impl Section {
    /// Create a section with a normalized title and trimmed content.
    pub fn new(
        index: u32,
        title: impl AsRef<str>,
        content: impl Into<String>,
        kind: SectionKind,
    ) -> Self {
        let content: String = content.into();
        let section = Section {
            index,
            title: normalize_title(title.as_ref()),
            content: content.trim().to_string(),
            kind,
            role: None,
            needs_reset: false,
        };
        debug!("created section `{}`", section.title);
        section
    }

    /// Specialize this section as the private copy of one role.
    pub fn assign_role(&mut self, role: &str) {
        self.kind = SectionKind::Private;
        self.role = Some(role.to_lowercase());
    }

    /// The owning role name, or the empty string for non-private sections.
    pub fn role_name(&self) -> &str {
        self.role.as_deref().unwrap_or("")
    }

    /// True for the header-less opening section.
    pub fn is_starting_prompt(&self) -> bool {
        self.title == STARTING_PROMPT_TITLE
    }

    /// Replace the content and report every placeholder tag it references.
    ///
    /// The returned tags are the caller's contract for validating and
    /// registering placeholders before the section is accepted. Also
    /// clears the reset flag set by duplication flows.
    pub fn set_content(&mut self, content: &str) -> BTreeSet<String> {
        self.content = content.trim().to_string();
        self.needs_reset = false;
        extract_tags(&self.content)
    }

    /// Mark the section as awaiting replacement content.
    pub fn mark_for_reset(&mut self) {
        self.needs_reset = true;
    }
}

/// Render: the starting prompt is bare content, everything else gets a
/// markdown header.
impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_starting_prompt() {
            writeln!(f, "{}", self.content)
        } else {
            writeln!(f, "## {}\n\n{}", self.title, self.content)
        }
    }
}

// ── Ordering ───────────────────────────────────────────────────────

/// Total order: index 0 first, then kind rank, index, role, title.
impl Ord for Section {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.index == 0 || other.index == 0 {
            return self.index.cmp(&other.index);
        }
        self.kind
            .cmp(&other.kind)
            .then_with(|| self.index.cmp(&other.index))
            .then_with(|| self.role_name().cmp(other.role_name()))
            .then_with(|| self.title.cmp(&other.title))
    }
}

impl PartialOrd for Section {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Section {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for Section {}

// ── Helpers ────────────────────────────────────────────────────────

/// Underscores to spaces, first character uppercased, the rest lowered —
/// `starting_prompt` normalizes to `Starting prompt`.
pub fn normalize_title(raw: &str) -> String {
    let spaced = raw.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Scan content for placeholder-shaped tags.
///
/// A tag is `<` + uppercase/digit/underscore characters + `>`. Scanning is
/// substring-based, so tags adjacent to punctuation (`the <GUARD_NOUN>.`)
/// are still found.
pub fn extract_tags(content: &str) -> BTreeSet<String> {
    let mut tags = BTreeSet::new();
    let mut current: Option<String> = None;
    for ch in content.chars() {
        match ch {
            '<' => current = Some(String::from("<")),
            '>' => {
                if let Some(mut tag) = current.take()
                    && tag.len() > 1
                {
                    tag.push('>');
                    tags.insert(tag);
                }
            }
            c if c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_' => {
                if let Some(tag) = current.as_mut() {
                    tag.push(c);
                }
            }
            _ => current = None,
        }
    }
    tags
}
