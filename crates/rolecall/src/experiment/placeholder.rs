//! Placeholder tags and their count-dependent resolution.
//!
//! A placeholder is a bracketed template tag whose value depends on the
//! role it names and on how many agents of that role participate. The tag
//! grammar is `<ROLE_TYPE>` for the generic kinds and
//! `<ROLE_VERB_BASEFORM>` for dynamically declared verb conjugations:
//!
//! | Tag | count = 1 | count = 3 |
//! |-----|-----------|-----------|
//! | `<GUARD_NUM>` | `1` | `3` |
//! | `<GUARD_NOUN>` | `guard` | `guards` |
//! | `<GUARD_POSS>` | `guard's` | `guards'` |
//! | `<GUARD_PRON>` | `he/she` | `they` |
//! | `<GUARD_POSSPRON>` | `his/her` | `their` |
//! | `<GUARD_VERB_MAKE>` | `make` | `makes` |

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::lang::{EnglishLexicon, Lexicon, Pluralizer};

// ── Agent-count context ────────────────────────────────────────────

/// A validated agent count.
///
/// The composition vocabulary is a small closed set — experiments run with
/// one to four agents per role — so any other value is rejected at
/// construction time rather than silently degrading downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AgentCount(u8);

impl AgentCount {
    /// Smallest supported count.
    pub const MIN: AgentCount = AgentCount(1);
    /// Largest supported count.
    pub const MAX: AgentCount = AgentCount(4);

    /// Validate a raw count against the supported vocabulary.
    pub fn new(count: u32) -> Result<Self> {
        if (1..=4).contains(&count) {
            Ok(AgentCount(count as u8))
        } else {
            Err(Error::CountOutOfRange(count))
        }
    }

    /// The raw numeric value.
    pub fn get(self) -> u8 {
        self.0
    }

    /// True when exactly one agent carries the role.
    pub fn is_singular(self) -> bool {
        self.0 == 1
    }

    /// The count spelled out, for human-facing summaries.
    pub fn as_word(self) -> &'static str {
        match self.0 {
            1 => "one",
            2 => "two",
            3 => "three",
            _ => "four",
        }
    }

    /// Every count from one through `self`, in order.
    pub fn one_through(self) -> impl Iterator<Item = AgentCount> {
        (1..=self.0).map(AgentCount)
    }
}

impl std::fmt::Display for AgentCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Placeholder kinds ──────────────────────────────────────────────

/// The semantic kind of a placeholder, as a tagged variant rather than a
/// positional segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderKind {
    /// Resolves to the numeral as a string.
    Count,
    /// Resolves to the role noun, pluralized past one.
    Noun,
    /// Resolves to a declared verb's base form or plural conjugation.
    Verb { base: String },
    /// Resolves to the possessive of the (pluralized) role noun.
    Possessive,
    /// Resolves to `his/her` or `their`.
    PossessivePronoun,
    /// Resolves to `he/she` or `they`.
    PersonalPronoun,
}

impl PlaceholderKind {
    /// The tag segment that encodes this kind.
    fn code(&self) -> &'static str {
        match self {
            PlaceholderKind::Count => "NUM",
            PlaceholderKind::Noun => "NOUN",
            PlaceholderKind::Verb { .. } => "VERB",
            PlaceholderKind::Possessive => "POSS",
            PlaceholderKind::PossessivePronoun => "POSSPRON",
            PlaceholderKind::PersonalPronoun => "PRON",
        }
    }
}

// ── Placeholder ────────────────────────────────────────────────────

/// One templated tag: its literal form, owning role, and semantic kind.
///
/// Immutable once created. Every field is derivable from the tag, which is
/// also its persisted document form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    tag: String,
    role: String,
    kind: PlaceholderKind,
}

impl Placeholder {
    /// Parse a bracketed tag into a typed placeholder.
    ///
    /// The tag must split into exactly two segments (`<ROLE_TYPE>`) or
    /// exactly three with the literal `VERB` infix
    /// (`<ROLE_VERB_BASEFORM>`). Anything else is a configuration error.
    pub fn parse(tag: &str) -> Result<Self> {
        let malformed = |reason: &str| Error::MalformedTag {
            tag: tag.to_string(),
            reason: reason.to_string(),
        };
        let inner = tag
            .strip_prefix('<')
            .and_then(|t| t.strip_suffix('>'))
            .ok_or_else(|| malformed("not wrapped in angle brackets"))?;
        let segments: Vec<&str> = inner.split('_').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(malformed("empty segment"));
        }
        let (role, kind) = match segments.as_slice() {
            [role, code] => {
                let kind = match *code {
                    "NUM" => PlaceholderKind::Count,
                    "NOUN" => PlaceholderKind::Noun,
                    "POSS" => PlaceholderKind::Possessive,
                    "POSSPRON" => PlaceholderKind::PossessivePronoun,
                    "PRON" => PlaceholderKind::PersonalPronoun,
                    other => {
                        return Err(malformed(&format!("unknown placeholder type `{other}`")));
                    }
                };
                (role, kind)
            }
            [role, infix, base] => {
                if *infix != "VERB" {
                    return Err(malformed("middle segment of a 3-segment tag must be `VERB`"));
                }
                (
                    role,
                    PlaceholderKind::Verb {
                        base: base.to_lowercase(),
                    },
                )
            }
            parts => {
                return Err(malformed(&format!(
                    "expected 2 or 3 segments, found {}",
                    parts.len()
                )));
            }
        };
        let placeholder = Placeholder {
            tag: tag.to_string(),
            role: role.to_lowercase(),
            kind,
        };
        debug!("created placeholder {}", placeholder.tag);
        Ok(placeholder)
    }

    /// Build a placeholder from a role name and kind, deriving the tag.
    pub fn from_parts(role: &str, kind: PlaceholderKind) -> Self {
        let role_segment = role.to_uppercase();
        let tag = match &kind {
            PlaceholderKind::Verb { base } => {
                format!("<{}_VERB_{}>", role_segment, base.to_uppercase())
            }
            other => format!("<{}_{}>", role_segment, other.code()),
        };
        Placeholder {
            tag,
            role: role.to_lowercase(),
            kind,
        }
    }

    /// The literal bracketed tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The lowercased role segment.
    pub fn role(&self) -> &str {
        &self.role
    }

    /// The semantic kind.
    pub fn kind(&self) -> &PlaceholderKind {
        &self.kind
    }

    /// Resolve the placeholder for the given agent count.
    ///
    /// Pure and deterministic: the same count and pluralizer always produce
    /// the same string.
    pub fn to_value(&self, count: AgentCount, pluralizer: &dyn Pluralizer) -> String {
        let singular = count.is_singular();
        match &self.kind {
            PlaceholderKind::Count => count.to_string(),
            PlaceholderKind::Noun => {
                if singular {
                    self.role.clone()
                } else {
                    pluralizer.plural(&self.role)
                }
            }
            PlaceholderKind::Possessive => {
                let noun = if singular {
                    self.role.clone()
                } else {
                    pluralizer.plural(&self.role)
                };
                if noun.ends_with('s') {
                    format!("{noun}'")
                } else {
                    format!("{noun}'s")
                }
            }
            PlaceholderKind::PersonalPronoun => {
                if singular { "he/she" } else { "they" }.to_string()
            }
            PlaceholderKind::PossessivePronoun => {
                if singular { "his/her" } else { "their" }.to_string()
            }
            PlaceholderKind::Verb { base } => {
                if singular {
                    base.clone()
                } else {
                    pluralizer.plural(base)
                }
            }
        }
    }

    /// One-line preview of the tag and its resolutions, shown to authors
    /// before they write section content.
    pub fn preview(&self, pluralizer: &dyn Pluralizer) -> String {
        match self.kind {
            PlaceholderKind::Count => format!(
                "{}: {}, {}, {}, ...",
                self.tag,
                self.to_value(AgentCount(1), pluralizer),
                self.to_value(AgentCount(2), pluralizer),
                self.to_value(AgentCount(3), pluralizer),
            ),
            _ => format!(
                "{}: {} ({})",
                self.tag,
                self.to_value(AgentCount(1), pluralizer),
                self.to_value(AgentCount(2), pluralizer),
            ),
        }
    }

    /// Whether a word is a base-form verb under the default English
    /// lexicon. Convenience for callers that don't carry a [`Lexicon`].
    pub fn is_verb(word: &str) -> bool {
        EnglishLexicon.is_base_form_verb(word)
    }
}

/// Placeholders persist as their bare tag string.
impl Serialize for Placeholder {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.tag)
    }
}

impl<'de> Deserialize<'de> for Placeholder {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Placeholder::parse(&tag).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::EnglishPluralizer;

    fn value(tag: &str, count: u32) -> String {
        Placeholder::parse(tag)
            .unwrap()
            .to_value(AgentCount::new(count).unwrap(), &EnglishPluralizer)
    }

    #[test]
    fn noun_resolution() {
        assert_eq!(value("<GUARD_NOUN>", 1), "guard");
        assert_eq!(value("<GUARD_NOUN>", 3), "guards");
    }

    #[test]
    fn possessive_resolution() {
        assert_eq!(value("<PRISONER_POSS>", 1), "prisoner's");
        assert_eq!(value("<PRISONER_POSS>", 2), "prisoners'");
    }

    #[test]
    fn pronoun_resolution() {
        assert_eq!(value("<GUARD_PRON>", 1), "he/she");
        assert_eq!(value("<GUARD_PRON>", 2), "they");
        assert_eq!(value("<GUARD_POSSPRON>", 1), "his/her");
        assert_eq!(value("<GUARD_POSSPRON>", 4), "their");
    }

    #[test]
    fn count_resolution_is_the_numeral() {
        assert_eq!(value("<GUARD_NUM>", 1), "1");
        assert_eq!(value("<GUARD_NUM>", 4), "4");
    }

    #[test]
    fn verb_resolution() {
        assert_eq!(value("<GUARD_VERB_MAKE>", 1), "make");
        assert_eq!(value("<GUARD_VERB_MAKE>", 2), "makes");
        assert_eq!(value("<GUARD_VERB_WATCH>", 3), "watches");
    }

    #[test]
    fn verb_tag_parses_into_parts() {
        let p = Placeholder::parse("<GUARD_VERB_MAKE>").unwrap();
        assert_eq!(p.role(), "guard");
        assert_eq!(
            p.kind(),
            &PlaceholderKind::Verb {
                base: "make".into()
            }
        );
    }

    #[test]
    fn four_segment_tag_rejected() {
        let err = Placeholder::parse("<GUARD_NOUN_EXTRA_BAD>").unwrap_err();
        assert!(matches!(err, Error::MalformedTag { .. }));
    }

    #[test]
    fn three_segments_require_verb_infix() {
        assert!(Placeholder::parse("<GUARD_NOUN_MAKE>").is_err());
    }

    #[test]
    fn unknown_type_code_rejected() {
        assert!(Placeholder::parse("<GUARD_ADJ>").is_err());
    }

    #[test]
    fn unbracketed_tag_rejected() {
        assert!(Placeholder::parse("GUARD_NOUN").is_err());
    }

    #[test]
    fn from_parts_round_trips_through_parse() {
        let built = Placeholder::from_parts(
            "guard",
            PlaceholderKind::Verb {
                base: "make".into(),
            },
        );
        assert_eq!(built.tag(), "<GUARD_VERB_MAKE>");
        assert_eq!(Placeholder::parse(built.tag()).unwrap(), built);

        let noun = Placeholder::from_parts("prisoner", PlaceholderKind::Noun);
        assert_eq!(noun.tag(), "<PRISONER_NOUN>");
    }

    #[test]
    fn counts_outside_vocabulary_rejected() {
        assert!(matches!(AgentCount::new(0), Err(Error::CountOutOfRange(0))));
        assert!(matches!(AgentCount::new(5), Err(Error::CountOutOfRange(5))));
        assert_eq!(AgentCount::new(4).unwrap().get(), 4);
    }

    #[test]
    fn count_words() {
        assert_eq!(AgentCount::new(1).unwrap().as_word(), "one");
        assert_eq!(AgentCount::new(4).unwrap().as_word(), "four");
    }

    #[test]
    fn one_through_enumerates_in_order() {
        let counts: Vec<u8> = AgentCount::new(3)
            .unwrap()
            .one_through()
            .map(AgentCount::get)
            .collect();
        assert_eq!(counts, vec![1, 2, 3]);
    }

    #[test]
    fn serde_round_trip_as_tag_string() {
        let p = Placeholder::parse("<GUARD_POSS>").unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "\"<GUARD_POSS>\"");
        let back: Placeholder = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn is_verb_utility() {
        assert!(Placeholder::is_verb("make"));
        assert!(!Placeholder::is_verb("makes"));
        assert!(!Placeholder::is_verb("xyzzyqq"));
    }
}
