//! Linguistic helpers behind swappable seams.
//!
//! Placeholder resolution needs two language-dependent operations: noun/verb
//! pluralization and a check that a candidate word is a base-form English
//! verb. Both sit behind small traits ([`Pluralizer`], [`Lexicon`]) so tests
//! and non-English experiments can substitute their own rules; the shipped
//! implementations are deterministic and dependency-free.

mod verbs;

use tracing::warn;

// ── Pluralization ──────────────────────────────────────────────────

/// Inflects a singular word into its plural form.
///
/// Used for role nouns (`guard` → `guards`) and for the plural conjugation
/// of verb placeholders (`make` → `makes`). Inputs are expected in lower
/// case, the form roles and verb bases are normalized to.
pub trait Pluralizer {
    fn plural(&self, word: &str) -> String;
}

/// Rule-based English pluralizer.
///
/// Handles the irregulars that plausibly name an agent role, the sibilant
/// `-es` endings, consonant-`y` → `-ies`, consonant-`o` → `-oes`, and
/// `-f`/`-fe` → `-ves`, falling back to a plain `-s`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishPluralizer;

/// Irregular plurals worth knowing about for role nouns.
const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("child", "children"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("man", "men"),
    ("mouse", "mice"),
    ("ox", "oxen"),
    ("person", "people"),
    ("tooth", "teeth"),
    ("woman", "women"),
];

/// Words ending in `o` or `f` that take a plain `-s` anyway.
const PLAIN_S_EXCEPTIONS: &[&str] = &[
    "belief", "chef", "chief", "halo", "photo", "piano", "proof", "roof", "solo",
];

impl Pluralizer for EnglishPluralizer {
    fn plural(&self, word: &str) -> String {
        if let Some((_, plural)) = IRREGULAR_PLURALS.iter().find(|(s, _)| *s == word) {
            return (*plural).to_string();
        }
        if PLAIN_S_EXCEPTIONS.contains(&word) {
            return format!("{word}s");
        }
        let chars: Vec<char> = word.chars().collect();
        let last = chars.last().copied();
        let second_last = chars.len().checked_sub(2).and_then(|i| chars.get(i)).copied();

        let sibilant = word.ends_with('s')
            || word.ends_with('x')
            || word.ends_with('z')
            || word.ends_with("ch")
            || word.ends_with("sh");
        if sibilant {
            return format!("{word}es");
        }
        match (second_last, last) {
            (Some(c), Some('y')) if !is_vowel(c) => {
                let stem: String = chars.iter().take(chars.len() - 1).collect();
                format!("{stem}ies")
            }
            (Some(c), Some('o')) if !is_vowel(c) => format!("{word}es"),
            (Some(c), Some('f')) if c != 'f' => {
                let stem: String = chars.iter().take(chars.len() - 1).collect();
                format!("{stem}ves")
            }
            _ if word.ends_with("fe") => {
                let stem: String = chars.iter().take(chars.len() - 2).collect();
                format!("{stem}ves")
            }
            _ => format!("{word}s"),
        }
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

// ── Verb lexicon ───────────────────────────────────────────────────

/// Answers whether a word is a base-form English verb.
///
/// Backing the check with a lexicon keeps the answer deterministic: a word
/// the lexicon does not know is treated as "not a verb", which also rejects
/// third-person-singular forms (`makes`) since only base forms are listed.
pub trait Lexicon {
    fn is_base_form_verb(&self, word: &str) -> bool;
}

/// Lexicon backed by an embedded list of common English base-form verbs.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLexicon;

impl Lexicon for EnglishLexicon {
    fn is_base_form_verb(&self, word: &str) -> bool {
        if verbs::BASE_FORMS.binary_search(&word).is_ok() {
            return true;
        }
        warn!("`{word}` is not a known base-form verb");
        false
    }
}
