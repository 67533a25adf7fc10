//! Name matching against free text.
//!
//! One entry point, one policy enum. The three policies are deliberate
//! variations on recall/precision, not alternative implementations: Strict
//! is substring-based and tolerant of run-on text, WholeWord is the
//! document-classification policy, Partial trades precision for recall when
//! a document abbreviates a name.

use std::collections::BTreeSet;

use crate::forms::all_forms;

/// Matching policy, chosen explicitly per call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// Every form token of 3+ characters must occur in the text as a
    /// case-insensitive substring.
    Strict,
    /// Every form token of 2+ characters must equal a whole word of the
    /// text, case-insensitively. Used by paragraph classification.
    #[default]
    WholeWord,
    /// Whole-word comparison, but a form counts as matched when at least
    /// two of its tokens matched, or exactly one did and that token is
    /// longer than four characters.
    Partial,
}

/// Per-form diagnostics from [`debug_match`].
#[derive(Debug, Clone, PartialEq)]
pub struct FormDiagnostic {
    /// The candidate surface form.
    pub form: String,
    /// Tokens of the form, lowercased.
    pub form_words: Vec<String>,
    /// Tokens of the form found as whole words in the text.
    pub matched_words: Vec<String>,
    /// `matched_words.len() / form_words.len()`.
    pub ratio: f64,
}

/// Word boundaries for whole-word tokenization. Covers the punctuation
/// order documents actually contain, including both quotation-mark styles
/// and the dash variants.
const WORD_BOUNDARIES: &[char] = &[
    ' ', '\t', '\r', '\n', ',', '.', ':', ';', '(', ')', '[', ']', '"', '\'', '«', '»', '“', '”',
    '„', '/', '\\', '-', '–', '—', '!', '?', '№',
];

/// Does `target_name`, in any declined form, appear in `text`?
pub fn matches(text: &str, target_name: &str, policy: MatchPolicy) -> bool {
    let forms = all_forms(target_name);
    match policy {
        MatchPolicy::Strict => {
            let haystack = text.to_lowercase();
            forms.iter().any(|form| strict_form_matches(&haystack, form))
        }
        MatchPolicy::WholeWord | MatchPolicy::Partial => {
            let words = word_set(text);
            let partial = policy == MatchPolicy::Partial;
            forms
                .iter()
                .any(|form| word_form_matches(&words, form, partial))
        }
    }
}

/// Whole-word diagnostics for every form of the target name, in form order.
/// Pure observation; nothing is filtered out.
pub fn debug_match(text: &str, target_name: &str) -> Vec<FormDiagnostic> {
    let words = word_set(text);
    all_forms(target_name)
        .into_iter()
        .map(|form| {
            let form_words: Vec<String> = form
                .split_whitespace()
                .map(str::to_lowercase)
                .collect();
            let matched_words: Vec<String> = form_words
                .iter()
                .filter(|word| words.contains(*word))
                .cloned()
                .collect();
            let ratio = if form_words.is_empty() {
                0.0
            } else {
                matched_words.len() as f64 / form_words.len() as f64
            };
            FormDiagnostic {
                form,
                form_words,
                matched_words,
                ratio,
            }
        })
        .collect()
}

fn strict_form_matches(haystack: &str, form: &str) -> bool {
    let qualifying: Vec<String> = form
        .split_whitespace()
        .filter(|token| token.chars().count() >= 3)
        .map(str::to_lowercase)
        .collect();
    !qualifying.is_empty() && qualifying.iter().all(|token| haystack.contains(token))
}

fn word_form_matches(words: &BTreeSet<String>, form: &str, partial: bool) -> bool {
    let qualifying: Vec<String> = form
        .split_whitespace()
        .filter(|token| token.chars().count() >= 2)
        .map(str::to_lowercase)
        .collect();
    if qualifying.is_empty() {
        return false;
    }
    let matched: Vec<&String> = qualifying
        .iter()
        .filter(|token| words.contains(*token))
        .collect();
    if partial {
        matched.len() >= 2 || (matched.len() == 1 && matched[0].chars().count() > 4)
    } else {
        matched.len() == qualifying.len()
    }
}

/// Lowercased whole words of the text.
fn word_set(text: &str) -> BTreeSet<String> {
    text.split(WORD_BOUNDARIES)
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}
