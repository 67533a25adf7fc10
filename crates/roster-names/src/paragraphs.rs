//! Paragraph splitting and classification.
//!
//! An order document is a flat text; paragraphs are separated by one or
//! more blank lines. Each paragraph is judged independently on two signals:
//! does it contain the order-trigger keyword, and does it reference anyone
//! from the roster. The inclusion policy combines the two signals; the
//! conjunctive policy is the production behavior, the others exist for
//! diagnostic views.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::matcher::{MatchPolicy, matches};

/// Inflection-tolerant pattern for the order trigger: "наказ" and its case
/// forms, plus derived verbs ("наказую", "наказано").
const DEFAULT_KEYWORD_PATTERN: &str = r"(?i)\bнаказ\w*";

static DEFAULT_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DEFAULT_KEYWORD_PATTERN).expect("default keyword pattern compiles")
});

/// How keyword and name signals combine into an inclusion decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InclusionPolicy {
    /// Keyword present, roster ignored.
    KeywordOnly,
    /// Any roster name present, keyword ignored.
    NamesOnly,
    /// Keyword and at least one roster name. The production policy.
    #[default]
    KeywordAndNames,
    /// Either signal; the "classify everything" diagnostic view.
    KeywordOrNames,
}

/// One paragraph that passed the inclusion policy.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedParagraph {
    pub text: String,
    pub contains_keyword: bool,
    /// Roster names (as given, nominative) found in the paragraph.
    pub matched_names: Vec<String>,
    /// Character offset of the paragraph start within the document.
    pub start_offset: usize,
}

/// Classifier carrying the compiled keyword pattern.
#[derive(Debug, Clone)]
pub struct ParagraphClassifier {
    keyword: Regex,
}

impl Default for ParagraphClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ParagraphClassifier {
    pub fn new() -> Self {
        Self {
            keyword: DEFAULT_KEYWORD.clone(),
        }
    }

    /// Classifier with a custom trigger pattern.
    pub fn with_keyword(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            keyword: Regex::new(pattern)?,
        })
    }

    /// Split the document into paragraphs and return those the policy
    /// includes, in document order. Name matching uses the whole-word
    /// policy.
    pub fn classify(
        &self,
        document: &str,
        roster_names: &[String],
        policy: InclusionPolicy,
    ) -> Vec<ClassifiedParagraph> {
        let mut included = Vec::new();
        for (paragraph, start_offset) in paragraphs(document) {
            let contains_keyword = self.keyword.is_match(&paragraph);
            let matched_names: Vec<String> = roster_names
                .iter()
                .filter(|name| matches(&paragraph, name, MatchPolicy::WholeWord))
                .cloned()
                .collect();
            let include = match policy {
                InclusionPolicy::KeywordOnly => contains_keyword,
                InclusionPolicy::NamesOnly => !matched_names.is_empty(),
                InclusionPolicy::KeywordAndNames => contains_keyword && !matched_names.is_empty(),
                InclusionPolicy::KeywordOrNames => contains_keyword || !matched_names.is_empty(),
            };
            if include {
                included.push(ClassifiedParagraph {
                    text: paragraph,
                    contains_keyword,
                    matched_names,
                    start_offset,
                });
            }
        }
        debug!(
            paragraphs = included.len(),
            names = roster_names.len(),
            ?policy,
            "classified document"
        );
        included
    }
}

/// Paragraphs of the document with their starting character offsets.
/// Blank-line separated; paragraphs empty after trimming are dropped.
fn paragraphs(document: &str) -> Vec<(String, usize)> {
    let mut result = Vec::new();
    let mut current = String::new();
    let mut current_start = 0usize;
    let mut offset = 0usize;

    for line in document.split_inclusive('\n') {
        if line.trim().is_empty() {
            flush(&mut result, &mut current, current_start);
        } else {
            if current.is_empty() {
                current_start = offset;
            }
            current.push_str(line);
        }
        offset += line.chars().count();
    }
    flush(&mut result, &mut current, current_start);
    result
}

fn flush(result: &mut Vec<(String, usize)>, current: &mut String, start: usize) {
    if !current.trim().is_empty() {
        result.push((current.trim_end().to_string(), start));
    }
    current.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<String> {
        vec![
            "Петренко Іван Олександрович".to_string(),
            "Коваленко Петро Сергійович".to_string(),
        ]
    }

    const DOCUMENT: &str = "\
Наказую оголосити подяку особовому складу роти.

Петренко Іван Олександрович призначається черговим по частині.

Наказую Петренка Івана Олександровича направити у відрядження.";

    #[test]
    fn conjunctive_policy_requires_both_signals() {
        let classifier = ParagraphClassifier::new();
        let included = classifier.classify(DOCUMENT, &roster(), InclusionPolicy::KeywordAndNames);
        assert_eq!(included.len(), 1);
        assert!(included[0].contains_keyword);
        assert_eq!(
            included[0].matched_names,
            vec!["Петренко Іван Олександрович".to_string()]
        );
        assert!(included[0].text.starts_with("Наказую Петренка"));
    }

    #[test]
    fn keyword_only_policy() {
        let classifier = ParagraphClassifier::new();
        let included = classifier.classify(DOCUMENT, &roster(), InclusionPolicy::KeywordOnly);
        assert_eq!(included.len(), 2);
    }

    #[test]
    fn names_only_policy() {
        let classifier = ParagraphClassifier::new();
        let included = classifier.classify(DOCUMENT, &roster(), InclusionPolicy::NamesOnly);
        assert_eq!(included.len(), 2);
    }

    #[test]
    fn union_policy_includes_every_flagged_paragraph() {
        let classifier = ParagraphClassifier::new();
        let included = classifier.classify(DOCUMENT, &roster(), InclusionPolicy::KeywordOrNames);
        assert_eq!(included.len(), 3);
    }

    #[test]
    fn offsets_track_paragraph_starts() {
        let classifier = ParagraphClassifier::new();
        let included = classifier.classify(DOCUMENT, &roster(), InclusionPolicy::KeywordOrNames);
        assert_eq!(included[0].start_offset, 0);
        for window in included.windows(2) {
            assert!(window[0].start_offset < window[1].start_offset);
        }
        // The offset points at the paragraph's first character.
        let chars: Vec<char> = DOCUMENT.chars().collect();
        for paragraph in &included {
            let first = paragraph.text.chars().next().unwrap();
            assert_eq!(chars[paragraph.start_offset], first);
        }
    }

    #[test]
    fn keyword_inflections_are_recognized() {
        let classifier = ParagraphClassifier::new();
        let text = "Відповідно до наказу командира частини.";
        let included = classifier.classify(text, &[], InclusionPolicy::KeywordOnly);
        assert_eq!(included.len(), 1);
    }

    #[test]
    fn blank_heavy_documents_split_cleanly() {
        let classifier = ParagraphClassifier::new();
        let text = "\n\n\nНаказую.\n\n\n\n";
        let included = classifier.classify(text, &[], InclusionPolicy::KeywordOnly);
        assert_eq!(included.len(), 1);
        assert_eq!(included[0].text, "Наказую.");
    }

    #[test]
    fn custom_keyword_pattern() {
        let classifier = ParagraphClassifier::with_keyword(r"(?i)\bрозпорядж\w*").unwrap();
        let text = "Згідно з розпорядженням штабу.";
        let included = classifier.classify(text, &[], InclusionPolicy::KeywordOnly);
        assert_eq!(included.len(), 1);
    }
}
