//! First-name and patronymic form resolution.
//!
//! Table hits return the curated five case forms. Everything else goes
//! through suffix heuristics keyed on the final letters. The heuristics are
//! an approximation of second/first-declension endings, not a full grammar;
//! they exist so an uncommon name still produces usable oblique forms
//! instead of nothing.

use tracing::trace;

use crate::tables::{lookup_first_name, lookup_patronymic};

/// All case forms of a first name: table entry if known, heuristic
/// otherwise. The nominative input is always the first element.
pub fn first_name_forms(name: &str) -> Vec<String> {
    if let Some(decl) = lookup_first_name(name) {
        return decl.forms().iter().map(|form| (*form).to_string()).collect();
    }
    trace!(name, "first name not in tables, using suffix heuristics");
    heuristic_forms(name)
}

/// All case forms of a patronymic.
///
/// The `-ович`/`-івна` families decline completely regularly, so the
/// fallback handles any patronymic the tables miss; other shapes reuse the
/// first-name heuristics.
pub fn patronymic_forms(name: &str) -> Vec<String> {
    if let Some(decl) = lookup_patronymic(name) {
        return decl.forms().iter().map(|form| (*form).to_string()).collect();
    }
    trace!(name, "patronymic not in tables, using suffix heuristics");
    if name.ends_with("ович") || name.ends_with("евич") {
        return vec![
            name.to_string(),
            format!("{name}а"),
            format!("{name}у"),
            format!("{name}а"),
            format!("{name}у"),
        ];
    }
    if name.ends_with("івна") || name.ends_with("ївна") {
        let stem = trim_last(name);
        return vec![
            name.to_string(),
            format!("{stem}и"),
            format!("{stem}і"),
            format!("{stem}у"),
            format!("{stem}і"),
        ];
    }
    heuristic_forms(name)
}

/// Suffix-substitution heuristics for names absent from the tables.
///
/// Branches on the final letter: hard-vowel stems, soft-vowel stems, `-й`,
/// `-о`, `-ь`, then the consonant default. Single-letter input is returned
/// unchanged since there is no stem to inflect.
pub(crate) fn heuristic_forms(name: &str) -> Vec<String> {
    let mut chars = name.chars();
    let Some(last) = chars.next_back() else {
        return vec![name.to_string()];
    };
    if chars.next_back().is_none() {
        return vec![name.to_string()];
    }
    let stem = trim_last(name);

    let oblique: [String; 4] = match last {
        'а' => [
            format!("{stem}и"),
            format!("{stem}і"),
            format!("{stem}у"),
            format!("{stem}і"),
        ],
        'я' => [
            format!("{stem}і"),
            format!("{stem}і"),
            format!("{stem}ю"),
            format!("{stem}і"),
        ],
        'й' => [
            format!("{stem}я"),
            format!("{stem}ю"),
            format!("{stem}я"),
            format!("{stem}єві"),
        ],
        'о' => [
            format!("{stem}а"),
            format!("{stem}у"),
            format!("{stem}а"),
            format!("{stem}ові"),
        ],
        'ь' => [
            format!("{stem}я"),
            format!("{stem}ю"),
            format!("{stem}я"),
            format!("{stem}еві"),
        ],
        last if last.is_alphabetic() => [
            format!("{name}а"),
            format!("{name}у"),
            format!("{name}а"),
            format!("{name}ові"),
        ],
        // Trailing digits, punctuation and similar noise are not names.
        _ => return vec![name.to_string()],
    };

    let mut forms = vec![name.to_string()];
    forms.extend(oblique);
    forms
}

/// The input without its final character, char-boundary safe.
fn trim_last(name: &str) -> &str {
    match name.char_indices().next_back() {
        Some((idx, _)) => &name[..idx],
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_names_use_curated_forms() {
        let forms = first_name_forms("Іван");
        assert_eq!(forms[0], "Іван");
        assert!(forms.contains(&"Івана".to_string()));
        assert!(forms.contains(&"Іванові".to_string()));
    }

    #[test]
    fn unknown_consonant_final_name_inflects() {
        let forms = first_name_forms("Орест");
        assert!(forms.contains(&"Ореста".to_string()));
        assert!(forms.contains(&"Оресту".to_string()));
        assert!(forms.contains(&"Орестові".to_string()));
    }

    #[test]
    fn unknown_vowel_final_name_inflects() {
        let forms = first_name_forms("Микита");
        assert!(forms.contains(&"Микити".to_string()));
        assert!(forms.contains(&"Микиту".to_string()));
        assert!(forms.contains(&"Микиті".to_string()));
    }

    #[test]
    fn unknown_patronymic_ovych_declines_regularly() {
        let forms = patronymic_forms("Орестович");
        assert_eq!(forms[0], "Орестович");
        assert!(forms.contains(&"Орестовича".to_string()));
        assert!(forms.contains(&"Орестовичу".to_string()));
    }

    #[test]
    fn unknown_patronymic_ivna_declines_regularly() {
        let forms = patronymic_forms("Орестівна");
        assert!(forms.contains(&"Орестівни".to_string()));
        assert!(forms.contains(&"Орестівні".to_string()));
        assert!(forms.contains(&"Орестівну".to_string()));
    }

    #[test]
    fn degenerate_input_returned_unchanged() {
        assert_eq!(heuristic_forms(""), vec![String::new()]);
        assert_eq!(heuristic_forms("Я"), vec!["Я".to_string()]);
        assert_eq!(heuristic_forms("Т-34"), vec!["Т-34".to_string()]);
    }
}
