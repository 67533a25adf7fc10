//! Surname declension by suffix pattern.
//!
//! Surnames are too open a class for a lookup table, but Ukrainian surname
//! suffixes inflect predictably. The rules below are an ordered list of
//! (suffix, inflection) pairs evaluated first-match-wins; each rule emits
//! both the masculine and the feminine paradigm for the matched surname,
//! since a roster row does not say which one applies. Surnames matching no
//! rule are left undeclined.

/// Grammatical gender of one emitted paradigm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Masculine,
    Feminine,
}

/// Six case forms of a surname for one gender. Surnames carry an
/// instrumental form on top of the five cases used for first names:
/// order documents routinely say "разом з <прізвищем>".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurnameCaseForms {
    pub gender: Gender,
    pub nominative: String,
    pub genitive: String,
    pub dative: String,
    pub accusative: String,
    pub instrumental: String,
    pub locative: String,
}

impl SurnameCaseForms {
    pub fn forms(&self) -> [&str; 6] {
        [
            &self.nominative,
            &self.genitive,
            &self.dative,
            &self.accusative,
            &self.instrumental,
            &self.locative,
        ]
    }

    fn indeclinable(gender: Gender, surname: &str) -> Self {
        Self {
            gender,
            nominative: surname.to_string(),
            genitive: surname.to_string(),
            dative: surname.to_string(),
            accusative: surname.to_string(),
            instrumental: surname.to_string(),
            locative: surname.to_string(),
        }
    }
}

type InflectFn = fn(&str) -> Vec<SurnameCaseForms>;

/// Ordered suffix rules; longer suffixes listed before their substrings so
/// the first match is the most specific one.
pub static SURNAME_RULES: &[(&str, InflectFn)] = &[
    ("енко", inflect_o_stem),
    ("цький", inflect_adjectival),
    ("ський", inflect_adjectival),
    ("ко", inflect_o_stem),
    ("ич", inflect_soft_consonant),
    ("юк", inflect_hard_consonant),
    ("ук", inflect_hard_consonant),
    ("ак", inflect_hard_consonant),
    ("як", inflect_hard_consonant),
];

/// Every surface form the surname can take: the union of the masculine and
/// feminine paradigms of the first matching rule, or just the literal
/// surname when nothing matches.
pub fn surname_forms(surname: &str) -> Vec<String> {
    let Some(paradigms) = decline_surname(surname) else {
        return vec![surname.to_string()];
    };
    let mut forms = Vec::new();
    for paradigm in &paradigms {
        for form in paradigm.forms() {
            if !forms.iter().any(|existing: &String| existing == form) {
                forms.push(form.to_string());
            }
        }
    }
    forms
}

/// Both gender paradigms of the first matching suffix rule, or `None` for
/// an unmatched surname.
pub fn decline_surname(surname: &str) -> Option<Vec<SurnameCaseForms>> {
    SURNAME_RULES
        .iter()
        .find(|(suffix, _)| surname.ends_with(suffix))
        .map(|(_, inflect)| inflect(surname))
}

/// `-ко` family (Петренко, Сірко): masculine o-stem, feminine indeclinable.
fn inflect_o_stem(surname: &str) -> Vec<SurnameCaseForms> {
    let stem = trim_suffix(surname, "о");
    vec![
        SurnameCaseForms {
            gender: Gender::Masculine,
            nominative: surname.to_string(),
            genitive: format!("{stem}а"),
            dative: format!("{stem}у"),
            accusative: format!("{stem}а"),
            instrumental: format!("{stem}ом"),
            locative: format!("{stem}ові"),
        },
        SurnameCaseForms::indeclinable(Gender::Feminine, surname),
    ]
}

/// `-ський`/`-цький` family (Ковальський): both genders decline
/// adjectivally from the stem without `-ий`.
fn inflect_adjectival(surname: &str) -> Vec<SurnameCaseForms> {
    let stem = trim_suffix(surname, "ий");
    vec![
        SurnameCaseForms {
            gender: Gender::Masculine,
            nominative: surname.to_string(),
            genitive: format!("{stem}ого"),
            dative: format!("{stem}ому"),
            accusative: format!("{stem}ого"),
            instrumental: format!("{stem}им"),
            locative: format!("{stem}ому"),
        },
        SurnameCaseForms {
            gender: Gender::Feminine,
            nominative: format!("{stem}а"),
            genitive: format!("{stem}ої"),
            dative: format!("{stem}ій"),
            accusative: format!("{stem}у"),
            instrumental: format!("{stem}ою"),
            locative: format!("{stem}ій"),
        },
    ]
}

/// `-ич` family (Хомич): masculine soft-stem endings, feminine
/// indeclinable.
fn inflect_soft_consonant(surname: &str) -> Vec<SurnameCaseForms> {
    vec![
        SurnameCaseForms {
            gender: Gender::Masculine,
            nominative: surname.to_string(),
            genitive: format!("{surname}а"),
            dative: format!("{surname}у"),
            accusative: format!("{surname}а"),
            instrumental: format!("{surname}ем"),
            locative: format!("{surname}у"),
        },
        SurnameCaseForms::indeclinable(Gender::Feminine, surname),
    ]
}

/// `-ук`/`-юк`/`-ак`/`-як` family (Ковальчук, Щербак): masculine hard-stem
/// endings, feminine indeclinable.
fn inflect_hard_consonant(surname: &str) -> Vec<SurnameCaseForms> {
    vec![
        SurnameCaseForms {
            gender: Gender::Masculine,
            nominative: surname.to_string(),
            genitive: format!("{surname}а"),
            dative: format!("{surname}у"),
            accusative: format!("{surname}а"),
            instrumental: format!("{surname}ом"),
            locative: format!("{surname}ові"),
        },
        SurnameCaseForms::indeclinable(Gender::Feminine, surname),
    ]
}

fn trim_suffix<'a>(surname: &'a str, suffix: &str) -> &'a str {
    surname.strip_suffix(suffix).unwrap_or(surname)
}
