//! Full-name surface form generation.
//!
//! Rosters carry names in nominative "Прізвище Ім'я По батькові" order;
//! order documents reference the same people in oblique cases and sometimes
//! with the given name first. `all_forms` expands one roster entry into
//! every surface form worth matching: the cross product of per-component
//! declensions, with and without the patronymic, in both orderings.

use std::collections::BTreeSet;

use crate::decline::{first_name_forms, patronymic_forms};
use crate::surname::surname_forms;

/// All grammatically plausible surface forms of a full name.
///
/// Input with fewer than two whitespace-separated tokens is returned as the
/// only form, undeclined. With two tokens the input is read as
/// (surname, first name); with three or more, the first three tokens are
/// (surname, first name, patronymic) and the rest are ignored (rank
/// abbreviations and call signs sometimes trail the name in rosters).
/// The unmodified input is always part of the result.
pub fn all_forms(full_name: &str) -> BTreeSet<String> {
    let mut forms = BTreeSet::new();
    forms.insert(full_name.to_string());

    let tokens: Vec<&str> = full_name.split_whitespace().collect();
    if tokens.len() < 2 {
        return forms;
    }

    let surnames = surname_forms(tokens[0]);
    let first_names = first_name_forms(tokens[1]);
    let patronymics = tokens.get(2).map(|token| patronymic_forms(token));

    for surname in &surnames {
        for first_name in &first_names {
            // The pair without patronymic is emitted even when a patronymic
            // exists, so partial references still match.
            forms.insert(format!("{surname} {first_name}"));
            forms.insert(format!("{first_name} {surname}"));
            if let Some(patronymics) = &patronymics {
                for patronymic in patronymics {
                    forms.insert(format!("{surname} {first_name} {patronymic}"));
                    forms.insert(format!("{first_name} {patronymic} {surname}"));
                }
            }
        }
    }
    forms
}
