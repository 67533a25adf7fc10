//! Ukrainian personal-name declension and matching.
//!
//! Rosters list people in the nominative case; the documents that mention
//! them do not. This crate expands a roster name into every plausible
//! surface form (lookup tables for common first names and patronymics,
//! suffix rules for surnames, heuristics for everything else) and matches
//! those forms against free text, whole-word or substring, with a
//! paragraph-level classifier on top.

pub mod decline;
pub mod forms;
pub mod matcher;
pub mod paragraphs;
pub mod surname;
pub mod tables;

pub use forms::all_forms;
pub use matcher::{FormDiagnostic, MatchPolicy, debug_match, matches};
pub use paragraphs::{ClassifiedParagraph, InclusionPolicy, ParagraphClassifier};
pub use surname::{Gender, SurnameCaseForms, decline_surname, surname_forms};
pub use tables::{NameDeclension, lookup_first_name, lookup_patronymic};
