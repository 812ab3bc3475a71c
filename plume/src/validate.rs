//! Form validation: required fields plus per-section detail checks.
//!
//! Every rule runs on every call (no short-circuit), and results collect
//! into [`ValidationErrors`] keyed by the [`Field`] sum type so callers
//! match exhaustively instead of comparing strings.
//!
//! Policy for a selected section with an empty detail: rejected here (the
//! strict variant). The prompt builder still handles that shape for callers
//! that skip validation; see DESIGN.md.

use std::fmt;

use crate::evaluation::{Evaluation, Section};

/// Identifies one validated form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    StudentName,
    Subject,
    Sections,
    Comportement,
    Travail,
    Strengths,
    AreasForImprovement,
}

impl Field {
    /// Stable identifier used in CLI and JSON output.
    pub fn name(&self) -> &'static str {
        match self {
            Field::StudentName => "student_name",
            Field::Subject => "subject",
            Field::Sections => "sections",
            Field::Comportement => "comportement",
            Field::Travail => "travail",
            Field::Strengths => "strengths",
            Field::AreasForImprovement => "areas_for_improvement",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered field → message mapping; empty means the evaluation is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: Vec<(Field, String)>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates entries in rule-evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.entries.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// Message for the given field, when that rule failed.
    pub fn message(&self, field: Field) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    fn push(&mut self, field: Field, message: &str) {
        self.entries.push((field, message.to_string()));
    }
}

/// Validation field paired with a section's free-text detail.
fn detail_field(section: Section) -> Field {
    match section {
        Section::Comportement => Field::Comportement,
        Section::Travail => Field::Travail,
        Section::Niveau => Field::Strengths,
        Section::Conseils => Field::AreasForImprovement,
    }
}

fn detail_message(section: Section) -> &'static str {
    match section {
        Section::Comportement => "Veuillez décrire le comportement pour ce volet.",
        Section::Travail => "Veuillez décrire l'investissement pour ce volet.",
        Section::Niveau => "Veuillez décrire les points forts pour ce volet.",
        Section::Conseils => "Veuillez décrire les axes d'amélioration pour ce volet.",
    }
}

/// Checks one evaluation. Pure; no side effects; all rules independent.
pub fn validate(eval: &Evaluation) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if eval.student_name.trim().is_empty() {
        errors.push(Field::StudentName, "Le prénom de l'élève est requis.");
    }
    if eval.subject.trim().is_empty() {
        errors.push(Field::Subject, "La matière est requise.");
    }
    if eval.sections.is_empty() {
        errors.push(Field::Sections, "Veuillez sélectionner au moins un volet.");
    }
    for section in Section::CANONICAL {
        if eval.has_section(section) && eval.detail(section).trim().is_empty() {
            errors.push(detail_field(section), detail_message(section));
        }
    }

    errors
}
