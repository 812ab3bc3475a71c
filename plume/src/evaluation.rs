//! Evaluation record and the closed enums describing one student appreciation.
//!
//! `Evaluation` mirrors the report form: identity, per-section free-text
//! details, and rendering options (tone, length, selected sections). Enum
//! variants carry their French display labels and the prompt fragments
//! derived from them; CLI tokens parse through `FromStr`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Student gender; drives the grammatical-agreement directive in the prompt
/// and nothing else.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Boy,
    Girl,
}

impl Gender {
    /// Noun phrase inserted into the prompt ("un garçon" / "une fille").
    pub fn prompt_phrase(&self) -> &'static str {
        match self {
            Gender::Boy => "un garçon",
            Gender::Girl => "une fille",
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "garcon" | "garçon" | "boy" => Ok(Self::Boy),
            "fille" | "girl" => Ok(Self::Girl),
            _ => Err(format!("unknown gender: {} (use garcon or fille)", s)),
        }
    }
}

/// Overall performance level; each variant maps to a fixed descriptive
/// sentence quoted in the prompt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceLevel {
    Excellent,
    #[default]
    Good,
    Satisfactory,
    Fragile,
}

impl PerformanceLevel {
    /// Short display label (select option in the original form).
    pub fn label(&self) -> &'static str {
        match self {
            PerformanceLevel::Excellent => "Excellent",
            PerformanceLevel::Good => "Bon",
            PerformanceLevel::Satisfactory => "Satisfaisant",
            PerformanceLevel::Fragile => "Fragile / À améliorer",
        }
    }

    /// Full descriptive sentence quoted in the prompt.
    pub fn description(&self) -> &'static str {
        match self {
            PerformanceLevel::Excellent => {
                "Excellent : Très bons résultats, élève moteur et investi."
            }
            PerformanceLevel::Good => {
                "Bon : Des résultats solides et une participation régulière."
            }
            PerformanceLevel::Satisfactory => {
                "Satisfaisant : Niveau correct, mais peut mieux faire en s'investissant davantage."
            }
            PerformanceLevel::Fragile => {
                "Fragile : Des difficultés persistent, un travail plus régulier est nécessaire."
            }
        }
    }
}

impl FromStr for PerformanceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "excellent" => Ok(Self::Excellent),
            "bon" | "good" => Ok(Self::Good),
            "satisfaisant" | "satisfactory" => Ok(Self::Satisfactory),
            "fragile" => Ok(Self::Fragile),
            _ => Err(format!(
                "unknown performance level: {} (use excellent, bon, satisfaisant, or fragile)",
                s
            )),
        }
    }
}

/// Tone requested for the generated text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Encouraging,
    Formal,
    Direct,
}

impl Tone {
    /// Label inserted verbatim into the writing directives.
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Encouraging => "Encourageant et bienveillant",
            Tone::Formal => "Formel et neutre",
            Tone::Direct => "Direct et factuel",
        }
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "encourageant" | "encouraging" => Ok(Self::Encouraging),
            "formel" | "formal" => Ok(Self::Formal),
            "direct" => Ok(Self::Direct),
            _ => Err(format!(
                "unknown tone: {} (use encourageant, formel, or direct)",
                s
            )),
        }
    }
}

/// Target length, expressed to the model as an approximate line range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl CommentLength {
    /// Approximate line range, e.g. "3-4".
    pub fn line_range(&self) -> &'static str {
        match self {
            CommentLength::Short => "2-3",
            CommentLength::Medium => "3-4",
            CommentLength::Long => "4-5",
        }
    }
}

impl FromStr for CommentLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "court" | "courte" | "short" => Ok(Self::Short),
            "moyen" | "moyenne" | "medium" => Ok(Self::Medium),
            "long" | "longue" | "detaillee" | "détaillée" => Ok(Self::Long),
            _ => Err(format!(
                "unknown length: {} (use court, moyen, or long)",
                s
            )),
        }
    }
}

/// One of the four fixed commentary sections ("volets").
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Comportement,
    Travail,
    Niveau,
    Conseils,
}

impl Section {
    /// Fixed rendering order applied by the prompt builder, regardless of
    /// the order sections were selected in.
    pub const CANONICAL: [Section; 4] = [
        Section::Comportement,
        Section::Travail,
        Section::Niveau,
        Section::Conseils,
    ];

    /// Display label (checkbox label in the original form).
    pub fn label(&self) -> &'static str {
        match self {
            Section::Comportement => "Comportement",
            Section::Travail => "Travail / Investissement",
            Section::Niveau => "Niveau / Compétences",
            Section::Conseils => "Conseils / Progression",
        }
    }

    /// Heading placed before the quoted detail text in the prompt.
    pub fn detail_heading(&self) -> &'static str {
        match self {
            Section::Comportement => "Comportement en classe",
            Section::Travail => "Investissement et méthode de travail",
            Section::Niveau => "Points forts et compétences (Niveau)",
            Section::Conseils => "Axes d'amélioration et conseils",
        }
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "comportement" => Ok(Self::Comportement),
            "travail" => Ok(Self::Travail),
            "niveau" => Ok(Self::Niveau),
            "conseils" => Ok(Self::Conseils),
            _ => Err(format!(
                "unknown section: {} (use comportement, travail, niveau, or conseils)",
                s
            )),
        }
    }
}

/// One student evaluation as filled in by the user.
///
/// Mutable while the form session lasts; validation and prompt assembly
/// never mutate it. `sections` is unordered for selection purposes; the
/// prompt builder applies [`Section::CANONICAL`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Evaluation {
    pub student_name: String,
    pub subject: String,
    pub gender: Gender,
    pub performance_level: PerformanceLevel,
    pub comportement: String,
    pub travail: String,
    pub strengths: String,
    pub areas_for_improvement: String,
    pub tone: Tone,
    pub sections: Vec<Section>,
    pub length: CommentLength,
}

impl Default for Evaluation {
    /// Initial form state: empty texts, boy, good level, encouraging tone,
    /// all four sections selected, medium length.
    fn default() -> Self {
        Self {
            student_name: String::new(),
            subject: String::new(),
            gender: Gender::Boy,
            performance_level: PerformanceLevel::Good,
            comportement: String::new(),
            travail: String::new(),
            strengths: String::new(),
            areas_for_improvement: String::new(),
            tone: Tone::Encouraging,
            sections: Section::CANONICAL.to_vec(),
            length: CommentLength::Medium,
        }
    }
}

impl Evaluation {
    /// True when the section is selected (duplicates in `sections` are harmless).
    pub fn has_section(&self, section: Section) -> bool {
        self.sections.contains(&section)
    }

    /// Free-text detail paired with the given section.
    pub fn detail(&self, section: Section) -> &str {
        match section {
            Section::Comportement => &self.comportement,
            Section::Travail => &self.travail,
            Section::Niveau => &self.strengths,
            Section::Conseils => &self.areas_for_improvement,
        }
    }
}
