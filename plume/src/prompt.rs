//! Prompt assembly: one evaluation in, one French instruction string out.
//!
//! Deterministic and pure. The canonical section order is applied here, not
//! at selection time. Sections with a detail are quoted verbatim (trimmed);
//! selected sections without a detail are listed for the model to write
//! freely — callers that validate first never reach that branch.

use crate::evaluation::{Evaluation, Section};

/// Builds the full generation prompt for one evaluation.
///
/// Same input always yields the same string; the generated text on the other
/// side of the API is where the nondeterminism lives.
pub fn build_prompt(eval: &Evaluation) -> String {
    let mut provided: Vec<String> = Vec::new();
    let mut auto: Vec<String> = Vec::new();
    for section in Section::CANONICAL {
        if !eval.has_section(section) {
            continue;
        }
        let detail = eval.detail(section).trim();
        if detail.is_empty() {
            auto.push(format!("- {}", section.label()));
        } else {
            provided.push(format!("- {} : \"{}\"", section.detail_heading(), detail));
        }
    }

    let mut prompt = String::new();
    prompt.push_str(
        "Agis en tant que professeur principal expérimenté et pédagogue. \
         Rédige une appréciation personnalisée, constructive et nuancée pour \
         le bulletin scolaire d'un élève.\n\n",
    );

    prompt.push_str("Informations sur l'élève :\n");
    prompt.push_str(&format!("- Prénom : {}\n", eval.student_name.trim()));
    prompt.push_str(&format!(
        "- Genre : {}. Tu dois impérativement faire les accords en genre \
         (masculin/féminin) nécessaires dans toute l'appréciation.\n",
        eval.gender.prompt_phrase()
    ));
    prompt.push_str(&format!("- Matière : {}\n", eval.subject.trim()));
    prompt.push_str(&format!(
        "- Description du niveau général : \"{}\"\n",
        eval.performance_level.description()
    ));

    if !provided.is_empty() {
        prompt.push_str("\nVoici les détails à intégrer en fonction des volets sélectionnés :\n");
        prompt.push_str(&provided.join("\n"));
        prompt.push('\n');
    }
    if !auto.is_empty() {
        prompt.push_str("\nVolets à rédiger librement (aucun détail fourni) :\n");
        prompt.push_str(&auto.join("\n"));
        prompt.push('\n');
    }

    prompt.push_str("\nConsignes pour la rédaction :\n");
    prompt.push_str(&format!(
        "1. Le ton de l'appréciation doit être impérativement : {}.\n",
        eval.tone.label()
    ));
    prompt.push_str(&format!(
        "2. L'appréciation doit faire environ {} lignes.\n",
        eval.length.line_range()
    ));
    prompt.push_str(
        "3. Structure l'appréciation en abordant les volets demandés dans un \
         ordre logique et fluide. Ne mentionne pas explicitement le nom des \
         volets. L'ensemble doit être un paragraphe unique et cohérent.\n",
    );
    prompt.push_str("4. Commence directement par l'appréciation, sans formule d'introduction.\n");
    prompt.push_str(
        "5. Personnalise le commentaire en utilisant le prénom de l'élève au \
         moins une fois de manière naturelle.\n",
    );
    prompt.push_str(
        "6. Assure-toi que le commentaire est cohérent avec toutes les \
         informations fournies.\n",
    );
    prompt.push_str(
        "7. Transforme les axes d'amélioration en conseils positifs et \
         réalisables plutôt qu'en reproches.\n",
    );
    prompt.push_str("\nNe retourne que le texte de l'appréciation finale.");

    prompt
}
