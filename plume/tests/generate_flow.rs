//! End-to-end pipeline over the mock client: validate → build prompt →
//! generate → append to the session log → project to CSV.

use plume::{
    build_prompt, validate, CommentLength, Evaluation, Gender, GenerationClient, MockGeneration,
    PerformanceLevel, Section, SessionLog, SessionRecord, Tone,
};

fn lea() -> Evaluation {
    Evaluation {
        student_name: "Léa".into(),
        subject: "Mathématiques".into(),
        gender: Gender::Girl,
        performance_level: PerformanceLevel::Good,
        comportement: "attentive".into(),
        tone: Tone::Formal,
        sections: vec![Section::Comportement],
        length: CommentLength::Medium,
        ..Evaluation::default()
    }
}

/// **Scenario**: a valid evaluation flows through the whole pipeline and
/// lands in the session log; a second generation appends in call order.
#[tokio::test]
async fn valid_evaluation_generates_and_logs() {
    let client = MockGeneration::with_reply("Léa a fourni un excellent travail ce trimestre.");
    let mut log = SessionLog::new();

    for (name, subject) in [("Léa", "Mathématiques"), ("Hugo", "Histoire")] {
        let eval = Evaluation {
            student_name: name.into(),
            subject: subject.into(),
            ..lea()
        };
        let errors = validate(&eval);
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);

        let prompt = build_prompt(&eval);
        assert!(prompt.contains(name));

        let text = client.generate(&prompt).await.expect("generate");
        log.append(SessionRecord::new(
            eval.student_name.clone(),
            eval.subject.clone(),
            text,
        ));
    }

    assert_eq!(log.len(), 2);
    assert_eq!(client.calls(), 2);
    assert_eq!(log.records()[0].student_name, "Léa");
    assert_eq!(log.records()[1].student_name, "Hugo");

    let csv = log.to_csv();
    assert!(csv.starts_with('\u{FEFF}'));
    assert_eq!(csv.lines().count(), 3);
}

/// **Scenario**: an invalid evaluation is stopped by the validator before
/// any generation call is made.
#[tokio::test]
async fn invalid_evaluation_never_reaches_the_client() {
    let client = MockGeneration::with_reply("ne doit pas être appelé");
    let mut log = SessionLog::new();

    let mut eval = lea();
    eval.student_name = String::new();

    let errors = validate(&eval);
    assert!(!errors.is_empty());
    // Submission is blocked; the client and the log stay untouched.
    assert_eq!(client.calls(), 0);
    assert!(log.is_empty());

    // After the user fixes the field, resubmission succeeds.
    eval.student_name = "Léa".into();
    assert!(validate(&eval).is_empty());
    let text = client.generate(&build_prompt(&eval)).await.expect("generate");
    log.append(SessionRecord::new(eval.student_name, eval.subject, text));
    assert_eq!(log.len(), 1);
}

/// **Scenario**: a failed generation leaves the session log unchanged, and
/// the user can resubmit the same evaluation.
#[tokio::test]
async fn failed_generation_leaves_log_unchanged() {
    let failing = MockGeneration::with_transient_failure();
    let ok = MockGeneration::with_reply("Très bon trimestre pour Léa.");
    let mut log = SessionLog::new();

    let eval = lea();
    let prompt = build_prompt(&eval);

    let err = failing.generate(&prompt).await.unwrap_err();
    assert!(!err.is_credential());
    assert!(log.is_empty());

    // Resubmission with a working client succeeds and appends exactly once.
    let text = ok.generate(&prompt).await.expect("generate");
    log.append(SessionRecord::new(eval.student_name, eval.subject, text));
    assert_eq!(log.len(), 1);
    assert_eq!(log.records()[0].text, "Très bon trimestre pour Léa.");
}

/// **Scenario**: a credential failure is distinguishable so the caller can
/// prompt for a new API key; prior log entries remain intact.
#[tokio::test]
async fn credential_failure_keeps_prior_records() {
    let ok = MockGeneration::with_reply("Bon trimestre.");
    let failing = MockGeneration::with_credential_failure();
    let mut log = SessionLog::new();

    let eval = lea();
    let prompt = build_prompt(&eval);
    let text = ok.generate(&prompt).await.expect("generate");
    log.append(SessionRecord::new("Léa", "Mathématiques", text));

    let err = failing.generate(&prompt).await.unwrap_err();
    assert!(err.is_credential());
    assert_eq!(log.len(), 1, "prior records must survive a credential failure");
}
