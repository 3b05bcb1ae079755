use super::common::*;
use crate::workflows::candidates::domain::{CandidateStatus, EvaluationRequest, JobRole, RawField};
use crate::workflows::candidates::evaluation::EvaluationConfig;
use crate::workflows::candidates::ValidationError;

#[test]
fn average_is_the_plain_mean_of_both_scores() {
    let engine = engine();
    for (technical, communication) in [(0, 0), (100, 0), (91, 78), (55, 56), (-10, 3)] {
        let candidate = engine
            .evaluate(&request(
                "Mean Check",
                JobRole::QaAnalyst,
                technical,
                communication,
                1,
            ))
            .expect("valid form");
        assert_eq!(
            candidate.average_score(),
            (technical + communication) as f64 / 2.0
        );
    }
}

#[test]
fn classification_follows_the_boundary_table() {
    let engine = engine();
    let cases = [
        (85.0, 2, CandidateStatus::Hired),
        (85.0, 1, CandidateStatus::Shortlisted),
        (70.0, 0, CandidateStatus::Shortlisted),
        (69.9, 0, CandidateStatus::Rejected),
        (55.0, 6, CandidateStatus::OnHold),
        (55.0, 5, CandidateStatus::Rejected),
        (50.0, 6, CandidateStatus::OnHold),
        (49.5, 30, CandidateStatus::Rejected),
        (100.0, 40, CandidateStatus::Hired),
    ];

    for (average, experience, expected) in cases {
        assert_eq!(
            engine.classify(average, experience),
            expected,
            "average {average} with {experience} years"
        );
    }
}

#[test]
fn evaluate_derives_status_from_scores() {
    let engine = engine();

    let hired = engine
        .evaluate(&request("Ada Lovelace", JobRole::SoftwareEngineer, 90, 80, 2))
        .expect("valid form");
    assert_eq!(hired.average_score(), 85.0);
    assert_eq!(hired.status(), CandidateStatus::Hired);

    let junior = engine
        .evaluate(&request("Alan Turing", JobRole::SoftwareEngineer, 90, 80, 1))
        .expect("valid form");
    assert_eq!(junior.status(), CandidateStatus::Shortlisted);

    let veteran = engine
        .evaluate(&request("Grace Hopper", JobRole::SystemAdmin, 60, 50, 6))
        .expect("valid form");
    assert_eq!(veteran.status(), CandidateStatus::OnHold);
}

#[test]
fn bare_handles_receive_the_configured_domain() {
    let engine = engine();
    let mut form = request("Ada Lovelace", JobRole::ProductManager, 70, 70, 0);
    form.email = " ada ".to_string();
    let candidate = engine.evaluate(&form).expect("valid form");
    assert_eq!(candidate.email(), "ada@gmail.com");

    form.email = "ada@analytical.engine".to_string();
    let candidate = engine.evaluate(&form).expect("valid form");
    assert_eq!(candidate.email(), "ada@analytical.engine");

    let custom = crate::workflows::candidates::EvaluationEngine::new(EvaluationConfig {
        email_domain: "hiring.example".to_string(),
        ..EvaluationConfig::standard()
    });
    form.email = "ada".to_string();
    assert_eq!(
        custom.evaluate(&form).expect("valid form").email(),
        "ada@hiring.example"
    );
}

#[test]
fn missing_required_fields_are_rejected() {
    let engine = engine();

    let mut form = request("Ada", JobRole::QaAnalyst, 80, 80, 3);
    form.name = "   ".to_string();
    assert_eq!(
        engine.evaluate(&form),
        Err(ValidationError::MissingField { field: "name" })
    );

    let mut form = request("Ada", JobRole::QaAnalyst, 80, 80, 3);
    form.email = String::new();
    assert_eq!(
        engine.evaluate(&form),
        Err(ValidationError::MissingField { field: "email" })
    );

    let mut form = request("Ada", JobRole::QaAnalyst, 80, 80, 3);
    form.role = None;
    assert_eq!(
        engine.evaluate(&form),
        Err(ValidationError::MissingField { field: "role" })
    );

    let mut form = request("Ada", JobRole::QaAnalyst, 80, 80, 3);
    form.role = Some("Astronaut".to_string());
    assert_eq!(
        engine.evaluate(&form),
        Err(ValidationError::UnknownRole("Astronaut".to_string()))
    );
}

#[test]
fn non_integer_scores_are_rejected() {
    let engine = engine();
    let form = EvaluationRequest {
        technical_score: RawField::from("eighty"),
        ..request("Ada", JobRole::QaAnalyst, 80, 80, 3)
    };

    match engine.evaluate(&form) {
        Err(ValidationError::NotAnInteger { field, value }) => {
            assert_eq!(field, "technical score");
            assert_eq!(value, "eighty");
        }
        other => panic!("expected integer validation error, got {other:?}"),
    }

    let form = EvaluationRequest {
        experience_years: RawField::Decimal(2.5),
        ..request("Ada", JobRole::QaAnalyst, 80, 80, 3)
    };
    assert!(matches!(
        engine.evaluate(&form),
        Err(ValidationError::NotAnInteger {
            field: "experience years",
            ..
        })
    ));
}

#[test]
fn blank_photo_paths_mean_no_photo() {
    let engine = engine();
    let mut form = request("Ada", JobRole::UiUxDesigner, 80, 80, 3);
    form.photo = Some("  ".to_string());
    assert_eq!(engine.evaluate(&form).expect("valid").photo(), None);

    form.photo = Some("file:///photos/ada.png".to_string());
    assert_eq!(
        engine.evaluate(&form).expect("valid").photo(),
        Some("file:///photos/ada.png")
    );
}

#[test]
fn drift_reports_verdicts_that_no_longer_match_the_rule() {
    let stored = candidate("Ada", JobRole::QaAnalyst, 86, 84, 2);
    assert!(!engine().drift(&stored).has_drifted());

    let stricter = crate::workflows::candidates::EvaluationEngine::new(EvaluationConfig {
        hire_average: 90.0,
        ..EvaluationConfig::standard()
    });
    let drift = stricter.drift(&stored);
    assert!(drift.has_drifted());
    assert_eq!(drift.stored, CandidateStatus::Hired);
    assert_eq!(drift.current, CandidateStatus::Shortlisted);
    assert_eq!(stored.status(), CandidateStatus::Hired);
}
