use super::*;
use crate::types::CharacterEdit;

#[test]
fn gate_never_fires_on_short_forms() {
    assert!(!should_reject_on_length("", ""));
    assert!(!should_reject_on_length("ABC", ""));
    assert!(!should_reject_on_length("", "ABC"));
}

#[test]
fn gate_fires_on_large_gap() {
    // 0 vs 25 chars: abs gap 25 > 5, rel gap 1.0 > 0.5.
    assert!(should_reject_on_length("", "COMPANIA INDUSTRIAL BAJIO"));
    // 8 vs 0: lmax below 10 uses the 0.40 relative threshold.
    assert!(should_reject_on_length("ANYTHING", ""));
}

#[test]
fn gate_requires_both_thresholds() {
    // 14 vs 20: abs gap 6 > max(5, 4) but rel gap 0.3 <= 0.5.
    assert!(!should_reject_on_length(
        "GRUPO AGRICOLA",
        "GRUPO AGRICOLA NORTE"
    ));
    // 20 vs 25: abs gap 5 is not above the absolute threshold.
    assert!(!should_reject_on_length(
        "GRUPO AGRICOLA NORTE",
        "COMPANIA AGRICOLA NORTES"
    ));
}

#[test]
fn classify_same_rules() {
    assert_eq!(classify(93.0, 93.0, 0.0, 0.0), MatchVerdict::Same);
    assert_eq!(classify(0.0, 95.0, 92.0, 0.0), MatchVerdict::Same);
    assert_eq!(classify(90.0, 0.0, 0.0, 75.0), MatchVerdict::Same);
}

#[test]
fn classify_different_requires_both_low() {
    assert_eq!(classify(84.9, 84.9, 100.0, 100.0), MatchVerdict::Different);
    assert_eq!(classify(85.0, 84.9, 0.0, 0.0), MatchVerdict::Indeterminate);
    assert_eq!(classify(84.9, 85.0, 0.0, 0.0), MatchVerdict::Indeterminate);
}

#[test]
fn classify_boundary_is_indeterminate() {
    // Just under every Same rule, above the Different rule.
    assert_eq!(classify(92.9, 92.9, 91.9, 74.9), MatchVerdict::Indeterminate);
}

#[test]
fn same_titular_with_boilerplate() {
    let result = compare(
        Some("GRUPO AGRICOLA DEL NORTE SA DE CV"),
        Some("GRUPO AGRICOLA NORTE"),
        &MatchConfig::default(),
    )
    .expect("valid config");

    assert_eq!(result.verdict, MatchVerdict::Same);
    assert!(result.score > 80.0);
    assert!(!result.conflicts.is_empty());
    // The removed boilerplate surfaces as deletions only.
    assert!(result
        .conflicts
        .iter()
        .all(|e| matches!(e, CharacterEdit::Delete { .. })));
}

#[test]
fn different_titulars() {
    let result = compare(
        Some("JUAN PEREZ"),
        Some("MARIA LOPEZ"),
        &MatchConfig::default(),
    )
    .expect("valid config");

    assert_eq!(result.verdict, MatchVerdict::Different);
    assert!(result.conflicts.is_empty());
}

#[test]
fn gate_short_circuits_compare() {
    let result = compare(
        Some("X"),
        Some("COMPAÑIA INDUSTRIAL DEL BAJIO SOCIEDAD ANONIMA"),
        &MatchConfig::default(),
    )
    .expect("valid config");

    assert_eq!(result.score, 0.0);
    assert_eq!(result.verdict, MatchVerdict::Different);
    assert!(result.conflicts.is_empty());
}

#[test]
fn absent_input_is_not_an_error() {
    let result = compare(None, Some("ANYTHING"), &MatchConfig::default()).expect("valid config");
    assert_eq!(result.verdict, MatchVerdict::Different);
    assert!(result.conflicts.is_empty());

    let result = compare(None, None, &MatchConfig::default()).expect("valid config");
    assert!((0.0..=100.0).contains(&result.score));
}

#[test]
fn identical_pair_has_no_conflicts() {
    let result = compare(
        Some("GRUPO AGRICOLA NORTE"),
        Some("GRUPO AGRICOLA NORTE"),
        &MatchConfig::default(),
    )
    .expect("valid config");

    assert_eq!(result.verdict, MatchVerdict::Same);
    assert!(result.conflicts.is_empty());
    assert!(result.score > 99.9);
}

#[test]
fn invalid_qgram_len_rejected_before_work() {
    let cfg = MatchConfig {
        qgram_len: 0,
        ..MatchConfig::default()
    };
    let err = compare(Some("A"), Some("B"), &cfg).expect_err("config should be rejected");
    assert!(matches!(err, MatchError::InvalidConfig(_)));
}

#[test]
fn score_is_bounded_for_arbitrary_pairs() {
    let pairs = [
        (Some("GRUPO AGRICOLA DEL NORTE SA DE CV"), Some("GRUPO AGRICOLA NORTE")),
        (Some("JUAN PEREZ"), Some("MARIA LOPEZ")),
        (Some(""), Some("")),
        (None, Some("ANYTHING")),
        (Some("ÑÉÑÉ S.A. DE C.V."), Some("NENE")),
    ];
    for (a, b) in pairs {
        let result = compare(a, b, &MatchConfig::default()).expect("valid config");
        assert!(
            (0.0..=100.0).contains(&result.score),
            "score {} out of range for {a:?}/{b:?}",
            result.score
        );
        // Conflicts only accompany a Same verdict.
        if result.verdict != MatchVerdict::Same {
            assert!(result.conflicts.is_empty());
        }
    }
}

#[test]
fn compare_pairs_preserves_order() {
    let pairs = vec![
        (
            Some("GRUPO AGRICOLA DEL NORTE SA DE CV".to_string()),
            Some("GRUPO AGRICOLA NORTE".to_string()),
        ),
        (Some("JUAN PEREZ".to_string()), Some("MARIA LOPEZ".to_string())),
        (None, Some("ANYTHING".to_string())),
    ];
    let results = compare_pairs(&pairs, &MatchConfig::default()).expect("valid config");
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].verdict, MatchVerdict::Same);
    assert_eq!(results[1].verdict, MatchVerdict::Different);
    assert_eq!(results[2].verdict, MatchVerdict::Different);

    for (i, (a, b)) in pairs.iter().enumerate() {
        let single = compare(a.as_deref(), b.as_deref(), &MatchConfig::default())
            .expect("valid config");
        assert_eq!(results[i], single);
    }
}

#[test]
fn compare_pairs_rejects_invalid_config_up_front() {
    let cfg = MatchConfig {
        qgram_len: 0,
        ..MatchConfig::default()
    };
    assert!(compare_pairs(&[], &cfg).is_err());
}
