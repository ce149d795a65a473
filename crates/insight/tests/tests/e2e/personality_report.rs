//! End-to-end personality scoring: codes, catalog matches and names.

use insight_personality::{
    match_personality_type, score_personality, Dimension, DimensionLayout, PersonalityLayout,
    PersonalityScorer, CATALOG, UNKNOWN_PERSONALITY,
};
use insight_tests::{answers_for_code, personality_answers};
use insight_types::Variant;

#[test]
fn every_catalog_code_is_reachable() {
    for entry in CATALOG.iter() {
        let raw = answers_for_code(entry.code)
            .unwrap_or_else(|| panic!("no answers for {}", entry.code));
        let report = score_personality(&raw).unwrap();

        assert_eq!(report.code, entry.code);
        assert_eq!(report.personality_type.map(|t| t.id), Some(entry.id));
        assert_ne!(report.personality_name, UNKNOWN_PERSONALITY);
    }
}

#[test]
fn calm_adaptive_thinker() {
    let raw = answers_for_code("R-C-F-I-A-B").unwrap();
    let report = score_personality(&raw).unwrap();

    let found = report.personality_type.unwrap();
    assert_eq!(found.id, 1);
    assert_eq!(found.name, "Calm Adaptive Thinker");
    assert_eq!(found.family, "Calm Thinkers");
    assert!(report.personality_name.starts_with("Calm Thinkers – Thoughtful"));
}

#[test]
fn unmatched_code_still_gets_a_name() {
    let raw = answers_for_code("E-R-D-C-A-B").unwrap();
    let report = score_personality(&raw).unwrap();

    assert_eq!(report.code, "E-R-D-C-A-B");
    assert!(report.personality_type.is_none());
    assert!(match_personality_type(&report.code).is_none());
    assert_eq!(report.personality_name, "Dynamic Energizers – Expressive Explorer");
}

#[test]
fn neutral_answers_are_fully_balanced() {
    let report = score_personality(&personality_answers([4; 6], [4; 6])).unwrap();

    assert_eq!(report.code, "B-B-B-B-B-B");
    assert!(report
        .dimensions
        .iter()
        .all(|d| d.variant == Variant::B && d.left_score == 16 && d.right_score == 16));
    assert_eq!(report.personality_type.map(|t| t.name), Some("Balanced Harmonizer"));
    assert_eq!(report.score, 57.14);
}

#[test]
fn score_uses_every_answer() {
    let report = score_personality(&personality_answers([7; 6], [7; 6])).unwrap();
    assert_eq!(report.score, 100.0);

    let report = score_personality(&personality_answers([1; 6], [1; 6])).unwrap();
    assert_eq!(report.score, 14.29);
}

#[test]
fn report_json_shape() {
    let raw = answers_for_code("E-R-D-C-A-B").unwrap();
    let report = score_personality(&raw).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["code"], "E-R-D-C-A-B");
    assert!(json["personality_type"].is_null());
    assert_eq!(json["dimensions"].as_array().map(Vec::len), Some(6));
    assert_eq!(json["dimensions"][0]["index"], 1);
    assert_eq!(json["dimensions"][0]["code_letter"], "E");
}

#[test]
fn custom_layout_with_swapped_poles() {
    let mut layout = PersonalityLayout::standard();
    let mind = &mut layout.dimensions[0];
    std::mem::swap(&mut mind.left, &mut mind.right);
    let scorer = PersonalityScorer::new(layout).unwrap();

    let raw = personality_answers([7, 4, 4, 4, 4, 4], [1, 4, 4, 4, 4, 4]);
    let report = scorer.score(&raw).unwrap();
    assert_eq!(report.dimensions[0].variant, Variant::C);
    assert_eq!(report.dimensions[0].code_letter, 'E');
}

#[test]
fn layout_missing_a_dimension_is_rejected() {
    let mut layout = PersonalityLayout::standard();
    layout.dimensions.pop();
    assert!(PersonalityScorer::new(layout).is_err());

    let layout = PersonalityLayout {
        dimensions: Dimension::ALL
            .iter()
            .map(|&dimension| DimensionLayout {
                dimension,
                left: [0, 2, 4, 6],
                right: [1, 3, 5, 7],
            })
            .collect(),
    };
    assert!(PersonalityScorer::new(layout).is_err());
}
