//! End-to-end constitutional scoring from raw answers to report JSON.

use insight_constitution::{
    generate_report, ConstitutionLayout, ConstitutionScorer, DoshaCode, LayoutError, Section,
};
use insight_tests::{constitution_answers, section_from_counts};
use insight_types::Dosha;

fn sample() -> Vec<i64> {
    let body = [1, 1, 2, 1, 3, 2];
    let prakriti = [3, 3, 3, 3, 3, 1, 1, 1, 2, 2, 2, 3];
    let vikriti: Vec<i64> = [2i64; 6]
        .into_iter()
        .chain([1; 6])
        .chain([3; 2])
        .chain([4; 3])
        .collect();
    constitution_answers(&body, &prakriti, &vikriti)
}

#[test]
fn full_report_for_a_mixed_vector() {
    let report = generate_report(&sample()).unwrap();

    assert_eq!(report.body.code.as_code(), "VP");
    assert_eq!(report.body.label, "Vata-Pitta body type");
    assert_eq!(report.body.primary, Dosha::Vata);
    assert_eq!(report.body.modifier, Some(Dosha::Pitta));

    assert_eq!(report.prakriti.code.as_code(), "KV");
    assert_eq!(report.prakriti.label, "Kapha-Vata prakriti");

    assert_eq!(report.vikriti.code, DoshaCode::Dual(Dosha::Pitta, Dosha::Vata));
    assert_eq!(report.vikriti.label, "Pitta-Vata imbalance");
    assert_eq!(report.vikriti.rule, "paired");
    assert_eq!(report.vikriti.counts.unscored, 3);
}

#[test]
fn balanced_vikriti_report() {
    let vikriti = section_from_counts(5, 5, 5, 17);
    let raw = constitution_answers(&[2; 6], &[1; 12], &vikriti);
    let report = generate_report(&raw).unwrap();

    assert_eq!(report.body.code.as_code(), "P");
    assert_eq!(report.prakriti.code.as_code(), "V");
    assert_eq!(report.vikriti.code, DoshaCode::Balanced);
    assert_eq!(report.vikriti.code.as_code(), "VPK");
    assert_eq!(report.vikriti.label, "Balanced doshas");
    assert_eq!(report.vikriti.rule, "balanced");
}

#[test]
fn report_json_shape() {
    let report = generate_report(&sample()).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["body"]["code"], "VP");
    assert_eq!(json["prakriti"]["code"], "KV");
    assert_eq!(json["vikriti"]["code"], "PV");
    assert_eq!(json["vikriti"]["rule"], "paired");
    assert_eq!(json["vikriti"]["counts"]["vata"], 6);
    assert!(json["vikriti"].get("primary").is_none());

    let back: insight_constitution::ConstitutionReport = serde_json::from_value(json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn custom_layout_moves_the_sections() {
    let layout = ConstitutionLayout {
        vikriti: 0..17,
        body: 17..23,
        prakriti: 23..35,
    };
    let scorer = ConstitutionScorer::new(layout).unwrap();

    let mut raw = vec![3i64; 17];
    raw.extend([1; 6]);
    raw.extend([2; 12]);
    let report = scorer.generate_report(&raw).unwrap();

    assert_eq!(report.vikriti.code, DoshaCode::Single(Dosha::Kapha));
    assert_eq!(report.body.code.as_code(), "V");
    assert_eq!(report.prakriti.code.as_code(), "P");
}

#[test]
fn overlapping_layout_is_rejected() {
    let layout = ConstitutionLayout {
        body: 0..6,
        prakriti: 5..17,
        vikriti: 18..35,
    };
    assert_eq!(
        ConstitutionScorer::new(layout).unwrap_err(),
        LayoutError::Overlap {
            first: Section::Body,
            second: Section::Prakriti,
        }
    );
}
