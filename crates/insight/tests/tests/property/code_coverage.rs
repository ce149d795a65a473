//! Exhaustive checks: every reachable count triple maps into its section's
//! closed code space.

use insight_constitution::{
    classify_vikriti, generate_report, map_primary_modifier, CategoryCounts, DoshaCode, Section,
};
use insight_tests::{constitution_answers, section_from_counts};
use insight_types::Dosha;
use proptest::prelude::*;
use std::collections::HashSet;

fn triples(total: usize) -> Vec<(usize, usize, usize)> {
    let mut out = Vec::new();
    for v in 0..=total {
        for p in 0..=total - v {
            out.push((v, p, total - v - p));
        }
    }
    out
}

#[test]
fn every_body_triple_maps_to_a_body_code() {
    let allowed: HashSet<DoshaCode> = DoshaCode::catalog(Section::Body).into_iter().collect();
    let mut seen = HashSet::new();

    for (v, p, k) in triples(6) {
        let body = section_from_counts(v, p, k, 6);
        let report = generate_report(&constitution_answers(&body, &[1; 12], &[4; 17])).unwrap();
        assert!(allowed.contains(&report.body.code), "({v},{p},{k})");
        assert_eq!(
            report.body.code,
            map_primary_modifier(report.body.primary, report.body.modifier)
        );
        seen.insert(report.body.code);
    }

    assert_eq!(seen, allowed);
}

#[test]
fn every_prakriti_triple_maps_to_a_prakriti_code() {
    let allowed: HashSet<DoshaCode> = DoshaCode::catalog(Section::Prakriti).into_iter().collect();
    let mut seen = HashSet::new();

    for (v, p, k) in triples(12) {
        let prakriti = section_from_counts(v, p, k, 12);
        let report = generate_report(&constitution_answers(&[1; 6], &prakriti, &[4; 17])).unwrap();
        assert!(allowed.contains(&report.prakriti.code), "({v},{p},{k})");
        let counts = report.prakriti.counts;
        let max = Dosha::ALL.iter().map(|d| counts.get(*d)).max().unwrap();
        assert_eq!(counts.get(report.prakriti.primary), max);
        seen.insert(report.prakriti.code);
    }

    assert_eq!(seen, allowed);
}

#[test]
fn every_vikriti_triple_maps_to_a_vikriti_code() {
    let allowed: HashSet<DoshaCode> = DoshaCode::catalog(Section::Vikriti).into_iter().collect();
    let mut seen = HashSet::new();

    for scored in 0..=17 {
        for (v, p, k) in triples(scored) {
            let counts = CategoryCounts::new(v as u32, p as u32, k as u32);
            let forward: Vec<u8> = section_from_counts(v, p, k, 17)
                .into_iter()
                .map(|a| a as u8)
                .collect();
            let reverse: Vec<u8> = forward.iter().rev().copied().collect();
            for answers in [forward, reverse] {
                let outcome = classify_vikriti(&counts, &answers);
                assert!(allowed.contains(&outcome.code), "({v},{p},{k})");
                seen.insert(outcome.code);
            }
        }
    }

    assert_eq!(seen, allowed);
}

proptest! {
    #[test]
    fn shuffled_sections_stay_in_code_space(body in prop::collection::vec(1i64..=4, 6)) {
        let report = generate_report(&constitution_answers(&body, &[2; 12], &[3; 17])).unwrap();
        let allowed = DoshaCode::catalog(Section::Body);
        prop_assert!(allowed.contains(&report.body.code));
        if let Some(modifier) = report.body.modifier {
            prop_assert_ne!(modifier, report.body.primary);
            prop_assert!(report.body.counts.get(modifier) > 0);
        }
    }
}
