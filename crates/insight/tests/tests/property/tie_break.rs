//! Tie-break properties: equal counts resolve by which category reaches the
//! tied maximum first in answer order.

use insight_constitution::{
    classify_vikriti, earliest_to_reach, generate_report, CategoryCounts, DoshaCode,
};
use insight_tests::constitution_answers;
use insight_types::Dosha;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Oracle
// ---------------------------------------------------------------------------

/// Position of the `n`th occurrence of `dosha` in `answers`.
fn nth_position(answers: &[u8], dosha: Dosha, n: usize) -> Option<usize> {
    answers
        .iter()
        .enumerate()
        .filter(|&(_, &a)| Dosha::from_answer(a) == Some(dosha))
        .nth(n.checked_sub(1)?)
        .map(|(i, _)| i)
}

fn oracle(answers: &[u8], candidates: &[Dosha]) -> Option<Dosha> {
    let count = |d: Dosha| {
        answers
            .iter()
            .filter(|&&a| Dosha::from_answer(a) == Some(d))
            .count()
    };
    let max = candidates.iter().map(|&d| count(d)).max()?;
    let tied: Vec<Dosha> = candidates
        .iter()
        .copied()
        .filter(|&d| count(d) == max)
        .collect();
    if max == 0 {
        return Dosha::ALL.into_iter().find(|d| tied.contains(d));
    }
    tied.into_iter()
        .min_by_key(|&d| nth_position(answers, d, max).unwrap_or(usize::MAX))
}

fn to_u8(raw: &[i64]) -> Vec<u8> {
    raw.iter().map(|&a| a as u8).collect()
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn earliest_to_reach_matches_oracle(raw in prop::collection::vec(1i64..=4, 1..30)) {
        let answers = to_u8(&raw);
        let counts = CategoryCounts::tally(&answers);
        prop_assert_eq!(
            earliest_to_reach(&answers, &counts, &Dosha::ALL),
            oracle(&answers, &Dosha::ALL)
        );
        let pair = [Dosha::Pitta, Dosha::Kapha];
        prop_assert_eq!(
            earliest_to_reach(&answers, &counts, &pair),
            oracle(&answers, &pair)
        );
    }

    #[test]
    fn prakriti_resolution_matches_oracle(prakriti in prop::collection::vec(1i64..=4, 12)) {
        let report = generate_report(&constitution_answers(&[1; 6], &prakriti, &[4; 17])).unwrap();
        let answers = to_u8(&prakriti);
        let primary = oracle(&answers, &Dosha::ALL).unwrap();
        prop_assert_eq!(report.prakriti.primary, primary);

        let remaining: Vec<Dosha> = Dosha::ALL.into_iter().filter(|&d| d != primary).collect();
        let counts = report.prakriti.counts;
        let expected_modifier = if remaining.iter().all(|&d| counts.get(d) == 0) {
            None
        } else {
            oracle(&answers, &remaining)
        };
        prop_assert_eq!(report.prakriti.modifier, expected_modifier);
    }
}

// ---------------------------------------------------------------------------
// Reordering
// ---------------------------------------------------------------------------

fn body_code(body: [i64; 6]) -> String {
    generate_report(&constitution_answers(&body, &[1; 12], &[4; 17]))
        .unwrap()
        .body
        .code
        .as_code()
}

#[test]
fn same_counts_different_order_change_the_code() {
    assert_eq!(body_code([1, 2, 1, 2, 3, 3]), "VP");
    assert_eq!(body_code([2, 1, 2, 1, 3, 3]), "PV");
    assert_eq!(body_code([3, 3, 1, 2, 1, 2]), "KV");
    assert_eq!(body_code([3, 2, 3, 2, 1, 1]), "KP");
}

#[test]
fn vikriti_pair_order_follows_the_scan() {
    let counts = CategoryCounts::new(6, 6, 0);
    let pitta_first: Vec<u8> = [2u8; 6].into_iter().chain([1u8; 6]).collect();
    let vata_first: Vec<u8> = [1u8; 6].into_iter().chain([2u8; 6]).collect();

    assert_eq!(
        classify_vikriti(&counts, &pitta_first).code,
        DoshaCode::Dual(Dosha::Pitta, Dosha::Vata)
    );
    assert_eq!(
        classify_vikriti(&counts, &vata_first).code,
        DoshaCode::Dual(Dosha::Vata, Dosha::Pitta)
    );
}

#[test]
fn all_unscored_falls_back_to_fixed_order() {
    let report = generate_report(&constitution_answers(&[4; 6], &[1; 12], &[4; 17])).unwrap();
    assert_eq!(report.body.primary, Dosha::Vata);
    assert_eq!(report.body.modifier, None);
    assert_eq!(report.body.code.as_code(), "V");
}
