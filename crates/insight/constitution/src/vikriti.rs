//! Vikriti (current imbalance) classification.
//!
//! Unlike body and prakriti, vikriti works on raw counts through an ordered
//! rule chain. The first rule that produces a code wins; order is part of the
//! contract.

use insight_types::Dosha;
use serde::Serialize;
use tracing::debug;

use crate::codes::DoshaCode;
use crate::counter::CategoryCounts;
use crate::resolver::earliest_to_reach;

/// Count at which a single category is a dominant imbalance.
pub const DOMINANT_THRESHOLD: u32 = 7;
/// Count at which two categories form a paired imbalance.
pub const PAIRED_THRESHOLD: u32 = 6;
/// Every count at or below this is balanced.
pub const BALANCED_CEILING: u32 = 5;

/// One `(predicate, result)` step of the chain.
pub struct VikritiRule {
    pub name: &'static str,
    pub evaluate: fn(&CategoryCounts, &[u8]) -> Option<DoshaCode>,
}

/// Rule chain in evaluation order.
pub static VIKRITI_RULES: &[VikritiRule] = &[
    VikritiRule {
        name: "dominant",
        evaluate: dominant,
    },
    VikritiRule {
        name: "paired",
        evaluate: paired,
    },
    VikritiRule {
        name: "balanced",
        evaluate: balanced,
    },
    VikritiRule {
        name: "highest",
        evaluate: highest,
    },
];

/// Code plus the name of the rule that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct VikritiOutcome {
    pub code: DoshaCode,
    pub rule: &'static str,
}

/// Run the chain. `answers` is the vikriti section, used only for tie-breaks.
pub fn classify_vikriti(counts: &CategoryCounts, answers: &[u8]) -> VikritiOutcome {
    for rule in VIKRITI_RULES {
        if let Some(code) = (rule.evaluate)(counts, answers) {
            debug!(rule = rule.name, code = %code, "vikriti rule matched");
            return VikritiOutcome {
                code,
                rule: rule.name,
            };
        }
    }

    // `highest` always matches; reaching this means the chain was edited.
    VikritiOutcome {
        code: DoshaCode::Balanced,
        rule: "none",
    }
}

/// Exactly one category at or above 7 and strictly above both others.
fn dominant(counts: &CategoryCounts, _answers: &[u8]) -> Option<DoshaCode> {
    Dosha::ALL
        .into_iter()
        .find(|&d| {
            let n = counts.get(d);
            n >= DOMINANT_THRESHOLD
                && Dosha::ALL
                    .into_iter()
                    .filter(|&o| o != d)
                    .all(|o| n > counts.get(o))
        })
        .map(DoshaCode::Single)
}

/// Two categories at or above 6. Higher count leads; equal counts are ordered
/// by the earliest-precedence scan over just those two.
fn paired(counts: &CategoryCounts, answers: &[u8]) -> Option<DoshaCode> {
    let high: Vec<Dosha> = Dosha::ALL
        .into_iter()
        .filter(|&d| counts.get(d) >= PAIRED_THRESHOLD)
        .collect();
    if high.len() < 2 {
        return None;
    }

    let lead = earliest_to_reach(answers, counts, &high)?;
    let rest: Vec<Dosha> = high.into_iter().filter(|&d| d != lead).collect();
    let follow = earliest_to_reach(answers, counts, &rest)?;
    Some(DoshaCode::Dual(lead, follow))
}

fn balanced(counts: &CategoryCounts, _answers: &[u8]) -> Option<DoshaCode> {
    Dosha::ALL
        .into_iter()
        .all(|d| counts.get(d) <= BALANCED_CEILING)
        .then_some(DoshaCode::Balanced)
}

/// Highest count, ties broken by the scan.
fn highest(counts: &CategoryCounts, answers: &[u8]) -> Option<DoshaCode> {
    earliest_to_reach(answers, counts, &Dosha::ALL).map(DoshaCode::Single)
}
