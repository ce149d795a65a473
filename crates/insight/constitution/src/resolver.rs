use insight_types::Dosha;
use serde::{Deserialize, Serialize};

use crate::counter::CategoryCounts;

/// Dominant and secondary category of one section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub primary: Dosha,
    pub modifier: Option<Dosha>,
}

/// Pick the candidate with the highest count.
///
/// Ties go to whichever tied candidate's running count reaches the tied
/// maximum first while scanning `answers` front to back. When the scan cannot
/// separate them (tied at zero, or `counts` not derived from `answers`) the
/// fixed order Vata > Pitta > Kapha applies. Returns `None` only for an empty
/// candidate list.
pub fn earliest_to_reach(
    answers: &[u8],
    counts: &CategoryCounts,
    candidates: &[Dosha],
) -> Option<Dosha> {
    let max = candidates.iter().map(|d| counts.get(*d)).max()?;
    let tied: Vec<Dosha> = candidates
        .iter()
        .copied()
        .filter(|d| counts.get(*d) == max)
        .collect();

    if let [only] = tied.as_slice() {
        return Some(*only);
    }

    if max > 0 {
        let mut running = [0u32; 3];
        for &value in answers {
            let Some(dosha) = Dosha::from_answer(value) else {
                continue;
            };
            running[dosha.index()] += 1;
            if running[dosha.index()] == max && tied.contains(&dosha) {
                return Some(dosha);
            }
        }
    }

    Dosha::ALL.into_iter().find(|d| tied.contains(d))
}

/// Two-stage resolution: primary over all three categories, then modifier
/// over the remaining two. A modifier whose count is zero is absent.
pub fn resolve_primary_modifier(answers: &[u8], counts: &CategoryCounts) -> Resolution {
    let primary = earliest_to_reach(answers, counts, &Dosha::ALL).unwrap_or(Dosha::Vata);

    let remaining: Vec<Dosha> = Dosha::ALL.into_iter().filter(|d| *d != primary).collect();
    let second_max = remaining.iter().map(|d| counts.get(*d)).max().unwrap_or(0);
    let modifier = if second_max == 0 {
        None
    } else {
        earliest_to_reach(answers, counts, &remaining)
    };

    Resolution { primary, modifier }
}
