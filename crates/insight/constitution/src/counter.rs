use insight_types::Dosha;
use serde::{Deserialize, Serialize};

/// Per-section tally of answers by category.
///
/// `vata + pitta + kapha + unscored` equals the number of answers tallied;
/// `unscored` counts "not applicable" answers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub vata: u32,
    pub pitta: u32,
    pub kapha: u32,
    #[serde(default)]
    pub unscored: u32,
}

impl CategoryCounts {
    pub const fn new(vata: u32, pitta: u32, kapha: u32) -> Self {
        Self {
            vata,
            pitta,
            kapha,
            unscored: 0,
        }
    }

    /// Count a section's answers.
    pub fn tally(answers: &[u8]) -> Self {
        answers.iter().fold(Self::default(), |mut counts, &value| {
            match Dosha::from_answer(value) {
                Some(Dosha::Vata) => counts.vata += 1,
                Some(Dosha::Pitta) => counts.pitta += 1,
                Some(Dosha::Kapha) => counts.kapha += 1,
                None => counts.unscored += 1,
            }
            counts
        })
    }

    pub fn get(&self, dosha: Dosha) -> u32 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    /// Answers that selected one of the three categories.
    pub fn scored(&self) -> u32 {
        self.vata + self.pitta + self.kapha
    }

    pub fn total(&self) -> u32 {
        self.scored() + self.unscored
    }
}
