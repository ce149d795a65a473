use serde::{Deserialize, Serialize};
use std::fmt;

/// The three constitutional categories.
///
/// Declaration order is the fixed fallback precedence used when a tie
/// cannot be broken by answer order: Vata > Pitta > Kapha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

impl Dosha {
    /// All categories in fallback precedence order.
    pub const ALL: [Dosha; 3] = [Dosha::Vata, Dosha::Pitta, Dosha::Kapha];

    /// Position in [`Dosha::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Dosha::Vata => 0,
            Dosha::Pitta => 1,
            Dosha::Kapha => 2,
        }
    }

    /// Category an answer value selects. `4` ("not applicable") selects none.
    pub fn from_answer(value: u8) -> Option<Self> {
        match value {
            1 => Some(Dosha::Vata),
            2 => Some(Dosha::Pitta),
            3 => Some(Dosha::Kapha),
            _ => None,
        }
    }

    /// One-letter code fragment.
    pub fn letter(self) -> char {
        match self {
            Dosha::Vata => 'V',
            Dosha::Pitta => 'P',
            Dosha::Kapha => 'K',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'V' => Some(Dosha::Vata),
            'P' => Some(Dosha::Pitta),
            'K' => Some(Dosha::Kapha),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Dosha::Vata => "Vata",
            Dosha::Pitta => "Pitta",
            Dosha::Kapha => "Kapha",
        }
    }
}

impl fmt::Display for Dosha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
