use insight_types::Dosha;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::layout::Section;

/// Symbolic dosha profile code.
///
/// Body and prakriti use the nine `Single`/`Dual` codes. Vikriti uses those
/// plus `Balanced` (rendered `VPK`), ten in total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum DoshaCode {
    Single(Dosha),
    Dual(Dosha, Dosha),
    Balanced,
}

/// Primary (row) × modifier (column) lookup, both indexed in
/// [`Dosha::ALL`] order. The diagonal is the "no modifier" code.
pub const CODE_TABLE: [[DoshaCode; 3]; 3] = {
    use Dosha::{Kapha as K, Pitta as P, Vata as V};
    use DoshaCode::{Dual, Single};
    [
        [Single(V), Dual(V, P), Dual(V, K)],
        [Dual(P, V), Single(P), Dual(P, K)],
        [Dual(K, V), Dual(K, P), Single(K)],
    ]
};

/// Body / prakriti code for a resolved section. A missing modifier selects
/// the same cell as `modifier == primary`.
pub fn map_primary_modifier(primary: Dosha, modifier: Option<Dosha>) -> DoshaCode {
    let column = modifier.unwrap_or(primary);
    CODE_TABLE[primary.index()][column.index()]
}

impl DoshaCode {
    pub fn as_code(&self) -> String {
        match self {
            DoshaCode::Single(d) => d.letter().to_string(),
            DoshaCode::Dual(a, b) => [a.letter(), b.letter()].iter().collect(),
            DoshaCode::Balanced => "VPK".to_string(),
        }
    }

    /// Human-facing label for this code within a section.
    pub fn label(&self, section: Section) -> String {
        let doshas = match self {
            DoshaCode::Single(d) => d.name().to_string(),
            DoshaCode::Dual(a, b) => format!("{}-{}", a.name(), b.name()),
            DoshaCode::Balanced => return "Balanced doshas".to_string(),
        };
        match section {
            Section::Body => format!("{doshas} body type"),
            Section::Prakriti => format!("{doshas} prakriti"),
            Section::Vikriti => format!("{doshas} imbalance"),
        }
    }

    /// Every code a section can emit.
    pub fn catalog(section: Section) -> Vec<DoshaCode> {
        let mut codes: Vec<DoshaCode> = CODE_TABLE.iter().flatten().copied().collect();
        if section == Section::Vikriti {
            codes.push(DoshaCode::Balanced);
        }
        codes
    }
}

impl fmt::Display for DoshaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_code())
    }
}

impl From<DoshaCode> for String {
    fn from(code: DoshaCode) -> Self {
        code.as_code()
    }
}

impl FromStr for DoshaCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        if normalized == "VPK" {
            return Ok(DoshaCode::Balanced);
        }
        let letters: Vec<Option<Dosha>> = normalized.chars().map(Dosha::from_letter).collect();
        match letters.as_slice() {
            [Some(a)] => Ok(DoshaCode::Single(*a)),
            [Some(a), Some(b)] if a != b => Ok(DoshaCode::Dual(*a, *b)),
            _ => Err(format!("unknown dosha code: {s}")),
        }
    }
}

impl TryFrom<String> for DoshaCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
