use serde::Serialize;

use crate::scorer::DimensionResult;

/// A named personality type. Read-only reference data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PersonalityType {
    pub id: u32,
    pub family: &'static str,
    pub name: &'static str,
    pub descriptor: &'static str,
    pub code: &'static str,
}

const fn entry(
    id: u32,
    family: &'static str,
    name: &'static str,
    descriptor: &'static str,
    code: &'static str,
) -> PersonalityType {
    PersonalityType {
        id,
        family,
        name,
        descriptor,
        code,
    }
}

const CALM: &str = "Calm Thinkers";
const DYNAMIC: &str = "Dynamic Energizers";
const ADAPTIVE: &str = "Adaptive Navigators";

/// The 18 named types. Codes not listed here have no named type.
pub static CATALOG: [PersonalityType; 18] = [
    entry(1, CALM, "Calm Adaptive Thinker", "Composed and inward-looking, flexible in how work gets done.", "R-C-F-I-A-B"),
    entry(2, CALM, "Quiet Strategist", "Plans several moves ahead and prefers proven routines.", "R-C-F-I-M-R"),
    entry(3, CALM, "Steady Analyst", "Weighs evidence carefully and keeps an even pace.", "R-C-B-I-M-B"),
    entry(4, CALM, "Grounded Mentor", "Patient and structured, happiest guiding a team.", "R-C-F-C-M-B"),
    entry(5, CALM, "Reflective Guardian", "Protects standards and keeps commitments on schedule.", "R-C-B-B-M-R"),
    entry(6, CALM, "Serene Observer", "Notices what others miss and rarely rushes to act.", "B-C-F-I-B-B"),
    entry(7, DYNAMIC, "Bold Catalyst", "Sparks change quickly and pulls people along.", "E-R-D-C-A-N"),
    entry(8, DYNAMIC, "Spirited Connector", "Builds momentum through people and new experiences.", "E-R-D-C-B-N"),
    entry(9, DYNAMIC, "Restless Pioneer", "Chases the next frontier, often alone.", "E-R-D-I-A-N"),
    entry(10, DYNAMIC, "Vibrant Motivator", "Energizes groups and adapts plans on the fly.", "E-B-D-C-A-B"),
    entry(11, DYNAMIC, "Fearless Trailblazer", "Acts first, adjusts later, rarely waits for consensus.", "E-R-D-B-A-B"),
    entry(12, DYNAMIC, "Passionate Driver", "Intense and disciplined, pushes routines to their limit.", "B-R-D-C-M-R"),
    entry(13, ADAPTIVE, "Balanced Harmonizer", "Even across every dimension, comfortable in most settings.", "B-B-B-B-B-B"),
    entry(14, ADAPTIVE, "Flexible Mediator", "Finds common ground and keeps groups moving together.", "B-B-F-C-B-B"),
    entry(15, ADAPTIVE, "Versatile Problem Solver", "Switches between deep focus and quick improvisation.", "R-B-D-B-A-B"),
    entry(16, ADAPTIVE, "Pragmatic Organizer", "Gets things done with steady structure and drive.", "B-C-D-I-M-R"),
    entry(17, ADAPTIVE, "Curious Adapter", "Follows interest wherever it leads and adjusts easily.", "E-B-B-B-A-N"),
    entry(18, ADAPTIVE, "Easygoing Collaborator", "Relaxed, sociable, and open to trying new things.", "B-B-B-C-B-N"),
];

/// Uppercase and strip all whitespace.
pub fn normalize_code(code: &str) -> String {
    code.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Hyphen-joined code letters in result order.
pub fn personality_code(results: &[DimensionResult]) -> String {
    results
        .iter()
        .map(|r| r.code_letter.to_string())
        .collect::<Vec<_>>()
        .join("-")
}

/// Exact match after normalization. No nearest-match fallback.
pub fn match_personality_type(code: &str) -> Option<&'static PersonalityType> {
    let wanted = normalize_code(code);
    CATALOG.iter().find(|t| normalize_code(t.code) == wanted)
}
