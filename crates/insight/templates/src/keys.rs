use insight_constitution::{DoshaCode, Section};
use insight_personality::DimensionResult;
use insight_types::Variant;

/// Suffix used for every balanced dimension, whatever its poles.
pub const BALANCED_SUFFIX: &str = "Balanced";

/// First word of a pole name, splitting on whitespace and hyphens.
pub fn first_word(pole: &str) -> &str {
    pole.split(|c: char| c.is_whitespace() || c == '-')
        .find(|w| !w.is_empty())
        .unwrap_or("")
}

/// `{PREFIX}_{variant}_{word}` for one scored dimension.
pub fn dimension_template_key(result: &DimensionResult) -> String {
    let word = match result.variant {
        Variant::A => first_word(&result.left_pole),
        Variant::B => BALANCED_SUFFIX,
        Variant::C => first_word(&result.right_pole),
    };
    format!(
        "{}_{}_{}",
        result.dimension.template_prefix(),
        result.variant,
        word
    )
}

/// `{SECTION}_{code}` for one constitutional section.
pub fn section_template_key(section: Section, code: DoshaCode) -> String {
    format!("{}_{}", section.key_prefix(), code)
}
