//! Descriptive personality names.
//!
//! A name is `"{core group} – {mind word} {functional role}"`. The three parts
//! are derived independently from the same six dimension results. Both the
//! core group and the role come from ordered rule chains where the first
//! matching rule wins.

use insight_types::Variant;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dimensions::Dimension;
use crate::scorer::DimensionResult;

/// Returned when any of the six dimensions is missing.
pub const UNKNOWN_PERSONALITY: &str = "Unknown Personality";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoreGroup {
    CalmThinkers,
    DynamicEnergizers,
    AdaptiveNavigators,
}

impl CoreGroup {
    pub fn label(self) -> &'static str {
        match self {
            CoreGroup::CalmThinkers => "Calm Thinkers",
            CoreGroup::DynamicEnergizers => "Dynamic Energizers",
            CoreGroup::AdaptiveNavigators => "Adaptive Navigators",
        }
    }
}

impl fmt::Display for CoreGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionalRole {
    Connector,
    Explorer,
    Planner,
    Builder,
    Balancer,
}

impl FunctionalRole {
    pub fn label(self) -> &'static str {
        match self {
            FunctionalRole::Connector => "Connector",
            FunctionalRole::Explorer => "Explorer",
            FunctionalRole::Planner => "Planner",
            FunctionalRole::Builder => "Builder",
            FunctionalRole::Balancer => "Balancer",
        }
    }
}

impl fmt::Display for FunctionalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Core group ─────────────────────────────────────────────────────────

/// One step of the core-group chain, over (Mind, Stress, Energy).
pub struct CoreGroupRule {
    pub name: &'static str,
    pub applies: fn(&[Variant; 3]) -> bool,
    pub group: CoreGroup,
}

pub static CORE_GROUP_RULES: &[CoreGroupRule] = &[
    CoreGroupRule {
        name: "mostly-left",
        applies: |v| count(v, Variant::A) >= 2,
        group: CoreGroup::CalmThinkers,
    },
    CoreGroupRule {
        name: "mostly-right",
        applies: |v| count(v, Variant::C) >= 2,
        group: CoreGroup::DynamicEnergizers,
    },
];

fn count(variants: &[Variant], wanted: Variant) -> usize {
    variants.iter().filter(|v| **v == wanted).count()
}

pub fn core_group(mind: Variant, stress: Variant, energy: Variant) -> CoreGroup {
    let variants = [mind, stress, energy];
    CORE_GROUP_RULES
        .iter()
        .find(|rule| (rule.applies)(&variants))
        .map(|rule| rule.group)
        .unwrap_or(CoreGroup::AdaptiveNavigators)
}

// ── Functional role ────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleInputs {
    pub social: Variant,
    pub discipline: Variant,
    pub habits: Variant,
}

impl RoleInputs {
    pub fn balanced_count(&self) -> usize {
        count(&[self.social, self.discipline, self.habits], Variant::B)
    }
}

/// One step of the role chain.
///
/// `reachable == false` marks rules that earlier rules fully shadow.
pub struct RoleRule {
    pub name: &'static str,
    pub applies: fn(&RoleInputs) -> bool,
    pub role: FunctionalRole,
    pub reachable: bool,
}

use Variant::{A, B, C};

pub static ROLE_RULES: &[RoleRule] = &[
    RoleRule {
        name: "social-and-habits-right",
        applies: |r| r.social == C && r.habits == C,
        role: FunctionalRole::Connector,
        reachable: true,
    },
    RoleRule {
        name: "discipline-right",
        applies: |r| r.discipline == C,
        role: FunctionalRole::Explorer,
        reachable: true,
    },
    RoleRule {
        name: "discipline-left",
        applies: |r| r.discipline == A,
        role: FunctionalRole::Planner,
        reachable: true,
    },
    RoleRule {
        name: "habits-and-social-left",
        applies: |r| r.habits == A && r.social == A,
        role: FunctionalRole::Builder,
        reachable: true,
    },
    // Shadowed by discipline-right.
    RoleRule {
        name: "habits-and-discipline-right",
        applies: |r| r.habits == C && r.discipline == C,
        role: FunctionalRole::Explorer,
        reachable: false,
    },
    // Shadowed by discipline-left.
    RoleRule {
        name: "discipline-and-habits-left",
        applies: |r| r.discipline == A && r.habits == A,
        role: FunctionalRole::Planner,
        reachable: false,
    },
    RoleRule {
        name: "social-right",
        applies: |r| r.social == C,
        role: FunctionalRole::Connector,
        reachable: true,
    },
    RoleRule {
        name: "habits-right",
        applies: |r| r.habits == C,
        role: FunctionalRole::Explorer,
        reachable: true,
    },
    RoleRule {
        name: "mostly-balanced",
        applies: |r| r.balanced_count() >= 2,
        role: FunctionalRole::Balancer,
        reachable: true,
    },
    // Discipline is always B by this point, so mostly-balanced already fired.
    RoleRule {
        name: "social-left-habits-balanced",
        applies: |r| r.social == A && r.habits == B,
        role: FunctionalRole::Builder,
        reachable: false,
    },
];

/// First matching rule's role, or `Balancer`.
pub fn functional_role(inputs: &RoleInputs) -> FunctionalRole {
    ROLE_RULES
        .iter()
        .find(|rule| (rule.applies)(inputs))
        .map(|rule| rule.role)
        .unwrap_or(FunctionalRole::Balancer)
}

// ── Mind word ──────────────────────────────────────────────────────────

pub fn mind_word(mind: Variant) -> &'static str {
    match mind {
        A => "Thoughtful",
        B => "Adaptive",
        C => "Expressive",
    }
}

/// Build the descriptive name, or [`UNKNOWN_PERSONALITY`] if a dimension is
/// missing from `results`.
pub fn personality_name(results: &[DimensionResult]) -> String {
    let variant = |dimension: Dimension| {
        results
            .iter()
            .find(|r| r.dimension == dimension)
            .map(|r| r.variant)
    };

    let (Some(mind), Some(stress), Some(energy), Some(social), Some(discipline), Some(habits)) = (
        variant(Dimension::Mind),
        variant(Dimension::Stress),
        variant(Dimension::Energy),
        variant(Dimension::Social),
        variant(Dimension::Discipline),
        variant(Dimension::Habits),
    ) else {
        return UNKNOWN_PERSONALITY.to_string();
    };

    let group = core_group(mind, stress, energy);
    let role = functional_role(&RoleInputs {
        social,
        discipline,
        habits,
    });

    format!("{} – {} {}", group, mind_word(mind), role)
}
