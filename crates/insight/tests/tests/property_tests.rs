#[path = "property/determinism.rs"]
mod determinism;

#[path = "property/code_coverage.rs"]
mod code_coverage;

#[path = "property/tie_break.rs"]
mod tie_break;

#[path = "property/thresholds.rs"]
mod thresholds;

#[path = "property/input_rejection.rs"]
mod input_rejection;
