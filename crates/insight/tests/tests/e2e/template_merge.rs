//! Template merge against stores loaded from JSON and YAML files.

use std::io::Write;

use insight_constitution::generate_report;
use insight_personality::score_personality;
use insight_templates::{
    merge_constitution_report_with_templates, merge_personality_report_with_templates,
    FileTemplateStore, TemplateError, TemplateStore,
};
use insight_tests::{answers_for_code, constitution_answers};

fn write_file(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

const PERSONALITY_JSON: &str = r#"{
    "MIND_C_Expressive": { "title": "Expressive mind", "summary": "Thinks out loud." },
    "STRESS_C_Reactive": { "title": "Reactive under stress", "summary": "Responds fast." },
    "ENERGY_C_Dynamic": { "title": "Dynamic energy", "summary": "Moves quickly.", "strengths": ["momentum"] },
    "SOCIAL_C_Collaborative": { "title": "Collaborative", "summary": "Works through people." },
    "DISCIPLINE_C_Adaptive": { "title": "Adaptive discipline", "summary": "Adjusts plans." },
    "HABITS_B_Balanced": { "title": "Balanced habits", "summary": "Mixes routine and novelty." }
}"#;

const CONSTITUTION_YAML: &str = r#"
BODY_VP:
  title: Vata-Pitta body
  summary: Light frame with a warm core.
  growth_areas:
    - regular meals
PRAKRITI_KV:
  title: Kapha-Vata nature
  summary: Steady with bursts of movement.
"#;

#[test]
fn personality_templates_from_json() {
    let file = write_file(".json", PERSONALITY_JSON);
    let store = FileTemplateStore::load(file.path()).unwrap();
    assert_eq!(store.len(), 6);

    let report = score_personality(&answers_for_code("E-R-D-C-A-B").unwrap()).unwrap();
    let merged = merge_personality_report_with_templates(&report, &store);

    assert_eq!(merged.code, report.code);
    assert_eq!(merged.personality_name, report.personality_name);
    assert!(merged.dimensions.iter().all(|d| d.template.is_some()));
    assert_eq!(merged.dimensions[0].template_key, "MIND_C_Expressive");
    assert_eq!(merged.dimensions[5].template_key, "HABITS_B_Balanced");
    assert_eq!(
        merged.dimensions[2].template.as_ref().map(|t| t.strengths.clone()),
        Some(vec!["momentum".to_string()])
    );
}

#[test]
fn constitution_templates_from_yaml_with_a_soft_miss() {
    let file = write_file(".yaml", CONSTITUTION_YAML);
    let store = FileTemplateStore::load(file.path()).unwrap();

    let vikriti: Vec<i64> = [2i64; 6]
        .into_iter()
        .chain([1; 6])
        .chain([3; 2])
        .chain([4; 3])
        .collect();
    let raw = constitution_answers(
        &[1, 1, 2, 1, 3, 2],
        &[3, 3, 3, 3, 3, 1, 1, 1, 2, 2, 2, 3],
        &vikriti,
    );
    let report = generate_report(&raw).unwrap();
    let merged = merge_constitution_report_with_templates(&report, &store);

    assert_eq!(merged.body.template_key, "BODY_VP");
    assert_eq!(
        merged.body.template.as_ref().map(|t| t.growth_areas.len()),
        Some(1)
    );
    assert_eq!(merged.prakriti.template_key, "PRAKRITI_KV");
    assert!(merged.prakriti.template.is_some());

    assert_eq!(merged.vikriti.template_key, "VIKRITI_PV");
    assert!(merged.vikriti.template.is_none());
    assert_eq!(merged.vikriti.result, report.vikriti);
}

#[test]
fn merged_json_keeps_missing_templates_as_null() {
    let file = write_file(".yml", "{}");
    let store = FileTemplateStore::load(file.path()).unwrap();
    assert!(store.is_empty());

    let report = score_personality(&answers_for_code("R-C-F-I-A-B").unwrap()).unwrap();
    let merged = merge_personality_report_with_templates(&report, &store);
    let json = serde_json::to_value(&merged).unwrap();

    assert_eq!(json["personality_type"]["id"], 1);
    assert!(json["dimensions"][0]["template"].is_null());
    assert_eq!(json["dimensions"][0]["dimension_result"]["code_letter"], "R");
}

#[test]
fn unsupported_extension_is_an_error() {
    let file = write_file(".txt", "{}");
    let err = FileTemplateStore::load(file.path()).unwrap_err();
    assert!(matches!(err, TemplateError::UnsupportedFormat { .. }));
}
