use insight_constitution::{ConstitutionReport, Section, SectionResult, VikritiResult};
use insight_personality::{DimensionResult, PersonalityReport, PersonalityType};
use serde::Serialize;
use tracing::{debug, warn};

use crate::keys::{dimension_template_key, section_template_key};
use crate::store::{Template, TemplateStore};

/// A computed result paired with its narrative template, if one exists.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Merged<T> {
    pub result: T,
    pub template_key: String,
    pub template: Option<Template>,
}

/// One dimension result with its narrative template.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MergedDimension {
    pub dimension_result: DimensionResult,
    pub template_key: String,
    pub template: Option<Template>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MergedPersonalityReport {
    pub code: String,
    pub personality_type: Option<PersonalityType>,
    pub personality_name: String,
    pub dimensions: Vec<MergedDimension>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MergedConstitutionReport {
    pub body: Merged<SectionResult>,
    pub prakriti: Merged<SectionResult>,
    pub vikriti: Merged<VikritiResult>,
}

fn lookup(store: &dyn TemplateStore, key: &str, subject: &str) -> Option<Template> {
    let template = store.get(key);
    if template.is_none() {
        warn!(key, subject, "no narrative template for derived key");
    }
    template
}

/// Attach a template to each dimension. Missing templates leave `None`.
pub fn merge_personality_report_with_templates(
    report: &PersonalityReport,
    store: &dyn TemplateStore,
) -> MergedPersonalityReport {
    let dimensions: Vec<MergedDimension> = report
        .dimensions
        .iter()
        .map(|result| {
            let template_key = dimension_template_key(result);
            let template = lookup(store, &template_key, result.dimension.name());
            MergedDimension {
                dimension_result: result.clone(),
                template_key,
                template,
            }
        })
        .collect();

    debug!(
        code = report.code.as_str(),
        found = dimensions.iter().filter(|d| d.template.is_some()).count(),
        total = dimensions.len(),
        "personality templates merged"
    );

    MergedPersonalityReport {
        code: report.code.clone(),
        personality_type: report.personality_type,
        personality_name: report.personality_name.clone(),
        dimensions,
    }
}

/// Attach a template to each constitutional section.
pub fn merge_constitution_report_with_templates(
    report: &ConstitutionReport,
    store: &dyn TemplateStore,
) -> MergedConstitutionReport {
    let section = |result: &SectionResult| {
        let template_key = section_template_key(result.section, result.code);
        let template = lookup(store, &template_key, result.section.as_str());
        Merged {
            result: result.clone(),
            template_key,
            template,
        }
    };

    let vikriti_key = section_template_key(Section::Vikriti, report.vikriti.code);
    let vikriti_template = lookup(store, &vikriti_key, Section::Vikriti.as_str());

    MergedConstitutionReport {
        body: section(&report.body),
        prakriti: section(&report.prakriti),
        vikriti: Merged {
            result: report.vikriti.clone(),
            template_key: vikriti_key,
            template: vikriti_template,
        },
    }
}
