//! Constitutional (dosha) scoring command

use crate::error::{CliError, CliResult};
use crate::input::AnswerInput;
use crate::output::render_structured;
use crate::Context;
use clap::Args;
use colored::Colorize;
use insight_constitution::{
    CategoryCounts, ConstitutionLayout, ConstitutionReport, ConstitutionScorer, SectionResult,
};
use insight_templates::{merge_constitution_report_with_templates, FileTemplateStore, Template};
use std::path::PathBuf;

/// Arguments for `insight constitution`
#[derive(Args, Debug)]
pub struct ConstitutionArgs {
    #[command(flatten)]
    pub input: AnswerInput,

    /// Narrative template file (JSON or YAML)
    #[arg(short, long)]
    pub templates: Option<PathBuf>,
}

/// Execute constitution command
pub fn execute(args: ConstitutionArgs, ctx: &Context) -> CliResult<()> {
    let raw = args.input.load()?;
    let scorer = ConstitutionScorer::new(ConstitutionLayout::STANDARD)
        .map_err(|e| CliError::Layout(e.to_string()))?;
    let report = scorer.generate_report(&raw)?;

    let rendered = match ctx.templates(args.templates) {
        Some(path) => {
            let store = FileTemplateStore::load(&path)?;
            let merged = merge_constitution_report_with_templates(&report, &store);
            match render_structured(&merged, ctx.format)? {
                Some(text) => text,
                None => render_table(
                    &report,
                    [
                        merged.body.template.as_ref(),
                        merged.prakriti.template.as_ref(),
                        merged.vikriti.template.as_ref(),
                    ],
                ),
            }
        }
        None => match render_structured(&report, ctx.format)? {
            Some(text) => text,
            None => render_table(&report, [None, None, None]),
        },
    };

    println!("{rendered}");
    Ok(())
}

fn counts_line(counts: &CategoryCounts) -> String {
    format!(
        "V {}  P {}  K {}  n/a {}",
        counts.vata, counts.pitta, counts.kapha, counts.unscored
    )
}

fn section_lines(out: &mut String, title: &str, result: &SectionResult, template: Option<&Template>) {
    let modifier = result
        .modifier
        .map(|d| d.name().to_string())
        .unwrap_or_else(|| "-".to_string());
    out.push_str(&format!("{}\n", title.bold()));
    out.push_str(&format!("  Code:      {}\n", result.code.to_string().green()));
    out.push_str(&format!("  Label:     {}\n", result.label));
    out.push_str(&format!("  Primary:   {}\n", result.primary));
    out.push_str(&format!("  Modifier:  {}\n", modifier));
    out.push_str(&format!("  Counts:    {}\n", counts_line(&result.counts)));
    if let Some(t) = template {
        out.push_str(&format!("  Narrative: {}\n", t.title.italic()));
    }
}

pub(crate) fn render_table(report: &ConstitutionReport, templates: [Option<&Template>; 3]) -> String {
    let [body_t, prakriti_t, vikriti_t] = templates;
    let mut out = String::new();

    out.push_str(&format!("{}\n", "Constitution Report".bold().cyan()));
    out.push_str(&format!("{}\n", "=".repeat(50)));
    section_lines(&mut out, "Body type", &report.body, body_t);
    section_lines(&mut out, "Prakriti", &report.prakriti, prakriti_t);

    out.push_str(&format!("{}\n", "Vikriti".bold()));
    out.push_str(&format!("  Code:      {}\n", report.vikriti.code.to_string().yellow()));
    out.push_str(&format!("  Label:     {}\n", report.vikriti.label));
    out.push_str(&format!("  Rule:      {}\n", report.vikriti.rule));
    out.push_str(&format!("  Counts:    {}\n", counts_line(&report.vikriti.counts)));
    if let Some(t) = vikriti_t {
        out.push_str(&format!("  Narrative: {}\n", t.title.italic()));
    }

    out
}
