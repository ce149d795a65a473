//! Personality scoring command

use crate::error::{CliError, CliResult};
use crate::input::AnswerInput;
use crate::output::render_structured;
use crate::Context;
use clap::Args;
use colored::Colorize;
use insight_personality::{PersonalityLayout, PersonalityReport, PersonalityScorer};
use insight_templates::{merge_personality_report_with_templates, FileTemplateStore, Template};
use std::path::PathBuf;

/// Arguments for `insight personality`
#[derive(Args, Debug)]
pub struct PersonalityArgs {
    #[command(flatten)]
    pub input: AnswerInput,

    /// Narrative template file (JSON or YAML)
    #[arg(short, long)]
    pub templates: Option<PathBuf>,
}

/// Execute personality command
pub fn execute(args: PersonalityArgs, ctx: &Context) -> CliResult<()> {
    let raw = args.input.load()?;
    let scorer = PersonalityScorer::new(PersonalityLayout::standard())
        .map_err(|e| CliError::Layout(e.to_string()))?;
    let report = scorer.score(&raw)?;

    let rendered = match ctx.templates(args.templates) {
        Some(path) => {
            let store = FileTemplateStore::load(&path)?;
            let merged = merge_personality_report_with_templates(&report, &store);
            match render_structured(&merged, ctx.format)? {
                Some(text) => text,
                None => {
                    let templates: Vec<Option<&Template>> =
                        merged.dimensions.iter().map(|d| d.template.as_ref()).collect();
                    render_table(&report, &templates)
                }
            }
        }
        None => match render_structured(&report, ctx.format)? {
            Some(text) => text,
            None => render_table(&report, &[]),
        },
    };

    println!("{rendered}");
    Ok(())
}

pub(crate) fn render_table(report: &PersonalityReport, templates: &[Option<&Template>]) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "Personality Report".bold().cyan()));
    out.push_str(&format!("{}\n", "=".repeat(70)));
    out.push_str(&format!("Code:   {}\n", report.code.green().bold()));
    out.push_str(&format!("Name:   {}\n", report.personality_name));
    match &report.personality_type {
        Some(t) => out.push_str(&format!(
            "Type:   #{} {} ({})\n        {}\n",
            t.id, t.name, t.family, t.descriptor
        )),
        None => out.push_str(&format!("Type:   {}\n", "no named type".dimmed())),
    }
    out.push_str(&format!("Score:  {:.2}\n\n", report.score));

    out.push_str(&format!(
        "{:<12} {:<18} {:>5}   {:<18} {:>5}  {}\n",
        "DIMENSION".bold(),
        "LEFT",
        "",
        "RIGHT",
        "",
        "VARIANT"
    ));
    for (i, d) in report.dimensions.iter().enumerate() {
        out.push_str(&format!(
            "{:<12} {:<18} {:>5}   {:<18} {:>5}  {} ({})\n",
            d.name, d.left_pole, d.left_score, d.right_pole, d.right_score, d.variant, d.code_letter
        ));
        if let Some(Some(t)) = templates.get(i) {
            out.push_str(&format!("{:<12} {}\n", "", t.title.italic()));
        }
    }

    out
}
