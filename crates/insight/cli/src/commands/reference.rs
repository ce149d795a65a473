//! Reference tables: personality catalog and rule chains

use crate::error::CliResult;
use crate::output::{render_structured, OutputFormat};
use colored::Colorize;
use insight_constitution::VIKRITI_RULES;
use insight_personality::{CATALOG, CORE_GROUP_RULES, ROLE_RULES};

/// Print the 18 named personality types.
pub fn show_catalog(format: OutputFormat) -> CliResult<()> {
    if let Some(text) = render_structured(&CATALOG, format)? {
        println!("{text}");
        return Ok(());
    }

    println!("{}", "Personality Catalog".bold().cyan());
    println!("{}", "=".repeat(70));
    let mut family = "";
    for t in &CATALOG {
        if t.family != family {
            family = t.family;
            println!("\n{}", family.bold());
        }
        println!("  {:>2}  {}  {}", t.id, t.code.green(), t.name);
        println!("          {}", t.descriptor.dimmed());
    }
    Ok(())
}

/// Print every rule chain in evaluation order.
pub fn show_rules(format: OutputFormat) -> CliResult<()> {
    let vikriti: Vec<_> = VIKRITI_RULES
        .iter()
        .enumerate()
        .map(|(i, r)| serde_json::json!({ "order": i + 1, "name": r.name }))
        .collect();
    let core: Vec<_> = CORE_GROUP_RULES
        .iter()
        .enumerate()
        .map(|(i, r)| serde_json::json!({ "order": i + 1, "name": r.name, "group": r.group.label() }))
        .collect();
    let roles: Vec<_> = ROLE_RULES
        .iter()
        .enumerate()
        .map(|(i, r)| {
            serde_json::json!({
                "order": i + 1,
                "name": r.name,
                "role": r.role.label(),
                "reachable": r.reachable,
            })
        })
        .collect();

    let rules = serde_json::json!({
        "vikriti": vikriti,
        "core_group": core,
        "functional_role": roles,
    });
    if let Some(text) = render_structured(&rules, format)? {
        println!("{text}");
        return Ok(());
    }

    println!("{}", "Vikriti rule chain".bold().cyan());
    for r in VIKRITI_RULES {
        println!("  {}", r.name);
    }
    println!("\n{}", "Core group rule chain".bold().cyan());
    for r in CORE_GROUP_RULES {
        println!("  {:<28} → {}", r.name, r.group);
    }
    println!("  {:<28} → {}", "fallback", "Adaptive Navigators");
    println!("\n{}", "Functional role rule chain".bold().cyan());
    for r in ROLE_RULES {
        let marker = if r.reachable {
            String::new()
        } else {
            " (unreachable)".dimmed().to_string()
        };
        println!("  {:<28} → {}{}", r.name, r.role, marker);
    }
    println!("  {:<28} → {}", "fallback", "Balancer");
    Ok(())
}
