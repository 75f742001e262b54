use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use focal_editor::fields_for;
use focal_model::PortfolioDocument;
use focal_renderer::definition;
use std::fs;
use std::path::PathBuf;

use super::init::DOCUMENT_FILE;

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Portfolio document to inspect
    #[arg(default_value = DOCUMENT_FILE)]
    pub path: String,

    /// Also list the editable fields of each section
    #[arg(long)]
    pub fields: bool,
}

pub fn inspect(args: InspectArgs, cwd: &str) -> Result<()> {
    let document_path = PathBuf::from(cwd).join(&args.path);
    let source = fs::read_to_string(&document_path)
        .with_context(|| format!("cannot read {}", document_path.display()))?;
    let document: PortfolioDocument =
        serde_json::from_str(&source).context("malformed portfolio document")?;

    println!("{}", args.path.bright_white().bold());
    println!("  owner:  {}", document.owner_id());
    println!("  theme:  {}", document.theme_preset().as_str());

    let settings = document.global_settings();
    let mut overrides = Vec::new();
    if settings.primary_color.is_some() {
        overrides.push("primaryColor");
    }
    if settings.background_color.is_some() {
        overrides.push("backgroundColor");
    }
    if settings.text_color.is_some() {
        overrides.push("textColor");
    }
    if settings.button_style.is_some() {
        overrides.push("buttonStyle");
    }
    if settings.typography.is_some() {
        overrides.push("typography");
    }
    if settings.spacing.is_some() {
        overrides.push("spacing");
    }
    if overrides.is_empty() {
        println!("  overrides: none");
    } else {
        println!("  overrides: {}", overrides.join(", "));
    }

    println!();
    println!("{} sections:", document.len());

    for section in document.sections_ordered() {
        let label = definition(section.kind).label;
        let visibility = if section.visible {
            "visible".green()
        } else {
            "hidden".yellow()
        };
        println!(
            "  {} {:<14} {} ({})",
            format!("[{}]", section.order).bright_white(),
            label,
            visibility,
            section.id
        );

        if args.fields {
            for field in fields_for(section.kind) {
                println!("        {} ({})", field.key, field.label.dimmed());
            }
        }
    }

    Ok(())
}
