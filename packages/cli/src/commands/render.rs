use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use focal_model::{OwnerProfile, PortfolioDocument};
use focal_renderer::{compile_html, render as render_page, HtmlOptions, PageMeta, RenderOptions};
use std::fs;
use std::path::PathBuf;

use super::init::{DOCUMENT_FILE, OWNER_FILE};

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Portfolio document to render
    #[arg(default_value = DOCUMENT_FILE)]
    pub path: String,

    /// Owner profile file (rendered with an empty profile if absent)
    #[arg(long, default_value = OWNER_FILE)]
    pub owner_file: String,

    /// Render mode (editing, publishing)
    #[arg(short, long, default_value = "publishing")]
    pub mode: String,

    /// Output file (defaults next to the document)
    #[arg(short, long)]
    pub out: Option<String>,

    /// Output to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}

pub fn render(args: RenderArgs, cwd: &str) -> Result<()> {
    let document_path = PathBuf::from(cwd).join(&args.path);
    let source = fs::read_to_string(&document_path)
        .with_context(|| format!("cannot read {}", document_path.display()))?;
    let document: PortfolioDocument =
        serde_json::from_str(&source).context("malformed portfolio document")?;

    let owner_path = PathBuf::from(cwd).join(&args.owner_file);
    let owner = if owner_path.exists() {
        let source = fs::read_to_string(&owner_path)?;
        serde_json::from_str(&source).context("malformed owner profile")?
    } else {
        println!(
            "{} {} not found, rendering with an empty profile",
            "⚠️".yellow(),
            args.owner_file
        );
        OwnerProfile::default()
    };

    let options = match args.mode.as_str() {
        "editing" => RenderOptions::editing(),
        "publishing" => RenderOptions::publishing(),
        other => {
            return Err(anyhow!(
                "Invalid mode: {}. Use: editing or publishing",
                other
            ));
        }
    };

    let page = render_page(&document, &owner, &options);
    let meta = PageMeta {
        title: if owner.name.is_empty() {
            "Portfolio".to_string()
        } else {
            format!("{} — Photography", owner.name)
        },
        description: owner.headline.clone(),
    };
    let html = compile_html(&page, &meta, HtmlOptions::default());

    if args.stdout {
        println!("{html}");
        return Ok(());
    }

    let out_path = match &args.out {
        Some(out) => PathBuf::from(cwd).join(out),
        None => document_path.with_extension("html"),
    };
    fs::write(&out_path, &html)?;

    println!(
        "  {} {} → {} ({} sections)",
        "✓".green(),
        args.path,
        out_path.display(),
        document.visible_ordered().count()
    );

    Ok(())
}
