use anyhow::Result;
use clap::Args;
use colored::Colorize;
use focal_model::{MediaRef, OwnerProfile, PortfolioDocument};
use std::fs;
use std::path::PathBuf;

pub const DOCUMENT_FILE: &str = "portfolio.json";
pub const OWNER_FILE: &str = "owner.json";

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Display name of the professional
    #[arg(short, long, default_value = "Your Name")]
    pub owner: String,

    /// Force overwrite existing files
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let document_path = PathBuf::from(cwd).join(DOCUMENT_FILE);
    let owner_path = PathBuf::from(cwd).join(OWNER_FILE);

    if document_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DOCUMENT_FILE.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing Focal portfolio...".bright_blue().bold());

    let owner_id = slug(&args.owner);
    let document = PortfolioDocument::starter(&owner_id);
    fs::write(&document_path, serde_json::to_string_pretty(&document)?)?;
    println!("  {} Created {}", "✓".green(), DOCUMENT_FILE);

    if !owner_path.exists() || args.force {
        let owner = sample_owner(&owner_id, &args.owner);
        fs::write(&owner_path, serde_json::to_string_pretty(&owner)?)?;
        println!("  {} Created {}", "✓".green(), OWNER_FILE);
    }

    println!();
    println!("Next steps:");
    println!("  1. Edit {} with your details", OWNER_FILE.bright_white());
    println!(
        "  2. Run {} to see the page",
        "focal render".bright_white()
    );

    Ok(())
}

fn slug(name: &str) -> String {
    let cleaned: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();
    format!("pro-{}", cleaned.trim_matches('-'))
}

fn sample_owner(id: &str, name: &str) -> OwnerProfile {
    OwnerProfile {
        id: id.to_string(),
        name: name.to_string(),
        headline: "Photographer".to_string(),
        bio: "Tell visitors who you are and how you shoot.".to_string(),
        media: vec![MediaRef {
            url: "https://example.com/sample.jpg".to_string(),
            caption: "Replace with your own work".to_string(),
        }],
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_is_filesystem_friendly() {
        assert_eq!(slug("Ada Marsh"), "pro-ada-marsh");
        assert_eq!(slug("  Ada  "), "pro-ada");
        assert_eq!(slug("Ana-María"), "pro-ana-maría");
    }
}
