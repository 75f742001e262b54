mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{init, inspect, render, InitArgs, InspectArgs, RenderArgs};

/// Focal CLI - compose and publish photography portfolio pages
#[derive(Parser, Debug)]
#[command(name = "focal")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a portfolio document and a sample owner profile
    Init(InitArgs),

    /// Render a portfolio document to HTML
    Render(RenderArgs),

    /// Show the sections and settings of a portfolio document
    Inspect(InspectArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let cwd = std::env::current_dir()
        .expect("Cannot get current directory")
        .display()
        .to_string();

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Render(args) => render(args, &cwd),
        Command::Inspect(args) => inspect(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
