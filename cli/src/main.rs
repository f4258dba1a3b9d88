//! mdpress CLI - Markdown to PDF batch converter

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use mdpress::{find_markdown_files, output_path_for, Converter};

#[derive(Parser)]
#[command(name = "mdpress")]
#[command(version)]
#[command(about = "Convert Markdown documents to paginated PDF files", long_about = None)]
struct Cli {
    /// Source directory scanned for Markdown files (non-recursive)
    #[arg(short, long, value_name = "DIR", default_value = "docs")]
    source: PathBuf,

    /// Output directory for generated PDFs, created if absent
    #[arg(short, long, value_name = "DIR", default_value = "dist/pdf")]
    output: PathBuf,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(&cli.output)?;

    let files = find_markdown_files(&cli.source)?;
    if files.is_empty() {
        println!("No Markdown files found in {}.", cli.source.display());
        return Ok(());
    }

    // One converter for the whole batch; the font probe runs once. A failed
    // document aborts the run, matching the no-partial-failure contract.
    let converter = Converter::new();
    for input in &files {
        let output = output_path_for(input, &cli.output);
        println!(
            "{} {} -> {}",
            "Converting".green(),
            input.display(),
            output.display()
        );
        converter.convert_file(input, &output)?;
        log::debug!("wrote {}", output.display());
    }

    println!(
        "{} PDFs at: {}",
        "Done.".green().bold(),
        cli.output.display()
    );
    Ok(())
}
