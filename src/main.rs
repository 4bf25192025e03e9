use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use pdfcarve::extraction::{collect_pdfs, extract_all};

#[derive(Parser)]
#[command(name = "pdfcarve")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract embedded JPEG images from PDF files")]
struct Cli {
    /// Directory containing the source PDF files
    input_dir: PathBuf,

    /// Directory where extracted JPEG files are written
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!();
    println!("{}", style("pdfcarve - JPEG extraction").cyan().bold());
    println!();

    let pdfs = collect_pdfs(&cli.input_dir)
        .with_context(|| format!("Failed to list input directory {:?}", cli.input_dir))?;

    if pdfs.is_empty() {
        println!(
            "[!] {}",
            style("No PDF files found in input directory.").yellow()
        );
        return Ok(());
    }

    println!(
        "Scanning {} PDF files from {:?}...",
        pdfs.len(),
        cli.input_dir
    );
    println!();

    let pb = ProgressBar::new(pdfs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")?
            .progress_chars("=>-"),
    );

    let progress_cb = |current: usize, _total: usize| {
        pb.set_position(current as u64);
    };

    let report = extract_all(&pdfs, &cli.output_dir, Some(&progress_cb))
        .context("Failed to extract images")?;

    pb.finish_with_message("done");

    println!();
    println!("{}", style("Extraction Complete!").green().bold());
    println!();
    println!(
        "Images extracted: {}",
        style(report.extracted.len()).green()
    );
    println!("No image found:   {}", report.no_image);
    if report.truncated > 0 {
        println!("Truncated:        {}", style(report.truncated).yellow());
    }
    if report.failed > 0 {
        println!("Failed:           {}", style(report.failed).yellow());
    }
    println!("Output folder:    {:?}", cli.output_dir);
    println!();

    if report.extracted.is_empty() {
        println!("[!] {}", style("No images were extracted.").yellow());
    }

    Ok(())
}
