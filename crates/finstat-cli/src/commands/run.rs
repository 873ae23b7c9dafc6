//! Run command - sort a document tree and compute turnover statistics.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, warn};

use finstat_core::session::{self, Session};
use finstat_core::statistics::format_amount;
use finstat_core::{Category, Disposition, FinstatConfig, Pipeline, RunSummary};

use crate::upload;

/// Arguments for the run command.
#[derive(Args)]
pub struct RunArgs {
    /// Root directory to scan (prompted for when omitted)
    root: Option<PathBuf>,

    /// Access token issued by the authentication service
    #[arg(long, env = "FINSTAT_SESSION_TOKEN", hide_env_values = true)]
    session_token: Option<String>,

    /// Also write a per-document CSV summary
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Do not upload the report
    #[arg(long)]
    no_upload: bool,
}

pub async fn run(args: RunArgs, config: FinstatConfig) -> anyhow::Result<()> {
    let start = Instant::now();

    let session = args
        .session_token
        .map(|token| Session::issue(token, config.session.ttl_secs))
        .transpose()
        .inspect_err(|e| error!("{}", e))?;

    if let Err(e) = session::authorize(session.as_ref()) {
        error!("{}", e);
        anyhow::bail!("Authorization failed: {}", e);
    }

    let root = match args.root {
        Some(root) => root,
        None => prompt_root()?,
    };

    let pipeline = Pipeline::new(config);

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")?);
    pb.set_message(format!("Processing {}", root.display()));
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = pipeline.run(session.as_ref(), &root);
    pb.finish_and_clear();
    let summary = result?;

    if let Some(path) = &args.summary {
        match write_summary(path, &summary) {
            Ok(()) => println!(
                "{} Summary written to {}",
                style("✓").green(),
                path.display()
            ),
            Err(e) => error!("Failed to write summary {}: {}", path.display(), e),
        }
    }

    print_summary(&summary, start.elapsed());

    if summary.report_written && !args.no_upload {
        if let Err(e) = upload::upload_report(&pipeline.config().upload, &summary.report_path).await {
            warn!("Report upload failed: {}", e);
        }
    }

    Ok(())
}

fn prompt_root() -> anyhow::Result<PathBuf> {
    print!("Enter the path to the data folder: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    let line = line.trim();
    if line.is_empty() {
        anyhow::bail!("No data folder given");
    }

    Ok(PathBuf::from(line))
}

fn print_summary(summary: &RunSummary, elapsed: Duration) {
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        summary.documents.len(),
        elapsed
    );
    println!(
        "   {} valid, {} invalid, {} failed",
        style(summary.count(Disposition::Valid)).green(),
        style(summary.count(Disposition::Invalid)).yellow(),
        style(summary.count(Disposition::Failed)).red()
    );

    let unreadable = summary.extraction_failures();
    if unreadable > 0 {
        println!(
            "   {} amounts could not be extracted and count as 0.00",
            style(unreadable).yellow()
        );
    }

    for category in Category::KNOWN {
        println!(
            "   {:<9} {:>12}",
            category.label(),
            format_amount(summary.totals.get(category))
        );
    }

    if summary.report_written {
        println!(
            "{} Statistics written to {}",
            style("✓").green(),
            summary.report_path.display()
        );
    } else {
        println!(
            "{} Statistics could not be written to {}",
            style("✗").red(),
            summary.report_path.display()
        );
    }

    let problems: Vec<_> = summary
        .documents
        .iter()
        .filter(|d| d.error.is_some())
        .collect();

    if !problems.is_empty() {
        println!();
        println!("{}", style("Problems:").red());
        for record in problems {
            println!(
                "  - {}: {}",
                record.source.display(),
                record.error.as_deref().unwrap_or("unknown error")
            );
        }
    }
}

fn write_summary(path: &Path, summary: &RunSummary) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "category",
        "source",
        "destination",
        "amount",
        "error",
    ])?;

    for record in &summary.documents {
        wtr.write_record([
            record.file_name.as_str(),
            &record.disposition.to_string(),
            &record.category.to_string(),
            &record.source.display().to_string(),
            &record
                .destination
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            &record.amount.map(format_amount).unwrap_or_default(),
            record.error.as_deref().unwrap_or(""),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
