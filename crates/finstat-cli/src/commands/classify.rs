//! Classify command - dry run of the file name rules.

use clap::Args;
use console::style;
use serde::Serialize;

use finstat_core::models::document::{Category, Rejection};
use finstat_core::{Classifier, FinstatConfig};

/// Arguments for the classify command.
#[derive(Args)]
pub struct ClassifyArgs {
    /// File names to classify
    #[arg(required = true)]
    names: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per name
    Text,
    /// JSON array
    Json,
}

#[derive(Debug, Serialize)]
struct Classification<'a> {
    name: &'a str,
    valid: bool,
    category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    rejection: Option<Rejection>,
}

pub fn run(args: ClassifyArgs, config: &FinstatConfig) -> anyhow::Result<()> {
    let classifier = Classifier::new(config.classification.clone());

    let results: Vec<_> = args
        .names
        .iter()
        .map(|name| {
            // only the base name matters
            let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
            let outcome = classifier.classify(base);
            Classification {
                name,
                valid: outcome.is_valid(),
                category: outcome.category,
                rejection: outcome.rejection,
            }
        })
        .collect();

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Text => {
            for result in &results {
                if result.valid {
                    println!(
                        "{} {:<8} {}",
                        style("✓").green(),
                        result.category,
                        result.name
                    );
                } else {
                    let reason = result
                        .rejection
                        .map(|r| r.to_string())
                        .unwrap_or_default();
                    println!(
                        "{} {:<8} {} ({})",
                        style("✗").red(),
                        result.category,
                        result.name,
                        reason
                    );
                }
            }
        }
    }

    Ok(())
}
