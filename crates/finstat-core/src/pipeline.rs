//! End-to-end processing run.
//!
//! A run walks the root, classifies and relocates every file, then extracts
//! amounts from the validated files and writes the statistics report.
//! Per-file failures are logged and recorded; only authorization and
//! traversal failures abort the run.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::classifier::Classifier;
use crate::error::{FinstatError, Result, TraversalError};
use crate::extract;
use crate::models::config::FinstatConfig;
use crate::models::document::{Disposition, Document, DocumentRecord, ValidatedDocument};
use crate::relocate::relocate;
use crate::session::{self, Session};
use crate::statistics::{write_report, StatisticsTotals};
use crate::walker::Walker;

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Final per-category totals.
    pub totals: StatisticsTotals,
    /// One record per file found under the root, in traversal order.
    pub documents: Vec<DocumentRecord>,
    /// Where the report was (or should have been) written.
    pub report_path: PathBuf,
    /// Whether the report was persisted.
    pub report_written: bool,
}

impl RunSummary {
    /// Number of documents with the given disposition.
    pub fn count(&self, disposition: Disposition) -> usize {
        self.documents
            .iter()
            .filter(|d| d.disposition == disposition)
            .count()
    }

    /// Validated documents whose amount could not be extracted.
    pub fn extraction_failures(&self) -> usize {
        self.documents
            .iter()
            .filter(|d| d.disposition == Disposition::Valid && d.error.is_some())
            .count()
    }
}

/// Resolved destination areas.
#[derive(Debug, Clone)]
struct Areas {
    valid: PathBuf,
    invalid: PathBuf,
}

/// Document processing pipeline.
pub struct Pipeline {
    config: FinstatConfig,
    classifier: Classifier,
}

impl Pipeline {
    pub fn new(config: FinstatConfig) -> Self {
        let classifier = Classifier::new(config.classification.clone());
        Self { config, classifier }
    }

    pub fn config(&self) -> &FinstatConfig {
        &self.config
    }

    /// Process every document under `root`.
    pub fn run(&self, session: Option<&Session>, root: &Path) -> Result<RunSummary> {
        if let Err(e) = session::authorize(session) {
            error!("{}", e);
            return Err(e.into());
        }

        let root = resolve_root(root).inspect_err(|e| error!("{}", e))?;
        let areas = self.prepare_areas()?;

        info!("Processing documents under {}", root.display());

        let mut documents = Vec::new();
        let mut queue = Vec::new();

        let walker = Walker::new(&root)
            .exclude(&areas.valid)
            .exclude(&areas.invalid);

        for entry in walker {
            let document = entry.inspect_err(|e| error!("File system traversal error: {}", e))?;
            let (record, validated) = self.route(document, &areas);

            if let Some(validated) = validated {
                queue.push((documents.len(), validated));
            }
            documents.push(record);
        }

        let mut totals = StatisticsTotals::new();

        for (index, validated) in queue {
            let record = &mut documents[index];
            let amount = match extract::extract(&validated) {
                Ok(amount) => amount,
                Err(e) => {
                    record.error = Some(e.to_string());
                    0.0
                }
            };

            totals.add(validated.category, amount);
            record.amount = Some(amount);
        }

        let report_path = self.config.paths.report_file.clone();
        let report_written = match write_report(&report_path, &totals) {
            Ok(()) => true,
            Err(e) => {
                error!("{}", e);
                false
            }
        };

        Ok(RunSummary {
            totals,
            documents,
            report_path,
            report_written,
        })
    }

    /// Create the destination areas and the report directory.
    fn prepare_areas(&self) -> Result<Areas> {
        let paths = &self.config.paths;

        let report_dir = paths
            .report_file
            .parent()
            .filter(|p| !p.as_os_str().is_empty());

        for dir in [paths.valid_dir.as_path(), paths.invalid_dir.as_path()]
            .into_iter()
            .chain(report_dir)
        {
            fs::create_dir_all(dir).map_err(|source| prepare_error(dir, source))?;
        }

        Ok(Areas {
            valid: canonical(&paths.valid_dir)?,
            invalid: canonical(&paths.invalid_dir)?,
        })
    }

    /// Classify one document and move it into its area.
    fn route(
        &self,
        document: Document,
        areas: &Areas,
    ) -> (DocumentRecord, Option<ValidatedDocument>) {
        info!("File processing: {}", document.file_name);

        let outcome = self.classifier.classify(&document.file_name);
        let area = if outcome.is_valid() {
            &areas.valid
        } else {
            &areas.invalid
        };

        let mut record = DocumentRecord {
            source: document.path.clone(),
            file_name: document.file_name.clone(),
            category: outcome.category,
            disposition: Disposition::Failed,
            destination: None,
            amount: None,
            error: None,
        };

        match relocate(&document.path, area) {
            Ok(moved) if outcome.is_valid() => {
                info!("VALID: File {} successfully moved", document.file_name);
                record.disposition = Disposition::Valid;
                record.destination = Some(moved.clone());
                (record, Some(ValidatedDocument::new(moved, outcome.category)))
            }
            Ok(moved) => {
                let reason = outcome
                    .rejection
                    .map(|r| r.to_string())
                    .unwrap_or_default();
                warn!("INVALID: File {} moved ({})", document.file_name, reason);
                record.disposition = Disposition::Invalid;
                record.destination = Some(moved);
                (record, None)
            }
            Err(e) => {
                error!("{}", e);
                record.error = Some(e.to_string());
                (record, None)
            }
        }
    }
}

fn resolve_root(root: &Path) -> std::result::Result<PathBuf, TraversalError> {
    let root_error = |source: io::Error| TraversalError::Root {
        root: root.to_path_buf(),
        source,
    };

    let resolved = root.canonicalize().map_err(root_error)?;
    if !resolved.is_dir() {
        return Err(root_error(io::Error::new(
            io::ErrorKind::NotADirectory,
            "root is not a directory",
        )));
    }

    Ok(resolved)
}

fn canonical(dir: &Path) -> Result<PathBuf> {
    dir.canonicalize().map_err(|source| prepare_error(dir, source))
}

fn prepare_error(path: &Path, source: io::Error) -> FinstatError {
    FinstatError::Prepare {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuthError;

    fn config_in(dir: &Path) -> FinstatConfig {
        let mut config = FinstatConfig::default();
        config.paths.valid_dir = dir.join("out/valid");
        config.paths.invalid_dir = dir.join("out/invalid");
        config.paths.report_file = dir.join("out/statistics.txt");
        config
    }

    fn session() -> Session {
        Session::issue("0123456789abcdef", 60).unwrap()
    }

    #[test]
    fn test_no_session_does_no_work() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("in");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("invoice_2024.txt"), "1,00").unwrap();

        let pipeline = Pipeline::new(config_in(dir.path()));
        let err = pipeline.run(None, &root).unwrap_err();

        assert!(matches!(err, FinstatError::Auth(AuthError::Missing)));
        assert!(root.join("invoice_2024.txt").exists());
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_root_must_be_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("invoice_2024.txt");
        fs::write(&file, "1,00").unwrap();

        let pipeline = Pipeline::new(config_in(dir.path()));
        let err = pipeline.run(Some(&session()), &file).unwrap_err();

        assert!(matches!(
            err,
            FinstatError::Traversal(TraversalError::Root { .. })
        ));
    }

    #[test]
    fn test_areas_inside_root_are_not_rescanned() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = FinstatConfig::default();
        config.paths.valid_dir = dir.path().join("valid");
        config.paths.invalid_dir = dir.path().join("invalid");
        config.paths.report_file = dir.path().join("statistics.txt");

        fs::create_dir(dir.path().join("valid")).unwrap();
        fs::write(dir.path().join("valid/order_2024_old.txt"), "Order Total 5.00").unwrap();
        fs::write(dir.path().join("order_2024_new.txt"), "Order Total 7.00").unwrap();

        let summary = Pipeline::new(config)
            .run(Some(&session()), dir.path())
            .unwrap();

        assert_eq!(summary.documents.len(), 1);
        assert_eq!(summary.documents[0].file_name, "order_2024_new.txt");
        assert_eq!(summary.totals.get(crate::Category::Order), 7.0);
    }

    #[test]
    fn test_summary_counts() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("in");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("invoice_2024_a.txt"), "Total: 1,50").unwrap();
        fs::write(root.join("invoice_2024_b.txt"), "N/A").unwrap();
        fs::write(root.join("notes.md"), "hello").unwrap();

        let summary = Pipeline::new(config_in(dir.path()))
            .run(Some(&session()), &root)
            .unwrap();

        assert_eq!(summary.count(Disposition::Valid), 2);
        assert_eq!(summary.count(Disposition::Invalid), 1);
        assert_eq!(summary.count(Disposition::Failed), 0);
        assert_eq!(summary.extraction_failures(), 1);
        assert!(summary.report_written);
    }
}
