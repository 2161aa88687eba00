//! Database build with explicit stages.
//!
//! For every dataset folder under the input root, in name order:
//! 1. **Discover**: list the folder's CSV files
//! 2. **Parse**: parse all files concurrently, one independent task per file
//! 3. **Assemble**: index accepted records by file position (1-based)
//! 4. **Split**: move special-chapter records out of the group document
//! 5. **Persist**: write the group document
//!
//! Only stage 3 aggregates across files, and it runs on the calling thread
//! after every parse task of the folder has finished. Split records are
//! collected across all folders and each split document is written once,
//! after the last folder.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::{error, info, info_span, warn};

use jumpdb_ingest::{RecordParser, list_csv_files, list_group_dirs};
use jumpdb_model::{GroupDocument, PipelineConfig, Record, SplitDocument};
use jumpdb_output::{slugify, split_chapters, write_document};

use crate::types::{BuildReport, GroupSummary, SplitOutput, SplitSummary};

/// Document name used when a folder name slugifies to nothing.
pub const UNTITLED_GROUP: &str = "untitled";

/// Orchestrates a full run from an input root to an output directory.
#[derive(Debug)]
pub struct DatabaseBuilder {
    config: PipelineConfig,
    parser: RecordParser,
    output_dir: PathBuf,
    dry_run: bool,
}

impl DatabaseBuilder {
    pub fn new(config: PipelineConfig, output_dir: impl Into<PathBuf>) -> Self {
        let parser = RecordParser::new(&config);
        Self {
            config,
            parser,
            output_dir: output_dir.into(),
            dry_run: false,
        }
    }

    /// Run every stage except writing documents.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Process every dataset folder under `input_root`.
    ///
    /// # Errors
    ///
    /// Fails only when `input_root` itself cannot be listed. Problems with a
    /// single folder or file are logged and recorded in the report.
    pub fn build(&self, input_root: &Path) -> Result<BuildReport> {
        let build_span = info_span!("build", input = %input_root.display());
        let _build_guard = build_span.enter();
        let start = Instant::now();

        let folders = list_group_dirs(input_root)
            .with_context(|| format!("list dataset folders in {}", input_root.display()))?;
        info!(folders = folders.len(), "discovered dataset folders");

        let mut report = BuildReport {
            input_root: input_root.to_path_buf(),
            output_dir: self.output_dir.clone(),
            dry_run: self.dry_run,
            groups: Vec::with_capacity(folders.len()),
            splits: Vec::new(),
            errors: Vec::new(),
            max_cost: 0,
        };
        let mut names = DocumentNames::new(&self.config);
        let mut collected: BTreeMap<String, Vec<Record>> = BTreeMap::new();
        for folder in &folders {
            let summary = self.build_group(folder, &mut names, &mut collected);
            report.max_cost = report.max_cost.max(summary.max_cost);
            report.groups.push(summary);
        }

        for (output, records) in collected {
            let count = records.len();
            let document = SplitDocument::from([(1, records)]);
            let path = self.persist(&output, &document, &mut report.errors);
            if let Some(path) = &path {
                info!(path = %path.display(), records = count, "wrote split document");
            }
            report.splits.push(SplitOutput {
                output,
                records: count,
                path,
            });
        }

        info!(
            max_cost = report.max_cost,
            written = report.written_groups(),
            elapsed_secs = start.elapsed().as_secs_f64(),
            "build complete"
        );
        Ok(report)
    }

    fn build_group(
        &self,
        folder: &Path,
        names: &mut DocumentNames,
        collected: &mut BTreeMap<String, Vec<Record>>,
    ) -> GroupSummary {
        let folder_name = folder
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let group_span = info_span!("group", folder = %folder_name);
        let _group_guard = group_span.enter();

        let mut slug = slugify(&folder_name);
        if slug.is_empty() {
            warn!(fallback = UNTITLED_GROUP, "folder name has no usable characters");
            slug = UNTITLED_GROUP.to_string();
        }
        let mut summary = GroupSummary {
            folder: folder_name,
            slug,
            ..GroupSummary::default()
        };

        let files = match list_csv_files(folder) {
            Ok(files) => files,
            Err(error) => {
                warn!(%error, "failed to list folder, skipping");
                summary.errors.push(error.to_string());
                return summary;
            }
        };
        summary.files = files.len();

        let mut document = self.parse_files(&files, &mut summary);
        if document.is_empty() {
            info!("no records found, skipping folder");
            return summary;
        }

        for split in split_chapters(&mut document, &self.config.split_chapters) {
            let records = split.record_count();
            info!(
                chapter = %split.chapter,
                output = %split.output,
                records,
                "extracted chapter"
            );
            collected
                .entry(split.output.clone())
                .or_default()
                .extend(split.document.into_values().flatten());
            summary.splits.push(SplitSummary {
                chapter: split.chapter,
                output: split.output,
                records,
            });
        }

        summary.records = document.values().map(Vec::len).sum();
        if let Err(message) = names.claim(&summary.slug) {
            error!(document = %summary.slug, "{message}");
            summary.errors.push(message);
            return summary;
        }
        summary.output = self.persist(&summary.slug, &document, &mut summary.errors);
        if let Some(path) = &summary.output {
            info!(path = %path.display(), records = summary.records, "wrote group document");
        }
        summary
    }

    /// Parse all files in parallel, then index the results in listing order.
    ///
    /// A file keeps its listing position as its index even when an earlier
    /// file failed or produced no records.
    fn parse_files(&self, files: &[PathBuf], summary: &mut GroupSummary) -> GroupDocument {
        let results: Vec<_> = files
            .par_iter()
            .map(|path| self.parser.parse_file(path))
            .collect();

        let mut document = GroupDocument::new();
        for (position, (path, result)) in files.iter().zip(results).enumerate() {
            let file = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            match result {
                Ok(parsed) => {
                    summary.parsed += 1;
                    summary.max_cost = summary.max_cost.max(parsed.max_cost);
                    info!(
                        file = %file,
                        rows = parsed.records.len(),
                        max_cost = parsed.max_cost,
                        "parsed file"
                    );
                    if !parsed.is_empty() {
                        document.insert(position + 1, parsed.records);
                    }
                }
                Err(error) => {
                    summary.failed += 1;
                    warn!(file = %file, %error, "failed to parse file");
                }
            }
        }
        document
    }

    fn persist(
        &self,
        name: &str,
        document: &GroupDocument,
        errors: &mut Vec<String>,
    ) -> Option<PathBuf> {
        if self.dry_run {
            return None;
        }
        match write_document(&self.output_dir, name, document) {
            Ok(path) => Some(path),
            Err(err) => {
                error!(error = %err, "failed to write document");
                errors.push(err.to_string());
                None
            }
        }
    }
}

/// Output names already taken during a run.
///
/// Split document names are taken up front so no group document can
/// replace a split document written at the end of the run.
#[derive(Debug)]
struct DocumentNames {
    split_names: BTreeSet<String>,
    groups: BTreeSet<String>,
}

impl DocumentNames {
    fn new(config: &PipelineConfig) -> Self {
        Self {
            split_names: config.split_chapters.values().cloned().collect(),
            groups: BTreeSet::new(),
        }
    }

    fn claim(&mut self, name: &str) -> std::result::Result<(), String> {
        if self.split_names.contains(name) {
            return Err(format!(
                "group document '{name}' would replace a split document, not written"
            ));
        }
        if !self.groups.insert(name.to_string()) {
            return Err(format!(
                "group document '{name}' was already written by an earlier folder, not written"
            ));
        }
        Ok(())
    }
}
