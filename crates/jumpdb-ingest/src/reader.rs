//! Record parsing for a single CSV file.

use std::path::Path;

use csv::ReaderBuilder;
use jumpdb_model::{Field, PipelineConfig, Record};
use tracing::debug;

use crate::chapter::{file_stem, infer_chapter};
use crate::error::{IngestError, Result};
use crate::header::HeaderResolver;
use crate::transform::FieldTransformer;

/// Accepted records of one file plus the largest cost among them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFile {
    pub records: Vec<Record>,
    pub max_cost: u64,
}

impl ParsedFile {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Turns raw CSV rows into validated [`Record`]s.
///
/// Holds no state between files, so one parser can be shared by every
/// worker of a folder.
#[derive(Debug, Clone)]
pub struct RecordParser {
    resolver: HeaderResolver,
    transformer: FieldTransformer,
    fallback_headers: Vec<Field>,
    min_header_matches: usize,
}

impl RecordParser {
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            resolver: HeaderResolver::new(config),
            transformer: FieldTransformer::new(config),
            fallback_headers: config.fallback_headers.clone(),
            min_header_matches: config.min_header_matches,
        }
    }

    /// Read and parse one file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid UTF-8 CSV.
    /// Bad cells and incomplete rows are never errors.
    pub fn parse_file(&self, path: &Path) -> Result<ParsedFile> {
        let rows = read_rows(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(self.parse_rows(&file_name, &rows))
    }

    /// Parse already tokenized, non-blank rows of the file `file_name`.
    pub fn parse_rows(&self, file_name: &str, rows: &[Vec<String>]) -> ParsedFile {
        let mut start = 0;
        if rows.len() > 1 && non_empty_cells(&rows[0]) == 1 {
            debug!(file = %file_name, "skipping title row");
            start = 1;
        }
        let Some(candidate) = rows.get(start).map(Vec::as_slice) else {
            return ParsedFile::default();
        };

        let recognized = self.resolver.count_recognized(candidate);
        let (columns, data) = if recognized >= self.min_header_matches {
            (self.resolver.map_columns(candidate), &rows[start + 1..])
        } else {
            debug!(
                file = %file_name,
                recognized,
                "no header row detected, using fallback columns"
            );
            let fallback = self.fallback_headers.iter().copied().map(Some).collect();
            (fallback, &rows[start..])
        };

        let fallback_chapter = infer_chapter(file_name);
        let has_chapter_column = columns.contains(&Some(Field::Chapter));
        let source_file = file_stem(file_name);

        let mut parsed = ParsedFile::default();
        for row in data {
            let mut record = Record::new(source_file);
            for (cell, column) in row.iter().zip(&columns) {
                if let Some(field) = *column {
                    record.set(field, self.transformer.apply(field, cell));
                }
            }
            if !has_chapter_column || record.chapter.is_empty() {
                record.chapter.clone_from(&fallback_chapter);
            }
            if !record.is_complete() {
                continue;
            }
            record.line = parsed.records.len() + 1;
            parsed.max_cost = parsed.max_cost.max(record.cost);
            parsed.records.push(record);
        }
        parsed
    }
}

fn non_empty_cells(row: &[String]) -> usize {
    row.iter().filter(|cell| !cell.trim().is_empty()).count()
}

/// Tokenize a CSV file, dropping rows whose cells are all blank.
///
/// Quoted cells may span lines. A UTF-8 byte order mark is removed.
pub fn read_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let content = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(&bytes);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        let row: Vec<String> = record.iter().map(str::to_string).collect();
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        rows.push(row);
    }
    Ok(rows)
}
