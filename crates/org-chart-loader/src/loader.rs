//! CSV dataset loader.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use org_chart::{Dataset, EmployeeId, EmployeeRecord};
use tracing::{debug, info};

use crate::config::LoaderConfig;
use crate::error::{LoadError, LoadResult};

const FIELD_ID: &str = "id";
const FIELD_MANAGER_ID: &str = "manager_id";
const FIELD_NAME: &str = "name";
const FIELD_DESIGNATION: &str = "designation";

/// Reads employee records from CSV into a [`Dataset`].
///
/// Rows are kept in file order. A malformed row aborts the whole load;
/// no partial dataset is returned.
///
/// # Example
///
/// ```rust
/// use org_chart_loader::DatasetLoader;
///
/// let csv = "id,manager_id,name,designation\n\
///            10,,Ashley Davis,plant manager (fabrication)\n\
///            30,10,Abigayle Heathcote,foreman(fabrication)\n";
///
/// let dataset = DatasetLoader::new().load_str(csv).unwrap();
/// assert_eq!(dataset.len(), 2);
/// assert_eq!(dataset.get(10).unwrap().manager_id(), None);
/// assert_eq!(dataset.get(30).unwrap().manager_id(), Some(10));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DatasetLoader {
    config: LoaderConfig,
}

impl DatasetLoader {
    /// Creates a loader with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a loader with custom configuration.
    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Returns a reference to the loader configuration.
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Loads a dataset from a file.
    pub fn load_path(&self, path: impl AsRef<Path>) -> LoadResult<Dataset> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| LoadError::io_error(path, e))?;
        let dataset = self.read(file)?;

        info!(
            path = %path.display(),
            records = dataset.len(),
            "loaded org chart dataset"
        );
        Ok(dataset)
    }

    /// Loads a dataset from any reader.
    pub fn load_reader<R: Read>(&self, reader: R) -> LoadResult<Dataset> {
        let dataset = self.read(reader)?;
        debug!(records = dataset.len(), "loaded org chart dataset from reader");
        Ok(dataset)
    }

    /// Loads a dataset from CSV text.
    pub fn load_str(&self, csv: &str) -> LoadResult<Dataset> {
        self.load_reader(csv.as_bytes())
    }

    fn read<R: Read>(&self, reader: R) -> LoadResult<Dataset> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(self.config.has_header)
            .flexible(true)
            .from_reader(reader);

        let mut records = Vec::new();
        for result in reader.records() {
            let row = result?;
            if is_blank(&row) {
                continue;
            }
            records.push(self.parse_row(&row)?);
        }

        Ok(Dataset::new(records))
    }

    fn parse_row(&self, row: &StringRecord) -> LoadResult<EmployeeRecord> {
        let line = row.position().map(|p| p.line()).unwrap_or_default();

        let id = parse_id(line, FIELD_ID, field(row, line, 0, FIELD_ID)?)?;
        let manager_id = match field(row, line, 1, FIELD_MANAGER_ID)?.trim() {
            "" => None,
            raw => Some(parse_id(line, FIELD_MANAGER_ID, raw)?),
        };
        let name = self.text(field(row, line, 2, FIELD_NAME)?);
        let designation = self.text(field(row, line, 3, FIELD_DESIGNATION)?);

        let record = EmployeeRecord::new(id, manager_id, name, designation);
        if self.config.reject_self_managed {
            record
                .validate()
                .map_err(|source| LoadError::InvalidRecord { line, source })?;
        }
        Ok(record)
    }

    fn text<'r>(&self, raw: &'r str) -> &'r str {
        if self.config.trim_fields {
            raw.trim()
        } else {
            raw
        }
    }
}

fn field<'r>(
    row: &'r StringRecord,
    line: u64,
    index: usize,
    name: &'static str,
) -> LoadResult<&'r str> {
    row.get(index)
        .ok_or(LoadError::MissingField { line, field: name })
}

fn parse_id(line: u64, field: &'static str, raw: &str) -> LoadResult<EmployeeId> {
    raw.trim()
        .parse::<EmployeeId>()
        .map_err(|_| LoadError::InvalidInteger {
            line,
            field,
            value: raw.to_string(),
        })
}

fn is_blank(row: &StringRecord) -> bool {
    row.iter().all(|f| f.trim().is_empty())
}
