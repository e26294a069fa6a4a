use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use gini_core::calculations::{CalculationError, IncomeGenerator, TaxBracketEngine};
use gini_core::{BracketTable, IncomeBand, TaxBracket};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading bracket tables or income bands.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("cannot open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input: {0}")]
    Invalid(#[from] CalculationError),
}

impl From<csv::Error> for LoaderError {
    fn from(err: csv::Error) -> Self {
        LoaderError::CsvParse(err.to_string())
    }
}

/// A single row of a bracket table CSV file.
///
/// - `width`: size of the band, accumulated in file order
/// - `rate`: percentage applied past the band, e.g. `30` or `12.5`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BracketRecord {
    pub width: i64,
    pub rate: Decimal,
}

/// A single row of an income band CSV file.
///
/// - `min_income` / `max_income`: inclusive range to draw from
/// - `size`: number of individuals in the band
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct IncomeBandRecord {
    pub min_income: i64,
    pub max_income: i64,
    pub size: i64,
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(reader)
}

fn open(path: &Path) -> Result<File, LoaderError> {
    File::open(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Loader for progressive bracket tables.
///
/// Rows are kept in file order, which is the order the brackets are applied.
pub struct BracketTableLoader;

impl BracketTableLoader {
    /// Parse bracket records from a CSV reader.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<BracketRecord>, LoaderError> {
        let mut records = Vec::new();

        for result in csv_reader(reader).deserialize() {
            let record: BracketRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Converts parsed records into a validated [`BracketTable`].
    ///
    /// # Errors
    ///
    /// Returns [`LoaderError::Invalid`] if any bracket has a negative width.
    pub fn to_table(records: &[BracketRecord]) -> Result<BracketTable, LoaderError> {
        let table = BracketTable::new(
            records
                .iter()
                .map(|record| TaxBracket::new(record.width, record.rate))
                .collect(),
        );
        TaxBracketEngine::new(&table)?;

        Ok(table)
    }

    /// Parse and validate a bracket table in one step.
    pub fn load<R: Read>(reader: R) -> Result<BracketTable, LoaderError> {
        Self::to_table(&Self::parse(reader)?)
    }

    /// Convenience wrapper: open `path` and delegate to [`BracketTableLoader::load`].
    pub fn load_from_file(path: &Path) -> Result<BracketTable, LoaderError> {
        let table = Self::load(open(path)?)?;
        debug!(path = %path.display(), brackets = table.len(), "loaded bracket table");
        Ok(table)
    }
}

/// Loader for explicit income bands used by range-based generation.
pub struct IncomeBandLoader;

impl IncomeBandLoader {
    /// Parse income band records from a CSV reader.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<IncomeBandRecord>, LoaderError> {
        let mut records = Vec::new();

        for result in csv_reader(reader).deserialize() {
            let record: IncomeBandRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Converts parsed records into validated [`IncomeBand`]s.
    ///
    /// # Errors
    ///
    /// Returns [`LoaderError::Invalid`] if a band has `min_income >
    /// max_income` or a negative size.
    pub fn to_bands(records: &[IncomeBandRecord]) -> Result<Vec<IncomeBand>, LoaderError> {
        let bands: Vec<IncomeBand> = records
            .iter()
            .map(|record| IncomeBand {
                min_income: record.min_income,
                max_income: record.max_income,
                size: record.size,
            })
            .collect();
        IncomeGenerator::ranges(bands.clone())?;

        Ok(bands)
    }

    /// Parse and validate income bands in one step.
    pub fn load<R: Read>(reader: R) -> Result<Vec<IncomeBand>, LoaderError> {
        Self::to_bands(&Self::parse(reader)?)
    }

    /// Convenience wrapper: open `path` and delegate to [`IncomeBandLoader::load`].
    pub fn load_from_file(path: &Path) -> Result<Vec<IncomeBand>, LoaderError> {
        let bands = Self::load(open(path)?)?;
        debug!(path = %path.display(), bands = bands.len(), "loaded income bands");
        Ok(bands)
    }
}
