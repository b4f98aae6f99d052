use std::io::Read;

use super::validation::{MetricsSubmission, MetricsValidationError};
use super::{evaluate, ScoreResult};

/// Failure to read a metrics export as a whole.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("failed to read sleep metrics csv: {0}")]
    Csv(#[from] csv::Error),
}

/// One scored (or rejected) row of a metrics export.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRow {
    /// 1-based line in the source file, header included.
    pub line: u64,
    pub outcome: Result<ScoreResult, MetricsValidationError>,
}

/// Scores every row of a CSV export whose header names the metric fields.
///
/// Rows that fail validation are reported individually; a malformed file
/// aborts the whole batch.
pub fn score_csv<R: Read>(reader: R) -> Result<Vec<BatchRow>, BatchError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record
            .position()
            .map(|position| position.line())
            .unwrap_or_default();
        let submission: MetricsSubmission = record.deserialize(Some(&headers))?;
        let outcome = submission.validate().map(|metrics| evaluate(&metrics));
        rows.push(BatchRow { line, outcome });
    }

    Ok(rows)
}
