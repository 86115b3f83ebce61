use crate::core::estimator::estimate;
use crate::domain::model::{BacInput, SeverityPalette, Sex};
use crate::utils::error::{AlcometerError, Result};
use crate::utils::validation::{parse_or_zero, parse_weight};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BatchRow {
    pub weight: String,
    pub bottles: String,
    pub hours: String,
    pub sex: String,
}

#[derive(Debug, Clone, Serialize)]
struct BatchOutputRow<'a> {
    weight: &'a str,
    bottles: &'a str,
    hours: &'a str,
    sex: &'a str,
    bac: Option<String>,
    severity: Option<String>,
    color: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub computed: usize,
    pub failed: usize,
}

impl BatchRow {
    pub fn to_input(&self, default_sex: Sex) -> Result<BacInput> {
        let sex = if self.sex.trim().is_empty() {
            default_sex
        } else {
            self.sex.parse()?
        };

        Ok(BacInput {
            weight_kg: parse_weight(&self.weight)?,
            bottle_count: parse_or_zero(&self.bottles),
            hours_since_drinking: parse_or_zero(&self.hours),
            sex,
        })
    }
}

fn row_error(e: &AlcometerError) -> String {
    match e {
        AlcometerError::MissingWeight => "missing weight".to_string(),
        other => other.to_string(),
    }
}

/// Estimate every row of a `weight,bottles,hours,sex` CSV and write the results as CSV.
///
/// Rows that cannot be estimated are written with an `error` column instead of
/// stopping the run. Malformed CSV aborts with [`AlcometerError::CsvError`].
pub fn run_batch<R: Read, W: Write>(
    reader: R,
    writer: W,
    palette: &SeverityPalette,
    default_sex: Sex,
) -> Result<BatchSummary> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut summary = BatchSummary::default();

    for (index, record) in csv_reader.deserialize::<BatchRow>().enumerate() {
        let row = record?;
        summary.total += 1;

        let outcome = row.to_input(default_sex).and_then(|input| estimate(&input));
        let output = match &outcome {
            Ok(result) => {
                summary.computed += 1;
                BatchOutputRow {
                    weight: &row.weight,
                    bottles: &row.bottles,
                    hours: &row.hours,
                    sex: &row.sex,
                    bac: Some(result.formatted()),
                    severity: Some(result.severity.to_string()),
                    color: Some(palette.color_for(result.severity).to_string()),
                    error: None,
                }
            }
            Err(e) => {
                summary.failed += 1;
                tracing::warn!("⚠️ Row {} skipped: {}", index + 1, e);
                BatchOutputRow {
                    weight: &row.weight,
                    bottles: &row.bottles,
                    hours: &row.hours,
                    sex: &row.sex,
                    bac: None,
                    severity: None,
                    color: None,
                    error: Some(row_error(e)),
                }
            }
        };

        csv_writer.serialize(output)?;
    }

    csv_writer.flush()?;

    tracing::info!(
        "📊 Batch finished: {} rows, {} computed, {} failed",
        summary.total,
        summary.computed,
        summary.failed
    );

    Ok(summary)
}
