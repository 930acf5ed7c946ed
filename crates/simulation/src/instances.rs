//! Labeled-instance input.
//!
//! The data format is tabular: a header row (skipped), then one row per
//! historical product — ordered categorical feature strings followed by a
//! single-character class label, `G` or `B`. Row numbers in errors count
//! data rows from 1, excluding the header.

use std::io::Read;

use sim_core::{Result, SimError};
use types::{Label, LabeledInstance};

/// Read labeled instances from CSV data with a header row.
pub fn read_instances<R: Read>(reader: R) -> Result<Vec<LabeledInstance>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut instances = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let row = index + 1;
        let record = record.map_err(|err| SimError::Malformed {
            row,
            reason: err.to_string(),
        })?;

        let mut fields: Vec<String> = record.iter().map(str::to_string).collect();
        let code = match fields.pop() {
            Some(code) if !code.is_empty() => code,
            _ => return Err(SimError::MissingLabel { row }),
        };
        let label = Label::from_code(&code).ok_or(SimError::UnknownLabel {
            row,
            value: code.clone(),
        })?;

        instances.push(LabeledInstance::new(fields, label));
    }
    Ok(instances)
}
