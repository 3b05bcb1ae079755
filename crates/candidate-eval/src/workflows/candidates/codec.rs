//! Headerless candidate CSV:
//! `name,email,role,technical,communication,experience,status,average,photo`.
//!
//! Legacy files were written without quoting, so they read back unchanged; new files quote any
//! field that contains a delimiter or quote.

use std::io::{Read, Write};

use super::domain::{Candidate, CandidateStatus, JobRole};
use crate::workflows::storage::SkippedRecord;

const MIN_FIELDS: usize = 8;
const MAX_FIELDS: usize = 9;

#[derive(Debug, Default)]
pub(crate) struct DecodedCandidates {
    pub(crate) candidates: Vec<Candidate>,
    pub(crate) skipped: Vec<SkippedRecord>,
}

/// Decodes every well-formed line. Malformed lines are collected, I/O failures abort.
pub(crate) fn read_candidates<R: Read>(reader: R) -> Result<DecodedCandidates, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut decoded = DecodedCandidates::default();

    for (index, result) in csv_reader.records().enumerate() {
        let fallback_line = index as u64 + 1;
        let record = match result {
            Ok(record) => record,
            Err(err) if err.is_io_error() => return Err(err),
            Err(err) => {
                let line = err
                    .position()
                    .map(|position| position.line())
                    .unwrap_or(fallback_line);
                decoded.skipped.push(SkippedRecord {
                    line,
                    reason: err.to_string(),
                });
                continue;
            }
        };

        let line = record
            .position()
            .map(|position| position.line())
            .unwrap_or(fallback_line);
        match decode(&record) {
            Ok(candidate) => decoded.candidates.push(candidate),
            Err(reason) => decoded.skipped.push(SkippedRecord { line, reason }),
        }
    }

    Ok(decoded)
}

pub(crate) fn write_candidates<W: Write>(
    writer: W,
    candidates: &[Candidate],
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    for candidate in candidates {
        csv_writer.write_record(encode(candidate))?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub(crate) fn encode(candidate: &Candidate) -> [String; MAX_FIELDS] {
    [
        candidate.name.clone(),
        candidate.email.clone(),
        candidate.role.label().to_string(),
        candidate.technical_score.to_string(),
        candidate.communication_score.to_string(),
        candidate.experience_years.to_string(),
        candidate.status.label().to_string(),
        format_average(candidate.average_score),
        candidate.photo.clone().unwrap_or_default(),
    ]
}

pub(crate) fn decode(record: &csv::StringRecord) -> Result<Candidate, String> {
    if record.len() < MIN_FIELDS || record.len() > MAX_FIELDS {
        return Err(format!(
            "expected {MIN_FIELDS} or {MAX_FIELDS} fields, found {}",
            record.len()
        ));
    }

    let text = |index: usize, field: &str| -> Result<String, String> {
        match record.get(index) {
            Some(value) if !value.trim().is_empty() => Ok(value.to_string()),
            _ => Err(format!("{field} is empty")),
        }
    };
    let integer = |index: usize, field: &str| -> Result<i32, String> {
        let raw = record.get(index).unwrap_or_default();
        raw.trim()
            .parse::<i32>()
            .map_err(|_| format!("{field} '{raw}' is not a whole number"))
    };

    let role_label = text(2, "role")?;
    let role = JobRole::from_label(&role_label)
        .ok_or_else(|| format!("unknown role '{role_label}'"))?;
    let status_label = text(6, "status")?;
    let status = CandidateStatus::from_label(&status_label)
        .ok_or_else(|| format!("unknown status '{status_label}'"))?;
    let average_raw = text(7, "average score")?;
    let average_score = average_raw
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("average score '{average_raw}' is not a number"))?;

    Ok(Candidate {
        name: text(0, "name")?,
        email: text(1, "email")?,
        role,
        technical_score: integer(3, "technical score")?,
        communication_score: integer(4, "communication score")?,
        experience_years: integer(5, "experience years")?,
        status,
        average_score,
        photo: record
            .get(8)
            .filter(|path| !path.is_empty())
            .map(str::to_string),
    })
}

/// Whole averages keep one decimal place (`85.0`) so older readers still see a double.
pub(crate) fn format_average(average: f64) -> String {
    if average.is_finite() && average.fract() == 0.0 {
        format!("{average:.1}")
    } else {
        average.to_string()
    }
}

#[cfg(test)]
pub(crate) fn decode_line_for_tests(line: &str) -> Result<Candidate, String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());
    let record = reader
        .records()
        .next()
        .ok_or_else(|| "no record".to_string())?
        .map_err(|err| err.to_string())?;
    decode(&record)
}
