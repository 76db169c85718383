//! Rating history import from CSV exports.

mod parser;

use std::io::Read;
use std::path::Path;

use crate::scoring::RatingEvent;
use parser::RatingRecord;

#[derive(Debug, thiserror::Error)]
pub enum RatingImportError {
    #[error("failed to read ratings export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid ratings CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: unrecognized 'Submitted At' value '{value}'")]
    Timestamp { row: usize, value: String },
}

/// Builds an ordered rating history from a ratings CSV.
///
/// Rows are ordered by `Submitted At` (oldest first). Rows without a timestamp keep their file
/// order and follow the dated rows. Sequence indices are assigned after ordering, so the last
/// event is treated as the most recent.
pub struct RatingHistoryImporter;

impl RatingHistoryImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RatingEvent>, RatingImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<RatingEvent>, RatingImportError> {
        let mut dated = Vec::new();
        let mut undated = Vec::new();

        for record in parser::parse_records(reader)? {
            match record.submitted_at.as_deref() {
                Some(raw) => {
                    let submitted =
                        parser::parse_datetime(raw).ok_or_else(|| RatingImportError::Timestamp {
                            row: record.row,
                            value: raw.to_string(),
                        })?;
                    dated.push((submitted, record));
                }
                None => undated.push(record),
            }
        }

        dated.sort_by_key(|(submitted, _)| *submitted);

        let ordered = dated.into_iter().map(|(_, record)| record).chain(undated);
        Ok(ordered
            .enumerate()
            .map(|(index, record)| to_event(index, record))
            .collect())
    }
}

fn to_event(index: usize, record: RatingRecord) -> RatingEvent {
    let sequence_index = u32::try_from(index).unwrap_or(u32::MAX);
    record
        .categories
        .into_iter()
        .fold(RatingEvent::new(sequence_index, record.overall), |event, (category, value)| {
            event.with_category(category, value)
        })
}
