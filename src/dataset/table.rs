//! Tabular label store mapping slide identifiers to severity grades

use crate::io::error::{MosaicError, Result, WithPath, invalid_parameter};
use std::collections::HashMap;
use std::path::Path;

/// One row of slide metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideRecord {
    /// Slide identifier, also the stem of its image file
    pub image_id: String,
    /// Severity grade in `0..=5`
    pub grade: u8,
}

/// Read-only label table, indexable by position and by slide identifier
#[derive(Debug, Default)]
pub struct SlideTable {
    records: Vec<SlideRecord>,
    by_id: HashMap<String, usize>,
}

impl SlideTable {
    /// Build a table from in-memory records
    ///
    /// Later records win when identifiers repeat, matching CSV reload
    /// behavior.
    pub fn from_records(records: Vec<SlideRecord>) -> Self {
        let by_id = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.image_id.clone(), i))
            .collect();
        Self { records, by_id }
    }

    /// Load a table from a CSV file with `image_id` and `isup_grade` columns
    ///
    /// # Errors
    ///
    /// Returns `TableParse` for unreadable or malformed CSV, and
    /// `InvalidParameter` when required columns are missing or a grade is
    /// not a small integer
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path).with_path(path)?;

        let headers = reader.headers().with_path(path)?.clone();
        let id_col = find_column(&headers, "image_id")?;
        let grade_col = find_column(&headers, "isup_grade")?;

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row.with_path(path)?;
            let image_id = row.get(id_col).unwrap_or_default().to_string();
            let grade_text = row.get(grade_col).unwrap_or_default();
            let grade = grade_text
                .trim()
                .parse::<u8>()
                .map_err(|e| invalid_parameter("isup_grade", &grade_text, &e))?;
            records.push(SlideRecord { image_id, grade });
        }
        Ok(Self::from_records(records))
    }

    /// Number of slides in the table
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no slides
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at a dataset position, if in range
    pub fn get(&self, index: usize) -> Option<&SlideRecord> {
        self.records.get(index)
    }

    /// Record for a slide identifier
    ///
    /// # Errors
    ///
    /// Returns `RowNotFound` when the identifier has no row
    pub fn lookup(&self, image_id: &str) -> Result<&SlideRecord> {
        self.by_id
            .get(image_id)
            .and_then(|&i| self.records.get(i))
            .ok_or_else(|| MosaicError::RowNotFound {
                image_id: image_id.to_string(),
            })
    }
}

pub(crate) fn find_column(headers: &csv::StringRecord, name: &'static str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| invalid_parameter(name, &"<missing>", &"required CSV column not found"))
}
