//! Label file loading.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read the label set from file.
///
/// # File Format
/// - One scientific name per line
/// - Line number is the classifier output index, so lines are kept in
///   order and blank lines are preserved as empty entries
pub fn load_labels(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| Error::LabelsRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let reader = BufReader::new(file);
    let mut labels = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|e| Error::LabelsRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        labels.push(line.trim().to_string());
    }

    Ok(labels)
}
