use crate::error::{ChoiceError, Result};
use crate::prefs::{Preference, Preferences};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use tracing::debug;

/// Reads a headerless preferences file: a student name followed by any number
/// of numeric choices per row.
pub fn read_preferences<R: Read>(reader: R) -> Result<Preferences> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut prefs = Preferences::new();
    for (row, result) in rdr.records().enumerate() {
        let record = result?;
        let mut fields = record.iter();
        let student = fields
            .next()
            .filter(|name| !name.is_empty())
            .ok_or(ChoiceError::MissingStudentName { row: row + 1 })?;
        let choices = fields
            .map(|value| {
                value.parse().map_err(|_| ChoiceError::InvalidChoice {
                    student: student.to_owned(),
                    value: value.to_owned(),
                })
            })
            .collect::<Result<Vec<usize>>>()?;
        prefs.push(Preference::new(student, choices));
    }
    Ok(prefs)
}

pub fn load_preferences<P: AsRef<Path>>(path: P) -> Result<Preferences> {
    let path = path.as_ref();
    let prefs = read_preferences(File::open(path)?)?;
    debug!(path = %path.display(), students = prefs.len(), "preferences loaded");
    Ok(prefs)
}

/// Buffered writer over the given file (created or truncated), or over stdout
/// when no path is given.
pub fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    match path {
        Some(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}
