use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while generating, loading, checking or
/// assigning student choices.
#[derive(Debug, Error)]
pub enum ChoiceError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("cannot parse config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("no student name on row {row}")]
    MissingStudentName { row: usize },

    #[error("{student} has a non-numeric choice: {value:?}")]
    InvalidChoice { student: String, value: String },

    #[error("duplicate student {0}")]
    DuplicateStudent(String),

    #[error("{student} has made an unacceptable choice: {choice} (not in [1..{max}])")]
    ChoiceOutOfRange {
        student: String,
        choice: usize,
        max: usize,
    },

    #[error("{student} has a duplicate choice: {choice}")]
    DuplicateChoice { student: String, choice: usize },

    /// The solver needs at least as many choices as students.
    #[error("{students} students cannot be assigned to only {choices} choices")]
    TooManyStudents { students: usize, choices: usize },

    #[error("satisfaction weight for rank {rank} does not fit in 64 bits")]
    WeightOverflow { rank: usize },
}

pub type Result<T> = std::result::Result<T, ChoiceError>;
