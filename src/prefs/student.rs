use serde::Serialize;
use std::fmt;

pub const STUDENT_PREFIX: &str = "Student";

/// One generated record: a student number and the ordered identifiers they
/// picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentLine {
    pub index: usize,
    pub choices: Vec<usize>,
}

impl StudentLine {
    pub fn new(index: usize, choices: Vec<usize>) -> Self {
        StudentLine { index, choices }
    }

    pub fn name(&self) -> String {
        format!("{STUDENT_PREFIX} {}", self.index)
    }
}

impl fmt::Display for StudentLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{STUDENT_PREFIX} {}", self.index)?;
        for choice in &self.choices {
            write!(f, ",{choice}")?;
        }
        Ok(())
    }
}

/// A student's ranked choices as read back from a preferences file. The first
/// entry is the most preferred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preference {
    pub student: String,
    pub choices: Vec<usize>,
}

impl Preference {
    pub fn new(student: impl Into<String>, choices: Vec<usize>) -> Self {
        Preference {
            student: student.into(),
            choices,
        }
    }

    /// 0-based rank of `choice` in this student's list.
    pub fn rank_of(&self, choice: usize) -> Option<usize> {
        self.choices.iter().position(|&c| c == choice)
    }
}

impl From<StudentLine> for Preference {
    fn from(line: StudentLine) -> Self {
        Preference {
            student: line.name(),
            choices: line.choices,
        }
    }
}

pub type Preferences = Vec<Preference>;
