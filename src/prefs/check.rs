use crate::error::{ChoiceError, Result};
use crate::prefs::student::Preference;
use fxhash::FxHashSet;
use tracing::debug;

/// Rejects duplicate students, out-of-range choices and choices a student
/// listed twice. The first problem found is returned.
pub fn check_preferences(prefs: &[Preference], num_choices: usize) -> Result<()> {
    let acceptable = 1..=num_choices;
    let mut seen_students = FxHashSet::default();

    for pref in prefs {
        if !seen_students.insert(pref.student.as_str()) {
            return Err(ChoiceError::DuplicateStudent(pref.student.clone()));
        }

        let mut seen_choices = FxHashSet::default();
        for &choice in &pref.choices {
            if !acceptable.contains(&choice) {
                return Err(ChoiceError::ChoiceOutOfRange {
                    student: pref.student.clone(),
                    choice,
                    max: num_choices,
                });
            }
            if !seen_choices.insert(choice) {
                return Err(ChoiceError::DuplicateChoice {
                    student: pref.student.clone(),
                    choice,
                });
            }
        }
    }

    debug!(students = prefs.len(), num_choices, "preferences checked");
    Ok(())
}
