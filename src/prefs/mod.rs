pub mod check;
pub mod student;

pub use check::check_preferences;
pub use student::{Preference, Preferences, StudentLine, STUDENT_PREFIX};
