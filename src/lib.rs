pub mod assign;
pub mod config;
pub mod error;
pub mod logging;
pub mod prefs;
pub mod utils;

pub use assign::{assign, AssignOptions, Assignment, Placement};
pub use config::Settings;
pub use error::{ChoiceError, Result};
pub use prefs::{check_preferences, Preference, Preferences, StudentLine};
pub use utils::{
	permutation::{create_rng, RandomPermutation},
	random_lines::{generate_line, parse_count, write_lines, Generator},
	serialization::{load_preferences, open_output, read_preferences},
};
