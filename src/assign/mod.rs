pub mod hungarian;
pub mod report;

pub use hungarian::{kuhn_munkres, Matrix};
pub use report::{Assignment, Placement};

use crate::error::{ChoiceError, Result};
use crate::prefs::{check_preferences, Preference};
use tracing::{debug, info};

pub const DEFAULT_MULT: i64 = 4;
pub const DEFAULT_POWER: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignOptions {
    pub mult: i64,
    pub power: u32,
    /// Defaults to the number of students.
    pub num_choices: Option<usize>,
}

impl Default for AssignOptions {
    fn default() -> Self {
        AssignOptions {
            mult: DEFAULT_MULT,
            power: DEFAULT_POWER,
            num_choices: None,
        }
    }
}

/// Satisfaction of getting the choice at 0-based `rank` out of `num_choices`:
/// `((num_choices - rank) * mult) ^ power`.
pub fn rank_weight(rank: usize, num_choices: usize, mult: i64, power: u32) -> Result<i64> {
    let overflow = || ChoiceError::WeightOverflow { rank: rank + 1 };
    let base = i64::try_from(num_choices.saturating_sub(rank)).map_err(|_| overflow())?;
    base.checked_mul(mult)
        .and_then(|w| w.checked_pow(power))
        .ok_or_else(overflow)
}

pub fn weight_matrix(
    prefs: &[Preference],
    num_choices: usize,
    options: &AssignOptions,
) -> Result<Matrix> {
    let mut weights = Matrix::new(prefs.len(), num_choices, 0);
    let mut largest = (0u64, 0usize);
    for (i, pref) in prefs.iter().enumerate() {
        for (rank, &choice) in pref.choices.iter().enumerate() {
            let weight = rank_weight(rank, num_choices, options.mult, options.power)?;
            if weight.unsigned_abs() > largest.0 {
                largest = (weight.unsigned_abs(), rank);
            }
            weights[(i, choice - 1)] = weight;
        }
    }

    // Solver potentials and the total stay within 2 * rows * |max weight|.
    let (max_weight, rank) = largest;
    let headroom = (prefs.len() as u64).saturating_mul(2).saturating_add(2);
    match max_weight.checked_mul(headroom) {
        Some(bound) if bound <= i64::MAX as u64 => Ok(weights),
        _ => Err(ChoiceError::WeightOverflow { rank: rank + 1 }),
    }
}

/// Assigns every student a distinct choice, maximizing total satisfaction.
pub fn assign(prefs: &[Preference], options: &AssignOptions) -> Result<Assignment> {
    let num_choices = options.num_choices.unwrap_or(prefs.len());
    if prefs.len() > num_choices {
        return Err(ChoiceError::TooManyStudents {
            students: prefs.len(),
            choices: num_choices,
        });
    }
    check_preferences(prefs, num_choices)?;

    let weights = weight_matrix(prefs, num_choices, options)?;
    debug!(students = prefs.len(), num_choices, "solving assignment");
    let (total, columns) = kuhn_munkres(&weights);

    let placements = prefs
        .iter()
        .zip(columns)
        .map(|(pref, column)| {
            let choice = column + 1;
            Placement {
                student: pref.student.clone(),
                choice,
                rank: pref.rank_of(choice).map(|r| r + 1),
            }
        })
        .collect();

    let assignment = Assignment::new(placements, total);
    info!(
        total_satisfaction = assignment.total_satisfaction,
        unranked = assignment.unranked,
        "assignment solved"
    );
    Ok(assignment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_follow_rank() {
        assert_eq!(rank_weight(0, 3, 4, 1).unwrap(), 12);
        assert_eq!(rank_weight(2, 3, 4, 1).unwrap(), 4);
        assert_eq!(rank_weight(1, 3, 1, 2).unwrap(), 4);
    }

    #[test]
    fn weight_overflow_is_an_error() {
        assert!(matches!(
            rank_weight(0, 10, 1_000, 10),
            Err(ChoiceError::WeightOverflow { rank: 1 })
        ));
    }

    #[test]
    fn solver_headroom_overflow_is_an_error() {
        // 3 * 2^61 fits on its own, but not once the solver sums and
        // offsets it.
        let prefs = vec![
            Preference::new("Ada", vec![1]),
            Preference::new("Bob", vec![2]),
            Preference::new("Cy", vec![3]),
        ];
        let options = AssignOptions {
            mult: 1 << 61,
            ..AssignOptions::default()
        };
        assert!(rank_weight(0, 3, 1 << 61, 1).is_ok());
        assert!(matches!(
            assign(&prefs, &options),
            Err(ChoiceError::WeightOverflow { rank: 1 })
        ));
    }

    #[test]
    fn large_weights_within_headroom_are_solved() {
        let prefs = vec![Preference::new("Ada", vec![2, 1]), Preference::new("Bob", vec![2])];
        let options = AssignOptions {
            mult: 1 << 58,
            ..AssignOptions::default()
        };
        let assignment = assign(&prefs, &options).unwrap();
        assert_eq!(assignment.total_satisfaction, (1 << 59) + (1 << 58));
    }

    #[test]
    fn unchecked_preferences_are_rejected() {
        let out_of_range = vec![
            Preference::new("Ada", vec![4]),
            Preference::new("Bob", vec![]),
            Preference::new("Cy", vec![]),
        ];
        assert!(matches!(
            assign(&out_of_range, &AssignOptions::default()),
            Err(ChoiceError::ChoiceOutOfRange { choice: 4, max: 3, .. })
        ));

        let zero = vec![Preference::new("Ada", vec![0])];
        assert!(matches!(
            assign(&zero, &AssignOptions::default()),
            Err(ChoiceError::ChoiceOutOfRange { choice: 0, .. })
        ));
    }

    #[test]
    fn unranked_choices_weigh_nothing() {
        let prefs = vec![Preference::new("Ada", vec![2])];
        let matrix = weight_matrix(&prefs, 3, &AssignOptions::default()).unwrap();
        assert_eq!(matrix[(0, 0)], 0);
        assert_eq!(matrix[(0, 1)], 12);
        assert_eq!(matrix[(0, 2)], 0);
    }
}
