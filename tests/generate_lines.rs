use proptest::prelude::*;
use std::collections::HashSet;
use std::num::NonZeroUsize;
use student_choices::{
    check_preferences, create_rng, parse_count, read_preferences, write_lines, ChoiceError,
    Generator,
};

fn render(n: usize, seed: u64) -> String {
    let mut out = Vec::new();
    let n = NonZeroUsize::new(n).unwrap();
    let written = write_lines(&mut out, n, create_rng(Some(seed))).unwrap();
    assert_eq!(written, n.get());
    String::from_utf8(out).unwrap()
}

#[test]
fn three_students_example() {
    let text = render(3, 2024);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    for (i, line) in lines.iter().enumerate() {
        let head = format!("Student {}", i + 1);
        assert!(line == &head || line.starts_with(&format!("{head},")), "{line}");
    }
    assert!(text.ends_with('\n'));
}

#[test]
fn same_seed_same_output() {
    assert_eq!(render(25, 99), render(25, 99));
}

#[test]
fn different_seeds_differ() {
    assert_ne!(render(40, 1), render(40, 2));
}

#[test]
fn lengths_cover_the_whole_range() {
    // n = 2: over many students both the empty and the full list show up.
    let n = NonZeroUsize::new(2).unwrap();
    let mut lengths = HashSet::new();
    for seed in 0..200 {
        for line in Generator::new(n, create_rng(Some(seed))) {
            lengths.insert(line.choices.len());
        }
    }
    assert_eq!(lengths, HashSet::from([0, 1, 2]));
}

#[test]
fn invalid_counts_are_rejected() {
    for bad in ["0", "-3", "three", "2.0", ""] {
        assert!(matches!(parse_count(bad), Err(ChoiceError::InvalidArgument(_))));
    }
}

proptest! {
    #[test]
    fn every_line_is_well_formed(n in 1usize..60, seed in any::<u64>()) {
        let text = render(n, seed);
        let lines: Vec<&str> = text.lines().collect();
        prop_assert_eq!(lines.len(), n);

        for (i, line) in lines.iter().enumerate() {
            let mut fields = line.split(',');
            let name = fields.next().unwrap();
            let expected = format!("Student {}", i + 1);
            prop_assert_eq!(name, expected.as_str());

            let choices: Vec<usize> = fields.map(|f| f.parse().unwrap()).collect();
            prop_assert!(choices.len() <= n);
            prop_assert!(choices.iter().all(|&c| (1..=n).contains(&c)));
            let distinct: HashSet<_> = choices.iter().collect();
            prop_assert_eq!(distinct.len(), choices.len());
        }
    }

    #[test]
    fn generated_output_passes_the_checker(n in 1usize..40, seed in any::<u64>()) {
        let text = render(n, seed);
        let prefs = read_preferences(text.as_bytes()).unwrap();
        prop_assert_eq!(prefs.len(), n);
        prop_assert!(check_preferences(&prefs, n).is_ok());
    }
}
