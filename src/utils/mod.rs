pub mod permutation;
pub mod random_lines;
pub mod serialization;
