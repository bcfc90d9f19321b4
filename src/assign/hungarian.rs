use std::ops::{Index, IndexMut};

/// Dense row-major weight matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    pub rows: usize,
    pub columns: usize,
    data: Vec<i64>,
}

impl Matrix {
    pub fn new(rows: usize, columns: usize, value: i64) -> Self {
        Matrix {
            rows,
            columns,
            data: vec![value; rows * columns],
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = i64;

    fn index(&self, (row, column): (usize, usize)) -> &i64 {
        debug_assert!(column < self.columns, "column {column} out of range");
        &self.data[row * self.columns + column]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut i64 {
        debug_assert!(column < self.columns, "column {column} out of range");
        &mut self.data[row * self.columns + column]
    }
}

/// Maximum-weight assignment of every row to a distinct column.
///
/// Requires `rows <= columns`. Returns the total weight and, for each row, the
/// column it was assigned. Runs the shortest augmenting path form of the
/// Hungarian algorithm on negated weights, in `O(rows² · columns)`.
pub fn kuhn_munkres(weights: &Matrix) -> (i64, Vec<usize>) {
    let n = weights.rows;
    let m = weights.columns;
    assert!(n <= m, "kuhn_munkres needs at least as many columns as rows");
    if n == 0 {
        return (0, Vec::new());
    }

    // 1-based potentials; column 0 is a virtual column holding the row being
    // inserted.
    let cost = |i: usize, j: usize| -weights[(i - 1, j - 1)];
    let mut u = vec![0i64; n + 1];
    let mut v = vec![0i64; m + 1];
    let mut owner = vec![0usize; m + 1];
    let mut way = vec![0usize; m + 1];

    for i in 1..=n {
        owner[0] = i;
        let mut j0 = 0usize;
        let mut min_slack = vec![i64::MAX; m + 1];
        let mut used = vec![false; m + 1];

        loop {
            used[j0] = true;
            let i0 = owner[j0];
            let mut delta = i64::MAX;
            let mut j1 = 0usize;

            for j in 1..=m {
                if used[j] {
                    continue;
                }
                let slack = cost(i0, j) - u[i0] - v[j];
                if slack < min_slack[j] {
                    min_slack[j] = slack;
                    way[j] = j0;
                }
                if min_slack[j] < delta {
                    delta = min_slack[j];
                    j1 = j;
                }
            }

            for j in 0..=m {
                if used[j] {
                    u[owner[j]] += delta;
                    v[j] -= delta;
                } else {
                    min_slack[j] -= delta;
                }
            }

            j0 = j1;
            if owner[j0] == 0 {
                break;
            }
        }

        // augment along the alternating path
        loop {
            let j1 = way[j0];
            owner[j0] = owner[j1];
            j0 = j1;
            if j0 == 0 {
                break;
            }
        }
    }

    let mut assignment = vec![0usize; n];
    for j in 1..=m {
        if owner[j] != 0 {
            assignment[owner[j] - 1] = j - 1;
        }
    }
    let total = assignment
        .iter()
        .enumerate()
        .map(|(row, &column)| weights[(row, column)])
        .sum();

    (total, assignment)
}
