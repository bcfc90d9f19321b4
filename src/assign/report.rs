use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub student: String,
    /// 1-based choice identifier.
    pub choice: usize,
    /// 1-based rank of `choice` in the student's list, `None` when unranked.
    pub rank: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub placements: Vec<Placement>,
    pub total_satisfaction: i64,
    pub ranks: BTreeMap<usize, usize>,
    pub unranked: usize,
}

impl Assignment {
    pub fn new(placements: Vec<Placement>, total_satisfaction: i64) -> Self {
        let mut ranks = BTreeMap::new();
        let mut unranked = 0;
        for placement in &placements {
            match placement.rank {
                Some(rank) => *ranks.entry(rank).or_insert(0) += 1,
                None => unranked += 1,
            }
        }
        Assignment {
            placements,
            total_satisfaction,
            ranks,
            unranked,
        }
    }

    /// `<student> -> <choice>` per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for p in &self.placements {
            let _ = writeln!(out, "{} -> {}", p.student, p.choice);
        }
        out
    }

    /// Adds the rank of every placement and a summary of the rank counts.
    pub fn render_verbose(&self) -> String {
        let mut out = String::new();
        for p in &self.placements {
            let rank = match p.rank {
                Some(rank) => format!("choice ranked {rank}"),
                None => String::from("unranked"),
            };
            let _ = writeln!(out, "{} -> {} ({})", p.student, p.choice, rank);
        }
        let _ = writeln!(out, "\nTotal satisfaction: {}\nRanks:", self.total_satisfaction);
        for (rank, count) in &self.ranks {
            let _ = writeln!(out, "  - rank {rank}: {count}");
        }
        if self.unranked != 0 {
            let _ = writeln!(out, "  - unranked: {}", self.unranked);
        }
        out
    }
}
