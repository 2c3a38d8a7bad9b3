use std::{
    collections::{HashMap, HashSet},
    ops::Range,
};

use super::{SnpRow, SnpTable};

/// Sliding window significance filter
///
/// One window `[p, p + window_size - 1]` is anchored at every SNP position
/// `p`. A window passes when at least `min_depth` of its SNPs have
/// `log_pvalue >= threshold`, and then all of its SNPs are kept.
#[derive(Debug, Clone, Copy)]
pub struct WindowFilter {
    window_size: i64,
    min_depth: i64,
    threshold: f64,
}

/// Rows grouped by chromosome (first appearance order), each group stably
/// sorted by position
fn group_by_chrom(table: &SnpTable) -> Vec<(&str, Vec<&SnpRow>)> {
    let mut order = Vec::new();
    let mut hash: HashMap<&str, Vec<&SnpRow>> = HashMap::new();
    for row in table.rows() {
        let chrom = table.chrom(row);
        hash.entry(chrom)
            .or_insert_with(|| {
                order.push(chrom);
                Vec::new()
            })
            .push(row)
    }
    order
        .into_iter()
        .map(|chrom| {
            let mut rows = hash.remove(chrom).unwrap_or_default();
            rows.sort_by_key(|r| r.position());
            (chrom, rows)
        })
        .collect()
}

impl WindowFilter {
    pub fn new(window_size: i64, min_depth: i64, threshold: f64) -> Self {
        Self {
            window_size,
            min_depth,
            threshold,
        }
    }

    /// Last position covered by the window anchored at `start`
    fn window_end(&self, start: i64) -> i64 {
        start.saturating_add(self.window_size.saturating_sub(1))
    }

    /// Index ranges into `rows` (sorted by position) of the windows that pass,
    /// in anchor order. A window with non-positive size selects nothing.
    pub fn passing_windows(&self, rows: &[&SnpRow]) -> Vec<Range<usize>> {
        let mut windows = Vec::new();
        for anchor in rows {
            let start = anchor.position();
            let end = self.window_end(start);
            let lo = rows.partition_point(|r| r.position() < start);
            let hi = rows.partition_point(|r| r.position() <= end).max(lo);
            let n_sig = rows[lo..hi]
                .iter()
                .filter(|r| r.log_pvalue() >= self.threshold)
                .count();
            if n_sig as i64 >= self.min_depth {
                trace!("Window {start}-{end}: {} SNPs, {n_sig} significant", hi - lo);
                windows.push(lo..hi)
            }
        }
        windows
    }

    /// Union of all passing windows over all chromosomes, without duplicate
    /// rows. The first occurrence of a row fixes its place in the output.
    pub fn apply<'a>(&self, table: &'a SnpTable) -> Vec<&'a SnpRow> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for (chrom, rows) in group_by_chrom(table) {
            let windows = self.passing_windows(&rows);
            let n0 = out.len();
            for w in windows.iter() {
                for &row in &rows[w.clone()] {
                    if seen.insert(table.key(row)) {
                        out.push(row)
                    }
                }
            }
            debug!(
                "Chromosome {chrom}: {} SNPs, {} windows passed, {} SNPs kept",
                rows.len(),
                windows.len(),
                out.len() - n0
            );
        }
        out
    }
}
