//! Annotator
//!
//! Joins a marker table (chromosome, position, marker, p-value) against a
//! chromosome configuration table and writes the plotting table to stdout.

mod chrom_config;
mod cli;
mod join;
mod marker;

pub use chrom_config::{ChromConfig, ConfigIndex};
pub use cli::{handle_cli, Config, EXAMPLE};
pub use join::{annotate, process, HEADER};
pub use marker::Marker;

/// Split into lines (`\n` or `\r\n`) and drop empty lines, keeping the
/// 1-based line number of each remaining line in the original text.
pub(crate) fn non_empty_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .enumerate()
        .filter(|(_, l)| !l.is_empty())
        .map(|(i, l)| (i + 1, l))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_dropped() {
        let v: Vec<_> = non_empty_lines("a\n\nb\n").collect();
        assert_eq!(v, [(1, "a"), (3, "b")]);
    }

    #[test]
    fn crlf_line_endings() {
        let v: Vec<_> = non_empty_lines("a\tb\r\n\r\nc\r\n").collect();
        assert_eq!(v, [(1, "a\tb"), (3, "c")]);
    }
}
