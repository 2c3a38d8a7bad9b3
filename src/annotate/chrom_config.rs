use std::collections::HashMap;

use super::non_empty_lines;

/// One line of the chromosome configuration table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromConfig<'a> {
    chrom_id: &'a str,
    display_name: &'a str,
    length: &'a str,
    type_code: &'a str,
    color: &'a str,
}

impl<'a> ChromConfig<'a> {
    /// Unlike the marker table, empty fields are kept: `a\t\tb` has three
    /// columns here.
    pub fn from_line(line: &'a str, line_no: usize) -> anyhow::Result<Self> {
        let fd: Vec<_> = line.split('\t').take(5).collect();
        if fd.len() < 5 {
            return Err(anyhow!(
                "Illegal short line {line_no} in config file: {line} (expected 5 columns, found {})",
                fd.len()
            ));
        }
        Ok(Self {
            chrom_id: fd[0],
            display_name: fd[1],
            length: fd[2],
            type_code: fd[3],
            color: fd[4],
        })
    }

    pub fn chrom_id(&self) -> &'a str {
        self.chrom_id
    }

    /// Read for completeness; the output table has no column for it.
    pub fn display_name(&self) -> &'a str {
        self.display_name
    }

    pub fn length(&self) -> &'a str {
        self.length
    }

    pub fn type_code(&self) -> &'a str {
        self.type_code
    }

    pub fn color(&self) -> &'a str {
        self.color
    }
}

/// Config entries grouped by chromosome id
///
/// Duplicate ids are kept; entries for one id stay in file order.
#[derive(Default, Debug)]
pub struct ConfigIndex<'a> {
    hash: HashMap<&'a str, Vec<ChromConfig<'a>>>,
    n_entries: usize,
}

impl<'a> ConfigIndex<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, cc: ChromConfig<'a>) {
        trace!(
            "Config entry {} ({}): type {}, color {}, length {}",
            cc.chrom_id,
            cc.display_name,
            cc.type_code,
            cc.color,
            cc.length
        );
        let v = self.hash.entry(cc.chrom_id).or_default();
        if !v.is_empty() {
            debug!("Duplicate config entry for {}", cc.chrom_id)
        }
        v.push(cc);
        self.n_entries += 1;
    }

    /// All entries matching `chrom` exactly (case sensitive, untrimmed)
    pub fn get(&self, chrom: &str) -> &[ChromConfig<'a>] {
        self.hash.get(chrom).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.n_entries
    }

    pub fn is_empty(&self) -> bool {
        self.n_entries == 0
    }

    pub fn from_text(text: &'a str) -> anyhow::Result<Self> {
        let mut index = Self::new();
        for (line_no, line) in non_empty_lines(text) {
            index.add(ChromConfig::from_line(line, line_no)?);
        }
        debug!(
            "{} config entries read in for {} chromosomes",
            index.len(),
            index.hash.len()
        );
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_empty_fields() {
        let cc = ChromConfig::from_line("chr1\t\t100\tA\tred", 1).unwrap();
        assert_eq!(cc.display_name(), "");
        assert_eq!(cc.length(), "100");
        assert_eq!(cc.type_code(), "A");
        assert_eq!(cc.color(), "red");
    }

    #[test]
    fn short_line_fails() {
        let e = ChromConfig::from_line("chr1\tChr1\t100\tA", 4).unwrap_err();
        assert!(e.to_string().contains("line 4"));
    }

    #[test]
    fn duplicates_kept_in_file_order() {
        let text = "c1\tC1\t10\tA\tred\nc2\tC2\t20\tB\tblue\n\nc1\tC1b\t30\tC\tgreen\n";
        let index = ConfigIndex::from_text(text).unwrap();
        assert_eq!(index.len(), 3);
        let colors: Vec<_> = index.get("c1").iter().map(|c| c.color()).collect();
        assert_eq!(colors, ["red", "green"]);
        assert!(index.get("C1").is_empty());
        assert!(index.get("c3").is_empty());
    }
}
