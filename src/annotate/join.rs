use std::{
    io::{self, BufWriter, Read, Write},
    path::Path,
};

use anyhow::Context;
use compress_io::compress::CompressIo;

use super::{non_empty_lines, Config, ConfigIndex, Marker};

pub const HEADER: &str = "SNP\tchromosome\tposition\tpvalue\tcategory\tcolor_category\tlength";

fn read_text(file: &Path) -> anyhow::Result<String> {
    let mut rdr = CompressIo::new()
        .path(file)
        .bufreader()
        .with_context(|| format!("Could not open {} for input", file.display()))?;
    let mut s = String::new();
    rdr.read_to_string(&mut s)
        .with_context(|| format!("Error reading from {}", file.display()))?;
    debug!("Read {} bytes from {}", s.len(), file.display());
    Ok(s)
}

/// Write the header and one line per (marker, matching config entry) pair.
///
/// Output follows marker order, and for each marker, config order. Returns
/// the number of data lines written.
pub fn annotate<W: Write>(input: &str, config: &str, wrt: &mut W) -> anyhow::Result<usize> {
    writeln!(wrt, "{HEADER}")?;

    // Config is only parsed once a marker needs it
    let mut index: Option<ConfigIndex> = None;
    let mut n_markers = 0;
    let mut n_out = 0;

    for (line_no, line) in non_empty_lines(input) {
        let Some(marker) = Marker::from_line(line, line_no)? else {
            continue;
        };
        n_markers += 1;
        if index.is_none() {
            index = Some(ConfigIndex::from_text(config)?);
        }
        if let Some(idx) = index.as_ref() {
            for cc in idx.get(marker.chrom()) {
                writeln!(
                    wrt,
                    "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                    marker.name(),
                    cc.chrom_id(),
                    marker.position(),
                    marker.p_value(),
                    cc.type_code(),
                    cc.color(),
                    cc.length()
                )?;
                n_out += 1;
            }
        }
    }
    debug!("{n_markers} markers read in, {n_out} annotated lines written");
    Ok(n_out)
}

pub fn process(cfg: &Config) -> anyhow::Result<()> {
    let input = read_text(cfg.input())?;
    let config = read_text(cfg.config())?;

    let stdout = io::stdout();
    let mut wrt = BufWriter::new(stdout.lock());
    let n = annotate(&input, &config, &mut wrt)?;
    wrt.flush()?;
    info!("{n} annotated markers written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn run(input: &str, config: &str) -> anyhow::Result<(usize, String)> {
        let mut out = Vec::new();
        let n = annotate(input, config, &mut out)?;
        Ok((n, String::from_utf8(out).unwrap()))
    }

    #[test]
    fn single_match() {
        let (n, out) = run("cw_chr01\t1000\trs1\t0.01\n", "cw_chr01\tChr1\t50000000\tA\tred\n").unwrap();
        assert_eq!(n, 1);
        assert_eq!(
            out,
            format!("{HEADER}\nrs1\tcw_chr01\t1000\t0.01\tA\tred\t50000000\n")
        );
    }

    #[test]
    fn fan_out_in_config_order() {
        let input = "c1\t10\tm1\t0.5\nc2\t20\tm2\t0.1\nc1\t30\tm3\t0.2\n";
        let config = "c1\tC1\t100\tA\tred\nc2\tC2\t200\tB\tblue\nc1\tC1\t150\tC\tgreen\n";
        let (n, out) = run(input, config).unwrap();
        assert_eq!(n, 5);
        let lines: Vec<_> = out.lines().skip(1).collect();
        assert_eq!(
            lines,
            [
                "m1\tc1\t10\t0.5\tA\tred\t100",
                "m1\tc1\t10\t0.5\tC\tgreen\t150",
                "m2\tc2\t20\t0.1\tB\tblue\t200",
                "m3\tc1\t30\t0.2\tA\tred\t100",
                "m3\tc1\t30\t0.2\tC\tgreen\t150",
            ]
        );
    }

    #[test]
    fn unmatched_and_skipped_lines() {
        let input = "\nx\nchr9\nCHR1\t5\tm\t0.3\n";
        let (n, out) = run(input, "chr1\tC\t10\tA\tred\n").unwrap();
        assert_eq!(n, 0);
        assert_eq!(out, format!("{HEADER}\n"));
    }

    #[test]
    fn crlf_files() {
        let (n, out) = run("c1\t10\tm1\t0.5\r\n", "c1\tC1\t100\tA\tred\r\n\r\n").unwrap();
        assert_eq!(n, 1);
        assert_eq!(out, format!("{HEADER}\nm1\tc1\t10\t0.5\tA\tred\t100\n"));
    }

    #[test]
    fn short_marker_line_fails() {
        assert!(run("chr1\t5\tm\n", "chr1\tC\t10\tA\tred\n").is_err());
    }

    #[test]
    fn bad_config_only_fails_when_needed() {
        assert!(run("chr1\n", "chr1\tC\n").is_ok());
        assert!(run("chr1\t5\tm\t0.1\n", "chr1\tC\n").is_err());
    }

    #[test]
    fn reads_files() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "c1\t1\tm1\t0.1").unwrap();
        f.flush().unwrap();
        let s = read_text(f.path()).unwrap();
        assert_eq!(s, "c1\t1\tm1\t0.1\n");
        assert!(read_text(Path::new("/nonexistent/markers.txt")).is_err());
    }
}
