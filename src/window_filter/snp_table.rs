use std::{
    collections::HashSet,
    io::{Read, Write},
    path::Path,
};

use anyhow::Context;
use compress_io::compress::CompressIo;
use csv::{QuoteStyle, StringRecord};

/// Columns every SNP table must carry; together they identify a row
pub const SNP_COLUMNS: [&str; 7] = [
    "SNP",
    "chromosome",
    "position",
    "pvalue",
    "category",
    "color_category",
    "length",
];

const CHROM: usize = 1;
const POS: usize = 2;
const PVAL: usize = 3;

// Missing value markers, read as NaN
const NA_STRINGS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[derive(Debug, Clone)]
pub struct SnpRow {
    record: StringRecord,
    position: i64,
    pvalue: f64,
    log_pvalue: f64,
}

impl SnpRow {
    pub fn position(&self) -> i64 {
        self.position
    }

    pub fn pvalue(&self) -> f64 {
        self.pvalue
    }

    /// -log10(pvalue). Non-positive p-values give +inf or NaN.
    pub fn log_pvalue(&self) -> f64 {
        self.log_pvalue
    }

    pub fn record(&self) -> &StringRecord {
        &self.record
    }
}

/// A column value that compares as a number when it parses as one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum FieldKey<'a> {
    Num(u64),
    Text(&'a str),
}

// 0.0 and -0.0 are the same value
fn float_bits(x: f64) -> u64 {
    if x == 0.0 { 0f64.to_bits() } else { x.to_bits() }
}

impl<'a> FieldKey<'a> {
    fn new(s: &'a str) -> Self {
        match s.trim().parse::<f64>() {
            Ok(x) => Self::Num(float_bits(x)),
            Err(_) => Self::Text(s),
        }
    }
}

/// Row identity: position, pvalue and (when numeric) length compare as
/// numbers, the rest as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnpKey<'a> {
    text: [&'a str; 4],
    position: i64,
    pvalue: u64,
    length: FieldKey<'a>,
}

/// A tab separated SNP table held in memory
///
/// Every column of the input is kept so that output rows are written back
/// exactly as read.
#[derive(Debug)]
pub struct SnpTable {
    header: StringRecord,
    cols: [usize; 7],
    rows: Vec<SnpRow>,
}

fn parse_pvalue(s: &str) -> Option<f64> {
    let s = s.trim();
    if NA_STRINGS.contains(&s) {
        Some(f64::NAN)
    } else {
        s.parse::<f64>().ok()
    }
}

impl SnpTable {
    pub fn from_reader<R: Read>(rdr: R) -> anyhow::Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .quoting(false)
            .from_reader(rdr);

        let header = rdr
            .headers()
            .with_context(|| "Error reading table header")?
            .clone();

        let mut cols = [0; 7];
        for (ix, name) in cols.iter_mut().zip(SNP_COLUMNS) {
            *ix = header
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| anyhow!("Column {name} missing from input table"))?;
        }

        let mut rows = Vec::new();
        for (i, res) in rdr.records().enumerate() {
            let record = res?;
            // Header is line 1
            let line = i + 2;
            let pos_str = &record[cols[POS]];
            let position = pos_str.trim().parse::<i64>().map_err(|e| {
                anyhow!("Could not parse position '{pos_str}' at line {line}: {e}")
            })?;
            let pval_str = &record[cols[PVAL]];
            let pvalue = parse_pvalue(pval_str)
                .ok_or_else(|| anyhow!("Could not parse pvalue '{pval_str}' at line {line}"))?;
            rows.push(SnpRow {
                record,
                position,
                pvalue,
                log_pvalue: -pvalue.log10(),
            })
        }
        debug!("{} rows read in", rows.len());
        Ok(Self { header, cols, rows })
    }

    pub fn from_path<S: AsRef<Path>>(file: S) -> anyhow::Result<Self> {
        let file = file.as_ref();
        let rdr = CompressIo::new()
            .path(file)
            .bufreader()
            .with_context(|| format!("Could not open {} for input", file.display()))?;
        debug!("Opened {} for input", file.display());
        Self::from_reader(rdr).with_context(|| format!("Error reading {}", file.display()))
    }

    pub fn header(&self) -> &StringRecord {
        &self.header
    }

    pub fn rows(&self) -> &[SnpRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn chrom<'a>(&self, row: &'a SnpRow) -> &'a str {
        &row.record[self.cols[CHROM]]
    }

    pub fn n_chroms(&self) -> usize {
        self.rows
            .iter()
            .map(|r| self.chrom(r))
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn key<'a>(&self, row: &'a SnpRow) -> SnpKey<'a> {
        let c = &self.cols;
        let r = &row.record;
        SnpKey {
            text: [&r[c[0]], &r[c[1]], &r[c[4]], &r[c[5]]],
            position: row.position(),
            pvalue: float_bits(row.pvalue()),
            length: FieldKey::new(&r[c[6]]),
        }
    }

    /// Write the header and `rows`, returning the number of rows written
    pub fn write<'a, W, I>(&self, wrt: W, rows: I) -> anyhow::Result<usize>
    where
        W: Write,
        I: IntoIterator<Item = &'a SnpRow>,
    {
        let mut wrt = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(QuoteStyle::Never)
            .from_writer(wrt);
        wrt.write_record(&self.header)?;
        let mut n = 0;
        for row in rows {
            wrt.write_record(&row.record)?;
            n += 1;
        }
        wrt.flush()?;
        Ok(n)
    }

    pub fn write_path<'a, S, I>(&self, file: S, rows: I) -> anyhow::Result<usize>
    where
        S: AsRef<Path>,
        I: IntoIterator<Item = &'a SnpRow>,
    {
        let file = file.as_ref();
        let f = std::fs::File::create(file)
            .with_context(|| format!("Could not open {} for output", file.display()))?;
        let n = self.write(std::io::BufWriter::new(f), rows)?;
        debug!("{n} rows written to {}", file.display());
        Ok(n)
    }
}
