/// A retained line of the marker table
///
/// Fields borrow from the input text and are written back verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker<'a> {
    chrom: &'a str,
    position: &'a str,
    name: &'a str,
    p_value: &'a str,
}

impl<'a> Marker<'a> {
    /// Parse one line of the marker table.
    ///
    /// Runs of tabs collapse. Lines with fewer than two fields are skipped
    /// (`Ok(None)`), lines with two or three fields are an error, and fields
    /// past the fourth are ignored.
    pub fn from_line(line: &'a str, line_no: usize) -> anyhow::Result<Option<Self>> {
        if line.len() < 2 {
            trace!("Skipping input line {line_no}: too short");
            return Ok(None);
        }
        let fd: Vec<_> = line.split('\t').filter(|s| !s.is_empty()).take(4).collect();
        match fd.len() {
            0 | 1 => {
                trace!("Skipping input line {line_no}: fewer than 2 fields");
                Ok(None)
            }
            2 | 3 => Err(anyhow!(
                "Illegal short line {line_no} in input file: {line} (expected 4 columns, found {})",
                fd.len()
            )),
            _ => Ok(Some(Self {
                chrom: fd[0],
                position: fd[1],
                name: fd[2],
                p_value: fd[3],
            })),
        }
    }

    pub fn chrom(&self) -> &'a str {
        self.chrom
    }

    pub fn position(&self) -> &'a str {
        self.position
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn p_value(&self) -> &'a str {
        self.p_value
    }
}
