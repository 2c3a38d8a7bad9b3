use std::path::{Path, PathBuf};

use clap::ArgMatches;

pub struct Config {
    input: PathBuf,
    output: PathBuf,
    window_size: i64,
    min_depth: i64,
    log_pvalue: f64,
}

impl Config {
    pub fn from_matches(m: &ArgMatches) -> anyhow::Result<Self> {
        let input = m
            .try_get_one::<PathBuf>("input")?
            .cloned()
            .ok_or_else(|| anyhow!("Missing input file"))?;
        let output = m
            .try_get_one::<PathBuf>("output")?
            .cloned()
            .ok_or_else(|| anyhow!("Missing output file"))?;
        let window_size = *m
            .try_get_one::<i64>("window_size")?
            .ok_or_else(|| anyhow!("Missing window size"))?;
        let min_depth = *m
            .try_get_one::<i64>("depth")?
            .ok_or_else(|| anyhow!("Missing depth"))?;
        let log_pvalue = *m
            .try_get_one::<f64>("log_pvalue")?
            .ok_or_else(|| anyhow!("Missing log p-value threshold"))?;

        if window_size < 1 {
            warn!("Window size {window_size} is not positive: windows will be empty")
        }
        debug!(
            "Window size: {window_size}, minimum depth: {min_depth}, log p-value threshold: {log_pvalue}"
        );

        Ok(Self {
            input,
            output,
            window_size,
            min_depth,
            log_pvalue,
        })
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn window_size(&self) -> i64 {
        self.window_size
    }

    pub fn min_depth(&self) -> i64 {
        self.min_depth
    }

    pub fn log_pvalue(&self) -> f64 {
        self.log_pvalue
    }
}
