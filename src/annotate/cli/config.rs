use std::path::{Path, PathBuf};

use clap::ArgMatches;

pub struct Config {
    input: PathBuf,
    config: PathBuf,
}

impl Config {
    pub fn from_matches(m: &ArgMatches) -> anyhow::Result<Self> {
        let input = m
            .get_one::<PathBuf>("input")
            .cloned()
            .ok_or_else(|| anyhow!("Missing input file"))?;
        let config = m
            .get_one::<PathBuf>("config")
            .cloned()
            .ok_or_else(|| anyhow!("Missing config file"))?;
        debug!(
            "Input file: {}, config file: {}",
            input.display(),
            config.display()
        );

        Ok(Self { input, config })
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn config(&self) -> &Path {
        &self.config
    }
}
