use crate::{cli_args::normalize_args, log_utils::init_log};

mod cli_model;
mod config;

pub use config::Config;

const LEGACY_OPTIONS: &[(&str, &str)] = &[("-lp", "log_pvalue")];

pub fn handle_cli() -> anyhow::Result<Config> {
    let args = normalize_args(std::env::args_os(), LEGACY_OPTIONS);
    let m = cli_model::cli_model().get_matches_from(args);
    init_log(&m)?;
    Config::from_matches(&m)
}
