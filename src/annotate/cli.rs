use clap::error::ErrorKind;

use crate::{cli_args::normalize_args, log_utils::init_log};

mod cli_model;
mod config;

pub use config::Config;

/// Text printed by `-example`: two config lines and the field conventions
pub const EXAMPLE: &str = "\n\ncw_chr01\t1\tA\tred\t54244566\ncw_chr02\t2\tB\tblack\t34204566\n\ncolor: red, green, blue, etc...\ntype: A(dot), B(triangle), C(square)\n\n";

const LEGACY_OPTIONS: &[(&str, &str)] = &[
    ("-input", "input"),
    ("-config", "config"),
    ("-example", "example"),
];

pub fn handle_cli() -> anyhow::Result<Config> {
    let args = normalize_args(std::env::args_os(), LEGACY_OPTIONS);
    let m = cli_model::cli_model().get_matches_from(args);

    init_log(&m)?;

    // The example is shown even when the run then fails for missing files
    if m.get_flag("example") {
        println!("{EXAMPLE}");
    }

    if !(m.contains_id("input") && m.contains_id("config")) {
        cli_model::cli_model()
            .error(
                ErrorKind::MissingRequiredArgument,
                "Both -input and -config are required.",
            )
            .exit()
    }

    Config::from_matches(&m)
}
