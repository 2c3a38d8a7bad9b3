use std::path::PathBuf;

use clap::{Arg, Command, command, value_parser};

use crate::log_utils::loglevel_arg;

pub(super) fn cli_model() -> Command {
    command!("snp_window_filter")
        .about("Filter SNPs based on the density of significant variants in sliding windows")
        .next_help_heading("Input/Output")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .value_name("FILE")
                .help("Input file path"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .value_name("FILE")
                .help("Output file path"),
        )
        .next_help_heading("Filtering")
        .arg(
            Arg::new("window_size")
                .short('w')
                .long("window_size")
                .required(true)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64))
                .value_name("INT")
                .help("Window size"),
        )
        .arg(
            Arg::new("depth")
                .short('d')
                .long("depth")
                .required(true)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64))
                .value_name("INT")
                .help("Minimum depth for SNPs with log_pvalue >= log_pvalue_threshold"),
        )
        .arg(
            Arg::new("log_pvalue")
                .long("log_pvalue")
                .required(true)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(f64))
                .value_name("FLOAT")
                .help("Log P value threshold (-lp also accepted)"),
        )
        .arg(loglevel_arg())
}
