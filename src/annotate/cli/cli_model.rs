use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, command, value_parser};

use crate::log_utils::loglevel_arg;

pub(super) fn cli_model() -> Command {
    command!("gwas_annotate")
        .about("Annotate GWAS markers with chromosome categories, colors and lengths for plotting")
        .next_help_heading("Input")
        .arg(
            Arg::new("input")
                .long("input")
                .value_parser(value_parser!(PathBuf))
                .value_name("FILE")
                .help("Marker table: chromosome, position, marker, p-value (-input also accepted)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_parser(value_parser!(PathBuf))
                .value_name("FILE")
                .help("Chromosome config: id, name, length, type, color (-config also accepted)"),
        )
        .next_help_heading("Operation")
        .arg(
            Arg::new("example")
                .long("example")
                .action(ArgAction::SetTrue)
                .help("Show an example config file and the field conventions"),
        )
        .arg(loglevel_arg())
}
