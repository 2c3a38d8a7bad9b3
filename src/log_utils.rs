use std::fmt;

use clap::{builder::PossibleValue, Arg, ArgMatches, ValueEnum, value_parser};

/// LogLevel
///
/// Represents minimum level of messages that will be logged
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error = 0,
    Warn,
    Info,
    Debug,
    Trace,
    None,
}

impl ValueEnum for LogLevel {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Error,
            Self::Warn,
            Self::Info,
            Self::Debug,
            Self::Trace,
            Self::None,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.as_str()))
    }
}

impl LogLevel {
    fn level(&self) -> usize {
        *self as usize
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
            Self::None => "none",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn get_level(&self) -> usize {
        if self.is_none() { 0 } else { self.level() }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The `-l/--loglevel` option shared by both tools
pub fn loglevel_arg() -> Arg {
    Arg::new("loglevel")
        .short('l')
        .long("loglevel")
        .value_name("LOGLEVEL")
        .value_parser(value_parser!(LogLevel))
        .ignore_case(true)
        .default_value("info")
        .help("Set log level")
}

/// Initialize logging from command line arguments
///
/// Messages go to stderr so that stdout stays reserved for table output.
pub fn init_log(m: &ArgMatches) -> anyhow::Result<()> {
    let verbose = m
        .get_one::<LogLevel>("loglevel")
        .copied()
        .unwrap_or(LogLevel::Info);

    stderrlog::new()
        .quiet(verbose.is_none())
        .verbosity(verbose.get_level())
        .init()
        .map_err(|e| anyhow!("Could not initialize logging: {e}"))
}
