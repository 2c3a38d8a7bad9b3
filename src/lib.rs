//! Table preparation for GWAS Manhattan plots
//!
//! Two independent tools share this crate: [`annotate`] joins a marker table
//! against a chromosome config to produce the plotting table, and
//! [`window_filter`] keeps SNPs lying in windows dense in significant
//! variants.

#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;

pub mod annotate;
mod cli_args;
mod log_utils;
pub mod window_filter;

pub use log_utils::LogLevel;
