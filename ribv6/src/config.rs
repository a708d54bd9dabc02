use std::path::PathBuf;

use clap::Parser;
use ipnet::Ipv6Net;

use crate::logging::{LogFormatType, LogOutputType, LoggingConfig, logging_config_from_args};

pub const DEFAULT_INPUT: &str = "input/ipv6.txt";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Arg {
    #[arg(short, long, help = "Route input file", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    #[arg(
        short,
        long,
        help = "Walk the routes at or below PREFIX (repeatable); defaults to the first route read"
    )]
    pub subtree: Vec<Ipv6Net>,

    #[arg(short, long, help = "Display routes as JSON")]
    pub json: bool,

    #[arg(long, value_enum, default_value_t = LogOutputType::Stderr, help = "Log output")]
    pub log_output: LogOutputType,

    #[arg(long, help = "Log file path when --log-output=file")]
    pub log_file: Option<String>,

    #[arg(long, value_enum, default_value_t = LogFormatType::Terminal, help = "Log format")]
    pub log_format: LogFormatType,
}

impl Arg {
    pub fn logging_config(&self) -> LoggingConfig {
        logging_config_from_args(&self.log_output, &self.log_file, &self.log_format)
    }
}
