use std::path::PathBuf;

use clap::{ArgAction, Args, Parser};

use crate::config::CONFIG_ENV;

/// Parse a Parquet schema text file and print its canonical form.
///
/// The schema is validated while parsing: MAP and LIST groups must have their
/// canonical nested shape, and logical annotations must fit the physical type.
#[derive(Parser, Debug)]
#[command(
    name = "parquet-schema",
    version,
    about = "Parse a Parquet schema text file and print its canonical form",
    after_help = "Exit status: 0 on success, 1 on read failure, 2 on invalid configuration, 3 on parse failure."
)]
pub struct Cli {
    /// Schema file to parse
    #[arg(short = 's', long = "schema", value_name = "PATH")]
    pub schema: Option<PathBuf>,

    /// Spaces per nesting level in the printed schema [default: 2]
    #[arg(long, value_name = "N")]
    pub indent: Option<usize>,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared by every invocation.
#[derive(Args, Debug)]
pub struct GlobalOpts {
    /// Configuration file path [env: PARQUET_SCHEMA_CONFIG]
    #[arg(short = 'c', long = "config", env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Output format: human (default), json
    #[arg(
        long,
        default_value = "human",
        value_parser = ["human", "json"]
    )]
    pub format: String,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-error output
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output [env: NO_COLOR]
    #[arg(
        long = "no-color",
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,
}
