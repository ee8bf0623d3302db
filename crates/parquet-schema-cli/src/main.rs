mod cli;
mod commands;
mod config;
#[allow(unused_assignments)]
mod diagnostic;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::error::ExitCode;
use crate::output::OutputContext;

/// Install the stderr subscriber.
///
/// `-v` flags pick the level (warn, info, debug, trace); without them
/// `RUST_LOG` applies, falling back to warn. `-q` limits output to errors.
fn init_tracing(output: &OutputContext) {
    let level = match (output.quiet, output.verbose) {
        (true, _) => Some("error"),
        (false, 0) => None,
        (false, 1) => Some("info"),
        (false, 2) => Some("debug"),
        (false, _) => Some("trace"),
    };

    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(output.use_color)
        .with_target(false)
        .init();
}

fn main() {
    let cli = cli::Cli::parse();
    let output = OutputContext::from_global(&cli.global);
    init_tracing(&output);

    if !output.use_color {
        let _ = miette::set_hook(Box::new(|_| {
            Box::new(miette::MietteHandlerOpts::new().color(false).build())
        }));
    }

    match commands::print::run(&cli, &output) {
        Ok(()) => std::process::exit(ExitCode::Success as i32),
        Err(e) => {
            output.print_error(&e);
            std::process::exit(e.exit_code() as i32);
        }
    }
}
