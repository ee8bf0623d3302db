use console::Term;

use crate::cli::GlobalOpts;
use crate::diagnostic::render_diagnostic;
use crate::error::CliError;

/// Output format mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Output context derived from global flags.
///
/// Stdout carries only the result (canonical text or JSON); everything else
/// goes to stderr.
pub struct OutputContext {
    pub mode: OutputMode,
    pub verbose: u8,
    pub quiet: bool,
    pub use_color: bool,
}

impl OutputContext {
    /// Construct from global CLI options.
    pub fn from_global(global: &GlobalOpts) -> Self {
        let mode = match global.format.as_str() {
            "json" => OutputMode::Json,
            _ => OutputMode::Human,
        };

        let use_color = !global.no_color
            && std::env::var("TERM").map_or(true, |t| t != "dumb")
            && Term::stderr().is_term();

        Self {
            mode,
            verbose: global.verbose,
            quiet: global.quiet,
            use_color,
        }
    }

    /// Print a success message to stderr (human mode only, not in quiet mode).
    pub fn success(&self, msg: &str) {
        if self.quiet || self.mode != OutputMode::Human {
            return;
        }
        if self.use_color {
            let style = console::Style::new().green().bold();
            eprintln!("{} {}", style.apply_to("ok"), msg);
        } else {
            eprintln!("ok {msg}");
        }
    }

    /// Print an error using the appropriate output mode.
    ///
    /// Parse errors render as a miette diagnostic in human mode.
    pub fn print_error(&self, err: &CliError) {
        match (self.mode, err) {
            (
                OutputMode::Human,
                CliError::Parse {
                    error,
                    source_text,
                    file,
                },
            ) => {
                let report = render_diagnostic(error, source_text, &file.display().to_string());
                eprintln!("{report:?}");
            }
            (OutputMode::Human, _) => {
                if self.use_color {
                    let style = console::Style::new().red().bold();
                    eprintln!("{} {}", style.apply_to("error:"), err);
                } else {
                    eprintln!("error: {err}");
                }
            }
            (OutputMode::Json, _) => {
                let json = err.to_json();
                eprintln!("{json}");
            }
        }
    }

    /// Print canonical schema text to stdout as-is.
    pub fn print_text(&self, text: &str) {
        print!("{text}");
    }

    /// Print JSON data to stdout.
    pub fn print_json(&self, value: &serde_json::Value) {
        if let Ok(s) = serde_json::to_string_pretty(value) {
            println!("{s}");
        }
    }
}
