use std::path::Path;

use clap::CommandFactory;

use crate::cli::Cli;
use crate::config::{load_config, resolve_settings};
use crate::error::CliError;
use crate::output::{OutputContext, OutputMode};

/// Parse the `--schema` file and print its canonical rendering.
pub fn run(cli: &Cli, output: &OutputContext) -> Result<(), CliError> {
    let Some(path) = cli.schema.as_deref() else {
        return Err(CliError::MissingSchema {
            usage: Cli::command().render_usage().to_string(),
        });
    };

    let config = load_config(cli.global.config.as_deref())?;
    let settings = resolve_settings(&config, cli);

    let source_text = read_schema(path, settings.max_input_bytes)?;
    tracing::info!(path = %path.display(), bytes = source_text.len(), "read schema");

    let root = match parquet_schema_dsl::parse_with_options(&source_text, &settings.parse_options)
    {
        Ok(root) => root,
        Err(error) => {
            tracing::debug!(kind = error.kind(), "parse failed");
            return Err(CliError::Parse {
                error,
                source_text,
                file: path.to_path_buf(),
            });
        }
    };

    match output.mode {
        OutputMode::Human => {
            let text = parquet_schema_dsl::print_with_indent(&root, settings.indent);
            output.print_text(&text);
            output.success(&format!("{} parsed", path.display()));
        }
        OutputMode::Json => {
            let value =
                serde_json::to_value(&root).map_err(|e| CliError::Other(e.to_string()))?;
            output.print_json(&value);
        }
    }

    Ok(())
}

/// Read a schema file, refusing files larger than `limit` bytes.
fn read_schema(path: &Path, limit: u64) -> Result<String, CliError> {
    let io_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };

    let size = std::fs::metadata(path).map_err(io_error)?.len();
    if size > limit {
        return Err(CliError::InputTooLarge {
            path: path.to_path_buf(),
            size,
            limit,
        });
    }

    std::fs::read_to_string(path).map_err(io_error)
}
