mod commands;
mod input;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(name = "aula")]
#[command(version, about = "aula CLI - validate and render the school-management forms", long_about = None)]
struct Cli {
    /// Log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered schemas and their fields
    Schemas {
        /// Show the fields of a single schema
        name: Option<String>,
    },

    /// Validate a submission against a named schema
    Validate {
        /// Schema name (see `aula schemas`)
        #[arg(short, long)]
        schema: String,

        /// JSON object file, or `-` for stdin
        input: PathBuf,

        /// Treat the input as an application/x-www-form-urlencoded body
        #[arg(long)]
        form: bool,
    },

    /// Render form fields to HTML
    Render {
        /// JSON array of field configs
        fields: PathBuf,

        /// JSON object with the current form values
        #[arg(long)]
        state: Option<PathBuf>,

        /// Validate the state with this schema and show its errors
        #[arg(long)]
        schema: Option<String>,

        /// Endpoint the controls post their changes to
        #[arg(long)]
        change_url: Option<String>,

        /// Widget configuration file (default: ./aula.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<ExitCode> {
    // Parse CLI arguments
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let ok = match cli.command {
        Commands::Schemas { name } => commands::schemas::execute(name.as_deref())?,
        Commands::Validate {
            schema,
            input,
            form,
        } => commands::validate::execute(&schema, &input, form)?,
        Commands::Render {
            fields,
            state,
            schema,
            change_url,
            config,
        } => commands::render::execute(commands::render::RenderArgs {
            fields: &fields,
            state: state.as_deref(),
            schema: schema.as_deref(),
            change_url: change_url.as_deref(),
            config: config.as_deref(),
        })?,
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
