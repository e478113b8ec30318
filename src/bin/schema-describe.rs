//! Schema Describe CLI
//!
//! Command-line interface for describing JSON Schema documents.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use schema_describe::{
    describe_value, load_schema_auto, navigate_fragment, render_text, DescribeOptions,
    LiteralPolicy, DEFAULT_MAX_DEPTH,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "schema-describe")]
#[command(about = "Describe the fields of a JSON Schema")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a schema into a field tree
    Describe {
        /// Schema source: file path or URL (http:// or https://)
        schema: String,

        /// JSON Pointer to the schema inside the document (e.g. #/tools/0/inputSchema)
        #[arg(long)]
        pointer: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Nesting depth beyond which fields are not expanded
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,

        /// Hide default/example values that are falsy (0, false, "", null)
        #[arg(long)]
        truthy_literals: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

struct DescribeArgs {
    schema: String,
    pointer: Option<String>,
    format: OutputFormat,
    pretty: bool,
    output: Option<PathBuf>,
    max_depth: usize,
    truthy_literals: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Describe {
            schema,
            pointer,
            format,
            pretty,
            output,
            max_depth,
            truthy_literals,
        } => run_describe(DescribeArgs {
            schema,
            pointer,
            format,
            pretty,
            output,
            max_depth,
            truthy_literals,
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

fn run_describe(args: DescribeArgs) -> Result<(), u8> {
    let DescribeArgs {
        schema: schema_source,
        pointer,
        format,
        pretty,
        output,
        max_depth,
        truthy_literals,
    } = args;

    let document = load_schema_auto(&schema_source).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let schema = match &pointer {
        Some(pointer) => navigate_fragment(&document, pointer).map_err(|e| {
            eprintln!("Error: {}", e);
            e.exit_code() as u8
        })?,
        None => &document,
    };

    let policy = if truthy_literals {
        LiteralPolicy::Truthy
    } else {
        LiteralPolicy::Present
    };
    let options = DescribeOptions::new()
        .max_depth(max_depth)
        .literal_policy(policy);

    let description = describe_value(schema, &options).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let rendered = match format {
        OutputFormat::Text => render_text(&description),
        OutputFormat::Json => {
            let json = if pretty {
                serde_json::to_string_pretty(&description)
            } else {
                serde_json::to_string(&description)
            }
            .map_err(|e| {
                eprintln!("Error serializing output: {}", e);
                2u8
            })?;
            format!("{}\n", json)
        }
    };

    match output {
        Some(path) => {
            std::fs::write(&path, &rendered).map_err(|e| {
                eprintln!("Error writing to {}: {}", path.display(), e);
                3u8
            })?;
        }
        None => {
            print!("{}", rendered);
        }
    }

    Ok(())
}
