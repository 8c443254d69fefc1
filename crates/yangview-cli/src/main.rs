//! yangview CLI - resolve YIN schema modules and annotate JSON data
//! documents with their documentation.
//!
//! This binary is a file-based stand-in for a transport layer: modules and
//! data documents are read from disk, handed to the core as completed
//! values, and the annotated result is rendered to stdout.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use yangview_annotate::annotate_document;
use yangview_schema::{Module, ModuleRegistry};

mod render;

#[derive(Parser)]
#[command(name = "yangview")]
#[command(about = "Schema-annotated views of YANG-modelled data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve schema modules and print their materialized trees
    Resolve {
        /// YIN module file (repeatable)
        #[arg(short, long = "schema", value_name = "FILE", required = true)]
        schema: Vec<PathBuf>,
    },

    /// Annotate a JSON data document with schema documentation
    Annotate {
        /// YIN module file (repeatable)
        #[arg(short, long = "schema", value_name = "FILE", required = true)]
        schema: Vec<PathBuf>,

        /// JSON data document
        data: PathBuf,

        /// Emit the presentation JSON instead of a text tree
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Resolve { schema } => {
            let registry = load_modules(&schema)?;

            let mut modules: Vec<_> = registry.modules().collect();
            modules.sort_by(|a, b| a.name().cmp(b.name()));
            for module in modules {
                if let Some(tree) = module.resolved() {
                    print!("{}", render::render_schema(module.name(), tree));
                }
            }
        }
        Commands::Annotate { schema, data, json } => {
            let registry = load_modules(&schema)?;

            let text = fs::read_to_string(&data)
                .with_context(|| format!("reading {}", data.display()))?;
            let document: serde_json::Value = serde_json::from_str(&text)
                .with_context(|| format!("parsing {}", data.display()))?;

            let annotated = annotate_document(&document, &registry);
            if json {
                println!("{}", serde_json::to_string_pretty(&annotated.to_view_json())?);
            } else {
                print!("{}", render::render_annotated(&annotated));
            }
        }
    }
    Ok(())
}

/// Read, parse, register, and materialize the given YIN module files.
fn load_modules(paths: &[PathBuf]) -> Result<ModuleRegistry> {
    let mut registry = ModuleRegistry::new();
    for path in paths {
        let text =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let document = yangview_yin::parse(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        let module = Module::from_document(document)?;
        info!(module = %module.name(), file = %path.display(), "registered module");
        registry.register(module);
    }
    registry.materialize()?;
    Ok(registry)
}
