//! `motion-spec-gen`: Annotates the PID controllers of a motion specification
//! graph with their solver outputs and writes the extended graph.
//!
//! **Outputs:**
//! - the annotated graph, as Turtle or N-Triples, to `--out` or stdout
//! - optionally, a JSON report of every annotation and failure (`--report`)
//!
//! **Usage:**
//! ```
//! motion-spec-gen --input <ttl> [--out <path>] [--format turtle|ntriples]
//!                 [--controller <iri>]... [--keep-going] [--report <json>]
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`). Exits non-zero if any
//! controller could not be annotated.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use motion_spec_codegen::{annotate_controllers, AnnotateOptions};
use motion_spec_ontology::parser::parse_turtle;
use motion_spec_ontology::serializer::{ntriples, turtle};
use tracing_subscriber::EnvFilter;

/// Output syntax for the annotated graph.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Turtle 1.1 with vocabulary prefixes.
    Turtle,
    /// N-Triples, one triple per line.
    Ntriples,
}

/// Annotate PID controllers with their solver outputs.
#[derive(Parser)]
#[command(
    name = "motion-spec-gen",
    about = "Annotate PID controllers in a motion specification graph"
)]
struct Args {
    /// Turtle file holding the motion specification graph.
    #[arg(long)]
    input: PathBuf,

    /// Where to write the annotated graph (default: stdout).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Syntax of the annotated graph.
    #[arg(long, value_enum, default_value = "turtle")]
    format: Format,

    /// Controller IRI to annotate. Repeatable; default is every PID controller.
    #[arg(long = "controller", value_name = "IRI")]
    controllers: Vec<String>,

    /// Skip controllers that cannot be annotated instead of aborting.
    #[arg(long)]
    keep_going: bool,

    /// Write a JSON report of the run to this path.
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let mut graph = parse_turtle(&source)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;
    let loaded = graph.len();

    let options = AnnotateOptions {
        keep_going: args.keep_going,
        controllers: args.controllers,
    };
    let report = annotate_controllers(&mut graph, &options)?;

    let rendered = match args.format {
        Format::Turtle => turtle::to_turtle(&graph),
        Format::Ntriples => ntriples::to_ntriples(&graph),
    };

    // Summary goes to stderr when the graph itself is written to stdout.
    let mut summary: Box<dyn Write> = match &args.out {
        Some(_) => Box::new(io::stdout()),
        None => Box::new(io::stderr()),
    };
    writeln!(
        summary,
        "Motion specification: {} triples loaded, {} controllers annotated, {} failed, {} triples added",
        loaded,
        report.annotations.len(),
        report.failures.len(),
        report.triples_added
    )?;
    for annotation in &report.annotations {
        writeln!(summary, "  {annotation}")?;
    }
    for failure in &report.failures {
        writeln!(summary, "  FAIL {}: {}", failure.controller, failure.error)?;
    }

    match &args.out {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            writeln!(summary, "  Written: {}", path.display())?;
        }
        None => {
            io::stdout()
                .write_all(rendered.as_bytes())
                .context("Failed to write graph to stdout")?;
        }
    }

    if let Some(path) = &args.report {
        let json = serde_json::to_string_pretty(&report)
            .context("Failed to serialize generation report")?;
        fs::write(path, &json).with_context(|| format!("Failed to write {}", path.display()))?;
        writeln!(summary, "  Written: {}", path.display())?;
    }

    if !report.all_succeeded() {
        process::exit(1);
    }
    Ok(())
}
