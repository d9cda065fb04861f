//! Motion specification generator steps.
//!
//! Reads a motion specification graph (see `motion_spec_ontology`) and
//! annotates every PID controller with the solver output it drives: the
//! output variable and its kind (acceleration energy or external wrench), the
//! controller signal, and the direction vector the embedding map applies.
//! Downstream emitters read these facts to produce the solver configuration.
//!
//! # Entry Point
//!
//! ```no_run
//! use motion_spec_codegen::{annotate_controllers, AnnotateOptions};
//! use motion_spec_ontology::parser::parse_turtle;
//!
//! let mut graph = parse_turtle(&std::fs::read_to_string("robot.ttl")?)?;
//! let report = annotate_controllers(&mut graph, &AnnotateOptions::default())?;
//! for annotation in &report.annotations {
//!     println!("{annotation}");
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod query;
pub mod steps;

use anyhow::{Context, Result};
use motion_spec_ontology::model::iris::RDF_TYPE;
use motion_spec_ontology::{Graph, Term};
use serde::Serialize;
use tracing::{info, warn};

pub use error::{AnnotateError, Lookup};
pub use query::ControllerGraph;
pub use steps::{Annotation, OutputKind, PidControllerStep, Step};

/// Runtime switches for [`annotate_controllers`].
#[derive(Debug, Clone, Default)]
pub struct AnnotateOptions {
    /// Record failing controllers in the report and continue instead of
    /// aborting the run.
    pub keep_going: bool,
    /// Controller IRIs to annotate. Empty means every PID controller in the graph.
    pub controllers: Vec<String>,
}

/// A controller that could not be annotated.
#[derive(Debug, Clone, Serialize)]
pub struct Failure {
    /// The controller node.
    pub controller: String,
    /// Human-readable reason.
    pub error: String,
}

/// Report of what was generated.
#[derive(Debug, Default, Serialize)]
pub struct GenerationReport {
    /// One entry per annotated controller, in processing order.
    pub annotations: Vec<Annotation>,
    /// Controllers skipped under [`AnnotateOptions::keep_going`].
    pub failures: Vec<Failure>,
    /// Total number of triples added to the graph.
    pub triples_added: usize,
}

impl GenerationReport {
    /// Returns true if no controller failed.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Annotates the PID controllers of `graph`.
///
/// Controllers are taken from [`AnnotateOptions::controllers`] or, when that
/// is empty, discovered by type and processed in IRI order. Each controller is
/// written atomically: a failing controller adds nothing to the graph, while
/// controllers processed before it keep their facts.
///
/// # Errors
///
/// Returns the first controller failure unless [`AnnotateOptions::keep_going`]
/// is set.
pub fn annotate_controllers(graph: &mut Graph, options: &AnnotateOptions) -> Result<GenerationReport> {
    let step = PidControllerStep;
    let mut report = GenerationReport::default();

    let targets: Vec<Term> = if options.controllers.is_empty() {
        graph.instances_of(step.controller_class())
    } else {
        options
            .controllers
            .iter()
            .map(|iri| Term::iri(iri.as_str()))
            .collect()
    };

    for node in targets {
        match run_step(&step, graph, &node) {
            Ok(annotation) => {
                info!(step = step.name(), "{annotation}");
                report.triples_added += annotation.triples_added;
                report.annotations.push(annotation);
            }
            Err(err) if options.keep_going => {
                warn!(step = step.name(), controller = %node, "skipped: {err}");
                report.failures.push(Failure {
                    controller: node.to_string(),
                    error: err.to_string(),
                });
            }
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to annotate controller {node}"));
            }
        }
    }

    Ok(report)
}

fn run_step(step: &impl Step, graph: &mut Graph, node: &Term) -> Result<Annotation, AnnotateError> {
    let class = step.controller_class();
    if !graph.contains(node, RDF_TYPE, &Term::iri(class)) {
        return Err(AnnotateError::NotAController {
            node: node.clone(),
            class,
        });
    }
    step.emit(graph, node)
}
