//! Generation steps.
//!
//! A step handles one controller class: it reads the controller's context
//! from the graph and writes the derived facts back. Only PID controllers
//! are handled.

use std::fmt;

use motion_spec_ontology::namespaces::{achd_solver, embed_map};
use motion_spec_ontology::{DirectionVector, Graph, Term, VelocityVectorType};
use serde::Serialize;

use crate::error::AnnotateError;

pub mod pid;

pub use pid::PidControllerStep;

/// A generation step for one controller class.
pub trait Step {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// IRI of the controller class this step handles.
    fn controller_class(&self) -> &'static str;

    /// Annotates `node` in `graph`.
    ///
    /// Either every derived fact is written or none is.
    ///
    /// # Errors
    ///
    /// Returns an [`AnnotateError`] if a required fact is missing, ambiguous
    /// or unrecognized.
    fn emit(&self, graph: &mut Graph, node: &Term) -> Result<Annotation, AnnotateError>;
}

/// How a controller's signal enters the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputKind {
    /// Acceleration-energy term along the constrained directions.
    AccelerationEnergy,
    /// External wrench.
    ExternalWrench,
}

impl OutputKind {
    /// Geometric coordinates feed acceleration energy, everything else an
    /// external wrench.
    #[must_use]
    pub fn for_coordinate(geometric: bool) -> Self {
        if geometric {
            OutputKind::AccelerationEnergy
        } else {
            OutputKind::ExternalWrench
        }
    }

    /// Returns the kind as written in diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OutputKind::AccelerationEnergy => "acceleration-energy",
            OutputKind::ExternalWrench => "external-wrench",
        }
    }

    /// Solver relation pointing at the output variable.
    #[must_use]
    pub fn solver_predicate(self) -> &'static str {
        match self {
            OutputKind::AccelerationEnergy => achd_solver::ACCELERATION_ENERGY,
            OutputKind::ExternalWrench => achd_solver::EXTERNAL_WRENCH,
        }
    }

    /// Embedding-map relation pointing at the output variable.
    #[must_use]
    pub fn embedding_predicate(self) -> &'static str {
        match self {
            OutputKind::AccelerationEnergy => embed_map::OUTPUT_ACCELERATION_ENERGY,
            OutputKind::ExternalWrench => embed_map::OUTPUT_EXTERNAL_WRENCH,
        }
    }

    /// Suffix of minted output-variable names.
    #[must_use]
    pub fn variable_suffix(self) -> &'static str {
        match self {
            OutputKind::AccelerationEnergy => "_output_acceleration_energy",
            OutputKind::ExternalWrench => "_output_external_wrench",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a step added for one controller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    /// Controller IRI.
    pub controller: String,
    /// Solver IRI.
    pub solver: String,
    /// Output kind chosen from the coordinate's types.
    pub output_kind: OutputKind,
    /// Minted output-variable IRI.
    pub output_variable: String,
    /// Minted signal IRI.
    pub signal: String,
    /// Vector type of the controlled coordinate.
    pub vector_type: VelocityVectorType,
    /// Axes engaged by the controller.
    pub direction: DirectionVector,
    /// Number of triples that were new to the graph.
    pub triples_added: usize,
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} -> {} (signal {}, vector {})",
            self.controller, self.output_kind, self.output_variable, self.signal, self.direction
        )
    }
}
