//! Errors raised while annotating a controller.

use std::fmt;

use motion_spec_ontology::Term;

/// A graph lookup the annotator depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// `controller:constraint` of the controller.
    Constraint,
    /// `constraint:quantity` of the constraint.
    Coordinate,
    /// The embedding map whose `embed-map:controller` is the controller.
    EmbedMap,
    /// `embed-map:solver` of the embedding map.
    Solver,
    /// The velocity vector type among the coordinate's `rdf:type`s.
    VectorType,
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Lookup::Constraint => "constraint (controller:constraint)",
            Lookup::Coordinate => "coordinate (constraint:quantity)",
            Lookup::EmbedMap => "embedding map (embed-map:controller)",
            Lookup::Solver => "solver (embed-map:solver)",
            Lookup::VectorType => "velocity vector type (rdf:type)",
        })
    }
}

/// Why a controller could not be annotated.
///
/// Every variant is fatal for the controller it was raised for; nothing is
/// written to the graph for that controller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnnotateError {
    /// A required fact is absent.
    #[error("missing required graph fact: no {lookup} for {subject}")]
    MissingFact {
        /// Which lookup failed.
        lookup: Lookup,
        /// The node the lookup started from.
        subject: Term,
    },
    /// A fact that must be unique has several candidates.
    #[error("ambiguous graph fact: {count} candidates for {lookup} of {subject}")]
    AmbiguousFact {
        /// Which lookup was ambiguous.
        lookup: Lookup,
        /// The node the lookup started from.
        subject: Term,
        /// Number of candidates found.
        count: usize,
    },
    /// The coordinate carries a vector-like type outside the vocabulary table.
    #[error("missing required graph fact: unrecognized velocity vector type <{vector_type}> on coordinate {coordinate}")]
    UnrecognizedVectorType {
        /// The coordinate node.
        coordinate: Term,
        /// The unrecognized type IRI.
        vector_type: String,
    },
    /// A node whose name feeds a minted identifier is not an IRI.
    #[error("{role} must be named by an IRI, found {term}")]
    UnnamedNode {
        /// What the node is (controller, solver).
        role: &'static str,
        /// The offending term.
        term: Term,
    },
    /// The requested node is not typed with the step's controller class.
    #[error("{node} is not a {class}")]
    NotAController {
        /// The requested node.
        node: Term,
        /// The class the step handles.
        class: &'static str,
    },
}
