//! Typed queries over a motion specification graph.
//!
//! Each accessor resolves one relation the annotator depends on and turns
//! "absent" and "more than one" into [`AnnotateError`]s, so callers never
//! depend on the order in which the store yields equally valid facts.

use motion_spec_ontology::model::iris::RDF_TYPE;
use motion_spec_ontology::model::local_name;
use motion_spec_ontology::namespaces::{constraint, controller, embed_map, geom_coord};
use motion_spec_ontology::{Graph, Term, VelocityVectorType};

use crate::error::{AnnotateError, Lookup};

/// Controller-facing view of a graph.
pub trait ControllerGraph {
    /// The constraint enforced by `controller`.
    ///
    /// # Errors
    ///
    /// [`AnnotateError::MissingFact`] or [`AnnotateError::AmbiguousFact`] unless
    /// exactly one constraint is linked.
    fn constraint_of(&self, controller: &Term) -> Result<Term, AnnotateError>;

    /// The coordinate targeted by `constraint`.
    ///
    /// # Errors
    ///
    /// As [`ControllerGraph::constraint_of`].
    fn quantity_of(&self, constraint: &Term) -> Result<Term, AnnotateError>;

    /// The embedding map linking `controller` to a solver (reverse lookup).
    ///
    /// # Errors
    ///
    /// As [`ControllerGraph::constraint_of`].
    fn embedding_of(&self, controller: &Term) -> Result<Term, AnnotateError>;

    /// The solver at the other end of `embedding`.
    ///
    /// # Errors
    ///
    /// As [`ControllerGraph::constraint_of`].
    fn solver_of(&self, embedding: &Term) -> Result<Term, AnnotateError>;

    /// Whether `coordinate` belongs to the geometric coordinate family.
    fn is_geometric(&self, coordinate: &Term) -> bool;

    /// The velocity vector type of `coordinate`.
    ///
    /// # Errors
    ///
    /// - [`AnnotateError::AmbiguousFact`] if several vocabulary vector types are present
    /// - [`AnnotateError::UnrecognizedVectorType`] if none is, but some type's local
    ///   name mentions "vector"
    /// - [`AnnotateError::MissingFact`] otherwise
    fn vector_type_of(&self, coordinate: &Term) -> Result<VelocityVectorType, AnnotateError>;

    /// All nodes typed `class`, sorted.
    fn instances_of(&self, class: &str) -> Vec<Term>;
}

impl ControllerGraph for Graph {
    fn constraint_of(&self, controller_node: &Term) -> Result<Term, AnnotateError> {
        exactly_one(
            self.objects(controller_node, controller::CONSTRAINT),
            Lookup::Constraint,
            controller_node,
        )
    }

    fn quantity_of(&self, constraint_node: &Term) -> Result<Term, AnnotateError> {
        exactly_one(
            self.objects(constraint_node, constraint::QUANTITY),
            Lookup::Coordinate,
            constraint_node,
        )
    }

    fn embedding_of(&self, controller_node: &Term) -> Result<Term, AnnotateError> {
        exactly_one(
            self.subjects(embed_map::CONTROLLER, controller_node),
            Lookup::EmbedMap,
            controller_node,
        )
    }

    fn solver_of(&self, embedding: &Term) -> Result<Term, AnnotateError> {
        exactly_one(
            self.objects(embedding, embed_map::SOLVER),
            Lookup::Solver,
            embedding,
        )
    }

    fn is_geometric(&self, coordinate: &Term) -> bool {
        self.objects(coordinate, RDF_TYPE)
            .filter_map(Term::as_iri)
            .any(|t| geom_coord::GEOMETRIC_COORDINATES.contains(&t))
    }

    fn vector_type_of(&self, coordinate: &Term) -> Result<VelocityVectorType, AnnotateError> {
        let types: Vec<&str> = self
            .objects(coordinate, RDF_TYPE)
            .filter_map(Term::as_iri)
            .collect();
        let known: Vec<VelocityVectorType> = types
            .iter()
            .filter_map(|t| VelocityVectorType::from_iri(t))
            .collect();
        match known.as_slice() {
            [vector_type] => Ok(*vector_type),
            [] => match types
                .iter()
                .find(|t| local_name(t).to_ascii_lowercase().contains("vector"))
            {
                Some(unknown) => Err(AnnotateError::UnrecognizedVectorType {
                    coordinate: coordinate.clone(),
                    vector_type: (*unknown).to_owned(),
                }),
                None => Err(AnnotateError::MissingFact {
                    lookup: Lookup::VectorType,
                    subject: coordinate.clone(),
                }),
            },
            several => Err(AnnotateError::AmbiguousFact {
                lookup: Lookup::VectorType,
                subject: coordinate.clone(),
                count: several.len(),
            }),
        }
    }

    fn instances_of(&self, class: &str) -> Vec<Term> {
        let mut nodes: Vec<Term> = self
            .subjects(RDF_TYPE, &Term::iri(class))
            .cloned()
            .collect();
        nodes.sort();
        nodes
    }
}

fn exactly_one<'g>(
    candidates: impl Iterator<Item = &'g Term>,
    lookup: Lookup,
    subject: &Term,
) -> Result<Term, AnnotateError> {
    let candidates: Vec<&Term> = candidates.collect();
    match candidates.as_slice() {
        [one] => Ok((*one).clone()),
        [] => Err(AnnotateError::MissingFact {
            lookup,
            subject: subject.clone(),
        }),
        several => Err(AnnotateError::AmbiguousFact {
            lookup,
            subject: subject.clone(),
            count: several.len(),
        }),
    }
}
