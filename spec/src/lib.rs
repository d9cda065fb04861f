//! Motion specification vocabulary and graph store.
//!
//! The `motion-spec-ontology` crate provides the closed vocabulary the motion
//! specification generator matches against (controllers, constraints,
//! geometric coordinates, embedding maps, solver inputs) as static Rust data,
//! together with the in-memory RDF graph the generator reads and annotates, a
//! Turtle loader, and Turtle / N-Triples serializers.
//!
//! # Entry Point
//!
//! ```
//! let vocabulary = motion_spec_ontology::Vocabulary::full();
//! assert_eq!(vocabulary.namespaces.len(), 6);
//! ```
//!
//! # Loading and serialization
//!
//! ```
//! use motion_spec_ontology::{parser, serializer};
//!
//! let graph = parser::parse_turtle("<urn:a> <urn:b> <urn:c> .").unwrap_or_default();
//! let turtle = serializer::turtle::to_turtle(&graph);
//! let ntriples = serializer::ntriples::to_ntriples(&graph);
//! assert_eq!(ntriples.lines().count(), 1);
//! assert!(turtle.contains("<urn:a>"));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod graph;
pub mod model;
pub mod namespaces;
pub mod parser;
pub mod serializer;
pub mod vector;

pub use graph::{Graph, GraphError, Literal, Patch, Term, Triple};
pub use model::{Class, Namespace, NamespaceModule, Property, Vocabulary};
pub use vector::{AxisCombination, DirectionVector, Motion, VelocityVectorType};

impl Vocabulary {
    /// Returns the complete vocabulary with all six namespaces.
    #[must_use]
    pub fn full() -> &'static Vocabulary {
        static VOCABULARY: std::sync::OnceLock<Vocabulary> = std::sync::OnceLock::new();
        VOCABULARY.get_or_init(|| Vocabulary {
            version: "1.0.0",
            namespaces: vec![
                namespaces::controller::module(),
                namespaces::pid_controller::module(),
                namespaces::constraint::module(),
                namespaces::geom_coord::module(),
                namespaces::embed_map::module(),
                namespaces::achd_solver::module(),
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespaces::geom_coord;

    #[test]
    fn namespace_count() {
        assert_eq!(Vocabulary::full().namespaces.len(), 6);
    }

    #[test]
    fn class_count() {
        // 1 PID controller + 1 embed map + 4 geometric coordinates + 14 vector types.
        assert_eq!(Vocabulary::full().class_count(), 20);
    }

    #[test]
    fn property_count() {
        // controller 2 + constraint 1 + embed map 6 + solver 2.
        assert_eq!(Vocabulary::full().property_count(), 11);
    }

    #[test]
    fn all_iris_unique() {
        let mut iris = std::collections::HashSet::new();
        for module in &Vocabulary::full().namespaces {
            for class in &module.classes {
                assert!(iris.insert(class.id), "Duplicate class IRI: {}", class.id);
            }
            for prop in &module.properties {
                assert!(iris.insert(prop.id), "Duplicate property IRI: {}", prop.id);
            }
        }
    }

    #[test]
    fn every_term_lives_in_its_namespace() {
        for module in &Vocabulary::full().namespaces {
            let ns = module.namespace.iri;
            for id in module
                .classes
                .iter()
                .map(|c| c.id)
                .chain(module.properties.iter().map(|p| p.id))
            {
                assert!(id.starts_with(ns), "{id} is outside {ns}");
                assert_eq!(model::split_iri(id).0, ns, "{id} does not split at {ns}");
            }
        }
    }

    #[test]
    fn geometric_and_vector_classes_are_registered() {
        let vocabulary = Vocabulary::full();
        for iri in geom_coord::GEOMETRIC_COORDINATES {
            assert!(vocabulary.find_class(iri).is_some(), "Missing class {iri}");
        }
        for vt in VelocityVectorType::ALL {
            assert!(vocabulary.find_class(vt.iri()).is_some(), "Missing class {}", vt.iri());
        }
    }

    #[test]
    fn namespace_lookup_by_iri() {
        let ns = Vocabulary::full().namespace_for(geom_coord::POSITION_COORDINATE);
        assert_eq!(ns.map(|n| n.prefix), Some("geom-coord"));
        assert!(Vocabulary::full()
            .namespace_for("https://example.org/robot#a")
            .is_none());
    }
}
