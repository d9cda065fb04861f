//! PID controller step.
//!
//! Resolves `controller → constraint → coordinate` and
//! `controller ← embedding map → solver`, classifies the coordinate, then
//! writes in one patch:
//!
//! - `solver achd-solver:<kind> variable`
//! - `controller controller:signal signal`
//! - `map embed-map:vector ( 6 integers )`
//! - `map embed-map:input signal`
//! - `map embed-map:output-<kind> variable`
//!
//! Identifiers are minted from the controller's namespace: the signal is
//! `{ns}{controller}_signal` and the variable `{ns}{solver}_output_<kind>`.
//! When the controller already carries a signal, the names gain a `_run{n}`
//! infix (n = signals already present), so every invocation adds new
//! identifiers.

use motion_spec_ontology::model::{local_name, split_iri};
use motion_spec_ontology::namespaces::{controller, embed_map, pid_controller};
use motion_spec_ontology::{Graph, Patch, Term};
use tracing::debug;

use crate::error::AnnotateError;
use crate::query::ControllerGraph;
use crate::steps::{Annotation, OutputKind, Step};

/// Annotates PID controllers with their solver output.
#[derive(Debug, Default, Clone, Copy)]
pub struct PidControllerStep;

impl Step for PidControllerStep {
    fn name(&self) -> &'static str {
        "pid-controller"
    }

    fn controller_class(&self) -> &'static str {
        pid_controller::PID_CONTROLLER
    }

    fn emit(&self, graph: &mut Graph, node: &Term) -> Result<Annotation, AnnotateError> {
        let controller_iri = node.as_iri().ok_or_else(|| AnnotateError::UnnamedNode {
            role: "controller",
            term: node.clone(),
        })?;

        let constraint = graph.constraint_of(node)?;
        let coordinate = graph.quantity_of(&constraint)?;
        let embedding = graph.embedding_of(node)?;
        let solver = graph.solver_of(&embedding)?;
        let solver_iri = solver.as_iri().ok_or_else(|| AnnotateError::UnnamedNode {
            role: "solver",
            term: solver.clone(),
        })?;
        debug!(
            controller = %node,
            constraint = %constraint,
            coordinate = %coordinate,
            embedding = %embedding,
            solver = %solver,
            "resolved controller context"
        );

        let output_kind = OutputKind::for_coordinate(graph.is_geometric(&coordinate));
        let vector_type = graph.vector_type_of(&coordinate)?;
        let direction = vector_type.direction();

        let (namespace, name) = split_iri(controller_iri);
        let run = match graph.objects(node, controller::SIGNAL).count() {
            0 => String::new(),
            n => format!("_run{n}"),
        };
        let output_variable = format!(
            "{namespace}{}{run}{}",
            local_name(solver_iri),
            output_kind.variable_suffix()
        );
        let signal = format!("{namespace}{name}{run}_signal");

        let mut patch = Patch::new();
        patch.add(
            solver.clone(),
            output_kind.solver_predicate(),
            Term::iri(output_variable.as_str()),
        );
        patch.add(node.clone(), controller::SIGNAL, Term::iri(signal.as_str()));
        let vector = patch.add_list(
            graph,
            direction
                .components()
                .into_iter()
                .map(|c| Term::integer(i64::from(c))),
        );
        patch.add(embedding.clone(), embed_map::VECTOR, vector);
        patch.add(embedding.clone(), embed_map::INPUT, Term::iri(signal.as_str()));
        patch.add(
            embedding,
            output_kind.embedding_predicate(),
            Term::iri(output_variable.as_str()),
        );

        let annotation = Annotation {
            controller: controller_iri.to_owned(),
            solver: solver_iri.to_owned(),
            output_kind,
            output_variable,
            signal,
            vector_type,
            direction,
            triples_added: 0,
        };
        let triples_added = graph.apply(patch);
        Ok(Annotation {
            triples_added,
            ..annotation
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use motion_spec_ontology::model::iris::RDF_TYPE;
    use motion_spec_ontology::namespaces::{achd_solver, constraint, geom_coord};
    use motion_spec_ontology::DirectionVector;

    use crate::error::Lookup;

    const NS: &str = "https://example.org/robot#";

    fn ex(name: &str) -> Term {
        Term::iri(format!("{NS}{name}"))
    }

    /// One controller wired to `achd` through `map1`, with the given coordinate types.
    fn graph_with(coordinate_types: &[&str]) -> Graph {
        let mut g = Graph::new();
        g.add(ex("ctrl1"), RDF_TYPE, Term::iri(pid_controller::PID_CONTROLLER));
        g.add(ex("ctrl1"), controller::CONSTRAINT, ex("constraint1"));
        g.add(ex("constraint1"), constraint::QUANTITY, ex("coord1"));
        for t in coordinate_types {
            g.add(ex("coord1"), RDF_TYPE, Term::iri(*t));
        }
        g.add(ex("map1"), RDF_TYPE, Term::iri(embed_map::EMBED_MAP));
        g.add(ex("map1"), embed_map::CONTROLLER, ex("ctrl1"));
        g.add(ex("map1"), embed_map::SOLVER, ex("achd"));
        g
    }

    fn vector_of(g: &Graph, map: &Term) -> Vec<i64> {
        let head = g.objects(map, embed_map::VECTOR).next().unwrap();
        g.list_items(head)
            .unwrap()
            .iter()
            .filter_map(Term::as_integer)
            .collect()
    }

    #[test]
    fn geometric_coordinate_feeds_acceleration_energy() {
        let mut g = graph_with(&[
            geom_coord::POSITION_COORDINATE,
            geom_coord::LINEAR_VELOCITY_VECTOR_XZ,
        ]);
        let a = PidControllerStep.emit(&mut g, &ex("ctrl1")).unwrap();
        assert_eq!(a.output_kind, OutputKind::AccelerationEnergy);
        assert_eq!(a.output_variable, format!("{NS}achd_output_acceleration_energy"));
        assert_eq!(a.direction, DirectionVector([1, 0, 1, 0, 0, 0]));
        let var = Term::iri(a.output_variable.as_str());
        assert!(g.contains(&ex("achd"), achd_solver::ACCELERATION_ENERGY, &var));
        assert!(g.contains(&ex("map1"), embed_map::OUTPUT_ACCELERATION_ENERGY, &var));
        assert_eq!(vector_of(&g, &ex("map1")), vec![1, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn other_coordinate_feeds_external_wrench() {
        let mut g = graph_with(&[
            "https://example.org/robot#JointForceCoordinate",
            geom_coord::ANGULAR_VELOCITY_VECTOR_XYZ,
        ]);
        let a = PidControllerStep.emit(&mut g, &ex("ctrl1")).unwrap();
        assert_eq!(a.output_kind, OutputKind::ExternalWrench);
        assert!(a.output_variable.ends_with("_output_external_wrench"));
        let var = Term::iri(a.output_variable.as_str());
        assert!(g.contains(&ex("achd"), achd_solver::EXTERNAL_WRENCH, &var));
        assert!(g.contains(&ex("map1"), embed_map::OUTPUT_EXTERNAL_WRENCH, &var));
        assert_eq!(vector_of(&g, &ex("map1")), vec![0, 0, 0, 1, 1, 1]);
    }

    #[test]
    fn signal_is_linked_from_controller_and_map() {
        let mut g = graph_with(&[geom_coord::LINEAR_VELOCITY_VECTOR_X]);
        let a = PidControllerStep.emit(&mut g, &ex("ctrl1")).unwrap();
        assert_eq!(a.signal, format!("{NS}ctrl1_signal"));
        let signal = Term::iri(a.signal.as_str());
        assert!(g.contains(&ex("ctrl1"), controller::SIGNAL, &signal));
        assert!(g.contains(&ex("map1"), embed_map::INPUT, &signal));
        // 5 relations + 6 list cells of 2 triples each.
        assert_eq!(a.triples_added, 17);
    }

    #[test]
    fn prefixed_name_mints_prefixed_signal() {
        let mut g = Graph::new();
        let ctrl = Term::iri("ns:ctrl1");
        g.add(ctrl.clone(), controller::CONSTRAINT, Term::iri("ns:c1"));
        g.add(Term::iri("ns:c1"), constraint::QUANTITY, Term::iri("ns:coord1"));
        g.add(
            Term::iri("ns:coord1"),
            RDF_TYPE,
            Term::iri(geom_coord::LINEAR_VELOCITY_VECTOR_Z),
        );
        g.add(Term::iri("ns:map1"), embed_map::CONTROLLER, ctrl.clone());
        g.add(Term::iri("ns:map1"), embed_map::SOLVER, Term::iri("ns:solver1"));
        let a = PidControllerStep.emit(&mut g, &ctrl).unwrap();
        assert_eq!(a.signal, "ns:ctrl1_signal");
        assert_eq!(a.output_variable, "ns:solver1_output_external_wrench");
    }

    #[test]
    fn missing_embedding_map_leaves_graph_untouched() {
        let mut g = graph_with(&[
            geom_coord::POSITION_COORDINATE,
            geom_coord::LINEAR_VELOCITY_VECTOR_XZ,
        ]);
        g.add(ex("ctrl2"), controller::CONSTRAINT, ex("constraint1"));
        let before = g.len();
        let err = PidControllerStep.emit(&mut g, &ex("ctrl2")).unwrap_err();
        assert!(err.to_string().starts_with("missing required graph fact"));
        assert_eq!(g.len(), before);
        assert_eq!(g.objects(&ex("ctrl2"), controller::SIGNAL).count(), 0);
    }

    #[test]
    fn each_missing_lookup_is_reported_without_writing() {
        fn expect_missing(g: &mut Graph, expected: Lookup) {
            let before = g.len();
            let err = PidControllerStep.emit(g, &ex("ctrl1")).unwrap_err();
            assert!(
                matches!(err, AnnotateError::MissingFact { lookup, .. } if lookup == expected),
                "expected missing {expected}, got {err}"
            );
            assert_eq!(g.len(), before, "graph changed after missing {expected}");
        }

        let mut g = Graph::new();
        expect_missing(&mut g, Lookup::Constraint);
        g.add(ex("ctrl1"), controller::CONSTRAINT, ex("constraint1"));
        expect_missing(&mut g, Lookup::Coordinate);
        g.add(ex("constraint1"), constraint::QUANTITY, ex("coord1"));
        g.add(ex("coord1"), RDF_TYPE, Term::iri(geom_coord::LINEAR_VELOCITY_VECTOR_X));
        expect_missing(&mut g, Lookup::EmbedMap);
        g.add(ex("map1"), embed_map::CONTROLLER, ex("ctrl1"));
        expect_missing(&mut g, Lookup::Solver);
        g.add(ex("map1"), embed_map::SOLVER, ex("achd"));
        assert!(PidControllerStep.emit(&mut g, &ex("ctrl1")).is_ok());
    }

    #[test]
    fn unrecognized_vector_type_leaves_graph_untouched() {
        let mut g = graph_with(&[
            geom_coord::POSITION_COORDINATE,
            "https://comp-rob2b.github.io/metamodels/geometry/coordinates#LinearVelocityVectorW",
        ]);
        let before = g.len();
        let err = PidControllerStep.emit(&mut g, &ex("ctrl1")).unwrap_err();
        assert!(matches!(err, AnnotateError::UnrecognizedVectorType { .. }));
        assert!(
            err.to_string().starts_with("missing required graph fact"),
            "unexpected message: {err}"
        );
        assert_eq!(g.len(), before);
    }

    #[test]
    fn blank_controller_is_rejected() {
        let mut g = Graph::new();
        let node = g.fresh_blank_node();
        let err = PidControllerStep.emit(&mut g, &node).unwrap_err();
        assert!(matches!(
            err,
            AnnotateError::UnnamedNode {
                role: "controller",
                ..
            }
        ));
    }

    #[test]
    fn second_run_mints_new_identifiers() {
        let mut g = graph_with(&[
            geom_coord::DISTANCE_COORDINATE,
            geom_coord::ANGULAR_VELOCITY_VECTOR_Y,
        ]);
        let first = PidControllerStep.emit(&mut g, &ex("ctrl1")).unwrap();
        let second = PidControllerStep.emit(&mut g, &ex("ctrl1")).unwrap();
        assert_ne!(first.output_variable, second.output_variable);
        assert_ne!(first.signal, second.signal);
        assert_eq!(
            second.output_variable,
            format!("{NS}achd_run1_output_acceleration_energy")
        );
        assert_eq!(second.signal, format!("{NS}ctrl1_run1_signal"));
        assert_eq!(g.objects(&ex("ctrl1"), controller::SIGNAL).count(), 2);
        assert_eq!(g.objects(&ex("map1"), embed_map::VECTOR).count(), 2);
        assert_eq!(
            g.objects(&ex("achd"), achd_solver::ACCELERATION_ENERGY).count(),
            2
        );
    }
}
