//! End-to-end annotation of Turtle graphs: load, annotate, serialize, reload.

#![allow(clippy::unwrap_used)]

mod fixtures;

use motion_spec_codegen::{annotate_controllers, AnnotateOptions, OutputKind};
use motion_spec_ontology::namespaces::{achd_solver, controller, embed_map};
use motion_spec_ontology::parser::parse_turtle;
use motion_spec_ontology::serializer::{ntriples, turtle};
use motion_spec_ontology::{DirectionVector, Graph, Term};

const NS: &str = "https://example.org/robot#";

fn ex(name: &str) -> Term {
    Term::iri(format!("{NS}{name}"))
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
fn annotates_both_controllers() {
    let mut g = parse_turtle(fixtures::TWO_ARM_CONTROLLERS).unwrap();
    let report = annotate_controllers(&mut g, &AnnotateOptions::default()).unwrap();
    assert_eq!(report.annotations.len(), 2);

    let first = &report.annotations[0];
    assert_eq!(first.controller, format!("{NS}ctrl1"));
    assert_eq!(first.output_kind, OutputKind::AccelerationEnergy);
    assert_eq!(first.output_variable, format!("{NS}achd_output_acceleration_energy"));
    assert_eq!(first.direction, DirectionVector([1, 0, 1, 0, 0, 0]));

    let second = &report.annotations[1];
    assert_eq!(second.output_kind, OutputKind::ExternalWrench);
    assert_eq!(second.output_variable, format!("{NS}achd_output_external_wrench"));
    assert_eq!(second.signal, format!("{NS}ctrl2_signal"));

    assert!(g.contains(
        &ex("achd"),
        achd_solver::ACCELERATION_ENERGY,
        &ex("achd_output_acceleration_energy")
    ));
    assert!(g.contains(
        &ex("achd"),
        achd_solver::EXTERNAL_WRENCH,
        &ex("achd_output_external_wrench")
    ));
    assert!(g.contains(&ex("map2"), embed_map::INPUT, &ex("ctrl2_signal")));
    assert_eq!(vector_of(&g, &ex("map1")), vec![1, 0, 1, 0, 0, 0]);
    assert_eq!(vector_of(&g, &ex("map2")), vec![0, 0, 0, 1, 1, 1]);
}

#[test]
fn missing_embedding_map_adds_nothing() {
    let mut g = parse_turtle(fixtures::UNEMBEDDED_CONTROLLER).unwrap();
    let before = g.len();
    let err = annotate_controllers(&mut g, &AnnotateOptions::default()).unwrap_err();
    assert!(
        format!("{err:#}").contains("missing required graph fact"),
        "unexpected error: {err:#}"
    );
    assert_eq!(g.len(), before);
    assert_eq!(g.objects(&ex("ctrl1"), controller::SIGNAL).count(), 0);
}

#[test]
fn annotating_twice_is_additive() {
    let mut g = parse_turtle(fixtures::TWO_ARM_CONTROLLERS).unwrap();
    let options = AnnotateOptions {
        controllers: vec![format!("{NS}ctrl1")],
        ..AnnotateOptions::default()
    };
    let first = annotate_controllers(&mut g, &options).unwrap();
    let second = annotate_controllers(&mut g, &options).unwrap();
    assert_ne!(
        first.annotations[0].output_variable,
        second.annotations[0].output_variable
    );
    assert_ne!(first.annotations[0].signal, second.annotations[0].signal);
    assert_eq!(g.objects(&ex("map1"), embed_map::VECTOR).count(), 2);
}

#[test]
fn annotated_graph_survives_serialization() {
    let mut g = parse_turtle(fixtures::TWO_ARM_CONTROLLERS).unwrap();
    annotate_controllers(&mut g, &AnnotateOptions::default()).unwrap();

    let ttl = turtle::to_turtle(&g);
    assert!(ttl.contains("achd-solver:acceleration-energy"));
    assert!(ttl.contains("embed-map:output-external-wrench"));
    let from_ttl = parse_turtle(&ttl).unwrap();
    assert_eq!(from_ttl.len(), g.len());
    assert_eq!(vector_of(&from_ttl, &ex("map1")), vec![1, 0, 1, 0, 0, 0]);

    let from_nt = parse_turtle(&ntriples::to_ntriples(&g)).unwrap();
    assert_eq!(from_nt.len(), g.len());
}

#[test]
fn report_serializes_to_json() {
    let mut g = parse_turtle(fixtures::TWO_ARM_CONTROLLERS).unwrap();
    let report = annotate_controllers(&mut g, &AnnotateOptions::default()).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["annotations"][0]["output_kind"], "acceleration-energy");
    assert_eq!(
        json["annotations"][1]["direction"],
        serde_json::json!([0, 0, 0, 1, 1, 1])
    );
    assert_eq!(json["failures"], serde_json::json!([]));
}
