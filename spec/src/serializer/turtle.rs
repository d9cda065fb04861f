//! Turtle 1.1 serializer for graphs.
//!
//! Produces a Turtle document with the standard and vocabulary prefix
//! declarations followed by one block per subject, in order of first
//! appearance. IRIs inside a declared namespace are written as prefixed names
//! when their local part is a plain name; everything else is written in full.

use std::collections::HashMap;

use crate::graph::{Graph, Term, Triple};
use crate::model::iris::{RDF, RDFS, RDF_TYPE, XSD, XSD_STRING};
use crate::serializer::escape_literal;
use crate::Vocabulary;

const STANDARD_PREFIXES: [(&str, &str); 3] = [("rdf", RDF), ("rdfs", RDFS), ("xsd", XSD)];

/// Serializes a graph to a Turtle string.
#[must_use]
pub fn to_turtle(graph: &Graph) -> String {
    let prefixes = prefix_table(Vocabulary::full());
    let mut out = String::with_capacity(graph.len() * 96 + 1024);

    for (prefix, iri) in &prefixes {
        out.push_str(&format!("@prefix {}: <{}> .\n", prefix, iri));
    }
    out.push('\n');

    // Group by subject, preserving first appearance.
    let mut order: Vec<&Term> = Vec::new();
    let mut groups: HashMap<&Term, Vec<&Triple>> = HashMap::new();
    for triple in graph.iter() {
        let group = groups.entry(&triple.subject).or_default();
        if group.is_empty() {
            order.push(&triple.subject);
        }
        group.push(triple);
    }

    for subject in order {
        out.push_str(&term_to_turtle(subject, &prefixes));
        let triples = groups.get(subject).map(Vec::as_slice).unwrap_or_default();
        for (i, triple) in triples.iter().enumerate() {
            out.push_str(if i == 0 { "\n  " } else { " ;\n  " });
            if triple.predicate == RDF_TYPE {
                out.push('a');
            } else {
                out.push_str(&iri_to_turtle(&triple.predicate, &prefixes));
            }
            out.push(' ');
            out.push_str(&term_to_turtle(&triple.object, &prefixes));
        }
        out.push_str(" .\n\n");
    }

    out
}

fn prefix_table(vocabulary: &Vocabulary) -> Vec<(&'static str, &'static str)> {
    STANDARD_PREFIXES
        .iter()
        .copied()
        .chain(
            vocabulary
                .namespaces
                .iter()
                .map(|m| (m.namespace.prefix, m.namespace.iri)),
        )
        .collect()
}

fn iri_to_turtle(iri: &str, prefixes: &[(&str, &str)]) -> String {
    prefixes
        .iter()
        .filter_map(|(prefix, ns)| {
            iri.strip_prefix(ns)
                .filter(|local| is_plain_local(local))
                .map(|local| (ns.len(), format!("{}:{}", prefix, local)))
        })
        .max_by_key(|(len, _)| *len)
        .map(|(_, name)| name)
        .unwrap_or_else(|| format!("<{}>", iri))
}

fn term_to_turtle(term: &Term, prefixes: &[(&str, &str)]) -> String {
    match term {
        Term::Iri(iri) => iri_to_turtle(iri, prefixes),
        Term::BlankNode(id) => format!("_:{}", id),
        Term::Literal(lit) => {
            let quoted = format!("\"{}\"", escape_literal(&lit.lexical));
            match &lit.language {
                Some(lang) => format!("{}@{}", quoted, lang),
                None if lit.datatype == XSD_STRING => quoted,
                None => format!("{}^^{}", quoted, iri_to_turtle(&lit.datatype, prefixes)),
            }
        }
    }
}

/// A local part safe to write after `prefix:` without escapes.
fn is_plain_local(local: &str) -> bool {
    !local.is_empty()
        && !local.starts_with('-')
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
