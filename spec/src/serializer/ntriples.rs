//! N-Triples serializer for graphs.
//!
//! Produces a valid N-Triples document (one triple per line, absolute IRIs),
//! in the graph's insertion order. N-Triples is suitable for streaming, bulk
//! loading, and diff-friendly storage.

use crate::graph::{Graph, Term};
use crate::serializer::escape_literal;

/// Serializes a graph to an N-Triples string.
#[must_use]
pub fn to_ntriples(graph: &Graph) -> String {
    let mut out = String::with_capacity(graph.len() * 128);
    for triple in graph.iter() {
        out.push_str(&term(&triple.subject));
        out.push_str(" <");
        out.push_str(&triple.predicate);
        out.push_str("> ");
        out.push_str(&term(&triple.object));
        out.push_str(" .\n");
    }
    out
}

fn term(t: &Term) -> String {
    match t {
        Term::Iri(iri) => format!("<{}>", iri),
        Term::BlankNode(id) => format!("_:{}", id),
        Term::Literal(lit) => match &lit.language {
            Some(lang) => format!("\"{}\"@{}", escape_literal(&lit.lexical), lang),
            None => format!("\"{}\"^^<{}>", escape_literal(&lit.lexical), lit.datatype),
        },
    }
}
