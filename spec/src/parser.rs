//! Turtle loading.
//!
//! Parsing is delegated to `sophia_turtle`; every parsed term is converted
//! into a [`Term`] of the in-memory store. Blank-node labels from the source
//! are relabelled to fresh graph-local blank nodes, one per distinct label, so
//! they cannot collide with nodes the generator mints later.

use std::collections::HashMap;

use sophia_api::source::TripleSource;
use sophia_api::term::TermKind;
use sophia_api::triple::Triple as _;
use sophia_turtle::parser::turtle;

use crate::graph::{Graph, GraphError, Literal, Term, Triple};

/// Parses a Turtle document into a new graph.
///
/// # Errors
///
/// Returns [`GraphError::Parse`] if the document is not valid Turtle, or
/// [`GraphError::UnsupportedTerm`] if it contains terms the store cannot hold.
pub fn parse_turtle(src: &str) -> Result<Graph, GraphError> {
    let mut graph = Graph::new();
    load_turtle(&mut graph, src)?;
    Ok(graph)
}

/// Parses a Turtle document and adds its triples to `graph`.
///
/// Nothing is added unless the whole document converts. Returns the number of
/// triples that were new to the graph.
///
/// # Errors
///
/// Same as [`parse_turtle`].
pub fn load_turtle(graph: &mut Graph, src: &str) -> Result<usize, GraphError> {
    let mut labels: HashMap<String, Term> = HashMap::new();
    let mut triples: Vec<Triple> = Vec::new();
    let mut failure: Option<GraphError> = None;

    turtle::parse_str(src)
        .for_each_triple(|t| {
            if failure.is_some() {
                return;
            }
            let converted = convert_term(t.s(), graph, &mut labels).and_then(|subject| {
                let predicate = match convert_term(t.p(), graph, &mut labels)? {
                    Term::Iri(iri) => iri,
                    other => return Err(GraphError::InvalidPredicate(other)),
                };
                let object = convert_term(t.o(), graph, &mut labels)?;
                Ok(Triple::new(subject, predicate, object))
            });
            match converted {
                Ok(triple) => triples.push(triple),
                Err(err) => failure = Some(err),
            }
        })
        .map_err(|e| GraphError::Parse(e.to_string()))?;

    if let Some(err) = failure {
        return Err(err);
    }

    let mut added = 0;
    for triple in triples {
        if graph.insert(triple) {
            added += 1;
        }
    }
    Ok(added)
}

fn convert_term<T: sophia_api::term::Term>(
    term: T,
    graph: &mut Graph,
    labels: &mut HashMap<String, Term>,
) -> Result<Term, GraphError> {
    let kind = term.kind();
    match kind {
        TermKind::Iri => term
            .iri()
            .map(|iri| Term::iri(iri.as_str()))
            .ok_or_else(|| GraphError::UnsupportedTerm("IRI without value".into())),
        TermKind::BlankNode => {
            let label = term
                .bnode_id()
                .map(|id| id.as_str().to_owned())
                .ok_or_else(|| GraphError::UnsupportedTerm("blank node without label".into()))?;
            Ok(labels
                .entry(label)
                .or_insert_with(|| graph.fresh_blank_node())
                .clone())
        }
        TermKind::Literal => {
            let lexical = term
                .lexical_form()
                .map(|lex| String::from(&*lex))
                .ok_or_else(|| GraphError::UnsupportedTerm("literal without lexical form".into()))?;
            let datatype = term
                .datatype()
                .map(|dt| dt.as_str().to_owned())
                .ok_or_else(|| GraphError::UnsupportedTerm("literal without datatype".into()))?;
            let language = term.language_tag().map(|tag| tag.as_str().to_owned());
            Ok(Term::Literal(Literal {
                lexical,
                datatype,
                language,
            }))
        }
        other => Err(GraphError::UnsupportedTerm(format!("{other:?}"))),
    }
}
