//! In-memory RDF graph store.
//!
//! The graph keeps its triples in insertion order with set semantics and two
//! indices: subject+predicate → objects and predicate+object → subjects. Blank
//! nodes are graph-local: every blank node in a [`Graph`] is minted by
//! [`Graph::fresh_blank_node`], including those relabelled on load.
//!
//! New facts are usually staged in a [`Patch`] and committed with
//! [`Graph::apply`], so a caller that fails halfway never leaves a partial
//! write behind.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::model::iris::{RDF_FIRST, RDF_NIL, RDF_REST, XSD_INTEGER, XSD_STRING};

/// Errors raised by the graph store and its loaders.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// The Turtle source could not be parsed.
    #[error("failed to parse Turtle: {0}")]
    Parse(String),
    /// The source contains a term kind the store does not represent
    /// (variables, quoted triples).
    #[error("unsupported term in source: {0}")]
    UnsupportedTerm(String),
    /// A term in predicate position is not an IRI.
    #[error("predicate must be an IRI, found {0}")]
    InvalidPredicate(Term),
}

/// A literal value with its datatype IRI and optional language tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    /// Lexical form.
    pub lexical: String,
    /// Full datatype IRI.
    pub datatype: String,
    /// Language tag for `rdf:langString` literals.
    pub language: Option<String>,
}

/// An RDF term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    /// A node identified by a full IRI.
    Iri(String),
    /// A graph-local anonymous node.
    BlankNode(String),
    /// A literal value.
    Literal(Literal),
}

impl Term {
    /// Creates an IRI term.
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(iri.into())
    }

    /// Creates an `xsd:integer` literal.
    #[must_use]
    pub fn integer(value: i64) -> Self {
        Term::Literal(Literal {
            lexical: value.to_string(),
            datatype: XSD_INTEGER.to_owned(),
            language: None,
        })
    }

    /// Creates an `xsd:string` literal.
    pub fn string(value: impl Into<String>) -> Self {
        Term::Literal(Literal {
            lexical: value.into(),
            datatype: XSD_STRING.to_owned(),
            language: None,
        })
    }

    /// Returns the IRI if this term is an IRI.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns the integer value of an `xsd:integer` literal.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Term::Literal(lit) if lit.datatype == XSD_INTEGER => lit.lexical.parse().ok(),
            _ => None,
        }
    }

    /// Returns true for blank nodes.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{iri}>"),
            Term::BlankNode(id) => write!(f, "_:{id}"),
            Term::Literal(lit) => match &lit.language {
                Some(lang) => write!(f, "{:?}@{}", lit.lexical, lang),
                None => write!(f, "{:?}^^<{}>", lit.lexical, lit.datatype),
            },
        }
    }
}

/// A subject–predicate–object statement. The predicate is always an IRI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    /// Subject (IRI or blank node).
    pub subject: Term,
    /// Predicate IRI.
    pub predicate: String,
    /// Object.
    pub object: Term,
}

impl Triple {
    /// Creates a triple.
    pub fn new(subject: Term, predicate: impl Into<String>, object: Term) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }
}

/// Facts staged for a single atomic write.
#[derive(Debug, Default)]
pub struct Patch {
    triples: Vec<Triple>,
}

impl Patch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages one triple.
    pub fn add(&mut self, subject: Term, predicate: &str, object: Term) {
        self.triples.push(Triple::new(subject, predicate, object));
    }

    /// Stages an `rdf:List` holding `items` in order and returns its head.
    ///
    /// The list cells are fresh blank nodes minted from `graph`; an empty
    /// list is `rdf:nil`.
    pub fn add_list(&mut self, graph: &mut Graph, items: impl IntoIterator<Item = Term>) -> Term {
        let items: Vec<Term> = items.into_iter().collect();
        let cells: Vec<Term> = items.iter().map(|_| graph.fresh_blank_node()).collect();
        let nil = Term::iri(RDF_NIL);
        for (i, (cell, item)) in cells.iter().zip(items).enumerate() {
            self.add(cell.clone(), RDF_FIRST, item);
            let rest = cells.get(i + 1).cloned().unwrap_or_else(|| nil.clone());
            self.add(cell.clone(), RDF_REST, rest);
        }
        cells.into_iter().next().unwrap_or(nil)
    }

    /// Returns the staged triples.
    #[must_use]
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// Returns the number of staged triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true if nothing is staged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}

/// An in-memory RDF graph with subject+predicate and predicate+object indices.
#[derive(Debug, Default)]
pub struct Graph {
    triples: Vec<Triple>,
    seen: HashSet<Triple>,
    by_subject: HashMap<(Term, String), Vec<usize>>,
    by_object: HashMap<(String, Term), Vec<usize>>,
    next_blank: u64,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true if the graph holds no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterates over all triples in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Inserts a triple. Returns false if it was already present.
    pub fn insert(&mut self, triple: Triple) -> bool {
        if self.seen.contains(&triple) {
            return false;
        }
        let idx = self.triples.len();
        self.by_subject
            .entry((triple.subject.clone(), triple.predicate.clone()))
            .or_default()
            .push(idx);
        self.by_object
            .entry((triple.predicate.clone(), triple.object.clone()))
            .or_default()
            .push(idx);
        self.seen.insert(triple.clone());
        self.triples.push(triple);
        true
    }

    /// Convenience wrapper around [`Graph::insert`].
    pub fn add(&mut self, subject: Term, predicate: &str, object: Term) -> bool {
        self.insert(Triple::new(subject, predicate, object))
    }

    /// Commits every staged triple of `patch`. Returns how many were new.
    pub fn apply(&mut self, patch: Patch) -> usize {
        let mut added = 0;
        for triple in patch.triples {
            if self.insert(triple) {
                added += 1;
            }
        }
        added
    }

    /// Returns true if the exact triple is present.
    #[must_use]
    pub fn contains(&self, subject: &Term, predicate: &str, object: &Term) -> bool {
        self.seen
            .contains(&Triple::new(subject.clone(), predicate, object.clone()))
    }

    /// Returns the objects of `subject predicate ?o`, in insertion order.
    pub fn objects<'g>(
        &'g self,
        subject: &Term,
        predicate: &str,
    ) -> impl Iterator<Item = &'g Term> + 'g {
        self.by_subject
            .get(&(subject.clone(), predicate.to_owned()))
            .into_iter()
            .flatten()
            .map(move |&i| &self.triples[i].object)
    }

    /// Returns the subjects of `?s predicate object`, in insertion order.
    pub fn subjects<'g>(
        &'g self,
        predicate: &str,
        object: &Term,
    ) -> impl Iterator<Item = &'g Term> + 'g {
        self.by_object
            .get(&(predicate.to_owned(), object.clone()))
            .into_iter()
            .flatten()
            .map(move |&i| &self.triples[i].subject)
    }

    /// Mints a new graph-local blank node.
    pub fn fresh_blank_node(&mut self) -> Term {
        let id = format!("b{}", self.next_blank);
        self.next_blank += 1;
        Term::BlankNode(id)
    }

    /// Reads the `rdf:List` starting at `head`.
    ///
    /// Returns `None` if the chain is malformed: a cell without exactly one
    /// `rdf:first` and one `rdf:rest`, or a cycle.
    #[must_use]
    pub fn list_items(&self, head: &Term) -> Option<Vec<Term>> {
        let nil = Term::iri(RDF_NIL);
        let mut items = Vec::new();
        let mut visited = HashSet::new();
        let mut cell = head.clone();
        while cell != nil {
            if !visited.insert(cell.clone()) {
                return None;
            }
            let first = single(self.objects(&cell, RDF_FIRST))?;
            let rest = single(self.objects(&cell, RDF_REST))?;
            items.push(first.clone());
            cell = rest.clone();
        }
        Some(items)
    }
}

fn single<'g>(mut iter: impl Iterator<Item = &'g Term>) -> Option<&'g Term> {
    let first = iter.next()?;
    match iter.next() {
        Some(_) => None,
        None => Some(first),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ex(name: &str) -> Term {
        Term::iri(format!("https://example.org/robot#{name}"))
    }

    const P: &str = "https://example.org/robot#p";

    #[test]
    fn insert_has_set_semantics() {
        let mut g = Graph::new();
        assert!(g.add(ex("a"), P, ex("b")));
        assert!(!g.add(ex("a"), P, ex("b")));
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn indices_answer_both_directions() {
        let mut g = Graph::new();
        g.add(ex("a"), P, ex("b"));
        g.add(ex("a"), P, ex("c"));
        g.add(ex("d"), P, ex("c"));
        let objs: Vec<_> = g.objects(&ex("a"), P).cloned().collect();
        assert_eq!(objs, vec![ex("b"), ex("c")]);
        let subs: Vec<_> = g.subjects(P, &ex("c")).cloned().collect();
        assert_eq!(subs, vec![ex("a"), ex("d")]);
        assert_eq!(g.objects(&ex("z"), P).count(), 0);
    }

    #[test]
    fn patch_is_invisible_until_applied() {
        let mut g = Graph::new();
        let mut patch = Patch::new();
        patch.add(ex("a"), P, ex("b"));
        let head = patch.add_list(&mut g, [Term::integer(1), Term::integer(0)]);
        assert!(g.is_empty());
        assert_eq!(patch.len(), 5);
        assert_eq!(g.apply(patch), 5);
        assert!(g.contains(&ex("a"), P, &ex("b")));
        assert_eq!(
            g.list_items(&head),
            Some(vec![Term::integer(1), Term::integer(0)])
        );
    }

    #[test]
    fn empty_list_is_nil() {
        let mut g = Graph::new();
        let mut patch = Patch::new();
        let head = patch.add_list(&mut g, Vec::new());
        assert_eq!(head, Term::iri(RDF_NIL));
        assert!(patch.is_empty());
        assert_eq!(g.list_items(&head), Some(vec![]));
    }

    #[test]
    fn fresh_blank_nodes_are_distinct() {
        let mut g = Graph::new();
        let a = g.fresh_blank_node();
        let b = g.fresh_blank_node();
        assert!(a.is_blank());
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_list_is_rejected() {
        let mut g = Graph::new();
        let cell = g.fresh_blank_node();
        g.add(cell.clone(), RDF_FIRST, Term::integer(1));
        assert_eq!(g.list_items(&cell), None);
        g.add(cell.clone(), RDF_REST, cell.clone());
        assert_eq!(g.list_items(&cell), None);
    }

    #[test]
    fn integer_literals_read_back() {
        assert_eq!(Term::integer(7).as_integer(), Some(7));
        assert_eq!(Term::string("7").as_integer(), None);
        assert_eq!(ex("a").as_iri(), Some("https://example.org/robot#a"));
    }
}
