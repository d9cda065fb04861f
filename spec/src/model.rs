//! Core vocabulary model types.
//!
//! These types represent the motion specification vocabulary as typed Rust
//! data. All instances are built as owned `Vec`s and referenced via borrows.
//! The top-level entry point is [`Vocabulary::full()`](crate::Vocabulary::full).

/// A vocabulary namespace (e.g., `controller#`, `embed-map#`).
#[derive(Debug, Clone)]
pub struct Namespace {
    /// The prefix used in Turtle output (e.g., `"controller"`).
    pub prefix: &'static str,
    /// The full IRI of the namespace, including the trailing separator.
    pub iri: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Description of the namespace.
    pub comment: &'static str,
}

/// A class defined by the vocabulary.
#[derive(Debug, Clone)]
pub struct Class {
    /// Full IRI (e.g., `"https://comp-rob2b.github.io/metamodels/geometry/coordinates#PositionCoordinate"`).
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Description.
    pub comment: &'static str,
}

/// A relation defined by the vocabulary.
#[derive(Debug, Clone)]
pub struct Property {
    /// Full IRI.
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Description.
    pub comment: &'static str,
    /// Full IRI of the domain class, or `None` if unspecified.
    pub domain: Option<&'static str>,
}

/// A complete namespace module: namespace metadata + classes + properties.
#[derive(Debug, Clone)]
pub struct NamespaceModule {
    /// Namespace metadata.
    pub namespace: Namespace,
    /// All classes defined in this namespace.
    pub classes: Vec<Class>,
    /// All properties defined in this namespace.
    pub properties: Vec<Property>,
}

/// The complete vocabulary the generator matches against.
#[derive(Debug)]
pub struct Vocabulary {
    /// Vocabulary version.
    pub version: &'static str,
    /// All namespace modules.
    pub namespaces: Vec<NamespaceModule>,
}

impl Vocabulary {
    /// Looks up a class by its full IRI. Returns `None` if not found.
    #[must_use]
    pub fn find_class(&self, iri: &str) -> Option<&Class> {
        self.namespaces
            .iter()
            .flat_map(|m| m.classes.iter())
            .find(|c| c.id == iri)
    }

    /// Looks up a property by its full IRI. Returns `None` if not found.
    #[must_use]
    pub fn find_property(&self, iri: &str) -> Option<&Property> {
        self.namespaces
            .iter()
            .flat_map(|m| m.properties.iter())
            .find(|p| p.id == iri)
    }

    /// Returns the namespace whose IRI is the longest prefix of `iri`.
    #[must_use]
    pub fn namespace_for(&self, iri: &str) -> Option<&Namespace> {
        self.namespaces
            .iter()
            .map(|m| &m.namespace)
            .filter(|ns| iri.starts_with(ns.iri))
            .max_by_key(|ns| ns.iri.len())
    }

    /// Returns the total number of classes across all namespaces.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.namespaces.iter().map(|m| m.classes.len()).sum()
    }

    /// Returns the total number of properties across all namespaces.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.namespaces.iter().map(|m| m.properties.len()).sum()
    }
}

/// Splits an IRI into its namespace part and its local name.
///
/// The split happens after the last `#`, `/` or `:`, so
/// `"https://example.org/robot#ctrl1"` yields `("https://example.org/robot#", "ctrl1")`
/// and `"ns:ctrl1"` yields `("ns:", "ctrl1")`. An IRI without any separator is
/// returned whole as the local name.
#[must_use]
pub fn split_iri(iri: &str) -> (&str, &str) {
    match iri.rfind(['#', '/', ':']) {
        Some(pos) => iri.split_at(pos + 1),
        None => ("", iri),
    }
}

/// Returns the local name of an IRI (see [`split_iri`]).
#[must_use]
pub fn local_name(iri: &str) -> &str {
    split_iri(iri).1
}

/// Standard IRI constants shared by the graph store and the serializers.
pub mod iris {
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdf:first`.
    pub const RDF_FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";
    /// `rdf:rest`.
    pub const RDF_REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";
    /// `rdf:nil`.
    pub const RDF_NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
    /// `rdf:langString`.
    pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

    /// `xsd:string`.
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `xsd:integer`.
    pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    // Vocabulary namespace IRIs
    /// Generic controller relations.
    pub const NS_CONTROLLER: &str = "https://secorolab.github.io/metamodels/controllers/controller#";
    /// PID controller classes.
    pub const NS_PID_CONTROLLER: &str =
        "https://secorolab.github.io/metamodels/controllers/pid_controller#";
    /// Constraint relations.
    pub const NS_CONSTRAINT: &str = "https://secorolab.github.io/metamodels/constraints/constraint#";
    /// Geometric coordinate classes.
    pub const NS_GEOM_COORD: &str = "https://comp-rob2b.github.io/metamodels/geometry/coordinates#";
    /// Embedding-map relations.
    pub const NS_EMBED_MAP: &str = "https://secorolab.github.io/metamodels/embed_map#";
    /// ACHD solver relations.
    pub const NS_ACHD_SOLVER: &str = "https://secorolab.github.io/metamodels/solvers/achd_solver#";
}
