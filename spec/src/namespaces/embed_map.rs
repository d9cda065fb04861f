//! `embed_map#` namespace: association of a controller with a solver.
//!
//! An embedding map is the linking node through which a controller's signal
//! enters a solver: it names both ends and, once annotated, the direction
//! vector, the input signal and the output variable.

use crate::model::iris::*;
use crate::model::{Class, Namespace, NamespaceModule, Property};

/// `embed-map:EmbedMap`.
pub const EMBED_MAP: &str = "https://secorolab.github.io/metamodels/embed_map#EmbedMap";
/// `embed-map:controller`: the controller end of the map.
pub const CONTROLLER: &str = "https://secorolab.github.io/metamodels/embed_map#controller";
/// `embed-map:solver`: the solver end of the map.
pub const SOLVER: &str = "https://secorolab.github.io/metamodels/embed_map#solver";
/// `embed-map:vector`: the 6-component direction vector (an `rdf:List`).
pub const VECTOR: &str = "https://secorolab.github.io/metamodels/embed_map#vector";
/// `embed-map:input`: the controller signal fed through the map.
pub const INPUT: &str = "https://secorolab.github.io/metamodels/embed_map#input";
/// `embed-map:output-acceleration-energy`.
pub const OUTPUT_ACCELERATION_ENERGY: &str =
    "https://secorolab.github.io/metamodels/embed_map#output-acceleration-energy";
/// `embed-map:output-external-wrench`.
pub const OUTPUT_EXTERNAL_WRENCH: &str =
    "https://secorolab.github.io/metamodels/embed_map#output-external-wrench";

/// Returns the `embed_map#` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: "embed-map",
            iri: NS_EMBED_MAP,
            label: "Embedding Map",
            comment: "Maps controller signals onto solver inputs.",
        },
        classes: vec![Class {
            id: EMBED_MAP,
            label: "EmbedMap",
            comment: "Associates exactly one controller with exactly one solver.",
        }],
        properties: vec![
            Property {
                id: CONTROLLER,
                label: "controller",
                comment: "The controller whose output is embedded.",
                domain: Some(EMBED_MAP),
            },
            Property {
                id: SOLVER,
                label: "solver",
                comment: "The solver receiving the embedded output.",
                domain: Some(EMBED_MAP),
            },
            Property {
                id: VECTOR,
                label: "vector",
                comment: "Ordered list of six 0/1 flags: linear x, y, z then angular x, y, z.",
                domain: Some(EMBED_MAP),
            },
            Property {
                id: INPUT,
                label: "input",
                comment: "The controller signal consumed by the map.",
                domain: Some(EMBED_MAP),
            },
            Property {
                id: OUTPUT_ACCELERATION_ENERGY,
                label: "output-acceleration-energy",
                comment: "Solver variable receiving the signal as an acceleration-energy term.",
                domain: Some(EMBED_MAP),
            },
            Property {
                id: OUTPUT_EXTERNAL_WRENCH,
                label: "output-external-wrench",
                comment: "Solver variable receiving the signal as an external wrench.",
                domain: Some(EMBED_MAP),
            },
        ],
    }
}
