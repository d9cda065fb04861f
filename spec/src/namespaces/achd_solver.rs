//! `achd_solver#` namespace: inputs of the acceleration-constrained hybrid
//! dynamics solver.

use crate::model::iris::*;
use crate::model::{Namespace, NamespaceModule, Property};

/// `achd-solver:acceleration-energy`.
pub const ACCELERATION_ENERGY: &str =
    "https://secorolab.github.io/metamodels/solvers/achd_solver#acceleration-energy";
/// `achd-solver:external-wrench`.
pub const EXTERNAL_WRENCH: &str =
    "https://secorolab.github.io/metamodels/solvers/achd_solver#external-wrench";

/// Returns the `achd_solver#` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: "achd-solver",
            iri: NS_ACHD_SOLVER,
            label: "ACHD Solver",
            comment: "Input slots of the acceleration-constrained hybrid dynamics solver.",
        },
        classes: vec![],
        properties: vec![
            Property {
                id: ACCELERATION_ENERGY,
                label: "acceleration-energy",
                comment: "Variable contributing an acceleration-energy term along the \
                          constrained directions.",
                domain: None,
            },
            Property {
                id: EXTERNAL_WRENCH,
                label: "external-wrench",
                comment: "Variable contributing an external wrench on a segment.",
                domain: None,
            },
        ],
    }
}
