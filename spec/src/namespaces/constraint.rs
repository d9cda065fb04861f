//! `constraint#` namespace: motion constraints.

use crate::model::iris::*;
use crate::model::{Namespace, NamespaceModule, Property};

/// `constraint:quantity`: the coordinate a constraint targets.
pub const QUANTITY: &str = "https://secorolab.github.io/metamodels/constraints/constraint#quantity";

/// Returns the `constraint#` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: "constraint",
            iri: NS_CONSTRAINT,
            label: "Constraint",
            comment: "Constraints on coordinates, monitored and enforced by controllers.",
        },
        classes: vec![],
        properties: vec![Property {
            id: QUANTITY,
            label: "quantity",
            comment: "The coordinate whose value the constraint restricts.",
            domain: None,
        }],
    }
}
