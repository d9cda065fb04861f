//! `controller#` namespace: relations shared by every controller kind.

use crate::model::iris::*;
use crate::model::{Namespace, NamespaceModule, Property};

/// `controller:constraint`: the constraint a controller enforces.
pub const CONSTRAINT: &str = "https://secorolab.github.io/metamodels/controllers/controller#constraint";
/// `controller:signal`: the signal a controller produces.
pub const SIGNAL: &str = "https://secorolab.github.io/metamodels/controllers/controller#signal";

/// Returns the `controller#` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: "controller",
            iri: NS_CONTROLLER,
            label: "Controller",
            comment: "Relations common to all controllers: the enforced constraint \
                      and the produced control signal.",
        },
        classes: vec![],
        properties: vec![
            Property {
                id: CONSTRAINT,
                label: "constraint",
                comment: "The constraint whose quantity the controller regulates.",
                domain: None,
            },
            Property {
                id: SIGNAL,
                label: "signal",
                comment: "The output signal computed by the controller.",
                domain: None,
            },
        ],
    }
}
