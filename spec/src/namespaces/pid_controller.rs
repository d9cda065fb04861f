//! `pid_controller#` namespace: PID controller class.

use crate::model::iris::*;
use crate::model::{Class, Namespace, NamespaceModule};

/// `pid-controller:PIDController`.
pub const PID_CONTROLLER: &str =
    "https://secorolab.github.io/metamodels/controllers/pid_controller#PIDController";

/// Returns the `pid_controller#` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: "pid-controller",
            iri: NS_PID_CONTROLLER,
            label: "PID Controller",
            comment: "Proportional-integral-derivative controllers.",
        },
        classes: vec![Class {
            id: PID_CONTROLLER,
            label: "PIDController",
            comment: "A controller with proportional, integral and derivative gains \
                      acting on the error of one constraint.",
        }],
        properties: vec![],
    }
}
